//! Lineage-qualified classification vocabulary

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Classifications carried into lineage unless configured otherwise
pub const DEFAULT_QUALIFIED_CLASSIFICATIONS: &[&str] = &[
    "AssetZoneMembership",
    "SubjectArea",
    "Confidentiality",
    "Confidence",
    "Criticality",
    "Retention",
    "AssetOwnership",
];

/// The set of classification names significant for lineage
///
/// Names match exactly, including case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct QualifiedClassifications {
    names: HashSet<String>,
}

impl QualifiedClassifications {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether a classification name is lineage-qualified
    pub fn is_lineage_qualified(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Names in ascending order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for QualifiedClassifications {
    fn default() -> Self {
        Self::new(DEFAULT_QUALIFIED_CLASSIFICATIONS.iter().copied())
    }
}

impl<S: Into<String>> FromIterator<S> for QualifiedClassifications {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Vec<String>> for QualifiedClassifications {
    fn from(names: Vec<String>) -> Self {
        Self::new(names)
    }
}

impl From<QualifiedClassifications> for Vec<String> {
    fn from(vocabulary: QualifiedClassifications) -> Self {
        vocabulary.names().into_iter().map(String::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_vocabulary() {
        let vocabulary = QualifiedClassifications::default();
        assert_eq!(vocabulary.len(), DEFAULT_QUALIFIED_CLASSIFICATIONS.len());
        assert!(vocabulary.is_lineage_qualified("Confidentiality"));
        assert!(vocabulary.is_lineage_qualified("AssetZoneMembership"));
        assert!(!vocabulary.is_lineage_qualified("Comment"));
    }

    #[test]
    fn test_exact_match() {
        let vocabulary = QualifiedClassifications::new(["Confidentiality"]);
        assert!(!vocabulary.is_lineage_qualified("confidentiality"));
        assert!(!vocabulary.is_lineage_qualified("Confidentiality "));
        assert!(!vocabulary.is_lineage_qualified(""));
    }

    #[test]
    fn test_custom_and_empty_vocabularies() {
        let vocabulary: QualifiedClassifications = ["Memento", "Memento"].into_iter().collect();
        assert_eq!(vocabulary.len(), 1);
        assert!(vocabulary.is_lineage_qualified("Memento"));
        assert!(!vocabulary.is_lineage_qualified("Confidentiality"));

        let empty = QualifiedClassifications::new(Vec::<String>::new());
        assert!(empty.is_empty());
        assert!(!empty.is_lineage_qualified("Confidentiality"));
    }

    #[test]
    fn test_serde_as_sorted_list() {
        let vocabulary = QualifiedClassifications::new(["SubjectArea", "Confidentiality"]);
        let json = serde_json::to_string(&vocabulary).unwrap();
        assert_eq!(json, r#"["Confidentiality","SubjectArea"]"#);

        let parsed: QualifiedClassifications = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, vocabulary);
    }
}
