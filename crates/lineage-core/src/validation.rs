//! Parameter validation applied before any lineage work is done

use crate::error::{Error, Result};

/// Name reported for guid parameters
pub const GUID_PARAMETER: &str = "guid";

/// Validates identifiers handed to lineage operations
pub trait IdentifierValidator: Send + Sync {
    /// Fail with [`Error::InvalidIdentifier`] when `guid` is unusable
    fn validate_guid(&self, guid: &str, parameter_name: &str, method_name: &str) -> Result<()>;
}

/// Default validator: a guid must contain something other than whitespace
#[derive(Debug, Clone, Copy, Default)]
pub struct InvalidParameterHandler;

impl InvalidParameterHandler {
    pub fn new() -> Self {
        Self
    }
}

impl IdentifierValidator for InvalidParameterHandler {
    fn validate_guid(&self, guid: &str, parameter_name: &str, method_name: &str) -> Result<()> {
        if guid.trim().is_empty() {
            tracing::debug!("Rejected empty {} in {}", parameter_name, method_name);
            return Err(Error::InvalidIdentifier {
                parameter: parameter_name.to_string(),
                method: method_name.to_string(),
            });
        }
        Ok(())
    }
}
