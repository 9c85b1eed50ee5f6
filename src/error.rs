//! Error types for forgeboard.
//!
//! Uses thiserror for derive macros. Only failures that make a result unusable
//! are errors; degraded enrichment and malformed hunk headers are reported as
//! plain values by the modules that detect them.

use crate::exit_codes;
use crate::model::EntityKind;
use crate::provider::ProviderKind;
use thiserror::Error;

/// Main error type for forgeboard operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForgeError {
    /// A provider item lacks a required field, or the field has the wrong type.
    ///
    /// Fatal for that item only. `item` is a compact rendering of the raw item.
    #[error("{provider} {entity} is missing required field `{field}`: {item}")]
    ProviderSchema {
        provider: ProviderKind,
        entity: EntityKind,
        field: String,
        item: String,
    },

    /// The primary payload is unusable (error object, wrong shape, bad project reference).
    #[error("{provider} request failed: {message}")]
    Provider {
        provider: ProviderKind,
        message: String,
    },

    /// An unrecognized time-range or event-type token.
    #[error("invalid filter: {0}")]
    FilterValidation(String),

    /// User provided invalid arguments, input files, or configuration.
    #[error("{0}")]
    UserError(String),
}

impl ForgeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ForgeError::ProviderSchema { .. } => exit_codes::SCHEMA_FAILURE,
            ForgeError::Provider { .. } => exit_codes::PROVIDER_FAILURE,
            ForgeError::FilterValidation(_) => exit_codes::USER_ERROR,
            ForgeError::UserError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for forgeboard operations.
pub type Result<T> = std::result::Result<T, ForgeError>;
