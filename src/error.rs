//! Error types for Permpack
//!
//! Both variants are integration defects in the caller, never authorization
//! outcomes: a missing grant or absent claims is always a normal `Ok(false)`
//! from the evaluator, while a malformed identifier or an unrecognized
//! permission string propagates as an error so guard bugs surface instead
//! of reading as a denial.

use thiserror::Error;

/// The main error type for Permpack operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PermpackError {
    /// A resource-scoped operation was given something other than a full
    /// 36-character UUID or the wildcard marker.
    #[error("invalid resource identifier: {}", .id.as_deref().unwrap_or("<missing>"))]
    InvalidIdentifier {
        /// The offending identifier, or `None` when it was absent entirely.
        id: Option<String>,
    },

    /// A permission string outside the recognized taxonomy, including any
    /// unrecognized scope prefix.
    #[error("unknown permission: {permission}")]
    UnknownPermission {
        /// The offending permission string.
        permission: String,
    },
}

/// Result type alias for Permpack operations
pub type Result<T> = std::result::Result<T, PermpackError>;
