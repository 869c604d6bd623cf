//! Error types for URDF emission.

use thiserror::Error;

use crate::diagnostic::Diagnostic;

/// Errors that can occur while building or writing a URDF tree.
#[derive(Error, Debug)]
pub enum UrdfError {
    /// A diagnostic rejected under the strict policy.
    #[error("rejected: {0}")]
    Rejected(#[from] Diagnostic),

    /// Writing XML text failed.
    #[error("XML write error: {0}")]
    XmlWrite(String),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for URDF operations.
pub type Result<T> = std::result::Result<T, UrdfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_wraps_diagnostic() {
        let err = UrdfError::from(Diagnostic::shape_mismatch("inertia", 6, 5));
        assert!(err.to_string().contains("inertia"));
        assert!(err.to_string().contains("should be 6 but 5"));
    }
}
