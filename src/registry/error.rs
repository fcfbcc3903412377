//! Registry error types.

use super::types::BoxError;

/// Errors returned by [`InstanceRegistry`](super::InstanceRegistry).
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("instance not found: alias={alias:?}")]
    NotFound { alias: String },

    #[error("failed to destroy instance: alias={alias:?}")]
    Destroy {
        alias: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to clear {failed} instances")]
    Clear {
        failed: usize,
        errors: Vec<RegistryError>,
    },
}

impl RegistryError {
    /// Returns `true` for [`RegistryError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display() {
        let err = RegistryError::NotFound {
            alias: "db-1".into(),
        };
        assert_eq!(err.to_string(), r#"instance not found: alias="db-1""#);
        assert!(err.is_not_found());
    }

    #[test]
    fn test_destroy_source() {
        let err = RegistryError::Destroy {
            alias: "db-1".into(),
            source: "socket already closed".into(),
        };
        assert!(!err.is_not_found());
        assert_eq!(
            err.source().map(|s| s.to_string()).as_deref(),
            Some("socket already closed")
        );
    }

    #[test]
    fn test_clear_display() {
        let err = RegistryError::Clear {
            failed: 2,
            errors: Vec::new(),
        };
        assert_eq!(err.to_string(), "failed to clear 2 instances");
    }
}
