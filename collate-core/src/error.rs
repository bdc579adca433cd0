//! Error types for collection serialization

use thiserror::Error;

/// Collate error types
#[derive(Debug, Error)]
pub enum CollateError {
    /// Neither an explicit serializer nor the lookup context resolved a
    /// serializer for a resource in the collection.
    #[error("No serializer found for resource: {resource}")]
    NoSerializerFound {
        /// Human-readable description of the offending resource
        resource: String,
    },
    /// Options configuration could not be parsed.
    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, CollateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_serializer_found_message() {
        let err = CollateError::NoSerializerFound {
            resource: "Post { id: 7 }".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No serializer found for resource: Post { id: 7 }"
        );
    }

    #[test]
    fn test_invalid_options_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CollateError = json_err.into();
        assert!(matches!(err, CollateError::InvalidOptions(_)));
        assert!(err.to_string().starts_with("Invalid options:"));
    }
}
