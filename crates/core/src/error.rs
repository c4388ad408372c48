//! Service error model.

use thiserror::Error;

/// Result type used across the service.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service-level error.
///
/// Every failure the service can surface to a caller falls into one of these
/// kinds. The HTTP layer maps each kind to a status code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The request payload was malformed or empty.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The service is missing something it needs on disk (e.g. the template).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Serialization or IO failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::Configuration(_) => "configuration_error",
            Self::NotFound(_) => "not_found",
            Self::Internal(_) => "internal_error",
        }
    }

    /// The message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(m) | Self::Configuration(m) | Self::NotFound(m) | Self::Internal(m) => m,
        }
    }
}

impl From<std::io::Error> for ServiceError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ServiceError::validation("x").code(), "validation_error");
        assert_eq!(ServiceError::configuration("x").code(), "configuration_error");
        assert_eq!(ServiceError::not_found("x").code(), "not_found");
        assert_eq!(ServiceError::internal("x").code(), "internal_error");
    }

    #[test]
    fn message_strips_kind_prefix() {
        let err = ServiceError::validation("items must be a non-empty list");
        assert_eq!(err.message(), "items must be a non-empty list");
        assert_eq!(err.to_string(), "validation failed: items must be a non-empty list");
    }

    #[test]
    fn io_errors_become_internal() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ServiceError = io.into();
        assert!(matches!(err, ServiceError::Internal(_)));
    }
}
