//! Security-related error types

use softdesk_domain::DomainError;
use thiserror::Error;

/// Identity provider errors
#[derive(Error, Debug)]
pub enum SecurityError {
    #[error("Password hashing error: {message}")]
    Hashing { message: String },

    #[error("Token encoding error: {0}")]
    TokenEncoding(#[source] jsonwebtoken::errors::Error),

    #[error("Invalid token: {reason}")]
    InvalidToken { reason: String },

    #[error("Weak password: {reason}")]
    WeakPassword { reason: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl From<SecurityError> for DomainError {
    fn from(err: SecurityError) -> Self {
        match err {
            SecurityError::WeakPassword { reason } => DomainError::validation("password", reason),
            SecurityError::InvalidToken { reason } => DomainError::InvalidCredentials { reason },
            other => DomainError::BusinessRuleViolation {
                rule: other.to_string(),
            },
        }
    }
}

/// Result type for security operations
pub type Result<T> = std::result::Result<T, SecurityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weak_password_maps_to_field_error() {
        let err: DomainError = SecurityError::WeakPassword {
            reason: "This password is entirely numeric.".into(),
        }
        .into();
        assert_eq!(
            err,
            DomainError::validation("password", "This password is entirely numeric.")
        );
    }

    #[test]
    fn test_invalid_token_maps_to_credentials() {
        let err: DomainError = SecurityError::InvalidToken {
            reason: "expired".into(),
        }
        .into();
        assert!(matches!(err, DomainError::InvalidCredentials { .. }));
    }

    #[test]
    fn test_hashing_failure_is_internal() {
        let err: DomainError = SecurityError::Hashing {
            message: "salt".into(),
        }
        .into();
        assert!(matches!(err, DomainError::BusinessRuleViolation { .. }));
    }
}
