//! Application layer error types
//!
//! These errors are what the transport layer sees. Domain and store failures
//! are folded into this taxonomy; authorization denials never carry detail.

use softdesk_domain::DomainError;
use softdesk_permissions::Actor;
use thiserror::Error;

/// Application layer result type
pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Application layer errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplicationError {
    /// Field-level input failure; nothing was persisted
    #[error("Validation failed: {field} - {reason}")]
    ValidationFailed { field: String, reason: String },

    /// Missing, invalid or expired credentials
    #[error("Authentication credentials were not provided or are invalid.")]
    NotAuthenticated,

    /// Authenticated, but the policy denied the action
    #[error("You do not have permission to perform this action.")]
    PermissionDenied,

    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// The error a denied request surfaces as: anonymous callers are asked to
    /// authenticate, everyone else is refused
    pub fn denied(actor: &Actor) -> Self {
        if actor.is_authenticated() {
            Self::PermissionDenied
        } else {
            Self::NotAuthenticated
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ValidationError { field, reason } => {
                ApplicationError::ValidationFailed { field, reason }
            }
            DomainError::EntityNotFound { entity_type, id } => ApplicationError::NotFound {
                entity: entity_type,
                id,
            },
            DomainError::InvalidCredentials { .. } => ApplicationError::NotAuthenticated,
            DomainError::ConcurrencyConflict { resource } => {
                ApplicationError::RepositoryError(format!("concurrent update of {resource}"))
            }
            DomainError::BusinessRuleViolation { rule } => ApplicationError::Internal(rule),
        }
    }
}

#[cfg(test)]
mod tests {
    use softdesk_domain::UserId;

    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ApplicationError::validation("name", "This field may not be blank.");
        assert_eq!(err.to_string(), "Validation failed: name - This field may not be blank.");
    }

    #[test]
    fn test_domain_error_conversion() {
        let app_err: ApplicationError = DomainError::validation("contributor", "not a member").into();
        assert!(matches!(app_err, ApplicationError::ValidationFailed { ref field, .. } if field == "contributor"));

        let app_err: ApplicationError = DomainError::not_found("Project", 3).into();
        assert_eq!(app_err, ApplicationError::not_found("Project", 3));

        let app_err: ApplicationError = DomainError::InvalidCredentials {
            reason: "expired".into(),
        }
        .into();
        assert_eq!(app_err, ApplicationError::NotAuthenticated);
    }

    #[test]
    fn test_denied_depends_on_actor() {
        assert_eq!(ApplicationError::denied(&Actor::Anonymous), ApplicationError::NotAuthenticated);
        assert_eq!(
            ApplicationError::denied(&Actor::user(UserId::new(1))),
            ApplicationError::PermissionDenied
        );
    }
}
