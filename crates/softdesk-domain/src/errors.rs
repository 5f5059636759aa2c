//! Domain errors for SoftDesk

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Validation error: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("Entity not found: {entity_type} with id {id}")]
    EntityNotFound { entity_type: String, id: String },

    #[error("Business rule violation: {rule}")]
    BusinessRuleViolation { rule: String },

    #[error("Concurrency conflict: {resource}")]
    ConcurrencyConflict { resource: String },

    #[error("Invalid credentials: {reason}")]
    InvalidCredentials { reason: String },
}

impl DomainError {
    /// Field-level validation failure
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Missing entity
    pub fn not_found(entity_type: impl Into<String>, id: impl ToString) -> Self {
        Self::EntityNotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_names_field() {
        let err = DomainError::validation("name", "Project with this name already exist");
        assert_eq!(
            err.to_string(),
            "Validation error: name - Project with this name already exist"
        );
    }

    #[test]
    fn test_not_found_display() {
        let err = DomainError::not_found("Project", 42);
        assert_eq!(err.to_string(), "Entity not found: Project with id 42");
    }
}
