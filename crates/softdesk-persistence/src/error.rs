//! Persistence Layer Error Types

use softdesk_domain::DomainError;
use thiserror::Error;

/// Errors raised inside a store transaction
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Referenced row does not exist
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Unique constraint violated
    #[error("Unique constraint violated on {field}: {message}")]
    UniqueViolation { field: &'static str, message: String },

    /// Could not allocate a free identifier
    #[error("Concurrency conflict: {0}")]
    ConcurrencyConflict(String),
}

impl PersistenceError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn unique(field: &'static str, message: impl Into<String>) -> Self {
        Self::UniqueViolation {
            field,
            message: message.into(),
        }
    }
}

/// Convert persistence errors to domain errors
impl From<PersistenceError> for DomainError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::NotFound { entity_type, id } => DomainError::EntityNotFound {
                entity_type: entity_type.to_string(),
                id,
            },
            PersistenceError::UniqueViolation { field, message } => {
                DomainError::validation(field, message)
            }
            PersistenceError::ConcurrencyConflict(resource) => {
                DomainError::ConcurrencyConflict { resource }
            }
        }
    }
}
