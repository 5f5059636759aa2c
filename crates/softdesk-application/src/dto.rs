//! Data Transfer Objects (DTOs) for layer boundary crossing
//!
//! Commands carry already-parsed input into the services; views carry
//! presentation-safe snapshots back out. Password hashes never leave the
//! service layer.

pub mod comment;
pub mod issue;
pub mod project;
pub mod user;

pub use comment::*;
pub use issue::*;
pub use project::*;
pub use user::*;

use serde::{Deserialize, Serialize};
use softdesk_permissions::Action;

use crate::errors::{ApplicationError, ApplicationResult};

/// Full replacement (PUT) or partial update (PATCH)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateMode {
    Full,
    Partial,
}

impl UpdateMode {
    pub fn action(&self) -> Action {
        match self {
            UpdateMode::Full => Action::Update,
            UpdateMode::Partial => Action::PartialUpdate,
        }
    }

    /// A full update must supply every required field
    pub(crate) fn require<T>(&self, field: &str, value: &Option<T>) -> ApplicationResult<()> {
        if *self == UpdateMode::Full && value.is_none() {
            return Err(ApplicationError::validation(field, "This field is required."));
        }
        Ok(())
    }
}
