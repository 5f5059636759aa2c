//! Contributor entity: a user's membership record

use serde::{Deserialize, Serialize};

use crate::value_objects::{ContributorId, UserId};

/// Binds exactly one user to project membership.
///
/// The store keeps at most one contributor per user; projects and issues
/// reference it by [`ContributorId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    id: ContributorId,
    user: UserId,
}

impl Contributor {
    pub fn new(id: ContributorId, user: UserId) -> Self {
        Self { id, user }
    }

    pub fn id(&self) -> ContributorId {
        self.id
    }

    pub fn user(&self) -> UserId {
        self.user
    }
}
