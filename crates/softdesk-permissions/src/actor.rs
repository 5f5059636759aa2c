//! The identity issuing a request

use softdesk_domain::{User, UserId};

/// Authenticated or anonymous request identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Anonymous,
    Authenticated { user_id: UserId, is_admin: bool },
}

impl Actor {
    pub fn user(user_id: UserId) -> Self {
        Actor::Authenticated {
            user_id,
            is_admin: false,
        }
    }

    pub fn admin(user_id: UserId) -> Self {
        Actor::Authenticated {
            user_id,
            is_admin: true,
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Actor::Anonymous => None,
            Actor::Authenticated { user_id, .. } => Some(*user_id),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Actor::Authenticated { .. })
    }

    /// Admin and staff are one capability
    pub fn is_admin(&self) -> bool {
        matches!(self, Actor::Authenticated { is_admin: true, .. })
    }

    /// True when the actor is `user` or an admin
    pub fn is_self_or_admin(&self, user: UserId) -> bool {
        match self {
            Actor::Anonymous => false,
            Actor::Authenticated { user_id, is_admin } => *is_admin || *user_id == user,
        }
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Actor::Authenticated {
            user_id: user.id(),
            is_admin: user.is_admin(),
        }
    }
}
