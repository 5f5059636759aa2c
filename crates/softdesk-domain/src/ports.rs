//! Ports to external collaborators

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{entities::User, errors::DomainResult, value_objects::UserId};

/// Bearer credential handed out after a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Identity provider: owns password hashing and token issuance.
///
/// Implementations must never store or return the raw password.
pub trait IdentityProvider: Send + Sync {
    /// Reject passwords that fail the provider's policy
    fn validate_password(&self, raw: &str) -> DomainResult<()>;

    fn hash_password(&self, raw: &str) -> DomainResult<String>;

    /// `false` on mismatch or on a malformed hash
    fn verify_password(&self, raw: &str, hash: &str) -> bool;

    fn issue_token(&self, user: &User) -> DomainResult<AccessToken>;

    /// Resolve a bearer token back to its user
    fn verify_token(&self, token: &str) -> DomainResult<UserId>;
}
