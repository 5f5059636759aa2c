//! `IdentityProvider` implementation backed by Argon2id and HS256 tokens

use chrono::Duration;
use softdesk_domain::{AccessToken, DomainResult, IdentityProvider, User, UserId};

use crate::{
    password::{PasswordHasherService, PasswordPolicy},
    token::TokenSigner,
    Result,
};

/// Identity provider used by the services and the HTTP extractor
pub struct TokenIdentityProvider {
    policy: PasswordPolicy,
    hasher: PasswordHasherService,
    signer: TokenSigner,
}

impl TokenIdentityProvider {
    /// Build a provider with the default password policy
    pub fn new(secret: &[u8], token_ttl: Duration) -> Result<Self> {
        Self::with_policy(secret, token_ttl, PasswordPolicy::default())
    }

    pub fn with_policy(secret: &[u8], token_ttl: Duration, policy: PasswordPolicy) -> Result<Self> {
        Ok(Self {
            policy,
            hasher: PasswordHasherService::new(),
            signer: TokenSigner::new(secret, token_ttl)?,
        })
    }

    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }
}

impl IdentityProvider for TokenIdentityProvider {
    fn validate_password(&self, raw: &str) -> DomainResult<()> {
        Ok(self.policy.check(raw)?)
    }

    fn hash_password(&self, raw: &str) -> DomainResult<String> {
        Ok(self.hasher.hash(raw)?)
    }

    fn verify_password(&self, raw: &str, hash: &str) -> bool {
        self.hasher.verify(raw, hash)
    }

    fn issue_token(&self, user: &User) -> DomainResult<AccessToken> {
        let token = self.signer.issue(user)?;
        tracing::debug!(user = %user.id(), expires_at = %token.expires_at, "Issued access token");
        Ok(token)
    }

    fn verify_token(&self, token: &str) -> DomainResult<UserId> {
        Ok(self.signer.subject(token)?)
    }
}
