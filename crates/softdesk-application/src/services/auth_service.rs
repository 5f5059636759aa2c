//! Authentication: credentials to bearer tokens, and tokens back to actors

use std::sync::Arc;

use softdesk_domain::{IdentityProvider, Store, User};
use softdesk_permissions::Actor;

use crate::dto::{LoginCommand, TokenDto, UserDto};
use crate::errors::{ApplicationError, ApplicationResult};

pub struct AuthService {
    store: Arc<dyn Store>,
    identity: Arc<dyn IdentityProvider>,
}

impl AuthService {
    pub fn new(store: Arc<dyn Store>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { store, identity }
    }

    /// The actor behind a username/password pair, if the pair is valid
    pub async fn authenticate(&self, username: &str, password: &str) -> ApplicationResult<Option<Actor>> {
        Ok(self
            .verify_credentials(username, password)
            .await?
            .as_ref()
            .map(Actor::from))
    }

    /// Exchange credentials for a bearer token
    pub async fn login(&self, cmd: LoginCommand) -> ApplicationResult<TokenDto> {
        let Some(user) = self.verify_credentials(&cmd.username, &cmd.password).await? else {
            tracing::warn!(username = %cmd.username, "Failed login attempt");
            return Err(ApplicationError::NotAuthenticated);
        };

        let token = self.identity.issue_token(&user)?;
        tracing::info!(user = %user.id(), "User logged in");
        Ok(TokenDto {
            access_token: token.token,
            token_type: "Bearer".to_string(),
            expires_at: token.expires_at,
            user: UserDto::from_domain(&user),
        })
    }

    /// Resolve a bearer token. The admin flag comes from the stored account,
    /// not from the token claims.
    pub async fn actor_for_token(&self, token: &str) -> ApplicationResult<Actor> {
        let user_id = self.identity.verify_token(token)?;
        let user = self
            .store
            .find_user(user_id)
            .await?
            .ok_or(ApplicationError::NotAuthenticated)?;
        Ok(Actor::from(&user))
    }

    async fn verify_credentials(&self, username: &str, password: &str) -> ApplicationResult<Option<User>> {
        let Some(user) = self.store.find_user_by_username(username).await? else {
            return Ok(None);
        };
        if self.identity.verify_password(password, user.password_hash()) {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}
