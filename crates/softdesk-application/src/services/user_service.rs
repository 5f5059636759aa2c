//! User Application Service
//!
//! Registration, account views and account updates. Users are never deleted.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use softdesk_domain::{IdentityProvider, NewUser, Store, User, UserChanges, UserId};
use softdesk_permissions::{Action, Actor, InstanceTarget, ProjectScope, ResourceKind};

use super::access::{enforce, require_authenticated};
use crate::dto::{RegisterUserCommand, UpdateMode, UpdateUserCommand, UserDto};
use crate::errors::{ApplicationError, ApplicationResult};

const PASSWORD_MISMATCH: &str = "Password fields didn't match.";

pub struct UserService {
    store: Arc<dyn Store>,
    identity: Arc<dyn IdentityProvider>,
}

impl UserService {
    pub fn new(store: Arc<dyn Store>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { store, identity }
    }

    /// Register an account. Open to anonymous callers.
    pub async fn register(&self, actor: &Actor, cmd: RegisterUserCommand) -> ApplicationResult<UserDto> {
        enforce(actor, ResourceKind::User, Action::Create, ProjectScope::Unresolved, None)?;
        let user = self.create_account(cmd, false).await?;
        tracing::info!(user = %user.id(), username = %user.username(), "User registered");
        Ok(UserDto::from_domain(&user))
    }

    /// All accounts, admin only
    pub async fn list(&self, actor: &Actor) -> ApplicationResult<Vec<UserDto>> {
        enforce(actor, ResourceKind::User, Action::List, ProjectScope::Unresolved, None)?;
        let mut users = self.store.list_users().await?;
        users.sort_by_key(|u| u.id());
        Ok(users.iter().map(UserDto::from_domain).collect())
    }

    pub async fn retrieve(&self, actor: &Actor, id: UserId) -> ApplicationResult<UserDto> {
        let user = self.load(actor, id, Action::Retrieve).await?;
        Ok(UserDto::from_domain(&user))
    }

    /// Update an account (self or admin). A new password must be confirmed
    /// and is re-hashed; a new birth date re-runs the age check.
    pub async fn update(
        &self,
        actor: &Actor,
        id: UserId,
        mode: UpdateMode,
        cmd: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        self.load(actor, id, mode.action()).await?;

        mode.require("username", &cmd.username)?;
        mode.require("password", &cmd.password)?;
        mode.require("password2", &cmd.password2)?;
        mode.require("birth_date", &cmd.birth_date)?;

        if let Some(username) = &cmd.username {
            User::validate_username(username)?;
        }
        let password_hash = match cmd.password {
            Some(password) => {
                self.identity.validate_password(&password)?;
                if cmd.password2.as_deref() != Some(password.as_str()) {
                    return Err(ApplicationError::validation("password", PASSWORD_MISMATCH));
                }
                Some(self.identity.hash_password(&password)?)
            }
            None => None,
        };
        if let Some(birth_date) = cmd.birth_date {
            User::validate_birth_date(birth_date, today())?;
        }

        let user = self
            .store
            .update_user(
                id,
                UserChanges {
                    username: cmd.username,
                    password_hash,
                    birth_date: cmd.birth_date,
                    can_be_contacted: cmd.can_be_contacted,
                    can_data_be_shared: cmd.can_data_be_shared,
                    is_admin: None,
                },
            )
            .await?;
        tracing::info!(user = %user.id(), ?mode, "User updated");
        Ok(UserDto::from_domain(&user))
    }

    /// Create the configured admin account, or promote an existing one
    pub async fn ensure_admin(
        &self,
        username: &str,
        password: &str,
        birth_date: NaiveDate,
    ) -> ApplicationResult<UserDto> {
        if let Some(existing) = self.store.find_user_by_username(username).await? {
            if existing.is_admin() {
                return Ok(UserDto::from_domain(&existing));
            }
            let promoted = self
                .store
                .update_user(
                    existing.id(),
                    UserChanges {
                        is_admin: Some(true),
                        ..Default::default()
                    },
                )
                .await?;
            tracing::info!(user = %promoted.id(), "Promoted existing user to admin");
            return Ok(UserDto::from_domain(&promoted));
        }

        let admin = self
            .create_account(
                RegisterUserCommand {
                    username: username.to_string(),
                    password: password.to_string(),
                    password2: password.to_string(),
                    birth_date,
                    can_be_contacted: false,
                    can_data_be_shared: false,
                },
                true,
            )
            .await?;
        tracing::info!(user = %admin.id(), username = %admin.username(), "Admin account created");
        Ok(UserDto::from_domain(&admin))
    }

    async fn create_account(&self, cmd: RegisterUserCommand, is_admin: bool) -> ApplicationResult<User> {
        User::validate_username(&cmd.username)?;
        self.identity.validate_password(&cmd.password)?;
        User::validate_birth_date(cmd.birth_date, today())?;
        if cmd.password != cmd.password2 {
            return Err(ApplicationError::validation("password", PASSWORD_MISMATCH));
        }

        let password_hash = self.identity.hash_password(&cmd.password)?;
        let user = self
            .store
            .insert_user(NewUser {
                username: cmd.username,
                password_hash,
                birth_date: cmd.birth_date,
                can_be_contacted: cmd.can_be_contacted,
                can_data_be_shared: cmd.can_data_be_shared,
                is_admin,
            })
            .await?;
        Ok(user)
    }

    async fn load(&self, actor: &Actor, id: UserId, action: Action) -> ApplicationResult<User> {
        require_authenticated(actor)?;
        enforce(actor, ResourceKind::User, action, ProjectScope::Unresolved, None)?;
        let user = self
            .store
            .find_user(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("User", id))?;
        let target = InstanceTarget::new(ResourceKind::User, user.id());
        enforce(actor, ResourceKind::User, action, ProjectScope::Unresolved, Some(&target))?;
        Ok(user)
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
