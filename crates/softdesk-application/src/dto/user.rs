//! User and authentication DTOs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use softdesk_domain::{User, UserId};

/// Registration input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserCommand {
    pub username: String,
    pub password: String,
    pub password2: String,
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub can_be_contacted: bool,
    #[serde(default)]
    pub can_data_be_shared: bool,
}

/// Account changes; `None` leaves the field untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserCommand {
    pub username: Option<String>,
    pub password: Option<String>,
    pub password2: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub can_be_contacted: Option<bool>,
    pub can_data_be_shared: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCommand {
    pub username: String,
    pub password: String,
}

/// Public view of an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: UserId,
    pub username: String,
    pub birth_date: NaiveDate,
    pub can_be_contacted: bool,
    pub can_data_be_shared: bool,
    pub is_admin: bool,
    pub date_joined: DateTime<Utc>,
}

impl UserDto {
    pub fn from_domain(user: &User) -> Self {
        Self {
            id: user.id(),
            username: user.username().to_string(),
            birth_date: user.birth_date(),
            can_be_contacted: user.can_be_contacted(),
            can_data_be_shared: user.can_data_be_shared(),
            is_admin: user.is_admin(),
            date_joined: user.date_joined(),
        }
    }
}

/// Issued bearer credential
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenDto {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserDto,
}
