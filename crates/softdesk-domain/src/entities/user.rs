//! User entity representing an account

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::UserId;

/// Youngest age, in whole years, allowed to hold an account
pub const MINIMUM_AGE: i32 = 15;

const MAX_USERNAME_LENGTH: usize = 150;

/// Whole years elapsed between `birth_date` and `today`, month/day aware.
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Registration data, with the password already hashed by the identity provider
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub birth_date: NaiveDate,
    pub can_be_contacted: bool,
    pub can_data_be_shared: bool,
    pub is_admin: bool,
}

/// Field changes for an account update; `None` leaves the field untouched.
/// The password arrives already hashed.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub can_be_contacted: Option<bool>,
    pub can_data_be_shared: Option<bool>,
    pub is_admin: Option<bool>,
}

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    username: String,
    password_hash: String,
    birth_date: NaiveDate,
    can_be_contacted: bool,
    can_data_be_shared: bool,
    is_admin: bool,
    date_joined: DateTime<Utc>,
}

impl User {
    /// Materialize a stored user from registration data
    pub fn from_new(id: UserId, new: NewUser) -> Self {
        Self {
            id,
            username: new.username,
            password_hash: new.password_hash,
            birth_date: new.birth_date,
            can_be_contacted: new.can_be_contacted,
            can_data_be_shared: new.can_data_be_shared,
            is_admin: new.is_admin,
            date_joined: Utc::now(),
        }
    }

    /// Check the username format
    pub fn validate_username(username: &str) -> DomainResult<()> {
        if username.is_empty() {
            return Err(DomainError::validation("username", "This field may not be blank."));
        }
        if username.chars().count() > MAX_USERNAME_LENGTH {
            return Err(DomainError::validation(
                "username",
                format!("Ensure this field has no more than {MAX_USERNAME_LENGTH} characters."),
            ));
        }
        if !username
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
        {
            return Err(DomainError::validation(
                "username",
                "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
            ));
        }
        Ok(())
    }

    /// Reject birth dates younger than [`MINIMUM_AGE`] as of `today`
    pub fn validate_birth_date(birth_date: NaiveDate, today: NaiveDate) -> DomainResult<()> {
        if age_on(birth_date, today) < MINIMUM_AGE {
            return Err(DomainError::validation(
                "birth_date",
                format!("User must be at least {MINIMUM_AGE} years old to proceed."),
            ));
        }
        Ok(())
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn can_be_contacted(&self) -> bool {
        self.can_be_contacted
    }

    pub fn can_data_be_shared(&self) -> bool {
        self.can_data_be_shared
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn date_joined(&self) -> DateTime<Utc> {
        self.date_joined
    }

    /// Apply changes after validating them. Username uniqueness is the
    /// store's job; the age check needs the current date and runs before.
    pub fn apply(&mut self, changes: UserChanges) -> DomainResult<()> {
        if let Some(username) = &changes.username {
            Self::validate_username(username)?;
        }
        if let Some(username) = changes.username {
            self.username = username;
        }
        if let Some(password_hash) = changes.password_hash {
            self.password_hash = password_hash;
        }
        if let Some(birth_date) = changes.birth_date {
            self.birth_date = birth_date;
        }
        if let Some(can_be_contacted) = changes.can_be_contacted {
            self.can_be_contacted = can_be_contacted;
        }
        if let Some(can_data_be_shared) = changes.can_data_be_shared {
            self.can_data_be_shared = can_data_be_shared;
        }
        if let Some(is_admin) = changes.is_admin {
            self.is_admin = is_admin;
        }
        Ok(())
    }
}
