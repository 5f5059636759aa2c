//! SoftDesk identity provider
//!
//! Password policy and Argon2id hashing, plus HS256 bearer tokens, exposed
//! to the rest of the workspace through [`softdesk_domain::IdentityProvider`].

pub mod error;
pub mod password;
pub mod provider;
pub mod token;

pub use error::{Result, SecurityError};
pub use password::{PasswordHasherService, PasswordPolicy, MIN_PASSWORD_LENGTH};
pub use provider::TokenIdentityProvider;
pub use token::{Claims, TokenSigner, MIN_SECRET_LENGTH};
