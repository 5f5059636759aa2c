//! HS256 bearer tokens

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use softdesk_domain::{AccessToken, User, UserId};

use crate::{Result, SecurityError};

/// Shortest secret accepted for HMAC signing
pub const MIN_SECRET_LENGTH: usize = 16;

/// JWT claim set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id, decimal
    pub sub: String,
    pub username: String,
    /// Admin flag at issue time
    pub adm: bool,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and verifies access tokens with a shared secret
pub struct TokenSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenSigner {
    pub fn new(secret: &[u8], ttl: Duration) -> Result<Self> {
        if secret.len() < MIN_SECRET_LENGTH {
            return Err(SecurityError::Configuration {
                message: format!("token secret must be at least {MIN_SECRET_LENGTH} bytes"),
            });
        }
        if ttl <= Duration::zero() {
            return Err(SecurityError::Configuration {
                message: "token lifetime must be positive".to_string(),
            });
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        })
    }

    pub fn issue(&self, user: &User) -> Result<AccessToken> {
        let issued_at = Utc::now();
        let expires_at = issued_at + self.ttl;
        let claims = Claims {
            sub: user.id().to_string(),
            username: user.username().to_string(),
            adm: user.is_admin(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(SecurityError::TokenEncoding)?;
        Ok(AccessToken { token, expires_at })
    }

    /// Decode and check signature and expiry
    pub fn verify(&self, token: &str) -> Result<Claims> {
        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| SecurityError::InvalidToken {
                reason: e.to_string(),
            })
    }

    /// Resolve the subject claim to a user id
    pub fn subject(&self, token: &str) -> Result<UserId> {
        let claims = self.verify(token)?;
        claims
            .sub
            .parse::<u64>()
            .map(UserId::new)
            .map_err(|_| SecurityError::InvalidToken {
                reason: format!("malformed subject {:?}", claims.sub),
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use softdesk_domain::NewUser;

    use super::*;

    const SECRET: &[u8] = b"an-adequately-long-test-secret";

    fn alice() -> User {
        User::from_new(
            UserId::new(7),
            NewUser {
                username: "alice".into(),
                password_hash: "x".into(),
                birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                can_be_contacted: false,
                can_data_be_shared: false,
                is_admin: true,
            },
        )
    }

    #[test]
    fn test_issue_then_verify() {
        let signer = TokenSigner::new(SECRET, Duration::minutes(5)).unwrap();
        let token = signer.issue(&alice()).unwrap();
        let claims = signer.verify(&token.token).unwrap();
        assert_eq!(claims.sub, "7");
        assert_eq!(claims.username, "alice");
        assert!(claims.adm);
        assert_eq!(claims.exp, token.expires_at.timestamp());
        assert_eq!(signer.subject(&token.token).unwrap(), UserId::new(7));
    }

    #[test]
    fn test_foreign_signature_rejected() {
        let ours = TokenSigner::new(SECRET, Duration::minutes(5)).unwrap();
        let theirs = TokenSigner::new(b"some-other-secret-value", Duration::minutes(5)).unwrap();
        let token = theirs.issue(&alice()).unwrap();
        assert!(matches!(
            ours.verify(&token.token),
            Err(SecurityError::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let signer = TokenSigner::new(SECRET, Duration::minutes(5)).unwrap();
        let now = Utc::now().timestamp();
        let stale = Claims {
            sub: "7".into(),
            username: "alice".into(),
            adm: false,
            iat: now - 600,
            exp: now - 300,
        };
        let token = encode(&Header::new(Algorithm::HS256), &stale, &EncodingKey::from_secret(SECRET)).unwrap();
        assert!(signer.verify(&token).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        let signer = TokenSigner::new(SECRET, Duration::minutes(5)).unwrap();
        assert!(signer.verify("not.a.jwt").is_err());
    }

    #[test]
    fn test_short_secret_rejected() {
        assert!(matches!(
            TokenSigner::new(b"short", Duration::minutes(5)),
            Err(SecurityError::Configuration { .. })
        ));
        assert!(TokenSigner::new(SECRET, Duration::zero()).is_err());
    }
}
