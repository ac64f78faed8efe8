//! Bearer token encoding and decoding.
//!
//! HS256 JWTs carrying the account UUID as the subject. The format is opaque
//! to everything outside this module.

use jiff::Timestamp;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::users::models::User;

/// Token signing settings.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC signing secret.
    pub secret: String,

    /// Seconds until an issued token expires.
    pub ttl_seconds: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to encode token")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("token is invalid or expired")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

pub(crate) fn issue_token(user: &User, config: &JwtConfig) -> Result<String, TokenError> {
    let now = Timestamp::now().as_second();

    let claims = Claims {
        sub: user.uuid.into_uuid(),
        email: user.email.clone(),
        role: user.role.as_str().to_string(),
        iat: now,
        exp: now + config.ttl_seconds,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(TokenError::Encode)
}

pub(crate) fn decode_token(token: &str, config: &JwtConfig) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(TokenError::Invalid)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::users::models::{Role, UserUuid};

    use super::*;

    fn test_config(ttl_seconds: i64) -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            ttl_seconds,
        }
    }

    fn test_user() -> User {
        User {
            uuid: UserUuid::new(),
            name: "Reader".to_string(),
            email: "reader@example.com".to_string(),
            password_hash: String::new(),
            role: Role::User,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn issued_token_decodes_to_same_subject() -> TestResult {
        let config = test_config(3600);
        let user = test_user();

        let token = issue_token(&user, &config)?;
        let claims = decode_token(&token, &config)?;

        assert_eq!(claims.sub, user.uuid.into_uuid());
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.role, "USER");

        Ok(())
    }

    #[test]
    fn garbage_token_is_rejected() {
        let config = test_config(3600);

        let result = decode_token("not.a.token", &config);

        assert!(
            matches!(result, Err(TokenError::Invalid(_))),
            "expected Invalid, got {result:?}"
        );
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() -> TestResult {
        let user = test_user();
        let token = issue_token(&user, &test_config(3600))?;

        let other = JwtConfig {
            secret: "different-secret".to_string(),
            ttl_seconds: 3600,
        };

        assert!(matches!(
            decode_token(&token, &other),
            Err(TokenError::Invalid(_))
        ));

        Ok(())
    }

    #[test]
    fn expired_token_is_rejected() -> TestResult {
        let config = test_config(-3600);
        let user = test_user();

        let token = issue_token(&user, &config)?;
        let result = decode_token(&token, &config);

        assert!(
            matches!(result, Err(TokenError::Invalid(_))),
            "expected Invalid for expired token, got {result:?}"
        );

        Ok(())
    }
}
