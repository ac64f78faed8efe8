//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;

use crate::{
    auth::{
        errors::AuthServiceError,
        hashing::{hash_password, verify_password},
        models::{AuthenticatedUser, Credentials, NewSignup, Password, Session},
        token::{JwtConfig, decode_token, issue_token},
    },
    domain::users::{
        models::{NewUser, Role, User, UserUuid},
        repository::PgUsersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    users: PgUsersRepository,
    jwt: JwtConfig,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool, jwt: JwtConfig) -> Self {
        Self {
            users: PgUsersRepository::new(pool),
            jwt,
        }
    }

    /// Provision an admin account. Used by the CLI, not exposed over HTTP.
    ///
    /// # Errors
    ///
    /// Returns an error when the email is taken or persistence fails.
    pub async fn create_admin(
        &self,
        name: String,
        email: String,
        password: &Password,
    ) -> Result<User, AuthServiceError> {
        let password_hash = hash_password(password.expose())?;

        self.users
            .create_user(NewUser {
                uuid: UserUuid::new(),
                name,
                email,
                password_hash,
                role: Role::Admin,
            })
            .await
            .map_err(AuthServiceError::from)
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn signup(&self, signup: NewSignup) -> Result<Session, AuthServiceError> {
        if self
            .users
            .email_exists(&signup.email)
            .await
            .map_err(AuthServiceError::from)?
        {
            return Err(AuthServiceError::AlreadyExists);
        }

        let password_hash = hash_password(signup.password.expose())?;

        let user = self
            .users
            .create_user(NewUser {
                uuid: UserUuid::new(),
                name: signup.name,
                email: signup.email,
                password_hash,
                role: Role::User,
            })
            .await
            .map_err(AuthServiceError::from)?;

        let token = issue_token(&user, &self.jwt)?;

        Ok(Session { token, user })
    }

    async fn login(&self, credentials: Credentials) -> Result<Session, AuthServiceError> {
        let user = self
            .users
            .get_user_by_email(&credentials.email)
            .await
            .map_err(AuthServiceError::from)?
            .ok_or(AuthServiceError::InvalidCredentials)?;

        if !verify_password(&user.password_hash, credentials.password.expose())? {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let token = issue_token(&user, &self.jwt)?;

        Ok(Session { token, user })
    }

    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<AuthenticatedUser, AuthServiceError> {
        let claims =
            decode_token(bearer_token, &self.jwt).map_err(|_| AuthServiceError::InvalidToken)?;

        // The subject must still resolve to an account; a token for a
        // deleted user is as invalid as a forged one.
        let user = self
            .users
            .get_user(claims.sub.into())
            .await
            .map_err(AuthServiceError::from)?
            .ok_or(AuthServiceError::InvalidToken)?;

        Ok(user.into())
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new account and issue its first session.
    async fn signup(&self, signup: NewSignup) -> Result<Session, AuthServiceError>;

    /// Verify credentials and issue a session.
    async fn login(&self, credentials: Credentials) -> Result<Session, AuthServiceError>;

    /// Resolve a bearer token to the account it identifies.
    async fn authenticate_bearer(
        &self,
        bearer_token: &str,
    ) -> Result<AuthenticatedUser, AuthServiceError>;
}
