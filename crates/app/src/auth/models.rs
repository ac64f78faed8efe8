//! Auth Models

use std::fmt;

use zeroize::Zeroize;

use crate::domain::users::models::{Role, User, UserUuid};

/// The identity resolved from a bearer token. Always passed explicitly into
/// services; nothing reads it from ambient state.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub uuid: UserUuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<User> for AuthenticatedUser {
    fn from(user: User) -> Self {
        Self {
            uuid: user.uuid,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// Signup request data.
#[derive(Debug)]
pub struct NewSignup {
    pub name: String,
    pub email: String,
    pub password: Password,
}

/// Login request data.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub password: Password,
}

/// An issued session: the bearer token plus the account it belongs to.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user: User,
}

/// A plain-text password in transit. Redacted in debug output and wiped on
/// drop.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    #[must_use]
    pub fn new(password: String) -> Self {
        Self(password)
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(**redacted**)")
    }
}

impl Drop for Password {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
