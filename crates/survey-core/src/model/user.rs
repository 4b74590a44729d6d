use serde::{Deserialize, Serialize};
use survey_core_types::Sensitive;

use super::UserId;

/// A registered account
///
/// `password_hash` is the PHC-format Argon2 string stored in the `password`
/// column; it is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub is_admin: bool,
}

impl User {
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        password_hash: impl Into<String>,
        is_admin: bool,
    ) -> Self {
        Self {
            id,
            username: username.into(),
            password_hash: password_hash.into(),
            is_admin,
        }
    }
}

/// Registration payload carrying the plain-text password
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: Sensitive<String>,
    pub is_admin: bool,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<Sensitive<String>>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            is_admin: false,
        }
    }

    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }
}
