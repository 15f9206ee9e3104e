use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, PartialEq)]
pub struct AccountModel {
    pub id: String,
    pub name: String,
    pub email: String,
    /// bcrypt hash, never the plain password.
    pub password: String,
    pub verified: bool,
    pub role: Option<String>,
    pub access_token: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AccountModel {
    pub fn is_admin(&self) -> bool {
        self.role.as_deref() == Some(ADMIN_ROLE)
    }
}

#[derive(Debug, Clone)]
pub struct AddAccountParams {
    pub name: String,
    pub email: String,
    pub hashed_password: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct UnverifiedAccountModel {
    pub account_token: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[validate(length(min = 1))]
    #[serde(default)]
    pub name: String,

    #[validate(email)]
    #[serde(default)]
    pub email: String,

    #[validate(length(min = 1))]
    #[serde(default)]
    pub password: String,

    #[validate(must_match(other = "password"))]
    #[serde(default)]
    pub password_confirmation: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    #[serde(default)]
    pub email: String,

    #[validate(length(min = 1))]
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AuthenticationModel {
    pub access_token: String,
    pub name: String,
}
