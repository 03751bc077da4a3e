use serde::{Deserialize, Serialize};

/// Login input. Fields default to empty so a partial body reaches the
/// handler's validation instead of failing extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginInput {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Claims carried by the admin session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    pub role: String,
    pub iat: usize,
    pub exp: usize,
    /// Random token id so two logins in the same second differ.
    pub jti: String,
}

/// Login result: the signed token plus its lifetime in seconds, which the
/// web layer uses for the cookie max-age.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub username: String,
    pub token: String,
    pub max_age_secs: i64,
}
