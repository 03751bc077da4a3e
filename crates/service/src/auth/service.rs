use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::rngs::OsRng;
use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use super::domain::{AdminClaims, AdminSession, LoginInput};
use super::errors::AuthError;

/// Verifies the configured back-office account and issues session tokens.
///
/// There is exactly one admin account, taken from configuration. The plain
/// password is hashed once at construction so login attempts always go
/// through argon2 verification rather than string comparison.
#[derive(Clone)]
pub struct AdminAuthService {
    username: String,
    password_hash: String,
    jwt_secret: String,
    token_ttl_hours: i64,
}

impl AdminAuthService {
    pub fn from_plain(
        username: &str,
        password: &str,
        jwt_secret: &str,
        token_ttl_hours: i64,
    ) -> Result<Self, AuthError> {
        if username.trim().is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "admin username and password must be set".to_string(),
            ));
        }
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::HashError(e.to_string()))?
            .to_string();
        Ok(Self {
            username: username.to_string(),
            password_hash,
            jwt_secret: jwt_secret.to_string(),
            token_ttl_hours,
        })
    }

    /// Check credentials and mint a session token.
    pub fn login(&self, input: &LoginInput) -> Result<AdminSession, AuthError> {
        if input.username != self.username {
            return Err(AuthError::Unauthorized);
        }
        let parsed =
            PasswordHash::new(&self.password_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        Argon2::default()
            .verify_password(input.password.as_bytes(), &parsed)
            .map_err(|_| AuthError::Unauthorized)?;

        let now = Utc::now();
        let ttl_secs = self.token_ttl_hours * 3600;
        let claims = AdminClaims {
            sub: self.username.clone(),
            role: "admin".to_string(),
            iat: now.timestamp() as usize,
            exp: (now.timestamp() + ttl_secs) as usize,
            jti: Uuid::new_v4().to_string(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenError(e.to_string()))?;

        Ok(AdminSession {
            username: self.username.clone(),
            token,
            max_age_secs: ttl_secs,
        })
    }

    /// Decode and validate a session token, returning its claims.
    pub fn verify_token(&self, token: &str) -> Result<AdminClaims, AuthError> {
        let data = decode::<AdminClaims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| AuthError::TokenError(e.to_string()))?;
        if data.claims.role != "admin" {
            return Err(AuthError::Unauthorized);
        }
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn svc() -> AdminAuthService {
        AdminAuthService::from_plain("admin", "hunter2", "test-secret", 8).unwrap()
    }

    #[test]
    fn login_and_verify_round_trip() {
        let svc = svc();
        let session = svc
            .login(&LoginInput {
                username: "admin".to_string(),
                password: "hunter2".to_string(),
            })
            .unwrap();
        assert_eq!(session.max_age_secs, 8 * 3600);

        let claims = svc.verify_token(&session.token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_password_is_unauthorized() {
        let svc = svc();
        let err = svc
            .login(&LoginInput {
                username: "admin".to_string(),
                password: "nope".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized));
    }

    #[test]
    fn wrong_username_is_unauthorized() {
        let svc = svc();
        let err = svc
            .login(&LoginInput {
                username: "root".to_string(),
                password: "hunter2".to_string(),
            })
            .unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized));
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let svc = svc();
        let other = AdminAuthService::from_plain("admin", "hunter2", "other-secret", 8).unwrap();
        let session = other
            .login(&LoginInput {
                username: "admin".to_string(),
                password: "hunter2".to_string(),
            })
            .unwrap();
        assert!(svc.verify_token(&session.token).is_err());
    }

    #[test]
    fn empty_credentials_rejected_at_construction() {
        assert!(AdminAuthService::from_plain("", "pw", "s", 8).is_err());
        assert!(AdminAuthService::from_plain("admin", "", "s", 8).is_err());
    }

    #[test]
    fn login_input_tolerates_missing_fields() {
        let input: LoginInput = serde_json::from_str("{}").unwrap();
        assert!(input.username.is_empty());
        assert!(input.password.is_empty());

        let input: LoginInput = serde_json::from_str(r#"{"username":"admin"}"#).unwrap();
        assert_eq!(input.username, "admin");
        assert!(input.password.is_empty());
    }
}
