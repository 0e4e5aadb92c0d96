use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ayursutra_core::models::user::{User, UserRole};

use crate::error::AuthError;

const DEFAULT_ACCESS_TTL_SECS: i64 = 60 * 60; // 1 hour
const DEFAULT_REFRESH_TTL_SECS: i64 = 7 * 24 * 60 * 60; // 7 days

/// Claims carried by both token kinds. `token_use` keeps refresh tokens
/// out of the auth middleware and access tokens out of the refresh
/// endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: UserRole,
    pub token_use: String,
    pub iat: i64,
    pub exp: i64,
}

/// An access/refresh pair as handed to clients.
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

/// HS256 signing/verification material for both token kinds. Access and
/// refresh tokens are signed with independent secrets.
pub struct JwtKeys {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_ttl_secs: i64,
    refresh_ttl_secs: i64,
}

impl JwtKeys {
    pub fn new(access_secret: &str, refresh_secret: &str) -> Self {
        Self::with_ttls(
            access_secret,
            refresh_secret,
            DEFAULT_ACCESS_TTL_SECS,
            DEFAULT_REFRESH_TTL_SECS,
        )
    }

    pub fn with_ttls(
        access_secret: &str,
        refresh_secret: &str,
        access_ttl_secs: i64,
        refresh_ttl_secs: i64,
    ) -> Self {
        JwtKeys {
            access_encoding: EncodingKey::from_secret(access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(refresh_secret.as_bytes()),
            access_ttl_secs,
            refresh_ttl_secs,
        }
    }

    /// Mint a fresh access/refresh pair for a user.
    pub fn issue_pair(&self, user: &User) -> Result<TokenPair, AuthError> {
        let now = jiff::Timestamp::now().as_second();

        let access = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role,
            token_use: "access".to_string(),
            iat: now,
            exp: now + self.access_ttl_secs,
        };
        let refresh = Claims {
            sub: user.id,
            email: user.email.clone(),
            role: user.role,
            token_use: "refresh".to_string(),
            iat: now,
            exp: now + self.refresh_ttl_secs,
        };

        let header = Header::new(Algorithm::HS256);
        Ok(TokenPair {
            access_token: encode(&header, &access, &self.access_encoding)?,
            refresh_token: encode(&header, &refresh, &self.refresh_encoding)?,
            expires_in: self.access_ttl_secs,
        })
    }

    /// Validate an access token and return its claims.
    pub fn validate_access(&self, token: &str) -> Result<Claims, AuthError> {
        validate(token, &self.access_decoding, "access")
    }

    /// Validate a refresh token and return its claims.
    pub fn validate_refresh(&self, token: &str) -> Result<Claims, AuthError> {
        validate(token, &self.refresh_decoding, "refresh")
    }
}

fn validate(
    token: &str,
    decoding_key: &DecodingKey,
    expected_use: &str,
) -> Result<Claims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(token, decoding_key, &validation).map_err(|e| {
        match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken(e.to_string()),
        }
    })?;

    let token_use = &token_data.claims.token_use;
    if token_use != expected_use {
        return Err(AuthError::InvalidToken(format!(
            "unexpected token_use: {token_use}"
        )));
    }

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            google_sub: "google-oauth2|12345".to_string(),
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            phone_number: None,
            avatar: None,
            role: UserRole::Patient,
            is_email_verified: true,
            is_active: true,
            created_at: jiff::Timestamp::now(),
            last_login_at: None,
        }
    }

    #[test]
    fn issued_pair_round_trips_through_validation() {
        let keys = JwtKeys::new("access-secret", "refresh-secret");
        let user = test_user();
        let pair = keys.issue_pair(&user).unwrap();

        let access = keys.validate_access(&pair.access_token).unwrap();
        assert_eq!(access.sub, user.id);
        assert_eq!(access.email, user.email);
        assert_eq!(access.role, UserRole::Patient);

        let refresh = keys.validate_refresh(&pair.refresh_token).unwrap();
        assert_eq!(refresh.sub, user.id);
    }

    #[test]
    fn refresh_tokens_are_rejected_as_access_tokens() {
        let keys = JwtKeys::new("access-secret", "refresh-secret");
        let pair = keys.issue_pair(&test_user()).unwrap();

        // Wrong secret and wrong token_use both fail.
        assert!(keys.validate_access(&pair.refresh_token).is_err());
        assert!(keys.validate_refresh(&pair.access_token).is_err());
    }

    #[test]
    fn expired_tokens_are_reported_as_expired() {
        // Issue with a TTL far enough in the past to clear the default
        // validation leeway.
        let keys = JwtKeys::with_ttls("a", "r", -600, -600);
        let pair = keys.issue_pair(&test_user()).unwrap();

        assert!(matches!(
            keys.validate_access(&pair.access_token),
            Err(AuthError::TokenExpired)
        ));
    }

    #[test]
    fn garbage_tokens_are_invalid() {
        let keys = JwtKeys::new("a", "r");
        assert!(matches!(
            keys.validate_access("not-a-jwt"),
            Err(AuthError::InvalidToken(_))
        ));
    }
}
