//! Google OAuth code flow.
//!
//! The server never sees a password: the browser is sent to Google's
//! consent screen, Google calls back with a one-time code, and this module
//! exchanges it for tokens and fetches the OpenID profile. The desired
//! account role rides along in the opaque `state` parameter.

use serde::Deserialize;
use tracing::info;

use crate::error::AuthError;

const AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const USERINFO_ENDPOINT: &str = "https://openidconnect.googleapis.com/v1/userinfo";

#[derive(Debug, Clone)]
pub struct GoogleOAuth {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

/// Token response from the code exchange.
#[derive(Debug, Deserialize)]
pub struct GoogleTokens {
    pub access_token: String,
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
}

/// OpenID Connect userinfo payload.
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleProfile {
    /// Stable subject identifier for this Google account.
    pub sub: String,
    pub email: String,
    #[serde(default)]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl GoogleOAuth {
    /// The consent-screen URL to redirect the browser to. `state` is
    /// returned verbatim on the callback.
    pub fn authorize_url(&self, state: Option<&str>) -> String {
        let mut url = format!(
            "{AUTH_ENDPOINT}?response_type=code&client_id={}&redirect_uri={}&scope=openid%20email%20profile",
            urlencode(&self.client_id),
            urlencode(&self.redirect_uri),
        );
        if let Some(state) = state {
            url.push_str("&state=");
            url.push_str(&urlencode(state));
        }
        url
    }

    /// Exchange an authorization code for Google tokens.
    pub async fn exchange_code(
        &self,
        http: &reqwest::Client,
        code: &str,
    ) -> Result<GoogleTokens, AuthError> {
        let params = [
            ("grant_type", "authorization_code"),
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
        ];

        let resp = http.post(TOKEN_ENDPOINT).form(&params).send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::OAuth(format!(
                "token endpoint returned {status}: {body}"
            )));
        }

        let tokens: GoogleTokens = resp.json().await?;
        Ok(tokens)
    }

    /// Fetch the OpenID profile for an exchanged access token.
    pub async fn fetch_profile(
        &self,
        http: &reqwest::Client,
        access_token: &str,
    ) -> Result<GoogleProfile, AuthError> {
        let resp = http
            .get(USERINFO_ENDPOINT)
            .bearer_auth(access_token)
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status();
            return Err(AuthError::OAuth(format!(
                "userinfo endpoint returned {status}"
            )));
        }

        let profile: GoogleProfile = resp.json().await?;
        info!(sub = %profile.sub, "fetched google profile");
        Ok(profile)
    }
}

/// Percent-encode a query component. Covers the characters that actually
/// occur in client ids, redirect URIs, and role states.
fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oauth() -> GoogleOAuth {
        GoogleOAuth {
            client_id: "client-123.apps.googleusercontent.com".to_string(),
            client_secret: "secret".to_string(),
            redirect_uri: "http://localhost:6969/api/v1/auth/google/callback".to_string(),
        }
    }

    #[test]
    fn authorize_url_carries_client_redirect_and_scopes() {
        let url = oauth().authorize_url(None);
        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.contains("client_id=client-123.apps.googleusercontent.com"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A6969"));
        assert!(url.contains("scope=openid%20email%20profile"));
        assert!(!url.contains("state="));
    }

    #[test]
    fn authorize_url_round_trips_the_state() {
        let url = oauth().authorize_url(Some("practitioner"));
        assert!(url.ends_with("&state=practitioner"));
    }
}
