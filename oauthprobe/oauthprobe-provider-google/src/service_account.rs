//! Service account credentials using the signed-JWT assertion grant.
//!
//! Resources:
//! - [Using OAuth 2.0 for Server to Server
//! Applications](https://developers.google.com/identity/protocols/OAuth2ServiceAccount)
//! - [RFC 7523](https://www.rfc-editor.org/rfc/rfc7523)

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use oauthprobe_core::{
    TokenSource,
    contracts::AccessToken,
    errors::{AuthError, ConfigurationError},
};
use tracing::{debug, info};

use crate::contracts::{GoogleAccessToken, GoogleClaims, GoogleOAuthError, ServiceAccountKey};

pub const JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Google accepts assertions valid for at most one hour.
const ASSERTION_LIFETIME: Duration = Duration::from_secs(60 * 60);

/// Reads and validates the service account key at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<ServiceAccountKey, ConfigurationError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigurationError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let key = ServiceAccountKey::from_json(path, &content)?;
    debug!(path = %path.display(), project_id = %key.project_id, "loaded service account key");
    Ok(key)
}

/// `issued_at + expires_in`, or `MalformedResponse` when it does not fit a timestamp.
fn expiry_after(issued_at: DateTime<Utc>, expires_in: u64) -> Result<DateTime<Utc>, AuthError> {
    i64::try_from(expires_in)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .and_then(|delta| issued_at.checked_add_signed(delta))
        .ok_or_else(|| AuthError::MalformedResponse("expires_in out of range".to_string()))
}

/// A service account key bound to a scope set, with an in-memory token cache.
///
/// Clones share the cache.
#[derive(Clone)]
pub struct ServiceAccountCredential {
    key: ServiceAccountKey,
    scopes: Vec<String>,
    http: reqwest::Client,
    token_state: Arc<tokio::sync::Mutex<TokenState>>,
}

struct TokenState {
    token: Option<AccessToken>,
}

impl ServiceAccountCredential {
    /// Builds the credential. Performs no network I/O.
    pub fn authenticate<I, S>(key: ServiceAccountKey, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key,
            scopes: scopes.into_iter().map(Into::into).collect(),
            http: reqwest::Client::new(),
            token_state: Arc::new(tokio::sync::Mutex::new(TokenState { token: None })),
        }
    }

    /// Stores a token obtained elsewhere in the cache shared by all clones.
    pub async fn cache_token(&self, token: AccessToken) {
        self.token_state.lock().await.token = Some(token);
    }

    pub fn key(&self) -> &ServiceAccountKey {
        &self.key
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    /// Returns the cached token while it is usable, otherwise exchanges a new
    /// assertion for one and caches it.
    pub async fn get_token(&self) -> Result<AccessToken, AuthError> {
        let mut state = self.token_state.lock().await;
        if let Some(token) = state.token.as_ref().filter(|t| t.is_usable()) {
            debug!("using cached access token");
            return Ok(token.clone());
        }

        debug!(token_uri = %self.key.token_uri, "refreshing access token (lazy)");
        let token = self.fetch_new_token().await?;
        info!(expires_at = ?token.expires_at, "new access token created");

        state.token = Some(token.clone());
        Ok(token)
    }

    /// Performs one token exchange against `token_uri`, bypassing the cache.
    pub async fn fetch_new_token(&self) -> Result<AccessToken, AuthError> {
        let issued_at = Utc::now();
        let assertion = self.signed_assertion(issued_at)?;
        let params = [
            ("grant_type", JWT_BEARER_GRANT_TYPE),
            ("assertion", assertion.as_str()),
        ];

        let res = self
            .http
            .post(&self.key.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(AuthError::transport)?;

        let status = res.status();
        let body = res.text().await.map_err(AuthError::transport)?;
        if !status.is_success() {
            return Err(match serde_json::from_str::<GoogleOAuthError>(&body) {
                Ok(err) => AuthError::Rejected {
                    error: err.error,
                    description: err.error_description,
                },
                Err(_) => AuthError::Status {
                    status: status.as_u16(),
                    body,
                },
            });
        }

        let response: GoogleAccessToken = serde_json::from_str(&body)
            .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;
        if response.access_token.is_empty() {
            return Err(AuthError::MalformedResponse(
                "missing or empty `access_token`".to_string(),
            ));
        }

        let expires_at = response
            .expires_in
            .map(|secs| expiry_after(issued_at, secs))
            .transpose()?;
        Ok(AccessToken::new(
            response.access_token,
            response.token_type,
            expires_at,
        ))
    }

    /// The claim set asserted at `now`.
    pub fn claims(&self, now: DateTime<Utc>) -> GoogleClaims {
        GoogleClaims {
            iss: self.key.client_email.clone(),
            scope: self.scopes.join(" "),
            aud: self.key.token_uri.clone(),
            iat: now.timestamp(),
            exp: (now + ASSERTION_LIFETIME).timestamp(),
        }
    }

    /// Signs [`Self::claims`] with the key's RSA private key (RS256).
    pub fn signed_assertion(&self, now: DateTime<Utc>) -> Result<String, AuthError> {
        let mut header = jsonwebtoken::Header::new(jsonwebtoken::Algorithm::RS256);
        header.kid = self
            .key
            .private_key_id
            .clone()
            .filter(|id| !id.is_empty());

        let encoding_key = jsonwebtoken::EncodingKey::from_rsa_pem(self.key.private_key.as_bytes())
            .map_err(AuthError::signing)?;
        jsonwebtoken::encode(&header, &self.claims(now), &encoding_key).map_err(AuthError::signing)
    }
}

#[async_trait]
impl TokenSource for ServiceAccountCredential {
    async fn token(&self) -> Result<AccessToken, AuthError> {
        self.get_token().await
    }
}
