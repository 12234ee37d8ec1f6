use std::time::Duration;

use chrono::{DateTime, Utc};

/// Cached tokens closer than this to their expiry are refreshed.
pub const TOKEN_REFRESH_SKEW: Duration = Duration::from_secs(5 * 60);

/// A short-lived bearer credential.
///
/// Only ever held in memory. The `Debug` output never includes the token value.
#[derive(Clone, PartialEq)]
pub struct AccessToken {
    /// The value sent in the `Authorization:` header.
    pub token: String,
    /// Usually `"Bearer"`.
    pub token_type: String,
    /// `None` means the issuer did not report an expiry.
    pub expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    pub fn new(token: impl Into<String>, token_type: impl Into<String>, expires_at: Option<DateTime<Utc>>) -> Self {
        Self {
            token: token.into(),
            token_type: token_type.into(),
            expires_at,
        }
    }

    /// Whether the token can still be presented at `now`, keeping
    /// [`TOKEN_REFRESH_SKEW`] of margin before the expiry.
    pub fn is_usable_at(&self, now: DateTime<Utc>) -> bool {
        if self.token.is_empty() {
            return false;
        }
        match self.expires_at {
            None => true,
            Some(exp) => now + TOKEN_REFRESH_SKEW < exp,
        }
    }

    pub fn is_usable(&self) -> bool {
        self.is_usable_at(Utc::now())
    }

    /// Value for an `Authorization` header, e.g. `Bearer ya29...`.
    pub fn header_value(&self) -> String {
        format!("{} {}", self.token_type, self.token)
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"[censored]")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
