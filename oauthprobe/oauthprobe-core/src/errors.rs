//! Error types shared by every token provider.
//!
//! Sources are boxed so that this crate does not depend on a particular HTTP
//! client or JWT implementation.

use std::path::PathBuf;

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The credential file is absent or cannot be turned into a key.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("cannot read service account key {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("service account key {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("service account key {path} is missing required field `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
}

/// The token exchange failed or was rejected.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The private key could not be parsed or the assertion could not be signed.
    #[error("cannot sign the token assertion: {0}")]
    Signing(#[source] BoxError),

    /// The token endpoint was unreachable or the connection broke.
    #[error("cannot reach the token endpoint: {0}")]
    Transport(#[source] BoxError),

    /// The endpoint answered with an OAuth error document.
    #[error("token request rejected: {error}{}", describe(.description))]
    Rejected {
        error: String,
        description: Option<String>,
    },

    #[error("token endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed token response: {0}")]
    MalformedResponse(String),
}

fn describe(description: &Option<String>) -> String {
    match description {
        Some(d) => format!(": {d}"),
        None => String::new(),
    }
}

impl AuthError {
    pub fn signing<E: Into<BoxError>>(source: E) -> Self {
        AuthError::Signing(source.into())
    }

    pub fn transport<E: Into<BoxError>>(source: E) -> Self {
        AuthError::Transport(source.into())
    }
}
