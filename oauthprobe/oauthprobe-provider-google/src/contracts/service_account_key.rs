use std::path::Path;

use oauthprobe_core::errors::ConfigurationError;
use serde::{Serialize, Deserialize};

/// JSON key of a service account, as downloaded from the Cloud Console.
///
/// The four required fields deserialize to empty strings when absent so that
/// [`ServiceAccountKey::validate`] can name the missing one.
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct ServiceAccountKey {
    #[serde(rename = "type")]
    pub key_type: Option<String>,
    #[serde(default)]
    pub project_id: String,
    pub private_key_id: Option<String>,
    #[serde(default)]
    pub private_key: String,
    #[serde(default)]
    pub client_email: String,
    pub client_id: Option<String>,
    pub auth_uri: Option<String>,
    #[serde(default)]
    pub token_uri: String,
    pub auth_provider_x509_cert_url: Option<String>,
    pub client_x509_cert_url: Option<String>,
    pub universe_domain: Option<String>,
}

impl ServiceAccountKey {
    /// Parses a key from its JSON text. `path` is only used in error messages.
    pub fn from_json(path: &Path, content: &str) -> Result<Self, ConfigurationError> {
        let key: ServiceAccountKey =
            serde_json::from_str(content).map_err(|e| ConfigurationError::Malformed {
                path: path.to_path_buf(),
                source: e.into(),
            })?;
        key.validate(path)?;
        Ok(key)
    }

    /// Fails on the first required field that is missing or empty.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigurationError> {
        let required = [
            ("project_id", &self.project_id),
            ("private_key", &self.private_key),
            ("client_email", &self.client_email),
            ("token_uri", &self.token_uri),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ConfigurationError::MissingField {
                path: path.to_path_buf(),
                field: *field,
            }),
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("key_type", &self.key_type)
            .field("project_id", &self.project_id)
            .field("private_key_id", &self.private_key_id)
            .field("private_key", &"[censored]")
            .field("client_email", &self.client_email)
            .field("client_id", &self.client_id)
            .field("token_uri", &self.token_uri)
            .field("universe_domain", &self.universe_domain)
            .finish()
    }
}
