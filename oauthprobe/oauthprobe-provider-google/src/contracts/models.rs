use serde::{Serialize, Deserialize};

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Success body of the token endpoint.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GoogleAccessToken {
    #[serde(default)]
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub expires_in: Option<u64>,
}

/// Error document returned by OAuth 2.0 endpoints, see RFC 6749 section 5.2.
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct GoogleOAuthError {
    pub error: String,
    pub error_description: Option<String>,
    pub error_uri: Option<String>,
}

/// Subset of the Cloud Resource Manager v1 `Project` resource.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoogleProject {
    pub project_id: String,
    pub name: Option<String>,
    pub project_number: Option<String>,
    pub lifecycle_state: Option<String>,
}
