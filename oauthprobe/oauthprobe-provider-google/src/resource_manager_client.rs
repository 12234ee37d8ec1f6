use oauthprobe_core::contracts::AccessToken;
use thiserror::Error;
use tracing::debug;

use crate::contracts::GoogleProject;

pub const DEFAULT_RESOURCE_MANAGER_URL: &str = "https://cloudresourcemanager.googleapis.com";

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("cannot reach Cloud Resource Manager: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Cloud Resource Manager returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid Cloud Resource Manager URL {0}")]
    InvalidUrl(String),

    #[error("cannot decode project: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Minimal client for Cloud Resource Manager v1 `projects.get`.
#[derive(Clone)]
pub struct ResourceManagerClient {
    http: reqwest::Client,
    pub api_url: String,
}

impl ResourceManagerClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: api_url.into(),
        }
    }

    /// `{api_url}/v1/projects/{project_id}`, with `project_id` encoded as a
    /// single path segment.
    pub fn project_url(&self, project_id: &str) -> Result<reqwest::Url, LookupError> {
        let mut url = reqwest::Url::parse(&self.api_url)
            .map_err(|e| LookupError::InvalidUrl(format!("{}: {}", self.api_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl(format!("{} cannot be a base URL", self.api_url)))?
            .pop_if_empty()
            .extend(["v1", "projects", project_id]);
        Ok(url)
    }

    pub async fn get_project(
        &self,
        token: &AccessToken,
        project_id: &str,
    ) -> Result<GoogleProject, LookupError> {
        let url = self.project_url(project_id)?;
        debug!(%url, "looking up project");

        let res = self
            .http
            .get(url)
            .header(reqwest::header::AUTHORIZATION, token.header_value())
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(LookupError::Status {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for ResourceManagerClient {
    fn default() -> Self {
        Self::new(DEFAULT_RESOURCE_MANAGER_URL)
    }
}
