pub mod access_token;
pub use access_token::{AccessToken, TOKEN_REFRESH_SKEW};

pub mod scopes;
pub use scopes::{CLOUD_PLATFORM_SCOPE, CLOUD_PLATFORM_PROJECTS_SCOPE, DEFAULT_SCOPES};
