pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";
pub const CLOUD_PLATFORM_PROJECTS_SCOPE: &str =
    "https://www.googleapis.com/auth/cloudplatformprojects";

/// Scopes requested when none are given explicitly.
pub const DEFAULT_SCOPES: [&str; 2] = [CLOUD_PLATFORM_SCOPE, CLOUD_PLATFORM_PROJECTS_SCOPE];
