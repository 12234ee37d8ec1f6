//! Google Cloud token provider for `oauthprobe`: service account keys, the
//! signed-JWT token exchange and a Cloud Resource Manager project lookup.

pub mod contracts;
pub mod resource_manager_client;
pub mod service_account;

pub use contracts::{GoogleProject, ServiceAccountKey};
pub use resource_manager_client::{LookupError, ResourceManagerClient};
pub use service_account::{ServiceAccountCredential, load};
