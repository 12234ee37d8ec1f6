pub mod service_account_key;
pub use service_account_key::ServiceAccountKey;

pub mod google_claims;
pub use google_claims::GoogleClaims;

pub mod models;
pub use models::{
    GoogleAccessToken,
    GoogleOAuthError,
    GoogleProject
};
