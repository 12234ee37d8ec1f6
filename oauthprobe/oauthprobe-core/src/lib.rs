use async_trait::async_trait;

use crate::contracts::AccessToken;
use crate::errors::AuthError;
pub mod contracts;
pub mod errors;

/// A source of bearer tokens bound to a fixed identity and scope set.
///
/// Implementations may cache: a call returns a previously obtained token while it
/// is still usable and only goes to the network when it is not.
#[cfg_attr(feature = "mocks", mockall::automock)]
#[async_trait]
pub trait TokenSource: Send + Sync {

    async fn token(&self) -> Result<AccessToken, AuthError>;
}
