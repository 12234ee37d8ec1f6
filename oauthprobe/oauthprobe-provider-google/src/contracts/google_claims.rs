use serde::{Deserialize, Serialize};

/// Claim set of the signed assertion sent to the token endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GoogleClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}
