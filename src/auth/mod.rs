//! Credential verification and session establishment

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

pub mod bridge;
pub mod http;

pub use bridge::AuthBridge;
pub use http::HttpCredentialVerifier;

/// Verified user record produced by a credential verifier.
///
/// Immutable once issued; discarded on logout or token expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub display_name: String,
}

/// External collaborator that exchanges raw credentials for an identity.
///
/// Implementations must not retry internally: a failed verification has to
/// surface to the caller so lockout and rate-limit signals stay visible.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verify a username/password pair, returning the identity it belongs to
    async fn verify(&self, username: &str, password: &str) -> Result<Identity, AuthError>;
}
