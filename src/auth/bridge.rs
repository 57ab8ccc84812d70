//! Auth bridge: credentials in, established session out

use std::sync::Arc;

use chrono::{Duration, Utc};

use super::{CredentialVerifier, Identity};
use crate::error::AuthError;
use crate::session::{SessionStore, TokenCodec};

/// Orchestrates credential verification and session token issuance.
///
/// The bridge is the single writer of the session store: a successful
/// `authenticate` persists a fresh token, any failure leaves the store
/// exactly as it was.
pub struct AuthBridge<V: CredentialVerifier> {
    verifier: V,
    codec: TokenCodec,
    store: Arc<SessionStore>,
    ttl: Duration,
}

impl<V: CredentialVerifier> AuthBridge<V> {
    pub fn new(verifier: V, codec: TokenCodec, store: Arc<SessionStore>, ttl: Duration) -> Self {
        Self {
            verifier,
            codec,
            store,
            ttl,
        }
    }

    /// Exchange raw credentials for a verified identity.
    ///
    /// Empty or whitespace-only input fails before the verifier is contacted.
    /// The verifier is called exactly once; its failure surfaces unchanged so
    /// lockout and rate-limit signals are never masked by a retry.
    pub async fn authenticate(
        &self,
        raw_username: &str,
        raw_password: &str,
    ) -> Result<Identity, AuthError> {
        let username = raw_username.trim();
        if username.is_empty() || raw_password.trim().is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let identity = self.verifier.verify(username, raw_password).await?;

        let token = self
            .codec
            .encode(&identity, Utc::now(), self.ttl)
            .map_err(|e| AuthError::Session(e.to_string()))?;
        self.store
            .store(token)
            .map_err(|e| AuthError::Session(e.to_string()))?;

        log::debug!("Session established for {}", identity.email);
        Ok(identity)
    }

    /// Identity of the current session, if any. Never blocks.
    pub fn current_identity(&self) -> Option<Identity> {
        self.store.current_identity()
    }

    /// Drop the current session unconditionally
    pub fn invalidate(&self) {
        self.store.clear();
        log::debug!("Session invalidated");
    }
}
