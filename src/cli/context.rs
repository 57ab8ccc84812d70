//! Command execution context
//!
//! Wires configuration, the session store, and the HTTP clients together so
//! individual commands stay free of setup boilerplate.

use std::sync::Arc;

use chrono::Duration;

use crate::auth::{AuthBridge, HttpCredentialVerifier};
use crate::client::BackendClient;
use crate::config::Config;
use crate::error::Result;
use crate::search::SearchController;
use crate::session::{SessionStore, TokenCodec};

/// Shared state for command execution.
///
/// The session store is created once here and handed out by reference: the
/// auth bridge is its only writer, the search controller only reads it.
pub struct CommandContext {
    pub config: Config,
    codec: TokenCodec,
    session: Arc<SessionStore>,
}

impl CommandContext {
    /// Load config, derive the token codec from the configured secret, and
    /// restore any persisted session.
    pub fn new(config_path: Option<&str>) -> Result<Self> {
        let config = Config::load_at(config_path)?;
        let secret = config.require_session_secret()?.to_string();
        let codec = TokenCodec::new(&secret);

        let session_path = Config::session_path(config_path)?;
        let session = Arc::new(SessionStore::open(session_path, &codec));

        Ok(Self {
            config,
            codec,
            session,
        })
    }

    pub fn session(&self) -> Arc<SessionStore> {
        Arc::clone(&self.session)
    }

    /// Auth bridge over the configured login endpoint
    pub fn auth_bridge(&self) -> Result<AuthBridge<HttpCredentialVerifier>> {
        let login_url = self.config.require_login_url()?;
        let verifier = HttpCredentialVerifier::new(login_url)?;

        Ok(AuthBridge::new(
            verifier,
            self.codec.clone(),
            self.session(),
            Duration::hours(self.config.preferences.session_ttl_hours),
        ))
    }

    /// Search controller over the configured backend
    pub fn search_controller(&self) -> Result<SearchController<BackendClient>> {
        let backend_url = self.config.require_backend_url()?;
        let client = BackendClient::new(backend_url)?;

        Ok(SearchController::new(
            Arc::new(client),
            self.session(),
            self.config.preferences.page_size,
        ))
    }
}
