//! Client-held session state
//!
//! The session store is the only mutable state shared across the app: the
//! auth bridge writes it, everything else reads it. Reads never touch disk.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::RwLock;

pub mod token;

pub use token::{SessionToken, TokenCodec};

use crate::auth::Identity;

/// On-disk session format: just the signed token, re-verified on load
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    token: String,
}

/// Single-writer store for the current session token.
///
/// Optionally backed by a `session.yaml` next to the config file so the
/// session survives across invocations.
pub struct SessionStore {
    path: Option<PathBuf>,
    current: RwLock<Option<SessionToken>>,
}

impl SessionStore {
    /// In-memory store with no persistence
    pub fn in_memory() -> Self {
        Self {
            path: None,
            current: RwLock::new(None),
        }
    }

    /// Open a store backed by `path`, restoring a previously persisted
    /// session if its token still verifies and has not expired.
    pub fn open(path: PathBuf, codec: &TokenCodec) -> Self {
        let current = Self::restore(&path, codec);
        Self {
            path: Some(path),
            current: RwLock::new(current),
        }
    }

    fn restore(path: &PathBuf, codec: &TokenCodec) -> Option<SessionToken> {
        if !path.exists() {
            return None;
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Failed to read session file {}: {}", path.display(), e);
                return None;
            }
        };

        let stored: StoredSession = match serde_yaml::from_str(&contents) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("Ignoring unreadable session file: {}", e);
                return None;
            }
        };

        match codec.decode_token(&stored.token) {
            Ok(token) => Some(token),
            Err(e) => {
                log::debug!("Dropping persisted session: {}", e);
                None
            }
        }
    }

    /// Replace the current session. Persists first, so a write failure
    /// leaves the in-memory session untouched.
    pub fn store(&self, token: SessionToken) -> std::io::Result<()> {
        if let Some(ref path) = self.path {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let stored = StoredSession {
                token: token.raw.clone(),
            };
            let contents = serde_yaml::to_string(&stored)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(path, contents)?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let mut perms = std::fs::metadata(path)?.permissions();
                perms.set_mode(0o600);
                std::fs::set_permissions(path, perms)?;
            }
        }

        let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
        *current = Some(token);
        Ok(())
    }

    /// Clear the session unconditionally. Never fails; a leftover session
    /// file that cannot be removed is only logged.
    pub fn clear(&self) {
        {
            let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
            *current = None;
        }

        if let Some(ref path) = self.path {
            if path.exists() {
                if let Err(e) = std::fs::remove_file(path) {
                    log::warn!("Failed to remove session file {}: {}", path.display(), e);
                }
            }
        }
    }

    /// Identity of the current session, if one is held and unexpired.
    /// Non-blocking: a plain in-memory read.
    pub fn current_identity(&self) -> Option<Identity> {
        let current = self.current.read().unwrap_or_else(|e| e.into_inner());
        current
            .as_ref()
            .filter(|token| !token.is_expired())
            .map(|token| token.identity.clone())
    }

    /// The current token, expired or not (status display wants the expiry)
    pub fn current_token(&self) -> Option<SessionToken> {
        let current = self.current.read().unwrap_or_else(|e| e.into_inner());
        current.clone()
    }
}
