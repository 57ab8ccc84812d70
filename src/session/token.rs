//! Signed session token codec
//!
//! Session tokens are HS256 JWTs minted by this binary and verified against
//! the configured signing secret. Encoding and decoding are pure: no network,
//! no disk, and decoding the same token twice yields the same identity.

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::Identity;
use crate::error::TokenError;

/// Claims carried by a session token
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User id
    sub: String,
    email: String,
    name: String,
    iat: i64,
    exp: i64,
}

/// A signed, time-bounded session token.
///
/// Owned by the auth bridge; consumers read the derived identity fields but
/// never construct or mutate one.
#[derive(Debug, Clone)]
pub struct SessionToken {
    /// Encoded JWT string
    pub raw: String,
    /// Identity the token proves
    pub identity: Identity,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionToken {
    /// Whether the token is past its expiry
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Encoder/decoder for session tokens, bound to one signing secret
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry must be exact, not fuzzy
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Encode an identity into a signed token valid for `ttl` from `issued_at`
    pub fn encode(
        &self,
        identity: &Identity,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<SessionToken, TokenError> {
        let expires_at = issued_at + ttl;
        let claims = Claims {
            sub: identity.id.clone(),
            email: identity.email.clone(),
            name: identity.display_name.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let raw = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| TokenError::SignatureInvalid)?;

        Ok(SessionToken {
            raw,
            identity: identity.clone(),
            issued_at: Utc.timestamp_opt(claims.iat, 0).single().unwrap_or(issued_at),
            expires_at: Utc.timestamp_opt(claims.exp, 0).single().unwrap_or(expires_at),
        })
    }

    /// Decode and verify a raw token, returning the identity it proves
    pub fn decode(&self, raw: &str) -> Result<Identity, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(raw, &self.decoding, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::SignatureInvalid,
            })?;

        Ok(Identity {
            id: data.claims.sub,
            email: data.claims.email,
            display_name: data.claims.name,
        })
    }

    /// Decode into a full [`SessionToken`], preserving the timestamps
    pub fn decode_token(&self, raw: &str) -> Result<SessionToken, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(raw, &self.decoding, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::SignatureInvalid,
            })?;

        let issued_at = Utc
            .timestamp_opt(data.claims.iat, 0)
            .single()
            .ok_or(TokenError::SignatureInvalid)?;
        let expires_at = Utc
            .timestamp_opt(data.claims.exp, 0)
            .single()
            .ok_or(TokenError::SignatureInvalid)?;

        Ok(SessionToken {
            raw: raw.to_string(),
            identity: Identity {
                id: data.claims.sub,
                email: data.claims.email,
                display_name: data.claims.name,
            },
            issued_at,
            expires_at,
        })
    }
}
