//! HTTP credential verifier
//!
//! Posts credentials to the configured login endpoint and maps the response
//! onto the auth error taxonomy. 401/403 mean the credentials themselves were
//! rejected; anything else non-2xx is an infrastructure problem and must not
//! be presented as a bad password.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use serde::{Deserialize, Serialize};

use super::{CredentialVerifier, Identity};
use crate::error::AuthError;

/// Login request body, canonical wire contract
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    user: LoginUser,
}

#[derive(Debug, Deserialize)]
struct LoginUser {
    id: String,
    email: String,
    #[serde(default)]
    username: Option<String>,
}

/// Credential verifier backed by a remote HTTP login endpoint
pub struct HttpCredentialVerifier {
    http: HttpClient,
    login_url: String,
}

impl HttpCredentialVerifier {
    pub fn new(login_url: impl Into<String>) -> Result<Self, AuthError> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AuthError::TransportFailure(e.to_string()))?;

        Ok(Self {
            http,
            login_url: login_url.into(),
        })
    }
}

#[async_trait]
impl CredentialVerifier for HttpCredentialVerifier {
    async fn verify(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        let response = self
            .http
            .post(&self.login_url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(AuthError::from)?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                log::debug!("Login endpoint rejected credentials with {}", status);
                Err(AuthError::InvalidCredentials)
            }
            s if s.is_success() => {
                let body: LoginResponse = response
                    .json()
                    .await
                    .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

                let LoginUser { id, email, username } = body.user;
                let display_name = username.unwrap_or_else(|| email.clone());
                Ok(Identity {
                    id,
                    email,
                    display_name,
                })
            }
            s => Err(AuthError::TransportFailure(format!(
                "login endpoint returned {}",
                s
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_verify_success_with_username() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/login")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "username": "jane@example.com",
                "password": "hunter2",
            })))
            .with_status(200)
            .with_body(r#"{"user": {"id": "u-1", "email": "jane@example.com", "username": "jane"}}"#)
            .create_async()
            .await;

        let verifier = HttpCredentialVerifier::new(format!("{}/login", server.url())).unwrap();
        let identity = verifier.verify("jane@example.com", "hunter2").await.unwrap();

        assert_eq!(identity.id, "u-1");
        assert_eq!(identity.email, "jane@example.com");
        assert_eq!(identity.display_name, "jane");
    }

    #[tokio::test]
    async fn test_verify_display_name_falls_back_to_email() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/login")
            .with_status(200)
            .with_body(r#"{"user": {"id": "u-2", "email": "sam@example.com"}}"#)
            .create_async()
            .await;

        let verifier = HttpCredentialVerifier::new(format!("{}/login", server.url())).unwrap();
        let identity = verifier.verify("sam@example.com", "pw").await.unwrap();

        assert_eq!(identity.display_name, "sam@example.com");
    }

    #[tokio::test]
    async fn test_verify_rejection_is_invalid_credentials() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/login")
            .with_status(401)
            .with_body(r#"{"message": "bad credentials"}"#)
            .create_async()
            .await;

        let verifier = HttpCredentialVerifier::new(format!("{}/login", server.url())).unwrap();
        let err = verifier.verify("jane", "wrong").await.unwrap_err();

        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_verify_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/login")
            .with_status(200)
            .with_body(r#"{"unexpected": true}"#)
            .create_async()
            .await;

        let verifier = HttpCredentialVerifier::new(format!("{}/login", server.url())).unwrap();
        let err = verifier.verify("jane", "pw").await.unwrap_err();

        assert!(matches!(err, AuthError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_verify_server_error_is_transport_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/login")
            .with_status(500)
            .create_async()
            .await;

        let verifier = HttpCredentialVerifier::new(format!("{}/login", server.url())).unwrap();
        let err = verifier.verify("jane", "pw").await.unwrap_err();

        assert!(matches!(err, AuthError::TransportFailure(_)));
    }
}
