//! Error types for the talentscout CLI

use thiserror::Error;

/// Result type alias for talentscout operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Authentication errors surfaced by the auth bridge.
///
/// Only `InvalidCredentials` is safe to show verbatim to the end user; the
/// other variants describe infrastructure problems and get a generic message
/// at the presentation layer.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Username and password are both required")]
    MissingCredentials,

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Malformed login response: {0}")]
    MalformedResponse(String),

    #[error("Login request failed: {0}")]
    TransportFailure(String),

    #[error("Failed to persist session: {0}")]
    Session(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AuthError::TransportFailure("Request timed out".to_string())
        } else if err.is_connect() {
            AuthError::TransportFailure("Failed to connect to login endpoint".to_string())
        } else {
            AuthError::TransportFailure(err.to_string())
        }
    }
}

/// Session token decode failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Session token has expired")]
    Expired,

    #[error("Session token signature is invalid")]
    SignatureInvalid,
}

/// Candidate search errors
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Enter a search term first")]
    EmptyQuery,

    #[error("Sign in before searching")]
    NotAuthenticated,

    #[error("Search request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Malformed search response: {0}")]
    MalformedResponse(String),

    #[error("Network error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::Transport("Request timed out".to_string())
        } else if err.is_connect() {
            SearchError::Transport("Failed to connect to search backend".to_string())
        } else {
            SearchError::Transport(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("Backend URL not configured. Run `talentscout init` or set TALENTSCOUT_BACKEND_URL.")]
    MissingBackendUrl,

    #[error("Login endpoint not configured. Run `talentscout init` or set TALENTSCOUT_LOGIN_URL.")]
    MissingLoginUrl,

    #[error(
        "Session secret not configured. Run `talentscout init` or set TALENTSCOUT_SESSION_SECRET."
    )]
    MissingSessionSecret,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_missing_credentials_message() {
        let err = AuthError::MissingCredentials;
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn test_auth_error_invalid_credentials_message() {
        let err = AuthError::InvalidCredentials;
        assert!(err.to_string().contains("Invalid username or password"));
    }

    #[test]
    fn test_auth_error_malformed_response() {
        let err = AuthError::MalformedResponse("missing field `user`".to_string());
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_token_error_messages() {
        assert!(TokenError::Expired.to_string().contains("expired"));
        assert!(
            TokenError::SignatureInvalid
                .to_string()
                .contains("signature")
        );
    }

    #[test]
    fn test_search_error_request_failed() {
        let err = SearchError::RequestFailed {
            status: 500,
            message: "backend exploded".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("backend exploded"));
    }

    #[test]
    fn test_search_error_not_authenticated() {
        let err = SearchError::NotAuthenticated;
        assert!(err.to_string().contains("Sign in"));
    }

    #[test]
    fn test_config_error_missing_backend_url() {
        let err = ConfigError::MissingBackendUrl;
        assert!(err.to_string().contains("TALENTSCOUT_BACKEND_URL"));
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }

    #[test]
    fn test_error_from_auth_error() {
        let err: Error = AuthError::InvalidCredentials.into();
        match err {
            Error::Auth(AuthError::InvalidCredentials) => (),
            _ => panic!("Expected Error::Auth(AuthError::InvalidCredentials)"),
        }
    }

    #[test]
    fn test_error_from_search_error() {
        let err: Error = SearchError::EmptyQuery.into();
        match err {
            Error::Search(SearchError::EmptyQuery) => (),
            _ => panic!("Expected Error::Search(SearchError::EmptyQuery)"),
        }
    }
}
