//! Error types for the Marketo client.
//!
//! Provides an error hierarchy mapping configuration, authentication,
//! transport, and Marketo API failures to semantic error types.

use thiserror::Error;

/// Result type for Marketo operations
pub type MarketoResult<T> = Result<T, MarketoError>;

/// Root error type for the Marketo integration
#[derive(Error, Debug)]
pub enum MarketoError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Command resolution error
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Network/transport error
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Response decoding error
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Remote API error (envelope with success=false)
    #[error("API error: {code} - {message}")]
    Api {
        /// Marketo error code (e.g. "1006")
        code: String,
        /// Error message supplied by the API
        message: String,
    },
}

impl MarketoError {
    /// Get a stable error code for this error category
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "MARKETO_CONFIG",
            Self::Command(_) => "MARKETO_COMMAND",
            Self::Auth(_) => "MARKETO_AUTH",
            Self::Transport(_) => "MARKETO_TRANSPORT",
            Self::Decode(_) => "MARKETO_DECODE",
            Self::Api { .. } => "MARKETO_API",
        }
    }

    /// Check if this error is retryable by the caller.
    ///
    /// The client itself never retries; this is a hint for host applications.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport(TransportError::Timeout)
                | Self::Transport(TransportError::ConnectionFailed { .. })
        )
    }
}

/// Configuration errors, raised before any network activity
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Neither base URL nor munchkin id supplied
    #[error("Either a base URL or a munchkin id is required")]
    MissingBaseUrl,

    /// Client id is missing
    #[error("Client id is missing")]
    MissingClientId,

    /// Client secret is missing
    #[error("Client secret is missing")]
    MissingClientSecret,

    /// Invalid configuration value
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error message
        message: String,
    },
}

/// Command resolution errors, raised before any network activity
#[derive(Error, Debug)]
pub enum CommandError {
    /// Command name is absent from the catalog
    #[error("Unknown command: {name}")]
    UnknownCommand {
        /// The unresolved command name
        name: String,
    },

    /// A required parameter is absent from the arguments
    #[error("Missing required parameter '{parameter}' for command '{command}'")]
    MissingParameter {
        /// Command name
        command: String,
        /// Missing parameter name
        parameter: String,
    },

    /// A path placeholder could not be substituted
    #[error("Invalid URL after substitution for command '{command}': {message}")]
    InvalidUrl {
        /// Command name
        command: String,
        /// Error message
        message: String,
    },
}

/// Token endpoint failures
#[derive(Error, Debug)]
pub enum AuthError {
    /// Token endpoint returned a non-success status
    #[error("Token request failed with status {status}: {body}")]
    TokenRequestFailed {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// Token endpoint returned an unparseable payload
    #[error("Malformed token response: {message}")]
    MalformedTokenResponse {
        /// Error message
        message: String,
    },

    /// Access token could not be placed in an Authorization header
    #[error("Access token is not a valid header value")]
    InvalidHeaderValue,
}

/// Network errors, propagated unchanged from the transport
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection failed
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message
        message: String,
    },

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Other HTTP-layer error
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout
        } else if err.is_connect() {
            TransportError::ConnectionFailed {
                message: err.to_string(),
            }
        } else {
            TransportError::Http(err.to_string())
        }
    }
}

/// Response decoding errors
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Response body is not valid JSON or does not match the envelope shape
    #[error("Deserialization error: {message}")]
    Deserialization {
        /// Error message
        message: String,
    },

    /// Server answered with an unexpected HTTP status
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Deserialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = MarketoError::Configuration(ConfigurationError::MissingBaseUrl);
        assert_eq!(err.error_code(), "MARKETO_CONFIG");

        let err = MarketoError::Api {
            code: "1006".to_string(),
            message: "Field not found".to_string(),
        };
        assert_eq!(err.error_code(), "MARKETO_API");
    }

    #[test]
    fn test_is_retryable() {
        assert!(MarketoError::Transport(TransportError::Timeout).is_retryable());
        assert!(MarketoError::Transport(TransportError::ConnectionFailed {
            message: "refused".to_string()
        })
        .is_retryable());

        assert!(!MarketoError::Auth(AuthError::InvalidHeaderValue).is_retryable());
        assert!(!MarketoError::Api {
            code: "602".to_string(),
            message: "Access token expired".to_string()
        }
        .is_retryable());
    }

    #[test]
    fn test_command_error_display() {
        let err = CommandError::MissingParameter {
            command: "getList".to_string(),
            parameter: "id".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Missing required parameter 'id' for command 'getList'"
        );
    }
}
