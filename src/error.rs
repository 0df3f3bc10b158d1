//! Error types and handling for the `TravelHub` dashboard

use thiserror::Error;

use crate::providers::Endpoint;

/// Failure of a single upstream fetch.
///
/// This is the only error a data provider ever sees, and it never leaves the
/// provider: every variant is settled into the domain's fallback dataset.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request did not complete within the configured timeout
    #[error("request to {endpoint} timed out")]
    Timeout { endpoint: Endpoint },

    /// Connection refused, DNS failure, reset, ...
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: Endpoint, message: String },

    /// Upstream answered with a non-success status
    #[error("{endpoint} answered with HTTP {status}")]
    Status { endpoint: Endpoint, status: u16 },

    /// Body could not be decoded into the expected shape
    #[error("malformed response from {endpoint}: {message}")]
    Malformed { endpoint: Endpoint, message: String },
}

impl FetchError {
    /// Endpoint the failed request was aimed at
    #[must_use]
    pub fn endpoint(&self) -> Endpoint {
        match self {
            FetchError::Timeout { endpoint }
            | FetchError::Transport { endpoint, .. }
            | FetchError::Status { endpoint, .. }
            | FetchError::Malformed { endpoint, .. } => *endpoint,
        }
    }

    /// Build from a reqwest error, separating timeouts from other transport failures
    pub fn from_reqwest(endpoint: Endpoint, err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout { endpoint }
        } else if let Some(status) = err.status() {
            FetchError::Status {
                endpoint,
                status: status.as_u16(),
            }
        } else {
            FetchError::Transport {
                endpoint,
                message: err.to_string(),
            }
        }
    }

    pub fn malformed(endpoint: Endpoint, err: &serde_json::Error) -> Self {
        FetchError::Malformed {
            endpoint,
            message: err.to_string(),
        }
    }
}

/// Main error type for the `TravelHub` application
#[derive(Error, Debug)]
pub enum TravelHubError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// HTTP server errors
    #[error("Server error: {message}")]
    Server { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TravelHubError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new server error
    pub fn server<S: Into<String>>(message: S) -> Self {
        Self::Server {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelHubError::Config { message } => {
                format!("Configuration error: {message}. Please check your config file.")
            }
            TravelHubError::Server { message } => {
                format!("Unable to start the dashboard server ({message}). Is the port already in use?")
            }
            TravelHubError::Io { source } => {
                format!("The dashboard server stopped unexpectedly: {source}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TravelHubError::config("bad port");
        assert!(matches!(config_err, TravelHubError::Config { .. }));

        let server_err = TravelHubError::server("bind failed");
        assert!(matches!(server_err, TravelHubError::Server { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = TravelHubError::config("zoom out of range");
        assert!(config_err.user_message().contains("zoom out of range"));

        let server_err = TravelHubError::server("Failed to bind 0.0.0.0:8050");
        assert!(server_err.user_message().contains("port"));
        assert!(server_err.user_message().contains("0.0.0.0:8050"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let hub_err: TravelHubError = io_err.into();
        assert!(matches!(hub_err, TravelHubError::Io { .. }));
    }

    #[test]
    fn test_fetch_error_display_names_endpoint() {
        let err = FetchError::Status {
            endpoint: Endpoint::Safety,
            status: 503,
        };
        assert_eq!(err.to_string(), "/safety answered with HTTP 503");
        assert_eq!(err.endpoint(), Endpoint::Safety);
    }

    #[test]
    fn test_malformed_from_serde() {
        let serde_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = FetchError::malformed(Endpoint::Travel, &serde_err);
        assert!(matches!(err, FetchError::Malformed { endpoint: Endpoint::Travel, .. }));
    }
}
