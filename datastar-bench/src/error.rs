//! Error types and HTTP response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

use crate::sse::PatchError;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the benchmark server
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// A page could not be read at startup
    #[error("Failed to load asset {}: {source}", .path.display())]
    Asset {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The listening socket could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// Address the server tried to listen on
        addr: SocketAddr,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Patch event could not be built
    #[error("Patch error: {0}")]
    Patch(#[from] PatchError),

    /// Subscriber installation failed
    #[error("Tracing error: {0}")]
    Tracing(String),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);

        let message = match self {
            Error::Patch(_) => "Failed to build patch event",
            _ => "Internal server error",
        };

        (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_names_the_path() {
        let err = Error::Asset {
            path: PathBuf::from("/srv/pages/index.html"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        let message = err.to_string();
        assert!(message.contains("/srv/pages/index.html"));
        assert!(message.contains("missing"));
    }

    #[test]
    fn test_bind_error_names_the_address() {
        let err = Error::Bind {
            addr: SocketAddr::from(([127, 0, 0, 1], 8091)),
            source: std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"),
        };
        assert_eq!(err.to_string(), "Failed to bind 127.0.0.1:8091: in use");
    }

    #[test]
    fn test_error_response_status() {
        let response = Error::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = Error::Patch(PatchError::InvalidEventId).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
