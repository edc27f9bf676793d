//! Error types for imagery queries.

use thiserror::Error;

/// Errors that can occur while fetching image metadata.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageryError {
    /// The service answered with a non-success HTTP status.
    #[error("Mapillary API Error: {status} {body}")]
    Remote { status: u16, body: String },

    /// The request never produced a response (DNS, connect, TLS, body read).
    /// Carries the transport's own message.
    #[error("{0}")]
    Transport(String),

    /// The response body was not the expected JSON document.
    /// Carries the JSON parser's own message.
    #[error("{0}")]
    Decode(String),

    /// The configured base URL could not be turned into a request URL.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl ImageryError {
    /// HTTP status carried by a remote service error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ImageryError::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_display_includes_status_and_body() {
        let err = ImageryError::Remote {
            status: 500,
            body: "server error".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("server error"));
    }

    #[test]
    fn test_transport_and_decode_messages_are_not_prefixed() {
        let transport = ImageryError::Transport("error sending request".to_string());
        assert_eq!(transport.to_string(), "error sending request");

        let decode = ImageryError::Decode("EOF while parsing a value".to_string());
        assert_eq!(decode.to_string(), "EOF while parsing a value");
    }

    #[test]
    fn test_status_only_for_remote_errors() {
        let remote = ImageryError::Remote {
            status: 403,
            body: String::new(),
        };
        assert_eq!(remote.status(), Some(403));
        assert_eq!(ImageryError::Transport("reset".into()).status(), None);
        assert_eq!(ImageryError::Decode("eof".into()).status(), None);
    }
}
