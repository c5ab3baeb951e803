use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, TLS, timeout or body decoding failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// Status code returned by the server, if it answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Http(err) => err.status(),
            ClientError::Api { status, .. } => Some(*status),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_and_not_found() {
        let err = ClientError::Api {
            status: StatusCode::NOT_FOUND,
            message: "Item not found".to_string(),
        };

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "API error (404 Not Found): Item not found");
    }

    #[test]
    fn test_bad_request_is_not_not_found() {
        let err = ClientError::Api {
            status: StatusCode::BAD_REQUEST,
            message: "name must not be empty".to_string(),
        };

        assert!(!err.is_not_found());
        assert_eq!(err.status(), Some(StatusCode::BAD_REQUEST));
    }
}
