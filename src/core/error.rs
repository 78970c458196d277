use thiserror::Error;

pub(crate) const INVALID_RESPONSE_FORMAT: &str = "Invalid response format from the API.";

/// Every failure the client can report.
///
/// `Request` means the call never produced an HTTP response. `Api` means the
/// server answered, either with an error status or with a body that does not
/// look like a chat completion.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{message}")]
    Request {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{message}")]
    Api {
        message: String,
        status_code: Option<u16>,
    },

    /// Raised while building a client, never by a completion call.
    #[error("Client configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    pub(crate) fn invalid_format() -> Self {
        ClientError::Api {
            message: INVALID_RESPONSE_FORMAT.to_string(),
            status_code: None,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ClientError::Request { message, .. } | ClientError::Api { message, .. } => message,
            ClientError::Configuration(message) => message,
        }
    }

    /// HTTP status returned by the server, if the failure carried one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Api { status_code, .. } => *status_code,
            _ => None,
        }
    }

    pub fn is_api_error(&self) -> bool {
        matches!(self, ClientError::Api { .. })
    }

    pub fn is_request_error(&self) -> bool {
        matches!(self, ClientError::Request { .. })
    }
}
