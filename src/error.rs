use std::fmt;

/// Custom error type for Retool operations
#[derive(Debug)]
pub enum RetoolError {
    /// HTTP request failed
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// A listing the generator cannot do without could not be fetched
    RemoteFetchFailed { resource: String, reason: String },
    /// Response body did not have the expected shape
    Schema { resource: String, message: String },
    /// A resource refers to another resource that is not part of the run
    DanglingReference {
        kind: String,
        id: String,
        referenced_by: String,
    },
    /// Token not found in any source
    TokenNotFound(String),
    /// Host not found in any source
    HostNotFound(String),
    /// Configuration error
    Config(String),
    /// Failed to write an output file
    Io(String),
}

impl fmt::Display for RetoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetoolError::Http(e) => write!(f, "HTTP request failed: {}", e),
            RetoolError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            RetoolError::RemoteFetchFailed { resource, reason } => {
                write!(f, "Failed to fetch {}: {}", resource, reason)
            }
            RetoolError::Schema { resource, message } => {
                write!(f, "Unexpected response shape for {}: {}", resource, message)
            }
            RetoolError::DanglingReference {
                kind,
                id,
                referenced_by,
            } => write!(
                f,
                "{} '{}' referenced by {} was not found in the organization",
                kind, id, referenced_by
            ),
            RetoolError::TokenNotFound(msg) => write!(f, "{}", msg),
            RetoolError::HostNotFound(msg) => write!(f, "{}", msg),
            RetoolError::Config(msg) => write!(f, "Configuration error: {}", msg),
            RetoolError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for RetoolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RetoolError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RetoolError {
    fn from(err: reqwest::Error) -> Self {
        RetoolError::Http(err)
    }
}

impl From<dialoguer::Error> for RetoolError {
    fn from(err: dialoguer::Error) -> Self {
        RetoolError::Io(err.to_string())
    }
}

impl RetoolError {
    /// Turn a transport or status failure into `RemoteFetchFailed` for `resource`.
    ///
    /// Shape and reference errors keep their own kind.
    pub fn required(self, resource: &str) -> Self {
        match self {
            RetoolError::Http(_) | RetoolError::Api { .. } => RetoolError::RemoteFetchFailed {
                resource: resource.to_string(),
                reason: self.to_string(),
            },
            other => other,
        }
    }
}

/// Result type alias for Retool operations
pub type Result<T> = std::result::Result<T, RetoolError>;
