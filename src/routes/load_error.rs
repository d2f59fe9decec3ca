use std::fmt::Display;

/// Failure kinds when fetching or parsing the flights resource.
///
/// A failed load is terminal: there is no retry and no partial result.
#[derive(Debug)]
pub enum LoadError {
    /// The remote host could not be reached.
    NoConnection,
    /// The request did not complete within the client timeout.
    Timeout,
    /// The server answered with a non-success status code.
    BadStatus(u16),
    /// Reading a local resource failed.
    Io(std::io::Error),
    /// The body is not a valid flights document.
    Parse(serde_json::Error),
    Unknown,
}

impl Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::NoConnection => write!(f, "NoConnection"),
            LoadError::Timeout => write!(f, "Timeout"),
            LoadError::BadStatus(code) => write!(f, "BadStatus({code})"),
            LoadError::Io(e) => write!(f, "Io: {e}"),
            LoadError::Parse(e) => write!(f, "Parse: {e}"),
            LoadError::Unknown => write!(f, "Unknown"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            LoadError::Timeout
        } else if value.is_connect() {
            LoadError::NoConnection
        } else if let Some(status) = value.status() {
            LoadError::BadStatus(status.as_u16())
        } else {
            LoadError::Unknown
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(value: std::io::Error) -> Self { LoadError::Io(value) }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self { LoadError::Parse(value) }
}
