use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuditProviderError {
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
    #[error("No Lighthouse results returned")]
    MissingLighthouseResult,
    #[error("Request timed out")]
    Timeout,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Invalid response body: {0}")]
    SerializationError(String),
}

impl From<reqwest::Error> for AuditProviderError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_decode() {
            Self::SerializationError(error.to_string())
        } else {
            Self::NetworkError(error.to_string())
        }
    }
}
