use thiserror::Error;

/// Errors surfaced to callers of the audit and lead workflows.
///
/// Only the fast audit and lead submission produce errors that reach the
/// caller; enrichment problems are absorbed by the enrichment client.
#[derive(Debug, Error)]
pub enum SeolyzerError {
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        field: Option<String>,
    },

    #[error("Failed to analyze website: {reason}")]
    Audit { url: String, reason: String },

    #[error("Failed to submit lead: {reason}")]
    LeadSubmission { reason: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Validation failed: {}", .errors.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))]
    Validation { errors: Vec<FieldError> },

    #[error("Operation cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error in {content_type}: {reason}")]
    Parse { content_type: String, reason: String },
}

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl SeolyzerError {
    pub fn config_error(message: &str, field: Option<&str>) -> Self {
        Self::Configuration {
            message: message.to_string(),
            field: field.map(ToString::to_string),
        }
    }

    pub fn audit_error(url: &str, reason: impl Into<String>) -> Self {
        Self::Audit {
            url: url.to_string(),
            reason: reason.into(),
        }
    }

    pub fn lead_error(reason: impl Into<String>) -> Self {
        Self::LeadSubmission {
            reason: reason.into(),
        }
    }

    /// Short Swedish message suitable for the end user.
    ///
    /// Provider error text only appears as the detail suffix of audit
    /// failures.
    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration { message, field } => match field {
                Some(field) => format!("Felaktig konfiguration ({}): {}", field, message),
                None => format!("Felaktig konfiguration: {}", message),
            },
            Self::Audit { reason, .. } => {
                format!("Kunde inte analysera webbplatsen: {}", reason)
            }
            Self::LeadSubmission { .. } => {
                "Kunde inte skicka dina uppgifter. Försök igen senare.".to_string()
            }
            Self::InvalidUrl(_) => "Ange en giltig webbadress".to_string(),
            Self::Validation { errors } => errors
                .iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Cancelled => "Analysen avbröts".to_string(),
            Self::Io(e) => format!("Filfel: {}", e),
            Self::Parse { content_type, reason } => {
                format!("Kunde inte tolka {}: {}", content_type, reason)
            }
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Audit { .. } | Self::LeadSubmission { .. } | Self::Cancelled => true,
            Self::InvalidUrl(_) | Self::Validation { .. } => true,
            Self::Configuration { .. } | Self::Io(_) | Self::Parse { .. } => false,
        }
    }
}

/// Result type alias for seolyzer operations
pub type SeolyzerResult<T> = Result<T, SeolyzerError>;

impl From<serde_json::Error> for SeolyzerError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse {
            content_type: "JSON".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for SeolyzerError {
    fn from(error: toml::de::Error) -> Self {
        Self::Parse {
            content_type: "TOML".to_string(),
            reason: error.message().to_string(),
        }
    }
}

/// Error handler for consistent error reporting from the CLI.
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message.
    pub fn handle_error(error: &SeolyzerError) {
        log::error!("{:?}", error);
        eprintln!("❌ {}", error.user_message());

        if error.is_recoverable() {
            eprintln!("🔄 Försök igen");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_error_keeps_detail_in_user_message() {
        let err = SeolyzerError::audit_error("https://exempel.se", "HTTP error! status: 500");
        assert_eq!(
            err.user_message(),
            "Kunde inte analysera webbplatsen: HTTP error! status: 500"
        );
        assert!(err.is_recoverable());
    }

    #[test]
    fn lead_error_hides_provider_detail() {
        let err = SeolyzerError::lead_error("502 Bad Gateway");
        assert_eq!(
            err.user_message(),
            "Kunde inte skicka dina uppgifter. Försök igen senare."
        );
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn validation_error_lists_every_field() {
        let err = SeolyzerError::Validation {
            errors: vec![
                FieldError { field: "name", message: "Namn är obligatoriskt" },
                FieldError { field: "phone", message: "Ange ett giltigt telefonnummer" },
            ],
        };
        assert_eq!(
            err.user_message(),
            "Namn är obligatoriskt\nAnge ett giltigt telefonnummer"
        );
    }
}
