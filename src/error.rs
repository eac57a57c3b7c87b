//! Error types for stu
//!
//! Every failure surfaced to the user maps onto one of a small set of
//! typed variants: gateway failures, missing templates, filesystem
//! failures, and configuration problems.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for stu operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for stu
#[derive(Error, Debug)]
pub enum Error {
    /// Remote service failure: transport, auth, or a malformed response
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// The requested template does not exist remotely
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// A template name cannot be mapped onto a filesystem path
    #[error("Invalid template name '{name}': {reason}")]
    InvalidTemplateName {
        /// The offending template name
        name: String,
        /// Why the name was rejected
        reason: String,
    },

    /// Directory creation, file write, or timestamp update failure
    #[error("Filesystem error at {path}: {source}")]
    Filesystem {
        /// Path the operation targeted
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Multiple independent failures, collected from a pull fan-out
    #[error("{}", format_failures(.0))]
    Multiple(Vec<Error>),
}

/// Render an aggregate failure so every underlying error (and the
/// template name it carries) appears in the surfaced message.
fn format_failures(errors: &[Error]) -> String {
    let details: Vec<String> = errors.iter().map(Error::to_string).collect();
    format!(
        "{} template(s) failed to export: {}",
        errors.len(),
        details.join("; ")
    )
}

impl Error {
    /// Create a gateway error
    pub fn gateway<S: Into<String>>(message: S) -> Self {
        Error::Gateway(message.into())
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    /// Create an invalid template name error
    pub fn invalid_template_name<N: Into<String>, R: Into<String>>(name: N, reason: R) -> Self {
        Error::InvalidTemplateName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create a filesystem error for a specific path
    pub fn filesystem<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Error::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Check if this error means the template does not exist remotely
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::TemplateNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::gateway("connection reset");
        assert_eq!(err.to_string(), "Gateway error: connection reset");

        let err = Error::TemplateNotFound("welcome_fr".to_string());
        assert_eq!(err.to_string(), "Template not found: welcome_fr");
    }

    #[test]
    fn test_error_is_not_found() {
        assert!(Error::TemplateNotFound("x".to_string()).is_not_found());
        assert!(!Error::gateway("timeout").is_not_found());
    }

    #[test]
    fn test_multiple_names_every_failure() {
        let err = Error::Multiple(vec![
            Error::gateway("fetch failed for 'welcome_fr'"),
            Error::TemplateNotFound("welcome_de".to_string()),
        ]);

        let message = err.to_string();
        assert!(message.starts_with("2 template(s) failed to export: "));
        assert!(message.contains("welcome_fr"));
        assert!(message.contains("Template not found: welcome_de"));
    }
}
