//! Core data types shared across the crate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata for one remote template, as returned by the list operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSummary {
    /// Template name (unique, may embed separator substrings)
    pub name: String,
    /// Remote creation timestamp
    pub created_at: DateTime<Utc>,
}

impl TemplateSummary {
    /// Create a template summary
    pub fn new<S: Into<String>>(name: S, created_at: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            created_at,
        }
    }
}

/// A fetched template: its name plus the stored content variants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateContent {
    /// Template name
    pub name: String,
    /// The stored content variants
    pub content: TemplateBody,
}

/// The content variants a template stores remotely
///
/// Any of the three may be absent; a template with no HTML variant
/// cannot be exported by `pull`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateBody {
    /// Subject line
    pub subject: Option<String>,
    /// HTML variant
    pub html: Option<String>,
    /// Plain-text variant
    pub text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_construction() {
        let created = DateTime::from_timestamp(1_714_560_000, 0).unwrap();
        let summary = TemplateSummary::new("welcome_fr", created);
        assert_eq!(summary.name, "welcome_fr");
        assert_eq!(summary.created_at, created);
    }

    #[test]
    fn test_body_serializes_all_variants() {
        let body = TemplateBody {
            subject: Some("Hello".to_string()),
            html: Some("<p>Hi</p>".to_string()),
            text: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["subject"], "Hello");
        assert_eq!(json["html"], "<p>Hi</p>");
        assert!(json["text"].is_null());
    }
}
