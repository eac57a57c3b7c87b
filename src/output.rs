//! Terminal output rendering
//!
//! Fixed-width table rendering for `list` and JSON rendering for `get`.

use crate::error::Result;
use crate::types::{TemplateContent, TemplateSummary};
use chrono::{DateTime, SecondsFormat, Utc};

/// Header row label for the template listing table.
const TABLE_TITLE: &str = "Templates";

/// Render the template listing as a fixed-width table.
///
/// The table always carries a "Templates" header row; an empty template
/// set renders the header with zero data rows.
pub fn render_template_table(templates: &[TemplateSummary]) -> String {
    let rows: Vec<(String, String)> = templates
        .iter()
        .map(|t| (t.name.clone(), format_timestamp(&t.created_at)))
        .collect();

    let title_width = TABLE_TITLE.chars().count();

    if rows.is_empty() {
        let bar = "─".repeat(title_width + 2);
        return format!("┌{bar}┐\n│ {TABLE_TITLE} │\n└{bar}┘\n");
    }

    let name_width = rows
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);
    let mut time_width = rows
        .iter()
        .map(|(_, time)| time.chars().count())
        .max()
        .unwrap_or(0);

    // The header spans both columns; widen the second column if the
    // title would not fit.
    let mut span = name_width + time_width + 3;
    if span < title_width {
        time_width += title_width - span;
        span = title_width;
    }

    let name_bar = "─".repeat(name_width + 2);
    let time_bar = "─".repeat(time_width + 2);
    let span_bar = "─".repeat(span + 2);

    let mut output = String::new();
    output.push_str(&format!("┌{span_bar}┐\n"));
    output.push_str(&format!("│ {TABLE_TITLE:<span$} │\n"));
    output.push_str(&format!("├{name_bar}┬{time_bar}┤\n"));

    for (name, time) in &rows {
        output.push_str(&format!("│ {name:<name_width$} │ {time:<time_width$} │\n"));
    }

    output.push_str(&format!("└{name_bar}┴{time_bar}┘\n"));
    output
}

/// Render the fetched content structure as pretty JSON, exactly the
/// shape the gateway returned.
pub fn render_content(content: &TemplateContent) -> Result<String> {
    Ok(serde_json::to_string_pretty(&content.content)?)
}

/// Format a creation timestamp for table display.
fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TemplateBody;

    fn summary(name: &str, secs: i64) -> TemplateSummary {
        TemplateSummary::new(name, DateTime::from_timestamp(secs, 0).unwrap())
    }

    #[test]
    fn test_empty_table_keeps_header() {
        let table = render_template_table(&[]);
        assert!(table.contains("Templates"));
        assert_eq!(table.lines().count(), 3);
    }

    #[test]
    fn test_table_contains_rows() {
        let table = render_template_table(&[
            summary("welcome_fr", 1_714_560_000),
            summary("welcome_de", 1_714_646_400),
        ]);

        assert!(table.contains("Templates"));
        assert!(table.contains("welcome_fr"));
        assert!(table.contains("welcome_de"));
        assert!(table.contains("2024-05-01T10:40:00Z"));
        // header + title + divider + 2 rows + footer
        assert_eq!(table.lines().count(), 6);
    }

    #[test]
    fn test_table_lines_align() {
        let table = render_template_table(&[summary("a", 0), summary("much_longer_name", 0)]);
        let widths: Vec<usize> = table.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_render_content_is_json() {
        let content = TemplateContent {
            name: "welcome".to_string(),
            content: TemplateBody {
                subject: Some("Hi".to_string()),
                html: Some("<p>Hi</p>".to_string()),
                text: None,
            },
        };

        let rendered = render_content(&content).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["subject"], "Hi");
        assert_eq!(value["html"], "<p>Hi</p>");
        assert!(value["text"].is_null());
    }
}
