//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use rangecheck_service::{CanonicalRange, RangeRequest, ValueKind};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Outcome of one range check, successful or not.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    /// The evaluated request
    #[serde(flatten)]
    pub request: RangeRequest,

    /// Whether the value lies in the range, when evaluation succeeded
    #[serde(rename = "inRange", skip_serializing_if = "Option::is_none")]
    pub in_range: Option<bool>,

    /// Error message, when evaluation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckReport {
    /// Build a report from an evaluation result.
    pub fn new(request: RangeRequest, outcome: rangecheck_service::Result<bool>) -> Self {
        match outcome {
            Ok(in_range) => Self {
                request,
                in_range: Some(in_range),
                error: None,
            },
            Err(e) => Self {
                request,
                in_range: None,
                error: Some(e.to_string()),
            },
        }
    }

    fn verdict(&self) -> &str {
        match (self.in_range, &self.error) {
            (Some(true), _) => "in range",
            (Some(false), _) => "out of range",
            (None, Some(error)) => error,
            (None, None) => "",
        }
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the result of a single check.
    pub fn format_check(&self, report: &CheckReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(quiet_verdict(report).to_string()),
            OutputFormat::Table => {
                let request = &report.request;
                let message = format!(
                    "{} is {} {} ({})",
                    request.value,
                    if report.in_range == Some(true) { "in" } else { "not in" },
                    request.range,
                    request.type_name
                );
                Ok(match report.in_range {
                    Some(true) => self.success(&message),
                    Some(false) => self.warning(&message),
                    None => self.error(report.verdict()),
                })
            }
        }
    }

    /// Format the results of a batch of checks.
    pub fn format_batch(&self, reports: &[CheckReport]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
            OutputFormat::Quiet => {
                let lines: Vec<&str> = reports.iter().map(quiet_verdict).collect();
                Ok(lines.join("\n"))
            }
            OutputFormat::Table => self.format_batch_table(reports),
        }
    }

    fn format_batch_table(&self, reports: &[CheckReport]) -> Result<String> {
        if reports.is_empty() {
            return Ok(self.colorize("No requests found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["#", "Range", "Value", "Type", "Result"]);

        for (index, report) in reports.iter().enumerate() {
            let request = &report.request;
            builder.push_record([
                (index + 1).to_string().as_str(),
                request.range.as_str(),
                request.value.as_str(),
                request.type_name.as_str(),
                report.verdict(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format a canonicalized range.
    pub fn format_canonical(&self, canonical: &CanonicalRange) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(canonical)?),
            OutputFormat::Quiet => Ok(canonical.rendered.clone()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Type", "Kind", "Canonical"]);
                builder.push_record([
                    canonical.value_kind.as_str(),
                    canonical.bound_kind.as_str(),
                    canonical.rendered.as_str(),
                ]);

                let mut table = builder.build();
                table.with(Style::rounded());
                Ok(table.to_string())
            }
        }
    }

    /// Format the list of supported value kinds.
    pub fn format_kinds(&self, kinds: &[ValueKind]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = kinds
                    .iter()
                    .map(|kind| {
                        serde_json::json!({
                            "type": kind.as_str(),
                            "aliases": kind.aliases(),
                            "example": example_range(*kind),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            OutputFormat::Quiet => {
                let tags: Vec<&str> = kinds.iter().map(|kind| kind.as_str()).collect();
                Ok(tags.join("\n"))
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Type", "Aliases", "Example range"]);

                for kind in kinds {
                    builder.push_record([
                        kind.as_str().to_string(),
                        kind.aliases().join(", "),
                        example_range(*kind).to_string(),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));
                Ok(table.to_string())
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn quiet_verdict(report: &CheckReport) -> &'static str {
    match report.in_range {
        Some(true) => "true",
        Some(false) => "false",
        None => "error",
    }
}

/// A sample range literal for a value kind.
pub fn example_range(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Integer => "[5, 7]",
        ValueKind::Long => "[Infinitive, 9000000000)",
        ValueKind::Float => "(0.5, 1.5]",
        ValueKind::Double => "[-1.5, Infinitive]",
        ValueKind::BigDecimal => "(1.32432, 1.324323423423423423423)",
        ValueKind::BigInteger => "[100000000000000000000, Infinitive]",
        ValueKind::Text => "(abc, xyz)",
        ValueKind::LocalDate => "[2020-01-01, 2020-12-31]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangecheck_service::ServiceError;

    fn in_range_report() -> CheckReport {
        CheckReport::new(RangeRequest::new("[5, 7]", "6", "Integer"), Ok(true))
    }

    fn failed_report() -> CheckReport {
        CheckReport::new(
            RangeRequest::new("[5, 7]", "6", "Instant"),
            Err(ServiceError::UnknownType("Instant".to_string())),
        )
    }

    #[test]
    fn test_check_json_format() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_check(&in_range_report()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json["range"], "[5, 7]");
        assert_eq!(json["typeName"], "Integer");
        assert_eq!(json["inRange"], true);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_check_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(formatter.format_check(&in_range_report()).unwrap(), "true");
        assert_eq!(formatter.format_check(&failed_report()).unwrap(), "error");
    }

    #[test]
    fn test_check_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_check(&in_range_report()).unwrap();
        assert_eq!(output, "✓ 6 is in [5, 7] (Integer)");

        let output = formatter.format_check(&failed_report()).unwrap();
        assert_eq!(output, "✗ Unknown type: Instant");
    }

    #[test]
    fn test_batch_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_batch(&[in_range_report(), failed_report()])
            .unwrap();

        assert!(output.contains("Range"));
        assert!(output.contains("in range"));
        assert!(output.contains("Unknown type: Instant"));
    }

    #[test]
    fn test_batch_json_keeps_errors() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter
            .format_batch(&[in_range_report(), failed_report()])
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(json[0]["inRange"], true);
        assert_eq!(json[1]["error"], "Unknown type: Instant");
        assert!(json[1].get("inRange").is_none());
    }

    #[test]
    fn test_empty_batch() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_batch(&[]).unwrap();
        assert!(output.contains("No requests found"));
    }

    #[test]
    fn test_kinds_quiet_format() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_kinds(&ValueKind::ALL).unwrap();
        assert_eq!(output.lines().count(), ValueKind::ALL.len());
        assert!(output.contains("BigDecimal"));
    }

    #[test]
    fn test_example_ranges_parse() {
        let service = rangecheck_service::RangeService::default();
        for kind in ValueKind::ALL {
            let canonical = service.canonicalize(example_range(kind), kind.as_str()).unwrap();
            assert_eq!(canonical.rendered, example_range(kind));
        }
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
