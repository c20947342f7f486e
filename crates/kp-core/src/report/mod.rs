//! Report generation

pub mod json;
pub mod markdown;

use crate::verify::VerificationResult;
use crate::{CoreError, CoreResult};
use std::str::FromStr;

/// Report format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    #[default]
    Markdown,
}

impl ReportFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ReportFormat::Json => "application/json",
            ReportFormat::Markdown => "text/markdown",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Markdown => "md",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ReportFormat::Json),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            other => Err(CoreError::Parse(format!("unknown report format '{}'", other))),
        }
    }
}

/// Generate report in specified format
pub fn generate_report(result: &VerificationResult, format: ReportFormat) -> CoreResult<String> {
    match format {
        ReportFormat::Json => json::generate(result),
        ReportFormat::Markdown => Ok(markdown::generate(result)),
    }
}

/// Download file name for a report, e.g. `degree-verification.md`
pub fn report_file_name(result: &VerificationResult, format: ReportFormat) -> String {
    let stem = result
        .file_name
        .rsplit_once('.')
        .map_or(result.file_name.as_str(), |(stem, _)| stem);
    format!("{}-verification.{}", stem, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::ScoringKind;

    #[test]
    fn test_format_parse() {
        assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("html".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_report_file_name() {
        let result = VerificationResult::new("degree.pdf", ScoringKind::Canned, true, 100);
        assert_eq!(report_file_name(&result, ReportFormat::Markdown), "degree-verification.md");
        assert_eq!(report_file_name(&result, ReportFormat::Json), "degree-verification.json");
    }
}
