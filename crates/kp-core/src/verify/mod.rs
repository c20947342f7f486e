//! Verification service seam
//!
//! The upload flow only knows [`VerificationService`]. The workspace ships
//! a single implementation, [`MockVerifier`], which waits on a [`Timer`]
//! and then asks a [`ScoringPolicy`] to make up a result.

pub mod mock;

pub use mock::{CannedScoring, CheckBiases, MockVerifier, RandomizedScoring, ScoringPolicy};

use crate::upload::UploadedFile;
use crate::CoreError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Verifies one uploaded certificate.
///
/// `?Send` so browser futures qualify.
#[async_trait(?Send)]
pub trait VerificationService {
    async fn submit(&self, file: &UploadedFile) -> Result<VerificationResult, AnalysisError>;
}

/// Deferred wake-up used by the mock
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

/// Completes immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait(?Send)]
impl Timer for NoDelay {
    async fn sleep(&self, _duration: Duration) {}
}

/// Analysis could not produce a verdict. Distinct from a negative verdict.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisError {
    #[error("file '{0}' is empty")]
    EmptyFile(String),
}

/// Named sub-check outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCheck {
    pub key: String,
    pub label: String,
    pub passed: bool,
}

/// Named metadata value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataField {
    pub key: String,
    pub label: String,
    pub value: String,
}

/// Outcome of one verification. Checks and metadata keep insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub file_name: String,
    pub scoring: ScoringKind,
    pub is_valid: bool,
    /// Percentage, 0–100
    pub confidence: u8,
    pub checks: Vec<SubCheck>,
    pub metadata: Vec<MetadataField>,
}

impl VerificationResult {
    pub fn new(file_name: impl Into<String>, scoring: ScoringKind, is_valid: bool, confidence: u8) -> Self {
        Self {
            file_name: file_name.into(),
            scoring,
            is_valid,
            confidence: confidence.min(100),
            checks: Vec::new(),
            metadata: Vec::new(),
        }
    }

    pub fn with_check(mut self, key: &str, label: &str, passed: bool) -> Self {
        self.checks.push(SubCheck {
            key: key.to_string(),
            label: label.to_string(),
            passed,
        });
        self
    }

    pub fn with_metadata(mut self, key: &str, label: &str, value: impl Into<String>) -> Self {
        self.metadata.push(MetadataField {
            key: key.to_string(),
            label: label.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn check(&self, key: &str) -> Option<bool> {
        self.checks.iter().find(|c| c.key == key).map(|c| c.passed)
    }

    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|m| m.key == key)
            .map(|m| m.value.as_str())
    }

    pub fn failed_checks(&self) -> impl Iterator<Item = &SubCheck> {
        self.checks.iter().filter(|c| !c.passed)
    }

    pub fn headline(&self) -> &'static str {
        if self.is_valid {
            "Certificate Verified"
        } else {
            "Verification Failed"
        }
    }
}

/// Which scoring policy a mock verifier uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringKind {
    Canned,
    #[default]
    Randomized,
}

impl fmt::Display for ScoringKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringKind::Canned => write!(f, "canned"),
            ScoringKind::Randomized => write!(f, "randomized"),
        }
    }
}

impl FromStr for ScoringKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "canned" | "fixed" => Ok(ScoringKind::Canned),
            "randomized" | "random" => Ok(ScoringKind::Randomized),
            other => Err(CoreError::Parse(format!("unknown scoring policy '{}'", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_lookup() {
        let result = VerificationResult::new("a.pdf", ScoringKind::Canned, true, 150)
            .with_check("signature", "Digital Signature", true)
            .with_check("seal", "Blockchain Seal", false)
            .with_metadata("issuer", "Issuer", "Rungta University");

        assert_eq!(result.confidence, 100);
        assert_eq!(result.check("signature"), Some(true));
        assert_eq!(result.check("seal"), Some(false));
        assert_eq!(result.check("missing"), None);
        assert_eq!(result.metadata("issuer"), Some("Rungta University"));
        assert_eq!(result.failed_checks().count(), 1);
        assert_eq!(result.headline(), "Certificate Verified");
    }

    #[test]
    fn test_scoring_kind_parse() {
        assert_eq!("canned".parse::<ScoringKind>().unwrap(), ScoringKind::Canned);
        assert_eq!("Random".parse::<ScoringKind>().unwrap(), ScoringKind::Randomized);
        assert!("bayesian".parse::<ScoringKind>().is_err());
        assert_eq!(ScoringKind::default(), ScoringKind::Randomized);
    }
}
