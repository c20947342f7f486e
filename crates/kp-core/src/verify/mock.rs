//! Mock verification
//!
//! Nothing here looks at file content. Results are made up by a pluggable
//! [`ScoringPolicy`] after a fixed delay.

use super::{AnalysisError, ScoringKind, Timer, VerificationResult, VerificationService};
use crate::config::AppConfig;
use crate::upload::UploadedFile;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Sub-checks every result reports, as (key, label)
pub const SUB_CHECKS: [(&str, &str); 4] = [
    ("digital_signature", "Digital Signature"),
    ("tamper_detection", "Tamper Detection"),
    ("issuer_registry", "Issuer Registry"),
    ("blockchain_seal", "Blockchain Seal"),
];

const ISSUERS: &[&str] = &[
    "Rungta University",
    "Central Board of Secondary Education",
    "St. Xavier's School, Ranchi",
    "St. Columba's College, Hazaribagh",
];

const RECIPIENTS: &[&str] = &["John Doe", "Himanshu Yadav", "Priya Sharma", "Arjun Mehta"];

const CREDENTIAL_TITLES: &[&str] = &[
    "Bachelor of Science",
    "Computer Science Degree",
    "Engineering Degree",
    "MBA Certificate",
    "High School Diploma",
];

/// Turns a file into a verification result
pub trait ScoringPolicy {
    fn kind(&self) -> ScoringKind;

    fn score(&self, file: &UploadedFile) -> VerificationResult;
}

/// Always the same successful record
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedScoring;

impl ScoringPolicy for CannedScoring {
    fn kind(&self) -> ScoringKind {
        ScoringKind::Canned
    }

    fn score(&self, file: &UploadedFile) -> VerificationResult {
        let result = SUB_CHECKS.iter().fold(
            VerificationResult::new(file.name(), ScoringKind::Canned, true, 100),
            |result, (key, label)| result.with_check(key, label, true),
        );

        result
            .with_metadata("student_name", "Student Name", "John Doe")
            .with_metadata("roll_number", "Roll Number", "2024001")
            .with_metadata("board", "Board", "Central Board of Secondary Education")
            .with_metadata("year", "Year", "2024")
            .with_metadata("percentage", "Percentage", "85.6%")
    }
}

/// Probability that each draw comes out positive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckBiases {
    pub valid: f64,
    pub digital_signature: f64,
    pub tamper_detection: f64,
    pub issuer_registry: f64,
    pub blockchain_seal: f64,
}

impl CheckBiases {
    fn for_check(&self, key: &str) -> f64 {
        match key {
            "digital_signature" => self.digital_signature,
            "tamper_detection" => self.tamper_detection,
            "issuer_registry" => self.issuer_registry,
            "blockchain_seal" => self.blockchain_seal,
            _ => self.valid,
        }
    }
}

impl Default for CheckBiases {
    fn default() -> Self {
        Self {
            valid: 0.85,
            digital_signature: 0.9,
            tamper_detection: 0.8,
            issuer_registry: 0.95,
            blockchain_seal: 0.7,
        }
    }
}

/// Independent random verdict, confidence in [80, 100] and per-check draws
#[derive(Debug)]
pub struct RandomizedScoring {
    rng: RefCell<StdRng>,
    biases: CheckBiases,
}

impl RandomizedScoring {
    pub const CONFIDENCE_RANGE: std::ops::RangeInclusive<u8> = 80..=100;

    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Reproducible draws for tests and demos
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_biases(mut self, biases: CheckBiases) -> Self {
        self.biases = biases;
        self
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng: RefCell::new(rng),
            biases: CheckBiases::default(),
        }
    }
}

impl Default for RandomizedScoring {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoringPolicy for RandomizedScoring {
    fn kind(&self) -> ScoringKind {
        ScoringKind::Randomized
    }

    fn score(&self, file: &UploadedFile) -> VerificationResult {
        let mut rng = self.rng.borrow_mut();
        let rng = &mut *rng;

        let is_valid = rng.gen_bool(self.biases.valid.clamp(0.0, 1.0));
        let confidence = rng.gen_range(Self::CONFIDENCE_RANGE);

        let mut result =
            VerificationResult::new(file.name(), ScoringKind::Randomized, is_valid, confidence);
        for (key, label) in SUB_CHECKS {
            let passed = rng.gen_bool(self.biases.for_check(key).clamp(0.0, 1.0));
            result = result.with_check(key, label, passed);
        }

        let pick = |rng: &mut StdRng, pool: &[&str]| {
            pool.choose(rng).copied().unwrap_or_default().to_string()
        };
        let issuer = pick(rng, ISSUERS);
        let recipient = pick(rng, RECIPIENTS);
        let title = pick(rng, CREDENTIAL_TITLES);
        let issue_date = format!(
            "{}-{:02}-{:02}",
            rng.gen_range(2018..=2025),
            rng.gen_range(1..=12),
            rng.gen_range(1..=28)
        );
        let unique_id = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();

        result
            .with_metadata("issuer", "Issuer", issuer)
            .with_metadata("recipient", "Recipient", recipient)
            .with_metadata("credential_title", "Credential", title)
            .with_metadata("issue_date", "Issue Date", issue_date)
            .with_metadata("unique_id", "Certificate ID", unique_id.to_string())
    }
}

/// Stand-in verification service: sleeps, then scores
pub struct MockVerifier<T> {
    timer: T,
    delay: Duration,
    scoring: Box<dyn ScoringPolicy>,
}

impl<T: Timer> MockVerifier<T> {
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(3);

    pub fn new(timer: T, delay: Duration, scoring: Box<dyn ScoringPolicy>) -> Self {
        Self {
            timer,
            delay,
            scoring,
        }
    }

    pub fn from_config(timer: T, config: &AppConfig) -> Self {
        let scoring: Box<dyn ScoringPolicy> = match (config.scoring, config.seed) {
            (ScoringKind::Canned, _) => Box::new(CannedScoring),
            (ScoringKind::Randomized, Some(seed)) => {
                Box::new(RandomizedScoring::seeded(seed).with_biases(config.biases))
            }
            (ScoringKind::Randomized, None) => {
                Box::new(RandomizedScoring::new().with_biases(config.biases))
            }
        };
        Self::new(timer, config.analysis_delay(), scoring)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn scoring_kind(&self) -> ScoringKind {
        self.scoring.kind()
    }
}

#[async_trait(?Send)]
impl<T: Timer> VerificationService for MockVerifier<T> {
    async fn submit(&self, file: &UploadedFile) -> Result<VerificationResult, AnalysisError> {
        debug!(
            file = file.name(),
            delay_ms = self.delay.as_millis() as u64,
            scoring = %self.scoring.kind(),
            "mock verification scheduled"
        );
        self.timer.sleep(self.delay).await;

        // Size is all the mock looks at
        if file.size() == 0 {
            warn!(file = file.name(), "empty upload, no verdict");
            return Err(AnalysisError::EmptyFile(file.name().to_string()));
        }

        let result = self.scoring.score(file);
        info!(
            file = file.name(),
            valid = result.is_valid,
            confidence = result.confidence,
            "mock verification finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::NoDelay;

    fn file() -> UploadedFile {
        UploadedFile::new("degree.pdf", 2 * 1024 * 1024)
    }

    #[test]
    fn test_canned_record() {
        let result = CannedScoring.score(&file());
        assert!(result.is_valid);
        assert_eq!(result.confidence, 100);
        assert_eq!(result.file_name, "degree.pdf");
        assert_eq!(result.metadata.len(), 5);
        assert_eq!(result.metadata("roll_number"), Some("2024001"));
        assert!(result.checks.iter().all(|c| c.passed));
    }

    #[test]
    fn test_randomized_bounds() {
        let scoring = RandomizedScoring::seeded(42);
        for _ in 0..200 {
            let result = scoring.score(&file());
            assert!(RandomizedScoring::CONFIDENCE_RANGE.contains(&result.confidence));
            assert_eq!(result.checks.len(), SUB_CHECKS.len());
            assert_eq!(result.metadata.len(), 5);
            assert_eq!(result.scoring, ScoringKind::Randomized);
        }
    }

    #[test]
    fn test_randomized_is_reproducible() {
        let a = RandomizedScoring::seeded(9).score(&file());
        let b = RandomizedScoring::seeded(9).score(&file());
        assert_eq!(a, b);
    }

    #[test]
    fn test_biases_are_honoured() {
        let always = CheckBiases {
            valid: 1.0,
            digital_signature: 1.0,
            tamper_detection: 1.0,
            issuer_registry: 1.0,
            blockchain_seal: 0.0,
        };
        let scoring = RandomizedScoring::seeded(1).with_biases(always);
        for _ in 0..50 {
            let result = scoring.score(&file());
            assert!(result.is_valid);
            assert_eq!(result.check("digital_signature"), Some(true));
            assert_eq!(result.check("blockchain_seal"), Some(false));
        }
    }

    #[test]
    fn test_randomized_draws_both_outcomes() {
        let scoring = RandomizedScoring::seeded(3);
        let verdicts: Vec<bool> = (0..200).map(|_| scoring.score(&file()).is_valid).collect();
        assert!(verdicts.iter().any(|v| *v));
        assert!(verdicts.iter().any(|v| !*v));
    }

    #[tokio::test]
    async fn test_verifier_from_config() {
        let config = AppConfig {
            scoring: ScoringKind::Canned,
            analysis_delay_ms: 0,
            ..AppConfig::default()
        };
        let verifier = MockVerifier::from_config(NoDelay, &config);
        assert_eq!(verifier.scoring_kind(), ScoringKind::Canned);
        assert_eq!(verifier.delay(), Duration::ZERO);

        let result = verifier.submit(&file()).await.unwrap();
        assert_eq!(result.metadata("student_name"), Some("John Doe"));
    }

    #[tokio::test]
    async fn test_verifier_from_config_applies_biases() {
        let config = AppConfig {
            analysis_delay_ms: 0,
            seed: Some(5),
            biases: CheckBiases {
                valid: 0.0,
                digital_signature: 0.0,
                tamper_detection: 1.0,
                issuer_registry: 1.0,
                blockchain_seal: 1.0,
            },
            ..AppConfig::default()
        };
        let verifier = MockVerifier::from_config(NoDelay, &config);
        for _ in 0..20 {
            let result = verifier.submit(&file()).await.unwrap();
            assert!(!result.is_valid);
            let failed: Vec<&str> = result.failed_checks().map(|c| c.key.as_str()).collect();
            assert_eq!(failed, vec!["digital_signature"]);
        }
    }

    #[tokio::test]
    async fn test_empty_file_has_no_verdict() {
        let verifier = MockVerifier::new(NoDelay, Duration::ZERO, Box::new(CannedScoring));
        let err = verifier
            .submit(&UploadedFile::new("empty.pdf", 0))
            .await
            .unwrap_err();
        assert_eq!(err, AnalysisError::EmptyFile("empty.pdf".to_string()));
    }
}
