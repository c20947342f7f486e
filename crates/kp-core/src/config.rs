//! Application configuration

use crate::upload::{Enforcement, UploadPolicy};
use crate::verify::{CheckBiases, ScoringKind};
use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const ENV_ANALYSIS_DELAY_MS: &str = "KP_ANALYSIS_DELAY_MS";
pub const ENV_SCORING: &str = "KP_SCORING";
pub const ENV_UPLOAD_STRICT: &str = "KP_UPLOAD_STRICT";
pub const ENV_MAX_UPLOAD_BYTES: &str = "KP_MAX_UPLOAD_BYTES";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Delay before the mock verifier answers
    pub analysis_delay_ms: u64,
    /// Scoring policy for the mock verifier
    pub scoring: ScoringKind,
    /// Seed for randomized scoring; entropy when unset
    pub seed: Option<u64>,
    /// Per-draw odds for randomized scoring
    pub biases: CheckBiases,
    pub upload: UploadPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: 3000,
            scoring: ScoringKind::default(),
            seed: None,
            biases: CheckBiases::default(),
            upload: UploadPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `KP_*` environment variables
    pub fn from_env() -> CoreResult<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Load a JSON config file; missing keys take their defaults
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Apply overrides from `lookup`, keyed by the `KP_*` variable names
    pub fn with_overrides<F>(mut self, lookup: F) -> CoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(ENV_ANALYSIS_DELAY_MS) {
            self.analysis_delay_ms = parse_number(ENV_ANALYSIS_DELAY_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_SCORING) {
            self.scoring = raw.parse()?;
        }
        if let Some(raw) = lookup(ENV_UPLOAD_STRICT) {
            self.upload.enforcement = match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "strict" => Enforcement::Strict,
                "0" | "false" | "no" | "advisory" => Enforcement::Advisory,
                other => {
                    return Err(CoreError::Config(format!(
                        "{} must be a boolean, got '{}'",
                        ENV_UPLOAD_STRICT, other
                    )))
                }
            };
        }
        if let Some(raw) = lookup(ENV_MAX_UPLOAD_BYTES) {
            self.upload.max_bytes = parse_number(ENV_MAX_UPLOAD_BYTES, &raw)?;
        }
        Ok(self)
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }
}

fn parse_number(key: &str, raw: &str) -> CoreResult<u64> {
    raw.trim()
        .parse()
        .map_err(|_| CoreError::Config(format!("{} must be a number, got '{}'", key, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.analysis_delay(), Duration::from_secs(3));
        assert_eq!(config.scoring, ScoringKind::Randomized);
        assert!(!config.upload.is_strict());
        assert_eq!(config.upload.max_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::default()
            .with_overrides(lookup(&[
                (ENV_ANALYSIS_DELAY_MS, "250"),
                (ENV_SCORING, "canned"),
                (ENV_UPLOAD_STRICT, "yes"),
                (ENV_MAX_UPLOAD_BYTES, "1024"),
            ]))
            .unwrap();

        assert_eq!(config.analysis_delay_ms, 250);
        assert_eq!(config.scoring, ScoringKind::Canned);
        assert!(config.upload.is_strict());
        assert_eq!(config.upload.max_bytes, 1024);
    }

    #[test]
    fn test_bad_override() {
        let err = AppConfig::default()
            .with_overrides(lookup(&[(ENV_ANALYSIS_DELAY_MS, "soon")]))
            .unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));

        let err = AppConfig::default()
            .with_overrides(lookup(&[(ENV_UPLOAD_STRICT, "maybe")]))
            .unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_from_file_partial() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kp.json");
        std::fs::write(
            &path,
            r#"{ "scoring": "canned", "seed": 11, "upload": { "enforcement": "strict" } }"#,
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.scoring, ScoringKind::Canned);
        assert_eq!(config.seed, Some(11));
        assert!(config.upload.is_strict());
        assert_eq!(config.upload.accept_attribute(), ".pdf,.jpg,.jpeg,.png");
        assert_eq!(config.analysis_delay_ms, 3000);
    }

    #[test]
    fn test_from_file_biases() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kp.json");
        std::fs::write(&path, r#"{ "biases": { "valid": 1.0, "blockchain_seal": 0.0 } }"#).unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.biases.valid, 1.0);
        assert_eq!(config.biases.blockchain_seal, 0.0);
        assert_eq!(config.biases.issuer_registry, CheckBiases::default().issuer_registry);
    }

    #[test]
    fn test_from_file_missing() {
        let err = AppConfig::from_file(Path::new("/nonexistent/kp.json")).unwrap_err();
        assert!(matches!(err, CoreError::Io(_)));
    }
}
