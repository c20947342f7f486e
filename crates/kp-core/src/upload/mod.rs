//! Upload-verification flow
//!
//! ```text
//! Idle ──select──▶ FileSelected ──start──▶ Analyzing ──complete──▶ Resulted
//!                                               └──────complete──▶ Failed
//! reset: any state ──▶ Idle
//! ```
//!
//! The deferred completion is split in two: [`UploadFlow::start_analysis`]
//! hands out an [`AnalysisTicket`], and [`UploadFlow::complete`] redeems it.
//! Resetting or picking a new file invalidates outstanding tickets.

pub mod policy;

pub use policy::{Enforcement, FileNotice, UploadPolicy};

use crate::verify::{AnalysisError, VerificationResult, VerificationService};
use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info, warn};

/// A file chosen for verification, by name and size. The mock never
/// reads bytes, so none are held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    name: String,
    size: u64,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Lowercased extension, if the name has one
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Size formatted the way the upload view shows it, e.g. `2.00 MB`
    pub fn display_size(&self) -> String {
        format!("{:.2} MB", self.size as f64 / 1024.0 / 1024.0)
    }
}

/// Flow state. A result and the in-progress marker can never coexist.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UploadState {
    #[default]
    Idle,
    FileSelected(UploadedFile),
    Analyzing(UploadedFile),
    Resulted {
        file: UploadedFile,
        result: VerificationResult,
    },
    Failed {
        file: UploadedFile,
        error: AnalysisError,
    },
}

impl UploadState {
    pub fn phase(&self) -> UploadPhase {
        match self {
            UploadState::Idle => UploadPhase::Idle,
            UploadState::FileSelected(_) => UploadPhase::FileSelected,
            UploadState::Analyzing(_) => UploadPhase::Analyzing,
            UploadState::Resulted { .. } => UploadPhase::Resulted,
            UploadState::Failed { .. } => UploadPhase::Failed,
        }
    }

    pub fn file(&self) -> Option<&UploadedFile> {
        match self {
            UploadState::Idle => None,
            UploadState::FileSelected(file) | UploadState::Analyzing(file) => Some(file),
            UploadState::Resulted { file, .. } | UploadState::Failed { file, .. } => Some(file),
        }
    }
}

/// Data-free mirror of [`UploadState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadPhase {
    Idle,
    FileSelected,
    Analyzing,
    Resulted,
    Failed,
}

impl fmt::Display for UploadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UploadPhase::Idle => "idle",
            UploadPhase::FileSelected => "holding a file",
            UploadPhase::Analyzing => "analyzing",
            UploadPhase::Resulted => "showing a result",
            UploadPhase::Failed => "showing a failure",
        };
        f.write_str(s)
    }
}

/// Proof that an analysis was started; redeemed by [`UploadFlow::complete`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTicket {
    generation: u64,
    pub file: UploadedFile,
}

/// What happened to a completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

/// Upload-verification state machine for one view
#[derive(Debug, Clone, Default)]
pub struct UploadFlow {
    state: UploadState,
    generation: u64,
    policy: UploadPolicy,
}

impl UploadFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: UploadPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn phase(&self) -> UploadPhase {
        self.state.phase()
    }

    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    pub fn file(&self) -> Option<&UploadedFile> {
        self.state.file()
    }

    pub fn result(&self) -> Option<&VerificationResult> {
        match &self.state {
            UploadState::Resulted { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AnalysisError> {
        match &self.state {
            UploadState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    pub fn is_analyzing(&self) -> bool {
        matches!(self.state, UploadState::Analyzing(_))
    }

    /// Hold `file`, replacing whatever was held before. Returns the policy's
    /// advisory notices; strict policies turn them into errors instead.
    pub fn select_file(&mut self, file: UploadedFile) -> CoreResult<Vec<FileNotice>> {
        if self.is_analyzing() {
            return Err(CoreError::InvalidTransition {
                from: self.phase(),
                action: "select a file",
            });
        }

        let notices = self.policy.check(&file)?;
        for notice in &notices {
            warn!(file = file.name(), %notice, "advisory upload notice");
        }

        debug!(file = file.name(), size = file.size(), "file selected");
        self.state = UploadState::FileSelected(file);
        Ok(notices)
    }

    /// Begin analysis of the held file
    pub fn start_analysis(&mut self) -> CoreResult<AnalysisTicket> {
        let file = match &self.state {
            UploadState::FileSelected(file) => file.clone(),
            UploadState::Idle => return Err(CoreError::NoFileSelected),
            other => {
                return Err(CoreError::InvalidTransition {
                    from: other.phase(),
                    action: "start analysis",
                })
            }
        };

        self.generation += 1;
        info!(file = file.name(), generation = self.generation, "analysis started");
        self.state = UploadState::Analyzing(file.clone());
        Ok(AnalysisTicket {
            generation: self.generation,
            file,
        })
    }

    /// Apply the outcome of the analysis `ticket` was issued for
    pub fn complete(
        &mut self,
        ticket: AnalysisTicket,
        outcome: Result<VerificationResult, AnalysisError>,
    ) -> Completion {
        if ticket.generation != self.generation || !self.is_analyzing() {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale analysis completion"
            );
            return Completion::Stale;
        }

        let file = ticket.file;
        self.state = match outcome {
            Ok(result) => {
                info!(
                    file = file.name(),
                    valid = result.is_valid,
                    confidence = result.confidence,
                    "analysis completed"
                );
                UploadState::Resulted { file, result }
            }
            Err(error) => {
                warn!(file = file.name(), %error, "analysis failed");
                UploadState::Failed { file, error }
            }
        };
        Completion::Applied
    }

    /// Drop file and result; outstanding tickets become stale
    pub fn reset(&mut self) {
        self.generation += 1;
        self.state = UploadState::Idle;
    }

    /// Start, await `service`, and complete in one go
    pub async fn run<S>(&mut self, service: &S) -> CoreResult<&UploadState>
    where
        S: VerificationService + ?Sized,
    {
        let ticket = self.start_analysis()?;
        let outcome = service.submit(&ticket.file).await;
        self.complete(ticket, outcome);
        Ok(&self.state)
    }
}
