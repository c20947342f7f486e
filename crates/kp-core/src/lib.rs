//! karamProof Core
//!
//! This crate holds everything the karamProof front ends share: the
//! page/role session controller, the upload-verification state machine,
//! the verification service seam with its mock implementation, and the
//! read-only dashboard and analytics data.
//!
//! Verification is mock. No file content is inspected, nothing is signed
//! and nothing leaves the process.

pub mod account;
pub mod analytics;
pub mod config;
pub mod report;
pub mod session;
pub mod upload;
pub mod verify;

use thiserror::Error;

pub use account::{AuthMode, LoginForm};
pub use analytics::{AnalyticsSource, MockAnalytics};
pub use config::AppConfig;
pub use session::{Access, GuardTable, Page, Role, Session, View};
pub use upload::{AnalysisTicket, Completion, UploadFlow, UploadPhase, UploadPolicy, UploadState, UploadedFile};
pub use verify::{
    AnalysisError, MockVerifier, ScoringKind, ScoringPolicy, Timer, VerificationResult,
    VerificationService,
};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("access to page '{page}' denied for {}", .role.map_or("anonymous visitor", |r| r.as_str()))]
    AccessDenied { page: Page, role: Option<Role> },

    #[error("cannot {action} while upload is {from}")]
    InvalidTransition { from: UploadPhase, action: &'static str },

    #[error("no file selected")]
    NoFileSelected,

    #[error("unsupported file: {0}")]
    UnsupportedFile(String),

    #[error("file is {size} bytes, limit is {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("Form error: {0}")]
    Form(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_denied_message() {
        let err = CoreError::AccessDenied { page: Page::Upload, role: None };
        assert_eq!(err.to_string(), "access to page 'upload' denied for anonymous visitor");

        let err = CoreError::AccessDenied {
            page: Page::Analytics,
            role: Some(Role::User),
        };
        assert_eq!(err.to_string(), "access to page 'analytics' denied for user");
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = CoreError::InvalidTransition {
            from: UploadPhase::Analyzing,
            action: "select a file",
        };
        assert_eq!(err.to_string(), "cannot select a file while upload is analyzing");
    }
}
