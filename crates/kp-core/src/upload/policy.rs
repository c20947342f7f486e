//! Upload acceptance policy
//!
//! The picker advertises `.pdf,.jpg,.jpeg,.png` and a 10 MB ceiling. In the
//! default advisory mode nothing is refused; offending files only produce
//! notices. Strict mode refuses them.

use super::UploadedFile;
use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforcement {
    #[default]
    Advisory,
    Strict,
}

/// Something about a file that falls outside the advertised limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileNotice {
    UnsupportedExtension(Option<String>),
    TooLarge { size: u64, limit: u64 },
}

impl fmt::Display for FileNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileNotice::UnsupportedExtension(Some(ext)) => {
                write!(f, "'.{}' files are not in the supported list", ext)
            }
            FileNotice::UnsupportedExtension(None) => write!(f, "file has no extension"),
            FileNotice::TooLarge { size, limit } => {
                write!(f, "file is {} bytes, advertised limit is {}", size, limit)
            }
        }
    }
}

impl From<FileNotice> for CoreError {
    fn from(notice: FileNotice) -> Self {
        match notice {
            FileNotice::TooLarge { size, limit } => CoreError::FileTooLarge { size, limit },
            other => CoreError::UnsupportedFile(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadPolicy {
    /// Extensions; case and a leading dot are ignored
    pub accepted_extensions: Vec<String>,
    pub max_bytes: u64,
    pub enforcement: Enforcement,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            accepted_extensions: ACCEPTED_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            enforcement: Enforcement::Advisory,
        }
    }
}

/// `".PDF"`, `"pdf"` and `" Pdf "` all name the same extension
fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

impl UploadPolicy {
    pub fn strict() -> Self {
        Self {
            enforcement: Enforcement::Strict,
            ..Self::default()
        }
    }

    pub fn is_strict(&self) -> bool {
        self.enforcement == Enforcement::Strict
    }

    /// Value for an `<input type="file" accept=...>` attribute
    pub fn accept_attribute(&self) -> String {
        self.accepted_extensions
            .iter()
            .map(|ext| format!(".{}", normalize_extension(ext)))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Human summary, e.g. `PDF, JPG, JPEG, PNG (max 10 MB)`
    pub fn describe(&self) -> String {
        let kinds = self
            .accepted_extensions
            .iter()
            .map(|ext| normalize_extension(ext).to_uppercase())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} (max {} MB)", kinds, self.max_bytes / 1024 / 1024)
    }

    pub fn inspect(&self, file: &UploadedFile) -> Vec<FileNotice> {
        let mut notices = Vec::new();

        let ext = file.extension();
        let accepted = ext
            .as_ref()
            .is_some_and(|ext| {
                self.accepted_extensions
                    .iter()
                    .any(|a| normalize_extension(a) == *ext)
            });
        if !accepted {
            notices.push(FileNotice::UnsupportedExtension(ext));
        }

        if file.size() > self.max_bytes {
            notices.push(FileNotice::TooLarge {
                size: file.size(),
                limit: self.max_bytes,
            });
        }

        notices
    }

    /// Notices for advisory policies, the first notice as an error for strict ones
    pub fn check(&self, file: &UploadedFile) -> CoreResult<Vec<FileNotice>> {
        let mut notices = self.inspect(file);
        if self.is_strict() && !notices.is_empty() {
            return Err(notices.swap_remove(0).into());
        }
        Ok(notices)
    }
}
