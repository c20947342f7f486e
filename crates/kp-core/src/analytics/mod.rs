//! Dashboard and analytics data
//!
//! Views read everything they display from an [`AnalyticsSource`]. The
//! only source in the workspace is [`MockAnalytics`], which serves fixed
//! demo figures.

pub mod mock;

pub use mock::MockAnalytics;

use crate::session::{Page, Role};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Who is signed in, as the dashboard greets them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub display_name: String,
    pub greeting_name: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub label: String,
    pub value: String,
    /// Period-over-period change, e.g. `+23%`
    pub change: Option<String>,
}

/// A dashboard shortcut. `target` is `None` for actions that are not built yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAction {
    pub title: String,
    pub description: String,
    pub target: Option<Page>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Success,
    Error,
    Pending,
    Blocked,
}

impl fmt::Display for ActivityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActivityStatus::Success => "success",
            ActivityStatus::Error => "error",
            ActivityStatus::Pending => "pending",
            ActivityStatus::Blocked => "blocked",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub action: String,
    pub detail: String,
    pub time: String,
    pub status: ActivityStatus,
}

/// Named system component and its status line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusItem {
    pub name: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStat {
    pub month: String,
    pub verifications: u32,
    pub fraud_attempts: u32,
    /// Percentage
    pub success_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudAttempt {
    pub id: u32,
    pub kind: String,
    pub certificate: String,
    pub time: String,
    pub severity: Severity,
}

/// Share of detected fraud by type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FraudCategory {
    pub name: String,
    pub description: String,
    pub share_percent: u8,
}

/// Read-only data behind the dashboard and analytics views
pub trait AnalyticsSource {
    fn profile(&self, role: Role) -> Profile;

    fn dashboard_stats(&self, role: Role) -> Vec<StatCard>;

    fn quick_actions(&self, role: Role) -> Vec<QuickAction>;

    fn recent_activity(&self, role: Role) -> Vec<ActivityEntry>;

    fn system_status(&self) -> Vec<StatusItem>;

    fn kpis(&self) -> Vec<StatCard>;

    fn monthly_trends(&self) -> Vec<MonthlyStat>;

    fn fraud_attempts(&self) -> Vec<FraudAttempt>;

    fn fraud_breakdown(&self) -> Vec<FraudCategory>;
}

/// Aggregates over a run of months
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub months: usize,
    pub total_verifications: u64,
    pub total_fraud_attempts: u64,
    pub mean_success_rate: f64,
    /// Month with the most verifications
    pub peak_month: Option<String>,
}

impl TrendSummary {
    pub fn from_months(months: &[MonthlyStat]) -> Self {
        let total_verifications = months.iter().map(|m| u64::from(m.verifications)).sum();
        let total_fraud_attempts = months.iter().map(|m| u64::from(m.fraud_attempts)).sum();
        let mean_success_rate = if months.is_empty() {
            0.0
        } else {
            months.iter().map(|m| m.success_rate).sum::<f64>() / months.len() as f64
        };
        let peak_month = months
            .iter()
            .max_by_key(|m| m.verifications)
            .map(|m| m.month.clone());

        Self {
            months: months.len(),
            total_verifications,
            total_fraud_attempts,
            mean_success_rate,
            peak_month,
        }
    }

    /// Fraud attempts per thousand verifications
    pub fn fraud_per_thousand(&self) -> f64 {
        if self.total_verifications == 0 {
            return 0.0;
        }
        self.total_fraud_attempts as f64 * 1000.0 / self.total_verifications as f64
    }
}

pub fn severity_counts(attempts: &[FraudAttempt]) -> BTreeMap<Severity, usize> {
    let mut counts = BTreeMap::new();
    for attempt in attempts {
        *counts.entry(attempt.severity).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(name: &str, verifications: u32, fraud: u32, rate: f64) -> MonthlyStat {
        MonthlyStat {
            month: name.to_string(),
            verifications,
            fraud_attempts: fraud,
            success_rate: rate,
        }
    }

    #[test]
    fn test_trend_summary() {
        let summary = TrendSummary::from_months(&[
            month("Jan", 1000, 10, 98.0),
            month("Feb", 3000, 20, 99.0),
        ]);
        assert_eq!(summary.months, 2);
        assert_eq!(summary.total_verifications, 4000);
        assert_eq!(summary.total_fraud_attempts, 30);
        assert!((summary.mean_success_rate - 98.5).abs() < 1e-9);
        assert_eq!(summary.peak_month.as_deref(), Some("Feb"));
        assert!((summary.fraud_per_thousand() - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_trend_summary_empty() {
        let summary = TrendSummary::from_months(&[]);
        assert_eq!(summary.mean_success_rate, 0.0);
        assert_eq!(summary.peak_month, None);
        assert_eq!(summary.fraud_per_thousand(), 0.0);
    }
}
