//! Fixed demo figures

use super::*;

#[derive(Debug, Clone, Copy, Default)]
pub struct MockAnalytics;

fn stat(label: &str, value: &str, change: Option<&str>) -> StatCard {
    StatCard {
        label: label.to_string(),
        value: value.to_string(),
        change: change.map(str::to_string),
    }
}

fn action(title: &str, description: &str, target: Option<Page>) -> QuickAction {
    QuickAction {
        title: title.to_string(),
        description: description.to_string(),
        target,
    }
}

fn activity(action: &str, detail: &str, time: &str, status: ActivityStatus) -> ActivityEntry {
    ActivityEntry {
        action: action.to_string(),
        detail: detail.to_string(),
        time: time.to_string(),
        status,
    }
}

impl AnalyticsSource for MockAnalytics {
    fn profile(&self, role: Role) -> Profile {
        let (display, greeting, tagline) = match role {
            Role::User => (
                "Himanshu Yadav",
                "Himanshu",
                "Manage and verify your certificates with AI-powered security.",
            ),
            Role::Institution => (
                "Rungta University",
                "Rungta University",
                "Monitor your certificate issuance and verification analytics.",
            ),
        };
        Profile {
            display_name: display.to_string(),
            greeting_name: greeting.to_string(),
            tagline: tagline.to_string(),
        }
    }

    fn dashboard_stats(&self, role: Role) -> Vec<StatCard> {
        match role {
            Role::User => vec![
                stat("Certificates Verified", "127", None),
                stat("Pending Verifications", "3", None),
                stat("Success Rate", "98.4%", None),
            ],
            Role::Institution => vec![
                stat("Certificates Issued", "2,847", None),
                stat("Active Verifications", "156", None),
                stat("Fraud Attempts Blocked", "23", None),
                stat("Monthly Verifications", "4,291", None),
            ],
        }
    }

    fn quick_actions(&self, role: Role) -> Vec<QuickAction> {
        match role {
            Role::User => vec![
                action("Verify Certificate", "Upload and verify a new certificate", Some(Page::Upload)),
                action("Search Database", "Search for verified certificates", None),
                action("View History", "Check your verification history", None),
            ],
            Role::Institution => vec![
                action("Issue Certificate", "Create and issue new certificates", Some(Page::Upload)),
                action("View Analytics", "Monitor verification statistics", Some(Page::Analytics)),
                action("Manage Users", "Administer user permissions", None),
            ],
        }
    }

    fn recent_activity(&self, role: Role) -> Vec<ActivityEntry> {
        use ActivityStatus::*;
        match role {
            Role::User => vec![
                activity("Certificate Verified", "Bachelor of Science - Rungta", "2 hours ago", Success),
                activity("Verification Failed", "MBA Certificate - Invalid Signature", "1 day ago", Error),
                activity("Certificate Uploaded", "High School Diploma", "3 days ago", Pending),
            ],
            Role::Institution => vec![
                activity("Certificate Issued", "Computer Science Degree - John Doe", "1 hour ago", Success),
                activity("Fraud Attempt Blocked", "Tampered Business Certificate", "4 hours ago", Blocked),
                activity("Bulk Upload Completed", "45 certificates processed", "1 day ago", Success),
            ],
        }
    }

    fn system_status(&self) -> Vec<StatusItem> {
        [
            ("AI Detection", "Active"),
            ("Blockchain Seal", "Verified"),
            ("API Status", "Online"),
            ("Server Load", "23%"),
            ("Processing Speed", "0.3s avg"),
        ]
        .into_iter()
        .map(|(name, status)| StatusItem {
            name: name.to_string(),
            status: status.to_string(),
        })
        .collect()
    }

    fn kpis(&self) -> Vec<StatCard> {
        vec![
            stat("Total Verifications", "12,847", Some("+23%")),
            stat("Fraud Attempts Blocked", "181", Some("-12%")),
            stat("Success Rate", "98.4%", Some("+0.3%")),
            stat("Active Users", "4,291", Some("+18%")),
        ]
    }

    fn monthly_trends(&self) -> Vec<MonthlyStat> {
        [
            ("Jan", 1240, 23, 98.1),
            ("Feb", 1456, 31, 97.8),
            ("Mar", 1789, 18, 99.0),
            ("Apr", 2134, 42, 98.0),
            ("May", 2347, 29, 98.7),
            ("Jun", 2891, 38, 98.6),
        ]
        .into_iter()
        .map(|(month, verifications, fraud_attempts, success_rate)| MonthlyStat {
            month: month.to_string(),
            verifications,
            fraud_attempts,
            success_rate,
        })
        .collect()
    }

    fn fraud_attempts(&self) -> Vec<FraudAttempt> {
        use Severity::*;
        [
            (1, "Photo Manipulation", "Bachelor of Science", "2 hours ago", High),
            (2, "Fake Seal", "MBA Certificate", "6 hours ago", Medium),
            (3, "Grade Tampering", "Engineering Degree", "1 day ago", High),
            (4, "Invalid Signature", "Business Certificate", "2 days ago", Low),
            (5, "Duplicate Certificate", "Medical Degree", "3 days ago", High),
        ]
        .into_iter()
        .map(|(id, kind, certificate, time, severity)| FraudAttempt {
            id,
            kind: kind.to_string(),
            certificate: certificate.to_string(),
            time: time.to_string(),
            severity,
        })
        .collect()
    }

    fn fraud_breakdown(&self) -> Vec<FraudCategory> {
        [
            ("Photo Manipulation", "Most common fraud type detected by AI analysis", 67),
            ("Fake Signatures", "Digital signature verification failures", 23),
            ("Grade Tampering", "Modified academic scores and grades", 10),
        ]
        .into_iter()
        .map(|(name, description, share_percent)| FraudCategory {
            name: name.to_string(),
            description: description.to_string(),
            share_percent,
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::GuardTable;

    #[test]
    fn test_stats_per_role() {
        assert_eq!(MockAnalytics.dashboard_stats(Role::User).len(), 3);
        assert_eq!(MockAnalytics.dashboard_stats(Role::Institution).len(), 4);
        assert_eq!(MockAnalytics.profile(Role::Institution).display_name, "Rungta University");
    }

    #[test]
    fn test_quick_action_targets_are_reachable() {
        let guards = GuardTable::default();
        for role in Role::ALL {
            for action in MockAnalytics.quick_actions(role) {
                if let Some(target) = action.target {
                    assert!(
                        guards.permits(target, Some(role)),
                        "{} offers unreachable {}",
                        role,
                        target
                    );
                }
            }
        }
    }

    #[test]
    fn test_trends_and_severity() {
        let summary = TrendSummary::from_months(&MockAnalytics.monthly_trends());
        assert_eq!(summary.months, 6);
        assert_eq!(summary.total_verifications, 11_857);
        assert_eq!(summary.total_fraud_attempts, 181);
        assert_eq!(summary.peak_month.as_deref(), Some("Jun"));

        let counts = severity_counts(&MockAnalytics.fraud_attempts());
        assert_eq!(counts.get(&Severity::High), Some(&3));
        assert_eq!(counts.get(&Severity::Medium), Some(&1));
        assert_eq!(counts.get(&Severity::Low), Some(&1));
    }

    #[test]
    fn test_breakdown_sums_to_hundred() {
        let total: u32 = MockAnalytics
            .fraud_breakdown()
            .iter()
            .map(|c| u32::from(c.share_percent))
            .sum();
        assert_eq!(total, 100);
    }
}
