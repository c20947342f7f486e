//! Markdown report generation

use crate::verify::VerificationResult;
use chrono::Utc;
use std::fmt::Write;

pub fn generate(result: &VerificationResult) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "# Certificate Verification Report\n");
    let _ = writeln!(out, "- **File:** {}", result.file_name);
    let _ = writeln!(out, "- **Verdict:** {}", result.headline());
    let _ = writeln!(out, "- **Confidence:** {}%", result.confidence);
    let _ = writeln!(out, "- **Scoring:** {} (mock)", result.scoring);
    let _ = writeln!(out, "- **Generated:** {}\n", Utc::now().format("%Y-%m-%d %H:%M UTC"));

    if !result.checks.is_empty() {
        let _ = writeln!(out, "## Checks\n");
        let _ = writeln!(out, "| Check | Result |");
        let _ = writeln!(out, "|-------|--------|");
        for check in &result.checks {
            let status = if check.passed { "PASS" } else { "FAIL" };
            let _ = writeln!(out, "| {} | {} |", check.label, status);
        }
        out.push('\n');
    }

    if !result.metadata.is_empty() {
        let _ = writeln!(out, "## Certificate Details\n");
        for field in &result.metadata {
            let _ = writeln!(out, "- **{}:** {}", field.label, field.value);
        }
        out.push('\n');
    }

    out.push_str("_This report was produced by a simulated verifier. No cryptographic checks were performed._\n");
    out
}
