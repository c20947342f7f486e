//! JSON report generation

use crate::verify::VerificationResult;
use crate::CoreResult;

pub fn generate(result: &VerificationResult) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::{CannedScoring, ScoringPolicy};
    use crate::UploadedFile;

    #[test]
    fn test_json_report_fields() {
        let result = CannedScoring.score(&UploadedFile::new("degree.pdf", 10));
        let report = generate(&result).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();

        assert_eq!(value["file_name"], "degree.pdf");
        assert_eq!(value["scoring"], "canned");
        assert_eq!(value["is_valid"], true);
        assert_eq!(value["confidence"], 100);
        assert_eq!(value["metadata"][0]["key"], "student_name");
    }
}
