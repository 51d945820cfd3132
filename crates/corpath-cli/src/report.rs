//! JSON report assembly for the `--json` output mode.

use chrono::{SecondsFormat, Utc};
use corpath_core::{AnalysisSummary, CorElementSuggestion, DetectedField};
use corpath_extract::DocumentAnalysis;
use serde::Serialize;

#[derive(Serialize)]
pub struct AnalysisReport<'a> {
    pub file: &'a str,
    pub analyzed_at: String,
    pub analysis: &'a AnalysisSummary,
    pub fields: &'a [DetectedField],
    pub suggestions: &'a [CorElementSuggestion],
}

impl<'a> AnalysisReport<'a> {
    pub fn new(
        file: &'a str,
        result: &'a DocumentAnalysis,
        suggestions: &'a [CorElementSuggestion],
    ) -> Self {
        Self {
            file,
            analyzed_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            analysis: &result.analysis,
            fields: &result.fields,
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corpath_extract::analyze_document;

    #[test]
    fn report_serializes_with_expected_top_level_keys() {
        let result = analyze_document("Operator Name: ____\n", 1, "scan.pdf");
        let suggestions = Vec::new();
        let report = AnalysisReport::new("scan.pdf", &result, &suggestions);
        let json = serde_json::to_value(&report).expect("serialize");

        let obj = json.as_object().expect("object");
        for key in ["file", "analyzed_at", "analysis", "fields", "suggestions"] {
            assert!(obj.contains_key(key), "missing {key}");
        }
        assert_eq!(json["file"], "scan.pdf");
        assert!(json["analyzed_at"].as_str().unwrap().ends_with('Z'));
    }
}
