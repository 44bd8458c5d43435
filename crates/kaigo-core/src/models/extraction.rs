use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::assessment::AssessmentSnapshot;

/// Maximum number of missing-information advisories surfaced to the caller.
pub const MAX_MISSING_INFO_ADVICE: usize = 3;

/// An advisory pointing at a thinly covered assessment field.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MissingInfoAdvice {
    /// Wire name of the field the advice refers to.
    pub field: String,
    /// What to ask or observe next, in Japanese.
    pub advice: String,
}

/// The model's structured answer to an assessment-extraction call: the full
/// field set (missing fields default to empty), an updated running summary,
/// and up to [`MAX_MISSING_INFO_ADVICE`] advisories.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ExtractedAssessment {
    #[serde(flatten)]
    pub fields: AssessmentSnapshot,
    pub summary: String,
    #[serde(default)]
    pub missing_info_advice: Vec<MissingInfoAdvice>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattened_fields_deserialize_alongside_summary() {
        let json = r#"{
            "healthStatus": "脳梗塞の既往あり、右片麻痺",
            "summary": "右片麻痺があり移動に介助を要する。",
            "missingInfoAdvice": [
                {"field": "fluidIntake", "advice": "1日の水分量を確認してください"}
            ]
        }"#;
        let extracted: ExtractedAssessment = serde_json::from_str(json).unwrap();
        assert_eq!(extracted.fields.health_status, "脳梗塞の既往あり、右片麻痺");
        assert_eq!(extracted.fields.medication, "");
        assert_eq!(extracted.summary, "右片麻痺があり移動に介助を要する。");
        assert_eq!(extracted.missing_info_advice.len(), 1);
    }

    #[test]
    fn advice_defaults_to_empty() {
        let extracted: ExtractedAssessment =
            serde_json::from_str(r#"{"summary": "情報は十分。"}"#).unwrap();
        assert!(extracted.missing_info_advice.is_empty());
    }
}
