use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::fields::{ASSESSMENT_FIELDS, FIELD_COUNT, FieldDef};

/// A point-in-time view of the intake assessment.
///
/// The field set is fixed at compile time; values are opaque free text,
/// possibly empty. Partial wire payloads deserialize with missing fields
/// defaulting to empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct AssessmentSnapshot {
    pub health_status: String,
    pub medical_history: String,
    pub skin_condition: String,
    pub oral_hygiene: String,
    pub fluid_intake: String,
    pub adl_mobility: String,
    pub adl_eating: String,
    pub adl_toileting: String,
    pub adl_bathing: String,
    pub adl_grooming: String,
    pub iadl_cooking: String,
    pub iadl_shopping: String,
    pub iadl_money_management: String,
    pub medication: String,
    pub cognition: String,
    pub communication: String,
    pub social_participation: String,
    pub residence: String,
    pub family_situation: String,
    pub maltreatment_risk: String,
    pub living_environment: String,
}

impl AssessmentSnapshot {
    /// Field values in canonical intake order (same order as
    /// [`ASSESSMENT_FIELDS`]).
    pub fn values(&self) -> [&str; FIELD_COUNT] {
        [
            &self.health_status,
            &self.medical_history,
            &self.skin_condition,
            &self.oral_hygiene,
            &self.fluid_intake,
            &self.adl_mobility,
            &self.adl_eating,
            &self.adl_toileting,
            &self.adl_bathing,
            &self.adl_grooming,
            &self.iadl_cooking,
            &self.iadl_shopping,
            &self.iadl_money_management,
            &self.medication,
            &self.cognition,
            &self.communication,
            &self.social_participation,
            &self.residence,
            &self.family_situation,
            &self.maltreatment_risk,
            &self.living_environment,
        ]
    }

    /// Iterate over (definition, value) pairs in canonical order.
    pub fn field_values(&self) -> impl Iterator<Item = (&'static FieldDef, &str)> {
        ASSESSMENT_FIELDS.iter().zip(self.values())
    }

    /// All field values joined into one text blob, for keyword matching.
    pub fn combined_text(&self) -> String {
        self.values().join("\n")
    }

    /// Serialize as a JSON object keyed by Japanese field label, for
    /// embedding in prompts.
    pub fn to_labeled_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for (def, value) in self.field_values() {
            map.insert(def.label.to_string(), serde_json::Value::from(value));
        }
        serde_json::Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_payload_defaults_missing_fields() {
        let snapshot: AssessmentSnapshot =
            serde_json::from_str(r#"{"healthStatus":"高血圧で通院中"}"#).unwrap();
        assert_eq!(snapshot.health_status, "高血圧で通院中");
        assert_eq!(snapshot.cognition, "");
    }

    #[test]
    fn combined_text_contains_every_field_value() {
        let snapshot = AssessmentSnapshot {
            health_status: "脳梗塞後遺症".to_string(),
            living_environment: "近隣との交流あり".to_string(),
            ..Default::default()
        };
        let text = snapshot.combined_text();
        assert!(text.contains("脳梗塞後遺症"));
        assert!(text.contains("近隣との交流あり"));
    }

    #[test]
    fn labeled_json_uses_japanese_labels() {
        let snapshot = AssessmentSnapshot {
            fluid_intake: "1日1000ml程度".to_string(),
            ..Default::default()
        };
        let json = snapshot.to_labeled_json();
        assert_eq!(json["水分摂取"], "1日1000ml程度");
        assert_eq!(json.as_object().unwrap().len(), FIELD_COUNT);
    }
}
