use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A planned service line within a need (second-table equivalent).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ServiceItem {
    /// What the service does, e.g. 歩行訓練・住環境の調整.
    pub content: String,
    /// Service kind, e.g. 通所リハビリテーション, 訪問介護, 本人・家族.
    #[serde(rename = "type")]
    pub service_type: String,
    /// How often, e.g. 週2回.
    pub frequency: String,
}

/// One prioritized need with its goal ladder and services.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NeedItem {
    pub content: String,
    pub long_term_goal: String,
    pub short_term_goals: Vec<String>,
    pub services: Vec<ServiceItem>,
}

/// A structured care-plan draft produced by the model.
///
/// Either fully parses against this shape or the invocation fails — there is
/// no partially valid draft.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GeneratedCarePlanDraft {
    pub needs: Vec<NeedItem>,
    pub total_direction_policy: String,
}
