//! Declared response schemas, in Vertex AI `Schema` form.
//!
//! Every field carries a human-readable description — the model reads these
//! to disambiguate fields; this code never interprets them.

use serde_json::{Value, json};

use kaigo_core::fields::ASSESSMENT_FIELDS;

/// Schema for the care-plan generation response.
pub fn care_plan_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "needs": {
                "type": "ARRAY",
                "description": "生活全般の解決すべき課題。優先度の高い順に2〜4件。",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "content": {
                            "type": "STRING",
                            "description": "課題(ニーズ)。本人の意向を踏まえた表現。"
                        },
                        "longTermGoal": {
                            "type": "STRING",
                            "description": "長期目標。6〜12ヶ月を目安。"
                        },
                        "shortTermGoals": {
                            "type": "ARRAY",
                            "description": "短期目標。3ヶ月後に評価できる測定可能な表現。",
                            "items": { "type": "STRING" }
                        },
                        "services": {
                            "type": "ARRAY",
                            "description": "短期目標の達成に必要なサービス。",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "content": {
                                        "type": "STRING",
                                        "description": "サービス内容。"
                                    },
                                    "type": {
                                        "type": "STRING",
                                        "description": "サービス種別(訪問介護、通所リハビリテーション等)。"
                                    },
                                    "frequency": {
                                        "type": "STRING",
                                        "description": "提供頻度(週2回等)。"
                                    }
                                },
                                "required": ["content", "type", "frequency"]
                            }
                        }
                    },
                    "required": ["content", "longTermGoal", "shortTermGoals", "services"]
                }
            },
            "totalDirectionPolicy": {
                "type": "STRING",
                "description": "総合的な援助の方針。"
            }
        },
        "required": ["needs", "totalDirectionPolicy"]
    })
}

/// Schema for the assessment-extraction response: every intake field with its
/// disambiguation description, plus the required summary and the bounded
/// missing-information advisories.
pub fn assessment_schema() -> Value {
    let mut properties = serde_json::Map::new();

    for def in &ASSESSMENT_FIELDS {
        properties.insert(
            def.id.to_string(),
            json!({ "type": "STRING", "description": def.description }),
        );
    }

    properties.insert(
        "summary".to_string(),
        json!({
            "type": "STRING",
            "description": "これまでの内容を統合した利用者像の要約。3〜5文。"
        }),
    );

    properties.insert(
        "missingInfoAdvice".to_string(),
        json!({
            "type": "ARRAY",
            "description": "情報が不足している項目への確認アドバイス。最大3件。不足がなければ空配列。",
            "items": {
                "type": "OBJECT",
                "properties": {
                    "field": {
                        "type": "STRING",
                        "description": "対象項目のフィールド名(healthStatus等)。"
                    },
                    "advice": {
                        "type": "STRING",
                        "description": "確認すべき内容の助言。"
                    }
                },
                "required": ["field", "advice"]
            }
        }),
    );

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": ["summary", "missingInfoAdvice"]
    })
}
