//! Shared formatting helpers composed by both prompt builders.

use kaigo_core::models::assessment::AssessmentSnapshot;
use kaigo_core::models::category::CarePlanExample;

/// Pretty-printed JSON dump of the assessment, keyed by Japanese labels.
pub fn labeled_assessment_json(assessment: &AssessmentSnapshot) -> String {
    // A label->string map cannot fail to serialize.
    serde_json::to_string_pretty(&assessment.to_labeled_json())
        .unwrap_or_else(|_| "{}".to_string())
}

/// Render the reference-examples block.
///
/// Returns an empty string when there are no examples — the caller omits the
/// section entirely in that case.
pub fn render_examples(examples: &[&CarePlanExample]) -> String {
    if examples.is_empty() {
        return String::new();
    }

    let mut block = String::new();
    for (i, ex) in examples.iter().enumerate() {
        block.push_str(&format!("## 参考例{}\n", i + 1));
        block.push_str(&format!("ニーズ: {}\n", ex.needs));
        block.push_str(&format!("長期目標: {}\n", ex.long_term_goal));
        block.push_str("短期目標:\n");
        for goal in &ex.short_term_goals {
            block.push_str(&format!("- {goal}\n"));
        }
        block.push_str("サービス:\n");
        for service in &ex.services {
            block.push_str(&format!(
                "- {}({} / {})\n",
                service.content, service.service_type, service.frequency
            ));
        }
        block.push('\n');
    }
    block
}
