//! Keyword-based category detection over assessment free text.

use kaigo_core::models::assessment::AssessmentSnapshot;
use kaigo_core::models::category::CategoryId;

/// Keyword lists per category, in corpus declaration order. The catch-all
/// has no keywords — it is always appended.
const KEYWORD_GROUPS: &[(CategoryId, &[&str])] = &[
    (
        CategoryId::Dementia,
        &["認知", "物忘れ", "徘徊", "アルツハイマー", "見当識"],
    ),
    (
        CategoryId::Stroke,
        &["脳梗塞", "脳出血", "片麻痺", "半身", "嚥下", "高次脳"],
    ),
    (
        CategoryId::Orthopedic,
        &["骨折", "変形性", "関節", "腰痛", "骨粗鬆"],
    ),
    (
        CategoryId::Cardiac,
        &["心不全", "心臓", "狭心", "心筋梗塞", "息切れ", "むくみ"],
    ),
    (
        CategoryId::Disuse,
        &["廃用", "フレイル", "筋力低下", "体力低下", "閉じこもり", "活動量"],
    ),
];

/// Detect relevant categories by keyword presence in the assessment text.
///
/// All field values are concatenated and lowercased, then each category's
/// keyword list is tested by substring containment. The catch-all
/// `AdlGeneral` is always appended last, so the result is never empty.
/// Result order is corpus declaration order; each category appears at most
/// once. Pure function, no error path.
pub fn detect_categories(assessment: &AssessmentSnapshot) -> Vec<CategoryId> {
    let text = assessment.combined_text().to_lowercase();

    let mut detected: Vec<CategoryId> = KEYWORD_GROUPS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(id, _)| *id)
        .collect();

    detected.push(CategoryId::AdlGeneral);
    detected
}
