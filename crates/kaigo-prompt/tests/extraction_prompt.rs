use kaigo_core::fields::ASSESSMENT_FIELDS;
use kaigo_core::models::assessment::AssessmentSnapshot;
use kaigo_prompt::{SourceMode, build_extraction_prompt};

#[test]
fn audio_and_text_modes_differ_in_source_wording() {
    let current = AssessmentSnapshot::default();
    let audio = build_extraction_prompt(SourceMode::Audio, &current, "", false);
    let text = build_extraction_prompt(SourceMode::Text, &current, "", false);

    assert!(audio.contains("音声"));
    assert!(audio.contains("聞き取れなかった項目"));
    assert!(text.contains("文字起こし"));
    assert!(text.contains("書かれていない項目"));
    assert_ne!(audio, text);
}

#[test]
fn current_snapshot_and_summary_are_embedded() {
    let current = AssessmentSnapshot {
        adl_mobility: "室内は伝い歩き".to_string(),
        ..Default::default()
    };
    let prompt = build_extraction_prompt(SourceMode::Text, &current, "移動に不安がある方。", false);
    assert!(prompt.contains("室内は伝い歩き"));
    assert!(prompt.contains("移動に不安がある方。"));
}

#[test]
fn empty_summary_gets_placeholder() {
    let prompt =
        build_extraction_prompt(SourceMode::Text, &AssessmentSnapshot::default(), "  ", false);
    assert!(prompt.contains("まだ要約はありません"));
}

#[test]
fn every_field_definition_is_listed() {
    let prompt =
        build_extraction_prompt(SourceMode::Audio, &AssessmentSnapshot::default(), "", false);
    for def in &ASSESSMENT_FIELDS {
        assert!(prompt.contains(def.id), "missing field id {}", def.id);
        assert!(prompt.contains(def.label), "missing label {}", def.label);
    }
}

#[test]
fn disambiguation_guide_names_the_confusable_pairs() {
    let prompt =
        build_extraction_prompt(SourceMode::Text, &AssessmentSnapshot::default(), "", false);
    assert!(prompt.contains("記載区分のルール"));
    // The five pair rules.
    assert!(prompt.contains("「健康状態」"));
    assert!(prompt.contains("「既往歴」"));
    assert!(prompt.contains("「水分摂取」"));
    assert!(prompt.contains("「口腔衛生」"));
    assert!(prompt.contains("「虐待の危険性」"));
    assert!(prompt.contains("「生活環境」"));
    assert!(prompt.contains("「コミュニケーション能力」"));
}

#[test]
fn final_pass_requests_bounded_advice() {
    let prompt =
        build_extraction_prompt(SourceMode::Text, &AssessmentSnapshot::default(), "", true);
    assert!(prompt.contains("最大3件"));
    assert!(prompt.contains("missingInfoAdvice"));
}

#[test]
fn interim_pass_requests_empty_advice() {
    let prompt =
        build_extraction_prompt(SourceMode::Text, &AssessmentSnapshot::default(), "", false);
    assert!(prompt.contains("missingInfoAdvice は空配列"));
}
