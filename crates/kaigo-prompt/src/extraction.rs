//! Assessment-extraction prompt.
//!
//! Parameterized by the input source: the wording of the source description,
//! the instruction, and the "leave blank" rule differ between audio and
//! text. Embeds the current partial snapshot, the running summary, and the
//! per-field disambiguation guide.

use kaigo_core::fields::ASSESSMENT_FIELDS;
use kaigo_core::models::assessment::AssessmentSnapshot;
use kaigo_core::models::extraction::MAX_MISSING_INFO_ADVICE;

use crate::format::labeled_assessment_json;

/// What kind of raw material the model will receive alongside the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// Base64 audio of an intake conversation.
    Audio,
    /// Transcribed or typed text of an intake conversation.
    Text,
}

/// Field-pair rules the model tends to confuse. Kept alongside the per-field
/// descriptions because the pairs need to be stated as explicit contrasts.
const DISAMBIGUATION_RULES: &str = "\
# 記載区分のルール(迷いやすい項目)
- 現在治療中の疾患・症状は「健康状態」、過去の病歴は「既往歴」に分けて記載する。
- 食事の内容・摂取量は「食事摂取」、飲水量の話題は「水分摂取」に記載する。
- 食事動作は「食事摂取」、歯・義歯・口腔ケアは「口腔衛生」に記載する。
- 虐待や不適切な対応の兆候は「虐待の危険性」、近隣・地域の様子は「生活環境」に記載する。
- 記憶・見当識・判断力は「認知機能」、視力・聴力・会話のやりとりは「コミュニケーション能力」に記載する。";

/// Build the extraction prompt for one pass of the assessment-from-speech
/// (or text) flow. Pure function; always returns a string.
pub fn build_extraction_prompt(
    mode: SourceMode,
    current: &AssessmentSnapshot,
    current_summary: &str,
    is_final: bool,
) -> String {
    let (source_description, instruction, blank_rule) = match mode {
        SourceMode::Audio => (
            "これから渡す音声は、ケアマネジャーと利用者・家族との面談の録音です。",
            "音声を聞き取り、発言内容から各アセスメント項目に該当する情報を抽出してください。",
            "聞き取れなかった項目や話題に出なかった項目は空文字列のままにしてください。推測で埋めてはいけません。",
        ),
        SourceMode::Text => (
            "これから渡すテキストは、面談内容の文字起こしまたはケアマネジャーのメモです。",
            "テキストを読み、記載内容から各アセスメント項目に該当する情報を抽出してください。",
            "テキストに書かれていない項目は空文字列のままにしてください。推測で埋めてはいけません。",
        ),
    };

    let mut prompt = String::new();
    prompt.push_str(
        "あなたは介護のアセスメント面談を整理する専門職アシスタントです。\n",
    );
    prompt.push_str(source_description);
    prompt.push('\n');
    prompt.push_str(instruction);
    prompt.push('\n');
    prompt.push_str(blank_rule);
    prompt.push_str("\n\n# 現在のアセスメント(途中経過)\n");
    prompt.push_str("すでに記録済みの内容です。新しい情報があれば追記・更新し、矛盾があれば新しい情報を優先してください。\n");
    prompt.push_str(&labeled_assessment_json(current));
    prompt.push_str("\n\n# 現在の要約\n");
    if current_summary.trim().is_empty() {
        prompt.push_str("(まだ要約はありません)\n");
    } else {
        prompt.push_str(current_summary);
        prompt.push('\n');
    }

    prompt.push_str("\n# アセスメント項目の定義\n");
    for def in &ASSESSMENT_FIELDS {
        prompt.push_str(&format!("- {} ({}): {}\n", def.label, def.id, def.description));
    }
    prompt.push('\n');
    prompt.push_str(DISAMBIGUATION_RULES);

    prompt.push_str("\n\n# summary\n");
    prompt.push_str(
        "summary には、これまでの内容と今回の内容を統合した利用者像の要約を3〜5文で記載してください。\n",
    );

    prompt.push_str("\n# missingInfoAdvice\n");
    if is_final {
        prompt.push_str(&format!(
            "面談の締めくくりとして全項目の充足度を見直し、情報が薄い項目について最大{MAX_MISSING_INFO_ADVICE}件まで、確認すべき点を missingInfoAdvice に挙げてください。十分に情報が揃っている場合は空配列にしてください。\n"
        ));
    } else {
        prompt.push_str(
            "今回は途中経過のため、missingInfoAdvice は空配列にしてください。\n",
        );
    }

    prompt
}
