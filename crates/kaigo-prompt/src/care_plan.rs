//! Care-plan generation prompt.
//!
//! Composes, in fixed order: the role statement, the serialized assessment,
//! the care-management instruction, the reference-examples block (omitted
//! when empty), the authoring rules, and the JSON output contract.

use kaigo_core::models::assessment::AssessmentSnapshot;
use kaigo_core::models::category::CarePlanExample;
use kaigo_corpus::{detect_categories, select_examples};

use crate::format::{labeled_assessment_json, render_examples};

/// Fallback instruction when the caller supplies none.
pub const DEFAULT_INSTRUCTION: &str = "自立支援と重度化防止を重視してください";

const ROLE_STATEMENT: &str = "\
あなたは経験豊富な主任ケアマネジャー(介護支援専門員)です。\
ICF(国際生活機能分類)の視点と課題整理統括表の考え方に基づき、\
以下のアセスメント情報から居宅サービス計画書(第2表)の原案を作成してください。";

const RULES: &str = "\
# 作成ルール
1. ニーズ、長期目標、短期目標、サービス内容が一本の線(ゴールデンスレッド)でつながり、どのサービスがどのニーズに対応するか追跡できること。
2. 利用者本人を主語とし、「〜できる」「〜を続けられる」など自立支援を意識した表現を用いること。できないことの列挙ではなく、残存能力の活用と意欲に着目すること。
3. 短期目標は3ヶ月後の評価を想定し、回数・時間・頻度・距離など測定可能な水準で記載すること(SMARTの考え方)。
4. 長期目標は6〜12ヶ月、短期目標は3ヶ月を目安とし、短期目標の達成が長期目標につながるよう内容の整合をとること。
5. 専門職として適切でありながら、本人・家族が読んで理解できる平易な日本語で記載すること。
6. ニーズは優先度の高い順に2〜4件とすること。";

const OUTPUT_CONTRACT: &str = r#"# 出力形式
必ず次の形のJSONオブジェクトのみを出力してください。説明文やマークダウンは含めないでください。
{
  "needs": [
    {
      "content": "生活全般の解決すべき課題(ニーズ)",
      "longTermGoal": "長期目標",
      "shortTermGoals": ["短期目標1", "短期目標2"],
      "services": [
        {"content": "サービス内容", "type": "サービス種別", "frequency": "頻度"}
      ]
    }
  ],
  "totalDirectionPolicy": "総合的な援助の方針"
}"#;

/// Build the generation prompt, selecting reference examples from the corpus
/// based on the assessment's detected categories.
pub fn build_care_plan_prompt(assessment: &AssessmentSnapshot, instruction: &str) -> String {
    let categories = detect_categories(assessment);
    let examples = select_examples(&categories);
    build_care_plan_prompt_with_examples(assessment, instruction, &examples)
}

/// Build the generation prompt from an explicit example selection.
///
/// The reference-examples section is omitted entirely when `examples` is
/// empty. A blank instruction falls back to [`DEFAULT_INSTRUCTION`].
pub fn build_care_plan_prompt_with_examples(
    assessment: &AssessmentSnapshot,
    instruction: &str,
    examples: &[&CarePlanExample],
) -> String {
    let instruction = if instruction.trim().is_empty() {
        DEFAULT_INSTRUCTION
    } else {
        instruction
    };

    let mut prompt = String::new();
    prompt.push_str(ROLE_STATEMENT);
    prompt.push_str("\n\n# アセスメント情報\n");
    prompt.push_str(&labeled_assessment_json(assessment));
    prompt.push_str("\n\n# ケアマネジメントの方針\n");
    prompt.push_str(instruction);
    prompt.push('\n');

    let example_block = render_examples(examples);
    if !example_block.is_empty() {
        prompt.push_str("\n# 参考事例\n");
        prompt.push_str(
            "以下は類似した状態像の方のケアプラン例です。構成と表現の参考にしてください。内容をそのまま転記しないでください。\n\n",
        );
        prompt.push_str(&example_block);
    }

    prompt.push('\n');
    prompt.push_str(RULES);
    prompt.push_str("\n\n");
    prompt.push_str(OUTPUT_CONTRACT);
    prompt
}
