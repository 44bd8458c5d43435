//! The exemplar corpus: categorized care-plan examples.
//!
//! Built once at first access and never mutated; concurrent readers need no
//! locking. Declaration order is the order categories are tested by the
//! detector and drained by the selector.

use std::sync::LazyLock;

use kaigo_core::models::care_plan::ServiceItem;
use kaigo_core::models::category::{CarePlanExample, CategoryId, DiseaseCategory};

/// All categories, in declaration order. `adl_general` is last.
pub fn all_categories() -> &'static [DiseaseCategory] {
    &CATEGORIES
}

/// Look up a category by id.
pub fn get_category(id: CategoryId) -> Option<&'static DiseaseCategory> {
    CATEGORIES.iter().find(|c| c.id == id)
}

static CATEGORIES: LazyLock<Vec<DiseaseCategory>> = LazyLock::new(|| {
    vec![
        dementia(),
        stroke(),
        orthopedic(),
        cardiac(),
        disuse(),
        adl_general(),
    ]
});

fn example(
    needs: &str,
    long_term_goal: &str,
    short_term_goals: &[&str],
    services: &[(&str, &str, &str)],
) -> CarePlanExample {
    CarePlanExample {
        needs: needs.to_string(),
        long_term_goal: long_term_goal.to_string(),
        short_term_goals: short_term_goals.iter().map(|s| s.to_string()).collect(),
        services: services
            .iter()
            .map(|(content, service_type, frequency)| ServiceItem {
                content: content.to_string(),
                service_type: service_type.to_string(),
                frequency: frequency.to_string(),
            })
            .collect(),
    }
}

fn dementia() -> DiseaseCategory {
    DiseaseCategory {
        id: CategoryId::Dementia,
        name: "認知症".to_string(),
        description: "認知症・物忘れ・見当識障害のある方の事例".to_string(),
        examples: vec![
            example(
                "物忘れがあっても、住み慣れた自宅で安心して生活したい",
                "見守りと支援を受けながら、自宅での生活を継続できる",
                &[
                    "服薬カレンダーを使い、声かけにより飲み忘れなく服薬できる",
                    "デイサービスに週2回通い、なじみの環境で過ごせる",
                ],
                &[
                    ("服薬管理の支援・安否確認", "訪問介護", "週3回"),
                    ("レクリエーション・入浴の提供", "通所介護", "週2回"),
                ],
            ),
            example(
                "道に迷うことがあるが、これまで通り外出を続けたい",
                "安全に外出の機会を保ち、地域とのつながりを維持できる",
                &[
                    "GPS端末を携帯し、家族が所在を確認できる体制を整える",
                    "付き添いのもと、週1回なじみの商店まで買い物に行ける",
                ],
                &[
                    ("外出時の見守り・付き添い", "訪問介護", "週1回"),
                    ("徘徊感知機器の利用", "福祉用具貸与", "常時"),
                ],
            ),
            example(
                "介護する家族の負担を減らし、在宅生活を続けたい",
                "家族が休息をとりながら、在宅での介護を継続できる",
                &[
                    "月1回ショートステイを利用し、家族の休息日を確保する",
                    "認知症カフェに参加し、家族が相談できる場を持つ",
                ],
                &[
                    ("宿泊による介護と生活支援", "短期入所生活介護", "月1回(2泊3日)"),
                    ("介護者交流会への参加", "地域資源", "月1回"),
                ],
            ),
        ],
    }
}

fn stroke() -> DiseaseCategory {
    DiseaseCategory {
        id: CategoryId::Stroke,
        name: "脳血管疾患".to_string(),
        description: "脳梗塞・脳出血の後遺症(片麻痺・嚥下障害等)のある方の事例".to_string(),
        examples: vec![
            example(
                "右片麻痺があるが、自分の足でトイレまで歩けるようになりたい",
                "屋内を伝い歩きで安全に移動し、排泄を自分で行える",
                &[
                    "平行棒内での歩行訓練を週2回行い、見守りで10m歩行できる",
                    "手すりを使ってトイレへの移動が見守りで行える",
                ],
                &[
                    ("歩行訓練・下肢筋力訓練", "通所リハビリテーション", "週2回"),
                    ("トイレ・廊下への手すり設置", "住宅改修", "1回"),
                ],
            ),
            example(
                "むせ込みがあるが、口から食事をとり続けたい",
                "誤嚥なく、楽しみながら食事を続けられる",
                &[
                    "嚥下体操を毎食前に行い、むせ込みの回数を減らす",
                    "とろみ調整と食形態の工夫により安全に全量摂取できる",
                ],
                &[
                    ("嚥下機能の評価・嚥下訓練", "訪問看護", "週1回"),
                    ("食形態の調整・食事の見守り", "本人・家族", "毎食"),
                ],
            ),
            example(
                "麻痺のある生活に慣れ、再発を防ぎながら暮らしたい",
                "血圧を安定させ、再発なく在宅生活を継続できる",
                &[
                    "毎朝血圧を測定し、手帳に記録して受診時に持参できる",
                    "減塩食を守り、体重を維持できる",
                ],
                &[
                    ("体調観察・服薬確認・血圧管理の指導", "訪問看護", "週1回"),
                    ("減塩食の準備", "本人・家族", "毎日"),
                ],
            ),
        ],
    }
}

fn orthopedic() -> DiseaseCategory {
    DiseaseCategory {
        id: CategoryId::Orthopedic,
        name: "骨・関節疾患".to_string(),
        description: "骨折・変形性関節症・骨粗鬆症など運動器疾患のある方の事例".to_string(),
        examples: vec![
            example(
                "大腿骨骨折の手術後、再び転ばずに歩けるようになりたい",
                "屋内外を杖歩行で安全に移動できる",
                &[
                    "下肢筋力訓練を週2回行い、椅子からの立ち上がりが一人でできる",
                    "屋内の段差に手すりを設置し、つまずかずに移動できる",
                ],
                &[
                    ("筋力訓練・バランス訓練", "通所リハビリテーション", "週2回"),
                    ("玄関・廊下への手すり設置", "住宅改修", "1回"),
                ],
            ),
            example(
                "膝の痛みがあるが、家事を自分で続けたい",
                "痛みと付き合いながら、調理と洗濯を自分で行える",
                &[
                    "膝への負担が少ない動作方法を習得し、立ち仕事を15分続けられる",
                    "痛みが強い日は無理をせず、支援を頼むことができる",
                ],
                &[
                    ("関節可動域訓練・動作指導", "訪問リハビリテーション", "週1回"),
                    ("掃除・買い物の支援", "訪問介護", "週2回"),
                ],
            ),
            example(
                "骨粗鬆症があり、骨折しないか不安なく外出したい",
                "転倒・骨折なく、安心して外出の機会を持てる",
                &[
                    "骨粗鬆症の治療薬を飲み忘れなく服用できる",
                    "歩行器を使って近所のスーパーまで買い物に行ける",
                ],
                &[
                    ("歩行器の利用", "福祉用具貸与", "常時"),
                    ("服薬状況の確認・転倒予防の指導", "訪問看護", "月2回"),
                ],
            ),
        ],
    }
}

fn cardiac() -> DiseaseCategory {
    DiseaseCategory {
        id: CategoryId::Cardiac,
        name: "心疾患".to_string(),
        description: "心不全・狭心症・心筋梗塞など循環器疾患のある方の事例".to_string(),
        examples: vec![
            example(
                "心不全の悪化を防ぎながら、自宅での生活を続けたい",
                "心不全の増悪による再入院なく在宅生活を継続できる",
                &[
                    "毎朝体重と血圧を測定・記録し、むくみの変化に気付ける",
                    "塩分を控えた食事を続けることができる",
                ],
                &[
                    ("体調観察・心不全増悪兆候の早期発見", "訪問看護", "週1回"),
                    ("体重・血圧の測定と記録", "本人・家族", "毎日"),
                ],
            ),
            example(
                "息切れがあっても、体力に合わせて活動を続けたい",
                "息切れと付き合いながら、日中の活動量を保てる",
                &[
                    "負荷の軽い運動を週2回行い、休憩をはさんで20分活動できる",
                    "息切れが強い時は休む判断が自分でできる",
                ],
                &[
                    ("心機能に配慮した運動プログラム", "通所リハビリテーション", "週2回"),
                    ("入浴の見守り・負担軽減の工夫", "通所介護", "週1回"),
                ],
            ),
            example(
                "薬の種類が多いが、間違えずに飲み続けたい",
                "処方どおりの服薬を続け、症状を安定させられる",
                &[
                    "お薬カレンダーを利用し、飲み忘れを週0回にする",
                    "受診時に薬の疑問を医師・薬剤師に相談できる",
                ],
                &[
                    ("服薬管理の支援", "訪問介護", "週3回"),
                    ("服薬指導・残薬の確認", "訪問看護", "月2回"),
                ],
            ),
        ],
    }
}

fn disuse() -> DiseaseCategory {
    DiseaseCategory {
        id: CategoryId::Disuse,
        name: "廃用症候群・フレイル".to_string(),
        description: "筋力低下・閉じこもり・活動量低下のある方の事例".to_string(),
        examples: vec![
            example(
                "足腰が弱ってきたが、寝たきりにならず動ける体を保ちたい",
                "筋力を維持し、屋内の移動を自分で行える",
                &[
                    "下肢筋力訓練を週2回続け、立ち上がりが手すりなしでできる",
                    "1日1回は屋外に出て、10分程度の散歩ができる",
                ],
                &[
                    ("筋力訓練・活動量の評価", "通所リハビリテーション", "週2回"),
                    ("散歩の同行・声かけ", "本人・家族", "毎日"),
                ],
            ),
            example(
                "閉じこもりがちだが、人と会う機会を増やしたい",
                "週に複数回外出し、人との交流を楽しめる",
                &[
                    "デイサービスに週2回通い、趣味活動に参加できる",
                    "地域のサロンに月1回顔を出すことができる",
                ],
                &[
                    ("趣味活動・他者交流の機会の提供", "通所介護", "週2回"),
                    ("地域サロンへの参加", "地域資源", "月1回"),
                ],
            ),
            example(
                "食が細くなってきたが、体力を落とさず過ごしたい",
                "体重を維持し、活動に必要な体力を保てる",
                &[
                    "高たんぱくの補助食品を取り入れ、体重減少を止める",
                    "毎食後に口腔ケアを行い、おいしく食べられる口を保つ",
                ],
                &[
                    ("栄養状態の評価・食事内容の助言", "訪問看護", "月2回"),
                    ("配食サービスの利用", "地域資源", "週5回"),
                ],
            ),
        ],
    }
}

fn adl_general() -> DiseaseCategory {
    DiseaseCategory {
        id: CategoryId::AdlGeneral,
        name: "日常生活全般".to_string(),
        description: "疾患を問わず、日常生活動作・生活支援に関する事例".to_string(),
        examples: vec![
            example(
                "入浴が一人では難しいが、清潔を保って気持ちよく過ごしたい",
                "安全に入浴し、清潔な状態を保てる",
                &[
                    "週2回、見守りと一部介助のもとで入浴できる",
                    "浴室の手すりとシャワーチェアを使い、安全に動作できる",
                ],
                &[
                    ("入浴介助", "通所介護", "週2回"),
                    ("シャワーチェア・浴室手すりの利用", "福祉用具貸与", "常時"),
                ],
            ),
            example(
                "一人暮らしでも、栄養のある食事をとり続けたい",
                "バランスのとれた食事を1日3食とることができる",
                &[
                    "配食サービスを利用し、夕食を毎日確実にとれる",
                    "ヘルパーと一緒に簡単な調理を週2回行える",
                ],
                &[
                    ("夕食の配食", "地域資源", "週7回"),
                    ("調理の支援・買い物代行", "訪問介護", "週2回"),
                ],
            ),
            example(
                "夜間のトイレが不安だが、失敗せずに排泄したい",
                "夜間も含めて、排泄を自分で行える",
                &[
                    "就寝前の水分調整と声かけで、夜間の失敗を週1回以下にする",
                    "ポータブルトイレを寝室に設置し、安全に使用できる",
                ],
                &[
                    ("ポータブルトイレの利用", "福祉用具貸与", "常時"),
                    ("排泄リズムの把握・助言", "訪問看護", "月2回"),
                ],
            ),
            example(
                "独居でも、何かあったときに気付いてもらえる安心がほしい",
                "見守りの体制のもと、安心して一人暮らしを続けられる",
                &[
                    "緊急通報装置の使い方を覚え、体調不良時に通報できる",
                    "安否確認の訪問を受け、困りごとを相談できる",
                ],
                &[
                    ("緊急通報装置の設置", "地域資源", "常時"),
                    ("安否確認・生活状況の確認", "訪問介護", "週3回"),
                ],
            ),
        ],
    }
}
