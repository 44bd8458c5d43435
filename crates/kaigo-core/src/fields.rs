//! Assessment field registry.
//!
//! The intake assessment has a fixed set of fields, known at compile time.
//! Each field carries its JSON wire name, a Japanese display label, and a
//! disambiguation description. The description is the single source of truth
//! used both in the declared model response schema and in the extraction
//! prompt's field guide.

/// Definition of a single assessment field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Wire name, camelCase, matching `AssessmentSnapshot`'s serde names.
    pub id: &'static str,
    /// Japanese display label shown in prompts and the UI.
    pub label: &'static str,
    /// Disambiguation description for the model.
    pub description: &'static str,
}

/// Number of fields in the intake assessment.
pub const FIELD_COUNT: usize = 21;

/// All assessment fields, in canonical intake order.
pub const ASSESSMENT_FIELDS: [FieldDef; FIELD_COUNT] = [
    FieldDef {
        id: "healthStatus",
        label: "健康状態",
        description: "現在の疾患・症状・体調など、今の健康状態。過去の病歴は既往歴に記載する。",
    },
    FieldDef {
        id: "medicalHistory",
        label: "既往歴",
        description: "過去にかかった病気・手術・入院の履歴。現在治療中の疾患は健康状態に記載する。",
    },
    FieldDef {
        id: "skinCondition",
        label: "皮膚の状態",
        description: "褥瘡・乾燥・浮腫など皮膚に関する状態。",
    },
    FieldDef {
        id: "oralHygiene",
        label: "口腔衛生",
        description: "歯・義歯・口腔ケアの状況。食事の摂取量や内容は食事摂取に記載する。",
    },
    FieldDef {
        id: "fluidIntake",
        label: "水分摂取",
        description: "1日の水分摂取量や飲水の状況。食事そのものの内容は食事摂取に記載する。",
    },
    FieldDef {
        id: "adlMobility",
        label: "移動",
        description: "歩行・移乗・車いす使用など移動動作の自立度。",
    },
    FieldDef {
        id: "adlEating",
        label: "食事摂取",
        description: "食事動作と摂取の状況。水分のみの話題は水分摂取、口腔ケアは口腔衛生に記載する。",
    },
    FieldDef {
        id: "adlToileting",
        label: "排泄",
        description: "排尿・排便とトイレ動作の状況。",
    },
    FieldDef {
        id: "adlBathing",
        label: "入浴",
        description: "入浴動作と頻度、介助の状況。",
    },
    FieldDef {
        id: "adlGrooming",
        label: "整容・更衣",
        description: "洗面・整髪・着替えなどの状況。",
    },
    FieldDef {
        id: "iadlCooking",
        label: "調理",
        description: "調理・配食の利用など食事の用意に関する状況。",
    },
    FieldDef {
        id: "iadlShopping",
        label: "買い物",
        description: "日用品・食材の買い物の状況。",
    },
    FieldDef {
        id: "iadlMoneyManagement",
        label: "金銭管理",
        description: "金銭・貴重品の管理の状況。",
    },
    FieldDef {
        id: "medication",
        label: "服薬管理",
        description: "処方薬の内容と服薬の自己管理状況。",
    },
    FieldDef {
        id: "cognition",
        label: "認知機能",
        description: "記憶・見当識・判断力など認知面の状況。会話のやりとり自体はコミュニケーション能力に記載する。",
    },
    FieldDef {
        id: "communication",
        label: "コミュニケーション能力",
        description: "視力・聴力・言語によるやりとりの状況。記憶や判断の低下は認知機能に記載する。",
    },
    FieldDef {
        id: "socialParticipation",
        label: "社会との関わり",
        description: "友人・地域・趣味活動など社会参加の状況。",
    },
    FieldDef {
        id: "residence",
        label: "住居環境",
        description: "住宅の構造・段差・手すりなど住まいの物理的環境。",
    },
    FieldDef {
        id: "familySituation",
        label: "家族状況",
        description: "同居・別居の家族構成と介護力の状況。",
    },
    FieldDef {
        id: "maltreatmentRisk",
        label: "虐待の危険性",
        description: "虐待・不適切な対応の兆候やその危険性。近隣や地域の様子は生活環境に記載する。",
    },
    FieldDef {
        id: "livingEnvironment",
        label: "生活環境",
        description: "近隣との関係・買い物や交通の利便性など地域の生活環境。虐待の兆候は虐待の危険性に記載する。",
    },
];
