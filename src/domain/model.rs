use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One person's raw input, as collected by the UI layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonInput {
    pub name: String,
    pub birthdate: NaiveDate,
}

impl PersonInput {
    pub fn new(name: impl Into<String>, birthdate: NaiveDate) -> Self {
        Self {
            name: name.into(),
            birthdate,
        }
    }
}

/// The four core scores. Each value is a single digit 1-9 or a master
/// number (11, 22, 33).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    pub life_path: u32,
    pub birth_day: u32,
    pub expression: u32,
    pub soul_urge: u32,
}

impl NumerologyProfile {
    pub fn scores(&self) -> [u32; 4] {
        [self.life_path, self.birth_day, self.expression, self.soul_urge]
    }
}

/// Which score a meaning is looked up for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    LifePath,
    BirthDay,
    Expression,
    Soul,
}

impl Category {
    /// Japanese label used when rendering a report line.
    pub fn label(&self) -> &'static str {
        match self {
            Category::LifePath => "運命数",
            Category::BirthDay => "誕生数",
            Category::Expression => "表現数",
            Category::Soul => "魂の欲求数",
        }
    }
}

/// How two life path numbers relate, classified by their absolute difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationLabel {
    /// Difference 0.
    TwinLike,
    /// Difference 1.
    Balanced,
    /// Difference 2 or 3.
    Stimulating,
    /// Difference 4 or more.
    SlowGrowth,
}

impl RelationLabel {
    pub fn description(&self) -> &'static str {
        match self {
            RelationLabel::TwinLike => "似た者同士。衝突もありますが、深い理解で結ばれる相性です。",
            RelationLabel::Balanced => "バランスが良く、互いの足りない部分を補い合える相性です。",
            RelationLabel::Stimulating => "摩擦もありますが、互いに刺激を与え合える相性です。",
            RelationLabel::SlowGrowth => {
                "理解し合うまでに時間がかかりますが、大きく成長できる相性です。"
            }
        }
    }
}

/// Pairwise diagnosis outcome for two people.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub life_path_a: u32,
    pub life_path_b: u32,
    pub relation: RelationLabel,
    pub theme: String,
}

/// Full self-diagnosis: profile, per-category readings and recurring numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelfDiagnosis {
    pub name: String,
    pub profile: NumerologyProfile,
    pub meanings: Vec<Reading>,
    pub dominant_numbers: Vec<u32>,
}

/// One rendered score with its interpretation text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    pub category: Category,
    pub number: u32,
    pub meaning: String,
}

/// Pair diagnosis: both people's self-readings plus the compatibility result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairDiagnosis {
    pub person_a: SelfDiagnosis,
    pub person_b: SelfDiagnosis,
    pub compatibility: CompatibilityResult,
}
