use crate::domain::model::{Category, RelationLabel};
use std::collections::HashMap;

/// Returned for any number outside the tables.
pub const MEANING_PLACEHOLDER: &str = "解釈は準備中です。";
pub const THEME_PLACEHOLDER: &str = "未知の関係性です。";

/// Interpretation text for one score. Unknown numbers fall back to
/// [`MEANING_PLACEHOLDER`]; with a correct engine that only happens for
/// values outside {1..9, 11, 22, 33}.
pub fn meaning(category: Category, n: u32) -> &'static str {
    match category {
        Category::LifePath => match n {
            1 => "自立とリーダーシップ。",
            2 => "協調と調和。",
            3 => "表現力と創造性。",
            4 => "安定と努力。",
            5 => "自由と変化。",
            6 => "愛と責任。",
            7 => "探求と精神性。",
            8 => "達成と現実性。",
            9 => "博愛と奉仕。",
            11 => "直感と霊性。",
            22 => "理想の具現化。",
            33 => "無条件の愛。",
            _ => MEANING_PLACEHOLDER,
        },
        Category::BirthDay => match n {
            1 => "開拓心と独立心。",
            2 => "気配りと支え合い。",
            3 => "明るさとユーモア。",
            4 => "堅実さと忍耐。",
            5 => "好奇心と行動力。",
            6 => "思いやりと世話好き。",
            7 => "分析力と内省。",
            8 => "意志の強さと実行力。",
            9 => "寛容さと理解力。",
            11 => "鋭い感受性。",
            22 => "大きな構想力。",
            33 => "深い慈愛。",
            _ => MEANING_PLACEHOLDER,
        },
        Category::Expression => match n {
            1 => "先頭に立って切り開く力。",
            2 => "人と人をつなぐ力。",
            3 => "言葉や芸術で伝える力。",
            4 => "仕組みを築き上げる力。",
            5 => "変化を楽しみ広げる力。",
            6 => "周囲を癒やし育てる力。",
            7 => "本質を見抜く力。",
            8 => "目標を形にする力。",
            9 => "広い視野で貢献する力。",
            11 => "ひらめきを伝える力。",
            22 => "理想を実現する力。",
            33 => "愛で導く力。",
            _ => MEANING_PLACEHOLDER,
        },
        Category::Soul => match n {
            1 => "一番でありたいという願い。",
            2 => "安らぎと絆を求める心。",
            3 => "楽しみと自己表現への欲求。",
            4 => "安心できる基盤への欲求。",
            5 => "自由への強い渇望。",
            6 => "愛し愛されたい気持ち。",
            7 => "真理を知りたい欲求。",
            8 => "成功と豊かさへの欲求。",
            9 => "世界の役に立ちたい願い。",
            11 => "魂の導きに従いたい欲求。",
            22 => "大きな夢を叶えたい欲求。",
            33 => "すべてを包み込みたい願い。",
            _ => MEANING_PLACEHOLDER,
        },
    }
}

/// Classifies two life path numbers by their absolute difference.
pub fn compatibility(n1: u32, n2: u32) -> RelationLabel {
    match n1.abs_diff(n2) {
        0 => RelationLabel::TwinLike,
        1 => RelationLabel::Balanced,
        2 | 3 => RelationLabel::Stimulating,
        _ => RelationLabel::SlowGrowth,
    }
}

/// Theme for the relationship, looked up by the reduced sum of both
/// people's life path numbers.
pub fn relationship_theme(total: u32) -> &'static str {
    match total {
        1 => "新しい挑戦を始める関係。",
        2 => "支え合い、信頼を育む関係。",
        3 => "楽しさに満ちた関係。",
        4 => "地道に築き上げる関係。",
        5 => "変化と刺激にあふれる関係。",
        6 => "家庭的で愛情深い関係。",
        7 => "静かに深め合う関係。",
        8 => "目標へ共に向かう関係。",
        9 => "広く周囲へ貢献する関係。",
        11 => "直感で通じ合う関係。",
        22 => "大きな理想を共有する関係。",
        33 => "無償の愛で結ばれる関係。",
        _ => THEME_PLACEHOLDER,
    }
}

/// Numbers appearing more than once among the four profile scores. These are
/// surfaced as "strong influence" notes. Sorted for stable output.
pub fn dominant_numbers(scores: &[u32; 4]) -> Vec<u32> {
    let mut counts: HashMap<u32, usize> = HashMap::new();
    for &n in scores {
        *counts.entry(n).or_insert(0) += 1;
    }

    let mut dominant: Vec<u32> = counts
        .into_iter()
        .filter(|&(_, c)| c > 1)
        .map(|(n, _)| n)
        .collect();
    dominant.sort_unstable();
    dominant
}
