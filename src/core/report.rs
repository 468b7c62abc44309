use crate::domain::model::{PairDiagnosis, SelfDiagnosis};
use crate::utils::error::Result;
use serde::Serialize;

/// Pretty-printed JSON for the `--format json` output mode.
pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Labeled output lines for one person, matching the application's
/// display format.
pub fn render_self(diagnosis: &SelfDiagnosis) -> Vec<String> {
    let mut lines = vec![format!("🔮 {} さんの診断結果", diagnosis.name)];

    for reading in &diagnosis.meanings {
        lines.push(format!(
            "{}：{} → {}",
            reading.category.label(),
            reading.number,
            reading.meaning
        ));
    }

    for n in &diagnosis.dominant_numbers {
        lines.push(format!("{} が複数登場 → 影響が強い数字です", n));
    }

    lines
}

/// Output lines for a pair diagnosis: both profiles, then the
/// compatibility summary.
pub fn render_pair(diagnosis: &PairDiagnosis) -> Vec<String> {
    let mut lines = render_self(&diagnosis.person_a);
    lines.push(String::new());
    lines.extend(render_self(&diagnosis.person_b));
    lines.push(String::new());

    let compat = &diagnosis.compatibility;
    lines.push("💑 相性診断結果".to_string());
    lines.push(format!(
        "運命数 {} × 運命数 {} → {}",
        compat.life_path_a,
        compat.life_path_b,
        compat.relation.description()
    ));
    lines.push(format!("ふたりのテーマ：{}", compat.theme));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::diagnosis;
    use crate::domain::model::PersonInput;
    use chrono::NaiveDate;

    #[test]
    fn test_render_self_labels() {
        let person =
            PersonInput::new("TANAKA", NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
        let lines = render_self(&diagnosis::diagnose(&person));

        assert_eq!(lines[0], "🔮 TANAKA さんの診断結果");
        assert_eq!(lines[1], "運命数：3 → 表現力と創造性。");
        assert!(lines[2].starts_with("誕生数：6"));
        assert!(lines.iter().any(|l| l.contains("影響が強い数字です")));
    }

    #[test]
    fn test_render_pair_includes_compatibility() {
        let a = PersonInput::new("TANAKA", NaiveDate::from_ymd_opt(1990, 5, 15).unwrap());
        let b = PersonInput::new("SUZUKI", NaiveDate::from_ymd_opt(1988, 12, 3).unwrap());
        let lines = render_pair(&diagnosis::diagnose_pair(&a, &b));

        assert!(lines.contains(&"💑 相性診断結果".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("ふたりのテーマ：")));
    }
}
