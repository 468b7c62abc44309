use numerology::utils::validation::Validate;
use numerology::{diagnosis, engine, report, CliConfig, OutputFormat, PersonInput, RelationLabel};

use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_end_to_end_self_diagnosis_from_cli_config() {
    let config = CliConfig {
        name: "TANAKA".to_string(),
        birthdate: "1990-05-15".to_string(),
        partner_name: None,
        partner_birthdate: None,
        format: OutputFormat::Text,
        verbose: false,
    };
    assert!(config.validate().is_ok());

    let person = config.person().unwrap();
    let result = diagnosis::diagnose(&person);

    assert_eq!(result.profile.life_path, 3);
    assert_eq!(result.profile.birth_day, 6);
    assert_eq!(result.meanings[0].meaning, "表現力と創造性。");
    assert_eq!(result.dominant_numbers, vec![3]);

    let lines = report::render_self(&result);
    assert!(lines.contains(&"運命数：3 → 表現力と創造性。".to_string()));
    assert!(lines.iter().any(|l| l.contains("3 が複数登場")));
}

#[test]
fn test_master_numbers_survive_reduction_end_to_end() {
    // 2+0+0+0+0+9+2+9 = 22, and day 29 reduces to 11
    let person = PersonInput::new("YAMADA", date(2000, 9, 29));
    let result = diagnosis::diagnose(&person);

    assert_eq!(result.profile.life_path, 22);
    assert_eq!(result.profile.birth_day, 11);
    assert_eq!(result.meanings[0].meaning, "理想の具現化。");
}

#[test]
fn test_pair_diagnosis_balanced_couple() {
    // life paths 5 and 6, difference 1
    let a = PersonInput::new("SUZUKI", date(1988, 12, 3));
    let b = PersonInput::new("SATO", date(1990, 1, 4));
    let result = diagnosis::diagnose_pair(&a, &b);

    assert_eq!(result.compatibility.life_path_a, 5);
    assert_eq!(result.compatibility.life_path_b, 6);
    assert_eq!(result.compatibility.relation, RelationLabel::Balanced);
    // 5 + 6 = 11, a master number theme
    assert_eq!(result.compatibility.theme, "直感で通じ合う関係。");

    let lines = report::render_pair(&result);
    assert!(lines.contains(&"💑 相性診断結果".to_string()));
    assert!(lines
        .iter()
        .any(|l| l.contains(RelationLabel::Balanced.description())));
}

#[test]
fn test_pair_diagnosis_identical_profiles() {
    let a = PersonInput::new("TANAKA", date(1990, 5, 15));
    let result = diagnosis::diagnose_pair(&a, &a.clone());

    assert_eq!(result.compatibility.relation, RelationLabel::TwinLike);
    assert_eq!(engine::reduce(3 + 3), 6);
    assert_eq!(result.compatibility.theme, "家庭的で愛情深い関係。");
}

#[test]
fn test_name_normalization_matches_plain_letters() {
    let plain = PersonInput::new("TANAKATARO", date(1990, 5, 15));
    let noisy = PersonInput::new("Tanaka-Taro 3", date(1990, 5, 15));

    let plain_profile = diagnosis::profile(&plain);
    let noisy_profile = diagnosis::profile(&noisy);
    assert_eq!(plain_profile.expression, noisy_profile.expression);
    assert_eq!(plain_profile.soul_urge, noisy_profile.soul_urge);
}

#[test]
fn test_json_output_shape() {
    let person = PersonInput::new("TANAKA", date(1990, 5, 15));
    let result = diagnosis::diagnose(&person);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["profile"]["life_path"], 3);
    assert_eq!(json["meanings"][0]["category"], "life_path");
    assert_eq!(json["dominant_numbers"][0], 3);
}

#[test]
fn test_cli_config_rejects_bad_input() {
    let mut config = CliConfig {
        name: String::new(),
        birthdate: "1990-05-15".to_string(),
        partner_name: None,
        partner_birthdate: None,
        format: OutputFormat::Text,
        verbose: false,
    };
    assert!(config.validate().is_err());

    config.name = "TANAKA".to_string();
    config.birthdate = "2030-01-01".to_string();
    assert!(config.validate().is_err());

    config.birthdate = "not-a-date".to_string();
    assert!(config.validate().is_err());
}
