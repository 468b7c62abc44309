use crate::core::engine;
use crate::core::meaning;
use crate::domain::model::{
    Category, CompatibilityResult, NumerologyProfile, PairDiagnosis, PersonInput, Reading,
    SelfDiagnosis,
};
use chrono::Datelike;

/// Computes the four scores for one person.
pub fn profile(person: &PersonInput) -> NumerologyProfile {
    NumerologyProfile {
        life_path: engine::life_path_number(person.birthdate),
        birth_day: engine::birth_day_number(person.birthdate.day()),
        expression: engine::expression_number(&person.name),
        soul_urge: engine::soul_urge_number(&person.name),
    }
}

/// Full self-diagnosis: scores, interpretation text per category, and
/// numbers that recur across the profile.
pub fn diagnose(person: &PersonInput) -> SelfDiagnosis {
    tracing::debug!("Computing profile for {}", person.name);
    let profile = profile(person);
    tracing::debug!(
        "Scores: life_path={} birth_day={} expression={} soul_urge={}",
        profile.life_path,
        profile.birth_day,
        profile.expression,
        profile.soul_urge
    );

    let readings = [
        (Category::LifePath, profile.life_path),
        (Category::BirthDay, profile.birth_day),
        (Category::Expression, profile.expression),
        (Category::Soul, profile.soul_urge),
    ];
    let meanings = readings
        .into_iter()
        .map(|(category, number)| Reading {
            category,
            number,
            meaning: meaning::meaning(category, number).to_string(),
        })
        .collect();

    let dominant_numbers = meaning::dominant_numbers(&profile.scores());
    if !dominant_numbers.is_empty() {
        tracing::debug!("Dominant numbers: {:?}", dominant_numbers);
    }

    SelfDiagnosis {
        name: person.name.clone(),
        profile,
        meanings,
        dominant_numbers,
    }
}

/// Pairwise diagnosis: both self-diagnoses plus the compatibility reading
/// derived from the two life path numbers.
pub fn diagnose_pair(a: &PersonInput, b: &PersonInput) -> PairDiagnosis {
    let person_a = diagnose(a);
    let person_b = diagnose(b);

    let life_path_a = person_a.profile.life_path;
    let life_path_b = person_b.profile.life_path;
    let relation = meaning::compatibility(life_path_a, life_path_b);
    let theme_number = engine::reduce(life_path_a + life_path_b);
    tracing::debug!(
        "Compatibility: {} vs {} -> {:?} (theme number {})",
        life_path_a,
        life_path_b,
        relation,
        theme_number
    );

    PairDiagnosis {
        person_a,
        person_b,
        compatibility: CompatibilityResult {
            life_path_a,
            life_path_b,
            relation,
            theme: meaning::relationship_theme(theme_number).to_string(),
        },
    }
}
