use chrono::{DateTime, Duration, TimeZone, Utc};
use grantfit::catalog::Catalog;
use grantfit::engine::scoring::score_ceiling;
use grantfit::engine::EligibilityEngine;
use grantfit::types::assessment::EligibilityLevel;
use grantfit::types::profile::{Entity, OrganizationType, ProjectCategory, ProjectProfile};
use proptest::prelude::*;
use proptest::sample::select;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
}

fn engine() -> EligibilityEngine {
    EligibilityEngine::new(Catalog::builtin().expect("built-in catalog should parse"))
}

fn tier_rank(level: EligibilityLevel) -> u8 {
    match level {
        EligibilityLevel::VeryLow => 0,
        EligibilityLevel::Low => 1,
        EligibilityLevel::Medium => 2,
        EligibilityLevel::High => 3,
    }
}

fn organization_type() -> impl Strategy<Value = OrganizationType> {
    select(vec![
        OrganizationType::Sme,
        OrganizationType::Ngo,
        OrganizationType::PublicInstitution,
        OrganizationType::EducationalInstitution,
        OrganizationType::Startup,
        OrganizationType::SoleProprietor,
        OrganizationType::Farmer,
        OrganizationType::Municipality,
        OrganizationType::Other,
    ])
}

fn project_category() -> impl Strategy<Value = ProjectCategory> {
    select(vec![
        ProjectCategory::Innovation,
        ProjectCategory::Digitalization,
        ProjectCategory::GreenEconomy,
        ProjectCategory::Agriculture,
        ProjectCategory::RuralDevelopment,
        ProjectCategory::Tourism,
        ProjectCategory::SocialInclusion,
        ProjectCategory::Education,
        ProjectCategory::Culture,
        ProjectCategory::Energy,
        ProjectCategory::Transport,
        ProjectCategory::Environment,
        ProjectCategory::Health,
        ProjectCategory::Infrastructure,
        ProjectCategory::Sport,
    ])
}

fn location() -> impl Strategy<Value = String> {
    prop_oneof![
        select(vec!["sarajevo", "banja_luka", "cazin", "mostar", "brčko", "foča"])
            .prop_map(str::to_string),
        "[a-z]{3,12}",
    ]
}

prop_compose! {
    fn valid_profile()(
        (organization_type, location, entity, project_category) in (
            organization_type(),
            location(),
            select(vec![Entity::FBiH, Entity::RS, Entity::BD]),
            project_category(),
        ),
        (project_budget, project_duration, cofinancing_percentage, team_size) in (
            100.0f64..1_000_000.0,
            1u32..=72,
            0.0f64..=100.0,
            1u32..=60,
        ),
        (innovation_level, sustainability_score, social_impact_score) in (1u8..=5, 1u8..=5, 1u8..=5),
        (has_experience, annual_revenue, age_days) in (
            any::<bool>(),
            proptest::option::of(0.0f64..5_000_000.0),
            0i64..400,
        ),
        partnerships in proptest::collection::vec("[a-z_]{3,10}", 0..3),
    ) -> ProjectProfile {
        ProjectProfile {
            organization_type,
            organization_size: team_size,
            annual_revenue,
            location,
            entity,
            project_category,
            project_budget,
            project_duration,
            has_cofinancing: cofinancing_percentage > 0.0,
            cofinancing_percentage,
            team_size,
            has_experience,
            innovation_level,
            sustainability_score,
            social_impact_score,
            target_groups: Vec::new(),
            partnerships,
            created_at: now() - Duration::days(age_days),
        }
    }
}

proptest! {
    #[test]
    fn scores_stay_within_ceiling(profile in valid_profile()) {
        let engine = engine();
        let assessments = engine
            .assess_all_at(&profile, now())
            .expect("valid profile should assess");
        prop_assert_eq!(assessments.len(), engine.catalog().len());

        for assessment in &assessments {
            let failed = assessment.failed_criteria.len();
            prop_assert_eq!(failed + assessment.passed_criteria.len(), 13);
            prop_assert!((assessment.max_possible_score - score_ceiling(failed)).abs() < 1e-9);
            prop_assert!(assessment.overall_score >= 0.0);
            prop_assert!(assessment.overall_score <= assessment.max_possible_score);
            prop_assert!(assessment.max_possible_score >= 40.0);
            prop_assert!(assessment.max_possible_score <= 100.0);
            prop_assert_eq!(
                assessment.eligibility_level,
                EligibilityLevel::from_score(assessment.overall_score)
            );
            prop_assert!(assessment.confidence_score > 0.0);
            prop_assert!(assessment.confidence_score <= 100.0);
        }
    }

    #[test]
    fn batch_is_sorted_and_idempotent(profile in valid_profile()) {
        let engine = engine();
        let first = engine.assess_all_at(&profile, now()).expect("first run");
        let second = engine.assess_all_at(&profile, now()).expect("second run");

        prop_assert!(first
            .windows(2)
            .all(|pair| pair[0].overall_score >= pair[1].overall_score));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn best_matches_are_a_good_prefix(profile in valid_profile(), limit in 1usize..10) {
        let engine = engine();
        let all = engine.assess_all_at(&profile, now()).expect("batch");
        let matches = engine.best_matches_at(&profile, limit, now()).expect("matches");

        let expected: Vec<&str> = all
            .iter()
            .filter(|assessment| assessment.eligibility_level.is_good_match())
            .take(limit)
            .map(|assessment| assessment.grant_id())
            .collect();
        let actual: Vec<&str> = matches.iter().map(|assessment| assessment.grant_id()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn tiers_are_monotonic(a in 0.0f64..=100.0, b in 0.0f64..=100.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            tier_rank(EligibilityLevel::from_score(low))
                <= tier_rank(EligibilityLevel::from_score(high))
        );
    }
}
