use crate::types::assessment::Score;
use crate::types::profile::ProjectProfile;
use chrono::{DateTime, Utc};

pub const CRITERIA_CLARITY: Score = 85.0;

const COMPLETENESS_FIELDS: u32 = 15;
/// Identity fields every profile carries (type, size, entity, category, flags).
const ALWAYS_PRESENT_FIELDS: u32 = 5;

pub fn data_completeness(profile: &ProjectProfile) -> Score {
    let present = [
        profile.annual_revenue.is_some(),
        !profile.location.is_empty(),
        profile.project_budget > 0.0,
        profile.project_duration > 0,
        profile.cofinancing_percentage >= 0.0,
        profile.team_size > 0,
        profile.innovation_level > 0,
        profile.sustainability_score > 0,
        profile.social_impact_score > 0,
        !profile.target_groups.is_empty(),
    ]
    .into_iter()
    .filter(|present| *present)
    .count() as u32;

    f64::from(present + ALWAYS_PRESENT_FIELDS) / f64::from(COMPLETENESS_FIELDS) * 100.0
}

pub fn data_recency(created_at: DateTime<Utc>, now: DateTime<Utc>) -> Score {
    match (now - created_at).num_days() {
        days if days < 7 => 100.0,
        days if days < 30 => 90.0,
        days if days < 90 => 75.0,
        _ => 60.0,
    }
}

/// Confidence in the assessment itself, not in the chance of winning the grant.
pub fn confidence_score(profile: &ProjectProfile, now: DateTime<Utc>) -> Score {
    let factors = [
        data_completeness(profile),
        CRITERIA_CLARITY,
        data_recency(profile.created_at, now),
    ];
    let average = factors.iter().sum::<f64>() / factors.len() as f64;
    super::scoring::round2(average)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::profile::tests::sample_profile;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn complete_fresh_profile_scores_ninety_five() {
        let profile = sample_profile();
        assert!((data_completeness(&profile) - 100.0).abs() < 1e-9);
        assert!((confidence_score(&profile, now()) - 95.0).abs() < 1e-9);
    }

    #[test]
    fn missing_optional_data_lowers_completeness() {
        let mut profile = sample_profile();
        profile.annual_revenue = None;
        profile.target_groups.clear();
        let completeness = data_completeness(&profile);
        assert!((completeness - 13.0 / 15.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn recency_steps_down_with_age() {
        let now = now();
        assert_eq!(data_recency(now - Duration::days(6), now), 100.0);
        assert_eq!(data_recency(now - Duration::days(7), now), 90.0);
        assert_eq!(data_recency(now - Duration::days(29), now), 90.0);
        assert_eq!(data_recency(now - Duration::days(30), now), 75.0);
        assert_eq!(data_recency(now - Duration::days(89), now), 75.0);
        assert_eq!(data_recency(now - Duration::days(90), now), 60.0);
    }

    #[test]
    fn stale_profile_lowers_confidence() {
        let mut profile = sample_profile();
        profile.created_at = now() - Duration::days(200);
        let expected = (100.0 + 85.0 + 60.0) / 3.0;
        let expected = crate::engine::scoring::round2(expected);
        assert!((confidence_score(&profile, now()) - expected).abs() < 1e-9);
    }
}
