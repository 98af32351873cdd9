use crate::catalog::locations::LocationGroups;
use crate::types::assessment::{DetailedScores, Score};
use crate::types::criteria::EligibilityCriteria;
use crate::types::profile::ProjectProfile;

/// Weights in `DetailedScores::as_array` order: organization, location, budget,
/// category, co-financing, team, experience, innovation, sustainability, social impact.
pub const WEIGHTS: [f64; 10] = [0.20, 0.15, 0.15, 0.15, 0.10, 0.08, 0.07, 0.05, 0.03, 0.02];

pub const PENALTY_PER_FAILED_CHECK: Score = 15.0;
pub const MAX_PENALTY: Score = 60.0;

/// Budgets up to this share of the maximum score full marks.
const OPTIMAL_BUDGET_SHARE: f64 = 0.7;
const BUDGET_FIT_FLOOR: Score = 70.0;
const OPTIMAL_TEAM_FACTOR: f64 = 2.5;
const OVERSIZED_TEAM_PENALTY: Score = 5.0;
const OVERSIZED_TEAM_FLOOR: Score = 70.0;

pub fn detailed_scores(
    profile: &ProjectProfile,
    criteria: &EligibilityCriteria,
    locations: &LocationGroups,
) -> DetailedScores {
    DetailedScores {
        organization_match: full_or_zero(
            criteria
                .eligible_organizations
                .contains(&profile.organization_type),
        ),
        location_match: full_or_zero(
            locations.matches(&profile.location, &criteria.eligible_locations),
        ),
        budget_fit: budget_fit(profile.project_budget, criteria.min_budget, criteria.max_budget),
        category_match: full_or_zero(
            criteria
                .eligible_categories
                .contains(&profile.project_category),
        ),
        cofinancing_capability: cofinancing_capability(
            profile.cofinancing_percentage,
            criteria.required_cofinancing,
        ),
        team_adequacy: team_adequacy(profile.team_size, criteria.min_team_size),
        experience_level: experience_level(profile.has_experience, criteria.requires_experience),
        innovation_score: scale_score(profile.innovation_level),
        sustainability_score: scale_score(profile.sustainability_score),
        social_impact_score: scale_score(profile.social_impact_score),
    }
}

fn full_or_zero(matched: bool) -> Score {
    if matched {
        100.0
    } else {
        0.0
    }
}

pub fn budget_fit(budget: f64, min_budget: Option<f64>, max_budget: Option<f64>) -> Score {
    if min_budget.is_some_and(|min| budget < min) || max_budget.is_some_and(|max| budget > max) {
        return 0.0;
    }

    match max_budget {
        Some(max) => {
            let optimal = max * OPTIMAL_BUDGET_SHARE;
            if budget <= optimal {
                100.0
            } else {
                100.0 - (budget - optimal) / (max - optimal) * (100.0 - BUDGET_FIT_FLOOR)
            }
        }
        None => 100.0,
    }
}

/// Surplus co-financing never lifts the score above 100.
pub fn cofinancing_capability(actual: f64, required: Option<f64>) -> Score {
    match required {
        None => 100.0,
        Some(required) if actual < required => 0.0,
        Some(required) => (100.0 + 2.0 * (actual - required)).min(100.0),
    }
}

pub fn team_adequacy(team_size: u32, min_team_size: Option<u32>) -> Score {
    let Some(min) = min_team_size else {
        return 100.0;
    };
    if team_size < min {
        return 0.0;
    }

    let optimal = f64::from(min) * OPTIMAL_TEAM_FACTOR;
    let size = f64::from(team_size);
    if size <= optimal {
        100.0
    } else {
        (100.0 - (size - optimal) * OVERSIZED_TEAM_PENALTY).max(OVERSIZED_TEAM_FLOOR)
    }
}

pub fn experience_level(has_experience: bool, requires_experience: bool) -> Score {
    match (has_experience, requires_experience) {
        (false, true) => 0.0,
        (true, _) => 100.0,
        (false, false) => 80.0,
    }
}

pub fn scale_score(level: u8) -> Score {
    f64::from(level) / 5.0 * 100.0
}

pub fn score_ceiling(failed_count: usize) -> Score {
    let penalty = (failed_count as f64 * PENALTY_PER_FAILED_CHECK).min(MAX_PENALTY);
    100.0 - penalty
}

pub fn weighted_score(scores: &DetailedScores) -> Score {
    scores
        .as_array()
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(score, weight)| score * weight)
        .sum()
}

/// Returns `(overall_score, ceiling)`. The overall score is the weighted score
/// capped by the ceiling, rounded to two decimals.
pub fn combine(scores: &DetailedScores, failed_count: usize) -> (Score, Score) {
    let ceiling = score_ceiling(failed_count);
    let overall = round2(weighted_score(scores).min(ceiling));
    (overall, ceiling)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
