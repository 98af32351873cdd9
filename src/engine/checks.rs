use crate::catalog::locations::LocationGroups;
use crate::types::assessment::{CheckOutcome, Criterion, Issue};
use crate::types::criteria::EligibilityCriteria;
use crate::types::profile::ProjectProfile;
use chrono::{DateTime, Utc};

/// Minimum sustainability or social-impact score when a grant requires it.
pub const REQUIRED_IMPACT_SCORE: u8 = 3;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HardChecks {
    pub passed: Vec<CheckOutcome>,
    pub failed: Vec<CheckOutcome>,
}

impl HardChecks {
    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }
}

pub fn run_hard_checks(
    profile: &ProjectProfile,
    criteria: &EligibilityCriteria,
    locations: &LocationGroups,
    now: DateTime<Utc>,
) -> HardChecks {
    let outcomes = [
        organization_check(profile, criteria),
        location_check(profile, criteria, locations),
        entity_check(profile, criteria),
        budget_check(profile, criteria),
        duration_check(profile, criteria),
        cofinancing_check(profile, criteria),
        category_check(profile, criteria),
        team_check(profile, criteria),
        experience_check(profile, criteria),
        innovation_check(profile, criteria),
        sustainability_check(profile, criteria),
        social_impact_check(profile, criteria),
        deadline_check(criteria, now),
    ];

    let (passed, failed): (Vec<_>, Vec<_>) =
        outcomes.into_iter().partition(CheckOutcome::passed);
    HardChecks { passed, failed }
}

fn organization_check(profile: &ProjectProfile, criteria: &EligibilityCriteria) -> CheckOutcome {
    if criteria
        .eligible_organizations
        .contains(&profile.organization_type)
    {
        CheckOutcome::pass(Criterion::OrganizationType, "Organization type is eligible")
    } else {
        CheckOutcome::fail(
            Criterion::OrganizationType,
            Issue::NotEligible,
            format!(
                "Organization type ({}) is not eligible",
                profile.organization_type
            ),
        )
    }
}

fn location_check(
    profile: &ProjectProfile,
    criteria: &EligibilityCriteria,
    locations: &LocationGroups,
) -> CheckOutcome {
    if locations.matches(&profile.location, &criteria.eligible_locations) {
        CheckOutcome::pass(Criterion::Location, "Location is eligible")
    } else {
        CheckOutcome::fail(
            Criterion::Location,
            Issue::NotEligible,
            format!("Location ({}) is not eligible", profile.location),
        )
    }
}

fn entity_check(profile: &ProjectProfile, criteria: &EligibilityCriteria) -> CheckOutcome {
    if criteria.eligible_entities.contains(&profile.entity) {
        CheckOutcome::pass(Criterion::Entity, "Entity is eligible")
    } else {
        CheckOutcome::fail(
            Criterion::Entity,
            Issue::NotEligible,
            format!("Entity ({}) is not eligible", profile.entity),
        )
    }
}

fn budget_check(profile: &ProjectProfile, criteria: &EligibilityCriteria) -> CheckOutcome {
    let budget = profile.project_budget;
    match (criteria.min_budget, criteria.max_budget) {
        (Some(min), _) if budget < min => CheckOutcome::fail(
            Criterion::Budget,
            Issue::BelowMinimum,
            format!("Budget too low (min: {min} BAM)"),
        ),
        (_, Some(max)) if budget > max => CheckOutcome::fail(
            Criterion::Budget,
            Issue::AboveMaximum,
            format!("Budget too high (max: {max} BAM)"),
        ),
        _ => CheckOutcome::pass(Criterion::Budget, "Budget is within limits"),
    }
}

fn duration_check(profile: &ProjectProfile, criteria: &EligibilityCriteria) -> CheckOutcome {
    match criteria.max_duration {
        Some(max) if profile.project_duration > max => CheckOutcome::fail(
            Criterion::Duration,
            Issue::AboveMaximum,
            format!("Duration too long (max: {max} months)"),
        ),
        _ => CheckOutcome::pass(Criterion::Duration, "Duration is within limits"),
    }
}

fn cofinancing_check(profile: &ProjectProfile, criteria: &EligibilityCriteria) -> CheckOutcome {
    match criteria.required_cofinancing {
        Some(required) if profile.cofinancing_percentage < required => CheckOutcome::fail(
            Criterion::Cofinancing,
            Issue::BelowMinimum,
            format!("Insufficient co-financing (required: {required}%)"),
        ),
        _ => CheckOutcome::pass(Criterion::Cofinancing, "Co-financing is sufficient"),
    }
}

fn category_check(profile: &ProjectProfile, criteria: &EligibilityCriteria) -> CheckOutcome {
    if criteria
        .eligible_categories
        .contains(&profile.project_category)
    {
        CheckOutcome::pass(Criterion::Category, "Project category is eligible")
    } else {
        CheckOutcome::fail(
            Criterion::Category,
            Issue::NotEligible,
            format!("Category ({}) is not eligible", profile.project_category),
        )
    }
}

fn team_check(profile: &ProjectProfile, criteria: &EligibilityCriteria) -> CheckOutcome {
    match criteria.min_team_size {
        Some(min) if profile.team_size < min => CheckOutcome::fail(
            Criterion::TeamSize,
            Issue::BelowMinimum,
            format!("Team too small (min: {min} members)"),
        ),
        _ => CheckOutcome::pass(Criterion::TeamSize, "Team size is sufficient"),
    }
}

fn experience_check(profile: &ProjectProfile, criteria: &EligibilityCriteria) -> CheckOutcome {
    if criteria.requires_experience && !profile.has_experience {
        CheckOutcome::fail(
            Criterion::Experience,
            Issue::Missing,
            "Prior EU project experience is required",
        )
    } else {
        CheckOutcome::pass(Criterion::Experience, "Experience requirement is met")
    }
}

fn innovation_check(profile: &ProjectProfile, criteria: &EligibilityCriteria) -> CheckOutcome {
    match criteria.min_innovation_level {
        Some(min) if profile.innovation_level < min => CheckOutcome::fail(
            Criterion::Innovation,
            Issue::BelowMinimum,
            format!("Insufficient innovation level (min: {min})"),
        ),
        _ => CheckOutcome::pass(Criterion::Innovation, "Innovation level is sufficient"),
    }
}

fn sustainability_check(profile: &ProjectProfile, criteria: &EligibilityCriteria) -> CheckOutcome {
    if criteria.sustainability_required && profile.sustainability_score < REQUIRED_IMPACT_SCORE {
        CheckOutcome::fail(
            Criterion::Sustainability,
            Issue::BelowMinimum,
            "Higher sustainability score required",
        )
    } else {
        CheckOutcome::pass(Criterion::Sustainability, "Sustainability is sufficient")
    }
}

fn social_impact_check(profile: &ProjectProfile, criteria: &EligibilityCriteria) -> CheckOutcome {
    if criteria.social_impact_required && profile.social_impact_score < REQUIRED_IMPACT_SCORE {
        CheckOutcome::fail(
            Criterion::SocialImpact,
            Issue::BelowMinimum,
            "Higher social impact score required",
        )
    } else {
        CheckOutcome::pass(Criterion::SocialImpact, "Social impact is sufficient")
    }
}

fn deadline_check(criteria: &EligibilityCriteria, now: DateTime<Utc>) -> CheckOutcome {
    if now > criteria.deadline {
        CheckOutcome::fail(Criterion::Deadline, Issue::Expired, "Deadline has passed")
    } else {
        CheckOutcome::pass(Criterion::Deadline, "Deadline has not passed")
    }
}
