//! Recommendation, risk and improvement rules.
//!
//! Each generator walks an ordered rule table. Failure rules are keyed on the
//! `(Criterion, Issue)` of a failed hard check, never on its message text.

use crate::types::assessment::{CheckOutcome, Criterion, DetailedScores, Issue, Score};
use crate::types::criteria::EligibilityCriteria;
use crate::types::profile::ProjectProfile;
use chrono::{DateTime, Utc};

struct FailureRule {
    criterion: Criterion,
    /// `None` matches any issue on the criterion.
    issue: Option<Issue>,
    message: &'static str,
}

impl FailureRule {
    fn matches(&self, outcome: &CheckOutcome) -> bool {
        outcome.criterion == self.criterion
            && self
                .issue
                .map_or(true, |issue| outcome.issue == Some(issue))
    }
}

const RECOMMENDATION_RULES: &[FailureRule] = &[
    FailureRule {
        criterion: Criterion::Budget,
        issue: Some(Issue::BelowMinimum),
        message: "Increase the planned project budget or look for additional funding sources",
    },
    FailureRule {
        criterion: Criterion::Budget,
        issue: Some(Issue::AboveMaximum),
        message: "Reduce the project scope or split it into phases",
    },
    FailureRule {
        criterion: Criterion::Cofinancing,
        issue: None,
        message: "Secure additional co-financing sources (own funds, partners, other grants)",
    },
    FailureRule {
        criterion: Criterion::TeamSize,
        issue: None,
        message: "Expand the project team or bring in additional partners",
    },
    FailureRule {
        criterion: Criterion::Experience,
        issue: None,
        message: "Bring in a partner with EU project experience or engage a consultant",
    },
    FailureRule {
        criterion: Criterion::Innovation,
        issue: None,
        message: "Strengthen the innovative aspect of the project or add new technologies",
    },
];

const IMPROVEMENT_RULES: &[FailureRule] = &[
    FailureRule {
        criterion: Criterion::Location,
        issue: None,
        message: "Consider partnering with an organization from an eligible location",
    },
    FailureRule {
        criterion: Criterion::OrganizationType,
        issue: None,
        message: "Change the organization's legal status or form a consortium",
    },
    FailureRule {
        criterion: Criterion::Category,
        issue: None,
        message: "Adapt the project focus to an eligible category",
    },
];

#[derive(Clone, Copy)]
enum ScoreFactor {
    Innovation,
    Sustainability,
    SocialImpact,
}

impl ScoreFactor {
    fn of(self, scores: &DetailedScores) -> Score {
        match self {
            Self::Innovation => scores.innovation_score,
            Self::Sustainability => scores.sustainability_score,
            Self::SocialImpact => scores.social_impact_score,
        }
    }
}

const WEAK_SCORE_THRESHOLD: Score = 60.0;

const WEAK_SCORE_RULES: &[(ScoreFactor, &str)] = &[
    (
        ScoreFactor::Innovation,
        "Highlight the innovative elements of your project",
    ),
    (
        ScoreFactor::Sustainability,
        "Develop a plan for sustaining the project after funding ends",
    ),
    (
        ScoreFactor::SocialImpact,
        "Define the social impact and benefits of the project more clearly",
    ),
];

pub const ALL_CRITERIA_MET: &str =
    "Your project meets the basic criteria - focus on the quality of the application";

fn advice_for_failures(failed: &[CheckOutcome], rules: &[FailureRule]) -> Vec<String> {
    failed
        .iter()
        .filter_map(|outcome| rules.iter().find(|rule| rule.matches(outcome)))
        .map(|rule| rule.message.to_string())
        .collect()
}

pub fn recommendations(failed: &[CheckOutcome], scores: &DetailedScores) -> Vec<String> {
    let mut recommendations = advice_for_failures(failed, RECOMMENDATION_RULES);

    recommendations.extend(
        WEAK_SCORE_RULES
            .iter()
            .filter(|(factor, _)| factor.of(scores) < WEAK_SCORE_THRESHOLD)
            .map(|(_, message)| message.to_string()),
    );

    if failed.is_empty() {
        recommendations.push(ALL_CRITERIA_MET.to_string());
    }
    recommendations
}

const DEADLINE_WARNING_DAYS: i64 = 30;
const SECONDS_PER_DAY: i64 = 86_400;
const BUDGET_WARNING_SHARE: f64 = 0.9;
const COFINANCING_MARGIN: f64 = 1.2;

pub fn risk_factors(
    profile: &ProjectProfile,
    criteria: &EligibilityCriteria,
    now: DateTime<Utc>,
) -> Vec<String> {
    let mut risks = Vec::new();

    // Floor, so a deadline a few hours past reads as -1 days.
    let days_to_deadline = (criteria.deadline - now).num_seconds().div_euclid(SECONDS_PER_DAY);
    if days_to_deadline < DEADLINE_WARNING_DAYS {
        risks.push(format!(
            "Short application window ({days_to_deadline} days remaining)"
        ));
    }

    if criteria
        .max_budget
        .is_some_and(|max| profile.project_budget > max * BUDGET_WARNING_SHARE)
    {
        risks.push("Budget close to the upper limit - risk of rejection".to_string());
    }

    if criteria
        .required_cofinancing
        .is_some_and(|required| profile.cofinancing_percentage < required * COFINANCING_MARGIN)
    {
        risks.push("Co-financing close to the minimum - exposed to cost overruns".to_string());
    }

    if criteria.requires_experience && !profile.has_experience {
        risks.push("Lack of experience may weaken the application".to_string());
    }

    if profile.project_category.is_highly_competitive() {
        risks.push("High competition in this category".to_string());
    }

    risks
}

pub fn improvement_suggestions(profile: &ProjectProfile, failed: &[CheckOutcome]) -> Vec<String> {
    let mut improvements = advice_for_failures(failed, IMPROVEMENT_RULES);

    if profile.innovation_level < 4 {
        improvements.push("Add innovative technologies or approaches".to_string());
    }
    if profile.sustainability_score < 4 {
        improvements.push("Develop a more detailed sustainability plan".to_string());
    }
    if profile.social_impact_score < 3 {
        improvements.push("Define the social benefits more clearly".to_string());
    }
    if profile.partnerships.is_empty() {
        improvements.push("Establish partnerships with relevant organizations".to_string());
    }

    improvements
}
