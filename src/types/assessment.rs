use crate::types::criteria::EligibilityCriteria;
use crate::types::profile::ProjectProfile;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

pub type Score = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EligibilityLevel {
    High,
    Medium,
    Low,
    VeryLow,
}

impl EligibilityLevel {
    /// Breakpoints are closed on the lower bound: 80 is HIGH, 79.99 is MEDIUM.
    pub fn from_score(score: Score) -> Self {
        if score >= 80.0 {
            Self::High
        } else if score >= 60.0 {
            Self::Medium
        } else if score >= 40.0 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
            Self::VeryLow => "VERY_LOW",
        }
    }

    pub fn is_good_match(self) -> bool {
        matches!(self, Self::High | Self::Medium)
    }
}

impl fmt::Display for EligibilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    OrganizationType,
    Location,
    Entity,
    Budget,
    Duration,
    Cofinancing,
    Category,
    TeamSize,
    Experience,
    Innovation,
    Sustainability,
    SocialImpact,
    Deadline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    NotEligible,
    BelowMinimum,
    AboveMaximum,
    Missing,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub criterion: Criterion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<Issue>,
    pub message: String,
}

impl CheckOutcome {
    pub fn pass(criterion: Criterion, message: impl Into<String>) -> Self {
        Self {
            criterion,
            issue: None,
            message: message.into(),
        }
    }

    pub fn fail(criterion: Criterion, issue: Issue, message: impl Into<String>) -> Self {
        Self {
            criterion,
            issue: Some(issue),
            message: message.into(),
        }
    }

    pub fn passed(&self) -> bool {
        self.issue.is_none()
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Per-factor scores, each within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DetailedScores {
    pub organization_match: Score,
    pub location_match: Score,
    pub budget_fit: Score,
    pub category_match: Score,
    pub cofinancing_capability: Score,
    pub team_adequacy: Score,
    pub experience_level: Score,
    pub innovation_score: Score,
    pub sustainability_score: Score,
    pub social_impact_score: Score,
}

impl DetailedScores {
    pub fn as_array(&self) -> [Score; 10] {
        [
            self.organization_match,
            self.location_match,
            self.budget_fit,
            self.category_match,
            self.cofinancing_capability,
            self.team_adequacy,
            self.experience_level,
            self.innovation_score,
            self.sustainability_score,
            self.social_impact_score,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityAssessment<'a> {
    #[serde(skip)]
    pub profile: &'a ProjectProfile,
    pub criteria: &'a EligibilityCriteria,
    pub overall_score: Score,
    pub max_possible_score: Score,
    pub eligibility_level: EligibilityLevel,
    pub scores: DetailedScores,
    pub passed_criteria: Vec<CheckOutcome>,
    pub failed_criteria: Vec<CheckOutcome>,
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<String>,
    pub improvement_suggestions: Vec<String>,
    pub confidence_score: Score,
    pub assessed_at: DateTime<Utc>,
}

impl EligibilityAssessment<'_> {
    pub fn grant_id(&self) -> &str {
        &self.criteria.grant_id
    }

    pub fn grant_name(&self) -> &str {
        &self.criteria.grant_name
    }
}
