use crate::error::{GrantError, Result};
use crate::types::profile::{Entity, OrganizationType, ProjectCategory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Applicant age bounds. Stored with the grant but not evaluated by any check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRestriction {
    pub min: u8,
    pub max: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibilityCriteria {
    pub grant_id: String,
    pub grant_name: String,
    pub eligible_organizations: Vec<OrganizationType>,
    /// Location group names or bare location names.
    pub eligible_locations: Vec<String>,
    pub eligible_entities: Vec<Entity>,
    #[serde(default)]
    pub min_budget: Option<f64>,
    #[serde(default)]
    pub max_budget: Option<f64>,
    #[serde(default)]
    pub max_duration: Option<u32>,
    #[serde(default)]
    pub required_cofinancing: Option<f64>,
    pub eligible_categories: Vec<ProjectCategory>,
    #[serde(default)]
    pub min_team_size: Option<u32>,
    #[serde(default)]
    pub requires_experience: bool,
    #[serde(default)]
    pub min_innovation_level: Option<u8>,
    #[serde(default)]
    pub sustainability_required: bool,
    #[serde(default)]
    pub social_impact_required: bool,
    #[serde(default)]
    pub required_partnerships: Vec<String>,
    #[serde(default)]
    pub age_restriction: Option<AgeRestriction>,
    #[serde(deserialize_with = "super::timestamp::deserialize")]
    pub deadline: DateTime<Utc>,
}

impl EligibilityCriteria {
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| GrantError::InvalidCriteria {
            grant_id: self.grant_id.clone(),
            reason,
        };

        if self.grant_id.trim().is_empty() {
            return Err(invalid("grant_id must not be empty".to_string()));
        }
        for (field, empty) in [
            ("eligible_organizations", self.eligible_organizations.is_empty()),
            ("eligible_locations", self.eligible_locations.is_empty()),
            ("eligible_entities", self.eligible_entities.is_empty()),
            ("eligible_categories", self.eligible_categories.is_empty()),
        ] {
            if empty {
                return Err(invalid(format!("{field} must list at least one value")));
            }
        }
        if self
            .eligible_locations
            .iter()
            .any(|location| location.trim().is_empty())
        {
            return Err(invalid(
                "eligible_locations entries must be non-empty".to_string(),
            ));
        }

        for (field, bound) in [("min_budget", self.min_budget), ("max_budget", self.max_budget)] {
            if let Some(value) = bound {
                if !value.is_finite() || value <= 0.0 {
                    return Err(invalid(format!(
                        "{field} must be a positive amount (found {value})"
                    )));
                }
            }
        }
        if let (Some(min), Some(max)) = (self.min_budget, self.max_budget) {
            if min > max {
                return Err(invalid(format!(
                    "min_budget ({min}) exceeds max_budget ({max})"
                )));
            }
        }
        if self.max_duration == Some(0) {
            return Err(invalid("max_duration must be greater than 0".to_string()));
        }
        if let Some(required) = self.required_cofinancing {
            if !(required > 0.0 && required <= 100.0) {
                return Err(invalid(format!(
                    "required_cofinancing must be within (0, 100] (found {required})"
                )));
            }
        }
        if self.min_team_size == Some(0) {
            return Err(invalid("min_team_size must be greater than 0".to_string()));
        }
        if let Some(level) = self.min_innovation_level {
            if !(1..=5).contains(&level) {
                return Err(invalid(format!(
                    "min_innovation_level must be between 1 and 5 (found {level})"
                )));
            }
        }
        if let Some(age) = self.age_restriction {
            if age.min > age.max {
                return Err(invalid(format!(
                    "age_restriction min ({}) exceeds max ({})",
                    age.min, age.max
                )));
            }
        }

        Ok(())
    }
}
