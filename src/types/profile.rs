use crate::error::{GrantError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationType {
    Sme,
    Ngo,
    PublicInstitution,
    EducationalInstitution,
    Startup,
    SoleProprietor,
    Farmer,
    Municipality,
    Other,
}

impl OrganizationType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sme => "sme",
            Self::Ngo => "ngo",
            Self::PublicInstitution => "public_institution",
            Self::EducationalInstitution => "educational_institution",
            Self::Startup => "startup",
            Self::SoleProprietor => "sole_proprietor",
            Self::Farmer => "farmer",
            Self::Municipality => "municipality",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for OrganizationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    Innovation,
    Digitalization,
    GreenEconomy,
    Tourism,
    Agriculture,
    Education,
    Health,
    Infrastructure,
    Culture,
    Sport,
    SocialInclusion,
    Energy,
    Transport,
    Environment,
    RuralDevelopment,
}

impl ProjectCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Innovation => "innovation",
            Self::Digitalization => "digitalization",
            Self::GreenEconomy => "green_economy",
            Self::Tourism => "tourism",
            Self::Agriculture => "agriculture",
            Self::Education => "education",
            Self::Health => "health",
            Self::Infrastructure => "infrastructure",
            Self::Culture => "culture",
            Self::Sport => "sport",
            Self::SocialInclusion => "social_inclusion",
            Self::Energy => "energy",
            Self::Transport => "transport",
            Self::Environment => "environment",
            Self::RuralDevelopment => "rural_development",
        }
    }

    /// Categories that attract far more applicants than funding available.
    pub fn is_highly_competitive(self) -> bool {
        matches!(self, Self::Innovation | Self::Digitalization)
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Entity {
    #[serde(rename = "FBiH", alias = "fbih")]
    FBiH,
    #[serde(rename = "RS", alias = "rs")]
    RS,
    #[serde(rename = "BD", alias = "bd")]
    BD,
}

impl Entity {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FBiH => "FBiH",
            Self::RS => "RS",
            Self::BD => "BD",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectProfile {
    pub organization_type: OrganizationType,
    /// Number of employees.
    pub organization_size: u32,
    pub annual_revenue: Option<f64>,
    pub location: String,
    pub entity: Entity,
    pub project_category: ProjectCategory,
    /// Planned budget in BAM.
    pub project_budget: f64,
    /// Duration in months.
    pub project_duration: u32,
    #[serde(default)]
    pub has_cofinancing: bool,
    #[serde(default)]
    pub cofinancing_percentage: f64,
    pub team_size: u32,
    #[serde(default)]
    pub has_experience: bool,
    pub innovation_level: u8,
    pub sustainability_score: u8,
    pub social_impact_score: u8,
    #[serde(default)]
    pub target_groups: Vec<String>,
    #[serde(default)]
    pub partnerships: Vec<String>,
    #[serde(default = "Utc::now", deserialize_with = "super::timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

impl ProjectProfile {
    pub fn validate(&self) -> Result<()> {
        if !self.project_budget.is_finite() || self.project_budget <= 0.0 {
            return Err(GrantError::MalformedProfile(format!(
                "project_budget must be a positive amount (found {})",
                self.project_budget
            )));
        }
        if self.project_duration == 0 {
            return Err(GrantError::MalformedProfile(
                "project_duration must be at least one month".to_string(),
            ));
        }
        if self.team_size == 0 {
            return Err(GrantError::MalformedProfile(
                "team_size must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.cofinancing_percentage) {
            return Err(GrantError::MalformedProfile(format!(
                "cofinancing_percentage must be between 0 and 100 (found {})",
                self.cofinancing_percentage
            )));
        }
        if let Some(revenue) = self.annual_revenue {
            if !revenue.is_finite() || revenue < 0.0 {
                return Err(GrantError::MalformedProfile(format!(
                    "annual_revenue must be non-negative (found {revenue})"
                )));
            }
        }
        for (field, value) in [
            ("innovation_level", self.innovation_level),
            ("sustainability_score", self.sustainability_score),
            ("social_impact_score", self.social_impact_score),
        ] {
            if !(1..=5).contains(&value) {
                return Err(GrantError::MalformedProfile(format!(
                    "{field} must be between 1 and 5 (found {value})"
                )));
            }
        }
        if self.location.trim().is_empty() {
            return Err(GrantError::MalformedProfile(
                "location must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

pub fn load_profile(path: &Path) -> Result<ProjectProfile> {
    let content = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|value| value.to_str())
        .map(str::to_ascii_lowercase);

    let profile: ProjectProfile = match extension.as_deref() {
        Some("toml") => toml::from_str(&content)
            .map_err(|e| GrantError::MalformedProfile(format!("{}: {}", path.display(), e)))?,
        Some("json") => serde_json::from_str(&content)
            .map_err(|e| GrantError::MalformedProfile(format!("{}: {}", path.display(), e)))?,
        _ => {
            return Err(GrantError::InvalidInput(format!(
                "profile must be a .toml or .json file: {}",
                path.display()
            )))
        }
    };

    profile.validate()?;
    Ok(profile)
}
