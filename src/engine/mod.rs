pub mod advice;
pub mod checks;
pub mod confidence;
pub mod scoring;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::types::assessment::{EligibilityAssessment, EligibilityLevel};
use crate::types::criteria::EligibilityCriteria;
use crate::types::profile::ProjectProfile;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct EligibilityEngine {
    catalog: Catalog,
}

impl EligibilityEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn assess<'a>(
        &'a self,
        profile: &'a ProjectProfile,
        grant_id: &str,
    ) -> Result<EligibilityAssessment<'a>> {
        self.assess_at(profile, grant_id, Utc::now())
    }

    pub fn assess_at<'a>(
        &'a self,
        profile: &'a ProjectProfile,
        grant_id: &str,
        now: DateTime<Utc>,
    ) -> Result<EligibilityAssessment<'a>> {
        profile.validate()?;
        let criteria = self.catalog.get(grant_id)?;
        self.evaluate(profile, criteria, now)
    }

    pub fn assess_all<'a>(
        &'a self,
        profile: &'a ProjectProfile,
    ) -> Result<Vec<EligibilityAssessment<'a>>> {
        self.assess_all_at(profile, Utc::now())
    }

    /// Assesses every catalog entry, best score first. Entries that cannot be
    /// assessed are logged and left out. Ties keep catalog order.
    pub fn assess_all_at<'a>(
        &'a self,
        profile: &'a ProjectProfile,
        now: DateTime<Utc>,
    ) -> Result<Vec<EligibilityAssessment<'a>>> {
        profile.validate()?;

        let mut assessments = Vec::with_capacity(self.catalog.len());
        for criteria in self.catalog.iter() {
            match self.evaluate(profile, criteria, now) {
                Ok(assessment) => assessments.push(assessment),
                Err(error) => {
                    tracing::warn!(grant_id = %criteria.grant_id, %error, "skipping grant");
                }
            }
        }

        assessments.sort_by(|a, b| b.overall_score.total_cmp(&a.overall_score));
        Ok(assessments)
    }

    pub fn best_matches<'a>(
        &'a self,
        profile: &'a ProjectProfile,
        limit: usize,
    ) -> Result<Vec<EligibilityAssessment<'a>>> {
        self.best_matches_at(profile, limit, Utc::now())
    }

    pub fn best_matches_at<'a>(
        &'a self,
        profile: &'a ProjectProfile,
        limit: usize,
        now: DateTime<Utc>,
    ) -> Result<Vec<EligibilityAssessment<'a>>> {
        Ok(self
            .assess_all_at(profile, now)?
            .into_iter()
            .filter(|assessment| assessment.eligibility_level.is_good_match())
            .take(limit)
            .collect())
    }

    fn evaluate<'a>(
        &'a self,
        profile: &'a ProjectProfile,
        criteria: &'a EligibilityCriteria,
        now: DateTime<Utc>,
    ) -> Result<EligibilityAssessment<'a>> {
        criteria.validate()?;
        let locations = self.catalog.locations();

        // Both passes always run in full; the combiner needs each independently.
        let hard = checks::run_hard_checks(profile, criteria, locations, now);
        let scores = scoring::detailed_scores(profile, criteria, locations);

        let (overall_score, max_possible_score) = scoring::combine(&scores, hard.failed_count());
        let eligibility_level = EligibilityLevel::from_score(overall_score);

        let recommendations = advice::recommendations(&hard.failed, &scores);
        let risk_factors = advice::risk_factors(profile, criteria, now);
        let improvement_suggestions = advice::improvement_suggestions(profile, &hard.failed);
        let confidence_score = confidence::confidence_score(profile, now);

        tracing::debug!(
            grant_id = %criteria.grant_id,
            overall_score,
            failed = hard.failed_count(),
            level = %eligibility_level,
            "assessed grant"
        );

        Ok(EligibilityAssessment {
            profile,
            criteria,
            overall_score,
            max_possible_score,
            eligibility_level,
            scores,
            passed_criteria: hard.passed,
            failed_criteria: hard.failed,
            recommendations,
            risk_factors,
            improvement_suggestions,
            confidence_score,
            assessed_at: now,
        })
    }
}
