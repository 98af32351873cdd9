pub mod json;
pub mod md;
pub mod summary;

use crate::error::{GrantError, Result};
use crate::types::assessment::EligibilityAssessment;
use summary::EligibilityReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render_assessment(
    assessment: &EligibilityAssessment<'_>,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(assessment).map_err(GrantError::Json),
        OutputFormat::Md => Ok(md::assessment_to_markdown(assessment)),
    }
}

pub fn render_batch(
    assessments: &[EligibilityAssessment<'_>],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(assessments).map_err(GrantError::Json),
        OutputFormat::Md => Ok(md::batch_to_markdown(assessments)),
    }
}

pub fn render_report(report: &EligibilityReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(GrantError::Json),
        OutputFormat::Md => Ok(md::report_to_markdown(report)),
    }
}
