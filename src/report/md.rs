use crate::report::summary::{EligibilityReport, DEADLINE_FORMAT};
use crate::types::assessment::EligibilityAssessment;

pub fn assessment_to_markdown(assessment: &EligibilityAssessment<'_>) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "# {} ({})\n\n",
        assessment.grant_name(),
        assessment.grant_id()
    ));
    output.push_str(&format!(
        "Overall score: {:.2} / {:.2} ({})\n",
        assessment.overall_score, assessment.max_possible_score, assessment.eligibility_level
    ));
    output.push_str(&format!(
        "Confidence: {:.2}\n",
        assessment.confidence_score
    ));
    output.push_str(&format!(
        "Deadline: {}\n\n",
        assessment.criteria.deadline.format(DEADLINE_FORMAT)
    ));

    let scores = &assessment.scores;
    output.push_str("## Scores\n\n");
    output.push_str(&format!(
        "- organization_match: {:.2}\n- location_match: {:.2}\n- budget_fit: {:.2}\n- category_match: {:.2}\n- cofinancing_capability: {:.2}\n- team_adequacy: {:.2}\n- experience_level: {:.2}\n- innovation_score: {:.2}\n- sustainability_score: {:.2}\n- social_impact_score: {:.2}\n\n",
        scores.organization_match,
        scores.location_match,
        scores.budget_fit,
        scores.category_match,
        scores.cofinancing_capability,
        scores.team_adequacy,
        scores.experience_level,
        scores.innovation_score,
        scores.sustainability_score,
        scores.social_impact_score
    ));

    output.push_str("## Failed Criteria\n\n");
    push_list(
        &mut output,
        assessment.failed_criteria.iter().map(|outcome| outcome.message.as_str()),
    );
    output.push_str("## Passed Criteria\n\n");
    push_list(
        &mut output,
        assessment.passed_criteria.iter().map(|outcome| outcome.message.as_str()),
    );
    output.push_str("## Recommendations\n\n");
    push_list(&mut output, assessment.recommendations.iter().map(String::as_str));
    output.push_str("## Risk Factors\n\n");
    push_list(&mut output, assessment.risk_factors.iter().map(String::as_str));
    output.push_str("## Improvements\n\n");
    push_list(
        &mut output,
        assessment.improvement_suggestions.iter().map(String::as_str),
    );

    output
}

pub fn batch_to_markdown(assessments: &[EligibilityAssessment<'_>]) -> String {
    let mut output = String::new();
    output.push_str("# Eligibility Assessments\n\n");
    if assessments.is_empty() {
        output.push_str("- none\n");
        return output;
    }

    output.push_str("| Grant | Score | Level | Failed | Deadline |\n");
    output.push_str("|---|---|---|---|---|\n");
    for assessment in assessments {
        output.push_str(&format!(
            "| {} | {:.2} | {} | {} | {} |\n",
            assessment.grant_id(),
            assessment.overall_score,
            assessment.eligibility_level,
            assessment.failed_criteria.len(),
            assessment.criteria.deadline.format(DEADLINE_FORMAT)
        ));
    }
    output
}

pub fn report_to_markdown(report: &EligibilityReport) -> String {
    let mut output = String::new();
    output.push_str("# Eligibility Report\n\n");

    let project = &report.project_summary;
    output.push_str("## Project\n\n");
    output.push_str(&format!(
        "- organization_type: {}\n- location: {}\n- category: {}\n- budget: {:.2} BAM\n\n",
        project.organization_type, project.location, project.category, project.budget
    ));

    let stats = &report.eligibility_statistics;
    output.push_str("## Statistics\n\n");
    output.push_str(&format!(
        "- grants checked: {}\n- high eligibility: {}\n- medium eligibility: {}\n- success rate: {:.2}%\n\n",
        stats.total_grants_checked,
        stats.high_eligibility_count,
        stats.medium_eligibility_count,
        stats.success_rate
    ));

    output.push_str("## Best Matches\n\n");
    if report.best_matches.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for (rank, entry) in report.best_matches.iter().enumerate() {
            output.push_str(&format!(
                "{}. {} - {:.2} ({}), deadline {}\n",
                rank + 1,
                entry.grant_name,
                entry.score,
                entry.level,
                entry.deadline
            ));
        }
        output.push('\n');
    }

    output.push_str("## Common Issues\n\n");
    if report.common_issues.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for issue in &report.common_issues {
            output.push_str(&format!("- {} (x{})\n", issue.message, issue.count));
        }
        output.push('\n');
    }

    output.push_str("## Recommendations\n\n");
    push_list(
        &mut output,
        report.overall_recommendations.iter().map(String::as_str),
    );

    output.push_str(&format!(
        "Generated at {} from catalog {}\n",
        report.generated_at.to_rfc3339(),
        report.catalog_fingerprint
    ));
    output
}

fn push_list<'a>(output: &mut String, items: impl Iterator<Item = &'a str>) {
    let mut empty = true;
    for item in items {
        output.push_str(&format!("- {item}\n"));
        empty = false;
    }
    if empty {
        output.push_str("- none\n");
    }
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::summary::build;
    use crate::report::summary::tests::{builtin_engine, now};
    use crate::types::profile::tests::sample_profile;

    #[test]
    fn markdown_assessment_contains_sections() {
        let engine = builtin_engine();
        let profile = sample_profile();
        let assessment = engine
            .assess_at(&profile, "fbih_sme_subsidies", now())
            .expect("assessment should succeed");

        let rendered = assessment_to_markdown(&assessment);
        assert!(rendered.starts_with("# FBiH - SME subsidies (fbih_sme_subsidies)"));
        assert!(rendered.contains("Overall score: 70.00 / 70.00 (MEDIUM)"));
        assert!(rendered.contains("Deadline: 30.04.2026"));
        assert!(rendered.contains("- Duration too long (max: 12 months)"));
        assert!(rendered.contains("## Risk Factors"));
    }

    #[test]
    fn markdown_batch_lists_every_grant() {
        let engine = builtin_engine();
        let profile = sample_profile();
        let assessments = engine.assess_all_at(&profile, now()).expect("batch");

        let rendered = batch_to_markdown(&assessments);
        assert!(rendered.contains("| ipa_sme_competitiveness | 96.00 | HIGH |"));
        assert_eq!(rendered.matches("\n| ").count(), assessments.len() + 1);
        assert_eq!(batch_to_markdown(&[]), "# Eligibility Assessments\n\n- none\n");
    }

    #[test]
    fn markdown_report_contains_sections() {
        let engine = builtin_engine();
        let profile = sample_profile();
        let assessments = engine.assess_all_at(&profile, now()).expect("batch");
        let report = build(&profile, &assessments, now(), "cafe");

        let rendered = report_to_markdown(&report);
        assert!(rendered.contains("# Eligibility Report"));
        assert!(rendered.contains("- grants checked: 7"));
        assert!(rendered.contains(
            "1. IPA - SME competitiveness - 96.00 (HIGH), deadline 30.06.2026"
        ));
        assert!(rendered.contains("## Common Issues"));
        assert!(rendered.contains("from catalog cafe"));
    }
}
