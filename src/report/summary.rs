use crate::engine::scoring::round2;
use crate::types::assessment::{EligibilityAssessment, EligibilityLevel, Score};
use crate::types::profile::{OrganizationType, ProjectCategory, ProjectProfile};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

pub const TOP_MATCHES: usize = 3;
pub const TOP_ISSUES: usize = 5;
pub const TOP_RECOMMENDATIONS: usize = 5;

pub const DEADLINE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectSummary {
    pub organization_type: OrganizationType,
    pub location: String,
    pub category: ProjectCategory,
    pub budget: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityStatistics {
    pub total_grants_checked: usize,
    pub high_eligibility_count: usize,
    pub medium_eligibility_count: usize,
    pub success_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchSummary {
    pub grant_id: String,
    pub grant_name: String,
    pub score: Score,
    pub level: EligibilityLevel,
    /// `dd.mm.yyyy`
    pub deadline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueCount {
    pub message: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityReport {
    pub project_summary: ProjectSummary,
    pub eligibility_statistics: EligibilityStatistics,
    pub best_matches: Vec<MatchSummary>,
    pub common_issues: Vec<IssueCount>,
    pub overall_recommendations: Vec<String>,
    pub generated_at: DateTime<Utc>,
    pub catalog_fingerprint: String,
}

/// Builds the report from assessments in the order `assess_all` returns them,
/// best first.
pub fn build(
    profile: &ProjectProfile,
    assessments: &[EligibilityAssessment<'_>],
    generated_at: DateTime<Utc>,
    catalog_fingerprint: impl Into<String>,
) -> EligibilityReport {
    let count_level = |level: EligibilityLevel| {
        assessments
            .iter()
            .filter(|assessment| assessment.eligibility_level == level)
            .count()
    };

    let failed_messages = assessments.iter().flat_map(|assessment| {
        assessment
            .failed_criteria
            .iter()
            .map(|outcome| outcome.message.as_str())
    });
    let recommendations = assessments
        .iter()
        .flat_map(|assessment| assessment.recommendations.iter().map(String::as_str));

    EligibilityReport {
        project_summary: ProjectSummary {
            organization_type: profile.organization_type,
            location: profile.location.clone(),
            category: profile.project_category,
            budget: profile.project_budget,
        },
        eligibility_statistics: statistics(
            assessments.len(),
            count_level(EligibilityLevel::High),
            count_level(EligibilityLevel::Medium),
        ),
        best_matches: assessments
            .iter()
            .take(TOP_MATCHES)
            .map(|assessment| MatchSummary {
                grant_id: assessment.grant_id().to_string(),
                grant_name: assessment.grant_name().to_string(),
                score: assessment.overall_score,
                level: assessment.eligibility_level,
                deadline: assessment
                    .criteria
                    .deadline
                    .format(DEADLINE_FORMAT)
                    .to_string(),
            })
            .collect(),
        common_issues: most_common(failed_messages, TOP_ISSUES),
        overall_recommendations: most_common(recommendations, TOP_RECOMMENDATIONS)
            .into_iter()
            .map(|entry| entry.message)
            .collect(),
        generated_at,
        catalog_fingerprint: catalog_fingerprint.into(),
    }
}

fn statistics(total: usize, high: usize, medium: usize) -> EligibilityStatistics {
    let success_rate = if total == 0 {
        0.0
    } else {
        round2((high + medium) as f64 / total as f64 * 100.0)
    };
    EligibilityStatistics {
        total_grants_checked: total,
        high_eligibility_count: high,
        medium_eligibility_count: medium,
        success_rate,
    }
}

fn most_common<'a>(items: impl Iterator<Item = &'a str>, limit: usize) -> Vec<IssueCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<IssueCount> = Vec::new();
    for item in items {
        match index.get(item) {
            Some(&position) => counts[position].count += 1,
            None => {
                index.insert(item, counts.len());
                counts.push(IssueCount {
                    message: item.to_string(),
                    count: 1,
                });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::engine::EligibilityEngine;
    use crate::types::profile::tests::sample_profile;
    use chrono::TimeZone;

    pub(crate) fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).unwrap()
    }

    pub(crate) fn builtin_engine() -> EligibilityEngine {
        EligibilityEngine::new(Catalog::builtin().expect("built-in catalog should parse"))
    }

    #[test]
    fn most_common_orders_by_count_then_first_seen() {
        let items = ["b", "a", "c", "a", "c", "d"];
        let counted = most_common(items.into_iter(), 3);
        assert_eq!(
            counted,
            vec![
                IssueCount {
                    message: "a".to_string(),
                    count: 2,
                },
                IssueCount {
                    message: "c".to_string(),
                    count: 2,
                },
                IssueCount {
                    message: "b".to_string(),
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn success_rate_is_zero_for_empty_batch() {
        let stats = statistics(0, 0, 0);
        assert_eq!(stats.success_rate, 0.0);

        let stats = statistics(3, 1, 1);
        assert!((stats.success_rate - 66.67).abs() < 1e-9);
    }

    #[test]
    fn report_for_builtin_catalog() {
        let engine = builtin_engine();
        let profile = sample_profile();
        let assessments = engine
            .assess_all_at(&profile, now())
            .expect("batch should succeed");

        let report = build(&profile, &assessments, now(), "abc123");

        assert_eq!(report.eligibility_statistics.total_grants_checked, 7);
        assert_eq!(report.eligibility_statistics.high_eligibility_count, 1);
        assert_eq!(report.best_matches.len(), TOP_MATCHES);
        assert_eq!(report.best_matches[0].grant_id, "ipa_sme_competitiveness");
        assert_eq!(report.best_matches[0].deadline, "30.06.2026");
        assert!(report.common_issues.len() <= TOP_ISSUES);
        assert!(report
            .common_issues
            .windows(2)
            .all(|pair| pair[0].count >= pair[1].count));
        assert!(report.overall_recommendations.len() <= TOP_RECOMMENDATIONS);
        assert_eq!(report.project_summary.location, "sarajevo");
        assert_eq!(report.catalog_fingerprint, "abc123");
        assert_eq!(report.generated_at, now());
    }

    #[test]
    fn report_for_empty_batch_has_no_matches() {
        let report = build(&sample_profile(), &[], now(), "");
        assert_eq!(report.eligibility_statistics.total_grants_checked, 0);
        assert_eq!(report.eligibility_statistics.success_rate, 0.0);
        assert!(report.best_matches.is_empty());
        assert!(report.common_issues.is_empty());
        assert!(report.overall_recommendations.is_empty());
    }
}
