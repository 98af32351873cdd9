use super::Catalog;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogFinding {
    pub grant_id: String,
    pub message: String,
    pub blocking: bool,
}

/// Structural errors are blocking. Expired deadlines and eligible locations
/// that resolve to nothing known are warnings.
pub fn lint_catalog(catalog: &Catalog, now: DateTime<Utc>) -> Vec<CatalogFinding> {
    let mut findings = Vec::new();
    for criteria in catalog.iter() {
        if let Err(error) = criteria.validate() {
            findings.push(CatalogFinding {
                grant_id: criteria.grant_id.clone(),
                message: error.to_string(),
                blocking: true,
            });
        }

        if criteria.deadline < now {
            findings.push(CatalogFinding {
                grant_id: criteria.grant_id.clone(),
                message: format!(
                    "deadline {} has passed",
                    criteria.deadline.format("%d.%m.%Y")
                ),
                blocking: false,
            });
        }

        let locations = catalog.locations();
        for entry in &criteria.eligible_locations {
            if !locations.contains_group(entry)
                && !locations.knows_location(entry)
                && !entry.eq_ignore_ascii_case(super::locations::ALL_LOCATIONS)
            {
                findings.push(CatalogFinding {
                    grant_id: criteria.grant_id.clone(),
                    message: format!(
                        "eligible location '{entry}' is neither a location group nor a known location"
                    ),
                    blocking: false,
                });
            }
        }
    }
    findings
}
