use serde::Serialize;

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::summary::tests::{builtin_engine, now};
    use crate::report::summary::build;
    use crate::types::profile::tests::sample_profile;

    #[test]
    fn json_assessment_contains_score_and_level() {
        let engine = builtin_engine();
        let profile = sample_profile();
        let assessment = engine
            .assess_at(&profile, "ipa_sme_competitiveness", now())
            .expect("assessment should succeed");

        let rendered = to_json(&assessment).expect("json should serialize");
        assert!(rendered.contains("\"overall_score\": 96.0"));
        assert!(rendered.contains("\"eligibility_level\": \"HIGH\""));
        assert!(rendered.contains("\"grant_id\": \"ipa_sme_competitiveness\""));
        assert!(!rendered.contains("\"profile\""));
    }

    #[test]
    fn json_report_round_trips_as_value() {
        let engine = builtin_engine();
        let profile = sample_profile();
        let assessments = engine.assess_all_at(&profile, now()).expect("batch");
        let report = build(&profile, &assessments, now(), "f00d");

        let rendered = to_json(&report).expect("json should serialize");
        let value: serde_json::Value =
            serde_json::from_str(&rendered).expect("rendered json should parse");
        assert_eq!(value["eligibility_statistics"]["total_grants_checked"], 7);
        assert_eq!(value["best_matches"][0]["deadline"], "30.06.2026");
        assert_eq!(value["catalog_fingerprint"], "f00d");
    }
}
