use crate::error::GrantError;
use serde::Deserialize;
use std::collections::HashSet;

pub const DEFAULT_BEST_MATCHES_LIMIT: usize = 5;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    pub assessment: Option<AssessmentConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_include_builtin")]
    pub include_builtin: bool,
    /// Extra catalog files, relative to the config root.
    #[serde(default)]
    pub paths: Vec<String>,
    #[serde(default)]
    pub dirs: Vec<String>,
}

fn default_include_builtin() -> bool {
    true
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            include_builtin: true,
            paths: Vec::new(),
            dirs: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentConfig {
    pub best_matches_limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl AppConfig {
    pub fn best_matches_limit(&self) -> usize {
        self.assessment
            .as_ref()
            .and_then(|assessment| assessment.best_matches_limit)
            .unwrap_or(DEFAULT_BEST_MATCHES_LIMIT)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
    }

    pub fn validate(&self) -> Result<(), GrantError> {
        if !self.catalog.include_builtin
            && self.catalog.paths.is_empty()
            && self.catalog.dirs.is_empty()
        {
            return Err(GrantError::ConfigParse(
                "catalog has no sources: enable include_builtin or list paths/dirs".to_string(),
            ));
        }

        for (key, entries) in [("paths", &self.catalog.paths), ("dirs", &self.catalog.dirs)] {
            let mut seen = HashSet::<&str>::new();
            for entry in entries {
                let normalized = entry.trim();
                if normalized.is_empty() {
                    return Err(GrantError::ConfigParse(format!(
                        "catalog.{key} entries must be non-empty paths"
                    )));
                }
                if !seen.insert(normalized) {
                    return Err(GrantError::ConfigParse(format!(
                        "catalog.{key} contains duplicate entry: {normalized}"
                    )));
                }
            }
        }

        if self
            .assessment
            .as_ref()
            .and_then(|assessment| assessment.best_matches_limit)
            == Some(0)
        {
            return Err(GrantError::ConfigParse(
                "assessment.best_matches_limit must be greater than 0".to_string(),
            ));
        }

        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(GrantError::ConfigParse(format!(
                    "logging.level must be one of {} (found {level})",
                    LOG_LEVELS.join(", ")
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").expect("empty config should parse");
        assert!(cfg.catalog.include_builtin);
        assert!(cfg.catalog.paths.is_empty());
        assert_eq!(cfg.best_matches_limit(), DEFAULT_BEST_MATCHES_LIMIT);
        assert_eq!(cfg.log_level(), None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[catalog]
include_builtin = false
paths = ["grants/cantonal.toml"]
dirs = ["grants.d"]

[assessment]
best_matches_limit = 3

[logging]
level = "debug"
"#;
        let cfg: AppConfig = toml::from_str(toml_str).expect("full config should parse");
        assert!(!cfg.catalog.include_builtin);
        assert_eq!(cfg.catalog.paths, vec!["grants/cantonal.toml".to_string()]);
        assert_eq!(cfg.best_matches_limit(), 3);
        assert_eq!(cfg.log_level(), Some("debug"));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_config_without_catalog_sources() {
        let cfg: AppConfig = toml::from_str(
            r#"
[catalog]
include_builtin = false
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("catalog has no sources"));
    }

    #[test]
    fn validate_rejects_zero_best_matches_limit() {
        let cfg: AppConfig = toml::from_str(
            r#"
[assessment]
best_matches_limit = 0
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("best_matches_limit"));
    }

    #[test]
    fn validate_rejects_duplicate_and_blank_paths() {
        let cfg: AppConfig = toml::from_str(
            r#"
[catalog]
paths = ["a.toml", "a.toml"]
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("duplicate path should fail");
        assert!(err.to_string().contains("duplicate entry"));

        let cfg: AppConfig = toml::from_str(
            r#"
[catalog]
dirs = ["  "]
"#,
        )
        .expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_unknown_log_level() {
        let cfg: AppConfig = toml::from_str(
            r#"
[logging]
level = "loud"
"#,
        )
        .expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("logging.level"));
    }
}
