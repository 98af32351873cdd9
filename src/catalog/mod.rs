pub mod lint;
pub mod locations;

use crate::error::{GrantError, Result};
use crate::types::config::AppConfig;
use crate::types::criteria::EligibilityCriteria;
use locations::LocationGroups;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const BUILTIN_CATALOG: &str = include_str!("builtin.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    location_groups: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    grants: Vec<EligibilityCriteria>,
}

/// Append-only table of grant criteria keyed by grant id, plus the location
/// groups those criteria refer to. Enumeration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<EligibilityCriteria>,
    index: HashMap<String, usize>,
    locations: LocationGroups,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builtin() -> Result<Self> {
        let mut catalog = Self::empty();
        catalog.merge_str(BUILTIN_CATALOG, "built-in catalog")?;
        Ok(catalog)
    }

    pub fn from_config(root: &Path, config: Option<&AppConfig>) -> Result<Self> {
        let Some(config) = config else {
            return Self::builtin();
        };

        let mut catalog = if config.catalog.include_builtin {
            Self::builtin()?
        } else {
            Self::empty()
        };
        for path in &config.catalog.paths {
            catalog.load_file(&root.join(path))?;
        }
        for dir in &config.catalog.dirs {
            catalog.load_dir(&root.join(dir))?;
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, criteria: EligibilityCriteria) -> Result<()> {
        if self.index.contains_key(&criteria.grant_id) {
            return Err(GrantError::DuplicateGrant(criteria.grant_id));
        }
        self.index
            .insert(criteria.grant_id.clone(), self.entries.len());
        self.entries.push(criteria);
        Ok(())
    }

    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)?;
        let before = self.entries.len();
        self.merge_str(&content, &path.display().to_string())?;
        tracing::info!(
            path = %path.display(),
            grants = self.entries.len() - before,
            "loaded catalog file"
        );
        Ok(())
    }

    /// Loads every `*.toml` file below `dir`, in file-name order.
    pub fn load_dir(&mut self, dir: &Path) -> Result<()> {
        if !dir.is_dir() {
            return Err(GrantError::ConfigParse(format!(
                "catalog directory not found: {}",
                dir.display()
            )));
        }
        for path in list_catalog_files(dir) {
            self.load_file(&path)?;
        }
        Ok(())
    }

    fn merge_str(&mut self, content: &str, source: &str) -> Result<()> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| GrantError::ConfigParse(format!("{source}: {e}")))?;
        for (name, members) in file.location_groups {
            self.locations.insert(&name, members);
        }
        for criteria in file.grants {
            self.insert(criteria)?;
        }
        Ok(())
    }

    pub fn get(&self, grant_id: &str) -> Result<&EligibilityCriteria> {
        self.index
            .get(grant_id)
            .map(|&position| &self.entries[position])
            .ok_or_else(|| GrantError::GrantNotFound(grant_id.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &EligibilityCriteria> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn locations(&self) -> &LocationGroups {
        &self.locations
    }

    pub fn fingerprint(&self) -> Result<String> {
        let canonical = serde_json::to_vec(&(&self.entries, &self.locations))?;
        let digest = Sha256::digest(&canonical);
        Ok(format!("{digest:x}"))
    }
}

fn list_catalog_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("toml"))
        .collect()
}
