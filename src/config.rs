//! Persisted user settings (~/.config/arherb/config.json)
//!
//! Stores defaults for the values the label form used to ask for every
//! time. Command-line flags always win.

use crate::error::{ArherbError, Result};
use crate::qr::DEFAULT_QR_DIR;
use arherb_common::{FieldMapping, HerbariumConfig, SpecimenType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub herbarium_name: Option<String>,
    pub specimen_type: SpecimenType,
    pub include_qr: bool,
    pub qr_dir: Option<PathBuf>,
    pub columns: FieldMapping,
}

/// Per-run values given on the command line
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub herbarium_name: Option<String>,
    pub specimen_type: Option<SpecimenType>,
    pub include_qr: Option<bool>,
    pub columns: FieldMapping,
    pub qr_dir: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ArherbError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("arherb").join("config.json"))
    }

    /// Builds the run configuration, flags first, stored defaults second.
    pub fn herbarium_config(&self, overrides: &RunOverrides) -> Result<HerbariumConfig> {
        let name = overrides
            .herbarium_name
            .as_deref()
            .or(self.herbarium_name.as_deref())
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .ok_or(ArherbError::MissingHerbariumName)?;

        let mapping = self.columns.clone().merged(&overrides.columns);

        Ok(HerbariumConfig::new(
            name,
            overrides.specimen_type.unwrap_or(self.specimen_type),
            overrides.include_qr.unwrap_or(self.include_qr),
            mapping,
        )?)
    }

    pub fn qr_dir(&self, overrides: &RunOverrides) -> PathBuf {
        overrides
            .qr_dir
            .clone()
            .or_else(|| self.qr_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_QR_DIR))
    }
}
