//! Run-level settings for one label generation

use crate::error::{Error, Result};
use crate::fields::FieldMapping;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of specimens in the batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecimenType {
    #[default]
    Fungi,
    /// Labels also carry the Russian family/species names
    VascularPlant,
    Bryophyta,
}

impl SpecimenType {
    pub const ALL: [SpecimenType; 3] = [
        SpecimenType::Fungi,
        SpecimenType::VascularPlant,
        SpecimenType::Bryophyta,
    ];

    pub fn shows_russian_names(self) -> bool {
        self == SpecimenType::VascularPlant
    }
}

impl FromStr for SpecimenType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fungi" | "fungus" => Ok(SpecimenType::Fungi),
            "vascular plant" | "vascular-plant" | "vascular_plant" | "vascular" => {
                Ok(SpecimenType::VascularPlant)
            }
            "bryophyta" | "bryophyte" | "moss" => Ok(SpecimenType::Bryophyta),
            _ => Err(format!(
                "Unknown specimen type: {}. Use fungi, vascular-plant, or bryophyta",
                s
            )),
        }
    }
}

impl fmt::Display for SpecimenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecimenType::Fungi => write!(f, "Fungi"),
            SpecimenType::VascularPlant => write!(f, "Vascular plant"),
            SpecimenType::Bryophyta => write!(f, "Bryophyta"),
        }
    }
}

/// Immutable configuration of one run. Built only through [`HerbariumConfig::new`],
/// which rejects an empty herbarium name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HerbariumConfig {
    herbarium_name: String,
    specimen_type: SpecimenType,
    include_qr: bool,
    mapping: FieldMapping,
}

impl HerbariumConfig {
    pub fn new(
        herbarium_name: &str,
        specimen_type: SpecimenType,
        include_qr: bool,
        mapping: FieldMapping,
    ) -> Result<Self> {
        let herbarium_name = herbarium_name.trim();
        if herbarium_name.is_empty() {
            return Err(Error::Config("herbarium name must not be empty".into()));
        }

        Ok(Self {
            herbarium_name: herbarium_name.to_string(),
            specimen_type,
            include_qr,
            mapping,
        })
    }

    pub fn herbarium_name(&self) -> &str {
        &self.herbarium_name
    }

    pub fn specimen_type(&self) -> SpecimenType {
        self.specimen_type
    }

    pub fn include_qr(&self) -> bool {
        self.include_qr
    }

    pub fn mapping(&self) -> &FieldMapping {
        &self.mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specimen_type_from_str() {
        assert_eq!("Fungi".parse::<SpecimenType>().unwrap(), SpecimenType::Fungi);
        assert_eq!("Vascular plant".parse::<SpecimenType>().unwrap(), SpecimenType::VascularPlant);
        assert_eq!("vascular-plant".parse::<SpecimenType>().unwrap(), SpecimenType::VascularPlant);
        assert_eq!("BRYOPHYTA".parse::<SpecimenType>().unwrap(), SpecimenType::Bryophyta);
        assert!("lichen".parse::<SpecimenType>().is_err());
    }

    #[test]
    fn test_specimen_type_display_parses_back() {
        for t in SpecimenType::ALL {
            assert_eq!(t.to_string().parse::<SpecimenType>().unwrap(), t);
        }
    }

    #[test]
    fn test_config_trims_name() {
        let config = HerbariumConfig::new("  MW  ", SpecimenType::Fungi, false, FieldMapping::new()).unwrap();
        assert_eq!(config.herbarium_name(), "MW");
        assert!(!config.include_qr());
    }

    #[test]
    fn test_config_rejects_empty_name() {
        let result = HerbariumConfig::new("   ", SpecimenType::Bryophyta, true, FieldMapping::new());
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
