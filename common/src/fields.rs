//! Field resolution
//!
//! Maps the 13 logical specimen fields onto the columns of the input table.
//! Column names default to the conventional spreadsheet headers and can be
//! overridden per field.

use crate::date::normalize_date;
use crate::error::{Error, Result};
use crate::types::{CellValue, Row, SpecimenRecord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

/// Logical specimen field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogicalField {
    Family,
    FamilyRus,
    Species,
    SpeciesRus,
    Region,
    Point,
    Habitats,
    Date,
    Leg,
    Det,
    Num,
    Latitude,
    Longitude,
}

impl LogicalField {
    /// All fields, in the order they are presented to users
    pub const ALL: [LogicalField; 13] = [
        LogicalField::Family,
        LogicalField::FamilyRus,
        LogicalField::Species,
        LogicalField::SpeciesRus,
        LogicalField::Region,
        LogicalField::Point,
        LogicalField::Habitats,
        LogicalField::Date,
        LogicalField::Leg,
        LogicalField::Det,
        LogicalField::Num,
        LogicalField::Latitude,
        LogicalField::Longitude,
    ];

    /// Logical name, used in mapping files and `--map` flags
    pub fn key(self) -> &'static str {
        match self {
            LogicalField::Family => "family",
            LogicalField::FamilyRus => "familyrus",
            LogicalField::Species => "species",
            LogicalField::SpeciesRus => "speciesrus",
            LogicalField::Region => "region",
            LogicalField::Point => "point",
            LogicalField::Habitats => "habitats",
            LogicalField::Date => "date",
            LogicalField::Leg => "leg",
            LogicalField::Det => "det",
            LogicalField::Num => "num",
            LogicalField::Latitude => "latitude",
            LogicalField::Longitude => "longitude",
        }
    }

    /// Column header expected when no override is given
    pub fn default_column(self) -> &'static str {
        match self {
            LogicalField::Leg => "leg.",
            LogicalField::Det => "det.",
            LogicalField::Latitude => "N",
            LogicalField::Longitude => "E",
            other => other.key(),
        }
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for LogicalField {
    type Err = Error;

    /// Accepts the logical name or the default column header.
    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim();
        LogicalField::ALL
            .iter()
            .copied()
            .find(|f| f.key().eq_ignore_ascii_case(needle) || f.default_column() == needle)
            .ok_or_else(|| Error::Config(format!("unknown field: {}", needle)))
    }
}

/// Logical field → source column. Unmapped fields use their default column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMapping {
    overrides: BTreeMap<LogicalField, String>,
}

impl FieldMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the column for `field`. A blank column restores the default.
    pub fn set(&mut self, field: LogicalField, column: impl Into<String>) {
        let column = column.into().trim().to_string();
        if column.is_empty() {
            self.overrides.remove(&field);
        } else {
            self.overrides.insert(field, column);
        }
    }

    /// `self` with every override in `other` applied on top
    pub fn merged(mut self, other: &FieldMapping) -> Self {
        for (field, column) in &other.overrides {
            self.overrides.insert(*field, column.clone());
        }
        self
    }

    pub fn column(&self, field: LogicalField) -> &str {
        self.overrides
            .get(&field)
            .map(String::as_str)
            .unwrap_or_else(|| field.default_column())
    }

    pub fn is_default(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Parses one `FIELD=COLUMN` assignment.
    pub fn parse_assignment(spec: &str) -> Result<(LogicalField, String)> {
        let (field, column) = spec
            .split_once('=')
            .ok_or_else(|| Error::Config(format!("expected FIELD=COLUMN, got: {}", spec)))?;
        Ok((field.parse()?, column.trim().to_string()))
    }

    /// JSON object `{ "field": "column", ... }`
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        Self::from_pairs(raw)
    }

    /// JSON mapping file
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut mapping = Self::new();
        for (key, column) in pairs {
            mapping.set(key.parse()?, column);
        }
        Ok(mapping)
    }
}

impl Serialize for FieldMapping {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let map: BTreeMap<&str, &str> = self
            .overrides
            .iter()
            .map(|(field, column)| (field.key(), column.as_str()))
            .collect();
        map.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FieldMapping {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = HashMap::<String, String>::deserialize(deserializer)?;
        Self::from_pairs(raw).map_err(serde::de::Error::custom)
    }
}

/// Reads one logical field from `row`. Missing columns and blank cells
/// yield an empty value; never fails.
pub fn resolve_field<'a>(row: &Row<'a>, mapping: &FieldMapping, field: LogicalField) -> &'a CellValue {
    static EMPTY: CellValue = CellValue::Empty;
    row.get(mapping.column(field)).unwrap_or(&EMPTY)
}

/// Row → SpecimenRecord. Pure; the date field is normalized on the way.
pub fn resolve(row: &Row<'_>, mapping: &FieldMapping) -> SpecimenRecord {
    let text = |field| resolve_field(row, mapping, field).to_text();

    SpecimenRecord {
        family: text(LogicalField::Family),
        familyrus: text(LogicalField::FamilyRus),
        species: text(LogicalField::Species),
        speciesrus: text(LogicalField::SpeciesRus),
        region: text(LogicalField::Region),
        point: text(LogicalField::Point),
        habitats: text(LogicalField::Habitats),
        date: normalize_date(resolve_field(row, mapping, LogicalField::Date)),
        leg: text(LogicalField::Leg),
        det: text(LogicalField::Det),
        num: text(LogicalField::Num),
        latitude: text(LogicalField::Latitude),
        longitude: text(LogicalField::Longitude),
    }
}
