//! Region code translation between single letters and three-letter codes
//!
//! The built-in table can be extended or overridden with a JSON file:
//!
//! ```json
//! {
//!   "letter_to_region3": { "E": "USA" },
//!   "region3_to_letter": { "USA": "E" }
//! }
//! ```
//!
//! Overrides are merged into the defaults; they never replace the whole table.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{IoContext, RenamerError, Result};

/// Code used when a region letter has no mapping.
pub const FALLBACK_REGION: &str = "OTH";

const DEFAULT_LETTER_TO_REGION: [(char, &str); 11] = [
    ('E', "USA"),
    ('J', "JPN"),
    ('P', "EUR"), // PAL
    ('K', "KOR"),
    ('D', "GER"),
    ('F', "FRA"),
    ('I', "ITA"),
    ('S', "ESP"),
    ('X', "OTH"),
    ('Y', "OTH"),
    ('Z', "OTH"),
];

const DEFAULT_REGION_TO_LETTER: [(&str, char); 9] = [
    ("USA", 'E'),
    ("JPN", 'J'),
    ("EUR", 'P'),
    ("KOR", 'K'),
    ("GER", 'D'),
    ("FRA", 'F'),
    ("ITA", 'I'),
    ("ESP", 'S'),
    ("OTH", 'X'),
];

/// Shape of the `--region-map-json` file. Both tables are optional.
#[derive(Debug, Default, Deserialize)]
pub struct RegionOverrides {
    #[serde(default)]
    pub letter_to_region3: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub region3_to_letter: Option<BTreeMap<String, String>>,
}

/// Bidirectional region lookup tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMap {
    letter_to_region: BTreeMap<char, String>,
    region_to_letter: BTreeMap<String, char>,
}

impl Default for RegionMap {
    fn default() -> Self {
        Self {
            letter_to_region: DEFAULT_LETTER_TO_REGION
                .iter()
                .map(|&(letter, region)| (letter, region.to_string()))
                .collect(),
            region_to_letter: DEFAULT_REGION_TO_LETTER
                .iter()
                .map(|&(region, letter)| (region.to_string(), letter))
                .collect(),
        }
    }
}

impl RegionMap {
    /// Load the region map, applying overrides from `path` when given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let contents =
            std::fs::read_to_string(path).on_path("Failed to read region map", path)?;
        tracing::debug!(path = %path.display(), "Loaded region map overrides");
        Self::from_json_str(&contents)
    }

    /// Build a region map from the JSON override format, merged over the defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let overrides: RegionOverrides = serde_json::from_str(json)?;
        let mut map = Self::default();
        map.merge(overrides)?;
        Ok(map)
    }

    /// Merge overrides into this map. Keys and values are uppercased; overrides win.
    pub fn merge(&mut self, overrides: RegionOverrides) -> Result<()> {
        for (letter, region) in overrides.letter_to_region3.unwrap_or_default() {
            let letter = single_char(&letter).ok_or_else(|| RenamerError::InvalidRegionMap {
                message: format!(
                    "letter_to_region3 key '{}' must be a single character",
                    letter
                ),
            })?;
            self.letter_to_region.insert(letter, region.to_uppercase());
        }

        for (region, letter) in overrides.region3_to_letter.unwrap_or_default() {
            let parsed = single_char(&letter).ok_or_else(|| RenamerError::InvalidRegionMap {
                message: format!(
                    "region3_to_letter value '{}' for '{}' must be a single character",
                    letter, region
                ),
            })?;
            self.region_to_letter.insert(region.to_uppercase(), parsed);
        }

        Ok(())
    }

    /// Three-letter code for a region letter, falling back to `OTH`.
    pub fn region_for_letter(&self, letter: char) -> String {
        self.letter_to_region
            .get(&letter.to_ascii_uppercase())
            .cloned()
            .unwrap_or_else(|| FALLBACK_REGION.to_string())
    }

    /// Region letter for a three-letter code, if one is mapped.
    pub fn letter_for_region(&self, region: &str) -> Option<char> {
        self.region_to_letter
            .get(&region.to_uppercase())
            .copied()
    }

    /// Letters with a forward mapping, in sorted order.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.letter_to_region.keys().copied()
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}
