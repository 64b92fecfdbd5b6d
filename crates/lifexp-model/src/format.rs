//! Supported source formats.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Shape of the raw input. Selects both the loader and the cleaning strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Wide tab-separated table with a composite key column.
    #[default]
    Tsv,
    /// JSON array of flat records.
    Json,
}

impl SourceFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Tsv => "tsv",
            SourceFormat::Json => "json",
        }
    }

    /// Conventional file name of the raw dataset in the data directory.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            SourceFormat::Tsv => "eu_life_expectancy_raw.tsv",
            SourceFormat::Json => "eurostat_life_expect.json",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceFormat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tsv" => Ok(SourceFormat::Tsv),
            "json" => Ok(SourceFormat::Json),
            _ => Err(ModelError::UnknownFormat {
                value: s.to_string(),
            }),
        }
    }
}
