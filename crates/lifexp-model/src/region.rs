//! Closed enumeration of Eurostat region codes.
//!
//! The set covers every `geo` code found in the life-expectancy export:
//! individual countries plus nine aggregate groupings (unions, euro area,
//! EEA/EFTA). Adding a region means adding a variant here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Suffix of every per-region output file.
const OUTPUT_FILE_SUFFIX: &str = "_life_expectancy.csv";

/// A Eurostat region code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Region {
    Al,
    Am,
    At,
    Az,
    Be,
    Bg,
    By,
    Ch,
    Cy,
    Cz,
    De,
    Dk,
    Ee,
    El,
    Es,
    Fi,
    Fr,
    Fx,
    Ge,
    Hr,
    Hu,
    Ie,
    Is,
    It,
    Li,
    Lt,
    Lu,
    Lv,
    Md,
    Me,
    Mk,
    Mt,
    Nl,
    No,
    Pl,
    Pt,
    Ro,
    Rs,
    Ru,
    Se,
    Si,
    Sk,
    Sm,
    Tr,
    Ua,
    Uk,
    Xk,
    /// Germany including the former GDR.
    DeTot,
    /// Euro area, 18 countries.
    Ea18,
    /// Euro area, 19 countries.
    Ea19,
    /// European Economic Area, 30 countries (2007).
    Eea30_2007,
    /// European Economic Area, 31 countries.
    Eea31,
    /// European Free Trade Association.
    Efta,
    /// European Union, 27 countries (2007-2013).
    Eu27_2007,
    /// European Union, 27 countries (from 2020).
    Eu27_2020,
    /// European Union, 28 countries (2013-2020).
    Eu28,
}

impl Region {
    /// Every region, in declaration order.
    pub const ALL: [Region; 56] = [
        Region::Al,
        Region::Am,
        Region::At,
        Region::Az,
        Region::Be,
        Region::Bg,
        Region::By,
        Region::Ch,
        Region::Cy,
        Region::Cz,
        Region::De,
        Region::Dk,
        Region::Ee,
        Region::El,
        Region::Es,
        Region::Fi,
        Region::Fr,
        Region::Fx,
        Region::Ge,
        Region::Hr,
        Region::Hu,
        Region::Ie,
        Region::Is,
        Region::It,
        Region::Li,
        Region::Lt,
        Region::Lu,
        Region::Lv,
        Region::Md,
        Region::Me,
        Region::Mk,
        Region::Mt,
        Region::Nl,
        Region::No,
        Region::Pl,
        Region::Pt,
        Region::Ro,
        Region::Rs,
        Region::Ru,
        Region::Se,
        Region::Si,
        Region::Sk,
        Region::Sm,
        Region::Tr,
        Region::Ua,
        Region::Uk,
        Region::Xk,
        Region::DeTot,
        Region::Ea18,
        Region::Ea19,
        Region::Eea30_2007,
        Region::Eea31,
        Region::Efta,
        Region::Eu27_2007,
        Region::Eu27_2020,
        Region::Eu28,
    ];

    /// Codes that denote a grouping of countries rather than a single one.
    pub const AGGREGATES: [Region; 9] = [
        Region::DeTot,
        Region::Ea18,
        Region::Ea19,
        Region::Eea30_2007,
        Region::Eea31,
        Region::Efta,
        Region::Eu27_2007,
        Region::Eu27_2020,
        Region::Eu28,
    ];

    /// Returns the Eurostat code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Al => "AL",
            Region::Am => "AM",
            Region::At => "AT",
            Region::Az => "AZ",
            Region::Be => "BE",
            Region::Bg => "BG",
            Region::By => "BY",
            Region::Ch => "CH",
            Region::Cy => "CY",
            Region::Cz => "CZ",
            Region::De => "DE",
            Region::Dk => "DK",
            Region::Ee => "EE",
            Region::El => "EL",
            Region::Es => "ES",
            Region::Fi => "FI",
            Region::Fr => "FR",
            Region::Fx => "FX",
            Region::Ge => "GE",
            Region::Hr => "HR",
            Region::Hu => "HU",
            Region::Ie => "IE",
            Region::Is => "IS",
            Region::It => "IT",
            Region::Li => "LI",
            Region::Lt => "LT",
            Region::Lu => "LU",
            Region::Lv => "LV",
            Region::Md => "MD",
            Region::Me => "ME",
            Region::Mk => "MK",
            Region::Mt => "MT",
            Region::Nl => "NL",
            Region::No => "NO",
            Region::Pl => "PL",
            Region::Pt => "PT",
            Region::Ro => "RO",
            Region::Rs => "RS",
            Region::Ru => "RU",
            Region::Se => "SE",
            Region::Si => "SI",
            Region::Sk => "SK",
            Region::Sm => "SM",
            Region::Tr => "TR",
            Region::Ua => "UA",
            Region::Uk => "UK",
            Region::Xk => "XK",
            Region::DeTot => "DE_TOT",
            Region::Ea18 => "EA18",
            Region::Ea19 => "EA19",
            Region::Eea30_2007 => "EEA30_2007",
            Region::Eea31 => "EEA31",
            Region::Efta => "EFTA",
            Region::Eu27_2007 => "EU27_2007",
            Region::Eu27_2020 => "EU27_2020",
            Region::Eu28 => "EU28",
        }
    }

    /// Returns true for union and regional grouping codes.
    pub fn is_aggregate(&self) -> bool {
        Self::AGGREGATES.contains(self)
    }

    /// Region codes excluding union and regional groupings.
    pub fn actual_countries() -> Vec<Region> {
        Self::ALL
            .iter()
            .copied()
            .filter(|region| !region.is_aggregate())
            .collect()
    }

    /// Name of the per-region output file, e.g. `pt_life_expectancy.csv`.
    pub fn output_file_name(&self) -> String {
        output_file_name_for(self.as_str())
    }
}

/// Output file name for an arbitrary code, known or not.
pub fn output_file_name_for(code: &str) -> String {
    format!("{}{OUTPUT_FILE_SUFFIX}", code.to_lowercase())
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = ModelError;

    /// Exact, case-sensitive lookup of a Eurostat code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|region| region.as_str() == s)
            .ok_or_else(|| ModelError::UnknownRegion {
                code: s.to_string(),
            })
    }
}

impl TryFrom<String> for Region {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.as_str().to_string()
    }
}
