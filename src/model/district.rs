use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::model::error::ScoringError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IncomeLevel {
    Low,
    Medium,
    High,
}

impl IncomeLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            IncomeLevel::Low => "Low",
            IncomeLevel::Medium => "Medium",
            IncomeLevel::High => "High",
        }
    }
}

impl fmt::Display for IncomeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the three literals exactly as they appear in district tables.
/// Surrounding whitespace is ignored; case is not.
impl FromStr for IncomeLevel {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Low" => Ok(IncomeLevel::Low),
            "Medium" => Ok(IncomeLevel::Medium),
            "High" => Ok(IncomeLevel::High),
            other => Err(ScoringError::InvalidCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistrictRecord {
    pub name: String,
    pub lst_celsius: f64,
    pub ndvi_percent: f64,
    pub elderly_percent: f64,
    pub income_level: IncomeLevel,
    pub coordinates: Coordinates,
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/district.rs"]
mod tests;
