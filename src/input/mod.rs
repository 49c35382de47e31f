use std::path::Path;

use thiserror::Error;

pub mod reader;
pub mod table;

use crate::model::district::DistrictRecord;
use crate::model::error::ScoringError;
use table::parse_district_table;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

pub fn load_district_table(path: &Path) -> Result<Vec<DistrictRecord>, InputError> {
    if !path.is_file() {
        return Err(InputError::MissingInput(format!(
            "district table not found: {}",
            path.display()
        )));
    }
    let reader = reader::open_maybe_gz(path)?;
    let records = parse_district_table(reader)?;
    tracing::info!(
        path = %path.display(),
        districts = records.len(),
        "loaded district table"
    );
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
