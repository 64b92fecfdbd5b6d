//! Region filtering and persistence.
//!
//! The saver selects the rows of one region from a cleaned table, writes them
//! to `<dir>/<code>_life_expectancy.csv` and hands the selection back to the
//! caller. An unknown region is not an error: it selects nothing and the file
//! holds only the header row.

mod csv;
mod error;
mod filter;

pub use csv::write_csv;
pub use error::{OutputError, Result};
pub use filter::filter_region;

use std::path::{Path, PathBuf};

use lifexp_model::{Region, output_file_name_for};
use polars::prelude::DataFrame;
use tracing::info;

/// The rows written for one region.
#[derive(Debug, Clone)]
pub struct SavedRegion {
    pub code: String,
    pub path: PathBuf,
    pub data: DataFrame,
}

impl SavedRegion {
    pub fn record_count(&self) -> usize {
        self.data.height()
    }
}

/// Path of the output file for `code` inside `dir`.
pub fn output_path(dir: &Path, code: &str) -> PathBuf {
    dir.join(output_file_name_for(code))
}

/// Filters `cleaned` to `code`, writes the selection and returns it.
pub fn save_data(cleaned: &DataFrame, code: &str, dir: &Path) -> Result<SavedRegion> {
    let mut data = filter_region(cleaned, code)?;
    let path = output_path(dir, code);
    write_csv(&mut data, &path)?;
    info!(
        region = code,
        rows = data.height(),
        path = %path.display(),
        "saved region"
    );
    Ok(SavedRegion {
        code: code.to_string(),
        path,
        data,
    })
}

/// [`save_data`] for a code from the region enumeration.
pub fn save_region(cleaned: &DataFrame, region: Region, dir: &Path) -> Result<SavedRegion> {
    save_data(cleaned, region.as_str(), dir)
}
