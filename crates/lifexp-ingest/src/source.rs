//! Source selection.

use std::path::{Path, PathBuf};

use lifexp_model::SourceFormat;
use polars::prelude::DataFrame;

use crate::error::Result;
use crate::json::read_json_records;
use crate::tsv::read_tsv_table;

/// A raw dataset location together with its shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    pub format: SourceFormat,
    pub path: PathBuf,
}

impl DataSource {
    pub fn new(format: SourceFormat, path: impl Into<PathBuf>) -> Self {
        Self {
            format,
            path: path.into(),
        }
    }

    /// The conventional file for `format` inside `dir`.
    pub fn in_dir(format: SourceFormat, dir: &Path) -> Self {
        Self::new(format, dir.join(format.default_file_name()))
    }
}

/// Loads the raw table for `source`. No cleaning or filtering happens here.
pub fn load_data(source: &DataSource) -> Result<DataFrame> {
    match source.format {
        SourceFormat::Tsv => read_tsv_table(&source.path),
        SourceFormat::Json => read_json_records(&source.path),
    }
}
