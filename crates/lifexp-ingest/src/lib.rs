//! Life-expectancy data ingestion.
//!
//! Loads the raw Eurostat export into a Polars [`DataFrame`] without any
//! cleaning. Two source shapes are supported:
//!
//! - **TSV**: the wide table, one row per unit/sex/age/region combination
//!   and one text column per year
//! - **JSON**: a flat array of records, one per region and year
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use lifexp_ingest::{DataSource, load_data};
//! use lifexp_model::SourceFormat;
//!
//! let source = DataSource::in_dir(SourceFormat::Tsv, Path::new("data"));
//! let raw = load_data(&source)?;
//! ```
//!
//! [`DataFrame`]: polars::prelude::DataFrame

mod encoding;
mod error;
mod json;
mod source;
mod tsv;

// === Error Types ===
pub use error::{IngestError, Result};

// === Readers ===
pub use json::read_json_records;
pub use tsv::read_tsv_table;

// === Source Selection ===
pub use source::{DataSource, load_data};
