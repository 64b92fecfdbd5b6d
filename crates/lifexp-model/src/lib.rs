//! Core types for the life-expectancy pipeline.
//!
//! - **region**: the closed enumeration of Eurostat region codes
//! - **columns**: column names shared by the loader, cleaner and saver
//! - **observation**: the typed view of one normalized row
//! - **format**: the two supported source formats

pub mod columns;
pub mod error;
pub mod format;
pub mod observation;
pub mod region;

pub use error::{ModelError, Result};
pub use format::SourceFormat;
pub use observation::Observation;
pub use region::{Region, output_file_name_for};
