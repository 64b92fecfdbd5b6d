//! Life-expectancy cleaning.
//!
//! This crate turns a raw table into normalized observations with columns
//! `unit, sex, age, region, year, value`:
//!
//! - **wide**: composite-key split, unpivot and numeric coercion for the TSV export
//! - **records**: column drop/rename for the JSON record list
//! - **strategy**: the [`CleaningStrategy`] seam and format-based selection
//! - **frame**: the cleaned frame and typed row extraction
//! - **normalization**: annotation stripping and numeric parsing

pub mod data_utils;
pub mod error;
pub mod frame;
pub mod normalization;
pub mod records;
pub mod strategy;
pub mod wide;

pub use error::{Result, TransformError};
pub use frame::{CleanedFrame, observations, unique_regions};
pub use records::JsonRecordCleaner;
pub use strategy::{CleaningStrategy, clean_data, strategy_for};
pub use wide::WideTableCleaner;
