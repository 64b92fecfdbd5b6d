//! Cleaned frame types.
//!
//! [`CleanedFrame`] wraps the normalized Polars DataFrame together with the
//! source format it came from and the row counts of the cleaning step, so the
//! caller can report how many observations were dropped as unparseable.

use lifexp_model::columns::{AGE, REGION, SEX, UNIT, VALUE, YEAR};
use lifexp_model::{Observation, SourceFormat};
use polars::prelude::{AnyValue, Column, DataFrame};

use crate::data_utils::{any_to_f64, any_to_i64, cell_text};
use crate::error::{Result, TransformError};

/// A normalized table with provenance counts.
#[derive(Debug, Clone)]
pub struct CleanedFrame {
    /// Source format the frame was cleaned from.
    pub format: SourceFormat,
    /// The normalized observations.
    pub data: DataFrame,
    /// Rows produced by reshaping, before invalid rows were removed.
    pub pre_drop_rows: usize,
    /// Rows removed because year or value failed numeric coercion.
    pub dropped_rows: usize,
}

impl CleanedFrame {
    pub fn new(format: SourceFormat, data: DataFrame, pre_drop_rows: usize) -> Self {
        let dropped_rows = pre_drop_rows.saturating_sub(data.height());
        Self {
            format,
            data,
            pre_drop_rows,
            dropped_rows,
        }
    }

    /// Returns the number of observations in the frame.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }
}

fn required<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| TransformError::MissingColumn {
        column: name.to_string(),
    })
}

fn text_at(column: &Column, name: &str, row: usize) -> Result<String> {
    cell_text(column, row).ok_or_else(|| TransformError::ColumnType {
        column: name.to_string(),
        row,
    })
}

fn typed_at<T>(
    column: &Column,
    name: &str,
    row: usize,
    convert: fn(AnyValue<'_>) -> Option<T>,
) -> Result<T> {
    column
        .get(row)
        .ok()
        .and_then(convert)
        .ok_or_else(|| TransformError::ColumnType {
            column: name.to_string(),
            row,
        })
}

/// Reads every row of a normalized frame as an [`Observation`].
pub fn observations(df: &DataFrame) -> Result<Vec<Observation>> {
    let unit = required(df, UNIT)?;
    let sex = required(df, SEX)?;
    let age = required(df, AGE)?;
    let region = required(df, REGION)?;
    let year = required(df, YEAR)?;
    let value = required(df, VALUE)?;

    (0..df.height())
        .map(|row| {
            Ok(Observation {
                unit: text_at(unit, UNIT, row)?,
                sex: text_at(sex, SEX, row)?,
                age: text_at(age, AGE, row)?,
                region: text_at(region, REGION, row)?,
                year: typed_at(year, YEAR, row, any_to_i64)?,
                value: typed_at(value, VALUE, row, any_to_f64)?,
            })
        })
        .collect()
}

/// Distinct region codes in first-seen order. Null regions are skipped.
pub fn unique_regions(df: &DataFrame) -> Result<Vec<String>> {
    let region = required(df, REGION)?;
    let mut seen: Vec<String> = Vec::new();
    for row in 0..df.height() {
        if let Some(code) = cell_text(region, row)
            && !seen.contains(&code)
        {
            seen.push(code);
        }
    }
    Ok(seen)
}
