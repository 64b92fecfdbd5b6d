//! Cleaning of the wide TSV export.
//!
//! The raw table has one composite key column (`unit,sex,age,geo\time`) and
//! one text column per year. Cleaning splits the key into four columns,
//! unpivots the year columns into one row per observation, strips flag
//! annotations from the values and coerces year and value to numbers. Rows
//! whose year or value does not coerce are marked invalid and removed in a
//! single filter pass.

use lifexp_model::SourceFormat;
use lifexp_model::columns::{
    AGE, COMPOSITE_KEY_COLUMN, KEY_DELIMITER, KEY_FIELDS, REGION, SEX, UNIT, VALUE, YEAR,
};
use polars::prelude::{BooleanChunked, Column, DataFrame, NamedFrom, NewChunkedArray, Series};
use tracing::{debug, warn};

use crate::data_utils::{cell_text, column_names};
use crate::error::{Result, TransformError};
use crate::frame::CleanedFrame;
use crate::normalization::{parse_f64, parse_year, strip_annotation};
use crate::strategy::CleaningStrategy;

/// Wide-to-long cleaner for the TSV source.
#[derive(Debug, Clone, Copy, Default)]
pub struct WideTableCleaner;

impl CleaningStrategy for WideTableCleaner {
    fn name(&self) -> &'static str {
        "wide-tsv"
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Tsv
    }

    fn clean(&self, raw: &DataFrame) -> Result<CleanedFrame> {
        let key_column = find_key_column(raw)?;
        let keys = split_keys(raw.column(&key_column)?)?;
        let year_columns: Vec<String> = column_names(raw)
            .into_iter()
            .filter(|name| *name != key_column)
            .collect();

        let long = unpivot(raw, &keys, &year_columns)?;
        let pre_drop_rows = long.len();
        let mask = BooleanChunked::from_slice("keep".into(), &long.validity());
        let df = long.into_frame()?.filter(&mask)?;

        debug!(
            key_rows = keys.len(),
            year_columns = year_columns.len(),
            pre_drop_rows,
            kept = df.height(),
            "unpivoted wide table"
        );
        Ok(CleanedFrame::new(SourceFormat::Tsv, df, pre_drop_rows))
    }
}

/// The composite key column: the conventional header, else the first header
/// holding the key delimiter.
fn find_key_column(raw: &DataFrame) -> Result<String> {
    let names = column_names(raw);
    if names.iter().any(|name| name == COMPOSITE_KEY_COLUMN) {
        return Ok(COMPOSITE_KEY_COLUMN.to_string());
    }
    names
        .into_iter()
        .find(|name| name.contains(KEY_DELIMITER))
        .ok_or_else(|| TransformError::MissingColumn {
            column: COMPOSITE_KEY_COLUMN.to_string(),
        })
}

type KeyParts = [String; 4];

/// Splits one composite key into its four fields.
pub fn split_key(key: &str, row: usize) -> Result<KeyParts> {
    let parts: Vec<&str> = key.split(KEY_DELIMITER).collect();
    let malformed = || TransformError::MalformedKey {
        row,
        key: key.to_string(),
        expected: KEY_FIELDS.len(),
        found: parts.len(),
    };
    match parts.as_slice() {
        [unit, sex, age, region] => Ok([
            unit.to_string(),
            sex.to_string(),
            age.to_string(),
            region.to_string(),
        ]),
        _ => Err(malformed()),
    }
}

fn split_keys(column: &Column) -> Result<Vec<KeyParts>> {
    (0..column.len())
        .map(|row| match cell_text(column, row) {
            Some(key) => split_key(&key, row),
            None => Err(TransformError::MalformedKey {
                row,
                key: String::new(),
                expected: KEY_FIELDS.len(),
                found: 0,
            }),
        })
        .collect()
}

/// Long-format rows before invalid observations are removed.
#[derive(Debug, Default)]
struct LongRows {
    unit: Vec<String>,
    sex: Vec<String>,
    age: Vec<String>,
    region: Vec<String>,
    year: Vec<Option<i64>>,
    value: Vec<Option<f64>>,
}

impl LongRows {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            unit: Vec::with_capacity(capacity),
            sex: Vec::with_capacity(capacity),
            age: Vec::with_capacity(capacity),
            region: Vec::with_capacity(capacity),
            year: Vec::with_capacity(capacity),
            value: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, key: &KeyParts, year: Option<i64>, value: Option<f64>) {
        let [unit, sex, age, region] = key;
        self.unit.push(unit.clone());
        self.sex.push(sex.clone());
        self.age.push(age.clone());
        self.region.push(region.clone());
        self.year.push(year);
        self.value.push(value);
    }

    fn len(&self) -> usize {
        self.year.len()
    }

    /// True for rows whose year and value both coerced.
    fn validity(&self) -> Vec<bool> {
        self.year
            .iter()
            .zip(&self.value)
            .map(|(year, value)| year.is_some() && value.is_some())
            .collect()
    }

    fn into_frame(self) -> Result<DataFrame> {
        let columns: Vec<Column> = vec![
            Series::new(UNIT.into(), self.unit).into(),
            Series::new(SEX.into(), self.sex).into(),
            Series::new(AGE.into(), self.age).into(),
            Series::new(REGION.into(), self.region).into(),
            Series::new(YEAR.into(), self.year).into(),
            Series::new(VALUE.into(), self.value).into(),
        ];
        Ok(DataFrame::new(columns)?)
    }
}

/// Column-major unpivot: every row of the first year column, then every row
/// of the next.
fn unpivot(raw: &DataFrame, keys: &[KeyParts], year_columns: &[String]) -> Result<LongRows> {
    let mut rows = LongRows::with_capacity(keys.len() * year_columns.len());
    for name in year_columns {
        let column = raw.column(name)?;
        let year = parse_year(name);
        if year.is_none() {
            warn!(
                column = %name,
                rows = keys.len(),
                "header is not a year, its cells are dropped"
            );
        }
        for (row, key) in keys.iter().enumerate() {
            let value = cell_text(column, row).and_then(|text| parse_f64(strip_annotation(&text)));
            rows.push(key, year, value);
        }
    }
    Ok(rows)
}
