//! Shared helpers for building raw tables.

#![allow(dead_code)]

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

pub const KEY: &str = "unit,sex,age,geo\\time";

/// Builds a raw wide table: one key column plus one text column per year.
pub fn wide_frame(years: &[&str], rows: &[(&str, Vec<Option<&str>>)]) -> DataFrame {
    let keys: Vec<&str> = rows.iter().map(|(key, _)| *key).collect();
    let mut columns: Vec<Column> = vec![Series::new(KEY.into(), keys).into()];
    for (idx, year) in years.iter().enumerate() {
        let cells: Vec<Option<&str>> = rows.iter().map(|(_, cells)| cells[idx]).collect();
        columns.push(Series::new((*year).into(), cells).into());
    }
    DataFrame::new(columns).unwrap()
}
