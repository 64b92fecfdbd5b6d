//! Cleaning of the JSON record list.
//!
//! Records already hold one observation each with numeric values, so the
//! strategy only drops the flag columns and renames the region and value
//! fields. No coercion and no row dropping.

use lifexp_model::SourceFormat;
use lifexp_model::columns::{
    JSON_COUNTRY, JSON_FLAG, JSON_FLAG_DETAIL, JSON_LIFE_EXPECTANCY, OBSERVATION_COLUMNS, REGION,
    VALUE,
};
use polars::prelude::DataFrame;
use tracing::debug;

use crate::data_utils::column_names;
use crate::error::{Result, TransformError};
use crate::frame::CleanedFrame;
use crate::strategy::CleaningStrategy;

/// Cleaner for flat JSON records.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRecordCleaner;

impl CleaningStrategy for JsonRecordCleaner {
    fn name(&self) -> &'static str {
        "json-records"
    }

    fn format(&self) -> SourceFormat {
        SourceFormat::Json
    }

    fn clean(&self, raw: &DataFrame) -> Result<CleanedFrame> {
        let mut df = raw.clone();
        for flag in [JSON_FLAG, JSON_FLAG_DETAIL] {
            if df.column(flag).is_ok() {
                df = df.drop(flag)?;
            }
        }
        rename_required(&mut df, JSON_COUNTRY, REGION)?;
        rename_required(&mut df, JSON_LIFE_EXPECTANCY, VALUE)?;
        let df = canonical_order(&df)?;
        debug!(rows = df.height(), columns = df.width(), "renamed json records");
        Ok(CleanedFrame::new(SourceFormat::Json, df, raw.height()))
    }
}

fn rename_required(df: &mut DataFrame, from: &str, to: &str) -> Result<()> {
    if df.column(from).is_err() {
        return Err(TransformError::MissingColumn {
            column: from.to_string(),
        });
    }
    df.rename(from, to.into())?;
    Ok(())
}

/// Observation columns first in output order, remaining columns after.
fn canonical_order(df: &DataFrame) -> Result<DataFrame> {
    let names = column_names(df);
    let mut ordered: Vec<String> = OBSERVATION_COLUMNS
        .into_iter()
        .filter(|column| names.iter().any(|name| name.as_str() == *column))
        .map(str::to_string)
        .collect();
    ordered.extend(
        names
            .into_iter()
            .filter(|name| !OBSERVATION_COLUMNS.contains(&name.as_str())),
    );
    Ok(df.select(ordered)?)
}
