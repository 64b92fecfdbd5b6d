//! JSON record-list reading.

use std::path::Path;

use polars::prelude::{Column, DataFrame, NamedFrom, Series};
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::encoding::validate_encoding;
use crate::error::{IngestError, Result};

type Record = Map<String, Value>;

/// Reads a JSON array of flat objects into a DataFrame.
///
/// Columns are the union of record keys in first-seen order. Each column is
/// typed from its non-null values: integers become `Int64`, other numbers
/// `Float64`, booleans `Boolean`, anything else `String`. Missing keys are
/// nulls.
pub fn read_json_records(path: &Path) -> Result<DataFrame> {
    debug!(path = %path.display(), "reading json");
    validate_encoding(path)?;
    let text = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let document: Value = serde_json::from_str(text.trim_start_matches('\u{feff}')).map_err(
        |source| IngestError::JsonParse {
            path: path.to_path_buf(),
            source,
        },
    )?;
    let records = into_records(document).map_err(|reason| IngestError::NotARecordArray {
        path: path.to_path_buf(),
        reason,
    })?;
    let df = records_to_frame(&records)?;
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded json"
    );
    Ok(df)
}

fn into_records(document: Value) -> std::result::Result<Vec<Record>, String> {
    let Value::Array(items) = document else {
        return Err(format!("top-level value is {}", value_kind(&document)));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(record) => Ok(record),
            other => Err(format!("item {idx} is {}", value_kind(&other))),
        })
        .collect()
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Column names in first-seen order across all records.
fn column_names(records: &[Record]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !names.iter().any(|name| name == key) {
                names.push(key.clone());
            }
        }
    }
    names
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Int,
    Float,
    Bool,
    Text,
}

fn infer_kind<'a>(values: impl Iterator<Item = &'a Value>) -> ColumnKind {
    let mut kind: Option<ColumnKind> = None;
    for value in values {
        let this = match value {
            Value::Null => continue,
            Value::Number(n) if n.is_i64() => ColumnKind::Int,
            Value::Number(_) => ColumnKind::Float,
            Value::Bool(_) => ColumnKind::Bool,
            _ => return ColumnKind::Text,
        };
        kind = Some(match (kind, this) {
            (None, next) => next,
            (Some(current), next) if current == next => current,
            (Some(ColumnKind::Int | ColumnKind::Float), ColumnKind::Int | ColumnKind::Float) => {
                ColumnKind::Float
            }
            _ => return ColumnKind::Text,
        });
    }
    kind.unwrap_or(ColumnKind::Text)
}

fn text_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn records_to_frame(records: &[Record]) -> Result<DataFrame> {
    let names = column_names(records);
    let mut columns: Vec<Column> = Vec::with_capacity(names.len());
    for name in &names {
        let cells = || records.iter().map(|record| record.get(name).unwrap_or(&Value::Null));
        let series = match infer_kind(cells()) {
            ColumnKind::Int => {
                let values: Vec<Option<i64>> = cells().map(Value::as_i64).collect();
                Series::new(name.as_str().into(), values)
            }
            ColumnKind::Float => {
                let values: Vec<Option<f64>> = cells().map(Value::as_f64).collect();
                Series::new(name.as_str().into(), values)
            }
            ColumnKind::Bool => {
                let values: Vec<Option<bool>> = cells().map(Value::as_bool).collect();
                Series::new(name.as_str().into(), values)
            }
            ColumnKind::Text => {
                let values: Vec<Option<String>> = cells().map(text_value).collect();
                Series::new(name.as_str().into(), values)
            }
        };
        columns.push(series.into());
    }
    Ok(DataFrame::new(columns)?)
}
