//! Region selection.

use lifexp_model::columns::REGION;
use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};

use crate::error::{OutputError, Result};

/// Rows whose region equals `code` exactly (case-sensitive), in input order.
pub fn filter_region(df: &DataFrame, code: &str) -> Result<DataFrame> {
    let column = df.column(REGION).map_err(|_| OutputError::MissingColumn {
        column: REGION.to_string(),
    })?;
    let keep: Vec<bool> = column
        .str()?
        .into_iter()
        .map(|region| region == Some(code))
        .collect();
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}
