//! Wide TSV reading with every column kept as text.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use polars::prelude::*;
use tracing::{debug, info};

use crate::encoding::validate_encoding;
use crate::error::{IngestError, Result};

const TAB: u8 = b'\t';
const UTF8_BOM: char = '\u{feff}';

/// Returns true if the file has a non-empty first line.
fn has_header_line(path: &Path) -> Result<bool> {
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    let mut first = String::new();
    BufReader::new(file)
        .read_line(&mut first)
        .map_err(|e| IngestError::io(path, e))?;
    Ok(!first.trim_start_matches(UTF8_BOM).trim().is_empty())
}

/// Reads a tab-separated file into a DataFrame of `String` columns.
///
/// Schema inference is disabled so annotated cells such as `"58.6 e"` are
/// kept verbatim for the cleaner. Empty cells become nulls and blank lines
/// are skipped.
pub fn read_tsv_table(path: &Path) -> Result<DataFrame> {
    debug!(path = %path.display(), "reading tsv");
    validate_encoding(path)?;
    if !has_header_line(path)? {
        return Err(IngestError::EmptySource {
            path: path.to_path_buf(),
        });
    }

    let parse_error = |e: PolarsError| IngestError::TsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|options| options.with_separator(TAB))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)?;

    strip_header_bom(&mut df)?;
    let df = drop_blank_rows(df)?;

    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded tsv"
    );
    Ok(df)
}

/// Removes rows where every cell is null, which Polars yields for blank lines.
fn drop_blank_rows(df: DataFrame) -> Result<DataFrame> {
    let mut keep = BooleanChunked::full("keep".into(), false, df.height());
    for column in df.get_columns() {
        keep = &keep | &column.is_not_null();
    }
    if keep.all() {
        return Ok(df);
    }
    let kept = df.filter(&keep)?;
    debug!(blank = df.height() - kept.height(), "skipped blank lines");
    Ok(kept)
}

fn strip_header_bom(df: &mut DataFrame) -> Result<()> {
    let Some(first) = df.get_column_names().first().map(|name| name.to_string()) else {
        return Ok(());
    };
    if let Some(stripped) = first.strip_prefix(UTF8_BOM) {
        let stripped = stripped.to_string();
        df.rename(&first, stripped.into())?;
    }
    Ok(())
}
