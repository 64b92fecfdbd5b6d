//! Strategy selection.

use std::time::Instant;

use lifexp_model::SourceFormat;
use polars::prelude::DataFrame;
use tracing::{info, info_span};

use crate::error::Result;
use crate::frame::CleanedFrame;
use crate::records::JsonRecordCleaner;
use crate::wide::WideTableCleaner;

/// Turns a raw table of one source shape into normalized observations.
pub trait CleaningStrategy {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Source format this strategy understands.
    fn format(&self) -> SourceFormat;

    fn clean(&self, raw: &DataFrame) -> Result<CleanedFrame>;
}

/// Returns the cleaning strategy for `format`.
pub fn strategy_for(format: SourceFormat) -> Box<dyn CleaningStrategy> {
    match format {
        SourceFormat::Tsv => Box::new(WideTableCleaner),
        SourceFormat::Json => Box::new(JsonRecordCleaner),
    }
}

/// Cleans `raw` with the strategy selected by `format`.
pub fn clean_data(raw: &DataFrame, format: SourceFormat) -> Result<CleanedFrame> {
    let strategy = strategy_for(format);
    let span = info_span!("clean", strategy = strategy.name(), format = %strategy.format());
    let _guard = span.enter();
    let start = Instant::now();
    let cleaned = strategy.clean(raw)?;
    info!(
        input_rows = raw.height(),
        pre_drop_rows = cleaned.pre_drop_rows,
        dropped_rows = cleaned.dropped_rows,
        rows = cleaned.record_count(),
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    Ok(cleaned)
}
