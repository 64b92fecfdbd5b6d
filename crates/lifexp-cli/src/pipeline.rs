//! Pipeline stages: load, clean, filter and save.
//!
//! Each stage runs inside its own span and reports row counts; the CLI
//! commands only build a [`PipelineConfig`] and print the [`RunResult`].

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use lifexp_ingest::{DataSource, load_data};
use lifexp_model::{Region, SourceFormat};
use lifexp_output::{SavedRegion, save_data};
use lifexp_transform::{CleanedFrame, clean_data};
use polars::prelude::DataFrame;
use tracing::{info, info_span, warn};

/// Everything a run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Region code requested by the caller, verbatim.
    pub country: String,
    pub source: DataSource,
    pub output_dir: PathBuf,
}

impl PipelineConfig {
    /// Conventional layout: input and output in the same data directory.
    pub fn new(country: impl Into<String>, format: SourceFormat, data_dir: &Path) -> Self {
        Self {
            country: country.into(),
            source: DataSource::in_dir(format, data_dir),
            output_dir: data_dir.to_path_buf(),
        }
    }

    #[must_use]
    pub fn with_input(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.source.path = path;
        }
        self
    }

    #[must_use]
    pub fn with_output_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.output_dir = dir;
        }
        self
    }
}

/// Outcome of one run.
#[derive(Debug)]
pub struct RunResult {
    pub country: String,
    /// The enumerated region, or None when the code is not known.
    pub region: Option<Region>,
    pub format: SourceFormat,
    pub input: PathBuf,
    pub loaded_rows: usize,
    pub pre_drop_rows: usize,
    pub dropped_rows: usize,
    pub cleaned_rows: usize,
    pub saved: SavedRegion,
}

/// Looks `code` up in the region enumeration, warning when it is unknown.
pub fn resolve_region(code: &str) -> Option<Region> {
    match code.parse::<Region>() {
        Ok(region) => Some(region),
        Err(error) => {
            warn!(%error, "region is not in the enumeration; output will be empty");
            None
        }
    }
}

/// Stage 1: load the raw table.
pub fn ingest(source: &DataSource) -> Result<DataFrame> {
    let span = info_span!("ingest", format = %source.format, path = %source.path.display());
    let _guard = span.enter();
    let start = Instant::now();
    let raw = load_data(source).with_context(|| format!("load {}", source.path.display()))?;
    info!(
        rows = raw.height(),
        columns = raw.width(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(raw)
}

/// Stage 2: reshape into normalized observations.
pub fn clean(raw: &DataFrame, format: SourceFormat) -> Result<CleanedFrame> {
    clean_data(raw, format).with_context(|| format!("clean {format} data"))
}

/// Loads and cleans the configured source.
pub fn load_and_clean(source: &DataSource) -> Result<(usize, CleanedFrame)> {
    let raw = ingest(source)?;
    let cleaned = clean(&raw, source.format)?;
    Ok((raw.height(), cleaned))
}

/// Runs every stage for `config`.
pub fn run(config: &PipelineConfig) -> Result<RunResult> {
    let span = info_span!("run", country = %config.country);
    let _guard = span.enter();

    let region = resolve_region(&config.country);
    let (loaded_rows, cleaned) = load_and_clean(&config.source)?;

    let save_span = info_span!("save", output_dir = %config.output_dir.display());
    let saved = save_span
        .in_scope(|| save_data(&cleaned.data, &config.country, &config.output_dir))
        .with_context(|| format!("save region {}", config.country))?;

    Ok(RunResult {
        country: config.country.clone(),
        region,
        format: config.source.format,
        input: config.source.path.clone(),
        loaded_rows,
        pre_drop_rows: cleaned.pre_drop_rows,
        dropped_rows: cleaned.dropped_rows,
        cleaned_rows: cleaned.record_count(),
        saved,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_data_dir() {
        let config = PipelineConfig::new("PT", SourceFormat::Tsv, Path::new("data"));
        assert_eq!(
            config.source.path,
            PathBuf::from("data/eu_life_expectancy_raw.tsv")
        );
        assert_eq!(config.output_dir, PathBuf::from("data"));
    }

    #[test]
    fn config_overrides() {
        let config = PipelineConfig::new("PT", SourceFormat::Json, Path::new("data"))
            .with_input(Some(PathBuf::from("raw/life.json")))
            .with_output_dir(Some(PathBuf::from("out")))
            .with_output_dir(None);
        assert_eq!(config.source.path, PathBuf::from("raw/life.json"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn resolve_region_is_exact() {
        assert_eq!(resolve_region("UK"), Some(Region::Uk));
        assert_eq!(resolve_region("uk"), None);
    }
}
