//! Integration tests for the full load, clean and save pipeline.

use std::path::{Path, PathBuf};

use lifexp_cli::pipeline::{PipelineConfig, run};
use lifexp_model::{Region, SourceFormat};
use lifexp_transform::observations;
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// A data directory holding a copy of the fixture for `format`.
fn data_dir(format: SourceFormat) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let name = format.default_file_name();
    std::fs::copy(fixtures_dir().join(name), dir.path().join(name)).unwrap();
    dir
}

#[test]
fn test_tsv_run_writes_region_file() {
    let dir = data_dir(SourceFormat::Tsv);
    let config = PipelineConfig::new("PT", SourceFormat::Tsv, dir.path());

    let result = run(&config).unwrap();

    assert_eq!(result.region, Some(Region::Pt));
    assert_eq!(result.loaded_rows, 4);
    assert_eq!(result.pre_drop_rows, 16);
    assert_eq!(result.dropped_rows, 2);
    assert_eq!(result.cleaned_rows, 14);
    assert_eq!(result.saved.record_count(), 8);
    assert_eq!(result.saved.path, dir.path().join("pt_life_expectancy.csv"));

    let written = std::fs::read_to_string(&result.saved.path).unwrap();
    insta::assert_snapshot!(written, @r"
    unit,sex,age,region,year,value
    YR,F,Y25,PT,2021,59.2
    YR,M,Y65,PT,2021,18.6
    YR,F,Y25,PT,2020,58.6
    YR,M,Y65,PT,2020,17.9
    YR,F,Y25,PT,2019,59.1
    YR,M,Y65,PT,2019,18.9
    YR,F,Y25,PT,2018,58.6
    YR,M,Y65,PT,2018,18.6
    ");
}

#[test]
fn test_tsv_run_drops_missing_values() {
    let dir = data_dir(SourceFormat::Tsv);
    let config = PipelineConfig::new("UK", SourceFormat::Tsv, dir.path());

    let result = run(&config).unwrap();
    let rows = observations(&result.saved.data).unwrap();

    let years: Vec<i64> = rows.iter().map(|row| row.year).collect();
    assert_eq!(years, vec![2019, 2018]);
    assert_eq!(rows[0].value, 58.0);
    assert_eq!(rows[1].value, 57.9);
}

#[test]
fn test_aggregate_region_is_selectable() {
    let dir = data_dir(SourceFormat::Tsv);
    let config = PipelineConfig::new("EU27_2020", SourceFormat::Tsv, dir.path());

    let result = run(&config).unwrap();

    assert_eq!(result.region, Some(Region::Eu27_2020));
    assert_eq!(result.saved.record_count(), 4);
    assert!(result.saved.path.ends_with("eu27_2020_life_expectancy.csv"));
}

#[test]
fn test_json_run_writes_region_file() {
    let dir = data_dir(SourceFormat::Json);
    let config = PipelineConfig::new("UK", SourceFormat::Json, dir.path());

    let result = run(&config).unwrap();
    let rows = observations(&result.saved.data).unwrap();

    assert_eq!(result.dropped_rows, 0);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].region, "UK");
    assert_eq!(rows[0].value, 81.2);
    assert_eq!(rows[1].year, 2019);
    assert!(result.saved.data.column("flag").is_err());
    assert!(result.saved.data.column("flag_detail").is_err());

    let written = std::fs::read_to_string(&result.saved.path).unwrap();
    assert!(written.starts_with("unit,sex,age,region,year,value\n"));
}

#[test]
fn test_unknown_region_writes_empty_file() {
    let dir = data_dir(SourceFormat::Tsv);
    let config = PipelineConfig::new("ZZ", SourceFormat::Tsv, dir.path());

    let result = run(&config).unwrap();

    assert_eq!(result.region, None);
    assert_eq!(result.saved.record_count(), 0);
    let written = std::fs::read_to_string(dir.path().join("zz_life_expectancy.csv")).unwrap();
    assert_eq!(written.trim_end(), "unit,sex,age,region,year,value");
}

#[test]
fn test_lowercase_code_matches_nothing() {
    let dir = data_dir(SourceFormat::Tsv);
    let config = PipelineConfig::new("pt", SourceFormat::Tsv, dir.path());

    let result = run(&config).unwrap();

    assert_eq!(result.region, None);
    assert_eq!(result.saved.record_count(), 0);
}

#[test]
fn test_output_dir_override() {
    let dir = data_dir(SourceFormat::Tsv);
    let out = tempfile::tempdir().unwrap();
    let config = PipelineConfig::new("PT", SourceFormat::Tsv, dir.path())
        .with_output_dir(Some(out.path().to_path_buf()));

    let result = run(&config).unwrap();

    assert_eq!(result.saved.path, out.path().join("pt_life_expectancy.csv"));
    assert!(!dir.path().join("pt_life_expectancy.csv").exists());
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig::new("PT", SourceFormat::Tsv, dir.path());

    let error = run(&config).unwrap_err();

    assert!(format!("{error:#}").contains("source file not found"));
    assert!(!dir.path().join("pt_life_expectancy.csv").exists());
}

#[test]
fn test_blank_lines_and_short_rows_do_not_abort() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(SourceFormat::Tsv.default_file_name()),
        "unit,sex,age,geo\\time\t2019 \t2018 \n\
         YR,F,Y25,PT\t59.1 \n\
         \n\
         YR,M,Y25,PT\t55.0 \t54.2 p\n\
         \n",
    )
    .unwrap();
    let config = PipelineConfig::new("PT", SourceFormat::Tsv, dir.path());

    let result = run(&config).unwrap();

    assert_eq!(result.loaded_rows, 2);
    assert_eq!(result.pre_drop_rows, 4);
    assert_eq!(result.dropped_rows, 1);
    assert_eq!(result.saved.record_count(), 3);
}
