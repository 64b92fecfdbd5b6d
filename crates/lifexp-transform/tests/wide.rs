//! Tests for the wide TSV cleaning strategy.

mod common;

use lifexp_model::Observation;
use lifexp_model::SourceFormat;
use lifexp_transform::{
    CleaningStrategy, TransformError, WideTableCleaner, clean_data, observations,
};
use polars::prelude::DataType;

use common::{KEY, wide_frame};

fn column_names(df: &polars::prelude::DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

#[test]
fn test_annotated_cell_cleans_to_observation() {
    let raw = wide_frame(&["2018 "], &[("YR,F,Y25,PT", vec![Some("58.6 e")])]);

    let cleaned = clean_data(&raw, SourceFormat::Tsv).unwrap();
    let rows = observations(&cleaned.data).unwrap();

    assert_eq!(
        rows,
        vec![Observation {
            unit: "YR".to_string(),
            sex: "F".to_string(),
            age: "Y25".to_string(),
            region: "PT".to_string(),
            year: 2018,
            value: 58.6,
        }]
    );
}

#[test]
fn test_annotation_is_stripped_from_value() {
    let raw = wide_frame(&["2019"], &[("YR,T,Y1,UK", vec![Some("78.5 e")])]);

    let cleaned = WideTableCleaner.clean(&raw).unwrap();

    let values = cleaned.data.column("value").unwrap().f64().unwrap();
    assert_eq!(values.get(0), Some(78.5));
}

#[test]
fn test_noise_rows_are_dropped() {
    let raw = wide_frame(
        &["2019", "2020"],
        &[
            ("YR,F,Y25,PT", vec![Some("xyz"), Some("80.1")]),
            ("YR,M,Y25,PT", vec![Some(": "), None]),
            ("YR,T,Y25,PT", vec![Some(" 81.0"), Some("79.9 p")]),
        ],
    );

    let cleaned = WideTableCleaner.clean(&raw).unwrap();
    let rows = observations(&cleaned.data).unwrap();

    assert_eq!(cleaned.pre_drop_rows, 6);
    assert_eq!(cleaned.dropped_rows, 4);
    let kept: Vec<(String, i64, f64)> = rows
        .into_iter()
        .map(|row| (row.sex, row.year, row.value))
        .collect();
    assert_eq!(
        kept,
        vec![("F".to_string(), 2020, 80.1), ("T".to_string(), 2020, 79.9)]
    );
}

#[test]
fn test_unpivot_is_column_major() {
    let raw = wide_frame(
        &["2021 ", "2020 "],
        &[
            ("YR,F,Y1,PT", vec![Some("1.0"), Some("2.0")]),
            ("YR,F,Y1,UK", vec![Some("3.0"), Some("4.0")]),
        ],
    );

    let cleaned = WideTableCleaner.clean(&raw).unwrap();
    let rows = observations(&cleaned.data).unwrap();
    let order: Vec<(String, i64)> = rows.into_iter().map(|r| (r.region, r.year)).collect();

    assert_eq!(
        order,
        vec![
            ("PT".to_string(), 2021),
            ("UK".to_string(), 2021),
            ("PT".to_string(), 2020),
            ("UK".to_string(), 2020),
        ]
    );
}

#[test]
fn test_output_schema() {
    let raw = wide_frame(&["2020"], &[("YR,F,Y1,PT", vec![Some("80.0")])]);

    let cleaned = WideTableCleaner.clean(&raw).unwrap();

    assert_eq!(
        column_names(&cleaned.data),
        vec!["unit", "sex", "age", "region", "year", "value"]
    );
    assert_eq!(cleaned.data.column("year").unwrap().dtype(), &DataType::Int64);
    assert_eq!(
        cleaned.data.column("value").unwrap().dtype(),
        &DataType::Float64
    );
}

#[test]
fn test_empty_input_keeps_schema() {
    let raw = wide_frame(&["2019", "2020"], &[]);

    let cleaned = WideTableCleaner.clean(&raw).unwrap();

    assert_eq!(cleaned.record_count(), 0);
    assert_eq!(
        column_names(&cleaned.data),
        vec!["unit", "sex", "age", "region", "year", "value"]
    );
    assert_eq!(cleaned.data.column("year").unwrap().dtype(), &DataType::Int64);
}

#[test]
fn test_malformed_key_is_an_error() {
    let raw = wide_frame(
        &["2020"],
        &[
            ("YR,F,Y1,PT", vec![Some("80.0")]),
            ("YR,F,PT", vec![Some("80.0")]),
        ],
    );

    let err = WideTableCleaner.clean(&raw).unwrap_err();

    assert!(matches!(
        err,
        TransformError::MalformedKey { row: 1, found: 3, .. }
    ));
}

#[test]
fn test_missing_key_column_is_an_error() {
    let raw = wide_frame(&["2020"], &[("YR,F,Y1,PT", vec![Some("80.0")])])
        .drop(KEY)
        .unwrap();

    let err = WideTableCleaner.clean(&raw).unwrap_err();

    assert!(matches!(err, TransformError::MissingColumn { .. }));
}

#[test]
fn test_non_year_header_rows_are_dropped() {
    let raw = wide_frame(
        &["2020", "notes"],
        &[("YR,F,Y1,PT", vec![Some("80.0"), Some("81.0")])],
    );

    let cleaned = WideTableCleaner.clean(&raw).unwrap();

    assert_eq!(cleaned.pre_drop_rows, 2);
    assert_eq!(cleaned.record_count(), 1);
}

#[test]
fn test_duplicated_year_header_is_dropped() {
    // Polars suffixes a repeated header when reading.
    let raw = wide_frame(
        &["2019", "2019_duplicated_0"],
        &[("YR,F,Y1,PT", vec![Some("80.0"), Some("80.5")])],
    );

    let cleaned = WideTableCleaner.clean(&raw).unwrap();

    assert_eq!(cleaned.pre_drop_rows, 2);
    assert_eq!(cleaned.dropped_rows, 1);
    let values = cleaned.data.column("value").unwrap().f64().unwrap();
    assert_eq!(values.get(0), Some(80.0));
}
