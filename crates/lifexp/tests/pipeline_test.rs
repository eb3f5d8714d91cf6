//! End-to-end tests for the cleaning pipeline.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use lifexp::{
    CleanedRecord, DataTable, EncodingKind, LifexpError, Pipeline, Region, Source, clean, detect,
    strategy_for,
};

const RAW_TSV: &str = "unit,sex,age,geo\\time\t2020\t2021\n\
                       YR,F,Y1,PT\t84.1\t84.4 e\n\
                       YR,M,Y1,PT\t78.5 b\t79.2\n\
                       YR,M,Y1,AL\t76.0\t:\n";

const RAW_JSON: &str = r#"[
    {"unit": "YR", "sex": "F", "age": "Y1", "country": "PT", "2020": "84.1", "2021": "84.4 e"},
    {"unit": "YR", "sex": "M", "age": "Y1", "country": "PT", "2020": "78.5 b", "2021": "79.2"},
    {"unit": "YR", "sex": "M", "age": "Y1", "country": "AL", "2020": "76.0", "2021": ":"}
]"#;

/// Write a raw artifact into a fresh data directory.
fn data_dir_with(file: &str, content: &str) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join(file), content).expect("Failed to write raw file");
    dir
}

#[test]
fn test_tsv_end_to_end() {
    let dir = data_dir_with("eu_life_expectancy_raw.tsv", RAW_TSV);
    let pipeline = Pipeline::new(dir.path());

    let cleaned = pipeline
        .run(Source::path("eu_life_expectancy_raw.tsv"), Region::Pt)
        .unwrap();

    assert_eq!(cleaned.len(), 4);
    assert!(cleaned.iter().all(|r| r.region == "PT"));
    assert_eq!(
        cleaned.records[2],
        CleanedRecord {
            unit: "YR".to_string(),
            sex: "M".to_string(),
            age: "Y1".to_string(),
            region: "PT".to_string(),
            year: 2020,
            value: 78.5,
        }
    );

    let written = fs::read_to_string(dir.path().join("pt_life_expectancy.csv")).unwrap();
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("unit,sex,age,region,year,value"));
    assert_eq!(lines.next(), Some("YR,F,Y1,PT,2020,84.1"));
    assert_eq!(written.lines().count(), 5);
}

#[test]
fn test_json_end_to_end() {
    let dir = data_dir_with("eurostat_life_expect.json", RAW_JSON);
    let pipeline = Pipeline::new(dir.path());

    let cleaned = pipeline
        .run(Source::path("eurostat_life_expect.json"), Region::Al)
        .unwrap();

    // AL has a value for 2020 only; the ":" placeholder is dropped.
    assert_eq!(cleaned.len(), 1);
    assert_eq!(cleaned.records[0].year, 2020);
    assert_eq!(cleaned.records[0].value, 76.0);

    let reloaded: Vec<CleanedRecord> = serde_json::from_str(
        &fs::read_to_string(dir.path().join("al_life_expectancy.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(reloaded, cleaned.records);
}

#[test]
fn test_both_encodings_agree() {
    let tsv_dir = data_dir_with("raw.tsv", RAW_TSV);
    let json_dir = data_dir_with("raw.json", RAW_JSON);

    let from_tsv = Pipeline::new(tsv_dir.path())
        .run(Source::path("raw.tsv"), Region::Pt)
        .unwrap();
    let from_json = Pipeline::new(json_dir.path())
        .run(Source::path("raw.json"), Region::Pt)
        .unwrap();

    assert_eq!(from_tsv.records, from_json.records);
}

#[test]
fn test_intermediate_shape_is_encoding_agnostic() {
    let tsv_dir = data_dir_with("raw.tsv", RAW_TSV);
    let json_dir = data_dir_with("raw.json", RAW_JSON);

    for (dir, file) in [(&tsv_dir, "raw.tsv"), (&json_dir, "raw.json")] {
        let source = Source::path(dir.path().join(file));
        let kind = detect(&source).unwrap();
        let strategy = strategy_for(kind);
        let shaped = strategy
            .pre_shape(strategy.load(&dir.path().join(file)).unwrap())
            .unwrap();

        assert_eq!(
            shaped.headers,
            vec!["unit", "sex", "age", "region", "2020", "2021"]
        );
    }
}

#[test]
fn test_in_memory_table_source() {
    let dir = TempDir::new().unwrap();
    let table = DataTable::new(
        vec!["unit,sex,age,geo\\time".to_string(), "2019".to_string()],
        vec![vec!["YR,F,Y65,PT".to_string(), "21.3".to_string()]],
    );
    assert_eq!(detect(&Source::from(table.clone())).unwrap(), EncodingKind::WideTsv);

    let cleaned = Pipeline::new(dir.path())
        .run(Source::from(table), Region::Pt)
        .unwrap();

    assert_eq!(cleaned.len(), 1);
    assert!(dir.path().join("pt_life_expectancy.csv").exists());
}

#[test]
fn test_default_region_is_pt() {
    let dir = data_dir_with("raw.tsv", RAW_TSV);
    let cleaned = Pipeline::new(dir.path())
        .run_default(Source::path("raw.tsv"))
        .unwrap();
    assert!(cleaned.iter().all(|r| r.region == "PT"));
}

#[test]
fn test_unsupported_extension_fails() {
    let dir = data_dir_with("raw.txt", RAW_TSV);
    let err = Pipeline::new(dir.path())
        .run(Source::path("raw.txt"), Region::Pt)
        .unwrap_err();
    assert!(matches!(err, LifexpError::UnsupportedFormat(_)));
}

#[test]
fn test_invalid_region_fails_before_any_io() {
    // The source file does not exist; an aggregate region must fail the
    // run before the pipeline ever tries to open it.
    let dir = TempDir::new().unwrap();
    let err = Pipeline::new(dir.path())
        .run(Source::path("missing.tsv"), Region::Eu28)
        .unwrap_err();
    assert!(matches!(err, LifexpError::InvalidRegion(_)));
    assert!(!dir.path().join("eu28_life_expectancy.csv").exists());
}

#[test]
fn test_missing_source_aborts_without_output() {
    let dir = TempDir::new().unwrap();
    let err = Pipeline::new(dir.path())
        .run(Source::path("missing.tsv"), Region::Pt)
        .unwrap_err();
    assert!(matches!(err, LifexpError::Io { .. }));
    assert!(!dir.path().join("pt_life_expectancy.csv").exists());
}

#[test]
fn test_clean_is_stable_on_refiltered_output() {
    // Re-shaping the cleaned output back into a one-year wide table and
    // cleaning again reproduces the same records.
    let dir = data_dir_with("raw.tsv", RAW_TSV);
    let cleaned = Pipeline::new(dir.path())
        .run(Source::path("raw.tsv"), Region::Pt)
        .unwrap();

    let rewide = DataTable::new(
        ["unit", "sex", "age", "region", "2020"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        cleaned
            .iter()
            .filter(|r| r.year == 2020)
            .map(|r| {
                vec![
                    r.unit.clone(),
                    r.sex.clone(),
                    r.age.clone(),
                    r.region.clone(),
                    r.value.to_string(),
                ]
            })
            .collect(),
    );

    let again = clean(rewide, Region::Pt).unwrap();
    let expected: Vec<&CleanedRecord> =
        cleaned.iter().filter(|r| r.year == 2020).collect();
    assert_eq!(again.records.iter().collect::<Vec<_>>(), expected);
}

#[test]
fn test_output_lands_in_data_dir() {
    let dir = data_dir_with("raw.tsv", RAW_TSV);
    let pipeline = Pipeline::new(dir.path());
    assert_eq!(pipeline.data_dir(), dir.path());

    pipeline.run(Source::path("raw.tsv"), Region::Pt).unwrap();
    assert!(Path::new(&dir.path().join("pt_life_expectancy.csv")).exists());
}
