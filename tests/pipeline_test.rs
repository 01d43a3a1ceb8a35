use plant_growth_charts::{
    ChartError, ChartKind, GrowthChartApp, GrowthError, InputError, RawMeasurements, ReportFormat,
    RunOptions, ValidationError,
};
use std::path::Path;
use tempfile::TempDir;

fn tokens(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn options(out_dir: &Path, plant: &str, height: &[&str], leaves: &[&str], weight: &[&str]) -> RunOptions {
    RunOptions {
        measurements: RawMeasurements {
            plant: Some(plant.to_string()),
            height: tokens(height),
            leaf_count: tokens(leaves),
            dry_weight: tokens(weight),
        },
        out_dir: Some(out_dir.to_path_buf()),
        ..RunOptions::default()
    }
}

fn charts_exist(dir: &Path, plant: &str) -> bool {
    ChartKind::ALL
        .iter()
        .all(|kind| dir.join(kind.file_name(plant)).is_file())
}

fn png_count(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "png"))
        .count()
}

#[test]
fn test_tomato_produces_three_charts_and_report() {
    let temp_dir = TempDir::new().unwrap();
    let app = GrowthChartApp::new(options(
        temp_dir.path(),
        "Tomato",
        &["10", "12", "14"],
        &["4", "5", "6"],
        &["1.1", "1.3", "1.5"],
    ));

    let mut out = Vec::new();
    let charts = app.run(&mut out).unwrap();

    assert!(charts_exist(temp_dir.path(), "Tomato"));
    assert_eq!(png_count(temp_dir.path()), 3);
    assert_eq!(charts.scatter, temp_dir.path().join("Tomato_scatter.png"));

    let report = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "Plant: Tomato");
    assert_eq!(lines[1], "Height data: [10.0, 12.0, 14.0] cm");
    assert_eq!(lines[2], "Leaf count data: [4, 5, 6]");
    assert_eq!(lines[3], "Dry weight data: [1.1, 1.3, 1.5] g");
    assert_eq!(lines[4], "Generated plots for Tomato:");
    assert!(lines[5].starts_with("Scatter plot saved as "));
    assert!(lines[5].ends_with("Tomato_scatter.png"));
    assert!(lines[6].ends_with("Tomato_histogram.png"));
    assert!(lines[7].ends_with("Tomato_line_plot.png"));
    assert_eq!(lines.len(), 8);
}

#[test]
fn test_single_reading_per_sequence_renders() {
    let temp_dir = TempDir::new().unwrap();
    let app = GrowthChartApp::new(options(temp_dir.path(), "Basil", &["5"], &["2"], &["0.5"]));

    let charts = app.run(std::io::sink()).unwrap();

    for (_, path) in charts.iter() {
        let image = image::open(path).unwrap();
        assert_eq!((image.width(), image.height()), (1000, 600));
    }
}

#[test]
fn test_length_mismatch_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let app = GrowthChartApp::new(options(
        temp_dir.path(),
        "Tomato",
        &["1", "2"],
        &["1"],
        &["1", "2"],
    ));

    let mut out = Vec::new();
    let err = app.run(&mut out).unwrap_err();

    assert!(matches!(
        err,
        GrowthError::Validation(ValidationError::LengthMismatch {
            heights: 2,
            leaf_counts: 1,
            dry_weights: 2
        })
    ));
    assert_eq!(png_count(temp_dir.path()), 0);
    assert!(out.is_empty());
}

#[test]
fn test_malformed_token_stops_before_rendering() {
    let temp_dir = TempDir::new().unwrap();
    let app = GrowthChartApp::new(options(
        temp_dir.path(),
        "Tomato",
        &["10", "12"],
        &["4", "five"],
        &["1.1", "1.3"],
    ));

    let err = app.run(std::io::sink()).unwrap_err();

    match err {
        GrowthError::Input(InputError::ArgumentParse { flag, token, .. }) => {
            assert_eq!(flag, "--leaf_count");
            assert_eq!(token, "five");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(png_count(temp_dir.path()), 0);
}

#[test]
fn test_missing_plant_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let mut run = options(temp_dir.path(), "unused", &["1"], &["1"], &["1"]);
    run.measurements.plant = None;

    let err = GrowthChartApp::new(run).run(std::io::sink()).unwrap_err();

    assert!(matches!(err, GrowthError::Input(InputError::MissingArgument(_))));
}

#[test]
fn test_parallel_json_run() {
    let temp_dir = TempDir::new().unwrap();
    let mut run = options(
        temp_dir.path(),
        "Pepper",
        &["3", "4.5", "7", "9.25"],
        &["2", "3", "5", "8"],
        &["0.2", "0.4", "0.9", "1.6"],
    );
    run.parallel = true;
    run.format = ReportFormat::Json;

    let mut out = Vec::new();
    let charts = GrowthChartApp::new(run).run(&mut out).unwrap();

    assert!(charts_exist(temp_dir.path(), "Pepper"));
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["plant_name"], "Pepper");
    assert_eq!(value["leaf_counts"], serde_json::json!([2, 3, 5, 8]));
    assert_eq!(
        value["charts"]["histogram"].as_str().map(Path::new),
        Some(charts.path(ChartKind::Histogram).as_path())
    );
}

#[test]
fn test_render_failure_suppresses_confirmation() {
    let temp_dir = TempDir::new().unwrap();
    // a regular file blocks the output directory
    let blocked = temp_dir.path().join("blocked");
    std::fs::write(&blocked, b"").unwrap();
    let app = GrowthChartApp::new(options(&blocked, "Tomato", &["1"], &["1"], &["1"]));

    let mut out = Vec::new();
    let err = app.run(&mut out).unwrap_err();

    assert!(matches!(err, GrowthError::Chart(_)));
    let report = String::from_utf8(out).unwrap();
    assert!(report.starts_with("Plant: Tomato"));
    assert!(!report.contains("saved as"));
}

#[test]
fn test_very_large_readings_render() {
    let temp_dir = TempDir::new().unwrap();
    let app = GrowthChartApp::new(options(
        temp_dir.path(),
        "Sequoia",
        &["-1e307", "0", "1e307"],
        &["1", "2", "3"],
        &["-1e307", "0", "1e307"],
    ));

    let mut out = Vec::new();
    app.run(&mut out).unwrap();

    assert!(charts_exist(temp_dir.path(), "Sequoia"));
    assert!(String::from_utf8(out).unwrap().contains("Line plot saved as"));
}

#[test]
fn test_readings_wider_than_an_axis_fail_with_chart_error() {
    let temp_dir = TempDir::new().unwrap();
    let app = GrowthChartApp::new(options(
        temp_dir.path(),
        "Sequoia",
        &["-1e308", "1e308"],
        &["1", "2"],
        &["-1e308", "1e308"],
    ));

    let mut out = Vec::new();
    let err = app.run(&mut out).unwrap_err();

    assert!(matches!(
        err,
        GrowthError::Chart(ChartError::Render {
            kind: ChartKind::Scatter,
            ..
        })
    ));
    assert_eq!(png_count(temp_dir.path()), 0);
    assert!(!String::from_utf8(out).unwrap().contains("saved as"));
}

#[test]
fn test_only_dry_weight_too_wide_stops_at_histogram() {
    let temp_dir = TempDir::new().unwrap();
    let app = GrowthChartApp::new(options(
        temp_dir.path(),
        "Sequoia",
        &["1", "2", "3"],
        &["1", "2", "3"],
        &["-1e308", "0", "1e308"],
    ));

    let err = app.run(Vec::new()).unwrap_err();

    assert!(matches!(
        err,
        GrowthError::Chart(ChartError::Render {
            kind: ChartKind::Histogram,
            ..
        })
    ));
    assert!(temp_dir.path().join("Sequoia_scatter.png").is_file());
    assert!(!temp_dir.path().join("Sequoia_histogram.png").exists());
}
