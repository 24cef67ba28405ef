use std::time::Duration;

use anscombe_regression::{run, write_report, DatasetReport, Fit, ReportConfig, ANSCOMBE_QUARTET};

#[test]
fn one_line_per_dataset_after_header() {
    let reports = run(&ANSCOMBE_QUARTET).unwrap();
    let mut out = Vec::new();
    write_report(&mut out, &ReportConfig::default(), &reports).unwrap();
    let text = String::from_utf8(out).unwrap();

    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("Linear regression results for each dataset:")
    );
    for (i, line) in lines.enumerate() {
        let prefix = format!("Dataset {}: Slope = ", i + 1);
        assert!(line.starts_with(&prefix), "unexpected line: {line}");
        assert!(line.contains(", Calculation Time = "), "unexpected line: {line}");
    }
    assert_eq!(text.lines().count(), 1 + ANSCOMBE_QUARTET.len());
}

#[test]
fn custom_precision_and_header() {
    let report = DatasetReport {
        index: 1,
        fit: Fit {
            slope: 0.500_090_9,
            intercept: 3.000_090_9,
        },
        elapsed: Duration::from_nanos(1500),
    };
    let mut out = Vec::new();
    write_report(&mut out, &ReportConfig::new(3, "results"), &[report]).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "results\nDataset 1: Slope = 0.500, Intercept = 3.000, Calculation Time = 1.5µs\n"
    );
}

#[test]
fn report_serializes_to_json() {
    let report = DatasetReport {
        index: 4,
        fit: Fit {
            slope: 0.5,
            intercept: 3.0,
        },
        elapsed: Duration::from_millis(1),
    };
    let json: serde_json::Value = serde_json::to_value(report).unwrap();
    assert_eq!(json["index"], 4);
    assert_eq!(json["fit"]["slope"], 0.5);
    assert_eq!(json["fit"]["intercept"], 3.0);
}
