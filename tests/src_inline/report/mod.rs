use super::json::render_report_json;
use super::text::render_report_text;
use super::*;
use crate::thresholds::HistMethodKind;

fn sample_report() -> ThresholdReport {
    let config = ThresholderConfig::Hist {
        hist_method: HistMethodKind::Otsu,
        nbins: Some(4),
    };
    ThresholdReport::new(&config, 0.125, vec![0, 0, 0, 1, 1, 0, 1])
}

#[test]
fn test_report_counts() {
    let report = sample_report();
    assert_eq!(report.method, "hist");
    assert_eq!(report.n_scores, 7);
    assert_eq!(report.n_outliers, 3);
    assert!((report.outlier_fraction - 3.0 / 7.0).abs() < 1e-12);
    assert_eq!(fraction(0, 0), 0.0);
    assert_eq!(format_f64_6(0.125), "0.125000");
}

#[test]
fn test_text_render() {
    let text = render_report_text(&sample_report());
    assert!(text.contains("Method: hist (otsu, 4 bins)"));
    assert!(text.contains("Threshold (normalized): 0.125000"));
    assert!(text.contains("Outliers: 3 (0.428571)"));
    assert!(text.contains("3\t1\n"));
    assert!(!text.contains("no separating cutoff"));

    let none = ThresholdReport::new(&ThresholderConfig::Fgd, 1.1, vec![0, 0]);
    assert!(render_report_text(&none).contains("no separating cutoff"));
}

#[test]
fn test_json_render() {
    let json = render_report_json(&sample_report()).unwrap();
    assert!(json.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["method"], "hist");
    assert_eq!(value["config"]["method"], "hist");
    assert_eq!(value["config"]["hist_method"], "otsu");
    assert_eq!(value["n_outliers"], 3);
    assert_eq!(value["labels"].as_array().unwrap().len(), 7);
}
