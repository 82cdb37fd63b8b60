use crate::report::{ThresholdReport, format_f64_6};
use crate::thresholds::{ALL_INLIER_THRESHOLD, ThresholderConfig};

pub fn render_report_text(report: &ThresholdReport) -> String {
    let mut out = String::new();

    out.push_str("Decision Score Threshold Report\n");
    out.push_str("===============================\n\n");

    out.push_str(&format!("Tool: {} {}\n", report.tool, report.version));
    out.push_str(&format!("Method: {}\n", describe_config(&report.config)));
    out.push_str(&format!("Scores: {}\n", report.n_scores));
    out.push_str(&format!(
        "Threshold (normalized): {}\n",
        format_f64_6(report.threshold)
    ));
    out.push_str(&format!(
        "Outliers: {} ({})\n",
        report.n_outliers,
        format_f64_6(report.outlier_fraction)
    ));
    if report.threshold >= ALL_INLIER_THRESHOLD {
        out.push_str("Note: no separating cutoff found; all scores labelled inlier\n");
    }

    out.push_str("\nLabels\n");
    out.push_str("index\tlabel\n");
    for (i, label) in report.labels.iter().enumerate() {
        out.push_str(&format!("{}\t{}\n", i, label));
    }
    out
}

fn describe_config(config: &ThresholderConfig) -> String {
    match config {
        ThresholderConfig::Aucp => "aucp".to_string(),
        ThresholderConfig::Decomp { decomp_method } => format!("decomp ({decomp_method})"),
        ThresholderConfig::Fgd => "fgd".to_string(),
        ThresholderConfig::Hist { hist_method, nbins } => match nbins {
            Some(n) => format!("hist ({hist_method}, {n} bins)"),
            None => format!("hist ({hist_method}, adaptive bins)"),
        },
        ThresholderConfig::Mcst { seed } => format!("mcst (seed {seed})"),
    }
}
