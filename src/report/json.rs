use crate::report::ThresholdReport;

pub fn render_report_json(report: &ThresholdReport) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(report)?;
    out.push('\n');
    Ok(out)
}
