use super::RoiReport;

/// Pretty-printed JSON for a report.
pub fn generate_json(report: &RoiReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
