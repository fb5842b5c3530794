use crate::reporter::Reporter;
use crate::rules::Finding;

/// Column names, emitted once per run by the output driver.
pub const CSV_HEADER: &str =
    "Level,Instance Count,Group ID,Port Range,Protocol,IP CIDR,Description";

/// Renders a finding as one CSV row with exactly seven fields, in the same
/// order as [`CSV_HEADER`]. Quoting follows standard CSV rules, so
/// descriptions may carry commas, quotes, or override markers verbatim.
pub struct CsvReporter;

impl Reporter for CsvReporter {
    fn render(&self, finding: &Finding) -> String {
        let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());
        // Writes go to an in-memory buffer and cannot fail.
        let _ = writer.write_record([
            finding.level_label().to_string(),
            finding.instance_count.to_string(),
            finding.group_id.clone(),
            finding.port_label(),
            finding.protocol_label().to_string(),
            finding.range.cidr().to_string(),
            finding.range.description().to_string(),
        ]);
        let bytes = writer.into_inner().unwrap_or_default();
        String::from_utf8_lossy(&bytes)
            .trim_end_matches(['\r', '\n'])
            .to_string()
    }
}
