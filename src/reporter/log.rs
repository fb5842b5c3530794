use crate::reporter::Reporter;
use crate::rules::{Finding, Override, Severity};
use colored::{ColoredString, Colorize};

/// Renders a finding as one log line, optionally colorized:
///
/// ```text
/// [CRIT] [   2] [sg-0123456789abcdef0] 22/tcp <- 0.0.0.0/0 [-]
/// ```
pub struct LogReporter {
    color: bool,
}

impl LogReporter {
    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn colored() -> Self {
        Self { color: true }
    }

    /// Color by level: critical red, warning yellow; an override marker, if
    /// still present on the entry, takes the foreground (skip cyan, checked
    /// green). Lines for findings on groups in active use are bolded.
    fn paint(&self, finding: &Finding, line: String) -> String {
        if !self.color {
            return line;
        }
        let mut painted: ColoredString = match finding.overridden {
            Some(Override::Skip) => line.cyan(),
            Some(Override::Checked) => line.green(),
            None => match finding.severity {
                Severity::Critical => line.red(),
                Severity::Warning => line.yellow(),
            },
        };
        if finding.instance_count > 0 {
            painted = painted.bold();
        }
        painted.to_string()
    }
}

impl Reporter for LogReporter {
    fn render(&self, finding: &Finding) -> String {
        let line = format!(
            "[{}] [{:4}] [{:<20}] {}/{} <- {} [{}]",
            finding.level_label(),
            finding.instance_count,
            finding.group_id,
            finding.port_label(),
            finding.protocol_label(),
            finding.range.cidr(),
            finding.range.description(),
        );
        self.paint(finding, line)
    }
}
