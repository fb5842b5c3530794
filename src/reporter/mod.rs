pub mod csv;
pub mod log;

use crate::rules::Finding;

pub use self::csv::{CsvReporter, CSV_HEADER};
pub use self::log::LogReporter;

/// Output encoding for findings, selected by the CLI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    PlainLog,
    #[default]
    ColorLog,
    Csv,
}

/// Turns one finding into text. Rendering is pure; writing the text to a
/// destination is the caller's job.
pub trait Reporter {
    fn render(&self, finding: &Finding) -> String;
}

pub fn for_format(format: OutputFormat) -> Box<dyn Reporter> {
    match format {
        OutputFormat::PlainLog => Box::new(LogReporter::plain()),
        OutputFormat::ColorLog => Box::new(LogReporter::colored()),
        OutputFormat::Csv => Box::new(CsvReporter),
    }
}
