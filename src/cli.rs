use crate::reporter::OutputFormat;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "sg-audit",
    version,
    about = "Audit AWS security groups for rules open to the internet",
    long_about = "sg-audit inspects every inbound rule of every security group in a \
region and flags ranges open to the internet (critical) or exposing the full \
port range to a single address (warning). Annotate a rule's description with \
sgaudit:checked or sgaudit:skip to acknowledge accepted risk."
)]
pub struct Cli {
    /// AWS profile to use
    #[arg(short, long)]
    pub profile: Option<String>,

    /// AWS region to use
    #[arg(short, long)]
    pub region: Option<String>,

    /// Disable colorized log output
    #[arg(long)]
    pub no_color: bool,

    /// Emit findings as CSV rows instead of log lines
    #[arg(long)]
    pub csv: bool,
}

impl Cli {
    /// CSV wins over the color toggle; otherwise color is the default for
    /// log output.
    pub fn output_format(&self) -> OutputFormat {
        if self.csv {
            OutputFormat::Csv
        } else if self.no_color {
            OutputFormat::PlainLog
        } else {
            OutputFormat::ColorLog
        }
    }
}
