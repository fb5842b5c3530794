pub mod aggregator;
pub mod cli;
pub mod error;
pub mod model;
pub mod provider;
pub mod reporter;
pub mod rules;
pub mod run;

#[cfg(test)]
pub mod test_utils;

pub use cli::Cli;
pub use error::{AuditError, Result};
pub use model::{CidrEntry, InstanceRecord, PermissionRule, SecurityGroupRecord};
pub use provider::Ec2Provider;
pub use reporter::{CsvReporter, LogReporter, OutputFormat, Reporter, CSV_HEADER};
pub use rules::{classify, AddressRange, Finding, NormalizedRule, Override, Severity, Summary};
