mod classifier;
mod types;

pub use classifier::classify;
pub use types::{AddressRange, Finding, NormalizedRule, Override, Severity, Summary};
