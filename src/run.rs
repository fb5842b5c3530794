//! Orchestration: aggregate usage once, then classify, annotate, and render
//! each group in a single synchronous pass over an injected writer.

use crate::aggregator;
use crate::error::Result;
use crate::model::{InstanceRecord, SecurityGroupRecord};
use crate::reporter::{self, OutputFormat, CSV_HEADER};
use crate::rules::{classify, Finding, Summary};
use std::io::Write;
use tracing::debug;

/// Audit every group and write rendered findings to `out`.
///
/// CSV mode writes the header line first and nothing but rows after it; log
/// mode brackets the findings with the count lines the CLI contract
/// promises. Returns the per-run summary.
pub fn audit_all(
    groups: &[SecurityGroupRecord],
    instances: &[InstanceRecord],
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<Summary> {
    // Built once, read-only for the remainder of the run.
    let counts = aggregator::count_by_group(instances);
    let reporter = reporter::for_format(format);
    let csv = format == OutputFormat::Csv;

    if csv {
        writeln!(out, "{CSV_HEADER}")?;
    } else {
        writeln!(out, "Got {} Security Groups, starting audit...", groups.len())?;
    }

    let mut all: Vec<Finding> = Vec::new();
    for group in groups {
        let mut findings = classify(group);
        aggregator::annotate(&mut findings, &counts);
        for finding in &findings {
            writeln!(out, "{}", reporter.render(finding))?;
        }
        all.extend(findings);
    }

    if !csv {
        writeln!(out, "Audited {} Security Groups", groups.len())?;
    }

    let summary = Summary::from_findings(&all);
    debug!(
        critical = summary.critical,
        warning = summary.warning,
        "audit complete"
    );
    Ok(summary)
}
