//! The rule classifier: a pure pass over one security group's permission
//! entries, producing a finding per exposed (rule, address-range) pair.

use crate::model::{CidrEntry, SecurityGroupRecord};
use crate::rules::types::{AddressRange, Finding, NormalizedRule, Override, Severity};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    V4,
    V6,
}

impl Family {
    fn any_address(&self) -> &'static str {
        match self {
            Family::V4 => "0.0.0.0/0",
            Family::V6 => "::/0",
        }
    }

    fn wrap(&self, entry: CidrEntry) -> AddressRange {
        match self {
            Family::V4 => AddressRange::V4(entry),
            Family::V6 => AddressRange::V6(entry),
        }
    }
}

/// Classify every address range inside every rule of a security group.
///
/// Pure and total over well-formed input: no I/O, no shared state, and
/// classifying the same record twice yields the same findings. Rules with a
/// half-specified port span are skipped locally rather than aborting the
/// audit. `instance_count` on the returned findings is zero until the
/// aggregation step annotates it.
pub fn classify(group: &SecurityGroupRecord) -> Vec<Finding> {
    let mut findings = Vec::new();
    for rule in &group.permissions {
        let Some(normalized) = NormalizedRule::from_rule(rule) else {
            warn!(
                group = %group.group_id,
                protocol = %rule.protocol,
                "rule has a half-specified port span, skipping"
            );
            continue;
        };
        for entry in &rule.ipv4_ranges {
            findings.extend(evaluate(&group.group_id, &normalized, entry, Family::V4));
        }
        for entry in &rule.ipv6_ranges {
            findings.extend(evaluate(&group.group_id, &normalized, entry, Family::V6));
        }
    }
    findings
}

/// Evaluate one address range against the fixed check order: override
/// detection first (it wins unconditionally and is never revisited), then
/// open-to-internet, then full-port-range. Critical short-circuits the
/// warning check for the same range.
fn evaluate(
    group_id: &str,
    rule: &NormalizedRule,
    entry: &CidrEntry,
    family: Family,
) -> Option<Finding> {
    let description = entry.description_or_placeholder();

    if let Some(marker) = Override::detect(description) {
        debug!(
            group = group_id,
            cidr = %entry.cidr,
            marker = %marker,
            "range acknowledged by operator, suppressed"
        );
        return None;
    }

    let severity = if entry.cidr == family.any_address() && !rule.is_single_web_port() {
        Severity::Critical
    } else if rule.spans_full_range() && matches!(rule.protocol.as_str(), "tcp" | "udp") {
        Severity::Warning
    } else {
        return None;
    };

    Some(Finding {
        group_id: group_id.to_string(),
        rule: rule.clone(),
        range: family.wrap(CidrEntry::new(&entry.cidr, Some(description))),
        severity,
        overridden: None,
        instance_count: 0,
    })
}
