//! Instance-usage aggregation: how many instances reference each security
//! group. Built once per run and treated as read-only afterwards.

use crate::model::InstanceRecord;
use crate::rules::Finding;
use std::collections::HashMap;

/// Summarize the many-to-many instance/group membership to a count per
/// group id. Groups referenced by no instance are simply absent.
pub fn count_by_group(instances: &[InstanceRecord]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for instance in instances {
        for group_id in &instance.group_ids {
            *counts.entry(group_id.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Set `instance_count` on each finding from the usage mapping. Does not
/// affect severity; purely an annotation for rendering.
pub fn annotate(findings: &mut [Finding], counts: &HashMap<String, usize>) {
    for finding in findings {
        finding.instance_count = counts.get(&finding.group_id).copied().unwrap_or(0);
    }
}
