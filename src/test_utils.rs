#[cfg(test)]
pub mod fixtures {
    use crate::model::{CidrEntry, InstanceRecord, PermissionRule, SecurityGroupRecord};
    use crate::rules::{AddressRange, Finding, NormalizedRule, Severity};

    pub fn entry(cidr: &str, description: Option<&str>) -> CidrEntry {
        CidrEntry::new(cidr, description)
    }

    pub fn rule(
        protocol: &str,
        from_port: Option<i32>,
        to_port: Option<i32>,
        ipv4_ranges: Vec<CidrEntry>,
    ) -> PermissionRule {
        PermissionRule {
            protocol: protocol.to_string(),
            from_port,
            to_port,
            ipv4_ranges,
            ipv6_ranges: vec![],
        }
    }

    pub fn rule_v6(
        protocol: &str,
        from_port: Option<i32>,
        to_port: Option<i32>,
        ipv6_ranges: Vec<CidrEntry>,
    ) -> PermissionRule {
        PermissionRule {
            protocol: protocol.to_string(),
            from_port,
            to_port,
            ipv4_ranges: vec![],
            ipv6_ranges,
        }
    }

    pub fn group(group_id: &str, permissions: Vec<PermissionRule>) -> SecurityGroupRecord {
        SecurityGroupRecord {
            group_id: group_id.to_string(),
            permissions,
        }
    }

    pub fn instance(instance_id: &str, group_ids: &[&str]) -> InstanceRecord {
        InstanceRecord {
            instance_id: instance_id.to_string(),
            group_ids: group_ids.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// A tcp IPv4 finding with the description placeholder and no usage.
    pub fn finding(
        group_id: &str,
        severity: Severity,
        from_port: i32,
        to_port: i32,
        cidr: &str,
    ) -> Finding {
        Finding {
            group_id: group_id.to_string(),
            rule: NormalizedRule {
                protocol: "tcp".to_string(),
                from_port,
                to_port,
            },
            range: AddressRange::V4(CidrEntry::new(cidr, Some("-"))),
            severity,
            overridden: None,
            instance_count: 0,
        }
    }
}
