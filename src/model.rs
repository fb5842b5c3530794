//! Plain-data records for security groups and instances, as handed over by
//! the provider. The classifier never touches SDK types directly.

use serde::{Deserialize, Serialize};

/// One security group with its inbound permission entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityGroupRecord {
    pub group_id: String,
    pub permissions: Vec<PermissionRule>,
}

/// One inbound rule entry of a security group.
///
/// `protocol` is the transport name (`tcp`, `udp`, ...) or the `-1` sentinel
/// meaning all protocols. Both ports absent means the full port range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionRule {
    pub protocol: String,
    pub from_port: Option<i32>,
    pub to_port: Option<i32>,
    pub ipv4_ranges: Vec<CidrEntry>,
    pub ipv6_ranges: Vec<CidrEntry>,
}

/// One allow-listed CIDR inside a rule, with its operator-authored
/// description (used for override annotations).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CidrEntry {
    pub cidr: String,
    pub description: Option<String>,
}

impl CidrEntry {
    pub fn new(cidr: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            cidr: cidr.into(),
            description: description.map(str::to_string),
        }
    }

    /// Description with the absent case normalized to the `-` placeholder.
    pub fn description_or_placeholder(&self) -> &str {
        self.description.as_deref().unwrap_or("-")
    }
}

/// One compute instance and the security groups it is a member of.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceRecord {
    pub instance_id: String,
    pub group_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_placeholder() {
        let entry = CidrEntry::new("0.0.0.0/0", None);
        assert_eq!(entry.description_or_placeholder(), "-");

        let entry = CidrEntry::new("0.0.0.0/0", Some("ssh from office"));
        assert_eq!(entry.description_or_placeholder(), "ssh from office");
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let record = SecurityGroupRecord {
            group_id: "sg-0123456789abcdef0".to_string(),
            permissions: vec![PermissionRule {
                protocol: "tcp".to_string(),
                from_port: Some(22),
                to_port: Some(22),
                ipv4_ranges: vec![CidrEntry::new("10.0.0.0/16", Some("vpn"))],
                ipv6_ranges: vec![],
            }],
        };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: SecurityGroupRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
