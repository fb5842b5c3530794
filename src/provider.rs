//! AWS EC2 provider: fetches security groups and instances and hands them
//! over as plain records. Failures here are fatal to the run; retry policy,
//! if any, belongs to the SDK configuration, not the audit core.

use crate::error::{AuditError, Result};
use crate::model::{CidrEntry, InstanceRecord, PermissionRule, SecurityGroupRecord};
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ec2::types::{IpPermission, IpRange, Ipv6Range};
use std::env;
use tracing::debug;

pub struct Ec2Provider {
    client: aws_sdk_ec2::Client,
}

impl Ec2Provider {
    pub async fn connect(profile: Option<&str>, region: Option<&str>) -> Self {
        let profile = resolve_profile(profile);
        let region = resolve_region(region);
        let config = aws_config::defaults(BehaviorVersion::latest())
            .profile_name(&profile)
            .region(Region::new(region.clone()))
            .load()
            .await;
        debug!(%profile, %region, "initialized EC2 client");
        Self {
            client: aws_sdk_ec2::Client::new(&config),
        }
    }

    /// All security groups in the region, fully materialized across pages.
    pub async fn security_groups(&self) -> Result<Vec<SecurityGroupRecord>> {
        let mut pages = self
            .client
            .describe_security_groups()
            .into_paginator()
            .send();
        let mut groups = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| AuditError::provider("DescribeSecurityGroups", e))?;
            for sg in page.security_groups() {
                groups.push(SecurityGroupRecord {
                    group_id: sg.group_id().unwrap_or("unknown").to_string(),
                    permissions: sg.ip_permissions().iter().map(convert_permission).collect(),
                });
            }
        }
        debug!(count = groups.len(), "fetched security groups");
        Ok(groups)
    }

    /// All instances in the region with their group memberships, flattened
    /// across reservations and pages.
    pub async fn instances(&self) -> Result<Vec<InstanceRecord>> {
        let mut pages = self.client.describe_instances().into_paginator().send();
        let mut instances = Vec::new();
        while let Some(page) = pages.next().await {
            let page = page.map_err(|e| AuditError::provider("DescribeInstances", e))?;
            for reservation in page.reservations() {
                for instance in reservation.instances() {
                    instances.push(InstanceRecord {
                        instance_id: instance.instance_id().unwrap_or("unknown").to_string(),
                        group_ids: instance
                            .security_groups()
                            .iter()
                            .filter_map(|g| g.group_id())
                            .map(str::to_string)
                            .collect(),
                    });
                }
            }
        }
        debug!(count = instances.len(), "fetched instances");
        Ok(instances)
    }
}

fn convert_permission(permission: &IpPermission) -> PermissionRule {
    PermissionRule {
        protocol: permission.ip_protocol().unwrap_or("-1").to_string(),
        from_port: permission.from_port(),
        to_port: permission.to_port(),
        ipv4_ranges: permission.ip_ranges().iter().map(convert_v4).collect(),
        ipv6_ranges: permission.ipv6_ranges().iter().map(convert_v6).collect(),
    }
}

fn convert_v4(range: &IpRange) -> CidrEntry {
    CidrEntry::new(range.cidr_ip().unwrap_or_default(), range.description())
}

fn convert_v6(range: &Ipv6Range) -> CidrEntry {
    CidrEntry::new(range.cidr_ipv6().unwrap_or_default(), range.description())
}

fn resolve_profile(flag: Option<&str>) -> String {
    flag.map(str::to_string)
        .or_else(|| env::var("AWS_DEFAULT_PROFILE").ok())
        .unwrap_or_else(|| "default".to_string())
}

fn resolve_region(flag: Option<&str>) -> String {
    flag.map(str::to_string)
        .or_else(|| env::var("AWS_REGION").ok())
        .unwrap_or_else(|| "us-east-1".to_string())
}
