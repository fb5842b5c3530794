use crate::model::{CidrEntry, PermissionRule};
use serde::{Deserialize, Serialize};

/// Reportable severity of a finding. Overrides are not part of this
/// ordering; they are side-channel markers (see [`Override`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Critical,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Warning => "WARN",
            Severity::Critical => "CRIT",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Operator acknowledgment marker found in a range description. An override
/// suppresses classification for that range unconditionally; `Checked` and
/// `Skip` are distinguished only for audit trails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Override {
    Skip,
    Checked,
}

impl Override {
    /// Detect an override marker in a description. `sgaudit:checked` wins
    /// when both markers are present.
    pub fn detect(description: &str) -> Option<Override> {
        if description.contains("sgaudit:checked") {
            Some(Override::Checked)
        } else if description.contains("sgaudit:skip") {
            Some(Override::Skip)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Override::Skip => "SKIP",
            Override::Checked => "CHCK",
        }
    }
}

impl std::fmt::Display for Override {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A permission rule with its port span resolved, produced once per rule
/// before any per-range evaluation. Keeping this a copy means evaluating one
/// range can never leak state into a sibling range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedRule {
    pub protocol: String,
    pub from_port: i32,
    pub to_port: i32,
}

impl NormalizedRule {
    /// Resolve the rule's port span. Both ports absent means the full range.
    /// Returns `None` for a half-specified span, which callers treat as a
    /// local skip of that rule.
    pub fn from_rule(rule: &PermissionRule) -> Option<Self> {
        let (from_port, to_port) = match (rule.from_port, rule.to_port) {
            (None, None) => (0, 65535),
            (Some(from), Some(to)) => (from, to),
            _ => return None,
        };
        Some(Self {
            protocol: rule.protocol.clone(),
            from_port,
            to_port,
        })
    }

    /// Human-readable port span. The `(-1, -1)` all-traffic sentinel is the
    /// only input labeled `all`; an absent span was already resolved to
    /// `(0, 65535)` and labels as `0-65535`.
    pub fn port_label(&self) -> String {
        if self.from_port == -1 && self.to_port == -1 {
            "all".to_string()
        } else if self.from_port == self.to_port {
            self.from_port.to_string()
        } else {
            format!("{}-{}", self.from_port, self.to_port)
        }
    }

    pub fn spans_full_range(&self) -> bool {
        (self.from_port, self.to_port) == (0, 65535)
            || (self.from_port, self.to_port) == (-1, -1)
    }

    /// Single-port 80 or 443, exempt from the open-to-internet tier.
    pub fn is_single_web_port(&self) -> bool {
        self.from_port == self.to_port && (self.from_port == 80 || self.from_port == 443)
    }
}

/// The specific allow-listed range a finding was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressRange {
    V4(CidrEntry),
    V6(CidrEntry),
}

impl AddressRange {
    pub fn cidr(&self) -> &str {
        match self {
            AddressRange::V4(entry) | AddressRange::V6(entry) => &entry.cidr,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            AddressRange::V4(entry) | AddressRange::V6(entry) => {
                entry.description_or_placeholder()
            }
        }
    }

    /// Whether this is the any-address CIDR for its family.
    pub fn is_any_address(&self) -> bool {
        match self {
            AddressRange::V4(entry) => entry.cidr == "0.0.0.0/0",
            AddressRange::V6(entry) => entry.cidr == "::/0",
        }
    }
}

/// One reportable (rule, address-range) pair. Created by the classifier;
/// `instance_count` is set once by the aggregation step before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub group_id: String,
    pub rule: NormalizedRule,
    pub range: AddressRange,
    pub severity: Severity,
    pub overridden: Option<Override>,
    pub instance_count: usize,
}

impl Finding {
    /// Level label for display: an override marker takes precedence over the
    /// base severity.
    pub fn level_label(&self) -> &'static str {
        match self.overridden {
            Some(marker) => marker.label(),
            None => self.severity.label(),
        }
    }

    pub fn port_label(&self) -> String {
        self.rule.port_label()
    }

    /// Protocol for display. The `-1` all-protocols sentinel gets a
    /// family-specific label; this is cosmetic only.
    pub fn protocol_label(&self) -> &str {
        if self.rule.protocol == "-1" {
            match self.range {
                AddressRange::V4(_) => "all",
                AddressRange::V6(_) => "tcp-udp",
            }
        } else {
            &self.rule.protocol
        }
    }
}

/// Per-run finding counts, for the closing report line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub critical: usize,
    pub warning: usize,
}

impl Summary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        findings
            .iter()
            .fold(Self::default(), |mut summary, finding| {
                match finding.severity {
                    Severity::Critical => summary.critical += 1,
                    Severity::Warning => summary.warning += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.critical + self.warning
    }
}
