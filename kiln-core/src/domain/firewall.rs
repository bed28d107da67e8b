//! Firewall rule domain types
//!
//! A build that needs SSH access to a fresh instance opens a temporary
//! firewall rule for the duration of the build. The rule specification is
//! built once per step execution, submitted to the cloud driver, and
//! discarded; only its deterministic name is kept for later removal.

use serde::{Deserialize, Serialize};

/// Suffix appended to the instance name to form the temporary rule name.
pub const TEMPORARY_RULE_SUFFIX: &str = "-temporary-packer";

/// Derives the name of the temporary firewall rule for an instance.
///
/// The name is deterministic: instance name plus a fixed suffix, with no
/// randomness and no collision avoidance beyond the convention itself. A
/// later build of the same instance therefore targets the same rule name,
/// which is what lets it pick up after an earlier run that failed to
/// clean up.
pub fn temporary_rule_name(instance_name: &str) -> String {
    format!("{}{}", instance_name, TEMPORARY_RULE_SUFFIX)
}

/// Firewall rule specification
///
/// Structure shared between the builder (constructs and submits) and the
/// cloud driver (translates into a provider API call). Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirewallRule {
    pub name: String,
    pub description: String,
    pub network: String,
    pub allowed: FirewallAllowed,
    pub source_ranges: Vec<String>,
    pub target_tags: Vec<String>,
}

/// Traffic permitted by a firewall rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirewallAllowed {
    pub ip_protocol: String,
    pub ports: Vec<String>,
}

impl FirewallRule {
    /// Builds the temporary SSH rule for an instance.
    ///
    /// The rule allows TCP port 22 from any address. This is intentionally
    /// permissive: the rule only exists for the duration of the build and
    /// only applies to instances carrying the given target tags.
    pub fn temporary_ssh(instance_name: &str, network: &str, target_tags: &[String]) -> Self {
        Self {
            name: temporary_rule_name(instance_name),
            description: "Temporary firewall rule created for an image build".to_string(),
            network: network.to_string(),
            allowed: FirewallAllowed {
                ip_protocol: "tcp".to_string(),
                ports: vec!["22".to_string()],
            },
            source_ranges: vec!["0.0.0.0/0".to_string()],
            target_tags: target_tags.to_vec(),
        }
    }
}
