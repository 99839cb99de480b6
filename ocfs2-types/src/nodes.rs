// SPDX-License-Identifier: GPL-3.0-only

//! Cluster node records as reported and accepted by `o2cb_ctl`

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Default o2net port
pub const DEFAULT_NODE_PORT: u16 = 7777;

/// A node currently present in the cluster configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterNode {
    pub name: String,
    pub cluster: String,
    pub number: u32,
    pub ip_address: String,
    pub ip_port: u16,
    /// "configured", "active", ... as reported by o2cb_ctl
    pub status: String,
}

/// A node the user wants to add
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDraft {
    pub name: String,
    pub cluster: String,
    pub number: u32,
    pub ip_address: String,
    pub ip_port: u32,
}

impl NodeDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name).map_err(|_| ValidationError::NodeName)?;
        validate_name(&self.cluster).map_err(|_| ValidationError::ClusterName)?;

        if self.ip_address.trim().parse::<Ipv4Addr>().is_err() {
            return Err(ValidationError::IpAddress(self.ip_address.clone()));
        }

        if self.ip_port == 0 || self.ip_port > u32::from(u16::MAX) {
            return Err(ValidationError::IpPort(self.ip_port));
        }

        Ok(())
    }
}

/// Cluster and node names are single tokens.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(ValidationError::NodeName);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NodeDraft {
        NodeDraft {
            name: "node1".to_string(),
            cluster: "ocfs2".to_string(),
            number: 1,
            ip_address: "192.168.1.10".to_string(),
            ip_port: u32::from(DEFAULT_NODE_PORT),
        }
    }

    #[test]
    fn accepts_valid_draft() {
        assert_eq!(draft().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_fields() {
        let mut bad = draft();
        bad.name = "node 1".to_string();
        assert_eq!(bad.validate(), Err(ValidationError::NodeName));

        let mut bad = draft();
        bad.cluster = String::new();
        assert_eq!(bad.validate(), Err(ValidationError::ClusterName));

        let mut bad = draft();
        bad.ip_address = "300.1.1.1".to_string();
        assert!(matches!(bad.validate(), Err(ValidationError::IpAddress(_))));

        let mut bad = draft();
        bad.ip_port = 70000;
        assert_eq!(bad.validate(), Err(ValidationError::IpPort(70000)));
    }
}
