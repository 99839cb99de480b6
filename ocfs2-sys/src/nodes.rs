// SPDX-License-Identifier: GPL-3.0-only

//! Cluster node listing from `o2cb_ctl -I -t node -o`
//!
//! The tool prints colon-separated rows, optionally preceded by a
//! `#`-prefixed header naming the columns.

use ocfs2_types::{ClusterNode, DEFAULT_NODE_PORT, ProcessRequest};

use crate::{ProcessRunner, Result, SysError, commands};

const DEFAULT_COLUMNS: [&str; 6] = ["name", "cluster", "number", "ip_address", "ip_port", "status"];

pub fn parse_node_listing(output: &str) -> Vec<ClusterNode> {
    let mut columns: Vec<String> = DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect();
    let mut nodes = Vec::new();

    for line in output.lines().map(str::trim) {
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('#') {
            columns = header.split(':').map(|c| c.trim().to_string()).collect();
            continue;
        }

        let mut node = ClusterNode {
            name: String::new(),
            cluster: String::new(),
            number: 0,
            ip_address: String::new(),
            ip_port: DEFAULT_NODE_PORT,
            status: String::new(),
        };

        for (column, value) in columns.iter().zip(line.split(':')) {
            let value = value.trim();
            match column.as_str() {
                "name" => node.name = value.to_string(),
                "cluster" => node.cluster = value.to_string(),
                "number" => node.number = value.parse().unwrap_or_default(),
                "ip_address" => node.ip_address = value.to_string(),
                "ip_port" => node.ip_port = value.parse().unwrap_or(DEFAULT_NODE_PORT),
                "status" => node.status = value.to_string(),
                _ => {}
            }
        }

        if !node.name.is_empty() {
            nodes.push(node);
        }
    }

    nodes.sort_by_key(|node| node.number);
    nodes
}

/// Lists the configured nodes.
pub async fn list_nodes(runner: &dyn ProcessRunner) -> Result<Vec<ClusterNode>> {
    let command = commands::list_nodes();
    let request = ProcessRequest::new(command.clone(), "Nodes", "Reading cluster configuration...");
    let outcome = runner.run(&request).await;

    if let Some(signal) = outcome.signal {
        return Err(SysError::CommandKilled {
            command: command.to_string(),
            signal,
        });
    }
    if !outcome.success {
        return Err(SysError::CommandFailed {
            command: command.to_string(),
            output: outcome.output,
        });
    }

    Ok(parse_node_listing(&outcome.output))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_header() {
        let output = "#name:cluster:number:ip_address:ip_port:status\n\
                      node2:ocfs2:1:10.0.0.2:7777:configured\n\
                      node1:ocfs2:0:10.0.0.1:7777:configured\n";
        let nodes = parse_node_listing(output);

        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].name, "node1");
        assert_eq!(nodes[0].number, 0);
        assert_eq!(nodes[1].ip_address, "10.0.0.2");
        assert_eq!(nodes[1].status, "configured");
    }

    #[test]
    fn header_reorders_columns() {
        let nodes = parse_node_listing("#number:name:ip_port\n3:alpha:8888\n");
        assert_eq!(nodes[0].name, "alpha");
        assert_eq!(nodes[0].number, 3);
        assert_eq!(nodes[0].ip_port, 8888);
        assert_eq!(nodes[0].cluster, "");
    }

    #[test]
    fn default_columns_without_header() {
        let nodes = parse_node_listing("node1:ocfs2:0:10.0.0.1:7777:up\n\n");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].cluster, "ocfs2");
        assert_eq!(nodes[0].status, "up");
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        let nodes = parse_node_listing("node1:ocfs2:0:10.0.0.1:notaport:up\n");
        assert_eq!(nodes[0].ip_port, DEFAULT_NODE_PORT);
    }
}
