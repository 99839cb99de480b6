// SPDX-License-Identifier: GPL-3.0-only

//! Cluster node configuration through o2cb_ctl

use ocfs2_sys::{commands, nodes};
use ocfs2_types::{ClusterNode, NodeDraft, ProcessRequest, ValidationError, validate_name};

use crate::error::check_outcome;
use crate::{ActionError, ActionOutcome, Services};

pub async fn list_nodes(services: &Services) -> Result<Vec<ClusterNode>, ActionError> {
    Ok(nodes::list_nodes(services.runner.as_ref()).await?)
}

async fn run_o2cb(
    services: &Services,
    request: ProcessRequest,
    action: String,
) -> Result<ActionOutcome, ActionError> {
    let outcome = services.runner.run(&request).await;

    check_outcome(
        outcome,
        |output| ActionError::ClusterFailed {
            action: action.clone(),
            output,
        },
        || ActionError::ClusterKilled {
            action: action.clone(),
        },
    )
}

pub async fn create_cluster(services: &Services, name: &str) -> Result<ActionOutcome, ActionError> {
    validate_name(name).map_err(|_| ValidationError::ClusterName)?;

    let request = ProcessRequest::new(
        commands::create_cluster(name),
        "Cluster",
        "Creating cluster...",
    );
    run_o2cb(services, request, format!("create cluster {name}")).await
}

pub fn prepare_add_node(draft: &NodeDraft) -> Result<ProcessRequest, ActionError> {
    draft.validate()?;
    Ok(ProcessRequest::new(commands::add_node(draft), "Add Node", "Adding node..."))
}

pub fn prepare_remove_node(name: &str) -> Result<ProcessRequest, ActionError> {
    validate_name(name)?;
    Ok(ProcessRequest::new(commands::remove_node(name), "Remove Node", "Removing node..."))
}

/// Adds a node, creating its cluster first when no existing node belongs to it.
pub async fn add_node(
    services: &Services,
    draft: &NodeDraft,
    existing: &[ClusterNode],
) -> Result<ActionOutcome, ActionError> {
    let request = prepare_add_node(draft)?;

    if !existing.iter().any(|node| node.cluster == draft.cluster) {
        tracing::info!(cluster = %draft.cluster, "creating cluster before adding the first node");
        create_cluster(services, &draft.cluster).await?;
    }

    run_o2cb(services, request, format!("add node {}", draft.name)).await
}

pub async fn remove_node(services: &Services, name: &str) -> Result<ActionOutcome, ActionError> {
    let request = prepare_remove_node(name)?;
    run_o2cb(services, request, format!("remove node {name}")).await
}

#[cfg(test)]
mod tests {
    use ocfs2_types::{DEFAULT_NODE_PORT, ProcessOutcome};

    use super::*;
    use crate::testing::services;

    fn draft() -> NodeDraft {
        NodeDraft {
            name: "node2".to_string(),
            cluster: "ocfs2".to_string(),
            number: 1,
            ip_address: "10.0.0.2".to_string(),
            ip_port: u32::from(DEFAULT_NODE_PORT),
        }
    }

    fn node1() -> ClusterNode {
        ClusterNode {
            name: "node1".to_string(),
            cluster: "ocfs2".to_string(),
            number: 0,
            ip_address: "10.0.0.1".to_string(),
            ip_port: DEFAULT_NODE_PORT,
            status: "configured".to_string(),
        }
    }

    #[tokio::test]
    async fn lists_nodes() {
        let (services, runner, _source) = services();
        runner.push_outcome(ProcessOutcome::exited(0, "node1:ocfs2:0:10.0.0.1:7777:configured"));

        let nodes = list_nodes(&services).await.expect("listed");
        assert_eq!(nodes, vec![node1()]);
        assert_eq!(runner.take_calls(), vec![vec!["o2cb_ctl", "-I", "-t", "node", "-o"]]);
    }

    #[tokio::test]
    async fn first_node_creates_cluster() {
        let (services, runner, _source) = services();

        add_node(&services, &draft(), &[]).await.expect("added");
        let calls = runner.take_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], vec!["o2cb_ctl", "-C", "-n", "ocfs2", "-t", "cluster", "-i"]);
        assert_eq!(
            calls[1],
            vec![
                "o2cb_ctl", "-C", "-n", "node2", "-t", "node", "-a", "number=1", "-a",
                "ip_address=10.0.0.2", "-a", "ip_port=7777", "-a", "cluster=ocfs2"
            ]
        );
    }

    #[tokio::test]
    async fn existing_cluster_is_reused() {
        let (services, runner, _source) = services();

        add_node(&services, &draft(), &[node1()]).await.expect("added");
        assert_eq!(runner.take_calls().len(), 1);
    }

    #[tokio::test]
    async fn invalid_draft_runs_nothing() {
        let (services, runner, _source) = services();
        let mut bad = draft();
        bad.ip_address = "not-an-ip".to_string();

        let err = add_node(&services, &bad, &[]).await.expect_err("invalid");
        assert!(matches!(err, ActionError::InvalidInput(ValidationError::IpAddress(_))));
        assert!(runner.take_calls().is_empty());
    }

    #[tokio::test]
    async fn remove_failure_text() {
        let (services, runner, _source) = services();
        runner.push_outcome(ProcessOutcome::exited(1, "node is active"));

        let err = remove_node(&services, "node1").await.expect_err("failed");
        assert_eq!(err.to_string(), "node is active: Could not remove node node1");
        assert_eq!(runner.take_calls(), vec![vec!["o2cb_ctl", "-D", "-n", "node1"]]);
    }
}
