//! In-memory editing model for a pipeline graph.
//!
//! [`GraphModel`] owns the nodes and edges of one editing session and is the
//! only place either collection is mutated. It maintains two invariants:
//! every edge endpoint names a live node and a port that node currently
//! derives, and every edge runs from an outbound port to an inbound one.
//! Mutations that would break either are rejected with a
//! [`ModelError`](crate::error::ModelError) and leave the model untouched.

pub mod ports;
pub mod types;

use std::collections::HashMap;

use crate::error::ModelError;
use crate::model::ports::{find_port, ports_for, PortDirection, PortSpec};

pub use types::{
    ApiConfig, CompareOp, ConditionConfig, DatabaseConfig, DbOperation, Edge, FilterCondition,
    FilterConfig, HttpMethod, InputConfig, IoType, LlmConfig, Node, NodeConfig, NodeKind,
    OutputConfig, PipelineSnapshot, PortRef, TextConfig, TransformConfig, TransformOp,
};

/// The mutable graph behind an editing session.
#[derive(Debug, Default)]
pub struct GraphModel {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_seq: HashMap<NodeKind, u64>,
    edge_seq: u64,
}

impl GraphModel {
    pub fn new() -> Self {
        GraphModel::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Adds a node for the given config and returns it, freshly assigned a
    /// `<tag>-<n>` id. Counters run per kind and are never reused, so ids
    /// stay unique across the whole session even after removals.
    pub fn add_node(&mut self, config: NodeConfig) -> Node {
        let kind = config.kind();
        let seq = self.node_seq.entry(kind).or_insert(0);
        *seq += 1;
        let node = Node {
            id: format!("{}-{}", kind.tag(), seq),
            config,
        };
        self.nodes.push(node.clone());
        node
    }

    /// Removes a node together with every edge that touches it, returning
    /// both. The cascade is what keeps the live-endpoint invariant: an edge
    /// never outlives either of its nodes.
    pub fn remove_node(&mut self, id: &str) -> Result<(Node, Vec<Edge>), ModelError> {
        let position = self
            .nodes
            .iter()
            .position(|node| node.id == id)
            .ok_or_else(|| ModelError::UnknownNode { node: id.into() })?;
        let node = self.nodes.remove(position);
        let mut detached = Vec::new();
        self.edges.retain(|edge| {
            if edge.touches(id) {
                detached.push(edge.clone());
                false
            } else {
                true
            }
        });
        Ok((node, detached))
    }

    /// Connects an outbound port to an inbound port and returns the new edge,
    /// assigned an `edge-<n>` id.
    ///
    /// Both endpoints are checked before anything is stored: the node must
    /// exist, the handle must name one of its current ports, and the port
    /// must face the right way. An edge duplicating an existing
    /// (source, handle, target, handle) quadruple is refused; the same pair
    /// of nodes may still be connected through different ports. Source and
    /// target may be the same node, which is how the editor expresses a
    /// direct feedback loop; the validator reports it as a cycle.
    pub fn add_edge(&mut self, source: PortRef, target: PortRef) -> Result<Edge, ModelError> {
        self.check_endpoint(&source, PortDirection::Outbound)?;
        self.check_endpoint(&target, PortDirection::Inbound)?;
        if self
            .edges
            .iter()
            .any(|edge| edge.source_ref() == source && edge.target_ref() == target)
        {
            return Err(ModelError::DuplicateEdge { from: source, to: target });
        }
        self.edge_seq += 1;
        let edge = Edge {
            id: format!("edge-{}", self.edge_seq),
            source: source.node,
            source_handle: source.port,
            target: target.node,
            target_handle: target.port,
        };
        self.edges.push(edge.clone());
        Ok(edge)
    }

    pub fn remove_edge(&mut self, id: &str) -> Result<Edge, ModelError> {
        let position = self
            .edges
            .iter()
            .position(|edge| edge.id == id)
            .ok_or_else(|| ModelError::UnknownEdge { edge: id.into() })?;
        Ok(self.edges.remove(position))
    }

    /// Replaces a node's config in place and prunes any edges left without a
    /// port, returning the pruned edges.
    ///
    /// The replacement must be the same kind as the node; a node's kind is
    /// fixed for life. Swap and prune happen as one step, so no observer
    /// ever sees an edge pointing at a port the new config no longer
    /// derives. In practice only Text nodes shed ports this way, when a
    /// `{{variable}}` disappears from the template.
    pub fn update_node_config(
        &mut self,
        id: &str,
        config: NodeConfig,
    ) -> Result<Vec<Edge>, ModelError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|node| node.id == id)
            .ok_or_else(|| ModelError::UnknownNode { node: id.into() })?;
        if node.kind() != config.kind() {
            return Err(ModelError::KindMismatch {
                node: id.into(),
                current: node.kind(),
                replacement: config.kind(),
            });
        }
        node.config = config;
        let ports = ports_for(&node.config);
        let mut pruned = Vec::new();
        self.edges.retain(|edge| {
            if Self::anchored(edge, id, &ports) {
                true
            } else {
                pruned.push(edge.clone());
                false
            }
        });
        Ok(pruned)
    }

    /// Derives the current port list of a node.
    pub fn node_ports(&self, id: &str) -> Result<Vec<PortSpec>, ModelError> {
        let node = self
            .node(id)
            .ok_or_else(|| ModelError::UnknownNode { node: id.into() })?;
        Ok(ports_for(&node.config))
    }

    /// Copies the current nodes and edges into an immutable snapshot for
    /// validation or submission.
    pub fn snapshot(&self) -> PipelineSnapshot {
        PipelineSnapshot {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    fn check_endpoint(&self, endpoint: &PortRef, expected: PortDirection) -> Result<(), ModelError> {
        let node = self.node(&endpoint.node).ok_or_else(|| ModelError::UnknownNode {
            node: endpoint.node.clone(),
        })?;
        let ports = ports_for(&node.config);
        let port = find_port(&ports, &endpoint.port).ok_or_else(|| ModelError::UnknownPort {
            node: endpoint.node.clone(),
            port: endpoint.port.clone(),
        })?;
        if port.direction != expected {
            return Err(ModelError::DirectionMismatch {
                port: endpoint.clone(),
                expected,
            });
        }
        Ok(())
    }

    /// True if the edge's endpoints on `node_id` still resolve against the
    /// node's current ports. Endpoints on other nodes are untouched by a
    /// config update and not re-checked.
    fn anchored(edge: &Edge, node_id: &str, ports: &[PortSpec]) -> bool {
        if edge.source == node_id {
            match find_port(ports, &edge.source_handle) {
                Some(port) if port.direction == PortDirection::Outbound => {}
                _ => return false,
            }
        }
        if edge.target == node_id {
            match find_port(ports, &edge.target_handle) {
                Some(port) if port.direction == PortDirection::Inbound => {}
                _ => return false,
            }
        }
        true
    }
}
