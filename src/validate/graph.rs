//! Petgraph projection of a pipeline.
//!
//! Validation does not walk the editor's structures directly. It projects
//! node ids and source/target pairs into a [`DiGraph`] once and runs graph
//! algorithms there. Only connectivity survives the projection: configs,
//! handles and edge ids play no part in whether the pipeline is a DAG.

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};

use crate::model::types::PipelineSnapshot;
use crate::validate::cycle;

/// Directed graph over node ids, ready for structural checks.
#[derive(Debug)]
pub struct PipelineGraph {
    graph: DiGraph<String, ()>,
    indices: HashMap<String, NodeIndex>,
    foreign_arcs: usize,
}

impl PipelineGraph {
    /// Projects a model snapshot. Snapshot edges always join live nodes, so
    /// every one of them materializes as an arc.
    pub fn from_snapshot(snapshot: &PipelineSnapshot) -> Self {
        Self::from_parts(
            snapshot.nodes.iter().map(|node| node.id.as_str()),
            snapshot
                .edges
                .iter()
                .map(|edge| (edge.source.as_str(), edge.target.as_str())),
        )
    }

    /// Builds the graph from bare ids and (source, target) pairs.
    ///
    /// Documents from outside the model get no guarantees: a repeated node
    /// id registers a single vertex, and a pair naming a node that was never
    /// declared is tallied as foreign instead of materializing. The arcs
    /// are the connectivity actually present among the declared nodes.
    pub fn from_parts<'a>(
        nodes: impl IntoIterator<Item = &'a str>,
        edges: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let mut projected = PipelineGraph {
            graph: DiGraph::new(),
            indices: HashMap::new(),
            foreign_arcs: 0,
        };
        for id in nodes {
            if !projected.indices.contains_key(id) {
                let index = projected.graph.add_node(id.to_string());
                projected.indices.insert(id.to_string(), index);
            }
        }
        for (source, target) in edges {
            match (projected.indices.get(source), projected.indices.get(target)) {
                (Some(&from), Some(&to)) => {
                    projected.graph.add_edge(from, to, ());
                }
                _ => projected.foreign_arcs += 1,
            }
        }
        projected
    }

    /// True when the projected arcs contain no directed cycle. Trivially
    /// true for an empty or edge-free pipeline. Foreign pairs carry no arc
    /// and are judged separately, via [`foreign_arcs`](Self::foreign_arcs).
    pub fn is_acyclic(&self) -> bool {
        cycle::is_acyclic(&self.graph)
    }

    /// Pairs that named a node never declared in the document. They do not
    /// materialize as arcs, but a pipeline that references nodes it does not
    /// contain is not a well-formed DAG over its own nodes.
    pub fn foreign_arcs(&self) -> usize {
        self.foreign_arcs
    }

    /// Distinct vertices in the projection.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Arcs that materialized, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.indices.contains_key(node_id)
    }
}
