//! Structural validation of pipeline graphs.
//!
//! Answers one question about a submitted pipeline: do its edges form a
//! directed acyclic graph? The verdict also reports how much material was
//! examined so a caller can tell "valid" apart from "empty".

pub mod cycle;
pub mod graph;

use serde::{Deserialize, Serialize};

use crate::model::types::PipelineSnapshot;

pub use graph::PipelineGraph;

/// Outcome of a structural check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Nodes in the submitted document, duplicates and all.
    pub num_nodes: usize,
    /// Edges in the submitted document, whether or not they materialized as
    /// arcs between known nodes.
    pub num_edges: usize,
    /// True when every edge joins declared nodes and the arcs contain no
    /// directed cycle.
    pub is_dag: bool,
}

/// Runs the structural check over a snapshot. An edge naming a node the
/// document never declares fails the check outright, the same way a cycle
/// does.
pub fn verdict(snapshot: &PipelineSnapshot) -> Verdict {
    let projected = PipelineGraph::from_snapshot(snapshot);
    Verdict {
        num_nodes: snapshot.nodes.len(),
        num_edges: snapshot.edges.len(),
        is_dag: projected.foreign_arcs() == 0 && projected.is_acyclic(),
    }
}
