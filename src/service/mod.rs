//! The JSON boundary the editor talks to.
//!
//! Requests arrive as the editor's own document shape: nodes and edges with
//! whatever presentational baggage the canvas attached. Everything beyond
//! ids and endpoints is ignored rather than rejected; a missing `nodes` or
//! `edges` array reads as empty. Malformed JSON is the one thing refused,
//! at deserialization, before any analysis runs.

use serde::Deserialize;

use crate::validate::{PipelineGraph, Verdict};

/// A submitted pipeline document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineRequest {
    #[serde(default)]
    pub nodes: Vec<NodeDescriptor>,
    #[serde(default)]
    pub edges: Vec<EdgeDescriptor>,
}

/// Only the id matters to the structural check; type tags, configs and
/// canvas positions ride along unread.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeDescriptor {
    pub id: String,
}

/// Connectivity of one submitted edge. Handles are accepted in whatever
/// form the editor sends, null included, but cycles are a matter of which
/// nodes connect, not through which ports, so they go unread too.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeDescriptor {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub source_handle: Option<String>,
    #[serde(default)]
    pub target_handle: Option<String>,
}

/// Counts the submitted material and checks its structure. A document whose
/// edges name nodes it never declares fails the DAG check just as a cyclic
/// one does; the counts still report everything as submitted.
pub fn analyze(request: &PipelineRequest) -> Verdict {
    let projected = PipelineGraph::from_parts(
        request.nodes.iter().map(|node| node.id.as_str()),
        request
            .edges
            .iter()
            .map(|edge| (edge.source.as_str(), edge.target.as_str())),
    );
    Verdict {
        num_nodes: request.nodes.len(),
        num_edges: request.edges.len(),
        is_dag: projected.foreign_arcs() == 0 && projected.is_acyclic(),
    }
}

/// Parses a JSON document and analyzes it in one step.
pub fn analyze_json(input: &str) -> Result<Verdict, serde_json::Error> {
    let request: PipelineRequest = serde_json::from_str(input)?;
    Ok(analyze(&request))
}
