//! WASM entry points for browser use.

use wasm_bindgen::prelude::*;

use crate::model::ports::{ports_for, PortSpec};
use crate::model::types::Node;
use crate::validate::Verdict;

/// Analyze a pipeline JSON document: count nodes and edges, check for cycles.
/// Returns `{status: "ok", num_nodes, num_edges, is_dag}` or
/// `{status: "error", error}`.
#[wasm_bindgen]
pub fn analyze_pipeline(json: &str) -> JsValue {
    let result = analyze_pipeline_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn analyze_pipeline_inner(json: &str) -> AnalysisDto {
    match crate::service::analyze_json(json) {
        Ok(verdict) => AnalysisDto::Ok(verdict),
        Err(e) => AnalysisDto::Error {
            error: format!("Failed to parse pipeline JSON: {}", e),
        },
    }
}

/// Derive the port list for a single node JSON, for the editor to render
/// handles from. Returns `{status: "ok", ports: [...]}` or
/// `{status: "error", error}`.
#[wasm_bindgen]
pub fn node_ports(node_json: &str) -> JsValue {
    let result = node_ports_inner(node_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn node_ports_inner(node_json: &str) -> PortsDto {
    match serde_json::from_str::<Node>(node_json) {
        Ok(node) => PortsDto::Ok {
            ports: ports_for(&node.config),
        },
        Err(e) => PortsDto::Error {
            error: format!("Failed to parse node JSON: {}", e),
        },
    }
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum AnalysisDto {
    #[serde(rename = "ok")]
    Ok(Verdict),
    #[serde(rename = "error")]
    Error { error: String },
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum PortsDto {
    #[serde(rename = "ok")]
    Ok { ports: Vec<PortSpec> },
    #[serde(rename = "error")]
    Error { error: String },
}
