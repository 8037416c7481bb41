//! Typed model of the pipeline graph exchanged with the visual editor.
//!
//! These types are the serde target for the editor's graph JSON. A node
//! carries a `type` tag and a kind-specific `data` payload; an edge uses the
//! flat source/sourceHandle/target/targetHandle shape. Presentational state
//! the editor attaches (positions, styling, sizes) is ignored on input and
//! never stored here.

use serde::{Deserialize, Serialize};

// =============================================================================
// NODE: id plus a tagged union over the nine node kinds
// =============================================================================

/// A typed unit in the pipeline graph.
///
/// The id is assigned once by [`GraphModel::add_node`](crate::model::GraphModel::add_node)
/// and never changes; the kind is fixed by the config variant. Ports are not
/// stored; they are derived from the config on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(flatten)]
    pub config: NodeConfig,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        self.config.kind()
    }
}

/// Kind-specific configuration, tagged the way the editor serializes nodes:
/// `{"type": "<tag>", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum NodeConfig {
    #[serde(rename = "customInput")]
    Input(InputConfig),
    #[serde(rename = "customOutput")]
    Output(OutputConfig),
    #[serde(rename = "text")]
    Text(TextConfig),
    #[serde(rename = "llm")]
    Llm(LlmConfig),
    #[serde(rename = "filter")]
    Filter(FilterConfig),
    #[serde(rename = "transform")]
    Transform(TransformConfig),
    #[serde(rename = "database")]
    Database(DatabaseConfig),
    #[serde(rename = "api")]
    Api(ApiConfig),
    #[serde(rename = "condition")]
    Condition(ConditionConfig),
}

impl NodeConfig {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeConfig::Input(_) => NodeKind::Input,
            NodeConfig::Output(_) => NodeKind::Output,
            NodeConfig::Text(_) => NodeKind::Text,
            NodeConfig::Llm(_) => NodeKind::Llm,
            NodeConfig::Filter(_) => NodeKind::Filter,
            NodeConfig::Transform(_) => NodeKind::Transform,
            NodeConfig::Database(_) => NodeKind::Database,
            NodeConfig::Api(_) => NodeKind::Api,
            NodeConfig::Condition(_) => NodeKind::Condition,
        }
    }
}

/// The closed set of node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Input,
    Output,
    Text,
    Llm,
    Filter,
    Transform,
    Database,
    Api,
    Condition,
}

impl NodeKind {
    /// Wire tag used by the editor, also the prefix of allocated node ids.
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Input => "customInput",
            NodeKind::Output => "customOutput",
            NodeKind::Text => "text",
            NodeKind::Llm => "llm",
            NodeKind::Filter => "filter",
            NodeKind::Transform => "transform",
            NodeKind::Database => "database",
            NodeKind::Api => "api",
            NodeKind::Condition => "condition",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

// =============================================================================
// PER-KIND CONFIGS
// =============================================================================

/// Value shape selector shared by Input and Output nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IoType {
    #[default]
    Text,
    File,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InputConfig {
    pub input_name: String,
    pub input_type: IoType,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutputConfig {
    pub output_name: String,
    pub output_type: IoType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub text: String,
}

impl Default for TextConfig {
    /// New Text nodes start with a single `{{input}}` variable, as the
    /// editor seeds them.
    fn default() -> Self {
        TextConfig {
            text: "{{input}}".into(),
        }
    }
}

/// The LLM node has no editable configuration; its ports are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LlmConfig {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub condition: FilterCondition,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterCondition {
    #[default]
    Contains,
    Equals,
    StartsWith,
    EndsWith,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub operation: TransformOp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformOp {
    #[default]
    Uppercase,
    Lowercase,
    Trim,
    Reverse,
    /// Parse the incoming string as JSON.
    Json,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub operation: DbOperation,
    pub table: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DbOperation {
    #[default]
    Query,
    Insert,
    Update,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub method: HttpMethod,
    pub endpoint: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConditionConfig {
    pub operator: CompareOp,
    pub compare_value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CompareOp {
    #[default]
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<=")]
    Le,
}

// =============================================================================
// EDGES
// =============================================================================

/// A directed connection from an outbound port to an inbound port.
///
/// Handles are node-local port ids and are mandatory in the model: the
/// `GraphModel` guarantees both endpoints exist for as long as the edge does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub source_handle: String,
    pub target: String,
    pub target_handle: String,
}

impl Edge {
    pub fn source_ref(&self) -> PortRef {
        PortRef::new(&self.source, &self.source_handle)
    }

    pub fn target_ref(&self) -> PortRef {
        PortRef::new(&self.target, &self.target_handle)
    }

    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}

/// A (node, port) endpoint reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortRef {
    pub node: String,
    pub port: String,
}

impl PortRef {
    pub fn new(node: impl Into<String>, port: impl Into<String>) -> Self {
        PortRef {
            node: node.into(),
            port: port.into(),
        }
    }
}

impl std::fmt::Display for PortRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.node, self.port)
    }
}

// =============================================================================
// SNAPSHOT
// =============================================================================

/// An immutable point-in-time copy of the graph's nodes and edges, safe to
/// validate or submit without racing the editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}
