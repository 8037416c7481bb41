//! Port derivation.
//!
//! Ports are never stored on a node. They are a pure function of the node's
//! config: fixed tables for most kinds, and a scan over `{{variable}}`
//! references for Text nodes. Deriving on demand means a config update can
//! never leave a stale port list behind.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::types::NodeConfig;

/// Which way data flows through a port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    /// Data flows into the node; a valid edge target.
    Inbound,
    /// Data flows out of the node; a valid edge source.
    Outbound,
}

impl std::fmt::Display for PortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PortDirection::Inbound => write!(f, "inbound"),
            PortDirection::Outbound => write!(f, "outbound"),
        }
    }
}

/// Extra meaning a port carries beyond its direction. Most ports have none;
/// roles mark the ones an editor treats specially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortRole {
    /// Inbound port that exists because a Text template references the
    /// variable of the same name.
    Variable,
    /// One of a set of alternative outputs, only one of which fires
    /// (filter match/nomatch, condition true/false).
    Branch,
    /// Error output of a fallible call.
    Error,
}

/// A single connection point on a node. Ids are node-local: two nodes may
/// both expose an `input` port without clashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortSpec {
    pub id: String,
    pub direction: PortDirection,
    pub role: Option<PortRole>,
}

impl PortSpec {
    pub fn inbound(id: impl Into<String>) -> Self {
        PortSpec {
            id: id.into(),
            direction: PortDirection::Inbound,
            role: None,
        }
    }

    pub fn outbound(id: impl Into<String>) -> Self {
        PortSpec {
            id: id.into(),
            direction: PortDirection::Outbound,
            role: None,
        }
    }

    pub fn with_role(mut self, role: PortRole) -> Self {
        self.role = Some(role);
        self
    }
}

/// Derives the full port list for a node config.
///
/// Order mirrors the editor's handle lists. The fixed kinds list inbound
/// ports before outbound ones; Text leads with its `output` port, then one
/// inbound port per distinct `{{variable}}` in first-occurrence order.
pub fn ports_for(config: &NodeConfig) -> Vec<PortSpec> {
    match config {
        NodeConfig::Input(_) => vec![PortSpec::outbound("value")],
        NodeConfig::Output(_) => vec![PortSpec::inbound("value")],
        NodeConfig::Text(text) => {
            let mut ports = vec![PortSpec::outbound("output")];
            ports.extend(
                template_variables(&text.text)
                    .into_iter()
                    .map(|variable| PortSpec::inbound(variable).with_role(PortRole::Variable)),
            );
            ports
        }
        NodeConfig::Llm(_) => vec![
            PortSpec::inbound("system"),
            PortSpec::inbound("prompt"),
            PortSpec::outbound("response"),
        ],
        NodeConfig::Filter(_) => vec![
            PortSpec::inbound("input"),
            PortSpec::outbound("match").with_role(PortRole::Branch),
            PortSpec::outbound("nomatch").with_role(PortRole::Branch),
        ],
        NodeConfig::Transform(_) => vec![
            PortSpec::inbound("input"),
            PortSpec::outbound("output"),
        ],
        NodeConfig::Database(_) => vec![
            PortSpec::inbound("query"),
            PortSpec::inbound("params"),
            PortSpec::outbound("result"),
        ],
        NodeConfig::Api(_) => vec![
            PortSpec::inbound("headers"),
            PortSpec::inbound("body"),
            PortSpec::outbound("response"),
            PortSpec::outbound("error").with_role(PortRole::Error),
        ],
        NodeConfig::Condition(_) => vec![
            PortSpec::inbound("input"),
            PortSpec::outbound("true").with_role(PortRole::Branch),
            PortSpec::outbound("false").with_role(PortRole::Branch),
        ],
    }
}

/// Looks up a port by id within a derived port list.
pub fn find_port<'a>(ports: &'a [PortSpec], id: &str) -> Option<&'a PortSpec> {
    ports.iter().find(|port| port.id == id)
}

static VARIABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{(\s*[a-zA-Z_$][a-zA-Z0-9_$]*\s*)\}\}").unwrap()
});

/// Extracts the distinct `{{variable}}` names referenced by a Text template,
/// in first-occurrence order.
///
/// A reference counts only if the braces wrap a single identifier (letters,
/// digits, `_`, `$`, not starting with a digit), optionally padded with
/// whitespace. `{{ input }}` and `{{input}}` name the same variable; anything
/// else between braces is plain text.
pub fn template_variables(template: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for captures in VARIABLE.captures_iter(template) {
        let name = captures[1].trim().to_string();
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}
