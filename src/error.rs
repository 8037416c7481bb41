//! Errors raised when a graph mutation is rejected.

use thiserror::Error;

use crate::model::ports::PortDirection;
use crate::model::types::{NodeKind, PortRef};

/// A rejected `GraphModel` mutation.
///
/// Every variant is recoverable: the mutation is refused and the model is
/// left exactly as it was. No partial state is ever committed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    #[error("unknown node '{node}'")]
    UnknownNode { node: String },

    #[error("unknown edge '{edge}'")]
    UnknownEdge { edge: String },

    #[error("node '{node}' has no port '{port}'")]
    UnknownPort { node: String, port: String },

    #[error("port '{port}' is not {expected}; edges run from an outbound port to an inbound one")]
    DirectionMismatch {
        port: PortRef,
        expected: PortDirection,
    },

    // Not named `source`/`target`: thiserror treats a `source` field as the
    // error cause and would require `PortRef: std::error::Error`.
    #[error("an edge from '{from}' to '{to}' already exists")]
    DuplicateEdge { from: PortRef, to: PortRef },

    #[error("node '{node}' is a '{current}' node and cannot take a '{replacement}' config")]
    KindMismatch {
        node: String,
        current: NodeKind,
        replacement: NodeKind,
    },
}
