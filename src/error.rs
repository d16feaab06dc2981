//! Error types for circuit lookups, mutations and interaction events.
//!
//! Nothing here is fatal: every variant describes a click or mutation that was
//! ignored, or a wire that could not be drawn this frame.

use std::fmt;

use thiserror::Error;

/// What kind of entity an id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind {
    Element,
    Node,
    Wire,
}

impl fmt::Display for RefKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RefKind::Element => "element",
            RefKind::Node => "node",
            RefKind::Wire => "wire",
        })
    }
}

/// Errors raised by the circuit model and the wire editor.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WireError {
    /// An id that does not resolve to anything in the current circuit.
    #[error("broken reference: {kind} `{id}` does not exist")]
    BrokenReference { kind: RefKind, id: String },

    /// An event the interaction state machine does not accept in its current mode.
    #[error("event `{event}` is not valid while {mode}")]
    InvalidTransition {
        mode: &'static str,
        event: &'static str,
    },

    /// A wire would connect a node to itself.
    #[error("both ends of the wire would reference node `{node}`")]
    DuplicateEndpoint { node: String },

    /// An element or node id is already taken.
    #[error("{kind} id `{id}` is already in use")]
    DuplicateId { kind: RefKind, id: String },

    /// A node whose `parent_id` does not name the element carrying it.
    #[error("node `{node}` does not belong to element `{element}`")]
    ForeignNode { node: String, element: String },
}

impl WireError {
    pub fn broken(kind: RefKind, id: impl fmt::Display) -> Self {
        WireError::BrokenReference {
            kind,
            id: id.to_string(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, WireError>;
