//! Render snapshot of the editor.
//!
//! A [`Frame`] is everything the canvas needs to draw one frame: element
//! positions, resolved wire segments, the dashed preview of a wire being
//! created, and the interaction state. Wires that cannot be resolved are left
//! out and reported in `diagnostics` instead.

use serde::Serialize;

use crate::element_types::ElementKind;
use crate::geometry::Segment;
use crate::model::{Circuit, ElementId, NodeId, Point, Size, WireEnd, WireId};

use super::state::InteractionState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TerminalView {
    pub id: NodeId,
    /// Absolute canvas position.
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementView {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub position: Point,
    pub size: Size,
    pub terminals: Vec<TerminalView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WireView {
    pub id: WireId,
    pub segment: Segment,
    /// The end following the pointer, when this wire is being edited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editing: Option<WireEnd>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resistance: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub elements: Vec<ElementView>,
    pub wires: Vec<WireView>,
    /// In-flight wire from the creation start terminal to the pointer.
    pub preview: Option<Segment>,
    pub state: InteractionState,
    pub diagnostics: Vec<String>,
}

impl Frame {
    pub fn capture(circuit: &Circuit, state: &InteractionState) -> Self {
        let mut diagnostics = Vec::new();

        let elements = circuit
            .elements()
            .map(|e| ElementView {
                id: e.id.clone(),
                kind: e.kind,
                position: e.position(),
                size: e.size(),
                terminals: e
                    .nodes
                    .iter()
                    .map(|n| TerminalView {
                        id: n.id.clone(),
                        position: circuit.absolute_position(n),
                    })
                    .collect(),
            })
            .collect();

        let mut wires = Vec::with_capacity(circuit.wire_count());
        for wire in circuit.wires() {
            match circuit.wire_endpoints(wire, state) {
                Ok(segment) => wires.push(WireView {
                    id: wire.id.clone(),
                    segment,
                    editing: state.editing_end(&wire.id),
                    resistance: wire.resistance,
                }),
                Err(err) => {
                    tracing::warn!(wire = %wire.id, %err, "skipping wire");
                    diagnostics.push(format!("wire `{}`: {}", wire.id, err));
                }
            }
        }

        let preview = state.creating_from().and_then(|start| {
            match circuit.node_position(start) {
                Ok(p) => Some(Segment::new(p, state.pointer)),
                Err(err) => {
                    tracing::warn!(node = %start, %err, "cannot draw wire preview");
                    diagnostics.push(format!("preview: {}", err));
                    None
                }
            }
        });

        Self {
            elements,
            wires,
            preview,
            state: state.clone(),
            diagnostics,
        }
    }
}
