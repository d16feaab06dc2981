//! Scene setup for a fresh editing session.

use crate::element_types::ElementKind;
use crate::error::Result;
use crate::model::{Circuit, Element};

/// Two lightbulbs, the canvas the editor opens with.
pub fn demo_circuit() -> Result<Circuit> {
    let mut circuit = Circuit::new();
    circuit.insert_element(Element::new("lightbulb-1", ElementKind::Lightbulb, 100.0, 100.0))?;
    circuit.insert_element(Element::new("lightbulb-2", ElementKind::Lightbulb, 200.0, 200.0))?;
    Ok(circuit)
}
