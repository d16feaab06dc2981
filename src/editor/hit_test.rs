//! Maps a canvas point to the [`ClickTarget`] under it.
//!
//! Hit order follows drawing order, topmost first: elements are drawn above
//! wires, and each element's terminals above its body. Later elements and
//! wires are drawn over earlier ones.

use crate::config::EditorConfig;
use crate::geometry::{distance, distance_to_segment};
use crate::model::{Circuit, Element, Point};

use super::state::{ClickTarget, InteractionState, Mode};

/// Find what a click at `at` lands on.
///
/// Wire bodies are not clickable while a new wire is being created, and the
/// wire under edit never is (its loose end sits under the pointer).
pub fn hit_test(
    circuit: &Circuit,
    state: &InteractionState,
    config: &EditorConfig,
    at: Point,
) -> ClickTarget {
    for element in circuit.elements().rev() {
        if let Some(target) = hit_element(circuit, element, config, at) {
            return target;
        }
    }

    if matches!(state.mode, Mode::CreatingWire { .. }) {
        return ClickTarget::Canvas;
    }

    let half_width = config.wire_hit_width / 2.0;
    for wire in circuit.wires().rev() {
        if state.editing_end(&wire.id).is_some() {
            continue;
        }
        let Ok(seg) = circuit.anchor_segment(wire) else {
            continue;
        };
        if distance_to_segment(at, seg.from, seg.to) <= half_width {
            return ClickTarget::WireBody(wire.id.clone());
        }
    }

    ClickTarget::Canvas
}

fn hit_element(
    circuit: &Circuit,
    element: &Element,
    config: &EditorConfig,
    at: Point,
) -> Option<ClickTarget> {
    for node in element.nodes.iter().rev() {
        if distance(circuit.absolute_position(node), at) <= config.terminal_hit_radius {
            return Some(ClickTarget::Terminal(node.id.clone()));
        }
    }
    let size = element.size();
    let inside = at.x >= element.x
        && at.x <= element.x + size.width
        && at.y >= element.y
        && at.y <= element.y + size.height;
    inside.then(|| ClickTarget::Element(element.id.clone()))
}
