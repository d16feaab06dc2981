//! Coordinate resolution and distance helpers.
//!
//! Terminal nodes store offsets relative to their element, so every absolute
//! position is derived on read. Moving an element therefore drags every wire
//! attached to it without touching the wire records.

use serde::{Deserialize, Serialize};

use crate::editor::state::InteractionState;
use crate::error::Result;
use crate::model::{Circuit, Node, NodeId, Point, Wire, WireEnd};

/// A straight wire segment in absolute canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f32 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Shortest distance from `p` to the segment `a`–`b`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f32 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let len_sq = abx * abx + aby * aby;
    if len_sq < f32::EPSILON {
        return distance(p, a);
    }
    let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq).clamp(0.0, 1.0);
    distance(p, Point::new(a.x + t * abx, a.y + t * aby))
}

/// Decide which end of a wire a click on its body means to grab.
///
/// `From` wins only when strictly nearer, so an equidistant click always
/// yields `To`.
pub fn disambiguate(click: Point, from: Point, to: Point) -> WireEnd {
    if distance(click, from) < distance(click, to) {
        WireEnd::From
    } else {
        WireEnd::To
    }
}

impl Circuit {
    /// Absolute canvas position of `node`.
    ///
    /// A node whose parent cannot be found is treated as already absolute.
    pub fn absolute_position(&self, node: &Node) -> Point {
        match self.elements.get(&node.parent_id) {
            Some(parent) => node.local() + parent.position(),
            None => {
                tracing::warn!(
                    node = %node.id,
                    parent = %node.parent_id,
                    "orphaned node, using local coordinates as absolute"
                );
                node.local()
            }
        }
    }

    /// Absolute position of the node with the given id.
    pub fn node_position(&self, id: &NodeId) -> Result<Point> {
        let node = self.find_node(id)?;
        Ok(self.absolute_position(node))
    }

    /// Segment between the two committed endpoints of `wire`.
    pub fn anchor_segment(&self, wire: &Wire) -> Result<Segment> {
        Ok(Segment::new(
            self.node_position(&wire.from_node_id)?,
            self.node_position(&wire.to_node_id)?,
        ))
    }

    /// Segment to draw for `wire` this frame.
    ///
    /// The end currently being re-pointed by the user follows the pointer;
    /// every other end resolves through its node.
    pub fn wire_endpoints(&self, wire: &Wire, state: &InteractionState) -> Result<Segment> {
        let editing = state.editing_end(&wire.id);
        let resolve = |end: WireEnd| {
            if editing == Some(end) {
                Ok(state.pointer)
            } else {
                self.node_position(wire.endpoint(end))
            }
        };
        Ok(Segment::new(resolve(WireEnd::From)?, resolve(WireEnd::To)?))
    }
}
