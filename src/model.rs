use std::collections::HashMap;
use std::fmt;
use std::ops::Add;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::element_types::ElementKind;
use crate::error::{RefKind, Result, WireError};

// ────────────────────────────────────────────────────────────────────────────
// Identifiers
// ────────────────────────────────────────────────────────────────────────────

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Identifier of a placed element, stable for the element's lifetime.
    ElementId
);
string_id!(
    /// Identifier of a terminal node.
    NodeId
);
string_id!(
    /// Identifier of a wire.
    WireId
);

// ────────────────────────────────────────────────────────────────────────────
// Geometry primitives
// ────────────────────────────────────────────────────────────────────────────

/// A point on the canvas. Whether it is local or absolute depends on context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Element / Node
// ────────────────────────────────────────────────────────────────────────────

/// A terminal on an element. `x`/`y` are relative to the owning element's origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub x: f32,
    pub y: f32,
    /// Back-reference to the owning element, for lookup only.
    pub parent_id: ElementId,
}

impl Node {
    pub fn local(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A placed circuit component together with the terminals it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub x: f32,
    pub y: f32,
    pub nodes: Vec<Node>,
}

impl Element {
    /// Create an element with the default terminal layout of its kind.
    ///
    /// Terminal ids are `"{id}-node-{n}"`, numbered from 1.
    pub fn new(id: impl Into<ElementId>, kind: ElementKind, x: f32, y: f32) -> Self {
        let id = id.into();
        let terminals = kind
            .default_terminals()
            .into_iter()
            .enumerate()
            .map(|(i, p)| (NodeId::new(format!("{}-node-{}", id, i + 1)), p))
            .collect::<Vec<_>>();
        Self::with_terminals(id, kind, x, y, terminals)
    }

    /// Create an element with explicitly named terminals at the given local offsets.
    pub fn with_terminals(
        id: impl Into<ElementId>,
        kind: ElementKind,
        x: f32,
        y: f32,
        terminals: impl IntoIterator<Item = (NodeId, Point)>,
    ) -> Self {
        let id = id.into();
        let nodes = terminals
            .into_iter()
            .map(|(node_id, p)| Node {
                id: node_id,
                x: p.x,
                y: p.y,
                parent_id: id.clone(),
            })
            .collect();
        Self {
            id,
            kind,
            x,
            y,
            nodes,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        self.kind.size()
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == *id)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire
// ────────────────────────────────────────────────────────────────────────────

/// Selects one end of a wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireEnd {
    From,
    To,
}

impl WireEnd {
    pub fn opposite(self) -> WireEnd {
        match self {
            WireEnd::From => WireEnd::To,
            WireEnd::To => WireEnd::From,
        }
    }
}

impl fmt::Display for WireEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WireEnd::From => "from",
            WireEnd::To => "to",
        })
    }
}

/// A connection between two terminals, held by node id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wire {
    pub id: WireId,
    pub from_node_id: NodeId,
    pub to_node_id: NodeId,
    /// Carried along for the simulation layer; not interpreted here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resistance: Option<f32>,
}

impl Wire {
    pub fn new(id: impl Into<WireId>, from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            from_node_id: from.into(),
            to_node_id: to.into(),
            resistance: None,
        }
    }

    pub fn endpoint(&self, end: WireEnd) -> &NodeId {
        match end {
            WireEnd::From => &self.from_node_id,
            WireEnd::To => &self.to_node_id,
        }
    }

    pub(crate) fn set_endpoint(&mut self, end: WireEnd, node: NodeId) {
        match end {
            WireEnd::From => self.from_node_id = node,
            WireEnd::To => self.to_node_id = node,
        }
    }

    /// True if either end references `node`.
    pub fn touches(&self, node: &NodeId) -> bool {
        self.from_node_id == *node || self.to_node_id == *node
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Circuit – the element, node and wire collections
// ────────────────────────────────────────────────────────────────────────────

/// All elements and wires on the canvas.
///
/// Elements own their nodes. `node_owners` indexes every node id to its
/// element so node and parent lookups stay O(1) on the render path. Mutations
/// live in [`crate::editor::operations`].
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    pub(crate) elements: IndexMap<ElementId, Element>,
    pub(crate) node_owners: HashMap<NodeId, ElementId>,
    pub(crate) wires: IndexMap<WireId, Wire>,
    pub(crate) next_wire: u64,
}

impl Circuit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements in insertion (drawing) order.
    pub fn elements(&self) -> impl DoubleEndedIterator<Item = &Element> {
        self.elements.values()
    }

    /// Wires in creation order.
    pub fn wires(&self) -> impl DoubleEndedIterator<Item = &Wire> {
        self.wires.values()
    }

    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    pub fn find_element(&self, id: &ElementId) -> Result<&Element> {
        self.elements
            .get(id)
            .ok_or_else(|| WireError::broken(RefKind::Element, id))
    }

    pub fn find_node(&self, id: &NodeId) -> Result<&Node> {
        self.find_parent_of(id)?
            .node(id)
            .ok_or_else(|| WireError::broken(RefKind::Node, id))
    }

    /// Resolve the element owning `node`.
    pub fn find_parent_of(&self, node: &NodeId) -> Result<&Element> {
        let owner = self
            .node_owners
            .get(node)
            .ok_or_else(|| WireError::broken(RefKind::Node, node))?;
        self.find_element(owner)
    }

    pub fn find_wire(&self, id: &WireId) -> Result<&Wire> {
        self.wires
            .get(id)
            .ok_or_else(|| WireError::broken(RefKind::Wire, id))
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node_owners.contains_key(id)
    }
}
