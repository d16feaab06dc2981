//! The closed set of circuit element kinds and their per-kind layout.
//!
//! Each kind carries the size of its body on the canvas and the local offsets
//! of the terminals it gets when created with [`crate::model::Element::new`].

use serde::{Deserialize, Serialize};

use crate::model::{Point, Size};

/// Component kinds that can be placed on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Lightbulb,
    Resistor,
    Capacitor,
    Inductor,
}

impl ElementKind {
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Lightbulb,
        ElementKind::Resistor,
        ElementKind::Capacitor,
        ElementKind::Inductor,
    ];

    /// Name used in element ids and logs.
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Lightbulb => "lightbulb",
            ElementKind::Resistor => "resistor",
            ElementKind::Capacitor => "capacitor",
            ElementKind::Inductor => "inductor",
        }
    }

    /// Size of the element body, measured from the element origin.
    pub fn size(self) -> Size {
        match self {
            ElementKind::Lightbulb => Size::new(40.0, 40.0),
            ElementKind::Resistor => Size::new(60.0, 20.0),
            ElementKind::Capacitor => Size::new(30.0, 40.0),
            ElementKind::Inductor => Size::new(60.0, 20.0),
        }
    }

    /// Local terminal offsets in creation order.
    ///
    /// The lightbulb's terminals sit on its bottom edge; the two-lead passives
    /// have theirs centred on the left and right edges.
    pub fn default_terminals(self) -> [Point; 2] {
        match self {
            ElementKind::Lightbulb => [Point::new(2.0, 40.0), Point::new(40.0, 40.0)],
            ElementKind::Resistor | ElementKind::Inductor => {
                [Point::new(0.0, 10.0), Point::new(60.0, 10.0)]
            }
            ElementKind::Capacitor => [Point::new(0.0, 20.0), Point::new(30.0, 20.0)],
        }
    }
}
