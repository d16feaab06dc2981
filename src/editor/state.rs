//! Wire interaction state machine.
//!
//! [`InteractionState`] is a plain value: [`InteractionState::step`] reads the
//! circuit, never writes it, and returns the next state together with the
//! [`Mutation`] (if any) the session must apply before adopting that state.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WireError};
use crate::geometry::disambiguate;
use crate::model::{Circuit, ElementId, NodeId, Point, WireEnd, WireId};

use super::operations::Mutation;

// ────────────────────────────────────────────────────────────────────────────
// Mode / state
// ────────────────────────────────────────────────────────────────────────────

/// What the user is doing with wires right now.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Idle,
    /// Dragging out a new wire from `start`.
    CreatingWire { start: NodeId },
    /// Re-pointing end `end` of an existing wire.
    EditingWire { wire: WireId, end: WireEnd },
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Idle => "idle",
            Mode::CreatingWire { .. } => "creating a wire",
            Mode::EditingWire { .. } => "editing a wire",
        }
    }
}

/// Session-scoped interaction state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    pub mode: Mode,
    /// Last known pointer location in canvas coordinates.
    pub pointer: Point,
}

/// Where a click landed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickTarget {
    Terminal(NodeId),
    WireBody(WireId),
    Element(ElementId),
    Canvas,
}

/// Input events delivered by the canvas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    PointerMove { at: Point },
    /// A click. `at` also moves the pointer; without it the last pointer
    /// position is used for wire-end disambiguation.
    Click {
        target: ClickTarget,
        #[serde(default)]
        at: Option<Point>,
    },
    /// One sample of an element drag.
    DragMove { element: ElementId, x: f32, y: f32 },
}

impl Event {
    pub fn name(&self) -> &'static str {
        match self {
            Event::PointerMove { .. } => "pointer_move",
            Event::Click { target, .. } => match target {
                ClickTarget::Terminal(_) => "click_terminal",
                ClickTarget::WireBody(_) => "click_wire",
                ClickTarget::Element(_) => "click_element",
                ClickTarget::Canvas => "click_canvas",
            },
            Event::DragMove { .. } => "drag_move",
        }
    }
}

/// Outcome of a single [`InteractionState::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub next: InteractionState,
    pub mutation: Option<Mutation>,
}

impl Transition {
    fn to(next: InteractionState) -> Self {
        Self {
            next,
            mutation: None,
        }
    }

    fn with(next: InteractionState, mutation: Mutation) -> Self {
        Self {
            next,
            mutation: Some(mutation),
        }
    }
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_mode(&self, mode: Mode) -> Self {
        Self {
            mode,
            pointer: self.pointer,
        }
    }

    /// The end of `wire` currently following the pointer, if any.
    pub fn editing_end(&self, wire: &WireId) -> Option<WireEnd> {
        match &self.mode {
            Mode::EditingWire { wire: w, end } if w == wire => Some(*end),
            _ => None,
        }
    }

    /// Start node of the wire being created, if any.
    pub fn creating_from(&self) -> Option<&NodeId> {
        match &self.mode {
            Mode::CreatingWire { start } => Some(start),
            _ => None,
        }
    }

    /// Compute the transition for `event`.
    ///
    /// Returns [`WireError::InvalidTransition`] for events the current mode
    /// does not accept and [`WireError::BrokenReference`] for clicks on ids
    /// the circuit does not know; either way the caller keeps `self`.
    pub fn step(&self, circuit: &Circuit, event: &Event) -> Result<Transition> {
        match event {
            Event::PointerMove { at } => Ok(Transition::to(Self {
                mode: self.mode.clone(),
                pointer: *at,
            })),
            Event::DragMove { element, x, y } => Ok(Transition::with(
                self.clone(),
                Mutation::MoveElement {
                    element: element.clone(),
                    x: *x,
                    y: *y,
                },
            )),
            Event::Click { target, at } => {
                let current = Self {
                    mode: self.mode.clone(),
                    pointer: at.unwrap_or(self.pointer),
                };
                current.on_click(circuit, target, event)
            }
        }
    }

    fn on_click(
        &self,
        circuit: &Circuit,
        target: &ClickTarget,
        event: &Event,
    ) -> Result<Transition> {
        match (&self.mode, target) {
            (_, ClickTarget::Terminal(node)) => {
                circuit.find_node(node)?;
                Ok(self.on_terminal(node.clone()))
            }

            (Mode::CreatingWire { .. }, ClickTarget::WireBody(_)) => {
                Err(WireError::InvalidTransition {
                    mode: self.mode.name(),
                    event: event.name(),
                })
            }
            (_, ClickTarget::WireBody(wire)) => {
                let anchors = circuit.anchor_segment(circuit.find_wire(wire)?)?;
                let end = disambiguate(self.pointer, anchors.from, anchors.to);
                Ok(Transition::to(self.with_mode(Mode::EditingWire {
                    wire: wire.clone(),
                    end,
                })))
            }

            // A click on an element body outside its terminals falls through
            // to the canvas.
            (Mode::Idle, ClickTarget::Canvas | ClickTarget::Element(_)) => {
                Ok(Transition::to(self.clone()))
            }
            (Mode::CreatingWire { .. }, ClickTarget::Canvas | ClickTarget::Element(_)) => {
                Ok(Transition::to(self.with_mode(Mode::Idle)))
            }
            (Mode::EditingWire { wire, .. }, ClickTarget::Canvas | ClickTarget::Element(_)) => {
                Ok(Transition::with(
                    self.with_mode(Mode::Idle),
                    Mutation::DeleteWire { wire: wire.clone() },
                ))
            }
        }
    }

    fn on_terminal(&self, node: NodeId) -> Transition {
        let idle = self.with_mode(Mode::Idle);
        match &self.mode {
            Mode::Idle => Transition::to(self.with_mode(Mode::CreatingWire { start: node })),
            // The equality check must come before the commit: clicking the
            // start terminal again cancels instead of creating a self loop.
            Mode::CreatingWire { start } if *start == node => Transition::to(idle),
            Mode::CreatingWire { start } => Transition::with(
                idle,
                Mutation::InsertWire {
                    from: start.clone(),
                    to: node,
                },
            ),
            Mode::EditingWire { wire, end } => Transition::with(
                idle,
                Mutation::RetargetWireEndpoint {
                    wire: wire.clone(),
                    end: *end,
                    node,
                },
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element_types::ElementKind;
    use crate::model::Element;

    fn make_circuit() -> Circuit {
        let mut c = Circuit::new();
        c.insert_element(Element::new("a", ElementKind::Resistor, 0.0, 0.0))
            .unwrap();
        c.insert_element(Element::new("b", ElementKind::Resistor, 200.0, 0.0))
            .unwrap();
        c
    }

    fn click(target: ClickTarget) -> Event {
        Event::Click { target, at: None }
    }

    fn terminal(id: &str) -> Event {
        click(ClickTarget::Terminal(id.into()))
    }

    #[test]
    fn test_initial_state_is_idle() {
        let s = InteractionState::new();
        assert_eq!(s.mode, Mode::Idle);
        assert_eq!(s.pointer, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_terminal_click_starts_creation() {
        let c = make_circuit();
        let t = InteractionState::new().step(&c, &terminal("a-node-1")).unwrap();
        assert_eq!(
            t.next.mode,
            Mode::CreatingWire {
                start: "a-node-1".into()
            }
        );
        assert!(t.mutation.is_none());
    }

    #[test]
    fn test_second_terminal_commits_wire() {
        let c = make_circuit();
        let s = InteractionState::new().step(&c, &terminal("a-node-2")).unwrap().next;
        let t = s.step(&c, &terminal("b-node-1")).unwrap();
        assert_eq!(t.next.mode, Mode::Idle);
        assert_eq!(
            t.mutation,
            Some(Mutation::InsertWire {
                from: "a-node-2".into(),
                to: "b-node-1".into()
            })
        );
    }

    #[test]
    fn test_same_terminal_cancels() {
        let c = make_circuit();
        let s = InteractionState::new().step(&c, &terminal("a-node-1")).unwrap().next;
        let t = s.step(&c, &terminal("a-node-1")).unwrap();
        assert_eq!(t.next.mode, Mode::Idle);
        assert!(t.mutation.is_none());
    }

    #[test]
    fn test_canvas_click_cancels_creation_without_mutation() {
        let c = make_circuit();
        let s = InteractionState::new().step(&c, &terminal("a-node-1")).unwrap().next;
        let t = s.step(&c, &click(ClickTarget::Canvas)).unwrap();
        assert_eq!(t.next.mode, Mode::Idle);
        assert!(t.mutation.is_none());
    }

    #[test]
    fn test_canvas_click_while_editing_deletes() {
        let c = make_circuit();
        let s = InteractionState {
            mode: Mode::EditingWire {
                wire: "wire-0".into(),
                end: WireEnd::To,
            },
            pointer: Point::default(),
        };
        let t = s.step(&c, &click(ClickTarget::Canvas)).unwrap();
        assert_eq!(t.next.mode, Mode::Idle);
        assert_eq!(
            t.mutation,
            Some(Mutation::DeleteWire {
                wire: "wire-0".into()
            })
        );
    }

    #[test]
    fn test_element_click_acts_like_canvas() {
        let c = make_circuit();
        let body = click(ClickTarget::Element("b".into()));

        let idle = InteractionState::new().step(&c, &body).unwrap();
        assert_eq!(idle.next.mode, Mode::Idle);
        assert!(idle.mutation.is_none());

        let creating = InteractionState::new().step(&c, &terminal("a-node-1")).unwrap().next;
        let t = creating.step(&c, &body).unwrap();
        assert_eq!(t.next.mode, Mode::Idle);
        assert!(t.mutation.is_none());

        let editing = InteractionState {
            mode: Mode::EditingWire {
                wire: "wire-3".into(),
                end: WireEnd::From,
            },
            pointer: Point::default(),
        };
        let t = editing.step(&c, &body).unwrap();
        assert_eq!(t.next.mode, Mode::Idle);
        assert_eq!(
            t.mutation,
            Some(Mutation::DeleteWire {
                wire: "wire-3".into()
            })
        );
    }

    #[test]
    fn test_wire_click_while_creating_is_rejected() {
        let mut c = make_circuit();
        c.insert_wire(&"a-node-2".into(), &"b-node-1".into()).unwrap();
        let s = InteractionState::new().step(&c, &terminal("a-node-1")).unwrap().next;
        let err = s.step(&c, &click(ClickTarget::WireBody("wire-0".into()))).unwrap_err();
        assert!(matches!(err, WireError::InvalidTransition { .. }));
    }

    #[test]
    fn test_wire_click_uses_click_position() {
        let mut c = make_circuit();
        // a-node-2 at (60, 10), b-node-1 at (200, 10)
        c.insert_wire(&"a-node-2".into(), &"b-node-1".into()).unwrap();
        let ev = Event::Click {
            target: ClickTarget::WireBody("wire-0".into()),
            at: Some(Point::new(70.0, 10.0)),
        };
        let t = InteractionState::new().step(&c, &ev).unwrap();
        assert_eq!(
            t.next.mode,
            Mode::EditingWire {
                wire: "wire-0".into(),
                end: WireEnd::From
            }
        );
        assert_eq!(t.next.pointer, Point::new(70.0, 10.0));
    }

    #[test]
    fn test_unknown_terminal_is_broken_reference() {
        let c = make_circuit();
        let err = InteractionState::new().step(&c, &terminal("ghost")).unwrap_err();
        assert!(matches!(err, WireError::BrokenReference { .. }));
    }

    #[test]
    fn test_pointer_move_keeps_mode() {
        let c = make_circuit();
        let s = InteractionState::new().step(&c, &terminal("a-node-1")).unwrap().next;
        let t = s
            .step(&c, &Event::PointerMove { at: Point::new(5.0, 6.0) })
            .unwrap();
        assert_eq!(t.next.mode, s.mode);
        assert_eq!(t.next.pointer, Point::new(5.0, 6.0));
    }

    #[test]
    fn test_editing_end_only_for_edited_wire() {
        let s = InteractionState {
            mode: Mode::EditingWire {
                wire: "wire-1".into(),
                end: WireEnd::From,
            },
            pointer: Point::default(),
        };
        assert_eq!(s.editing_end(&"wire-1".into()), Some(WireEnd::From));
        assert_eq!(s.editing_end(&"wire-2".into()), None);
    }

    #[test]
    fn test_event_json() {
        let ev: Event = serde_json::from_str(
            r#"{"event":"click","target":{"terminal":"a-node-1"}}"#,
        )
        .unwrap();
        assert_eq!(ev, terminal("a-node-1"));
        let ev: Event = serde_json::from_str(r#"{"event":"click","target":"canvas"}"#).unwrap();
        assert_eq!(ev, click(ClickTarget::Canvas));
    }
}
