//! Editing session: the circuit, the interaction state and the event loop step.
//!
//! Events are processed one at a time, to completion. A transition's mutation
//! is applied before the new state is adopted; if the mutation is rejected the
//! session stays exactly where it was.

use crate::config::EditorConfig;
use crate::error::Result;
use crate::model::{Circuit, ElementId, Point, Wire};

use super::frame::Frame;
use super::hit_test::hit_test;
use super::operations::Applied;
use super::state::{ClickTarget, Event, InteractionState, Mode};

#[derive(Debug, Clone)]
pub struct EditorSession {
    circuit: Circuit,
    state: InteractionState,
    config: EditorConfig,
}

impl EditorSession {
    pub fn new(circuit: Circuit, config: EditorConfig) -> Self {
        Self {
            circuit,
            state: InteractionState::new(),
            config,
        }
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn mode(&self) -> &Mode {
        &self.state.mode
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Process one input event.
    ///
    /// Rejected events are logged and returned as errors; neither the circuit
    /// nor the interaction state changes in that case.
    pub fn dispatch(&mut self, event: Event) -> Result<Option<Applied>> {
        let transition = self.state.step(&self.circuit, &event).inspect_err(|err| {
            tracing::warn!(
                event = event.name(),
                mode = self.state.mode.name(),
                %err,
                "ignored event"
            );
        })?;

        let applied = match transition.mutation {
            Some(mutation) => Some(self.circuit.apply(mutation).inspect_err(|err| {
                tracing::warn!(
                    event = event.name(),
                    mode = self.state.mode.name(),
                    %err,
                    "rejected mutation"
                );
            })?),
            None => None,
        };

        if transition.next.mode != self.state.mode {
            tracing::debug!(
                from = self.state.mode.name(),
                to = transition.next.mode.name(),
                event = event.name(),
                "mode change"
            );
        }
        self.state = transition.next;
        Ok(applied)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> Result<()> {
        self.dispatch(Event::PointerMove {
            at: Point::new(x, y),
        })
        .map(|_| ())
    }

    pub fn click(&mut self, target: ClickTarget) -> Result<Option<Applied>> {
        self.dispatch(Event::Click { target, at: None })
    }

    /// Hit-test `at` and dispatch a click on whatever is there.
    pub fn click_at(&mut self, at: Point) -> Result<Option<Applied>> {
        let target = hit_test(&self.circuit, &self.state, &self.config, at);
        tracing::trace!(x = at.x, y = at.y, ?target, "hit test");
        self.dispatch(Event::Click {
            target,
            at: Some(at),
        })
    }

    pub fn drag_move(&mut self, element: ElementId, x: f32, y: f32) -> Result<Option<Applied>> {
        self.dispatch(Event::DragMove { element, x, y })
    }

    /// Remove an element with its attached wires.
    ///
    /// Drops back to idle if the current gesture involved anything removed.
    pub fn remove_element(&mut self, element: &ElementId) -> Result<Vec<Wire>> {
        let (_, dropped) = self.circuit.remove_element(element)?;
        let stale = match &self.state.mode {
            Mode::Idle => false,
            Mode::CreatingWire { start } => !self.circuit.contains_node(start),
            Mode::EditingWire { wire, .. } => self.circuit.find_wire(wire).is_err(),
        };
        if stale {
            tracing::debug!(%element, mode = self.state.mode.name(), "gesture target removed");
            self.state.mode = Mode::Idle;
        }
        Ok(dropped)
    }

    pub fn frame(&self) -> Frame {
        Frame::capture(&self.circuit, &self.state)
    }
}
