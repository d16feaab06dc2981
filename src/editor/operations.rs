//! Mutation layer for the circuit.
//!
//! Every mutator validates all of its inputs before writing anything, so a
//! rejected call leaves the circuit exactly as it was. Wires hold node ids,
//! never coordinates: [`Circuit::move_element`] touches only the element and
//! attached wires follow on the next resolve.
//!
//! The interaction state machine describes what it wants done as a
//! [`Mutation`]; [`Circuit::apply`] carries it out.

use crate::error::{RefKind, Result, WireError};
use crate::model::{Circuit, Element, ElementId, NodeId, Wire, WireEnd, WireId};

// ────────────────────────────────────────────────────────────────────────────
// Mutation (one unit of change requested by a gesture)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Commit a new wire between two distinct nodes.
    InsertWire { from: NodeId, to: NodeId },
    /// Point one end of an existing wire at another node.
    RetargetWireEndpoint {
        wire: WireId,
        end: WireEnd,
        node: NodeId,
    },
    DeleteWire { wire: WireId },
    MoveElement { element: ElementId, x: f32, y: f32 },
}

/// What [`Circuit::apply`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    WireInserted(WireId),
    WireRetargeted(WireId),
    WireDeleted(Wire),
    ElementMoved(ElementId),
}

impl Circuit {
    /// Apply a mutation produced by the interaction state machine.
    pub fn apply(&mut self, mutation: Mutation) -> Result<Applied> {
        match mutation {
            Mutation::InsertWire { from, to } => {
                self.insert_wire(&from, &to).map(Applied::WireInserted)
            }
            Mutation::RetargetWireEndpoint { wire, end, node } => {
                self.retarget_wire_endpoint(&wire, end, node)?;
                Ok(Applied::WireRetargeted(wire))
            }
            Mutation::DeleteWire { wire } => self.delete_wire(&wire).map(Applied::WireDeleted),
            Mutation::MoveElement { element, x, y } => {
                self.move_element(&element, x, y)?;
                Ok(Applied::ElementMoved(element))
            }
        }
    }

    // ────────────────────────────────────────────────────────────────────────
    // Wires
    // ────────────────────────────────────────────────────────────────────────

    /// Add a wire from `from` to `to`, returning its freshly allocated id.
    pub fn insert_wire(&mut self, from: &NodeId, to: &NodeId) -> Result<WireId> {
        self.find_node(from)?;
        self.find_node(to)?;
        if from == to {
            return Err(WireError::DuplicateEndpoint {
                node: from.to_string(),
            });
        }
        let id = self.allocate_wire_id();
        tracing::debug!(wire = %id, %from, %to, "insert wire");
        self.wires
            .insert(id.clone(), Wire::new(id.clone(), from.clone(), to.clone()));
        Ok(id)
    }

    /// Point end `end` of `wire` at `node`.
    ///
    /// Rejected with [`WireError::DuplicateEndpoint`] when the opposite end
    /// already references `node`.
    pub fn retarget_wire_endpoint(
        &mut self,
        wire: &WireId,
        end: WireEnd,
        node: NodeId,
    ) -> Result<()> {
        self.find_node(&node)?;
        let w = self
            .wires
            .get_mut(wire)
            .ok_or_else(|| WireError::broken(RefKind::Wire, wire))?;
        if *w.endpoint(end.opposite()) == node {
            return Err(WireError::DuplicateEndpoint {
                node: node.to_string(),
            });
        }
        tracing::debug!(%wire, %end, %node, "retarget wire endpoint");
        w.set_endpoint(end, node);
        Ok(())
    }

    /// Remove `wire`, returning the removed record.
    pub fn delete_wire(&mut self, wire: &WireId) -> Result<Wire> {
        // shift_remove keeps the drawing order of the remaining wires
        let removed = self
            .wires
            .shift_remove(wire)
            .ok_or_else(|| WireError::broken(RefKind::Wire, wire))?;
        tracing::debug!(%wire, "delete wire");
        Ok(removed)
    }

    fn allocate_wire_id(&mut self) -> WireId {
        loop {
            let id = WireId::new(format!("wire-{}", self.next_wire));
            self.next_wire += 1;
            if !self.wires.contains_key(&id) {
                return id;
            }
        }
    }

    // ────────────────────────────────────────────────────────────────────────
    // Elements
    // ────────────────────────────────────────────────────────────────────────

    /// Move an element's origin to `(x, y)`.
    pub fn move_element(&mut self, element: &ElementId, x: f32, y: f32) -> Result<()> {
        let e = self
            .elements
            .get_mut(element)
            .ok_or_else(|| WireError::broken(RefKind::Element, element))?;
        e.x = x;
        e.y = y;
        tracing::trace!(%element, x, y, "move element");
        Ok(())
    }

    /// Place a new element on the canvas together with its terminals.
    pub fn insert_element(&mut self, element: Element) -> Result<()> {
        if self.elements.contains_key(&element.id) {
            return Err(WireError::DuplicateId {
                kind: RefKind::Element,
                id: element.id.to_string(),
            });
        }
        for (i, node) in element.nodes.iter().enumerate() {
            if node.parent_id != element.id {
                return Err(WireError::ForeignNode {
                    node: node.id.to_string(),
                    element: element.id.to_string(),
                });
            }
            let repeated = element.nodes[..i].iter().any(|n| n.id == node.id);
            if repeated || self.node_owners.contains_key(&node.id) {
                return Err(WireError::DuplicateId {
                    kind: RefKind::Node,
                    id: node.id.to_string(),
                });
            }
        }
        for node in &element.nodes {
            self.node_owners.insert(node.id.clone(), element.id.clone());
        }
        tracing::debug!(element = %element.id, kind = element.kind.name(), "insert element");
        self.elements.insert(element.id.clone(), element);
        Ok(())
    }

    /// Remove an element, its terminals, and every wire attached to them.
    ///
    /// Returns the element and the wires that went with it.
    pub fn remove_element(&mut self, element: &ElementId) -> Result<(Element, Vec<Wire>)> {
        let removed = self
            .elements
            .shift_remove(element)
            .ok_or_else(|| WireError::broken(RefKind::Element, element))?;
        for node in &removed.nodes {
            self.node_owners.remove(&node.id);
        }
        let (dropped, kept): (Vec<Wire>, Vec<Wire>) = self
            .wires
            .drain(..)
            .map(|(_, w)| w)
            .partition(|w| removed.nodes.iter().any(|n| w.touches(&n.id)));
        self.wires = kept.into_iter().map(|w| (w.id.clone(), w)).collect();
        tracing::debug!(%element, wires = dropped.len(), "remove element");
        Ok((removed, dropped))
    }
}
