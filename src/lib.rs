//! Wire-connection core for a 2-D circuit canvas.
//!
//! Elements (lightbulbs, resistors, ...) own terminal nodes positioned
//! relative to the element. Wires reference two nodes by id, so moving an
//! element carries its wires along. The [`editor`] module holds the
//! click-driven state machine that creates, re-routes and deletes wires.
//!
//! The binary `circuitlink` replays an event script against the demo scene
//! and prints the resulting frame as JSON.

pub mod config;
pub mod editor;
pub mod element_types;
pub mod error;
pub mod geometry;
pub mod model;
pub mod scene;
pub mod script;
