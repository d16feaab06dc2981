//! Wire editor for the circuit canvas.
//!
//! - **State machine**: idle / creating a wire / editing a wire endpoint,
//!   driven by clicks on terminals, wire bodies and the empty canvas
//! - **Mutations**: inserting, retargeting and deleting wires, moving elements
//! - **Hit testing**: turning a pointer position into a click target
//! - **Frames**: resolved positions for the renderer
//! - **Session**: ties the above together, one event at a time

pub mod frame;
pub mod hit_test;
pub mod operations;
pub mod session;
pub mod state;

pub use frame::{ElementView, Frame, TerminalView, WireView};
pub use hit_test::hit_test;
pub use operations::{Applied, Mutation};
pub use session::EditorSession;
pub use state::{ClickTarget, Event, InteractionState, Mode, Transition};
