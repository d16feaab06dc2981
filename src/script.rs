//! Event scripts for driving a session without a canvas.
//!
//! One JSON object per line, tagged by `op`:
//!
//! ```text
//! # start a wire on the first bulb and finish it on the second
//! {"op":"click","target":{"terminal":"lightbulb-1-node-2"}}
//! {"op":"pointer_move","x":180,"y":230}
//! {"op":"click_at","x":202,"y":240}
//! {"op":"drag_move","element":"lightbulb-2","x":260,"y":200}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use anyhow::{Context, Result};
use camino::Utf8Path;
use serde::Deserialize;

use crate::editor::{ClickTarget, EditorSession};
use crate::model::{ElementId, Point};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptStep {
    PointerMove {
        x: f32,
        y: f32,
    },
    /// Click on an explicit target.
    Click {
        target: ClickTarget,
        #[serde(default)]
        at: Option<Point>,
    },
    /// Click at a canvas position; the target is found by hit testing.
    ClickAt {
        x: f32,
        y: f32,
    },
    DragMove {
        element: ElementId,
        x: f32,
        y: f32,
    },
    RemoveElement {
        element: ElementId,
    },
}

impl ScriptStep {
    pub fn run(self, session: &mut EditorSession) -> crate::error::Result<()> {
        match self {
            ScriptStep::PointerMove { x, y } => session.pointer_move(x, y),
            ScriptStep::Click { target, at } => session
                .dispatch(crate::editor::Event::Click { target, at })
                .map(|_| ()),
            ScriptStep::ClickAt { x, y } => session.click_at(Point::new(x, y)).map(|_| ()),
            ScriptStep::DragMove { element, x, y } => {
                session.drag_move(element, x, y).map(|_| ())
            }
            ScriptStep::RemoveElement { element } => session.remove_element(&element).map(|_| ()),
        }
    }
}

/// Parse a script, reporting the offending line number on error.
pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let step = serde_json::from_str(line)
            .with_context(|| format!("Invalid script step on line {}", i + 1))?;
        steps.push(step);
    }
    Ok(steps)
}

pub fn load_script(path: &Utf8Path) -> Result<Vec<ScriptStep>> {
    let text = std::fs::read_to_string(path).with_context(|| format!("Read script {}", path))?;
    parse_script(&text).with_context(|| format!("Failed to parse script {}", path))
}

/// Run every step against `session`, returning how many were rejected.
///
/// Rejected steps leave the session unchanged and do not stop the replay.
pub fn replay(session: &mut EditorSession, steps: impl IntoIterator<Item = ScriptStep>) -> usize {
    let mut rejected = 0;
    for (i, step) in steps.into_iter().enumerate() {
        if let Err(err) = step.run(session) {
            tracing::info!(step = i + 1, %err, "script step rejected");
            rejected += 1;
        }
    }
    rejected
}
