//! Gesture scripts: recorded pointer input replayed against a surface.
//!
//! A script is a TOML file of `[[step]]` tables, each tagged by `action`.
//!
//! ```toml
//! [[step]]
//! action = "tool"
//! tool = "rectangle"
//!
//! [[step]]
//! action = "color"
//! color = [0, 128, 255]
//!
//! [[step]]
//! action = "down"
//! x = 10.0
//! y = 10.0
//!
//! [[step]]
//! action = "move"
//! x = 120.0
//! y = 80.0
//!
//! [[step]]
//! action = "up"
//! ```

use crate::config::ColorSpec;
use crate::input::{PointerEvent, Session, Tool};
use crate::surface::DrawingSurface;
use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One scripted action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    /// Select the tool for the next gesture
    Tool { tool: Tool },
    /// Select the stroke color
    Color { color: ColorSpec },
    /// Select the stroke width
    Width { width: f64 },
    /// Pointer pressed
    Down {
        x: f64,
        y: f64,
        #[serde(default = "single_pointer")]
        pointers: u32,
    },
    /// Pointer dragged
    Move {
        x: f64,
        y: f64,
        #[serde(default = "single_pointer")]
        pointers: u32,
    },
    /// Pointer released
    Up {
        #[serde(default = "single_pointer")]
        pointers: u32,
    },
    /// Remove the most recent shape
    Undo,
}

fn single_pointer() -> u32 {
    1
}

/// An ordered list of steps.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(rename = "step", default)]
    pub steps: Vec<Step>,
}

impl Script {
    /// Parses a script from TOML text.
    pub fn parse(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse gesture script")
    }

    /// Reads and parses a script file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script from {}", path.display()))?;
        let script = Self::parse(&source)
            .with_context(|| format!("Invalid script {}", path.display()))?;
        info!("Loaded {} step(s) from {}", script.steps.len(), path.display());
        Ok(script)
    }

    /// Plays every step in order against `surface`, updating `session` as
    /// tool, color and width steps are reached.
    ///
    /// # Errors
    /// Fails on the first step the session rejects (an invalid width).
    pub fn replay(&self, surface: &mut DrawingSurface, session: &mut Session) -> Result<()> {
        for (index, step) in self.steps.iter().enumerate() {
            debug!("Step {}: {:?}", index + 1, step);
            match step {
                Step::Tool { tool } => session.set_tool(*tool),
                Step::Color { color } => session.set_color(color.to_color()),
                Step::Width { width } => session
                    .set_stroke_width(*width)
                    .with_context(|| format!("Step {} rejected", index + 1))?,
                Step::Down { x, y, pointers } => surface.handle_pointer_event(
                    session,
                    PointerEvent::Down {
                        x: *x,
                        y: *y,
                        pointer_count: *pointers,
                    },
                ),
                Step::Move { x, y, pointers } => surface.handle_pointer_event(
                    session,
                    PointerEvent::Move {
                        x: *x,
                        y: *y,
                        pointer_count: *pointers,
                    },
                ),
                Step::Up { pointers } => surface.handle_pointer_event(
                    session,
                    PointerEvent::Up {
                        pointer_count: *pointers,
                    },
                ),
                Step::Undo => {
                    surface.undo();
                }
            }
        }
        Ok(())
    }
}
