//! Drawing tool selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The active tool determines what geometry a drag produces. It is read once
/// when a gesture starts; switching tools mid-gesture only affects the next
/// one.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Smoothed freehand curve following the pointer
    #[default]
    Freehand,
    /// Rectangle outline dragged from corner to corner
    Rectangle,
    /// Ellipse outline inscribed in the dragged box
    Ellipse,
}

impl Tool {
    /// Label used in log output.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Freehand => "Freehand",
            Tool::Rectangle => "Rectangle",
            Tool::Ellipse => "Ellipse",
        }
    }
}
