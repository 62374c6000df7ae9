//! Session state chosen by the user: tool, color and stroke width.

use super::tool::Tool;
use crate::draw::Color;
use crate::error::SurfaceError;
use log::debug;

/// Tool, color and width picked through the host UI.
///
/// The session is owned by the host and lent to the surface on every
/// pointer event and render. Changes take effect on the next gesture (tool)
/// or the next frame (color, width).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    tool: Tool,
    color: Color,
    stroke_width: f64,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            tool: Tool::Freehand,
            color: crate::draw::RED,
            stroke_width: 5.0,
        }
    }
}

impl Session {
    /// Creates a session, validating the initial stroke width.
    pub fn new(tool: Tool, color: Color, stroke_width: f64) -> Result<Self, SurfaceError> {
        let mut session = Self {
            tool,
            color,
            ..Self::default()
        };
        session.set_stroke_width(stroke_width)?;
        Ok(session)
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn set_tool(&mut self, tool: Tool) {
        debug!("Tool set to {}", tool.label());
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Color) {
        debug!("Color set to {}", crate::util::color_to_name(&color));
        self.color = color;
    }

    /// Sets the stroke width; it must be positive and finite.
    pub fn set_stroke_width(&mut self, width: f64) -> Result<(), SurfaceError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(SurfaceError::InvalidStrokeWidth(width));
        }
        self.stroke_width = width;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::BLUE;

    #[test]
    fn invalid_stroke_width_keeps_previous_value() {
        let mut session = Session::default();
        assert!(session.set_stroke_width(0.0).is_err());
        assert!(session.set_stroke_width(f64::INFINITY).is_err());
        assert_eq!(session.stroke_width(), 5.0);

        session.set_stroke_width(12.5).unwrap();
        assert_eq!(session.stroke_width(), 12.5);
    }

    #[test]
    fn new_rejects_negative_width() {
        assert!(matches!(
            Session::new(Tool::Ellipse, BLUE, -3.0),
            Err(SurfaceError::InvalidStrokeWidth(_))
        ));
    }
}
