//! Configuration enum types.

use crate::draw::{Color, RED};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// default_color = "red"
///
/// # Custom RGB color (0-255 per component)
/// default_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Unknown names fall back to red with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using red", name);
                RED
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, ORANGE};

    #[test]
    fn named_colors_resolve() {
        assert_eq!(ColorSpec::Name("blue".into()).to_color(), BLUE);
        assert_eq!(ColorSpec::Name("Orange".into()).to_color(), ORANGE);
    }

    #[test]
    fn unknown_name_falls_back_to_red() {
        assert_eq!(ColorSpec::Name("mauve".into()).to_color(), RED);
    }

    #[test]
    fn rgb_array_is_scaled() {
        let color = ColorSpec::Rgb([255, 0, 51]).to_color();
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert!((color.b - 0.2).abs() < 1e-9);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn parses_both_toml_forms() {
        #[derive(Deserialize)]
        struct Holder {
            color: ColorSpec,
        }
        let named: Holder = toml::from_str("color = \"green\"").unwrap();
        assert_eq!(named.color, ColorSpec::Name("green".into()));
        let rgb: Holder = toml::from_str("color = [1, 2, 3]").unwrap();
        assert_eq!(rgb.color, ColorSpec::Rgb([1, 2, 3]));
    }
}
