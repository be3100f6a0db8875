//! Stroke color and width for one layer of lines.

use serde::{Deserialize, Serialize};

/// RGBA color, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
  pub r: f32,
  pub g: f32,
  pub b: f32,
  pub a: f32,
}

impl Color {
  pub const CLEAR: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
  pub const DARK_GRAY: Color = Color::rgba(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, 1.0);
  pub const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);

  pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
    Self { r, g, b, a }
  }
}

/// Stroke color and line width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
  pub color: Color,
  pub width: f32,
}

impl StrokeStyle {
  pub const fn new(color: Color, width: f32) -> Self {
    Self { color, width }
  }

  /// Thin dark-gray lines behind the shape.
  pub const fn stencil_default() -> Self {
    Self::new(Color::DARK_GRAY, 1.0)
  }

  /// Red hairline (width 0 lets the backend pick its thinnest stroke).
  pub const fn shape_default() -> Self {
    Self::new(Color::RED, 0.0)
  }
}
