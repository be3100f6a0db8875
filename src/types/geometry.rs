//! Plain 2D geometry values shared by the layout engine and the backend seam.

use serde::{Deserialize, Serialize};

/// A point in view coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
  pub x: f64,
  pub y: f64,
}

impl Point {
  pub const fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }

  pub fn distance_to(&self, other: Point) -> f64 {
    (other.x - self.x).hypot(other.y - self.y)
  }
}

/// Width and height of a view or a box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
  pub width: f64,
  pub height: f64,
}

impl Size {
  pub const fn new(width: f64, height: f64) -> Self {
    Self { width, height }
  }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
  pub origin: Point,
  pub size: Size,
}

impl Rect {
  pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
    Self {
      origin: Point::new(x, y),
      size: Size::new(width, height),
    }
  }

  pub fn mid_x(&self) -> f64 {
    self.origin.x + self.size.width / 2.0
  }

  pub fn mid_y(&self) -> f64 {
    self.origin.y + self.size.height / 2.0
  }

  pub fn max_y(&self) -> f64 {
    self.origin.y + self.size.height
  }

  pub fn center(&self) -> Point {
    Point::new(self.mid_x(), self.mid_y())
  }
}
