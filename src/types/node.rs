//! One anchor of the 15-node lattice.

use serde::{Deserialize, Serialize};

use super::{Point, Rect};

/// One anchor of the lattice: a square box whose center is the logical point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
  /// Stable position in the layout (0..=14).
  pub index: usize,
  /// Square box of side `2 * radius`.
  pub frame: Rect,
}

impl Node {
  pub fn center(&self) -> Point {
    self.frame.center()
  }
}
