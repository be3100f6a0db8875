//! A line between two lattice nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A line between two lattice nodes. The stroke starts at `from` and ends at `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
  pub from: usize,
  pub to: usize,
}

impl Edge {
  pub const fn new(from: usize, to: usize) -> Self {
    Self { from, to }
  }

  /// True for the zero-length self-pairs the stencil carries.
  pub fn is_degenerate(&self) -> bool {
    self.from == self.to
  }

  pub fn max_index(&self) -> usize {
    self.from.max(self.to)
  }
}

impl fmt::Display for Edge {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}-{}", self.from, self.to)
  }
}
