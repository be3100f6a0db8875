//! Named edge sets and their selection indices.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named edge set in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
  Icosahedron,
  Tetrahedron,
  Cube,
  Octahedron,
  /// Cube, octahedron, tetrahedron and icosahedron drawn together.
  AllSolids,
  /// Outer hexagon fanned into the inner ring.
  MetatronStar,
  /// Metatron star plus the inner hexagon and its two triangles.
  Metatron,
  /// Every ordered node pair, drawn behind the selected shape.
  Stencil,
}

impl Shape {
  /// Shapes reachable through a selection index, in index order (1..=7).
  pub const SELECTABLE: [Shape; 7] = [
    Shape::Icosahedron,
    Shape::Tetrahedron,
    Shape::Cube,
    Shape::Octahedron,
    Shape::AllSolids,
    Shape::MetatronStar,
    Shape::Metatron,
  ];

  /// Every catalog entry, stencil included.
  pub const ALL: [Shape; 8] = [
    Shape::Icosahedron,
    Shape::Tetrahedron,
    Shape::Cube,
    Shape::Octahedron,
    Shape::AllSolids,
    Shape::MetatronStar,
    Shape::Metatron,
    Shape::Stencil,
  ];

  /// Maps a selection index to a shape. 0 and anything outside 1..=7 select nothing.
  pub fn from_index(index: i64) -> Option<Shape> {
    let position = usize::try_from(index.checked_sub(1)?).ok()?;
    Self::SELECTABLE.get(position).copied()
  }

  /// Selection index, or `None` for the stencil which is toggled separately.
  pub fn index(&self) -> Option<i64> {
    Self::SELECTABLE
      .iter()
      .position(|s| s == self)
      .map(|p| p as i64 + 1)
  }

  pub fn name(&self) -> &'static str {
    match self {
      Shape::Icosahedron => "icosahedron",
      Shape::Tetrahedron => "tetrahedron",
      Shape::Cube => "cube",
      Shape::Octahedron => "octahedron",
      Shape::AllSolids => "all_solids",
      Shape::MetatronStar => "metatron_star",
      Shape::Metatron => "metatron",
      Shape::Stencil => "stencil",
    }
  }
}

impl fmt::Display for Shape {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
