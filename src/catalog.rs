//! Static shape catalog: named lists of node-index pairs.
//!
//! Tables are indexed against [crate::layout::compute_nodes] output. Composite
//! entries are concatenations and keep duplicates, so every listed edge gets its
//! own animation track.

use once_cell::sync::Lazy;
use tracing::instrument;

use crate::error::CatalogError;
use crate::layout::NODE_COUNT;
use crate::types::{Edge, Shape};

const fn e(from: usize, to: usize) -> Edge {
  Edge::new(from, to)
}

/// Outer hexagon shared by most shapes.
const OUTER_HEXAGON: &[Edge] = &[e(0, 1), e(1, 2), e(2, 12), e(12, 13), e(13, 14), e(14, 0)];

#[rustfmt::skip]
const CUBE: &[Edge] = &[
  e(0, 1), e(1, 2), e(2, 12), e(12, 13), e(13, 14), e(14, 0),
  e(3, 4), e(4, 5), e(5, 9), e(9, 10), e(10, 11), e(11, 3),
  e(0, 6), e(1, 6), e(2, 6), e(12, 6), e(13, 6), e(14, 6),
];

#[rustfmt::skip]
const OCTAHEDRON: &[Edge] = &[
  e(0, 1), e(1, 2), e(2, 12), e(12, 13), e(13, 14), e(14, 0),
  e(3, 4), e(4, 5), e(5, 9), e(9, 10), e(10, 11), e(11, 3),
  e(12, 14), e(14, 1), e(1, 12),
  e(13, 2), e(2, 0), e(0, 13),
  e(10, 5), e(5, 3), e(3, 10),
  e(11, 4), e(4, 9), e(9, 11),
];

#[rustfmt::skip]
const TETRAHEDRON: &[Edge] = &[
  e(12, 14), e(14, 1), e(1, 12),
  e(13, 2), e(2, 0), e(0, 13),
  e(11, 4), e(4, 9), e(9, 11),
  e(12, 6), e(14, 6), e(1, 6),
];

#[rustfmt::skip]
const ICOSAHEDRON: &[Edge] = &[
  e(0, 1), e(1, 2), e(2, 12), e(12, 13), e(13, 14), e(14, 0),
  e(13, 10), e(0, 3), e(2, 5),
  e(12, 14), e(14, 1), e(1, 12),
  e(10, 5), e(5, 3), e(3, 10),
];

/// Each outer node fans into five inner nodes.
#[rustfmt::skip]
const METATRON_FANS: &[Edge] = &[
  e(12, 10), e(12, 5), e(12, 11), e(12, 4), e(12, 6),
  e(2, 9), e(2, 4), e(2, 10), e(2, 3), e(2, 6),
  e(1, 5), e(1, 3), e(1, 11), e(1, 9), e(1, 6),
  e(0, 11), e(0, 4), e(0, 10), e(0, 5), e(0, 6),
  e(14, 3), e(14, 10), e(14, 9), e(14, 4), e(14, 6),
  e(13, 11), e(13, 9), e(13, 3), e(13, 5), e(13, 6),
];

/// Inner hexagon followed by its two triangles.
#[rustfmt::skip]
const METATRON_INNER: &[Edge] = &[
  e(9, 5), e(5, 4), e(4, 3), e(3, 11), e(11, 10), e(10, 9),
  e(9, 4), e(4, 11), e(11, 9),
  e(5, 3), e(3, 10), e(10, 5),
];

static STENCIL: Lazy<Vec<Edge>> = Lazy::new(|| {
  (0..NODE_COUNT)
    .flat_map(|from| (0..NODE_COUNT).map(move |to| Edge::new(from, to)))
    .collect()
});

static METATRON_STAR: Lazy<Vec<Edge>> =
  Lazy::new(|| concat(&[OUTER_HEXAGON, METATRON_FANS]));

static METATRON: Lazy<Vec<Edge>> =
  Lazy::new(|| concat(&[OUTER_HEXAGON, METATRON_FANS, METATRON_INNER]));

static ALL_SOLIDS: Lazy<Vec<Edge>> =
  Lazy::new(|| concat(&[CUBE, OCTAHEDRON, TETRAHEDRON, ICOSAHEDRON]));

fn concat(tables: &[&[Edge]]) -> Vec<Edge> {
  tables.iter().flat_map(|t| t.iter().copied()).collect()
}

/// Edges drawn for `shape`, in registration order.
#[instrument(level = "trace")]
pub fn edges_for(shape: Shape) -> &'static [Edge] {
  match shape {
    Shape::Icosahedron => ICOSAHEDRON,
    Shape::Tetrahedron => TETRAHEDRON,
    Shape::Cube => CUBE,
    Shape::Octahedron => OCTAHEDRON,
    Shape::AllSolids => ALL_SOLIDS.as_slice(),
    Shape::MetatronStar => METATRON_STAR.as_slice(),
    Shape::Metatron => METATRON.as_slice(),
    Shape::Stencil => STENCIL.as_slice(),
  }
}

/// Edges for a selection index; indices without a shape draw nothing.
pub fn edges_for_index(index: i64) -> &'static [Edge] {
  Shape::from_index(index).map(edges_for).unwrap_or(&[])
}

/// Checks every table against the layout's node count.
#[instrument(level = "trace")]
pub fn validate_catalog() -> Result<(), CatalogError> {
  for shape in Shape::ALL {
    validate_edges(shape, edges_for(shape), NODE_COUNT)?;
  }
  Ok(())
}

pub(crate) fn validate_edges(
  shape: Shape,
  edges: &[Edge],
  node_count: usize,
) -> Result<(), CatalogError> {
  match edges
    .iter()
    .enumerate()
    .find(|(_, edge)| edge.max_index() >= node_count)
  {
    Some((position, edge)) => Err(CatalogError::NodeIndexOutOfRange {
      shape,
      position,
      edge: *edge,
      node_count,
    }),
    None => Ok(()),
  }
}
