//! Node layout: 15 anchors in three offset rows of triangular clusters.
//!
//! Everything is derived from one radius, `height / 8`. Three seed points walk
//! five steps; each step emits one node per seed, so iteration `k` owns indices
//! `3k` (first seed), `3k + 1` (second) and `3k + 2` (third). The catalog
//! tables are written against that ordering.

use tracing::instrument;

use crate::types::{Node, Point, Rect, Size};

/// Nodes produced by every layout pass.
pub const NODE_COUNT: usize = 15;

/// Preferred size of a host view showing the indicator.
pub const INTRINSIC_CONTENT_SIZE: Size = Size::new(30.0, 30.0);

const ITERATIONS: usize = 5;

/// The 15 nodes of one layout pass, in index order.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeLayout {
  radius: f64,
  nodes: Vec<Node>,
}

impl NodeLayout {
  pub fn radius(&self) -> f64 {
    self.radius
  }

  pub fn len(&self) -> usize {
    self.nodes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  pub fn get(&self, index: usize) -> Option<&Node> {
    self.nodes.get(index)
  }

  pub fn center(&self, index: usize) -> Option<Point> {
    self.get(index).map(Node::center)
  }

  pub fn nodes(&self) -> &[Node] {
    &self.nodes
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Node> {
    self.nodes.iter()
  }
}

impl<'a> IntoIterator for &'a NodeLayout {
  type Item = &'a Node;
  type IntoIter = std::slice::Iter<'a, Node>;

  fn into_iter(self) -> Self::IntoIter {
    self.nodes.iter()
  }
}

/// Computes the lattice for a view of `width` x `height` anchored at the origin.
///
/// Zero or negative bounds give coincident or mirrored points, never an error.
pub fn compute_nodes(width: f64, height: f64) -> NodeLayout {
  compute_nodes_in(Rect::new(0.0, 0.0, width, height))
}

/// Computes the lattice inside `bounds`. The bottom row hangs from
/// `bounds.max_y()`; the column sits at half the bounds width.
#[instrument(level = "trace")]
pub fn compute_nodes_in(bounds: Rect) -> NodeLayout {
  let width = bounds.size.width;
  let radius = bounds.size.height / 8.0;
  let diameter = radius * 2.0;
  // Horizontal step between neighbouring clusters.
  let offset = (diameter.powi(2) - radius.powi(2)).sqrt();
  let top_width = ((4.0 * radius).powi(2) - diameter.powi(2)).sqrt();
  let max_y = bounds.max_y();

  let mut p1 = Point::new(width / 2.0 - radius, max_y - radius);
  let mut p2 = Point::new(p1.x + top_width, p1.y - diameter);
  let mut p3 = Point::new(p1.x + top_width, p1.y - 6.0 * radius);

  let mut nodes = Vec::with_capacity(NODE_COUNT);
  for _ in 0..ITERATIONS {
    for seed in [p1, p2, p3] {
      nodes.push(Node {
        index: nodes.len(),
        frame: Rect::new(seed.x, seed.y, diameter, diameter),
      });
    }

    p1.y -= diameter;

    p2.x -= offset;
    p2.y -= radius;

    p3.x -= offset;
    p3.y += radius;
  }

  NodeLayout { radius, nodes }
}

/// Lays out nodes for a host-reported size.
pub fn compute_nodes_for(bounds: Size) -> NodeLayout {
  compute_nodes(bounds.width, bounds.height)
}
