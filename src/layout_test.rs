//! Tests for `compute_nodes`.

use proptest::prelude::*;

use crate::layout::{
  INTRINSIC_CONTENT_SIZE, NODE_COUNT, compute_nodes, compute_nodes_for, compute_nodes_in,
};
use crate::types::{Point, Rect, Size};

const EPS: f64 = 1e-9;

fn assert_close(actual: Point, expected: (f64, f64)) {
  assert!(
    (actual.x - expected.0).abs() < 1e-6 && (actual.y - expected.1).abs() < 1e-6,
    "expected {:?}, got {:?}",
    expected,
    actual
  );
}

#[test]
fn produces_fifteen_indexed_nodes() {
  let layout = compute_nodes(300.0, 400.0);
  assert_eq!(layout.len(), NODE_COUNT);
  for (i, node) in layout.iter().enumerate() {
    assert_eq!(node.index, i);
  }
}

#[test]
fn scenario_300_by_400() {
  let layout = compute_nodes(300.0, 400.0);
  let r = 50.0;
  assert_eq!(layout.radius(), r);

  let offset = (100.0f64.powi(2) - 50.0f64.powi(2)).sqrt();
  let top_width = (200.0f64.powi(2) - 100.0f64.powi(2)).sqrt();
  assert!((offset - 86.6025).abs() < 1e-3);
  assert!((top_width - 173.2051).abs() < 1e-3);

  // Node boxes are 2r wide, so centers sit r right of and below each seed.
  assert_close(layout.center(0).unwrap(), (150.0, 400.0));
  assert_close(layout.center(1).unwrap(), (150.0 + top_width, 300.0));
  assert_close(layout.center(2).unwrap(), (150.0 + top_width, 100.0));
  assert_close(layout.center(3).unwrap(), (150.0, 300.0));
  assert_close(layout.center(4).unwrap(), (150.0 + top_width - offset, 250.0));
  assert_close(layout.center(5).unwrap(), (150.0 + top_width - offset, 150.0));
  assert_close(layout.center(6).unwrap(), (150.0, 200.0));
  assert_close(layout.center(12).unwrap(), (150.0, 0.0));
  assert_close(
    layout.center(13).unwrap(),
    (150.0 + top_width - 4.0 * offset, 100.0),
  );
  assert_close(
    layout.center(14).unwrap(),
    (150.0 + top_width - 4.0 * offset, 300.0),
  );
}

#[test]
fn node_frames_are_squares_of_diameter() {
  let layout = compute_nodes(120.0, 80.0);
  for node in &layout {
    assert_eq!(node.frame.size.width, 20.0);
    assert_eq!(node.frame.size.height, 20.0);
  }
}

#[test]
fn outer_ring_is_a_regular_hexagon() {
  let layout = compute_nodes(300.0, 400.0);
  let r = layout.radius();
  let ring = [0, 1, 2, 12, 13, 14];
  let hub = layout.center(6).unwrap();
  for i in ring {
    let d = hub.distance_to(layout.center(i).unwrap());
    assert!((d - 4.0 * r).abs() < 1e-6, "node {} at {}", i, d);
  }
  for pair in ring.windows(2) {
    let a = layout.center(pair[0]).unwrap();
    let b = layout.center(pair[1]).unwrap();
    assert!((a.distance_to(b) - 4.0 * r).abs() < 1e-6);
  }
}

#[test]
fn zero_bounds_collapse_to_one_point() {
  let layout = compute_nodes(0.0, 0.0);
  assert_eq!(layout.len(), NODE_COUNT);
  for node in &layout {
    assert_eq!(node.center(), Point::new(0.0, 0.0));
  }
}

#[test]
fn negative_bounds_are_well_defined() {
  let layout = compute_nodes(-100.0, -80.0);
  assert_eq!(layout.len(), NODE_COUNT);
  for node in &layout {
    let c = node.center();
    assert!(c.x.is_finite() && c.y.is_finite());
  }
}

#[test]
fn sized_entry_point_matches() {
  assert_eq!(
    compute_nodes_for(Size::new(64.0, 48.0)),
    compute_nodes(64.0, 48.0)
  );
}

#[test]
fn bottom_row_hangs_from_bounds_max_y() {
  let layout = compute_nodes_in(Rect::new(10.0, 20.0, 300.0, 400.0));
  assert_eq!(layout.radius(), 50.0);
  assert_close(layout.center(0).unwrap(), (150.0, 420.0));
  assert_close(layout.center(12).unwrap(), (150.0, 20.0));
}

#[test]
fn origin_bounds_match_plain_size() {
  assert_eq!(
    compute_nodes_in(Rect::new(0.0, 0.0, 300.0, 400.0)),
    compute_nodes(300.0, 400.0)
  );
}

#[test]
fn intrinsic_size_is_square() {
  assert_eq!(INTRINSIC_CONTENT_SIZE, Size::new(30.0, 30.0));
  assert_eq!(compute_nodes_for(INTRINSIC_CONTENT_SIZE).radius(), 3.75);
}

#[test]
fn out_of_range_lookup_is_none() {
  let layout = compute_nodes(10.0, 10.0);
  assert!(layout.get(NODE_COUNT).is_none());
  assert!(layout.center(99).is_none());
}

proptest! {
  #[test]
  fn layout_is_deterministic(w in 0.0f64..4096.0, h in 0.0f64..4096.0) {
    prop_assert_eq!(compute_nodes(w, h), compute_nodes(w, h));
  }

  #[test]
  fn node_twelve_sits_eight_radii_above_node_zero(w in 1.0f64..4096.0, h in 1.0f64..4096.0) {
    let layout = compute_nodes(w, h);
    let r = h / 8.0;
    let bottom = layout.center(0).unwrap();
    let top = layout.center(12).unwrap();
    prop_assert!((bottom.x - top.x).abs() < EPS * w.max(1.0));
    prop_assert!((bottom.y - top.y - 8.0 * r).abs() < 1e-6 * h);
  }

  #[test]
  fn first_column_steps_by_diameter(w in 1.0f64..2048.0, h in 1.0f64..2048.0) {
    let layout = compute_nodes(w, h);
    let r = h / 8.0;
    for k in 1..5 {
      let prev = layout.center(3 * (k - 1)).unwrap();
      let next = layout.center(3 * k).unwrap();
      prop_assert!((prev.y - next.y - 2.0 * r).abs() < 1e-6 * h);
    }
  }
}
