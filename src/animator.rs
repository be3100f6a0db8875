//! Edge animator: turns an edge list into stroke animation tracks.

use tracing::{debug, instrument};

use crate::backend::{Polyline, StrokeAnimation, StrokeBackend, TrackHandle};
use crate::error::AnimateError;
use crate::layout::NodeLayout;
use crate::types::{Edge, StrokeStyle, TimingProfile};

/// Straight path from the center of `edge.from` to the center of `edge.to`.
pub fn edge_path(edge: Edge, layout: &NodeLayout) -> Result<Polyline, AnimateError> {
  let out_of_range = || AnimateError::NodeOutOfRange {
    edge,
    node_count: layout.len(),
  };
  let start = layout.center(edge.from).ok_or_else(out_of_range)?;
  let end = layout.center(edge.to).ok_or_else(out_of_range)?;
  Ok(Polyline::line(start, end))
}

/// Builds one descriptor per edge, in edge order. Fails before anything is
/// built if an edge points outside the layout.
#[instrument(level = "trace", skip(edges, layout))]
pub fn stroke_animations(
  edges: &[Edge],
  layout: &NodeLayout,
  timing: &TimingProfile,
  style: &StrokeStyle,
) -> Result<Vec<StrokeAnimation>, AnimateError> {
  edges
    .iter()
    .map(|&edge| edge_path(edge, layout).map(|path| StrokeAnimation::new(path, *style, *timing)))
    .collect()
}

/// Registers one stroke animation per edge with `backend`.
///
/// Nothing is registered when any edge is out of range.
#[instrument(level = "trace", skip(edges, layout, backend))]
pub fn animate<B: StrokeBackend + ?Sized>(
  edges: &[Edge],
  layout: &NodeLayout,
  timing: &TimingProfile,
  style: &StrokeStyle,
  backend: &mut B,
) -> Result<Vec<TrackHandle>, AnimateError> {
  let animations = stroke_animations(edges, layout, timing, style)?;
  let handles: Vec<TrackHandle> = animations
    .iter()
    .map(|a| backend.register_stroke_animation(a))
    .collect();
  debug!(tracks = handles.len(), "registered stroke animations");
  Ok(handles)
}
