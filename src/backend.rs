//! Seams to the host view and the rendering backend.
//!
//! The indicator never draws or ticks a clock itself. It hands the backend one
//! [StrokeAnimation] descriptor per line and asks the host for redraws; the
//! backend advances stroke progress on its own clock.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::types::{Color, Point, Size, StrokeStyle, TimingProfile};

/// Opaque id of a registered animation track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackHandle(pub u64);

/// Open path through a list of points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
  pub points: Vec<Point>,
}

impl Polyline {
  /// Straight segment from `start` to `end`.
  pub fn line(start: Point, end: Point) -> Self {
    Self {
      points: vec![start, end],
    }
  }

  pub fn start(&self) -> Option<Point> {
    self.points.first().copied()
  }

  pub fn end(&self) -> Option<Point> {
    self.points.last().copied()
  }

  pub fn length(&self) -> f64 {
    self
      .points
      .windows(2)
      .map(|w| w[0].distance_to(w[1]))
      .sum()
  }
}

/// Everything the backend needs to draw and animate one stroked line.
///
/// The animated parameter is the stroke end: the fraction of the path drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeAnimation {
  pub path: Polyline,
  pub style: StrokeStyle,
  pub fill: Color,
  /// Stroke end of the drawable before the animation attaches.
  pub initial_stroke_end: f32,
  pub timing: TimingProfile,
  /// Always false: the drawable keeps its last animated state between cycles.
  pub removed_on_completion: bool,
}

impl StrokeAnimation {
  pub fn new(path: Polyline, style: StrokeStyle, timing: TimingProfile) -> Self {
    Self {
      path,
      style,
      fill: Color::CLEAR,
      initial_stroke_end: 0.0,
      timing,
      removed_on_completion: false,
    }
  }
}

/// Vector renderer that owns animation tracks.
pub trait StrokeBackend {
  /// Attaches one stroked path and its progress animation.
  fn register_stroke_animation(&mut self, animation: &StrokeAnimation) -> TrackHandle;

  /// Detaches every track this indicator registered.
  fn clear_all_animations(&mut self);
}

/// View system hosting the indicator.
pub trait HostView {
  fn current_bounds(&self) -> Size;

  /// Asks the host to call back into `Controller::redraw` on its next pass.
  fn request_redraw(&mut self);
}

/// What happened to a [RecordingBackend], in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BackendEvent {
  Registered { handle: TrackHandle },
  Cleared { removed: usize },
}

/// Backend that keeps descriptors in memory instead of drawing them.
#[derive(Debug, Default)]
pub struct RecordingBackend {
  tracks: Vec<(TrackHandle, StrokeAnimation)>,
  events: Vec<BackendEvent>,
  next_handle: u64,
}

impl RecordingBackend {
  pub fn new() -> Self {
    Self::default()
  }

  /// Tracks attached right now, in registration order.
  pub fn tracks(&self) -> &[(TrackHandle, StrokeAnimation)] {
    &self.tracks
  }

  pub fn animations(&self) -> impl Iterator<Item = &StrokeAnimation> {
    self.tracks.iter().map(|(_, a)| a)
  }

  pub fn track_count(&self) -> usize {
    self.tracks.len()
  }

  pub fn events(&self) -> &[BackendEvent] {
    &self.events
  }

  pub fn clear_events(&mut self) {
    self.events.clear();
  }

  /// Current tracks as pretty JSON.
  pub fn snapshot_json(&self) -> serde_json::Result<String> {
    let animations: Vec<&StrokeAnimation> = self.animations().collect();
    serde_json::to_string_pretty(&animations)
  }
}

impl StrokeBackend for RecordingBackend {
  fn register_stroke_animation(&mut self, animation: &StrokeAnimation) -> TrackHandle {
    let handle = TrackHandle(self.next_handle);
    self.next_handle += 1;
    self.tracks.push((handle, animation.clone()));
    self.events.push(BackendEvent::Registered { handle });
    handle
  }

  fn clear_all_animations(&mut self) {
    let removed = self.tracks.len();
    self.tracks.clear();
    self.events.push(BackendEvent::Cleared { removed });
    trace!(removed, "recording backend cleared");
  }
}

/// Host with settable bounds that counts redraw requests.
#[derive(Debug, Clone, Default)]
pub struct FixedHost {
  bounds: Size,
  redraw_requests: usize,
}

impl FixedHost {
  pub fn new(width: f64, height: f64) -> Self {
    Self {
      bounds: Size::new(width, height),
      redraw_requests: 0,
    }
  }

  pub fn set_bounds(&mut self, bounds: Size) {
    self.bounds = bounds;
  }

  pub fn redraw_requests(&self) -> usize {
    self.redraw_requests
  }
}

impl HostView for FixedHost {
  fn current_bounds(&self) -> Size {
    self.bounds
  }

  fn request_redraw(&mut self) {
    self.redraw_requests += 1;
  }
}
