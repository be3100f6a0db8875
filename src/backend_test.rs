//! Tests for `RecordingBackend`, `FixedHost` and the descriptor types.

use crate::backend::{
  BackendEvent, FixedHost, HostView, Polyline, RecordingBackend, StrokeAnimation, StrokeBackend,
  TrackHandle,
};
use crate::types::{Color, Point, Size, StrokeStyle, TimingProfile};

fn line_animation() -> StrokeAnimation {
  StrokeAnimation::new(
    Polyline::line(Point::new(0.0, 0.0), Point::new(3.0, 4.0)),
    StrokeStyle::shape_default(),
    TimingProfile::shape_default(),
  )
}

#[test]
fn descriptor_defaults() {
  let a = line_animation();
  assert_eq!(a.fill, Color::CLEAR);
  assert_eq!(a.initial_stroke_end, 0.0);
  assert!(!a.removed_on_completion);
  assert_eq!(a.path.length(), 5.0);
  assert_eq!(a.path.start(), Some(Point::new(0.0, 0.0)));
  assert_eq!(a.path.end(), Some(Point::new(3.0, 4.0)));
}

#[test]
fn empty_polyline_has_no_ends() {
  let p = Polyline::default();
  assert!(p.start().is_none());
  assert_eq!(p.length(), 0.0);
}

#[test]
fn handles_are_unique_and_ordered() {
  let mut backend = RecordingBackend::new();
  let a = backend.register_stroke_animation(&line_animation());
  let b = backend.register_stroke_animation(&line_animation());
  assert_eq!(a, TrackHandle(0));
  assert_eq!(b, TrackHandle(1));
  assert_eq!(backend.track_count(), 2);
}

#[test]
fn clear_removes_tracks_and_logs_count() {
  let mut backend = RecordingBackend::new();
  backend.register_stroke_animation(&line_animation());
  backend.register_stroke_animation(&line_animation());
  backend.clear_all_animations();
  assert_eq!(backend.track_count(), 0);
  assert_eq!(
    backend.events().last(),
    Some(&BackendEvent::Cleared { removed: 2 })
  );
  // Handles keep increasing after a clear.
  let c = backend.register_stroke_animation(&line_animation());
  assert_eq!(c, TrackHandle(2));
}

#[test]
fn snapshot_is_json_array() {
  let mut backend = RecordingBackend::new();
  backend.register_stroke_animation(&line_animation());
  let json = backend.snapshot_json().unwrap();
  let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
  let arr = parsed.as_array().unwrap();
  assert_eq!(arr.len(), 1);
  assert_eq!(arr[0]["timing"]["from_value"], -1.0);
  assert_eq!(arr[0]["removed_on_completion"], false);
  assert_eq!(arr[0]["path"]["points"][1]["y"], 4.0);
}

#[test]
fn event_serializes_tagged() {
  let json = serde_json::to_string(&BackendEvent::Cleared { removed: 3 }).unwrap();
  assert_eq!(json, r#"{"event":"cleared","removed":3}"#);
}

#[test]
fn fixed_host_counts_redraws() {
  let mut host = FixedHost::new(30.0, 30.0);
  assert_eq!(host.current_bounds(), Size::new(30.0, 30.0));
  host.request_redraw();
  host.request_redraw();
  assert_eq!(host.redraw_requests(), 2);
  host.set_bounds(Size::new(10.0, 20.0));
  assert_eq!(host.current_bounds(), Size::new(10.0, 20.0));
}
