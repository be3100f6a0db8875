//! Stencil/shape controller: owns the selection, the styles and the
//! invalidate-and-redraw cycle.
//!
//! Every setter clears the backend, moves to [ControllerState::Configured] and
//! asks the host for a redraw. The host answers with [Controller::redraw],
//! which lays out the nodes and re-issues all tracks: stencil first, then the
//! selected shape, so the shape renders on top.

use tracing::{debug, info, instrument, warn};

use crate::animator::stroke_animations;
use crate::backend::{HostView, StrokeBackend};
use crate::catalog::{edges_for, edges_for_index, validate_catalog};
use crate::config::{IndicatorConfig, LayerConfig};
use crate::error::{AnimateError, ConfigError, SetupError};
use crate::layout::{NodeLayout, compute_nodes_for};
use crate::types::{Color, Edge, Shape, StrokeStyle, TimingProfile};

/// Where the controller is in its draw cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
  /// Built, nothing configured or drawn yet.
  Idle,
  /// Tracks invalidated; waiting for the host's redraw.
  Configured,
  /// Drawn with motionless tracks; animation never started.
  LaidOut,
  /// Drawn with live from/to values.
  Animating,
  /// Drawn with from/to pinned after a stop.
  Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Motion {
  NotStarted,
  Running,
  Stopped,
}

/// Track counts of one redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RedrawSummary {
  pub nodes: usize,
  pub stencil_tracks: usize,
  pub shape_tracks: usize,
}

/// Drives one indicator view.
pub struct Controller<B, H> {
  backend: B,
  host: H,
  state: ControllerState,
  motion: Motion,
  shape_index: i64,
  draw_stencil: bool,
  repeat: bool,
  stencil: LayerConfig,
  shape: LayerConfig,
  nodes: Option<NodeLayout>,
}

impl<B: StrokeBackend, H: HostView> Controller<B, H> {
  /// Controller with the stock configuration.
  pub fn new(backend: B, host: H) -> Result<Self, SetupError> {
    Self::with_config(IndicatorConfig::default(), backend, host)
  }

  /// Validates the catalog and `config`. Starts idle when no shape index is
  /// set; otherwise starts configured with a redraw already requested.
  #[instrument(level = "trace", skip(backend, host))]
  pub fn with_config(config: IndicatorConfig, backend: B, host: H) -> Result<Self, SetupError> {
    validate_catalog()?;
    config.validate()?;
    let mut controller = Self {
      backend,
      host,
      state: ControllerState::Idle,
      motion: Motion::NotStarted,
      shape_index: config.shape_index,
      draw_stencil: config.draw_stencil,
      repeat: config.repeat,
      stencil: config.stencil,
      shape: config.shape,
      nodes: None,
    };
    if controller.shape_index != 0 {
      controller.state = ControllerState::Configured;
      controller.host.request_redraw();
    }
    Ok(controller)
  }

  pub fn state(&self) -> ControllerState {
    self.state
  }

  pub fn shape_index(&self) -> i64 {
    self.shape_index
  }

  pub fn selected_shape(&self) -> Option<Shape> {
    Shape::from_index(self.shape_index)
  }

  pub fn stencil_enabled(&self) -> bool {
    self.draw_stencil
  }

  pub fn repeat(&self) -> bool {
    self.repeat
  }

  pub fn is_animating(&self) -> bool {
    self.motion == Motion::Running
  }

  /// Nodes of the last redraw; `None` while invalidated.
  pub fn nodes(&self) -> Option<&NodeLayout> {
    self.nodes.as_ref()
  }

  pub fn stencil_style(&self) -> StrokeStyle {
    self.stencil.style
  }

  pub fn shape_style(&self) -> StrokeStyle {
    self.shape.style
  }

  /// Configured stencil timing, before pausing or repeat overrides.
  pub fn stencil_timing(&self) -> TimingProfile {
    self.stencil.timing
  }

  pub fn shape_timing(&self) -> TimingProfile {
    self.shape.timing
  }

  /// Stencil timing as the next redraw will issue it.
  pub fn live_stencil_timing(&self) -> TimingProfile {
    self.live(self.stencil.timing)
  }

  /// Shape timing as the next redraw will issue it.
  pub fn live_shape_timing(&self) -> TimingProfile {
    self.live(self.shape.timing)
  }

  pub fn backend(&self) -> &B {
    &self.backend
  }

  pub fn backend_mut(&mut self) -> &mut B {
    &mut self.backend
  }

  pub fn host(&self) -> &H {
    &self.host
  }

  pub fn host_mut(&mut self) -> &mut H {
    &mut self.host
  }

  fn live(&self, configured: TimingProfile) -> TimingProfile {
    let timing = TimingProfile {
      repeat_forever: configured.repeat_forever && self.repeat,
      ..configured
    };
    match self.motion {
      Motion::Running => timing,
      Motion::NotStarted | Motion::Stopped => timing.paused(),
    }
  }

  /// Drops every track and asks the host for a redraw.
  fn invalidate(&mut self, reason: &'static str) {
    self.backend.clear_all_animations();
    self.nodes = None;
    self.state = ControllerState::Configured;
    debug!(reason, "invalidated");
    self.host.request_redraw();
  }

  /// Host notification that its bounds changed.
  pub fn bounds_changed(&mut self) {
    self.invalidate("bounds");
  }

  /// Selects a shape by index. Indices without a shape draw nothing.
  pub fn select_shape(&mut self, index: i64) {
    self.shape_index = index;
    self.invalidate("shape");
  }

  /// Moves the selection by `delta` without wrapping.
  pub fn step_shape(&mut self, delta: i64) {
    self.select_shape(self.shape_index.saturating_add(delta));
  }

  pub fn set_stencil_enabled(&mut self, enabled: bool) {
    self.draw_stencil = enabled;
    self.invalidate("stencil toggle");
  }

  pub fn set_stencil_style(&mut self, color: Color, width: f32) {
    self.stencil.style = StrokeStyle::new(color, width);
    self.invalidate("stencil style");
  }

  pub fn set_shape_style(&mut self, color: Color, width: f32) {
    self.shape.style = StrokeStyle::new(color, width);
    self.invalidate("shape style");
  }

  /// When off, both layers play a single cycle.
  pub fn set_repeat(&mut self, repeat: bool) {
    self.repeat = repeat;
    self.invalidate("repeat toggle");
  }

  pub fn set_stencil_timing(&mut self, timing: TimingProfile) -> Result<(), ConfigError> {
    timing.validate("stencil")?;
    self.stencil.timing = timing;
    self.invalidate("stencil timing");
    Ok(())
  }

  pub fn set_shape_timing(&mut self, timing: TimingProfile) -> Result<(), ConfigError> {
    timing.validate("shape")?;
    self.shape.timing = timing;
    self.invalidate("shape timing");
    Ok(())
  }

  /// Issues the configured from/to values on the next redraw.
  pub fn start_animating(&mut self) {
    self.motion = Motion::Running;
    self.invalidate("start");
  }

  /// Pins from/to to 1.0 on the next redraw; tracks stay attached but still.
  pub fn stop_animating(&mut self) {
    self.motion = Motion::Stopped;
    self.invalidate("stop");
  }

  /// Lays out the nodes and re-issues every track. Safe to call repeatedly.
  pub fn redraw(&mut self) -> Result<RedrawSummary, AnimateError> {
    if self.shape_index != 0 && self.selected_shape().is_none() {
      warn!(index = self.shape_index, "no shape at selection index");
    }
    let stencil_edges: &[Edge] = if self.draw_stencil {
      edges_for(Shape::Stencil)
    } else {
      &[]
    };
    self.redraw_edges(stencil_edges, edges_for_index(self.shape_index))
  }

  /// Builds every descriptor for both layers before touching the backend, so
  /// a failing edge leaves tracks, nodes and state as they were.
  #[instrument(level = "trace", skip(self, stencil_edges, shape_edges))]
  pub(crate) fn redraw_edges(
    &mut self,
    stencil_edges: &[Edge],
    shape_edges: &[Edge],
  ) -> Result<RedrawSummary, AnimateError> {
    let bounds = self.host.current_bounds();
    let layout = compute_nodes_for(bounds);
    let stencil = stroke_animations(
      stencil_edges,
      &layout,
      &self.live_stencil_timing(),
      &self.stencil.style,
    )?;
    let shape = stroke_animations(
      shape_edges,
      &layout,
      &self.live_shape_timing(),
      &self.shape.style,
    )?;

    self.backend.clear_all_animations();
    // Stencil first so the shape renders on top.
    for animation in stencil.iter().chain(&shape) {
      self.backend.register_stroke_animation(animation);
    }
    let stencil_tracks = stencil.len();
    let shape_tracks = shape.len();

    let summary = RedrawSummary {
      nodes: layout.len(),
      stencil_tracks,
      shape_tracks,
    };
    self.nodes = Some(layout);
    self.state = match self.motion {
      Motion::NotStarted => ControllerState::LaidOut,
      Motion::Running => ControllerState::Animating,
      Motion::Stopped => ControllerState::Paused,
    };
    info!(
      width = bounds.width,
      height = bounds.height,
      shape = ?self.selected_shape(),
      stencil_tracks,
      shape_tracks,
      state = ?self.state,
      "redraw complete"
    );
    Ok(summary)
  }
}
