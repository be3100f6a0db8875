//! Timing of a stroke-reveal animation.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Stroke-end value that shows the whole line and does not move.
pub const PAUSED_STROKE_END: f32 = 1.0;

/// Timing of a stroke-reveal animation: the stroke end runs from `from_value`
/// to `to_value` over `duration_secs`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingProfile {
  /// Seconds per forward pass. Must be positive.
  pub duration_secs: f64,
  pub from_value: f32,
  pub to_value: f32,
  pub autoreverse: bool,
  pub repeat_forever: bool,
}

impl TimingProfile {
  pub const fn stencil_default() -> Self {
    Self {
      duration_secs: 2.0,
      from_value: -0.5,
      to_value: 2.0,
      autoreverse: true,
      repeat_forever: true,
    }
  }

  pub const fn shape_default() -> Self {
    Self {
      duration_secs: 2.0,
      from_value: -1.0,
      to_value: 1.5,
      autoreverse: true,
      repeat_forever: true,
    }
  }

  /// Copy with from/to pinned to [PAUSED_STROKE_END]: attached but motionless.
  pub fn paused(&self) -> Self {
    Self {
      from_value: PAUSED_STROKE_END,
      to_value: PAUSED_STROKE_END,
      ..*self
    }
  }

  pub fn is_motionless(&self) -> bool {
    self.from_value == self.to_value
  }

  /// Rejects zero, negative and non-finite durations.
  pub fn validate(&self, layer: &'static str) -> Result<(), ConfigError> {
    if self.duration_secs.is_finite() && self.duration_secs > 0.0 {
      Ok(())
    } else {
      Err(ConfigError::NonPositiveDuration {
        layer,
        duration: self.duration_secs,
      })
    }
  }
}
