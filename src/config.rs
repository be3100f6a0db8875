//! Indicator configuration with the stock look as defaults.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ConfigError;
use crate::types::{StrokeStyle, TimingProfile};

/// Style and timing for one layer of lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
  pub style: StrokeStyle,
  pub timing: TimingProfile,
}

impl LayerConfig {
  pub const fn stencil_default() -> Self {
    Self {
      style: StrokeStyle::stencil_default(),
      timing: TimingProfile::stencil_default(),
    }
  }

  pub const fn shape_default() -> Self {
    Self {
      style: StrokeStyle::shape_default(),
      timing: TimingProfile::shape_default(),
    }
  }
}

/// Initial state of a [crate::Controller].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
  pub draw_stencil: bool,
  /// Selection index; 0 draws no shape.
  pub shape_index: i64,
  /// When false, both layers run one cycle instead of repeating forever.
  pub repeat: bool,
  pub stencil: LayerConfig,
  pub shape: LayerConfig,
}

impl Default for IndicatorConfig {
  fn default() -> Self {
    Self {
      draw_stencil: true,
      shape_index: 0,
      repeat: true,
      stencil: LayerConfig::stencil_default(),
      shape: LayerConfig::shape_default(),
    }
  }
}

impl IndicatorConfig {
  /// Parses JSON; missing fields take their defaults.
  #[instrument(level = "trace", skip(json))]
  pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
    let config: IndicatorConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    self.stencil.timing.validate("stencil")?;
    self.shape.timing.validate("shape")
  }
}
