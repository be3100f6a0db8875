//! Error types for catalog validation, edge animation and configuration.

use thiserror::Error;

use crate::types::{Edge, Shape};

/// A catalog table references a node the layout never produces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
  #[error("{shape} edge #{position} ({edge}) references a node outside 0..{node_count}")]
  NodeIndexOutOfRange {
    shape: Shape,
    position: usize,
    edge: Edge,
    node_count: usize,
  },
}

/// An edge could not be resolved against the current layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimateError {
  #[error("edge {edge} references a node outside the {node_count}-node layout")]
  NodeOutOfRange { edge: Edge, node_count: usize },
}

/// Invalid indicator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("invalid configuration JSON: {0}")]
  Json(#[from] serde_json::Error),
  #[error("{layer} animation duration must be positive, got {duration}")]
  NonPositiveDuration { layer: &'static str, duration: f64 },
}

/// Failure to build a [crate::Controller].
#[derive(Debug, Error)]
pub enum SetupError {
  #[error(transparent)]
  Catalog(#[from] CatalogError),
  #[error(transparent)]
  Config(#[from] ConfigError),
}
