//! # metatron-indicator
//!
//! Animated sacred-geometry activity indicator: fifteen lattice nodes, a
//! static catalog of edge sets (Platonic solids and Metatron's Cube), and a
//! controller that issues one stroke-reveal animation per edge.
//!
//! ## Architecture
//!
//! - [layout]: 15 node centers from the view bounds.
//! - [catalog]: named node-index pair tables.
//! - [animator]: edge lists to [backend::StrokeAnimation] descriptors.
//! - [controller]: selection, styles, start/stop and the redraw cycle.
//!
//! Drawing and animation clocks stay behind [backend::StrokeBackend] and
//! [backend::HostView].

pub mod animator;
pub mod backend;
#[cfg(test)]
mod backend_test;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod layout;
#[cfg(test)]
mod layout_test;
pub mod types;

pub use backend::{
  FixedHost, HostView, Polyline, RecordingBackend, StrokeAnimation, StrokeBackend, TrackHandle,
};
pub use catalog::{edges_for, edges_for_index, validate_catalog};
pub use config::{IndicatorConfig, LayerConfig};
pub use controller::{Controller, ControllerState, RedrawSummary};
pub use error::{AnimateError, CatalogError, ConfigError, SetupError};
pub use layout::{NODE_COUNT, NodeLayout, compute_nodes, compute_nodes_in};
pub use types::{Color, Edge, Node, Point, Shape, Size, StrokeStyle, TimingProfile};
