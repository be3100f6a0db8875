//! Value types shared across the layout engine, the catalog and the animator.

mod edge;
mod geometry;
mod node;
mod shape;
mod stroke_style;
mod timing_profile;

pub use edge::Edge;
pub use geometry::{Point, Rect, Size};
pub use node::Node;
pub use shape::Shape;
pub use stroke_style::{Color, StrokeStyle};
pub use timing_profile::{PAUSED_STROKE_END, TimingProfile};
