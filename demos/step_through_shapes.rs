//! Step through every shape the way the indicator's arrow buttons do, printing
//! the tracks each redraw issues.
//!
//! Set RUST_LOG=metatron_indicator=debug to see invalidations and redraws.

use metatron_indicator::{Controller, FixedHost, RecordingBackend, Shape};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let mut indicator = Controller::new(RecordingBackend::new(), FixedHost::new(300.0, 400.0))?;
  indicator.set_stencil_enabled(false);
  indicator.start_animating();

  for _ in Shape::SELECTABLE {
    indicator.step_shape(1);
    let summary = indicator.redraw()?;
    let name = indicator
      .selected_shape()
      .map(|s| s.name())
      .unwrap_or("none");
    println!(
      "{:>2} {:<14} {:>3} tracks",
      indicator.shape_index(),
      name,
      summary.shape_tracks
    );
  }

  indicator.select_shape(3);
  indicator.stop_animating();
  indicator.redraw()?;
  println!("paused cube:\n{}", indicator.backend().snapshot_json()?);
  Ok(())
}
