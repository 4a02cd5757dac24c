//! Elliptical layout for the transition graph.

use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::types::Point;

/// Canvas ellipse the graph view lays nodes out on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
  pub center: Point,
  pub radius_x: f64,
  pub radius_y: f64,
}

impl Default for LayoutConfig {
  fn default() -> Self {
    Self {
      center: Point::new(600.0, 400.0),
      radius_x: 500.0,
      radius_y: 320.0,
    }
  }
}

impl LayoutConfig {
  pub fn positions(&self, count: usize) -> Vec<Point> {
    compute_elliptical_positions(count, self.center, self.radius_x, self.radius_y)
  }
}

/// Places `count` points evenly around an ellipse, clockwise from the top.
///
/// Point `i` sits at angle `-π/2 + 2π·i/count`; with y growing downward the first point is
/// at `(center.x, center.y - radius_y)`.
#[instrument(level = "trace")]
pub fn compute_elliptical_positions(
  count: usize,
  center: Point,
  radius_x: f64,
  radius_y: f64,
) -> Vec<Point> {
  (0..count)
    .map(|i| {
      let angle = -FRAC_PI_2 + TAU * i as f64 / count as f64;
      Point::new(
        center.x + radius_x * angle.cos(),
        center.y + radius_y * angle.sin(),
      )
    })
    .collect()
}
