//! Geometry helpers for winding and layout tests.

use glam::Vec3;

use crate::topology::EDGE_CORNERS;

/// Get corner position within unit cube.
#[inline(always)]
pub fn corner_position(corner: u8) -> [f32; 3] {
  [
    (corner & 1) as f32,
    ((corner >> 1) & 1) as f32,
    ((corner >> 2) & 1) as f32,
  ]
}

/// Midpoint of an edge within the unit cube.
pub fn edge_midpoint(edge: u8) -> Vec3 {
  let [c0, c1] = EDGE_CORNERS[edge as usize];
  (Vec3::from(corner_position(c0)) + Vec3::from(corner_position(c1))) * 0.5
}
