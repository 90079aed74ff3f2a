//! Edge loop triangulation.
//!
//! ```text
//! loop length   triangles (loop-relative indices)
//! ───────────   ─────────────────────────────────────
//!      3        (0,1,2)
//!      4        (0,1,2) (0,2,3)
//!      5        (0,1,2) (0,2,3) (0,3,4)
//!      6        (0,1,2) (0,2,3) (0,3,5) (3,4,5)
//! ```

use smallvec::SmallVec;

use crate::constants::{MAX_LOOP_LEN, MAX_TRIANGLES_PER_CASE, MIN_LOOP_LEN};
use crate::error::TriangulateError;
use crate::types::Triangle;

/// Loop-relative vertex indices of each triangle, per loop length.
const FAN_TRIANGLE: &[[usize; 3]] = &[[0, 1, 2]];
const FAN_QUAD: &[[usize; 3]] = &[[0, 1, 2], [0, 2, 3]];
const FAN_PENTAGON: &[[usize; 3]] = &[[0, 1, 2], [0, 2, 3], [0, 3, 4]];
const SPLIT_HEXAGON: &[[usize; 3]] = &[[0, 1, 2], [0, 2, 3], [0, 3, 5], [3, 4, 5]];

/// Triangles of one loop (at most 4).
pub type LoopTriangles = SmallVec<[Triangle; MAX_TRIANGLES_PER_CASE]>;

/// Triangulate a closed edge loop.
///
/// With `invert` set, the second and third edge of every triangle are
/// swapped.
///
/// # Panics
/// If the loop does not have [`MIN_LOOP_LEN`] to [`MAX_LOOP_LEN`] edges.
pub fn triangulate(edge_loop: &[u8], invert: bool) -> LoopTriangles {
  try_triangulate(edge_loop, invert).unwrap_or_else(|err| panic!("{err}"))
}

/// Triangulate a closed edge loop, reporting unsupported lengths.
pub fn try_triangulate(edge_loop: &[u8], invert: bool) -> Result<LoopTriangles, TriangulateError> {
  let len = edge_loop.len();
  if !(MIN_LOOP_LEN..=MAX_LOOP_LEN).contains(&len) {
    return Err(TriangulateError::UnexpectedLoopLength { len });
  }

  let pattern = match len {
    3 => FAN_TRIANGLE,
    4 => FAN_QUAD,
    5 => FAN_PENTAGON,
    // A plain fan from e0 folds over for this loop shape
    _ => SPLIT_HEXAGON,
  };

  Ok(
    pattern
      .iter()
      .map(|&[a, b, c]| {
        let triangle = Triangle::new(edge_loop[a], edge_loop[b], edge_loop[c]);
        if invert {
          triangle.flipped()
        } else {
          triangle
        }
      })
      .collect(),
  )
}

#[cfg(test)]
#[path = "triangulate_test.rs"]
mod triangulate_test;
