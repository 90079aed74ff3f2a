//! Cube and table size constants.
//!
//! # Coordinate System
//!
//! ```text
//!         +Y
//!          │
//!          │
//!          │
//!          └───────── +X
//!         /
//!        /
//!       +Z
//!
//! Cell corner indices (binary: ZYX):
//!   0 = (0,0,0)    4 = (0,0,1)
//!   1 = (1,0,0)    5 = (1,0,1)
//!   2 = (0,1,0)    6 = (0,1,1)
//!   3 = (1,1,0)    7 = (1,1,1)
//! ```
//!
//! # Case Index
//!
//! ```text
//! mask = Σ inside(corner) << corner
//!
//!   bit:   7   6   5   4   3   2   1   0
//!        ┌───┬───┬───┬───┬───┬───┬───┬───┐
//!        │c7 │c6 │c5 │c4 │c3 │c2 │c1 │c0 │   1 = inside, 0 = outside
//!        └───┴───┴───┴───┴───┴───┴───┴───┘
//! ```

/// Number of cube corners.
pub const CORNER_COUNT: usize = 8;

/// Number of cube edges.
pub const EDGE_COUNT: usize = 12;

/// Edges incident to each corner.
pub const LINKS_PER_CORNER: usize = 3;

/// Number of distinct corner masks (2^8).
pub const CASE_COUNT: usize = 1 << CORNER_COUNT;

/// Mask with every corner inside.
pub const FULL_MASK: u8 = 0xFF;

/// Shortest closed edge loop (a single isolated corner).
pub const MIN_LOOP_LEN: usize = 3;

/// Longest edge loop the tracer can produce on a cube.
pub const MAX_LOOP_LEN: usize = 6;

/// Most triangles the tracer emits for a single case.
pub const MAX_TRIANGLES_PER_CASE: usize = 4;

/// Iteration bound for tracing one loop (12 edges × small constant).
pub const TRACE_STEP_LIMIT: usize = EDGE_COUNT * 4;

/// Padding edge index for fixed-width table rows.
///
/// Renders as `-1` once widened to a signed shader integer.
pub const NO_EDGE: u8 = 0xFF;

/// Population count of a corner mask (number of inside corners).
#[inline(always)]
pub const fn inside_count(mask: u8) -> u32 {
  mask.count_ones()
}

/// True if `corner` is inside for `mask`.
#[inline(always)]
pub const fn is_inside(mask: u8, corner: u8) -> bool {
  (mask >> corner) & 1 == 1
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
