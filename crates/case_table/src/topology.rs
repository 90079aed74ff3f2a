//! Fixed cube adjacency used by the loop tracer.
//!
//! # Cube Topology
//!
//! ```text
//!       6──────7         Corners (binary ZYX):
//!      /│     /│           0=(0,0,0)  1=(1,0,0)  2=(0,1,0)  3=(1,1,0)
//!     4─┼────5 │           4=(0,0,1)  5=(1,0,1)  6=(0,1,1)  7=(1,1,1)
//!     │ 2────┼─3
//!     │/     │/          +Y
//!     0──────1            │  +Z
//!                         │ /
//!                         └───+X
//! ```
//!
//! # Edge Layout
//!
//! ```text
//! 12 edges total (4 per axis):
//!
//! X-axis edges (parallel to X):
//!   Edge 0:  [0,1] at Y=0, Z=0 (bottom-back)
//!   Edge 5:  [2,3] at Y=1, Z=0 (top-back)
//!   Edge 8:  [4,5] at Y=0, Z=1 (bottom-front)
//!   Edge 11: [6,7] at Y=1, Z=1 (top-front)
//!
//! Y-axis edges (parallel to Y):
//!   Edge 1:  [0,2] at X=0, Z=0 (left-back)
//!   Edge 3:  [1,3] at X=1, Z=0 (right-back)
//!   Edge 9:  [4,6] at X=0, Z=1 (left-front)
//!   Edge 10: [5,7] at X=1, Z=1 (right-front)
//!
//! Z-axis edges (parallel to Z):
//!   Edge 2:  [0,4] at X=0, Y=0 (bottom-left)
//!   Edge 4:  [1,5] at X=1, Y=0 (bottom-right)
//!   Edge 6:  [2,6] at X=0, Y=1 (top-left)
//!   Edge 7:  [3,7] at X=1, Y=1 (top-right)
//! ```
//!
//! # Links
//!
//! Every corner has three incident edges, addressed by a link index 0..3.
//! [`VERTEX_EDGES`] names the edge behind each link and
//! [`VERTEX_NEIGHBOURS`] the corner it leads to. Links are listed in the same
//! rotational order at every corner: the outgoing edge directions
//! `(link 0, link 1, link 2)` always form a right-handed frame. The tracer
//! turns onto link `k + 1` then `k + 2` when it wraps around a corner, so
//! this ordering fixes the orientation of every traced loop.
//!
//! ```text
//! Corner 0:  link 0 → edge 0 → corner 1  (+X)
//!            link 1 → edge 1 → corner 2  (+Y)
//!            link 2 → edge 2 → corner 4  (+Z)
//! ```

use crate::constants::{CASE_COUNT, CORNER_COUNT, EDGE_COUNT, LINKS_PER_CORNER};

/// Edge endpoint corner indices.
/// Each edge connects two corners of the 2×2×2 cube.
pub const EDGE_CORNERS: [[u8; 2]; EDGE_COUNT] = [
  [0, 1], // Edge 0:  X axis at Y=0, Z=0
  [0, 2], // Edge 1:  Y axis at X=0, Z=0
  [0, 4], // Edge 2:  Z axis at X=0, Y=0
  [1, 3], // Edge 3:  Y axis at X=1, Z=0
  [1, 5], // Edge 4:  Z axis at X=1, Y=0
  [2, 3], // Edge 5:  X axis at Y=1, Z=0
  [2, 6], // Edge 6:  Z axis at X=0, Y=1
  [3, 7], // Edge 7:  Z axis at X=1, Y=1
  [4, 5], // Edge 8:  X axis at Y=0, Z=1
  [4, 6], // Edge 9:  Y axis at X=0, Z=1
  [5, 7], // Edge 10: Y axis at X=1, Z=1
  [6, 7], // Edge 11: X axis at Y=1, Z=1
];

/// Edges incident to each corner, one per link index.
pub const VERTEX_EDGES: [[u8; LINKS_PER_CORNER]; CORNER_COUNT] = [
  [0, 1, 2],   // Corner 0
  [0, 4, 3],   // Corner 1
  [1, 5, 6],   // Corner 2
  [3, 7, 5],   // Corner 3
  [2, 9, 8],   // Corner 4
  [4, 8, 10],  // Corner 5
  [6, 11, 9],  // Corner 6
  [7, 10, 11], // Corner 7
];

/// Corner reached by following each link of [`VERTEX_EDGES`].
pub const VERTEX_NEIGHBOURS: [[u8; LINKS_PER_CORNER]; CORNER_COUNT] = [
  [1, 2, 4], // Corner 0
  [0, 5, 3], // Corner 1
  [0, 3, 6], // Corner 2
  [1, 7, 2], // Corner 3
  [0, 6, 5], // Corner 4
  [1, 4, 7], // Corner 5
  [2, 7, 4], // Corner 6
  [3, 5, 6], // Corner 7
];

/// Precomputed edge table.
/// Index: 8-bit corner mask (which corners are inside)
/// Value: 12-bit edge mask (which edges have crossings)
///
/// An edge has a crossing if exactly one of its endpoint corners is inside.
/// The loops traced for a case cover exactly these edges.
pub const EDGE_TABLE: [u16; CASE_COUNT] = generate_edge_table();

/// Generate the edge table at compile time.
const fn generate_edge_table() -> [u16; CASE_COUNT] {
  let mut table = [0u16; CASE_COUNT];
  let mut corner_mask = 0usize;

  while corner_mask < CASE_COUNT {
    let mut edge_mask = 0u16;
    let mut edge = 0;

    while edge < EDGE_COUNT {
      let c0 = EDGE_CORNERS[edge][0] as usize;
      let c1 = EDGE_CORNERS[edge][1] as usize;

      let inside0 = (corner_mask >> c0) & 1;
      let inside1 = (corner_mask >> c1) & 1;

      if inside0 != inside1 {
        edge_mask |= 1 << edge;
      }

      edge += 1;
    }

    table[corner_mask] = edge_mask;
    corner_mask += 1;
  }

  table
}

/// Edge behind `link` of `corner`.
#[inline(always)]
pub const fn edge(corner: u8, link: u8) -> u8 {
  VERTEX_EDGES[corner as usize][link as usize]
}

/// Corner reached from `corner` through `link`.
#[inline(always)]
pub const fn other_vertex(corner: u8, link: u8) -> u8 {
  VERTEX_NEIGHBOURS[corner as usize][link as usize]
}

/// Link index of `edge` at `corner`, if the edge touches that corner.
#[inline]
pub fn link_of(corner: u8, edge: u8) -> Option<u8> {
  VERTEX_EDGES[corner as usize]
    .iter()
    .position(|&e| e == edge)
    .map(|link| link as u8)
}

/// ZYX corner of each vertex in the classic ring numbering.
///
/// The classic layout numbers the bottom face `0..4` and the top face `4..8`,
/// each as a ring, with edges `0..4` and `4..8` along those rings and `8..12`
/// joining vertex `i` to `i + 4`. Hand-authored tables use it.
pub const CLASSIC_CORNERS: [u8; CORNER_COUNT] = [4, 6, 7, 5, 0, 2, 3, 1];

/// ZYX edge of each classic edge, following [`CLASSIC_CORNERS`].
pub const CLASSIC_EDGES: [u8; EDGE_COUNT] = [9, 11, 10, 8, 1, 5, 3, 0, 2, 6, 7, 4];

/// Convert a corner mask from classic vertex bits to ZYX corner bits.
pub const fn classic_mask(mask: u8) -> u8 {
  let mut out = 0u8;
  let mut vertex = 0;
  while vertex < CORNER_COUNT {
    if (mask >> vertex) & 1 == 1 {
      out |= 1 << CLASSIC_CORNERS[vertex];
    }
    vertex += 1;
  }
  out
}

#[cfg(test)]
#[path = "topology_test.rs"]
mod topology_test;
