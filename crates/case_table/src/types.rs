//! Core data types for the case table.

use std::ops::Index;

use smallvec::SmallVec;

use crate::constants::{CASE_COUNT, MAX_LOOP_LEN, NO_EDGE};

/// Closed loop of cube edges, in traversal order.
///
/// Holds 3 to 6 edge indices on a cube; the last edge connects back to the
/// first.
pub type EdgeLoop = SmallVec<[u8; MAX_LOOP_LEN]>;

/// Triangle expressed as three cube edge indices.
///
/// Vertices are placed on the edges at extraction time, so the triangle only
/// names which edges to interpolate and in which winding order.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Triangle {
  pub edges: [u8; 3],
}

impl Triangle {
  /// Padding triangle used to fill fixed-width rows.
  pub const SENTINEL: Self = Self {
    edges: [NO_EDGE; 3],
  };

  #[inline]
  pub const fn new(e0: u8, e1: u8, e2: u8) -> Self {
    Self { edges: [e0, e1, e2] }
  }

  /// Same triangle with opposite winding (second and third edge swapped).
  #[inline]
  pub const fn flipped(self) -> Self {
    let [e0, e1, e2] = self.edges;
    Self::new(e0, e2, e1)
  }

  /// Returns true for the padding triangle.
  #[inline]
  pub const fn is_sentinel(&self) -> bool {
    self.edges[0] == NO_EDGE
  }

  /// 12-bit mask of the edges this triangle touches.
  pub fn edge_mask(&self) -> u16 {
    self.edges.iter().fold(0, |acc, &e| acc | (1 << e))
  }
}

impl From<Triangle> for (u8, u8, u8) {
  fn from(t: Triangle) -> Self {
    (t.edges[0], t.edges[1], t.edges[2])
  }
}

impl From<(u8, u8, u8)> for Triangle {
  fn from((e0, e1, e2): (u8, u8, u8)) -> Self {
    Self::new(e0, e1, e2)
  }
}

/// Triangles generated for one corner mask.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CaseEntry {
  /// Triangles in emission order (loop by loop).
  pub triangles: Vec<Triangle>,

  /// Number of triangles (always `triangles.len()`).
  pub count: u8,
}

impl CaseEntry {
  pub fn new(triangles: Vec<Triangle>) -> Self {
    let count = triangles.len() as u8;
    Self { triangles, count }
  }

  /// Returns true if the case produces no geometry.
  pub fn is_empty(&self) -> bool {
    self.triangles.is_empty()
  }

  /// Union of all edges referenced by this case.
  pub fn edge_mask(&self) -> u16 {
    self
      .triangles
      .iter()
      .fold(0, |acc, t| acc | t.edge_mask())
  }
}

/// Triangle lists for all 256 corner masks, indexed by mask.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CaseTable {
  entries: Vec<CaseEntry>,
}

impl CaseTable {
  /// Wrap a full set of entries.
  ///
  /// # Panics
  /// If `entries` does not hold exactly one entry per mask.
  pub fn from_entries(entries: Vec<CaseEntry>) -> Self {
    assert_eq!(
      entries.len(),
      CASE_COUNT,
      "case table needs one entry per corner mask"
    );
    Self { entries }
  }

  /// Entry for a corner mask.
  #[inline]
  pub fn entry(&self, mask: u8) -> &CaseEntry {
    &self.entries[mask as usize]
  }

  /// All entries, ordered by mask.
  pub fn entries(&self) -> &[CaseEntry] {
    &self.entries
  }

  /// Iterate `(mask, entry)` pairs in mask order.
  pub fn iter(&self) -> impl Iterator<Item = (u8, &CaseEntry)> {
    self
      .entries
      .iter()
      .enumerate()
      .map(|(mask, entry)| (mask as u8, entry))
  }

  /// Triangle count per mask.
  pub fn counts(&self) -> [u8; CASE_COUNT] {
    std::array::from_fn(|mask| self.entries[mask].count)
  }

  /// Largest triangle count of any case.
  pub fn max_triangles(&self) -> usize {
    self
      .entries
      .iter()
      .map(|e| e.triangles.len())
      .max()
      .unwrap_or(0)
  }

  /// Sum of triangle counts over all cases.
  pub fn total_triangles(&self) -> usize {
    self.entries.iter().map(|e| e.triangles.len()).sum()
  }
}

impl Index<u8> for CaseTable {
  type Output = CaseEntry;

  fn index(&self, mask: u8) -> &CaseEntry {
    self.entry(mask)
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
