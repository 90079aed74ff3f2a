//! Error types for table construction, export and import.

use thiserror::Error;

use crate::constants::{MAX_LOOP_LEN, MIN_LOOP_LEN};

/// Failures of the edge-loop tracer.
///
/// Every variant is an internal-consistency failure: the topology tables are
/// wrong, or the mask is one the tracer cannot resolve (an unreduced
/// high-popcount mask, see [`crate::reduce`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
  /// A traced edge does not touch the corner it supposedly leads to.
  #[error("case {mask:#04x}: edge {edge} is not incident to corner {corner}")]
  EdgeTable { mask: u8, corner: u8, edge: u8 },

  /// A candidate edge was already claimed by a node that is not a neighbour,
  /// so the loop would cross itself.
  #[error(
    "case {mask:#04x}: edge {edge} already claimed, expected it on the {side} node but found edge {found}"
  )]
  ForeignEdge {
    mask: u8,
    edge: u8,
    side: NeighbourSide,
    found: u8,
  },

  /// The loop did not close within the step bound.
  #[error("case {mask:#04x}: loop seeded at corner {seed} did not close after {steps} steps")]
  NonTerminating { mask: u8, seed: u8, steps: usize },
}

/// Which ring neighbour was expected to own a claimed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NeighbourSide {
  Previous,
  Next,
}

impl std::fmt::Display for NeighbourSide {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      NeighbourSide::Previous => f.write_str("previous"),
      NeighbourSide::Next => f.write_str("next"),
    }
  }
}

/// Failures of the loop triangulator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangulateError {
  #[error(
    "edge loop of length {len} cannot be triangulated (expected {min}..={max})",
    min = MIN_LOOP_LEN,
    max = MAX_LOOP_LEN
  )]
  UnexpectedLoopLength { len: usize },
}

/// Failures when rendering a table to a fixed-width layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
  #[error("case {mask:#04x} has {count} triangles, more than the row width {width}")]
  RowOverflow { mask: u8, count: usize, width: usize },

  #[error("row width must be at least 1")]
  ZeroWidth,

  #[error(transparent)]
  Fmt(#[from] std::fmt::Error),
}

/// Failures when reading a hand-authored table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceTableError {
  #[error("line {line}: expected 4 indices per entry, found {found}")]
  EntryArity { line: usize, found: usize },

  #[error("line {line}: edge index {value} is out of range")]
  EdgeOutOfRange { line: usize, value: i64 },

  #[error("line {line}: more than {max} triangles in one case")]
  TooManyTriangles { line: usize, max: usize },

  #[error("expected 256 cases, found {found}")]
  CaseCount { found: usize },

  #[error(
    "line {line} (case {mask:#04x}): expected {expected} triangles from the reference counts, found {found}"
  )]
  CountMismatch {
    line: usize,
    mask: u8,
    expected: u8,
    found: u8,
  },
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
