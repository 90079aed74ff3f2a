//! Table emitter: runs reduce → trace → triangulate for every corner mask.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │ build_case(mask)                                                        │
//! │                                                                         │
//! │  mask ──► reduce ──► (traced, invert)                                   │
//! │                          │                                              │
//! │                          ▼                                              │
//! │                  trace(traced) ──► [EdgeLoop, ...]                      │
//! │                                          │                              │
//! │                                          ▼                              │
//! │                       triangulate(loop, invert) per loop                │
//! │                                          │                              │
//! │                                          ▼                              │
//! │                        CaseEntry { triangles, count }                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cases are independent, so [`build_table_parallel`] simply spreads them
//! over the rayon pool.

use rayon::prelude::*;

use crate::constants::CASE_COUNT;
use crate::reduce::{reduce, ReducedCase};
use crate::trace::try_trace;
use crate::triangulate::triangulate;
use crate::types::{CaseEntry, CaseTable, EdgeLoop};

/// Build the triangle list for one corner mask.
///
/// # Panics
/// If the reduced mask cannot be traced (see [`crate::error::TraceError`]).
pub fn build_case(mask: u8) -> CaseEntry {
  build_case_with_loops(mask).0
}

/// Build one case and keep the loops it was triangulated from.
pub(crate) fn build_case_with_loops(mask: u8) -> (CaseEntry, Vec<EdgeLoop>, ReducedCase) {
  let reduced = reduce(mask);
  let loops = try_trace(reduced.mask)
    .unwrap_or_else(|err| panic!("case {mask:#04x} (traced as {:#04x}): {err}", reduced.mask));

  let triangles = loops
    .iter()
    .flat_map(|edge_loop| triangulate(edge_loop, reduced.invert_winding))
    .collect();

  (CaseEntry::new(triangles), loops, reduced)
}

/// Build the full 256-case table sequentially.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "table::build_table"))]
pub fn build_table() -> CaseTable {
  CaseTable::from_entries((0..CASE_COUNT).map(|mask| build_case(mask as u8)).collect())
}

/// Build the full table on the rayon pool.
///
/// Results are identical to [`build_table`]; entries keep mask order.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "table::build_table_parallel"))]
pub fn build_table_parallel() -> CaseTable {
  let entries: Vec<CaseEntry> = (0..CASE_COUNT)
    .into_par_iter()
    .map(|mask| build_case(mask as u8))
    .collect();
  CaseTable::from_entries(entries)
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
