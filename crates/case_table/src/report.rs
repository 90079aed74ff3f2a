//! Build statistics for a table run.
//!
//! ```ignore
//! let (table, report) = case_table::report::build_with_report();
//! println!("{report}");
//! ```

use std::fmt;

use web_time::Instant;

use crate::constants::{CASE_COUNT, MAX_LOOP_LEN};
use crate::table::build_case_with_loops;
use crate::types::CaseTable;

/// Most loops a single case can produce (4 isolated corners).
pub const MAX_LOOPS_PER_CASE: usize = 4;

/// Statistics gathered while building a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
  /// Wall time of the build in microseconds.
  pub elapsed_us: u64,
  /// Sum of triangle counts over all cases.
  pub total_triangles: usize,
  /// Largest triangle count of a single case.
  pub max_triangles: usize,
  /// Number of traced loops by length (index = edge count).
  pub loop_lengths: [u32; MAX_LOOP_LEN + 1],
  /// Number of cases by loop count (index = loops in the case).
  pub loops_per_case: [u32; MAX_LOOPS_PER_CASE + 1],
  /// Cases traced from their complement.
  pub inverted_cases: u32,
}

impl BuildReport {
  /// Total number of traced loops.
  pub fn total_loops(&self) -> u32 {
    self.loop_lengths.iter().sum()
  }
}

impl fmt::Display for BuildReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{} triangles (max {} per case), {} loops, {} inverted cases in {}us",
      self.total_triangles,
      self.max_triangles,
      self.total_loops(),
      self.inverted_cases,
      self.elapsed_us
    )?;
    for (len, &count) in self.loop_lengths.iter().enumerate() {
      if count > 0 {
        write!(f, "\n  {len}-edge loops: {count}")?;
      }
    }
    Ok(())
  }
}

/// Build the table sequentially and collect statistics along the way.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "report::build_with_report"))]
pub fn build_with_report() -> (CaseTable, BuildReport) {
  let start = Instant::now();
  let mut report = BuildReport::default();
  let mut entries = Vec::with_capacity(CASE_COUNT);

  for mask in 0..CASE_COUNT {
    let (entry, loops, reduced) = build_case_with_loops(mask as u8);

    for edge_loop in &loops {
      report.loop_lengths[edge_loop.len().min(MAX_LOOP_LEN)] += 1;
    }
    report.loops_per_case[loops.len().min(MAX_LOOPS_PER_CASE)] += 1;
    if reduced.invert_winding {
      report.inverted_cases += 1;
    }

    entries.push(entry);
  }

  let table = CaseTable::from_entries(entries);
  report.total_triangles = table.total_triangles();
  report.max_triangles = table.max_triangles();
  report.elapsed_us = start.elapsed().as_micros() as u64;

  #[cfg(feature = "tracing")]
  tracing::debug!(
    total_triangles = report.total_triangles,
    elapsed_us = report.elapsed_us,
    "case table built"
  );

  (table, report)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;
