//! case_table - Marching Cubes case table synthesis
//!
//! This crate derives the 256-entry Marching Cubes triangle table from cube
//! topology alone. Every corner mask is reduced to its sparser side, its
//! crossing edges are traced into closed loops, and each loop is fanned into
//! triangles with outward winding.
//!
//! # Features
//!
//! - **Edge-Loop Tracer**: Arena-backed ring walk over the cube edges, one
//!   loop per connected inside region
//! - **Reference Validation**: Per-case triangle counts checked against a
//!   hand-verified table, with ambiguous configurations classified
//! - **Shader Export**: Fixed-width padded rows rendered as an HLSL include
//! - **Source Tables**: Import of the hand-authored table text format
//!
//! # Example
//!
//! ```ignore
//! use case_table::{build_table, validate_counts, HlslTableWriter};
//!
//! let table = build_table();
//! assert_eq!(table[0x01].count, 1);
//!
//! let report = validate_counts(&table);
//! assert!(report.is_consistent());
//!
//! let hlsl = HlslTableWriter::default().render(&table)?;
//! ```

pub mod constants;
pub mod error;
pub mod topology;
pub mod types;

// Re-export commonly used items
pub use constants::{CASE_COUNT, CORNER_COUNT, EDGE_COUNT, MAX_TRIANGLES_PER_CASE};
pub use error::{ExportError, NeighbourSide, SourceTableError, TraceError, TriangulateError};
pub use topology::{EDGE_CORNERS, EDGE_TABLE, VERTEX_EDGES, VERTEX_NEIGHBOURS};
pub use types::{CaseEntry, CaseTable, EdgeLoop, Triangle};

// Case reduction by complement
pub mod reduce;
pub use reduce::{reduce, ReducedCase};

// Edge-loop tracing and triangulation
pub mod trace;
pub mod triangulate;
pub use trace::{trace, try_trace};
pub use triangulate::{triangulate, try_triangulate};

// Table assembly and statistics
pub mod report;
pub mod table;
pub use report::{build_with_report, BuildReport};
pub use table::{build_case, build_table, build_table_parallel};

// Hand-verified counts
pub mod reference;
pub use reference::{validate_counts, CountMismatch, MismatchKind, ValidationReport};

// Text formats
pub mod export;
pub mod source_table;
pub use export::{padded_rows, HlslTableWriter, LineEnding};
pub use source_table::SourceLayout;

#[cfg(test)]
pub(crate) mod test_utils;
