//! Hand-authored case table text format.
//!
//! One line per case, 256 lines in mask order. A line is a comma-separated
//! list of entries, each entry four whitespace-separated integers `a b c d`:
//!
//! ```text
//! 0 2 1 0, -1 -1 -1 -1, -1 -1 -1 -1, -1 -1 -1 -1, -1 -1 -1 -1
//! ```
//!
//! An entry starting with `-1` is a padding slot. Any other entry is the
//! triangle `(a, c, b)`; the stored order is the opposite winding and `d` is
//! unused. Tokens that are not integers are ignored and entries without any
//! integer (such as the empty piece after a trailing comma) are skipped.
//!
//! Line order and edge indices follow a [`SourceLayout`]. Hand-authored
//! tables use the classic ring numbering; [`write`] and [`parse`] use this
//! crate's ZYX numbering.

use std::fmt::Write;

use crate::constants::{CASE_COUNT, EDGE_COUNT};
use crate::error::{ExportError, SourceTableError};
use crate::reference::{reference_count, REFERENCE_MAX_TRIANGLES};
use crate::topology::{classic_mask, CLASSIC_EDGES};
use crate::types::{CaseEntry, CaseTable, Triangle};

/// Integers per entry.
const ENTRY_ARITY: usize = 4;

/// Vertex and edge numbering of a table text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SourceLayout {
  /// Classic ring numbering (see [`crate::topology::CLASSIC_CORNERS`]).
  #[default]
  Classic,
  /// This crate's binary ZYX numbering.
  Zyx,
}

impl SourceLayout {
  /// ZYX mask of the case stored on 0-based line `index`.
  #[inline]
  pub const fn mask(self, index: u8) -> u8 {
    match self {
      SourceLayout::Classic => classic_mask(index),
      SourceLayout::Zyx => index,
    }
  }

  /// ZYX edge for an edge index of this layout.
  #[inline]
  pub const fn edge(self, edge: u8) -> u8 {
    match self {
      SourceLayout::Classic => CLASSIC_EDGES[edge as usize],
      SourceLayout::Zyx => edge,
    }
  }
}

/// Parse a ZYX table without checking it against the reference counts.
pub fn parse(text: &str) -> Result<CaseTable, SourceTableError> {
  parse_with_layout(text, SourceLayout::Zyx)
}

/// Parse a table in `layout` into ZYX masks and edges, without checking it
/// against the reference counts.
pub fn parse_with_layout(text: &str, layout: SourceLayout) -> Result<CaseTable, SourceTableError> {
  let lines = text
    .lines()
    .enumerate()
    .map(|(index, line)| parse_line(index + 1, line, layout))
    .collect::<Result<Vec<_>, _>>()?;

  if lines.len() != CASE_COUNT {
    return Err(SourceTableError::CaseCount { found: lines.len() });
  }

  let mut entries = vec![CaseEntry::default(); CASE_COUNT];
  for (index, entry) in lines.into_iter().enumerate() {
    entries[layout.mask(index as u8) as usize] = entry;
  }
  Ok(CaseTable::from_entries(entries))
}

/// Parse a classic-layout table and require its per-case counts to equal the
/// reference.
pub fn import(text: &str) -> Result<CaseTable, SourceTableError> {
  import_with_layout(text, SourceLayout::Classic)
}

/// Parse a table in `layout` and require its per-case counts to equal the
/// reference.
pub fn import_with_layout(text: &str, layout: SourceLayout) -> Result<CaseTable, SourceTableError> {
  let table = parse_with_layout(text, layout)?;

  for index in 0..CASE_COUNT {
    let mask = layout.mask(index as u8);
    let found = table[mask].count;
    if found != reference_count(mask) {
      return Err(SourceTableError::CountMismatch {
        line: index + 1,
        mask,
        expected: reference_count(mask),
        found,
      });
    }
  }

  #[cfg(feature = "tracing")]
  tracing::debug!(total_triangles = table.total_triangles(), ?layout, "source table imported");

  Ok(table)
}

/// Render a table in the hand-authored format, each line padded to `width`
/// entries.
pub fn write(table: &CaseTable, width: usize) -> Result<String, ExportError> {
  if width == 0 {
    return Err(ExportError::ZeroWidth);
  }

  let mut out = String::new();
  for (mask, entry) in table.iter() {
    if entry.triangles.len() > width {
      return Err(ExportError::RowOverflow {
        mask,
        count: entry.triangles.len(),
        width,
      });
    }

    for slot in 0..width {
      if slot > 0 {
        out.push_str(", ");
      }
      match entry.triangles.get(slot) {
        Some(t) => {
          let [a, b, c] = t.edges;
          write!(out, "{a} {c} {b} 0")?;
        }
        None => out.push_str("-1 -1 -1 -1"),
      }
    }
    out.push('\n');
  }
  Ok(out)
}

fn parse_line(line: usize, text: &str, layout: SourceLayout) -> Result<CaseEntry, SourceTableError> {
  let mut triangles = Vec::new();

  for piece in text.split(',') {
    let values: Vec<i64> = piece
      .split_whitespace()
      .filter_map(|token| token.parse().ok())
      .collect();

    if values.is_empty() {
      continue;
    }
    if values.len() != ENTRY_ARITY {
      return Err(SourceTableError::EntryArity {
        line,
        found: values.len(),
      });
    }
    if values[0] == -1 {
      continue;
    }

    let a = layout.edge(edge_index(line, values[0])?);
    let b = layout.edge(edge_index(line, values[1])?);
    let c = layout.edge(edge_index(line, values[2])?);
    triangles.push(Triangle::new(a, c, b));

    if triangles.len() > REFERENCE_MAX_TRIANGLES {
      return Err(SourceTableError::TooManyTriangles {
        line,
        max: REFERENCE_MAX_TRIANGLES,
      });
    }
  }

  Ok(CaseEntry::new(triangles))
}

fn edge_index(line: usize, value: i64) -> Result<u8, SourceTableError> {
  if (0..EDGE_COUNT as i64).contains(&value) {
    Ok(value as u8)
  } else {
    Err(SourceTableError::EdgeOutOfRange { line, value })
  }
}

#[cfg(test)]
#[path = "source_table_test.rs"]
mod source_table_test;
