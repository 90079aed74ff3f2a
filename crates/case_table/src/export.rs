//! Fixed-width table layout and shader source rendering.
//!
//! GPU consumers index the table as `rows[mask][slot]`, so every row is
//! padded to the same width with [`Triangle::SENTINEL`]. The HLSL writer emits
//! the padded rows followed by the per-case triangle counts:
//!
//! ```text
//! uint3	Case2Triangles[256][4] = {
//! 	{ uint3( 0, 1, 2 ), uint3( -1, -1, -1 ), uint3( -1, -1, -1 ), uint3( -1, -1, -1 ), },
//! 	...
//! };
//!
//! uint	Case2TrianglesCount[] = {
//! 0, 1, 1, 2, ...
//! };
//! ```

use std::fmt::{self, Write};

use crate::constants::{CASE_COUNT, MAX_TRIANGLES_PER_CASE};
use crate::error::ExportError;
use crate::types::{CaseTable, Triangle};

/// Counts printed per line in the counts array.
const COUNTS_PER_LINE: usize = 32;

/// Pad every case to `width` triangles.
///
/// Fails if `width` is zero or if any case holds more than `width` triangles.
pub fn padded_rows(table: &CaseTable, width: usize) -> Result<Vec<Vec<[u8; 3]>>, ExportError> {
  if width == 0 {
    return Err(ExportError::ZeroWidth);
  }

  table
    .iter()
    .map(|(mask, entry)| {
      if entry.triangles.len() > width {
        return Err(ExportError::RowOverflow {
          mask,
          count: entry.triangles.len(),
          width,
        });
      }
      let mut row: Vec<[u8; 3]> = entry.triangles.iter().map(|t| t.edges).collect();
      row.resize(width, Triangle::SENTINEL.edges);
      Ok(row)
    })
    .collect()
}

/// Line terminator used by the text writers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineEnding {
  #[default]
  Crlf,
  Lf,
}

impl LineEnding {
  pub const fn as_str(self) -> &'static str {
    match self {
      LineEnding::Crlf => "\r\n",
      LineEnding::Lf => "\n",
    }
  }
}

/// Renders a [`CaseTable`] as an HLSL include.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HlslTableWriter {
  pub triangles_ident: String,
  pub counts_ident: String,
  pub width: usize,
  pub line_ending: LineEnding,
}

impl Default for HlslTableWriter {
  fn default() -> Self {
    Self {
      triangles_ident: "Case2Triangles".to_string(),
      counts_ident: "Case2TrianglesCount".to_string(),
      width: MAX_TRIANGLES_PER_CASE,
      line_ending: LineEnding::Crlf,
    }
  }
}

impl HlslTableWriter {
  pub fn with_width(mut self, width: usize) -> Self {
    self.width = width;
    self
  }

  pub fn with_idents(mut self, triangles: impl Into<String>, counts: impl Into<String>) -> Self {
    self.triangles_ident = triangles.into();
    self.counts_ident = counts.into();
    self
  }

  pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
    self.line_ending = line_ending;
    self
  }

  /// Render the table into a new string.
  pub fn render(&self, table: &CaseTable) -> Result<String, ExportError> {
    let mut out = String::with_capacity(CASE_COUNT * self.width * 24);
    self.write(table, &mut out)?;
    Ok(out)
  }

  /// Render the table into any [`fmt::Write`] sink.
  ///
  /// Nothing is written if the table does not fit the configured width.
  pub fn write<W: Write>(&self, table: &CaseTable, out: &mut W) -> Result<(), ExportError> {
    let rows = padded_rows(table, self.width)?;
    let nl = self.line_ending.as_str();

    write!(out, "// AUTO-GENERATED ! DON'T MODIFY !{nl}")?;
    write!(
      out,
      "// This table gives the cube edge indices for each triangle to generate and for each cube case{nl}"
    )?;
    write!(
      out,
      "//   {CASE_COUNT}*{} = {} entries{nl}",
      self.width,
      CASE_COUNT * self.width
    )?;
    write!(out, "//{nl}")?;
    write!(
      out,
      "uint3\t{}[{CASE_COUNT}][{}] = {{{nl}",
      self.triangles_ident, self.width
    )?;

    for row in &rows {
      out.write_str("\t{ ")?;
      for edges in row {
        write_uint3(out, *edges)?;
      }
      write!(out, "}},{nl}")?;
    }

    write!(out, "}};{nl}{nl}")?;
    write!(out, "uint\t{}[] = {{{nl}", self.counts_ident)?;
    for line in table.counts().chunks(COUNTS_PER_LINE) {
      for count in line {
        write!(out, "{count}, ")?;
      }
      out.write_str(nl)?;
    }
    write!(out, "}};{nl}")?;

    Ok(())
  }
}

fn write_uint3<W: Write>(out: &mut W, edges: [u8; 3]) -> fmt::Result {
  if edges == Triangle::SENTINEL.edges {
    return out.write_str("uint3( -1, -1, -1 ), ");
  }
  write!(out, "uint3( {}, {}, {} ), ", edges[0], edges[1], edges[2])
}

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;
