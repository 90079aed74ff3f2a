use super::*;
use crate::table::build_table;
use crate::types::CaseEntry;

#[test]
fn test_padded_rows_have_requested_width() {
  let table = build_table();
  for width in [4, 5, 8] {
    let rows = padded_rows(&table, width).unwrap();
    assert_eq!(rows.len(), CASE_COUNT);
    for (mask, row) in rows.iter().enumerate() {
      assert_eq!(row.len(), width);
      let count = table[mask as u8].triangles.len();
      assert!(row[..count].iter().all(|e| *e != Triangle::SENTINEL.edges));
      assert!(row[count..].iter().all(|e| *e == [0xFF; 3]));
    }
  }
}

#[test]
fn test_padded_rows_keep_triangle_order() {
  let table = build_table();
  let rows = padded_rows(&table, 4).unwrap();
  assert_eq!(rows[0x0F][..2], [[4, 7, 6], [4, 6, 2]]);
  assert_eq!(rows[0], vec![[0xFF; 3]; 4]);
}

#[test]
fn test_width_below_maximum_is_rejected() {
  let table = build_table();
  let err = padded_rows(&table, 3).unwrap_err();
  assert!(matches!(err, ExportError::RowOverflow { count: 4, width: 3, .. }));
  assert_eq!(padded_rows(&table, 0).unwrap_err(), ExportError::ZeroWidth);
}

#[test]
fn test_hlsl_layout() {
  let text = HlslTableWriter::default().render(&build_table()).unwrap();
  let lines: Vec<&str> = text.split("\r\n").collect();

  assert_eq!(lines[0], "// AUTO-GENERATED ! DON'T MODIFY !");
  assert_eq!(lines[2], "//   256*4 = 1024 entries");
  assert_eq!(lines[4], "uint3\tCase2Triangles[256][4] = {");
  assert_eq!(
    lines[5],
    "\t{ uint3( -1, -1, -1 ), uint3( -1, -1, -1 ), uint3( -1, -1, -1 ), uint3( -1, -1, -1 ), },"
  );
  assert_eq!(
    lines[6],
    "\t{ uint3( 0, 1, 2 ), uint3( -1, -1, -1 ), uint3( -1, -1, -1 ), uint3( -1, -1, -1 ), },"
  );

  let rows = lines.iter().filter(|l| l.starts_with("\t{ ")).count();
  assert_eq!(rows, CASE_COUNT);

  let counts_at = lines
    .iter()
    .position(|l| *l == "uint\tCase2TrianglesCount[] = {")
    .unwrap();
  assert_eq!(lines[counts_at - 1], "");
  assert_eq!(lines[counts_at - 2], "};");
  let count_lines = &lines[counts_at + 1..counts_at + 9];
  for line in count_lines {
    assert_eq!(line.matches(", ").count(), COUNTS_PER_LINE);
  }
  assert!(count_lines[0].starts_with("0, 1, 1, 2, 1, 2, 2, 3, "));
  assert_eq!(lines[counts_at + 9], "};");
  assert!(text.ends_with("};\r\n"));
}

#[test]
fn test_hlsl_custom_settings() {
  let writer = HlslTableWriter::default()
    .with_width(5)
    .with_idents("Tris", "TriCount")
    .with_line_ending(LineEnding::Lf);
  let text = writer.render(&build_table()).unwrap();

  assert!(!text.contains('\r'));
  assert!(text.contains("//   256*5 = 1280 entries\n"));
  assert!(text.contains("uint3\tTris[256][5] = {\n"));
  assert!(text.contains("uint\tTriCount[] = {\n"));
  assert_eq!(text.matches("uint3( ").count(), CASE_COUNT * 5);
}

#[test]
fn test_overflow_writes_nothing() {
  let mut entries = vec![CaseEntry::default(); CASE_COUNT];
  entries[7] = CaseEntry::new(vec![Triangle::new(0, 1, 2); 3]);
  let table = CaseTable::from_entries(entries);

  let mut out = String::new();
  let err = HlslTableWriter::default()
    .with_width(2)
    .write(&table, &mut out)
    .unwrap_err();
  assert_eq!(
    err,
    ExportError::RowOverflow {
      mask: 7,
      count: 3,
      width: 2
    }
  );
  assert!(out.is_empty());
  assert_eq!(
    err.to_string(),
    "case 0x07 has 3 triangles, more than the row width 2"
  );
}
