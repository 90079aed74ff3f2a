use super::*;

fn edges(triangles: &LoopTriangles) -> Vec<[u8; 3]> {
  triangles.iter().map(|t| t.edges).collect()
}

#[test]
fn test_triangle_loop() {
  assert_eq!(edges(&triangulate(&[0, 1, 2], false)), vec![[0, 1, 2]]);
}

#[test]
fn test_quad_loop() {
  assert_eq!(
    edges(&triangulate(&[4, 7, 6, 2], false)),
    vec![[4, 7, 6], [4, 6, 2]]
  );
}

#[test]
fn test_pentagon_fan() {
  assert_eq!(
    edges(&triangulate(&[4, 3, 5, 6, 2], false)),
    vec![[4, 3, 5], [4, 5, 6], [4, 6, 2]]
  );
}

#[test]
fn test_hexagon_is_not_a_plain_fan() {
  assert_eq!(
    edges(&triangulate(&[4, 3, 5, 6, 9, 8], false)),
    vec![[4, 3, 5], [4, 5, 6], [4, 6, 8], [6, 9, 8]]
  );
}

#[test]
fn test_invert_swaps_last_two() {
  assert_eq!(edges(&triangulate(&[0, 1, 2], true)), vec![[0, 2, 1]]);
  assert_eq!(
    edges(&triangulate(&[4, 7, 6, 2], true)),
    vec![[4, 6, 7], [4, 2, 6]]
  );
}

#[test]
fn test_triangle_count_is_len_minus_two() {
  for len in 3..=6u8 {
    let edge_loop: Vec<u8> = (0..len).collect();
    assert_eq!(triangulate(&edge_loop, false).len(), len as usize - 2);
  }
}

#[test]
fn test_unexpected_lengths() {
  assert_eq!(
    try_triangulate(&[0, 1], false),
    Err(TriangulateError::UnexpectedLoopLength { len: 2 })
  );
  assert_eq!(
    try_triangulate(&[0, 1, 2, 3, 4, 5, 6], false),
    Err(TriangulateError::UnexpectedLoopLength { len: 7 })
  );
}

#[test]
#[should_panic(expected = "length 7")]
fn test_triangulate_panics_on_long_loop() {
  let _ = triangulate(&[0, 1, 2, 3, 4, 5, 6], true);
}
