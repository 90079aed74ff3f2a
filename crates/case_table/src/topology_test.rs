use glam::Vec3;

use super::*;
use crate::test_utils::{corner_position, edge_midpoint};

#[test]
fn test_edge_table_homogeneous() {
  // All corners same side = no crossings
  assert_eq!(EDGE_TABLE[0], 0, "All outside should have no edges");
  assert_eq!(EDGE_TABLE[255], 0, "All inside should have no edges");
}

#[test]
fn test_edge_table_single_corner() {
  // Single inside corner should activate exactly its 3 edges
  for corner in 0..8u8 {
    let mask = 1u8 << corner;
    let expected = VERTEX_EDGES[corner as usize]
      .iter()
      .fold(0u16, |acc, &e| acc | (1 << e));
    assert_eq!(
      EDGE_TABLE[mask as usize], expected,
      "Corner {} should cross its own 3 edges",
      corner
    );
  }
}

#[test]
fn test_edge_table_symmetry() {
  // Complementary corner masks should have same edge mask
  for i in 0..128 {
    assert_eq!(
      EDGE_TABLE[i],
      EDGE_TABLE[255 - i],
      "Edge masks should be symmetric for {} and {}",
      i,
      255 - i
    );
  }
}

#[test]
fn test_edge_corners_validity() {
  for edge in &EDGE_CORNERS {
    assert!(edge[0] < 8);
    assert!(edge[1] < 8);
    assert_ne!(edge[0], edge[1]);
    // Endpoints differ along exactly one axis
    assert_eq!((edge[0] ^ edge[1]).count_ones(), 1);
  }
}

#[test]
fn test_each_edge_listed_twice() {
  let mut seen = [0u8; 12];
  for row in &VERTEX_EDGES {
    for &e in row {
      seen[e as usize] += 1;
    }
  }
  assert_eq!(seen, [2; 12], "Every edge needs exactly two endpoints");
}

#[test]
fn test_links_match_edge_corners() {
  for corner in 0..8u8 {
    for link in 0..3u8 {
      let e = edge(corner, link);
      let other = other_vertex(corner, link);
      let mut endpoints = EDGE_CORNERS[e as usize];
      endpoints.sort_unstable();
      let mut expected = [corner, other];
      expected.sort_unstable();
      assert_eq!(
        endpoints, expected,
        "Corner {} link {} names edge {} but leads to corner {}",
        corner, link, e, other
      );
    }
  }
}

#[test]
fn test_reverse_link_returns_home() {
  for corner in 0..8u8 {
    for link in 0..3u8 {
      let e = edge(corner, link);
      let other = other_vertex(corner, link);
      let back = link_of(other, e).expect("edge must touch both endpoints");
      assert_eq!(other_vertex(other, back), corner);
    }
  }
}

#[test]
fn test_links_are_right_handed() {
  for corner in 0..8u8 {
    let origin = Vec3::from(corner_position(corner));
    let dirs: Vec<Vec3> = (0..3u8)
      .map(|link| Vec3::from(corner_position(other_vertex(corner, link))) - origin)
      .collect();
    let det = dirs[0].cross(dirs[1]).dot(dirs[2]);
    assert_eq!(det, 1.0, "Corner {} links are not right-handed", corner);
  }
}

#[test]
fn test_link_of_unrelated_edge() {
  // Edge 11 joins corners 6 and 7
  assert_eq!(link_of(0, 11), None);
  assert_eq!(link_of(7, 11), Some(2));
}

#[test]
fn test_corner_position() {
  assert_eq!(corner_position(0), [0.0, 0.0, 0.0]);
  assert_eq!(corner_position(1), [1.0, 0.0, 0.0]);
  assert_eq!(corner_position(2), [0.0, 1.0, 0.0]);
  assert_eq!(corner_position(4), [0.0, 0.0, 1.0]);
  assert_eq!(corner_position(7), [1.0, 1.0, 1.0]);
}

#[test]
fn test_edge_midpoint() {
  assert_eq!(edge_midpoint(0), Vec3::new(0.5, 0.0, 0.0));
  assert_eq!(edge_midpoint(7), Vec3::new(1.0, 1.0, 0.5));
  assert_eq!(edge_midpoint(11), Vec3::new(0.5, 1.0, 1.0));
}

/// Endpoints of each classic edge, in classic vertex numbering.
#[rustfmt::skip]
const CLASSIC_EDGE_VERTICES: [[u8; 2]; 12] = [
  [0, 1], [1, 2], [2, 3], [3, 0],
  [4, 5], [5, 6], [6, 7], [7, 4],
  [0, 4], [1, 5], [2, 6], [3, 7],
];

#[test]
fn test_classic_edges_follow_classic_corners() {
  for (classic, [a, b]) in CLASSIC_EDGE_VERTICES.iter().enumerate() {
    let mut expected = [CLASSIC_CORNERS[*a as usize], CLASSIC_CORNERS[*b as usize]];
    expected.sort_unstable();
    assert_eq!(
      EDGE_CORNERS[CLASSIC_EDGES[classic] as usize],
      expected,
      "Classic edge {} maps to the wrong edge",
      classic
    );
  }
}

#[test]
fn test_classic_tables_are_permutations() {
  let mut corners = CLASSIC_CORNERS;
  corners.sort_unstable();
  assert_eq!(corners, [0, 1, 2, 3, 4, 5, 6, 7]);

  let mut edges = CLASSIC_EDGES;
  edges.sort_unstable();
  assert_eq!(edges, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);

  let mut seen = [false; 256];
  for mask in 0u8..=255 {
    let zyx = classic_mask(mask);
    assert!(!seen[zyx as usize], "Mask {:#04x} collides", mask);
    seen[zyx as usize] = true;
    assert_eq!(zyx.count_ones(), mask.count_ones());
  }
}

#[test]
fn test_classic_mask() {
  assert_eq!(classic_mask(0), 0);
  assert_eq!(classic_mask(0xFF), 0xFF);
  // Classic vertex 0 is corner 4, vertex 4 is corner 0
  assert_eq!(classic_mask(0b0000_0001), 0b0001_0000);
  assert_eq!(classic_mask(0b0001_0000), 0b0000_0001);
  assert_eq!(classic_mask(0x55), 0x99);
}

#[test]
fn test_classic_layout_is_a_rotation() {
  // Classic vertex positions: bottom ring then top ring
  let classic: [Vec3; 8] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(1.0, 0.0, 1.0),
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(0.0, 1.0, 1.0),
  ];
  let zyx = |v: usize| Vec3::from(corner_position(CLASSIC_CORNERS[v]));
  let frame = |p: &dyn Fn(usize) -> Vec3| {
    let o = p(0);
    (p(1) - o).cross(p(3) - o).dot(p(4) - o)
  };
  assert_eq!(frame(&|v| classic[v]), frame(&zyx));
}
