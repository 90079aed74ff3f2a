//! Arena-backed circular edge loop.
//!
//! Nodes live in a flat arena and refer to their neighbours by index.
//! Splicing a node out only rewrites its neighbours' links; the node stays in
//! the arena but is no longer reachable from the ring.
//!
//! ```text
//!   seed(corner 0):            insert_after(a, ..):        unlink(b):
//!
//!   ┌──► a ──► b ──► c ──┐     a ──► d ──► b ──► c ─┐      a ──► d ──► c ─┐
//!   └────────────────────┘     ▲────────────────────┘      ▲──────────────┘
//! ```

use std::ops::{Index, IndexMut};

use smallvec::SmallVec;

use crate::topology;
use crate::types::EdgeLoop;

/// Arena slot index.
pub type NodeId = usize;

/// One edge of the loop, reached from `corner` through `link`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
  /// Corner the edge was followed from.
  pub corner: u8,
  /// Link index (0..3) at `corner`.
  pub link: u8,
  /// Cube edge behind `link`.
  pub edge: u8,
  /// Set once the edge was found to lead to an outside corner.
  pub visited: bool,
  pub prev: NodeId,
  pub next: NodeId,
}

/// Set of edges claimed by any loop of the current case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UsedEdges(u16);

impl UsedEdges {
  #[inline]
  pub fn claim(&mut self, edge: u8) {
    self.0 |= 1 << edge;
  }

  #[inline]
  pub fn contains(&self, edge: u8) -> bool {
    self.0 & (1 << edge) != 0
  }

  /// 12-bit mask of claimed edges.
  #[inline]
  pub fn bits(&self) -> u16 {
    self.0
  }
}

/// Circular doubly-linked list of loop nodes.
#[derive(Clone, Debug)]
pub struct Ring {
  nodes: SmallVec<[Node; 8]>,
}

impl Ring {
  /// Start a 3-node ring from the three edges around `corner`.
  ///
  /// The first node (link 0) gets id 0.
  pub fn seed(corner: u8, used: &mut UsedEdges) -> Self {
    let mut nodes = SmallVec::new();
    for link in 0..3u8 {
      let id = link as NodeId;
      let edge = topology::edge(corner, link);
      used.claim(edge);
      nodes.push(Node {
        corner,
        link,
        edge,
        visited: false,
        prev: (id + 2) % 3,
        next: (id + 1) % 3,
      });
    }
    Self { nodes }
  }

  /// Point node `id` at a new edge, claiming it.
  ///
  /// The visited flag is left untouched.
  pub fn retarget(&mut self, id: NodeId, corner: u8, link: u8, used: &mut UsedEdges) {
    let edge = topology::edge(corner, link);
    used.claim(edge);
    let node = &mut self.nodes[id];
    node.corner = corner;
    node.link = link;
    node.edge = edge;
  }

  /// Splice a new node in right after `at`, claiming its edge.
  pub fn insert_after(&mut self, at: NodeId, corner: u8, link: u8, used: &mut UsedEdges) -> NodeId {
    let edge = topology::edge(corner, link);
    used.claim(edge);

    let id = self.nodes.len();
    let next = self.nodes[at].next;
    self.nodes.push(Node {
      corner,
      link,
      edge,
      visited: false,
      prev: at,
      next,
    });
    self.nodes[next].prev = id;
    self.nodes[at].next = id;
    id
  }

  /// Splice node `id` out of the ring.
  pub fn unlink(&mut self, id: NodeId) {
    let Node { prev, next, .. } = self.nodes[id];
    self.nodes[prev].next = next;
    self.nodes[next].prev = prev;
  }

  /// True once the ring around `id` has shrunk to two nodes or fewer.
  #[inline]
  pub fn is_collapsed(&self, id: NodeId) -> bool {
    self.nodes[id].next == self.nodes[id].prev
  }

  /// Edge indices in ring order, starting at `start`.
  pub fn unfold(&self, start: NodeId) -> EdgeLoop {
    let mut edges = EdgeLoop::new();
    let mut id = start;
    loop {
      edges.push(self.nodes[id].edge);
      id = self.nodes[id].next;
      if id == start {
        break;
      }
    }
    edges
  }
}

impl Index<NodeId> for Ring {
  type Output = Node;

  fn index(&self, id: NodeId) -> &Node {
    &self.nodes[id]
  }
}

impl IndexMut<NodeId> for Ring {
  fn index_mut(&mut self, id: NodeId) -> &mut Node {
    &mut self.nodes[id]
  }
}

#[cfg(test)]
#[path = "ring_test.rs"]
mod ring_test;
