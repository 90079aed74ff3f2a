//! Edge-loop tracer.
//!
//! Finds the closed loops of crossing edges that separate inside corners
//! from outside corners for one corner mask.
//!
//! # Algorithm
//!
//! ```text
//! for each inside corner whose 3 edges are all unclaimed:
//!   seed a ring with those 3 edges
//!   walk the ring:
//!     edge leads to an outside corner  → mark visited, move on
//!     edge leads to an inside corner T → wrap the loop around T:
//!       first  = next link after the edge at T
//!       second = link after that
//!       first already claimed  → shrink: drop this node, predecessor
//!                                takes `second` (collapse ends the loop)
//!       otherwise              → this node takes `first`, then
//!                                second claimed → drop successor
//!                                otherwise      → insert node for `second`
//!   stop on the first visited node, unfold the ring
//! ```
//!
//! A single seed finds a single loop, so masks whose inside region needs two
//! loops (e.g. `0x7D`) break it. Callers trace reduced masks only
//! (see [`crate::reduce`]).

mod ring;

pub use ring::UsedEdges;

use crate::constants::{is_inside, CORNER_COUNT, TRACE_STEP_LIMIT};
use crate::error::{NeighbourSide, TraceError};
use crate::topology::{self, VERTEX_EDGES};
use crate::types::EdgeLoop;
use ring::Ring;

/// Trace all edge loops of a corner mask.
///
/// # Panics
/// On any [`TraceError`]. These only occur for broken topology tables or
/// for masks the tracer cannot resolve; reduce the mask first.
pub fn trace(mask: u8) -> Vec<EdgeLoop> {
  try_trace(mask).unwrap_or_else(|err| panic!("edge-loop trace failed: {err}"))
}

/// Trace all edge loops of a corner mask, reporting failures.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all, name = "trace::try_trace", fields(mask = mask)))]
pub fn try_trace(mask: u8) -> Result<Vec<EdgeLoop>, TraceError> {
  let mut used = UsedEdges::default();
  let mut loops = Vec::new();

  for seed in 0..CORNER_COUNT as u8 {
    if !is_inside(mask, seed) {
      continue;
    }
    // Already swallowed by an earlier loop
    if VERTEX_EDGES[seed as usize].iter().any(|&e| used.contains(e)) {
      continue;
    }

    if let Some(edge_loop) = trace_loop(mask, seed, &mut used)? {
      loops.push(edge_loop);
    }
  }

  Ok(loops)
}

/// Grow one loop from `seed` until it closes.
///
/// Returns `None` if the loop collapsed onto itself.
fn trace_loop(mask: u8, seed: u8, used: &mut UsedEdges) -> Result<Option<EdgeLoop>, TraceError> {
  let mut ring = Ring::seed(seed, used);
  let mut current = 0;
  let mut steps = 0;

  while !ring[current].visited {
    steps += 1;
    if steps > TRACE_STEP_LIMIT {
      return Err(TraceError::NonTerminating { mask, seed, steps });
    }

    let node = ring[current];
    let target = topology::other_vertex(node.corner, node.link);

    if !is_inside(mask, target) {
      ring[current].visited = true;
      current = node.next;
      continue;
    }

    let arrival = topology::link_of(target, node.edge).ok_or(TraceError::EdgeTable {
      mask,
      corner: target,
      edge: node.edge,
    })?;
    let first = (arrival + 1) % 3;
    let second = (arrival + 2) % 3;

    let first_edge = topology::edge(target, first);
    if used.contains(first_edge) {
      // Only the predecessor may own it, anything else would cross the loop
      let prev = node.prev;
      if ring[prev].edge != first_edge {
        return Err(TraceError::ForeignEdge {
          mask,
          edge: first_edge,
          side: NeighbourSide::Previous,
          found: ring[prev].edge,
        });
      }

      ring.unlink(current);
      current = prev;
      ring.retarget(current, target, second, used);
      if ring.is_collapsed(current) {
        #[cfg(feature = "tracing")]
        tracing::trace!(mask, seed, "edge loop collapsed");
        return Ok(None);
      }
      continue;
    }

    ring.retarget(current, target, first, used);

    let second_edge = topology::edge(target, second);
    if used.contains(second_edge) {
      let next = ring[current].next;
      if ring[next].edge != second_edge {
        return Err(TraceError::ForeignEdge {
          mask,
          edge: second_edge,
          side: NeighbourSide::Next,
          found: ring[next].edge,
        });
      }
      ring.unlink(next);
    } else {
      ring.insert_after(current, target, second, used);
    }
  }

  if ring.is_collapsed(current) {
    return Ok(None);
  }

  Ok(Some(ring.unfold(current)))
}
