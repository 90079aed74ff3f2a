//! Case reduction by complement.
//!
//! A mask and its complement bound the same surface with opposite
//! orientation. Tracing is only reliable from the side with fewer inside
//! corners: a high-popcount mask such as `0x7D` needs two loops that a
//! single seed corner cannot discover, while its complement `0x82` yields
//! them from two separate seeds. Every mask is therefore traced from the
//! sparser side, with the winding flipped when the complement was taken.

use crate::constants::{inside_count, FULL_MASK};

/// Mask actually traced for a case, plus the winding flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReducedCase {
  /// Mask with at most 4 inside corners.
  pub mask: u8,

  /// True if `mask` is the complement of the requested case.
  pub invert_winding: bool,
}

/// Pick the representative with fewer inside corners.
///
/// Ties (4 inside corners) keep the input mask without inversion.
#[inline]
pub const fn reduce(mask: u8) -> ReducedCase {
  let complement = mask ^ FULL_MASK;
  if inside_count(complement) < inside_count(mask) {
    ReducedCase {
      mask: complement,
      invert_winding: true,
    }
  } else {
    ReducedCase {
      mask,
      invert_winding: false,
    }
  }
}

#[cfg(test)]
#[path = "reduce_test.rs"]
mod reduce_test;
