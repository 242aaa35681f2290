//! Assorted utilities and helpers.
//!
//! These are intentionally minimal; the engine is the only caller.

use crate::traits::Score;

/// Build the baseline row of length `len + 1`.
///
/// With `match_anywhere` every entry is zero; otherwise entry `i` is `i`
/// copies of `C::one()` added together.
pub fn seed_row<C: Score>(len: usize, match_anywhere: bool) -> Vec<C> {
    let mut row = Vec::with_capacity(len + 1);
    let mut current = C::zero();
    row.push(current);
    for _ in 0..len {
        if !match_anywhere {
            current = current + C::one();
        }
        row.push(current);
    }
    row
}

/// Minimum of the diagonal, up and left candidates.
///
/// Ties resolve to the earliest candidate. A candidate that does not compare
/// (NaN) never replaces an earlier one.
#[inline]
pub fn min3<C: PartialOrd>(diag: C, up: C, left: C) -> C {
    let mut best = diag;
    if up < best {
        best = up;
    }
    if left < best {
        best = left;
    }
    best
}
