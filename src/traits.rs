//! Core trait definitions for cost-driven sequence matching.
//!
//! To score an alignment with your own cost model, implement [`CostPolicy`]
//! for a struct that captures it (a substitution matrix, a lookup table, a set
//! of closures). The engine only ever calls the three cost operations; it
//! never inspects the values themselves.
//!
//! [`RowObserver`] is the diagnostic side channel: it sees every completed
//! score row but cannot influence the result.

use std::ops::Add;

use num_traits::{One, Zero};

/// Numeric bound shared by every cost a policy may return.
///
/// Blanket-implemented for all `Copy` numbers with `PartialOrd`, so `u32`,
/// `i64`, `f64` etc. work out of the box.
pub trait Score: Copy + PartialOrd + Add<Output = Self> + Zero + One {}

impl<C> Score for C where C: Copy + PartialOrd + Add<Output = C> + Zero + One {}

/// Cost capability for aligning values of type `T`.
///
/// Semantics, for a short sequence `s` matched into a long sequence `l`:
/// - `match_cost(s_i, l_j)` is paid when `s_i` is aligned with `l_j`.
/// - `insert_cost(s_i)` is paid when `s_i` is left unmatched.
/// - `delete_cost(l_j)` is paid when `l_j` is left unmatched.
///
/// All three should be non-negative for the minimisation to be meaningful.
/// Negative costs are not rejected; they just produce scores that may be
/// negative.
pub trait CostPolicy<T: ?Sized> {
    /// Objective type.
    type Cost: Score;

    /// Cost of aligning `a` (short side) with `b` (long side).
    fn match_cost(&self, a: &T, b: &T) -> Self::Cost;

    /// Cost of an unmatched value from the short side.
    fn insert_cost(&self, a: &T) -> Self::Cost;

    /// Cost of an unmatched value from the long side.
    fn delete_cost(&self, b: &T) -> Self::Cost;
}

impl<T: ?Sized, P: CostPolicy<T> + ?Sized> CostPolicy<T> for &P {
    type Cost = P::Cost;

    #[inline]
    fn match_cost(&self, a: &T, b: &T) -> Self::Cost {
        (**self).match_cost(a, b)
    }

    #[inline]
    fn insert_cost(&self, a: &T) -> Self::Cost {
        (**self).insert_cost(a)
    }

    #[inline]
    fn delete_cost(&self, b: &T) -> Self::Cost {
        (**self).delete_cost(b)
    }
}

/// Observer for the rows produced while an alignment runs.
///
/// `on_seed` receives the baseline row before any value of the short sequence
/// is consumed; `on_row` receives each completed row, with `step` counting
/// consumed short values starting at 1.
pub trait RowObserver<C> {
    fn on_seed(&mut self, _row: &[C]) {}

    fn on_row(&mut self, _step: usize, _row: &[C]) {}
}

impl<C, O: RowObserver<C> + ?Sized> RowObserver<C> for &mut O {
    fn on_seed(&mut self, row: &[C]) {
        (**self).on_seed(row)
    }

    fn on_row(&mut self, step: usize, row: &[C]) {
        (**self).on_row(step, row)
    }
}
