//! Rolling-row alignment engine.
//!
//! The engine fills the classic three-way edit-distance recurrence one row at
//! a time, keeping exactly two rows alive:
//! 1. The shorter input becomes the row sequence, the longer one the columns.
//! 2. The baseline row is seeded according to [`MatchMode`].
//! 3. Each value of the short sequence turns the previous row into the next
//!    one; the two buffers are then swapped.
//!
//! Memory is two rows of length max(|s1|, |s2|) + 1, allocated once per call
//! and reused across steps; time is O(|s1| * |s2|).

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::cost::UnitCost;
use crate::observe::NoopObserver;
use crate::row::ScoreRow;
use crate::traits::{CostPolicy, RowObserver};
use crate::utils::{min3, seed_row};

/// Where the short sequence may start inside the long one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Match from the start: leading values of the long sequence are paid for.
    #[default]
    Global,
    /// Match anywhere: skipping a prefix of the long sequence is free.
    Anywhere,
}

impl MatchMode {
    #[inline]
    pub fn is_anywhere(self) -> bool {
        matches!(self, MatchMode::Anywhere)
    }
}

impl From<bool> for MatchMode {
    /// `true` selects [`MatchMode::Anywhere`].
    fn from(match_anywhere: bool) -> Self {
        if match_anywhere {
            MatchMode::Anywhere
        } else {
            MatchMode::Global
        }
    }
}

/// Alignment engine bound to a cost policy `P`.
///
/// Typical usage:
/// ```
/// use dp_match::{Aligner, UnitCost};
///
/// let aligner = Aligner::new(UnitCost);
/// let row = aligner.align(b"kitten", b"sitting", false);
/// assert_eq!(row.len(), 8);
/// assert_eq!(row.final_score(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Aligner<P> {
    policy: P,
    mode: MatchMode,
}

impl<P> Aligner<P> {
    /// Create an engine that runs in [`MatchMode::Global`] by default.
    pub fn new(policy: P) -> Self {
        Self::with_mode(policy, MatchMode::Global)
    }

    /// Create an engine with an explicit default mode for [`run`](Self::run).
    pub fn with_mode(policy: P, mode: MatchMode) -> Self {
        Self { policy, mode }
    }

    /// Expose immutable reference to the cost policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Expose mutable reference, e.g. to register more overrides.
    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    /// The mode used by [`run`](Self::run).
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn into_policy(self) -> P {
        self.policy
    }

    /// Align with the configured default mode.
    pub fn run<T>(&self, s1: &[T], s2: &[T]) -> ScoreRow<P::Cost>
    where
        P: CostPolicy<T>,
    {
        self.align(s1, s2, self.mode)
    }

    /// Align `s1` and `s2` and return the final score row.
    ///
    /// The shorter sequence is matched into the longer one (`s1` stays the
    /// short side when lengths are equal). `insert_cost` is charged to values
    /// of the short side and `delete_cost` to values of the long side;
    /// `match_cost` always receives `(short value, long value)`.
    ///
    /// The returned row has `max(|s1|, |s2|) + 1` entries. Entry `k` is the
    /// best cost of the whole short sequence against the first `k` values of
    /// the long sequence.
    pub fn align<T>(&self, s1: &[T], s2: &[T], mode: impl Into<MatchMode>) -> ScoreRow<P::Cost>
    where
        P: CostPolicy<T>,
    {
        self.align_observed(s1, s2, mode, &mut NoopObserver)
    }

    /// Like [`align`](Self::align), reporting every row to `observer`.
    pub fn align_observed<T, O>(
        &self,
        s1: &[T],
        s2: &[T],
        mode: impl Into<MatchMode>,
        observer: &mut O,
    ) -> ScoreRow<P::Cost>
    where
        P: CostPolicy<T>,
        O: RowObserver<P::Cost> + ?Sized,
    {
        let mode = mode.into();
        let (short, long) = if s1.len() > s2.len() {
            (s2, s1)
        } else {
            (s1, s2)
        };

        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("align", short = short.len(), long = long.len(), ?mode);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut prev = seed_row::<P::Cost>(long.len(), mode.is_anywhere());
        // Working row uses the anywhere seed regardless of mode; its entry 0
        // stays zero for every step.
        let mut next = seed_row::<P::Cost>(long.len(), true);
        observer.on_seed(&prev);

        for (step, s_val) in short.iter().enumerate() {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("row", step = step + 1);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();

            let insert = self.policy.insert_cost(s_val);
            for (j, l_val) in long.iter().enumerate() {
                let diag = self.policy.match_cost(s_val, l_val) + prev[j];
                let up = insert + prev[j + 1];
                let left = self.policy.delete_cost(l_val) + next[j];
                next[j + 1] = min3(diag, up, left);
            }

            observer.on_row(step + 1, &next);
            std::mem::swap(&mut prev, &mut next);
        }

        ScoreRow::new(prev)
    }

    /// Align `query` against each target, preserving target order.
    #[cfg(feature = "parallel")]
    pub fn align_batch<T, S>(
        &self,
        query: &[T],
        targets: &[S],
        mode: impl Into<MatchMode>,
    ) -> Vec<ScoreRow<P::Cost>>
    where
        T: Sync,
        S: AsRef<[T]> + Sync,
        P: CostPolicy<T> + Sync,
        P::Cost: Send,
    {
        let mode = mode.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(targets = targets.len(), ?mode, "align_batch");
        targets
            .par_iter()
            .map(|target| self.align(query, target.as_ref(), mode))
            .collect()
    }

    /// Align `query` against each target, preserving target order.
    #[cfg(not(feature = "parallel"))]
    pub fn align_batch<T, S>(
        &self,
        query: &[T],
        targets: &[S],
        mode: impl Into<MatchMode>,
    ) -> Vec<ScoreRow<P::Cost>>
    where
        S: AsRef<[T]>,
        P: CostPolicy<T>,
    {
        let mode = mode.into();
        #[cfg(feature = "tracing")]
        tracing::debug!(targets = targets.len(), ?mode, "align_batch");
        targets
            .iter()
            .map(|target| self.align(query, target.as_ref(), mode))
            .collect()
    }
}

/// Unit-cost [`MatchMode::Global`] final score of `a` against `b`.
///
/// This is the recurrence's score, not the Levenshtein distance: every row
/// after the seed starts at zero, so leading values of the short side can be
/// dropped for free. With equal lengths `a` is the short side, and the result
/// can change when the arguments are swapped.
pub fn global_score<T: PartialEq>(a: &[T], b: &[T]) -> u32 {
    Aligner::new(UnitCost).align(a, b, MatchMode::Global).final_score()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::{CostFns, OverrideCost};
    use crate::observe::RowLog;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn kitten_sitting() {
        let row = Aligner::new(UnitCost).align(b"kitten", b"sitting", false);
        assert_eq!(row.len(), 8);
        assert_eq!(row.final_score(), 3);
        assert_eq!(global_score(b"sitting", b"kitten"), 3);
    }

    #[test]
    fn identical_sequences_score_zero() {
        let s = chars("this is a test");
        let row = Aligner::new(UnitCost).align(&s, &s, MatchMode::Global);
        assert_eq!(row.final_score(), 0);
    }

    #[test]
    fn empty_short_returns_baseline() {
        let aligner = Aligner::new(UnitCost);
        let empty: &[u8] = b"";
        assert_eq!(
            aligner.align(empty, b"abc", false).as_slice(),
            &[0, 1, 2, 3]
        );
        assert_eq!(aligner.align(empty, b"abc", true).as_slice(), &[0, 0, 0, 0]);
        assert_eq!(aligner.align(b"abc", empty, false).as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn both_empty_is_single_zero() {
        let empty: &[u8] = b"";
        let aligner = Aligner::new(UnitCost);
        assert_eq!(aligner.align(empty, empty, false).as_slice(), &[0]);
        assert_eq!(aligner.align(empty, empty, true).as_slice(), &[0]);
    }

    #[test]
    fn anywhere_finds_embedded_word() {
        let row = Aligner::new(UnitCost).align(&chars("test"), &chars("a test case"), true);
        assert_eq!(row.len(), 12);
        assert_eq!(row.best(), Some((6, 0)));
    }

    #[test]
    fn leading_short_values_are_free_after_seed() {
        // Only the seed row is anchored; "f" is dropped at no cost.
        let row = Aligner::new(UnitCost).align(b"flaw", b"lawn", false);
        assert_eq!(row.as_slice(), &[0, 1, 1, 0, 1]);
    }

    #[test]
    fn equal_lengths_depend_on_call_order() {
        let aligner = Aligner::new(UnitCost);
        let forward = aligner.align(b"flaw", b"lawn", false);
        let backward = aligner.align(b"lawn", b"flaw", false);
        assert_eq!(forward.as_slice(), &[0, 1, 1, 0, 1]);
        assert_eq!(backward.as_slice(), &[0, 1, 2, 3, 2]);
        assert_eq!(forward.min_score(), Some(0));
        assert_eq!(backward.min_score(), Some(1));
        assert_eq!(global_score(b"flaw", b"lawn"), 1);
        assert_eq!(global_score(b"lawn", b"flaw"), 2);
    }

    #[test]
    fn working_row_keeps_zero_in_first_column() {
        let mut log = RowLog::default();
        let aligner = Aligner::new(UnitCost);
        aligner.align_observed(b"ab", b"xyz", MatchMode::Global, &mut log);
        assert_eq!(log.seed, vec![0, 1, 2, 3]);
        assert_eq!(log.rows.len(), 2);
        assert!(log.rows.iter().all(|row| row[0] == 0));
    }

    #[test]
    fn short_side_is_charged_insert_cost() {
        // Long side "ab", short side "a": the unmatched "b" is a delete.
        let policy = CostFns::new(
            |a: &u8, b: &u8| if a == b { 0u32 } else { 100 },
            |_: &u8| 100u32,
            |_: &u8| 5u32,
        );
        let aligner = Aligner::new(policy);
        assert_eq!(aligner.align(b"ab", b"a", false).final_score(), 5);
        assert_eq!(aligner.align(b"a", b"ab", false).final_score(), 5);
    }

    #[test]
    fn override_turns_vowel_swap_free() {
        let s1 = chars("this is a test");
        let s2 = chars("thes es a tist");
        let plain = Aligner::new(UnitCost).align(&s1, &s2, false);
        assert_eq!(plain.final_score(), 3);

        let mut costs = OverrideCost::default();
        costs.register_symmetric('i', 'e', 0);
        let custom = Aligner::new(costs).align(&s1, &s2, false);
        assert_eq!(custom.final_score(), 0);
    }

    #[test]
    fn run_uses_configured_mode() {
        let s = chars("test");
        let t = chars("xxtest");
        assert_eq!(Aligner::new(UnitCost).run(&s, &t).final_score(), 2);
        let anywhere = Aligner::with_mode(UnitCost, MatchMode::Anywhere);
        assert_eq!(anywhere.mode(), MatchMode::Anywhere);
        assert_eq!(anywhere.run(&s, &t).final_score(), 0);
    }

    #[test]
    fn batch_preserves_target_order() {
        let aligner = Aligner::new(UnitCost);
        let targets = vec![b"kitten".to_vec(), b"sitting".to_vec(), b"mitten".to_vec()];
        let rows = aligner.align_batch(b"kitten", &targets, false);
        let scores: Vec<u32> = rows.iter().map(|r| r.final_score()).collect();
        assert_eq!(scores, vec![0, 3, 1]);
    }

    #[test]
    fn mode_from_bool() {
        assert_eq!(MatchMode::from(true), MatchMode::Anywhere);
        assert_eq!(MatchMode::from(false), MatchMode::Global);
        assert_eq!(MatchMode::default(), MatchMode::Global);
    }
}
