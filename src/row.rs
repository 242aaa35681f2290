//! The score row returned by an alignment.

use std::ops::Index;

/// Scores of the whole short sequence against every prefix of the long one.
///
/// Entry `k` is the minimum cost of aligning all of the short sequence with
/// the first `k` values of the long sequence. The row always has
/// `long.len() + 1` entries.
#[derive(Clone, Debug, PartialEq)]
pub struct ScoreRow<C> {
    scores: Vec<C>,
}

impl<C: Copy + PartialOrd> ScoreRow<C> {
    /// Wrap a row of scores.
    ///
    /// # Panics
    /// Panics if `scores` is empty.
    pub fn new(scores: Vec<C>) -> Self {
        assert!(!scores.is_empty(), "score rows hold at least one entry");
        Self { scores }
    }

    /// Number of entries, `long.len() + 1`.
    #[inline]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Always false: [`new`](Self::new) rejects empty rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[C] {
        &self.scores
    }

    pub fn into_vec(self) -> Vec<C> {
        self.scores
    }

    /// Score against the whole long sequence.
    ///
    /// In global mode this is the final score of the recurrence. It is not
    /// the Levenshtein distance: leading values of the short side may be
    /// dropped for free, so with equal-length inputs it can depend on which
    /// one was passed first.
    #[inline]
    pub fn final_score(&self) -> C {
        self.scores[self.scores.len() - 1]
    }

    /// Position and value of the first minimal score.
    ///
    /// Entry 0 (the empty prefix of the long sequence) is only a candidate
    /// when the row has no other entries, since the working row always holds
    /// zero there. In anywhere mode the position is where the best occurrence
    /// of the short sequence ends inside the long one. Incomparable scores
    /// (NaN) lose to any comparable one.
    pub fn best(&self) -> Option<(usize, C)> {
        let skip = usize::from(self.scores.len() > 1);
        let mut best: Option<(usize, C)> = None;
        for (idx, score) in self.scores.iter().copied().enumerate().skip(skip) {
            match best {
                Some((_, current)) if !(score < current || is_incomparable(current)) => {}
                _ => best = Some((idx, score)),
            }
        }
        best
    }

    /// Where the best match ends in the long sequence.
    pub fn best_end(&self) -> Option<usize> {
        self.best().map(|(idx, _)| idx)
    }

    /// Score at [`best`](Self::best).
    pub fn min_score(&self) -> Option<C> {
        self.best().map(|(_, score)| score)
    }
}

#[inline]
fn is_incomparable<C: PartialOrd>(value: C) -> bool {
    value.partial_cmp(&value).is_none()
}

impl<C> Index<usize> for ScoreRow<C> {
    type Output = C;

    #[inline]
    fn index(&self, idx: usize) -> &C {
        &self.scores[idx]
    }
}

impl<C> AsRef<[C]> for ScoreRow<C> {
    fn as_ref(&self) -> &[C] {
        &self.scores
    }
}

impl<C> From<ScoreRow<C>> for Vec<C> {
    fn from(row: ScoreRow<C>) -> Self {
        row.scores
    }
}
