//! Row observers.
//!
//! The engine is silent unless an observer is passed to
//! [`Aligner::align_observed`](crate::Aligner::align_observed).

use crate::traits::RowObserver;

/// Observer that ignores every row.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl<C> RowObserver<C> for NoopObserver {}

/// Observer that keeps a copy of every row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowLog<C> {
    /// Baseline row before any value of the short sequence is consumed.
    pub seed: Vec<C>,
    /// Completed rows, one per value of the short sequence.
    pub rows: Vec<Vec<C>>,
}

impl<C: Clone> RowObserver<C> for RowLog<C> {
    fn on_seed(&mut self, row: &[C]) {
        self.seed = row.to_vec();
        self.rows.clear();
    }

    fn on_row(&mut self, _step: usize, row: &[C]) {
        self.rows.push(row.to_vec());
    }
}

/// Both observers see every row, the first one first.
impl<C, A, B> RowObserver<C> for (A, B)
where
    A: RowObserver<C>,
    B: RowObserver<C>,
{
    fn on_seed(&mut self, row: &[C]) {
        self.0.on_seed(row);
        self.1.on_seed(row);
    }

    fn on_row(&mut self, step: usize, row: &[C]) {
        self.0.on_row(step, row);
        self.1.on_row(step, row);
    }
}

/// Observer that emits each row as a `tracing` debug event.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

#[cfg(feature = "tracing")]
impl<C: std::fmt::Debug> RowObserver<C> for TracingObserver {
    fn on_seed(&mut self, row: &[C]) {
        tracing::debug!(?row, "initial values");
    }

    fn on_row(&mut self, step: usize, row: &[C]) {
        tracing::debug!(step, ?row, "row complete");
    }
}
