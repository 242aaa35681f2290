//! Dynamic-programming sequence matching with pluggable costs.
//!
//! This crate scores how well two ordered sequences of arbitrary values line
//! up, using the edit-distance recurrence generalised with caller-supplied
//! match, insert and delete costs.
//!
//! ## Core idea
//! 1. Describe your cost model by implementing [`CostPolicy`] (or use one of
//!    the policies in [`cost`]).
//! 2. Hand it to an [`Aligner`].
//! 3. Call [`Aligner::align`] with two sequences and a [`MatchMode`] to get a
//!    [`ScoreRow`]: the best score of the shorter sequence against every
//!    prefix of the longer one.
//!
//! Only two rows of the DP table are alive at any time, so memory stays
//! linear in the length of the longer sequence.
//!
//! ## Quick start
//! ```
//! use dp_match::{cost::OverrideCost, Aligner, UnitCost};
//!
//! let needle: Vec<char> = "test".chars().collect();
//! let hay: Vec<char> = "a test case".chars().collect();
//! let row = Aligner::new(UnitCost).align(&needle, &hay, true);
//! assert_eq!(row.best(), Some((6, 0)));
//!
//! let mut costs = OverrideCost::default();
//! costs.register('i', 'e', 0);
//! let spelled: Vec<char> = "tist".chars().collect();
//! let row = Aligner::new(costs).align(&spelled, &needle, false);
//! assert_eq!(row.final_score(), 0);
//! ```
//!
//! ## Cargo features
//! - `tracing`  : spans around every alignment and an `observe::TracingObserver`
//!   that logs each completed row.
//! - `parallel` : [`Aligner::align_batch`] runs targets on the rayon pool.
//! - `heavy`    : long-running stress tests.

pub mod builder;
pub mod cost;
pub mod engine;
pub mod observe;
pub mod row;
pub mod traits;
pub mod utils;

pub use crate::builder::AlignerBuilder;
pub use crate::cost::{OverrideCost, OverrideTable, UnitCost};
pub use crate::engine::{global_score, Aligner, MatchMode};
pub use crate::row::ScoreRow;
pub use crate::traits::{CostPolicy, RowObserver, Score};
