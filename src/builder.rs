use crate::cost::UnitCost;
use crate::engine::{Aligner, MatchMode};

pub struct AlignerBuilder<P> {
    policy: P,
    mode: MatchMode,
}

impl Default for AlignerBuilder<UnitCost> {
    fn default() -> Self {
        Self::new(UnitCost)
    }
}

impl<P> AlignerBuilder<P> {
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            mode: MatchMode::Global,
        }
    }
    pub fn with_policy<Q>(self, policy: Q) -> AlignerBuilder<Q> {
        AlignerBuilder {
            policy,
            mode: self.mode,
        }
    }
    pub fn mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }
    pub fn match_anywhere(self, match_anywhere: bool) -> Self {
        self.mode(match_anywhere.into())
    }
    pub fn build(self) -> Aligner<P> {
        Aligner::with_mode(self.policy, self.mode)
    }
}
