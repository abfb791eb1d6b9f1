use crate::rule::Family;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Search statistics.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Stats {
    /// How many branches were taken from the tableau?
    pub branches: usize,
    /// How many successor branches were discarded as contradictory?
    pub closed: usize,
    /// How many successor branches were discarded as already pending?
    pub duplicates: usize,
    pub alpha: usize,
    pub beta: usize,
    pub gamma: usize,
    pub delta: usize,
    /// How many constants were picked from the pool?
    pub constants: usize,
}

impl Stats {
    /// Register the application of a rule.
    pub fn count(&mut self, family: Family) {
        let n = match family {
            Family::Alpha => &mut self.alpha,
            Family::Beta => &mut self.beta,
            Family::Gamma => &mut self.gamma,
            Family::Delta => &mut self.delta,
        };
        *n += 1
    }
}
