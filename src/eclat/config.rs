use serde::Deserialize;

use super::strategy::Strategy;

/// Parameters of one mining run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Itemsets are kept only when their support is strictly greater than this.
    pub min_support: usize,
    pub strategy: Strategy,
    /// Spread each layer's joins over the rayon pool.
    pub parallel: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 2,
            strategy: Strategy::default(),
            parallel: false,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: usize, strategy: Strategy) -> Self {
        Self {
            min_support,
            strategy,
            ..Self::default()
        }
    }

    pub fn with_min_support(mut self, min_support: usize) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
