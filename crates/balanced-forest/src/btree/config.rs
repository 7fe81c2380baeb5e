use serde::{Deserialize, Serialize};

use crate::error::{ForestError, Result};

/// Smallest accepted `max_keys`.
pub const MIN_MAX_KEYS: usize = 3;

/// B-tree fan-out configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BTreeConfig {
    /// Most keys a node may hold (M).
    pub max_keys: usize,
}

impl Default for BTreeConfig {
    fn default() -> Self {
        Self {
            max_keys: MIN_MAX_KEYS,
        }
    }
}

impl BTreeConfig {
    pub fn new(max_keys: usize) -> Self {
        Self { max_keys }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_keys < MIN_MAX_KEYS {
            return Err(ForestError::Configuration {
                max_keys: self.max_keys,
                min: MIN_MAX_KEYS,
            });
        }
        Ok(())
    }

    /// T = ⌊(M+1)/2⌋; every non-root node keeps at least T−1 keys.
    pub fn min_degree(&self) -> usize {
        (self.max_keys + 1) / 2
    }

    pub(crate) fn order(&self) -> Order {
        Order {
            max_keys: self.max_keys,
            min_degree: self.min_degree(),
        }
    }
}

/// Limits passed down through node operations.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Order {
    pub max_keys: usize,
    pub min_degree: usize,
}
