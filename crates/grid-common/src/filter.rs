//! Threshold band filter.

use serde::{Deserialize, Serialize};

/// Selects values lying at least `range` away from `reference`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Filter {
    pub reference: f64,
    pub range: f64,
}

impl Filter {
    pub fn new(reference: f64, range: f64) -> Self {
        Self { reference, range }
    }

    /// True when `z` is outside the open band `(reference - range, reference + range)`.
    pub fn include(&self, z: f64) -> bool {
        z >= self.reference + self.range || z <= self.reference - self.range
    }
}
