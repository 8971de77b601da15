//! Exponential price curve for generators.

use super::constants::COST_MULTIPLIER;

/// Geometric cost curve: every owned unit makes the next one `multiplier` times
/// more expensive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostCurve {
    pub multiplier: f64,
}

impl Default for CostCurve {
    fn default() -> Self {
        Self {
            multiplier: COST_MULTIPLIER,
        }
    }
}

impl CostCurve {
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }

    /// Price of the next unit when `owned` are already held.
    pub fn unit_cost(&self, base: f64, owned: u32) -> f64 {
        base * self.multiplier.powi(owned as i32)
    }

    /// Price of buying `quantity` units starting from `owned`.
    ///
    /// Summed unit by unit so the result is exactly the sum of
    /// [`unit_cost`](Self::unit_cost) over the batch.
    ///
    /// `quantity` must be at least 1. A zero quantity is a caller bug and is
    /// not clamped.
    pub fn batch_cost(&self, base: f64, owned: u32, quantity: u32) -> f64 {
        debug_assert!(quantity >= 1, "batch_cost requires quantity >= 1");
        (0..quantity)
            .map(|i| self.unit_cost(base, owned + i))
            .sum()
    }
}
