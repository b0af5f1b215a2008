//! Growth configuration for [`DynamicStorage`](crate::DynamicStorage).

use crate::error::{KitVecError, Result};

const DEFAULT_INITIAL_CAPACITY: usize = 10;
const DEFAULT_GROWTH_RATE: f32 = 1.5;

/// How dynamic storage sizes its first buffer and how fast it grows.
///
/// On growth the new capacity is `max(requested, floor(capacity * growth_rate))`.
///
/// ```
/// # use kitvec::GrowthConfig;
/// let config = GrowthConfig::default()
///     .initial_capacity(4)
///     .growth_rate(2.0);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.next_capacity(4, 5), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthConfig {
    initial_capacity: usize,
    growth_rate: f32,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth_rate: DEFAULT_GROWTH_RATE,
        }
    }
}

impl GrowthConfig {
    /// Sets the number of slots allocated at construction.
    #[must_use]
    pub fn initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the multiplier applied to the capacity on each growth.
    #[must_use]
    pub fn growth_rate(mut self, growth_rate: f32) -> Self {
        self.growth_rate = growth_rate;
        self
    }

    #[must_use]
    pub fn get_initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    #[must_use]
    pub fn get_growth_rate(&self) -> f32 {
        self.growth_rate
    }

    /// Checks that the growth rate is a finite number of at least 1.0.
    ///
    /// # Errors
    ///
    /// Returns `KitVecError::InvalidConfiguration` naming `growth_rate` otherwise.
    pub fn validate(&self) -> Result<()> {
        if !self.growth_rate.is_finite() {
            return Err(KitVecError::InvalidConfiguration {
                parameter: "growth_rate",
                reason: "must be finite",
            });
        }
        if self.growth_rate < 1.0 {
            return Err(KitVecError::InvalidConfiguration {
                parameter: "growth_rate",
                reason: "must be at least 1.0",
            });
        }
        Ok(())
    }

    /// Capacity to grow to when `requested` slots do not fit in `current`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn next_capacity(&self, current: usize, requested: usize) -> usize {
        // Float-to-int casts truncate, which is the floor for positive values.
        let grown = (current as f32 * self.growth_rate) as usize;
        grown.max(requested)
    }
}
