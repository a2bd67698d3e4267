//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for the arena allocator.
///
/// Controls the first block's size, how fast the chain grows, and the hard
/// ceiling on total capacity. Validated at construction; all values are
/// immutable after creation.
#[derive(Clone, Debug, PartialEq)]
pub struct ArenaConfig {
    /// Size of the first block in f32 elements.
    ///
    /// Default: 1024 (4KB). Must be non-zero.
    pub initial_capacity: usize,

    /// Multiplier applied to the newest block's size when the chain grows.
    ///
    /// Default: 1.5. Must be finite and greater than 1.
    pub growth_factor: f64,

    /// Upper bound on the summed capacity of every block, in f32 elements.
    ///
    /// Default: 16_777_216 (64MB). Must be at least `initial_capacity`.
    pub capacity_ceiling: usize,
}

impl ArenaConfig {
    /// Default first-block size: 1024 f32 elements.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 1024;

    /// Default growth multiplier.
    pub const DEFAULT_GROWTH_FACTOR: f64 = 1.5;

    /// Default ceiling: 64MB / 4 bytes = 16M f32 elements.
    pub const DEFAULT_CAPACITY_CEILING: usize = 16_777_216;

    /// Create a config with the given first-block size.
    ///
    /// Uses default values for all other parameters. The ceiling is raised
    /// to `initial_capacity` if the default would be smaller.
    pub fn new(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
            capacity_ceiling: Self::DEFAULT_CAPACITY_CEILING.max(initial_capacity),
        }
    }

    /// Replace the growth factor.
    pub fn with_growth_factor(mut self, growth_factor: f64) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Replace the capacity ceiling (in f32 elements).
    pub fn with_capacity_ceiling(mut self, capacity_ceiling: usize) -> Self {
        self.capacity_ceiling = capacity_ceiling;
        self
    }

    /// Check every parameter, returning [`ArenaError::InvalidConfig`] on
    /// the first violation.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.initial_capacity == 0 {
            return Err(ArenaError::InvalidConfig {
                reason: "initial_capacity must be non-zero".into(),
            });
        }
        if !self.growth_factor.is_finite() || self.growth_factor <= 1.0 {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "growth_factor must be finite and > 1.0, got {}",
                    self.growth_factor
                ),
            });
        }
        if self.capacity_ceiling < self.initial_capacity {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "capacity_ceiling ({}) is smaller than initial_capacity ({})",
                    self.capacity_ceiling, self.initial_capacity
                ),
            });
        }
        if self.capacity_ceiling > u32::MAX as usize {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "capacity_ceiling ({}) exceeds the addressable {} elements",
                    self.capacity_ceiling,
                    u32::MAX
                ),
            });
        }
        Ok(())
    }

    /// Size of the first block in bytes.
    pub fn initial_bytes(&self) -> usize {
        self.initial_capacity * std::mem::size_of::<f32>()
    }

    /// Capacity ceiling in bytes.
    pub fn ceiling_bytes(&self) -> usize {
        self.capacity_ceiling * std::mem::size_of::<f32>()
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
