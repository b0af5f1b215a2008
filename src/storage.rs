//! Storage policies: who owns the element slots and how capacity changes.
//!
//! Every slot of a storage always holds a value. Slots start out as
//! `T::default()`, and a slot vacated by `pop` keeps its stale value until the
//! next write overwrites it. The owning container tracks which prefix of the
//! slots is live.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::mem;

use crate::config::GrowthConfig;
use crate::error::{KitVecError, Result};

/// Backing slots for a [`Vector`](crate::Vector).
///
/// # Implementations
///
/// - [`DynamicStorage`] - heap buffer that grows by a configurable rate
/// - [`StaticStorage`] - inline array with a compile-time bound
pub trait Storage<T> {
    /// All slots, live or not. Valid until the next `ensure_capacity`.
    fn slots(&self) -> &[T];

    /// All slots, mutable.
    fn slots_mut(&mut self) -> &mut [T];

    /// Number of slots currently available.
    fn capacity(&self) -> usize {
        self.slots().len()
    }

    /// Makes room for at least `requested` slots, keeping the first `len`
    /// values in place.
    ///
    /// # Errors
    ///
    /// - `KitVecError::CapacityExhausted` if the storage cannot grow that far
    /// - `KitVecError::AllocationFailed` if growing needed memory that was not
    ///   available; the existing slots are left untouched
    fn ensure_capacity(&mut self, requested: usize, len: usize) -> Result<()>;

    /// Fresh storage with the same settings as `self` and no values carried
    /// over. Copies and moves build their target from it.
    #[must_use]
    fn empty_like(&self) -> Self
    where
        Self: Sized;
}

fn allocate_slots<T: Default>(capacity: usize) -> Result<Box<[T]>> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| KitVecError::AllocationFailed {
            requested: capacity,
        })?;
    slots.resize_with(capacity, T::default);
    Ok(slots.into_boxed_slice())
}

/// Heap-allocated storage that grows on demand.
///
/// The initial buffer is allocated eagerly. Growth moves live values one at a
/// time into the new buffer; capacity never shrinks.
#[derive(Debug)]
pub struct DynamicStorage<T> {
    slots: Box<[T]>,
    config: GrowthConfig,
}

impl<T: Default> DynamicStorage<T> {
    /// Creates storage with the default [`GrowthConfig`].
    ///
    /// # Panics
    ///
    /// Panics if the initial buffer cannot be allocated.
    #[must_use]
    pub fn new() -> Self {
        Self::with_valid_config(GrowthConfig::default())
    }

    /// Allocates the initial buffer for an already validated `config`.
    #[allow(clippy::expect_used)]
    fn with_valid_config(config: GrowthConfig) -> Self {
        let slots = allocate_slots(config.get_initial_capacity())
            .expect("Initial buffer allocation failed");
        Self { slots, config }
    }

    /// Creates storage with a custom growth configuration.
    ///
    /// # Errors
    ///
    /// - `KitVecError::InvalidConfiguration` if the configuration is rejected
    /// - `KitVecError::AllocationFailed` if the initial buffer cannot be allocated
    pub fn with_config(config: GrowthConfig) -> Result<Self> {
        config.validate()?;
        let slots = allocate_slots(config.get_initial_capacity())?;
        Ok(Self { slots, config })
    }

    #[must_use]
    pub fn config(&self) -> &GrowthConfig {
        &self.config
    }
}

impl<T: Default> Default for DynamicStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> Storage<T> for DynamicStorage<T> {
    fn slots(&self) -> &[T] {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    fn ensure_capacity(&mut self, requested: usize, len: usize) -> Result<()> {
        let capacity = self.slots.len();
        if requested <= capacity {
            return Ok(());
        }

        let new_capacity = self.config.next_capacity(capacity, requested);
        let mut grown = allocate_slots::<T>(new_capacity)?;
        for (target, source) in grown.iter_mut().zip(self.slots.iter_mut().take(len)) {
            *target = mem::take(source);
        }

        log::debug!("dynamic storage grew from {capacity} to {new_capacity} slots");
        self.slots = grown;
        Ok(())
    }

    fn empty_like(&self) -> Self {
        Self::with_valid_config(self.config)
    }
}

/// Fixed-capacity storage embedded in the container.
///
/// Requests beyond `N` slots always fail; nothing is ever allocated.
#[derive(Debug)]
pub struct StaticStorage<T, const N: usize> {
    slots: [T; N],
}

impl<T: Default, const N: usize> StaticStorage<T, N> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| T::default()),
        }
    }
}

impl<T: Default, const N: usize> Default for StaticStorage<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default, const N: usize> Storage<T> for StaticStorage<T, N> {
    fn slots(&self) -> &[T] {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    fn capacity(&self) -> usize {
        N
    }

    fn ensure_capacity(&mut self, requested: usize, _len: usize) -> Result<()> {
        if requested <= N {
            Ok(())
        } else {
            Err(KitVecError::CapacityExhausted {
                requested,
                capacity: N,
            })
        }
    }

    fn empty_like(&self) -> Self {
        Self::new()
    }
}
