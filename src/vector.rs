use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ops::{Index, IndexMut};
use core::slice;

use crate::config::GrowthConfig;
use crate::error::{KitVecError, Result};
use crate::failure::{report, unwrap_or_fail, FailurePolicy, PanicOnFailure};
use crate::management::{Management, Ordered, Unordered};
use crate::storage::{DynamicStorage, StaticStorage, Storage};

/// Growable heap vector keeping insertion order.
pub type OrderedVec<T> = Vector<T, DynamicStorage<T>, Ordered>;

/// Growable heap vector with O(1) erase.
pub type UnorderedVec<T> = Vector<T, DynamicStorage<T>, Unordered>;

/// Capacity of the static aliases when none is given.
pub const DEFAULT_STATIC_CAPACITY: usize = 16;

/// Fixed-capacity vector keeping insertion order.
pub type StaticOrderedVec<T, const N: usize = DEFAULT_STATIC_CAPACITY> =
    Vector<T, StaticStorage<T, N>, Ordered>;

/// Fixed-capacity vector with O(1) erase.
pub type StaticUnorderedVec<T, const N: usize = DEFAULT_STATIC_CAPACITY> =
    Vector<T, StaticStorage<T, N>, Unordered>;

/// A resizable array assembled from a storage policy `S`, a management
/// policy `M` and a failure policy `F`.
///
/// The vector owns its storage and a logical length. The live elements are
/// the first `len()` slots; slots past the end keep whatever they last held.
///
/// Copying (`Clone`) and the explicit moves ([`take`](Vector::take),
/// [`move_from`](Vector::move_from)) rebuild the target by pushing every
/// element. The buffer itself is never handed over, since static storage has
/// no buffer to hand over, so both run in O(n) for every storage.
pub struct Vector<T, S = DynamicStorage<T>, M = Ordered, F = PanicOnFailure> {
    storage: S,
    len: usize,
    _policies: PhantomData<(T, fn() -> (M, F))>,
}

impl<T, S: Storage<T> + Default, M: Management<T>, F: FailurePolicy> Vector<T, S, M, F> {
    /// Creates an empty vector with default-constructed storage.
    #[must_use]
    pub fn new() -> Self {
        Self::with_storage(S::default())
    }
}

impl<T: Default, M: Management<T>, F: FailurePolicy> Vector<T, DynamicStorage<T>, M, F> {
    /// Creates an empty heap vector with a custom growth configuration.
    ///
    /// # Errors
    ///
    /// Returns the error of [`DynamicStorage::with_config`].
    pub fn with_config(config: GrowthConfig) -> Result<Self> {
        Ok(Self::with_storage(DynamicStorage::with_config(config)?))
    }
}

impl<T, S: Storage<T>, M: Management<T>, F: FailurePolicy> Vector<T, S, M, F> {
    /// Creates an empty vector on top of `storage`.
    ///
    /// Slots the storage already holds are not treated as elements.
    pub fn with_storage(storage: S) -> Self {
        Self {
            storage,
            len: 0,
            _policies: PhantomData,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    #[must_use]
    #[allow(clippy::indexing_slicing)] // len <= capacity
    pub fn as_slice(&self) -> &[T] {
        &self.storage.slots()[..self.len]
    }

    #[allow(clippy::indexing_slicing)] // len <= capacity
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.storage.slots_mut()[..self.len]
    }

    /// Iterates over the live elements in position order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterates over the live elements, mutably.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Appends `value` and lets the management policy place it.
    ///
    /// Returns the position the value ended up at.
    ///
    /// # Errors
    ///
    /// Returns the storage error if there is no room for one more element.
    /// The vector is unchanged in that case.
    #[allow(clippy::indexing_slicing)] // capacity ensured above
    pub fn try_push(&mut self, value: T) -> Result<usize> {
        self.storage.ensure_capacity(self.len + 1, self.len)?;

        let slots = self.storage.slots_mut();
        slots[self.len] = value;
        let position = M::insert(&mut slots[..=self.len], self.len);
        self.len += 1;

        Ok(position)
    }

    /// Appends `value`, reporting a full storage through the failure policy.
    ///
    /// # Panics
    ///
    /// Panics on a full storage under `PanicOnFailure`.
    pub fn push(&mut self, value: T) {
        report::<F, _>(self.try_push(value));
    }

    /// Builds an element with `make` and appends it.
    ///
    /// # Errors
    ///
    /// Same as [`try_push`](Vector::try_push).
    pub fn try_emplace_with(&mut self, make: impl FnOnce() -> T) -> Result<usize> {
        self.try_push(make())
    }

    /// Builds an element with `make` and appends it.
    ///
    /// # Panics
    ///
    /// Panics on a full storage under `PanicOnFailure`.
    pub fn emplace_with(&mut self, make: impl FnOnce() -> T) {
        self.push(make());
    }

    /// # Errors
    ///
    /// Returns `KitVecError::EmptyContainer` if the vector is empty.
    pub fn try_back(&self) -> Result<&T> {
        self.as_slice().last().ok_or(KitVecError::EmptyContainer)
    }

    /// # Errors
    ///
    /// Returns `KitVecError::EmptyContainer` if the vector is empty.
    pub fn try_back_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice()
            .last_mut()
            .ok_or(KitVecError::EmptyContainer)
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty, after reporting to the failure policy.
    #[must_use]
    pub fn back(&self) -> &T {
        unwrap_or_fail::<F, _>(self.try_back())
    }

    /// # Panics
    ///
    /// Panics if the vector is empty, after reporting to the failure policy.
    pub fn back_mut(&mut self) -> &mut T {
        unwrap_or_fail::<F, _>(self.try_back_mut())
    }

    /// Drops the last element from the live range.
    ///
    /// The vacated slot is not reset; it keeps its value until overwritten.
    ///
    /// # Errors
    ///
    /// Returns `KitVecError::EmptyContainer` if the vector is empty.
    pub fn try_pop(&mut self) -> Result<()> {
        if self.len == 0 {
            return Err(KitVecError::EmptyContainer);
        }
        self.len -= 1;
        Ok(())
    }

    /// Drops the last element from the live range.
    ///
    /// # Panics
    ///
    /// Panics on an empty vector under `PanicOnFailure`.
    pub fn pop(&mut self) {
        report::<F, _>(self.try_pop());
    }

    /// Removes the element at `position`.
    ///
    /// Ordered management shifts the tail left and keeps the order; unordered
    /// management moves the last element into the hole.
    ///
    /// # Errors
    ///
    /// Returns `KitVecError::IndexOutOfBounds` if `position >= len()`.
    pub fn try_erase(&mut self, position: usize) -> Result<()> {
        self.check_bounds(position)?;
        M::erase(self.as_mut_slice(), position);
        self.try_pop()
    }

    /// Removes the element at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()` under `PanicOnFailure`.
    pub fn erase(&mut self, position: usize) {
        report::<F, _>(self.try_erase(position));
    }

    /// Forgets every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    fn check_bounds(&self, index: usize) -> Result<()> {
        if index >= self.len {
            Err(KitVecError::IndexOutOfBounds {
                index,
                length: self.len,
            })
        } else {
            Ok(())
        }
    }

    /// The element at `index`, or `None` past the end.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// The element at `index`, mutably, or `None` past the end.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// # Errors
    ///
    /// Returns `KitVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn try_get(&self, index: usize) -> Result<&T> {
        let length = self.len;
        self.get(index)
            .ok_or(KitVecError::IndexOutOfBounds { index, length })
    }

    /// # Errors
    ///
    /// Returns `KitVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T> {
        let length = self.len;
        self.get_mut(index)
            .ok_or(KitVecError::IndexOutOfBounds { index, length })
    }

    /// Shrinks to or grows to `new_len` elements, filling with defaults.
    ///
    /// Capacity for `new_len` is ensured before anything changes.
    ///
    /// # Errors
    ///
    /// Returns the storage error if `new_len` elements do not fit.
    pub fn try_resize(&mut self, new_len: usize) -> Result<()>
    where
        T: Default,
    {
        self.storage.ensure_capacity(new_len, self.len)?;

        if new_len <= self.len {
            self.len = new_len;
            return Ok(());
        }
        while self.len < new_len {
            self.try_push(T::default())?;
        }
        Ok(())
    }

    /// Shrinks to or grows to `new_len` elements, filling with defaults.
    ///
    /// # Panics
    ///
    /// Panics if `new_len` elements do not fit under `PanicOnFailure`.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        report::<F, _>(self.try_resize(new_len));
    }

    /// Replaces the contents with the elements of `other`, moved one by one.
    ///
    /// `other` is left empty.
    pub fn move_from(&mut self, other: &mut Self)
    where
        T: Default,
    {
        self.clear();
        for item in other.iter_mut() {
            self.push(mem::take(item));
        }
        other.clear();
    }

    /// Moves every element into a new vector and leaves `self` empty.
    ///
    /// The new vector gets storage with the same settings as `self`.
    #[must_use]
    pub fn take(&mut self) -> Self
    where
        T: Default,
    {
        let mut moved = self.empty_like();
        moved.move_from(self);
        moved
    }

    /// An empty vector over storage configured like this one.
    pub(crate) fn empty_like(&self) -> Self {
        Self::with_storage(self.storage.empty_like())
    }
}

impl<T, S: Storage<T> + Default, M: Management<T>, F: FailurePolicy> Default
    for Vector<T, S, M, F>
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, S: Storage<T>, M: Management<T>, F: FailurePolicy> Clone
    for Vector<T, S, M, F>
{
    fn clone(&self) -> Self {
        let mut copy = self.empty_like();
        copy.clone_from(self);
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        for item in source {
            self.push(item.clone());
        }
    }
}

impl<T: PartialEq, S: Storage<T>, M: Management<T>, F: FailurePolicy> PartialEq
    for Vector<T, S, M, F>
{
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, S: Storage<T>, M: Management<T>, F: FailurePolicy> Eq for Vector<T, S, M, F> {}

impl<T: fmt::Debug, S: Storage<T>, M: Management<T>, F: FailurePolicy> fmt::Debug
    for Vector<T, S, M, F>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, S: Storage<T>, M: Management<T>, F: FailurePolicy> Index<usize> for Vector<T, S, M, F> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        unwrap_or_fail::<F, _>(self.try_get(index))
    }
}

impl<T, S: Storage<T>, M: Management<T>, F: FailurePolicy> IndexMut<usize>
    for Vector<T, S, M, F>
{
    fn index_mut(&mut self, index: usize) -> &mut T {
        unwrap_or_fail::<F, _>(self.try_get_mut(index))
    }
}

impl<T, S: Storage<T>, M: Management<T>, F: FailurePolicy> Extend<T> for Vector<T, S, M, F> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T, S: Storage<T>, M: Management<T>, F: FailurePolicy> IntoIterator
    for &'a Vector<T, S, M, F>
{
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, S: Storage<T>, M: Management<T>, F: FailurePolicy> IntoIterator
    for &'a mut Vector<T, S, M, F>
{
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
