//! Key-value pairs kept in a [`Vector`], arranged by a pair management policy.

use core::marker::PhantomData;

use crate::error::{KitVecError, Result};
use crate::failure::{FailurePolicy, PanicOnFailure};
use crate::management::{Ordered, PairManagement};
use crate::storage::{DynamicStorage, Storage};
use crate::vector::Vector;

/// A vector of `(K, V)` pairs with at most one pair per key.
///
/// The backing vector only appends and pops; all placement, search and
/// removal shuffling is delegated to the management policy `M`.
pub struct PairStorage<K, V, S = DynamicStorage<(K, V)>, M = Ordered, F = PanicOnFailure> {
    elements: Vector<(K, V), S, Ordered, F>,
    _management: PhantomData<fn() -> M>,
}

impl<K, V, S, M, F> PairStorage<K, V, S, M, F>
where
    S: Storage<(K, V)> + Default,
    M: PairManagement<K, V>,
    F: FailurePolicy,
{
    #[must_use]
    pub fn new() -> Self {
        Self::with_storage(S::default())
    }
}

impl<K, V, S, M, F> PairStorage<K, V, S, M, F>
where
    S: Storage<(K, V)>,
    M: PairManagement<K, V>,
    F: FailurePolicy,
{
    /// Creates empty pair storage on top of `storage`.
    pub fn with_storage(storage: S) -> Self {
        Self {
            elements: Vector::with_storage(storage),
            _management: PhantomData,
        }
    }

    /// Position of the pair with `key`, or `None`.
    #[must_use]
    pub fn find(&self, key: &K) -> Option<usize> {
        M::find(self.elements.as_slice(), key)
    }

    /// Adds a pair for `key` unless one exists, and returns its position.
    ///
    /// When `key` is already present the existing pair is kept and `value`
    /// is dropped; callers update values through the returned position.
    ///
    /// # Errors
    ///
    /// Returns the storage error if a new pair does not fit.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<usize> {
        if let Some(position) = self.find(&key) {
            log::trace!("key already present at position {position}, keeping existing value");
            return Ok(position);
        }

        self.elements.try_push((key, value))?;
        let appended = self.elements.len() - 1;
        Ok(M::insert(self.elements.as_mut_slice(), appended))
    }

    /// Removes the pair at `position`.
    ///
    /// # Errors
    ///
    /// Returns `KitVecError::IndexOutOfBounds` if `position >= len()`.
    pub fn try_erase(&mut self, position: usize) -> Result<()> {
        let length = self.elements.len();
        if position >= length {
            return Err(KitVecError::IndexOutOfBounds {
                index: position,
                length,
            });
        }
        M::erase(self.elements.as_mut_slice(), position);
        self.elements.try_pop()
    }

    /// The pair at `position`, or `None` past the end.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&(K, V)> {
        self.elements.get(position)
    }

    /// The pair at `position`, with only the value mutable.
    pub fn get_mut(&mut self, position: usize) -> Option<(&K, &mut V)> {
        self.elements
            .get_mut(position)
            .map(|(key, value)| (&*key, value))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[(K, V)] {
        self.elements.as_slice()
    }

    /// Callers may only change values; keys carry the placement order.
    pub(crate) fn pairs_mut(&mut self) -> &mut [(K, V)] {
        self.elements.as_mut_slice()
    }

    /// Forgets every pair. Capacity is kept.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Replaces the contents with the pairs of `other`, moved one by one.
    pub fn move_from(&mut self, other: &mut Self)
    where
        K: Default,
        V: Default,
    {
        self.elements.move_from(&mut other.elements);
    }

    /// Empty pair storage over storage configured like this one.
    pub(crate) fn empty_like(&self) -> Self {
        Self {
            elements: self.elements.empty_like(),
            _management: PhantomData,
        }
    }
}

impl<K, V, S, M, F> Default for PairStorage<K, V, S, M, F>
where
    S: Storage<(K, V)> + Default,
    M: PairManagement<K, V>,
    F: FailurePolicy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S, M, F> Clone for PairStorage<K, V, S, M, F>
where
    K: Clone,
    V: Clone,
    S: Storage<(K, V)>,
    M: PairManagement<K, V>,
    F: FailurePolicy,
{
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            _management: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.elements.clone_from(&source.elements);
    }
}
