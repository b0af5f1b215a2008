use core::fmt;

use crate::error::Result;
use crate::failure::{report, unwrap_or_fail, FailurePolicy, PanicOnFailure};
use crate::iter::{Keys, MapIter, MapIterMut, Values};
use crate::management::{Ordered, PairManagement, Sorted, Unordered};
use crate::pair_storage::PairStorage;
use crate::storage::{DynamicStorage, StaticStorage, Storage};
use crate::vector::DEFAULT_STATIC_CAPACITY;

/// Growable map keeping insertion order.
pub type VecMap<K, V> = Map<K, V, DynamicStorage<(K, V)>, Ordered>;

/// Growable map with O(1) erase.
pub type UnorderedVecMap<K, V> = Map<K, V, DynamicStorage<(K, V)>, Unordered>;

/// Growable map sorted by key with binary-search lookup.
pub type SortedVecMap<K, V> = Map<K, V, DynamicStorage<(K, V)>, Sorted>;

/// Fixed-capacity map keeping insertion order.
pub type StaticVecMap<K, V, const N: usize = DEFAULT_STATIC_CAPACITY> =
    Map<K, V, StaticStorage<(K, V), N>, Ordered>;

/// Fixed-capacity map with O(1) erase.
pub type StaticUnorderedVecMap<K, V, const N: usize = DEFAULT_STATIC_CAPACITY> =
    Map<K, V, StaticStorage<(K, V), N>, Unordered>;

/// Fixed-capacity map sorted by key.
pub type StaticSortedVecMap<K, V, const N: usize = DEFAULT_STATIC_CAPACITY> =
    Map<K, V, StaticStorage<(K, V), N>, Sorted>;

/// An associative container over a [`PairStorage`].
///
/// Lookups return positions (`usize`) into the pair sequence; `None` plays the
/// role of the end sentinel. A position is only meaningful until the next
/// mutation of the map.
///
/// ```
/// # use kitvec::SortedVecMap;
/// let mut map: SortedVecMap<i32, &str> = SortedVecMap::new();
/// *map.get_or_insert_default(7) = "seven";
/// *map.get_or_insert_default(2) = "two";
///
/// let keys: Vec<_> = map.keys().copied().collect();
/// assert_eq!(keys, [2, 7]);
///
/// let position = map.find(&7).unwrap();
/// map.erase(position);
/// assert!(map.find(&7).is_none());
/// ```
pub struct Map<K, V, S = DynamicStorage<(K, V)>, M = Ordered, F = PanicOnFailure> {
    pairs: PairStorage<K, V, S, M, F>,
}

impl<K, V, S, M, F> Map<K, V, S, M, F>
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

impl<K, V, S, M, F> Map<K, V, S, M, F>
where
    S: Storage<(K, V)>,
    M: PairManagement<K, V>,
    F: FailurePolicy,
{
    /// Creates an empty map on top of `storage`.
    pub fn with_storage(storage: S) -> Self {
        Self {
            pairs: PairStorage::with_storage(storage),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.pairs.capacity()
    }

    /// Position of the pair with `key`, or `None`.
    #[must_use]
    pub fn find(&self, key: &K) -> Option<usize> {
        self.pairs.find(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        let position = self.find(key)?;
        self.pairs.get(position).map(|(_key, value)| value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let position = self.find(key)?;
        self.pairs.get_mut(position).map(|(_key, value)| value)
    }

    /// The pair at `position`.
    #[must_use]
    pub fn entry_at(&self, position: usize) -> Option<(&K, &V)> {
        self.pairs.get(position).map(|(key, value)| (key, value))
    }

    /// Returns the value for `key`, inserting `V::default()` first if absent.
    ///
    /// # Errors
    ///
    /// Returns the storage error if a new pair does not fit.
    pub fn try_get_or_insert_default(&mut self, key: K) -> Result<&mut V>
    where
        V: Default,
    {
        let position = match self.find(&key) {
            Some(position) => position,
            None => self.pairs.try_insert(key, V::default())?,
        };
        Ok(self.value_at(position))
    }

    /// Returns the value for `key`, inserting `V::default()` first if absent.
    ///
    /// # Panics
    ///
    /// Panics if a new pair does not fit, after reporting to the failure policy.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        unwrap_or_fail::<F, _>(self.try_get_or_insert_default(key))
    }

    /// Adds `(key, value)` unless `key` is present, and returns the position.
    ///
    /// An existing pair is never overwritten: on a key collision `value` is
    /// dropped and the old value stays.
    ///
    /// # Errors
    ///
    /// Returns the storage error if a new pair does not fit.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<usize> {
        self.pairs.try_insert(key, value)
    }

    /// Like [`try_insert`](Map::try_insert), returning the stored value.
    ///
    /// # Panics
    ///
    /// Panics if a new pair does not fit, after reporting to the failure policy.
    pub fn insert(&mut self, key: K, value: V) -> &mut V {
        let position = unwrap_or_fail::<F, _>(self.pairs.try_insert(key, value));
        self.value_at(position)
    }

    /// Removes the pair at `position`.
    ///
    /// # Errors
    ///
    /// Returns `KitVecError::IndexOutOfBounds` if `position >= len()`.
    pub fn try_erase(&mut self, position: usize) -> Result<()> {
        self.pairs.try_erase(position)
    }

    /// Removes the pair at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position >= len()` under `PanicOnFailure`.
    pub fn erase(&mut self, position: usize) {
        report::<F, _>(self.try_erase(position));
    }

    /// Removes the pair with `key`. Returns `false` if there was none.
    ///
    /// The key is looked up first, so a missing key is never a failure.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.find(key) {
            Some(position) => {
                self.erase(position);
                true
            }
            None => false,
        }
    }

    /// Forgets every pair. Capacity is kept.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Iterates over the pairs in storage order (ascending keys for sorted maps).
    pub fn iter(&self) -> MapIter<'_, K, V> {
        MapIter::new(self.pairs.as_slice())
    }

    /// Iterates over the pairs with mutable values.
    pub fn iter_mut(&mut self) -> MapIterMut<'_, K, V> {
        MapIterMut::new(self.pairs.pairs_mut())
    }

    /// Iterates over the keys in storage order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Iterates over the values in storage order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Replaces the contents with the pairs of `other`, moved one by one.
    ///
    /// `other` is left empty.
    pub fn move_from(&mut self, other: &mut Self)
    where
        K: Default,
        V: Default,
    {
        self.pairs.move_from(&mut other.pairs);
    }

    /// Moves every pair into a new map and leaves `self` empty.
    ///
    /// The new map gets storage with the same settings as `self`.
    #[must_use]
    pub fn take(&mut self) -> Self
    where
        K: Default,
        V: Default,
    {
        let mut moved = Self {
            pairs: self.pairs.empty_like(),
        };
        moved.move_from(self);
        moved
    }

    #[allow(clippy::expect_used)]
    fn value_at(&mut self, position: usize) -> &mut V {
        self.pairs
            .get_mut(position)
            .map(|(_key, value)| value)
            .expect("Position returned by pair storage is live")
    }
}

impl<K, V, S, M, F> Default for Map<K, V, S, M, F>
where
    S: Storage<(K, V)> + Default,
    M: PairManagement<K, V>,
    F: FailurePolicy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S, M, F> Clone for Map<K, V, S, M, F>
where
    K: Clone,
    V: Clone,
    S: Storage<(K, V)>,
    M: PairManagement<K, V>,
    F: FailurePolicy,
{
    fn clone(&self) -> Self {
        Self {
            pairs: self.pairs.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.pairs.clone_from(&source.pairs);
    }
}

/// Two maps are equal when they hold the same pairs, in any order.
impl<K, V, S, M, F> PartialEq for Map<K, V, S, M, F>
where
    V: PartialEq,
    S: Storage<(K, V)>,
    M: PairManagement<K, V>,
    F: FailurePolicy,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V, S, M, F> fmt::Debug for Map<K, V, S, M, F>
where
    K: fmt::Debug,
    V: fmt::Debug,
    S: Storage<(K, V)>,
    M: PairManagement<K, V>,
    F: FailurePolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Inserts every pair; keys already present keep their current value.
impl<K, V, S, M, F> Extend<(K, V)> for Map<K, V, S, M, F>
where
    S: Storage<(K, V)>,
    M: PairManagement<K, V>,
    F: FailurePolicy,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            report::<F, _>(self.try_insert(key, value));
        }
    }
}

impl<'a, K, V, S, M, F> IntoIterator for &'a Map<K, V, S, M, F>
where
    S: Storage<(K, V)>,
    M: PairManagement<K, V>,
    F: FailurePolicy,
{
    type Item = (&'a K, &'a V);
    type IntoIter = MapIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
