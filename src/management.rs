//! Management policies: where an appended element ends up and how an
//! element is removed.
//!
//! Policies are stateless zero-sized types. They work on the live range of a
//! container as a slice, with positions expressed as indices into it. The
//! container appends first and then asks the policy to place the new element;
//! on erase the policy moves the doomed element into the last slot so the
//! container can drop it with a pop.

/// Placement and removal rules for a vector of `T`.
pub trait Management<T> {
    /// Places the element that was just written at `appended`, the last index
    /// of `items`, and returns its final position.
    fn insert(items: &mut [T], appended: usize) -> usize;

    /// Moves the element at `position` to the end of `items`, rearranging the
    /// rest according to the policy.
    fn erase(items: &mut [T], position: usize);
}

/// Placement, removal and lookup rules for a vector of key-value pairs.
pub trait PairManagement<K, V>: Management<(K, V)> {
    /// Returns the position of the pair with `key`, or `None`.
    fn find(items: &[(K, V)], key: &K) -> Option<usize>;
}

/// Keeps insertion order.
///
/// O(1) insert, O(n) erase, O(n) find.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ordered;

/// Keeps no order; erase swaps with the last element.
///
/// O(1) insert, O(1) erase, O(n) find.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unordered;

/// Keeps pairs sorted ascending by key.
///
/// O(n) insert, O(n) erase, O(log n) find.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sorted;

fn debug_check_appended<T>(items: &[T], appended: usize) {
    debug_assert_eq!(
        appended + 1,
        items.len(),
        "element not appended at the end of the range"
    );
}

impl<T> Management<T> for Ordered {
    fn insert(items: &mut [T], appended: usize) -> usize {
        debug_check_appended(items, appended);
        appended
    }

    #[allow(clippy::indexing_slicing)]
    fn erase(items: &mut [T], position: usize) {
        items[position..].rotate_left(1);
    }
}

impl<K: PartialEq, V> PairManagement<K, V> for Ordered {
    fn find(items: &[(K, V)], key: &K) -> Option<usize> {
        items.iter().position(|(candidate, _)| candidate == key)
    }
}

impl<T> Management<T> for Unordered {
    fn insert(items: &mut [T], appended: usize) -> usize {
        debug_check_appended(items, appended);
        appended
    }

    fn erase(items: &mut [T], position: usize) {
        let last = items.len() - 1;
        if position != last {
            items.swap(position, last);
        }
    }
}

impl<K: PartialEq, V> PairManagement<K, V> for Unordered {
    fn find(items: &[(K, V)], key: &K) -> Option<usize> {
        items.iter().position(|(candidate, _)| candidate == key)
    }
}

impl<K: Ord, V> Management<(K, V)> for Sorted {
    #[allow(clippy::indexing_slicing)]
    fn insert(items: &mut [(K, V)], appended: usize) -> usize {
        debug_check_appended(items, appended);
        let (placed, new) = items.split_at(appended);
        let new_key = &new[0].0;
        let position = placed.partition_point(|(key, _)| key < new_key);
        items[position..].rotate_right(1);
        position
    }

    #[allow(clippy::indexing_slicing)]
    fn erase(items: &mut [(K, V)], position: usize) {
        items[position..].rotate_left(1);
    }
}

impl<K: Ord, V> PairManagement<K, V> for Sorted {
    fn find(items: &[(K, V)], key: &K) -> Option<usize> {
        let position = items.partition_point(|(candidate, _)| candidate < key);
        match items.get(position) {
            Some((candidate, _)) if candidate == key => Some(position),
            _ => None,
        }
    }
}
