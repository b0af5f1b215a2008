#![no_std]

//! `kitvec`: vectors and vector-backed maps assembled from policies.
//!
//! A container is built from independent, statically dispatched parts:
//!
//! - a **storage** policy owns the slots and decides whether capacity can grow
//!   ([`DynamicStorage`], [`StaticStorage`])
//! - a **management** policy places appended elements and shuffles on erase
//!   ([`Ordered`], [`Unordered`], and for maps [`Sorted`])
//! - a **failure** policy decides what the non-`try` operations do when they
//!   cannot proceed ([`PanicOnFailure`], [`IgnoreFailure`])
//!
//! Layers stack as storage, then [`Vector`], then [`PairStorage`], then [`Map`].
//! Policies are type parameters, so every combination is monomorphized and
//! nothing goes through a vtable.
//!
//! This crate is `no_std` and needs only `alloc` (for [`DynamicStorage`]).
//!
//! # Complexity
//!
//! | policy      | insert | erase | find     |
//! |-------------|--------|-------|----------|
//! | `Ordered`   | O(1)   | O(n)  | O(n)     |
//! | `Unordered` | O(1)   | O(1)  | O(n)     |
//! | `Sorted`    | O(n)   | O(n)  | O(log n) |
//!
//! # Vectors
//!
//! ```
//! # use kitvec::{OrderedVec, UnorderedVec};
//! let mut ordered: OrderedVec<i32> = OrderedVec::new();
//! ordered.extend([5, -1, 3]);
//! ordered.erase(0);
//! assert_eq!(ordered.as_slice(), &[-1, 3]);
//!
//! let mut unordered: UnorderedVec<i32> = UnorderedVec::new();
//! unordered.extend([5, -1, 3]);
//! unordered.erase(0);
//! assert_eq!(unordered.as_slice(), &[3, -1]);
//! ```
//!
//! # Fixed capacity
//!
//! Static storage never allocates. Going past its bound is a failure, reported
//! either as an error or through the failure policy:
//!
//! ```
//! # use kitvec::{KitVecError, StaticOrderedVec};
//! let mut vec: StaticOrderedVec<u8, 2> = StaticOrderedVec::new();
//! vec.push(1);
//! vec.push(2);
//! assert_eq!(
//!     vec.try_push(3),
//!     Err(KitVecError::CapacityExhausted { requested: 3, capacity: 2 })
//! );
//! assert_eq!(vec.as_slice(), &[1, 2]);
//! ```
//!
//! ```should_panic
//! # use kitvec::StaticOrderedVec;
//! let mut vec: StaticOrderedVec<u8, 1> = StaticOrderedVec::new();
//! vec.push(1);
//! vec.push(2); // panics: PanicOnFailure is the default policy
//! ```
//!
//! # Maps
//!
//! `get_or_insert_default` is the find-or-insert entry point. Plain `insert`
//! never overwrites: when the key is already present, the new value is
//! dropped and the stored one is returned for in-place updates.
//!
//! ```
//! # use kitvec::VecMap;
//! let mut map: VecMap<&str, u32> = VecMap::new();
//! *map.get_or_insert_default("apples") += 3;
//! *map.get_or_insert_default("apples") += 2;
//! assert_eq!(map.get(&"apples"), Some(&5));
//!
//! assert_eq!(*map.insert("apples", 100), 5);
//! ```
//!
//! # Copy and move
//!
//! `Clone`, [`Vector::take`] and [`Vector::move_from`] rebuild the target by
//! pushing each element instead of taking over the source buffer, so static
//! and dynamic storage behave the same way.

extern crate alloc;

mod config;
mod error;
mod failure;
mod iter;
mod management;
mod map;
mod pair_storage;
mod storage;
mod vector;

// Re-export public types and traits
pub use config::GrowthConfig;
pub use error::{KitVecError, Result};
pub use failure::{FailurePolicy, IgnoreFailure, PanicOnFailure};
pub use iter::{Keys, MapIter, MapIterMut, Values};
pub use management::{Management, Ordered, PairManagement, Sorted, Unordered};
pub use map::{
    Map, SortedVecMap, StaticSortedVecMap, StaticUnorderedVecMap, StaticVecMap, UnorderedVecMap,
    VecMap,
};
pub use pair_storage::PairStorage;
pub use storage::{DynamicStorage, StaticStorage, Storage};
pub use vector::{
    OrderedVec, StaticOrderedVec, StaticUnorderedVec, UnorderedVec, Vector, DEFAULT_STATIC_CAPACITY,
};
