use kitvec::{
    DynamicStorage, GrowthConfig, IgnoreFailure, KitVecError, Management, Ordered, OrderedVec,
    StaticOrderedVec, StaticStorage, StaticUnorderedVec, Storage, Unordered, UnorderedVec, Vector,
    DEFAULT_STATIC_CAPACITY,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

// Static variants must hold everything the tests push
const TEST_MAX_SIZE: usize = 500;

fn contains<S: Storage<i32>, M: Management<i32>>(vec: &Vector<i32, S, M>, value: i32) -> bool {
    vec.iter().any(|item| *item == value)
}

fn filled<S: Storage<i32> + Default, M: Management<i32>>() -> Vector<i32, S, M> {
    let mut vec = Vector::new();
    vec.push(5);
    vec.push(-1);
    vec.push(3);
    vec
}

fn assert_holds_initial<S: Storage<i32>, M: Management<i32>>(vec: &Vector<i32, S, M>) {
    assert_eq!(vec.len(), 3);

    assert!(contains(vec, 5));
    assert!(contains(vec, -1));
    assert!(contains(vec, 3));

    assert!(!contains(vec, i32::MAX));
    assert!(!contains(vec, i32::MIN));
    assert!(!contains(vec, 7));
}

fn check_push_back<S: Storage<i32> + Default, M: Management<i32>>() {
    let vec: Vector<i32, S, M> = filled();
    assert_holds_initial(&vec);
    assert!(vec.len() <= vec.capacity());
}

fn check_pop_back<S: Storage<i32> + Default, M: Management<i32>>() {
    let mut vec: Vector<i32, S, M> = filled();
    assert_holds_initial(&vec);

    vec.pop();
    assert!(!contains(&vec, 3));
    assert_eq!(vec.len(), 2);

    vec.pop();
    assert!(!contains(&vec, -1));
    assert_eq!(vec.len(), 1);

    vec.pop();
    assert!(!contains(&vec, 5));
    assert_eq!(vec.len(), 0);
    assert!(vec.try_pop().is_err());
}

fn check_copying<S: Storage<i32> + Default, M: Management<i32>>() {
    let vec: Vector<i32, S, M> = filled();
    let copy = vec.clone();

    assert_holds_initial(&copy);
    assert_eq!(copy, vec);
}

fn check_moving<S: Storage<i32> + Default, M: Management<i32>>() {
    let mut vec: Vector<i32, S, M> = filled();
    let moved = vec.take();

    assert_holds_initial(&moved);
    assert!(vec.is_empty());
}

fn check_move_assign<S: Storage<i32> + Default, M: Management<i32>>() {
    let mut source: Vector<i32, S, M> = filled();
    let mut target: Vector<i32, S, M> = Vector::new();
    target.push(42);

    target.move_from(&mut source);

    assert_holds_initial(&target);
    assert!(!contains(&target, 42));
    assert!(source.is_empty());
}

fn check_copy_overwrite<S: Storage<i32> + Default, M: Management<i32>>() {
    let mut vec: Vector<i32, S, M> = filled();
    assert_holds_initial(&vec);

    let mut other: Vector<i32, S, M> = Vector::new();
    other.push(7);
    other.push(i32::MAX);
    other.push(i32::MIN);

    vec.clone_from(&other);

    assert!(!contains(&vec, 5));
    assert!(!contains(&vec, -1));
    assert!(!contains(&vec, 3));

    assert!(contains(&vec, i32::MAX));
    assert!(contains(&vec, i32::MIN));
    assert!(contains(&vec, 7));
}

fn check_deep_copy<S: Storage<i32> + Default, M: Management<i32>>() {
    let mut vec: Vector<i32, S, M> = filled();
    let copy = vec.clone();
    let snapshot: Vec<i32> = copy.iter().copied().collect();

    vec.push(7);
    vec.push(i32::MAX);
    vec.push(i32::MIN);
    vec.pop();
    vec[0] = 100;

    assert_holds_initial(&copy);
    assert_eq!(copy.as_slice(), snapshot.as_slice());
}

fn check_clear<S: Storage<i32> + Default, M: Management<i32>>() {
    let mut vec: Vector<i32, S, M> = Vector::new();
    let max = i32::try_from(TEST_MAX_SIZE).unwrap();

    for i in 0..max {
        vec.push(i);
    }
    for i in 0..max {
        assert!(contains(&vec, i));
    }

    let capacity = vec.capacity();
    vec.clear();

    for i in 0..max {
        assert!(!contains(&vec, i));
    }
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), capacity);
}

fn check_random_insertions_and_deletions<S: Storage<i32> + Default, M: Management<i32>>() {
    const NUM_RUNS: u64 = 10;
    let mut vec: Vector<i32, S, M> = Vector::new();

    for run in 0..NUM_RUNS {
        let mut rng = StdRng::seed_from_u64(run);

        // Fill with distinct random values
        for _ in 0..TEST_MAX_SIZE {
            let mut value: i32 = rng.gen();
            while contains(&vec, value) {
                value = rng.gen();
            }
            vec.push(value);
            assert!(vec.len() <= vec.capacity());
        }

        // Copy, shuffle and verify all elements exist
        let mut copy: Vector<i32, S, M> = Vector::new();
        copy.clone_from(&vec);
        vec.as_mut_slice().shuffle(&mut rng);

        for value in &copy {
            assert!(contains(&vec, *value));
        }

        // Remove from random indices
        while !vec.is_empty() {
            let expected_len = vec.len() - 1;
            let index = rng.gen_range(0..vec.len());
            let value = vec[index];
            vec.erase(index);
            assert!(!contains(&vec, value));
            assert_eq!(vec.len(), expected_len);
        }
    }
}

fn check_back<S: Storage<i32> + Default, M: Management<i32>>() {
    let mut vec: Vector<i32, S, M> = filled();
    assert_eq!(*vec.back(), 3);
    *vec.back_mut() = 30;
    assert_eq!(vec.try_back(), Ok(&30));
}

fn check_resize<S: Storage<i32> + Default, M: Management<i32>>() {
    let mut vec: Vector<i32, S, M> = filled();

    vec.resize(5);
    assert_eq!(vec.len(), 5);
    assert_eq!(vec[3], 0);
    assert_eq!(vec[4], 0);

    vec.resize(1);
    assert_eq!(vec.as_slice(), &[5]);

    vec.resize(0);
    assert!(vec.is_empty());
}

fn check_emplace<S: Storage<i32> + Default, M: Management<i32>>() {
    let mut vec: Vector<i32, S, M> = Vector::new();
    vec.emplace_with(|| 6 * 7);
    assert_eq!(vec.try_emplace_with(|| -1), Ok(1));
    assert_eq!(vec.as_slice(), &[42, -1]);
}

macro_rules! vector_suite {
    ($name:ident, $storage:ty, $management:ty) => {
        mod $name {
            use super::*;

            #[test]
            fn test_push_back() {
                check_push_back::<$storage, $management>();
            }

            #[test]
            fn test_pop_back() {
                check_pop_back::<$storage, $management>();
            }

            #[test]
            fn test_copying() {
                check_copying::<$storage, $management>();
            }

            #[test]
            fn test_moving() {
                check_moving::<$storage, $management>();
            }

            #[test]
            fn test_move_assign() {
                check_move_assign::<$storage, $management>();
            }

            #[test]
            fn test_copy_overwrite() {
                check_copy_overwrite::<$storage, $management>();
            }

            #[test]
            fn test_deep_copy() {
                check_deep_copy::<$storage, $management>();
            }

            #[test]
            fn test_clear() {
                check_clear::<$storage, $management>();
            }

            #[test]
            fn test_random_insertions_and_deletions() {
                check_random_insertions_and_deletions::<$storage, $management>();
            }

            #[test]
            fn test_back() {
                check_back::<$storage, $management>();
            }

            #[test]
            fn test_resize() {
                check_resize::<$storage, $management>();
            }

            #[test]
            fn test_emplace() {
                check_emplace::<$storage, $management>();
            }
        }
    };
}

vector_suite!(dynamic_ordered, DynamicStorage<i32>, Ordered);
vector_suite!(dynamic_unordered, DynamicStorage<i32>, Unordered);
vector_suite!(static_ordered, StaticStorage<i32, TEST_MAX_SIZE>, Ordered);
vector_suite!(static_unordered, StaticStorage<i32, TEST_MAX_SIZE>, Unordered);

#[test]
fn test_ordered_erase_preserves_order() {
    let mut vec: OrderedVec<i32> = OrderedVec::new();
    vec.extend([5, -1, 3]);
    vec.erase(0);
    assert_eq!(vec.as_slice(), &[-1, 3]);

    let mut vec: StaticOrderedVec<i32, 8> = StaticOrderedVec::new();
    vec.extend([1, 2, 3, 4, 5]);
    vec.erase(2);
    assert_eq!(vec.as_slice(), &[1, 2, 4, 5]);
}

#[test]
fn test_unordered_erase_preserves_set() {
    let mut vec: UnorderedVec<i32> = UnorderedVec::new();
    vec.extend([5, -1, 3]);
    vec.erase(0);

    let mut remaining: Vec<i32> = vec.iter().copied().collect();
    remaining.sort_unstable();
    assert_eq!(remaining, [-1, 3]);
}

#[test]
fn test_unordered_erase_moves_last_into_hole() {
    let mut vec: StaticUnorderedVec<i32, 8> = StaticUnorderedVec::new();
    vec.extend([1, 2, 3, 4, 5]);
    vec.erase(1);
    assert_eq!(vec.as_slice(), &[1, 5, 3, 4]);
}

#[test]
fn test_static_capacity_exhaustion() {
    let mut vec: StaticOrderedVec<u32, 4> = StaticOrderedVec::new();
    for i in 0..4 {
        vec.push(i);
    }

    assert_eq!(
        vec.try_push(4),
        Err(KitVecError::CapacityExhausted {
            requested: 5,
            capacity: 4
        })
    );
    assert_eq!(vec.as_slice(), &[0, 1, 2, 3]);
    assert_eq!(vec.capacity(), 4);
}

#[test]
#[should_panic(expected = "Capacity exhausted: requested 5 slots, but storage is limited to 4")]
fn test_static_capacity_exhaustion_panics() {
    let mut vec: StaticOrderedVec<u32, 4> = StaticOrderedVec::new();
    for i in 0..5 {
        vec.push(i);
    }
}

#[test]
fn test_static_capacity_exhaustion_ignored() {
    let mut vec: Vector<u32, StaticStorage<u32, 4>, Ordered, IgnoreFailure> = Vector::new();
    for i in 0..10 {
        vec.push(i);
    }
    assert_eq!(vec.as_slice(), &[0, 1, 2, 3]);
}

#[test]
fn test_dynamic_growth_keeps_elements() {
    let mut vec: OrderedVec<String> = OrderedVec::new();
    for i in 0..100 {
        vec.push(format!("element_{i}"));
    }

    assert_eq!(vec.len(), 100);
    assert!(vec.capacity() >= 100);
    for (i, item) in vec.iter().enumerate() {
        assert_eq!(*item, format!("element_{i}"));
    }
}

#[test]
#[should_panic(expected = "Index out of bounds: index 3 is beyond container length 3")]
fn test_index_out_of_bounds() {
    let mut vec: OrderedVec<i32> = OrderedVec::new();
    vec.extend([5, -1, 3]);
    let _ = vec[3];
}

#[test]
fn test_get_returns_none_out_of_bounds() {
    let mut vec: OrderedVec<i32> = OrderedVec::new();
    vec.push(1);
    assert_eq!(vec.get(0), Some(&1));
    assert_eq!(vec.get(1), None);
    assert_eq!(
        vec.try_get(1),
        Err(KitVecError::IndexOutOfBounds {
            index: 1,
            length: 1
        })
    );
}

#[test]
fn test_iteration_order() {
    let mut vec: OrderedVec<i32> = OrderedVec::new();
    vec.extend([3, 1, 2]);

    let collected: Vec<i32> = vec.iter().copied().collect();
    assert_eq!(collected, [3, 1, 2]);

    for item in &mut vec {
        *item *= 2;
    }
    assert_eq!(vec.as_slice(), &[6, 2, 4]);
}

#[test]
fn test_debug_lists_live_elements() {
    let mut vec: StaticOrderedVec<i32, 4> = StaticOrderedVec::new();
    vec.extend([1, 2, 3]);
    vec.pop();
    assert_eq!(format!("{vec:?}"), "[1, 2]");
}

#[test]
fn test_new_vector_is_empty() {
    let vec: OrderedVec<i32> = Vector::new();
    assert_eq!(vec.len(), 0);
    assert!(vec.is_empty());
    assert_eq!(vec.capacity(), 10);
}

#[test]
fn test_push_returns_position() {
    let mut vec: UnorderedVec<i32> = Vector::new();
    assert_eq!(vec.try_push(5), Ok(0));
    assert_eq!(vec.try_push(-1), Ok(1));
    assert_eq!(vec.as_slice(), &[5, -1]);
}

#[test]
fn test_dynamic_vector_grows() {
    let mut vec: OrderedVec<u32> = Vector::new();
    for i in 0..11 {
        vec.push(i);
    }
    assert_eq!(vec.len(), 11);
    assert_eq!(vec.capacity(), 15);
    assert_eq!(vec[10], 10);
}

#[test]
fn test_with_config() {
    let config = GrowthConfig::default().initial_capacity(1).growth_rate(3.0);
    let mut vec: OrderedVec<u8> = Vector::with_config(config).unwrap();
    assert_eq!(vec.capacity(), 1);
    vec.push(1);
    vec.push(2);
    assert_eq!(vec.capacity(), 3);
}

#[test]
fn test_ignored_push_leaves_vector_unchanged() {
    let mut vec: Vector<i32, StaticStorage<i32, 2>, Ordered, IgnoreFailure> = Vector::new();
    vec.push(1);
    vec.push(2);
    vec.push(3);
    assert_eq!(vec.as_slice(), &[1, 2]);
}

#[test]
fn test_ignored_pop_on_empty() {
    let mut vec: Vector<i32, StaticStorage<i32, 2>, Ordered, IgnoreFailure> = Vector::new();
    vec.pop();
    vec.erase(0);
    assert!(vec.is_empty());
}

#[test]
#[should_panic(expected = "Operation on empty container")]
fn test_back_on_empty_panics() {
    let vec: OrderedVec<i32> = Vector::new();
    let _ = vec.back();
}

#[test]
fn test_resize_shrinks_without_releasing() {
    let mut vec: OrderedVec<i32> = Vector::new();
    vec.extend([1, 2, 3, 4]);
    vec.resize(2);
    assert_eq!(vec.as_slice(), &[1, 2]);
    assert_eq!(vec.capacity(), 10);
}

#[test]
fn test_resize_grows_with_defaults() {
    let mut vec: OrderedVec<i32> = Vector::new();
    vec.push(7);
    vec.resize(12);
    assert_eq!(vec.len(), 12);
    assert_eq!(vec[0], 7);
    assert!(vec.iter().skip(1).all(|item| *item == 0));
}

#[test]
fn test_resize_past_static_bound_changes_nothing() {
    let mut vec: StaticOrderedVec<i32, 3> = Vector::new();
    vec.push(7);
    assert_eq!(
        vec.try_resize(4),
        Err(KitVecError::CapacityExhausted {
            requested: 4,
            capacity: 3
        })
    );
    assert_eq!(vec.as_slice(), &[7]);
}

fn configured_vec() -> OrderedVec<i32> {
    let config = GrowthConfig::default().initial_capacity(2).growth_rate(4.0);
    let mut vec: OrderedVec<i32> = Vector::with_config(config).unwrap();
    vec.push(1);
    vec
}

#[test]
fn test_clone_keeps_growth_config() {
    let vec = configured_vec();
    let mut copy = vec.clone();

    assert_eq!(copy.capacity(), 2);
    assert_eq!(copy.as_slice(), &[1]);

    copy.push(2);
    copy.push(3);
    assert_eq!(copy.capacity(), 8);
}

#[test]
fn test_take_keeps_growth_config() {
    let mut vec = configured_vec();
    let mut moved = vec.take();

    assert!(vec.is_empty());
    assert_eq!(moved.capacity(), 2);

    for value in 2..5 {
        moved.push(value);
    }
    assert_eq!(moved.capacity(), 8);
    assert_eq!(moved.as_slice(), &[1, 2, 3, 4]);
}

#[test]
fn test_static_aliases_default_capacity() {
    let mut ordered: StaticOrderedVec<i32> = StaticOrderedVec::new();
    let unordered: StaticUnorderedVec<i32> = StaticUnorderedVec::new();

    assert_eq!(ordered.capacity(), DEFAULT_STATIC_CAPACITY);
    assert_eq!(unordered.capacity(), 16);

    for value in 0..16 {
        ordered.push(value);
    }
    assert!(ordered.try_push(16).is_err());
}
