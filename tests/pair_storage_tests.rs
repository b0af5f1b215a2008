use kitvec::{
    DynamicStorage, GrowthConfig, KitVecError, PairStorage, Sorted, StaticStorage, Unordered,
};

#[test]
fn test_insert_and_find() {
    let mut pairs: PairStorage<i32, i32> = PairStorage::new();
    assert_eq!(pairs.try_insert(1, 5), Ok(0));
    assert_eq!(pairs.try_insert(2, 7), Ok(1));
    assert_eq!(pairs.find(&2), Some(1));
    assert_eq!(pairs.find(&3), None);
}

#[test]
fn test_collision_keeps_existing_value() {
    let mut pairs: PairStorage<i32, i32> = PairStorage::new();
    pairs.try_insert(1, 5).unwrap();
    assert_eq!(pairs.try_insert(1, 99), Ok(0));
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs.get(0), Some(&(1, 5)));
}

#[test]
fn test_sorted_insert_returns_sorted_position() {
    let mut pairs: PairStorage<i32, char, DynamicStorage<(i32, char)>, Sorted> =
        PairStorage::new();
    pairs.try_insert(5, 'a').unwrap();
    pairs.try_insert(9, 'b').unwrap();
    assert_eq!(pairs.try_insert(7, 'c'), Ok(1));
    assert_eq!(pairs.as_slice(), &[(5, 'a'), (7, 'c'), (9, 'b')]);
}

#[test]
fn test_unordered_erase() {
    let mut pairs: PairStorage<i32, char, DynamicStorage<(i32, char)>, Unordered> =
        PairStorage::new();
    pairs.try_insert(1, 'a').unwrap();
    pairs.try_insert(2, 'b').unwrap();
    pairs.try_insert(3, 'c').unwrap();
    pairs.try_erase(0).unwrap();
    assert_eq!(pairs.as_slice(), &[(3, 'c'), (2, 'b')]);
}

#[test]
fn test_erase_out_of_bounds() {
    let mut pairs: PairStorage<i32, i32> = PairStorage::new();
    assert_eq!(
        pairs.try_erase(0),
        Err(KitVecError::IndexOutOfBounds {
            index: 0,
            length: 0
        })
    );
}

#[test]
fn test_static_pair_storage_full() {
    let mut pairs: PairStorage<u8, u8, StaticStorage<(u8, u8), 1>> = PairStorage::new();
    pairs.try_insert(1, 1).unwrap();
    assert!(pairs.try_insert(1, 2).is_ok());
    assert_eq!(
        pairs.try_insert(2, 2),
        Err(KitVecError::CapacityExhausted {
            requested: 2,
            capacity: 1
        })
    );
}

#[test]
fn test_clone_keeps_storage_config() {
    let config = GrowthConfig::default().initial_capacity(2).growth_rate(2.0);
    let mut pairs: PairStorage<i32, i32> =
        PairStorage::with_storage(DynamicStorage::with_config(config).unwrap());
    pairs.try_insert(1, 1).unwrap();

    let mut copy = pairs.clone();
    assert_eq!(copy.capacity(), 2);
    assert_eq!(copy.as_slice(), pairs.as_slice());

    copy.try_insert(2, 2).unwrap();
    copy.try_insert(3, 3).unwrap();
    assert_eq!(copy.capacity(), 4);
    assert_eq!(pairs.len(), 1);
}

#[test]
fn test_get_mut_changes_value_only() {
    let mut pairs: PairStorage<i32, i32> = PairStorage::new();
    pairs.try_insert(4, 40).unwrap();
    if let Some((key, value)) = pairs.get_mut(0) {
        assert_eq!(*key, 4);
        *value = 41;
    }
    assert_eq!(pairs.get(0), Some(&(4, 41)));
    assert!(pairs.get_mut(1).is_none());
}
