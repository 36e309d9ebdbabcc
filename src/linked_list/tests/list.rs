extern crate std;

use std::format;
use std::panic::{self, AssertUnwindSafe};
use std::vec;

use super::{list_of, values};
use crate::linked_list::{alloc::FixedPool, error::InsertError, list::List};

#[test]
fn test_list_append_and_insert_ends() {
    let mut list = List::<u32>::new();
    assert!(list.is_empty());
    assert_eq!(list.count(), 0);

    list.append(&2).unwrap();
    list.append(&3).unwrap();
    list.insert(&1).unwrap();

    assert_eq!(list.count(), 3);
    assert!(!list.is_empty());
    assert_eq!(values(&list), vec![1, 2, 3]);
    assert_eq!(list.first(), Some(&1));
    assert_eq!(list.last(), Some(&3));

    list.clear();
}

#[test]
fn test_list_round_trip_through_pop() {
    let mut list = List::<u64>::new();
    list.append(&42).unwrap();
    assert_eq!(list.pop_first(), Some(42));
    assert!(list.is_empty());

    list.insert(&7).unwrap();
    assert_eq!(list.pop_last(), Some(7));
    assert!(list.is_empty());
}

#[test]
fn test_list_accessors_on_empty() {
    let mut list = List::<u32>::new();
    assert_eq!(list.first(), None);
    assert_eq!(list.last(), None);
    assert_eq!(list.pop_first(), None);
    assert_eq!(list.pop_last(), None);
    assert_eq!(list.get_at(0), None);
    assert_eq!(list.remove_at(0), None);
    assert!(!list.remove_one(&1));
    assert_eq!(list.remove_all(&1), 0);
}

#[test]
fn test_list_get_at_scans_both_halves() {
    let mut list = list_of(&[10, 11, 12, 13, 14, 15, 16]);

    for (i, expected) in (10..17).enumerate() {
        assert_eq!(list.get_at(i), Some(&expected));
    }
    assert_eq!(list.get_at(7), None);
    assert_eq!(list.get_at(usize::MAX), None);

    *list.get_at_mut(5).unwrap() = 50;
    assert_eq!(list.get_at(5), Some(&50));

    list.clear();
}

#[test]
fn test_list_remove_at() {
    let mut list = list_of(&[0, 1, 2, 3, 4]);

    assert_eq!(list.remove_at(2), Some(2));
    assert_eq!(list.remove_at(3), Some(4));
    assert_eq!(list.remove_at(0), Some(0));
    assert_eq!(list.remove_at(2), None);
    assert_eq!(values(&list), vec![1, 3]);
    assert_eq!(list.count(), 2);

    list.clear();
}

#[test]
fn test_list_peek_and_mutate_ends() {
    let mut list = list_of(&[1, 2, 3]);

    *list.first_mut().unwrap() += 10;
    *list.last_mut().unwrap() += 20;
    assert_eq!(values(&list), vec![11, 2, 23]);

    list.clear();
}

#[test]
fn test_list_remove_one_takes_first_match_only() {
    let mut list = list_of(&[1, 2, 3, 2, 4, 2]);

    assert!(list.remove_one(&2));
    assert_eq!(values(&list), vec![1, 3, 2, 4, 2]);
    assert!(!list.remove_one(&9));
    assert_eq!(list.count(), 5);

    list.clear();
}

#[test]
fn test_list_remove_all_keeps_order() {
    let mut list = list_of(&[2, 1, 2, 3, 2, 4, 2]);

    assert_eq!(list.remove_all(&2), 4);
    assert_eq!(values(&list), vec![1, 3, 4]);
    assert_eq!(list.count(), 3);
    assert_eq!(list.remove_all(&2), 0);

    list.clear();
}

#[test]
fn test_list_retain() {
    let mut list = list_of(&[1, 2, 3, 4, 5, 6]);
    list.retain(|v| v % 3 != 0);
    assert_eq!(values(&list), vec![1, 2, 4, 5]);
    list.clear();
}

#[test]
fn test_list_clear_then_reuse() {
    let mut list = list_of(&[1, 2, 3]);
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list.iter().count(), 0);

    list.append(&4).unwrap();
    assert_eq!(values(&list), vec![4]);
    list.clear();
}

#[test]
fn test_list_iterators() {
    let mut list = list_of(&[1, 2, 3, 4]);

    assert_eq!(list.iter().len(), 4);
    assert_eq!(list.iter().rev().copied().collect::<std::vec::Vec<_>>(), vec![4, 3, 2, 1]);

    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    for value in &mut list {
        *value *= 10;
    }
    assert_eq!(values(&list), vec![10, 20, 30, 40]);

    let mut sum = 0;
    for value in &list {
        sum += value;
    }
    assert_eq!(sum, 100);

    list.clear();
}

#[test]
fn test_list_into_iter_drains() {
    let list = list_of(&[1, 2, 3, 4]);
    let mut iter = list.into_iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.next_back(), Some(4));
    // Dropping the iterator releases the rest.
    drop(iter);

    let list = list_of(&[5, 6]);
    assert_eq!(list.into_iter().collect::<std::vec::Vec<_>>(), vec![5, 6]);
}

#[test]
fn test_list_count_matches_traversal() {
    let mut list = List::<u32>::new();
    for i in 0..20 {
        list.append(&i).unwrap();
    }
    for i in (0..20).step_by(3) {
        assert!(list.remove_one(&i));
    }
    list.pop_first();
    list.pop_last();

    assert_eq!(list.count(), list.iter().count());
    assert_eq!(list.count(), 20 - 7 - 2);

    list.clear();
}

#[test]
fn test_list_debug_format() {
    let mut list = list_of(&[1, 2, 3]);
    assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    list.clear();
}

#[test]
fn test_list_exhausted_allocator_leaves_list_unchanged() {
    let mut list: List<u32, FixedPool<u32>> = List::with_allocator(FixedPool::with_capacity(2));

    assert_eq!(list.append(&1), Ok(()));
    assert_eq!(list.insert(&0), Ok(()));
    assert_eq!(list.append(&2), Err(InsertError));
    assert_eq!(list.insert(&2), Err(InsertError));
    assert_eq!(values(&list), vec![0, 1]);
    assert_eq!(list.count(), 2);

    assert_eq!(list.pop_first(), Some(0));
    assert_eq!(list.append(&2), Ok(()));
    assert_eq!(values(&list), vec![1, 2]);

    list.clear();
    assert_eq!(list.allocator().available(), 2);
}

#[test]
fn test_list_iterators_cross_threads() {
    fn assert_send_sync<X: Send + Sync>() {}
    assert_send_sync::<crate::linked_list::iter::Iter<'static, u32>>();
    assert_send_sync::<crate::linked_list::iter::IterMut<'static, u32>>();

    let mut list = list_of(&[1, 2, 3]);
    let iter = list.iter();
    let sum = std::thread::scope(|s| s.spawn(move || iter.sum::<u32>()).join().unwrap());
    assert_eq!(sum, 6);

    std::thread::scope(|s| {
        let iter = list.iter_mut();
        s.spawn(move || iter.for_each(|v| *v += 1));
    });
    assert_eq!(values(&list), vec![2, 3, 4]);

    list.clear();
}

#[test]
fn test_list_dropped_while_unwinding_releases_nodes() {
    let pool = crate::linked_list::alloc::SharedPool::<u32>::with_capacity(4);

    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        let mut list: List<u32, &_> = List::with_allocator(&pool);
        list.append(&1).unwrap();
        list.append(&2).unwrap();
        assert_eq!(list.count(), 0, "failure with the list still populated");
    }));

    assert!(result.is_err());
    assert_eq!(pool.in_use(), 0);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "list dropped with 2 nodes still linked")]
fn test_list_drop_while_non_empty_is_flagged() {
    let _list = list_of(&[1, 2]);
}

#[test]
#[cfg(not(debug_assertions))]
fn test_list_drop_while_non_empty_releases_nodes() {
    let pool = crate::linked_list::alloc::SharedPool::<u32>::with_capacity(4);
    {
        let mut list: List<u32, &_> = List::with_allocator(&pool);
        list.append(&1).unwrap();
        list.append(&2).unwrap();
    }
    assert_eq!(pool.in_use(), 0);
}
