extern crate reflist;
#[macro_use]
extern crate quickcheck;

use reflist::algorithms::{binary_search, introsort};
use reflist::{OrdComparer, RefList};

use std::fmt::Debug;

fn sorted_vec<T: Ord>(mut v: Vec<T>) -> Vec<T> {
    v.sort();
    v
}

// A value type heavy enough that by-reference comparison matters; ordering
// is decided by `key` alone, the payload just adds bulk.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Big {
    key: u64,
    payload: [u64; 15],
}

impl Big {
    fn new(key: u64) -> Big {
        Big {
            key,
            payload: [key.wrapping_mul(0x9e37_79b9); 15],
        }
    }
}

#[test]
fn qc_introsort() {
    fn prop(v: Vec<i32>) -> bool {
        let mut data = v.clone();
        introsort(&mut data, &OrdComparer);
        // equality against a std-sorted copy checks both the ordering and
        // that the result is a permutation of the input
        data == sorted_vec(v)
    }

    quickcheck::quickcheck(prop as fn(_) -> bool);
}

#[test]
fn qc_introsort_big_values() {
    fn prop(keys: Vec<u64>) -> bool {
        let v: Vec<Big> = keys.iter().map(|&k| Big::new(k)).collect();
        let mut data = v.clone();
        introsort(&mut data, &OrdComparer);
        data == sorted_vec(v)
    }

    quickcheck::quickcheck(prop as fn(_) -> bool);
}

quickcheck! {
    fn qc_binary_search_found(data: Vec<u8>, find: u8) -> () {
        let data = sorted_vec(data);
        assert_binary_search_ok(&data, data.binary_search(&find),
            binary_search(&data, &find, &OrdComparer))
    }

    fn qc_binary_search_insertion_point(data: Vec<u8>, find: u8) -> bool {
        let mut data = sorted_vec(data);
        data.retain(|x| *x != find);
        // `find` is now absent, so both searches must agree on the
        // insertion point exactly
        binary_search(&data, &find, &OrdComparer) == data.binary_search(&find)
    }

    fn qc_list_sort_matches_std(v: Vec<i64>) -> bool {
        let mut list: RefList<i64> = v.clone().into();
        list.sort_by_comparer(&OrdComparer).unwrap();
        list.as_slice() == &sorted_vec(v)[..]
    }

    fn qc_capacity_invariant(values: Vec<u16>) -> bool {
        let mut list = RefList::new();
        for (i, v) in values.into_iter().enumerate() {
            let cap_before = list.capacity();
            let had_room = list.len() < cap_before;
            if i % 3 == 0 {
                list.insert(0, v).unwrap();
            } else {
                list.push(v);
            }
            if list.capacity() < list.len() {
                return false;
            }
            // capacity moves only when the buffer was full
            if had_room && list.capacity() != cap_before {
                return false;
            }
        }
        true
    }

    fn qc_get_range_round_trip(v: Vec<i32>) -> bool {
        let list: RefList<i32> = v.into();
        let copy = list.get_range(0, list.len()).unwrap();
        copy == list
    }

    fn qc_remove_all_matches_retain(v: Vec<i32>) -> bool {
        let mut list: RefList<i32> = v.clone().into();
        let removed = list.remove_all(|x| x % 3 == 0);
        let mut expected = v;
        let before = expected.len();
        expected.retain(|x| x % 3 != 0);
        removed == before - expected.len() && list.as_slice() == &expected[..]
    }

    fn qc_sorted_list_is_searchable(v: Vec<i32>, find: i32) -> bool {
        let mut list: RefList<i32> = v.into();
        list.sort_by_comparer(&OrdComparer).unwrap();
        match list.binary_search_by_comparer(&find, &OrdComparer).unwrap() {
            Ok(i) => list[i] == find,
            Err(i) => {
                let fits_left = i == 0 || list[i - 1] < find;
                let fits_right = i == list.len() || list[i] > find;
                fits_left && fits_right
            }
        }
    }
}

type R = Result<usize, usize>;
fn assert_binary_search_ok<T>(data: &[T], expected: R, result: R)
where
    T: Debug + PartialEq,
{
    if let (Ok(i), Ok(j)) = (expected, result) {
        assert!(i == j || data[i] == data[j]);
    } else if expected != result {
        panic!("expected: {:?}, got: {:?}", expected, result);
    }
}
