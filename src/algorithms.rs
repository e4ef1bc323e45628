//! Sort and search over slices, with every ordering decision routed through
//! a [`RefComparer`].
//!
//! The sort is introspective: quicksort with a median-of-three pivot,
//! insertion sort for small partitions, and heapsort once the recursion
//! depth budget is spent, which bounds the worst case at `O(n log n)`.
//! It is not a stable sort.

use std::cmp::Ordering;

use crate::comparer::RefComparer;

// partitions at or below this size are insertion sorted
const SMALL_SORT_THRESH: usize = 16;

/// Sort `v` ascending according to `cmp`.
///
/// The comparer must implement a total order and must not panic; a panic
/// mid-partition leaves `v` in an unspecified permutation of its elements.
pub fn introsort<T, C>(v: &mut [T], cmp: &C)
where
    C: RefComparer<T>,
{
    if v.len() < 2 {
        return;
    }
    // 2 * floor(log2(len)) + 2 recursion levels before heapsort takes over
    let depth_limit = 2 * v.len().ilog2() as usize + 2;
    intro_sort(v, 0, v.len() - 1, depth_limit, cmp);
}

// Bounds are inclusive. Recurses into the right partition and loops on the
// left one.
fn intro_sort<T, C>(v: &mut [T], lo: usize, mut hi: usize, mut depth_limit: usize, cmp: &C)
where
    C: RefComparer<T>,
{
    while hi > lo {
        let size = hi - lo + 1;
        if size <= SMALL_SORT_THRESH {
            match size {
                1 => return,
                2 => {
                    swap_if_greater(v, cmp, lo, hi);
                    return;
                }
                3 => {
                    swap_if_greater(v, cmp, lo, hi - 1);
                    swap_if_greater(v, cmp, lo, hi);
                    swap_if_greater(v, cmp, hi - 1, hi);
                    return;
                }
                _ => {
                    insertion_sort(v, lo, hi, cmp);
                    return;
                }
            }
        }

        if depth_limit == 0 {
            heap_sort(v, lo, hi, cmp);
            return;
        }
        depth_limit -= 1;

        let p = pick_pivot_and_partition(v, lo, hi, cmp);
        intro_sort(v, p + 1, hi, depth_limit, cmp);
        hi = p - 1;
    }
}

/// Median-of-three pivot selection followed by a Hoare partition.
///
/// Orders `lo`, mid and `hi` pairwise, parks the median at `hi - 1`, then
/// scans inward with pre-increment / pre-decrement. Returns the pivot's
/// final position; everything left of it compares `<=` pivot, everything
/// right of it `>=`.
fn pick_pivot_and_partition<T, C>(v: &mut [T], lo: usize, hi: usize, cmp: &C) -> usize
where
    C: RefComparer<T>,
{
    let mid = lo + (hi - lo) / 2;

    swap_if_greater(v, cmp, lo, mid);
    swap_if_greater(v, cmp, lo, hi);
    swap_if_greater(v, cmp, mid, hi);

    v.swap(mid, hi - 1);
    let pivot = hi - 1;

    let mut left = lo;
    let mut right = hi - 1;
    while left < right {
        // the pivot element itself stops the left scan; v[lo] <= pivot
        // stops the right scan
        loop {
            left += 1;
            if cmp.compare(&v[left], &v[pivot]) != Ordering::Less {
                break;
            }
        }
        loop {
            right -= 1;
            if cmp.compare(&v[pivot], &v[right]) != Ordering::Less {
                break;
            }
        }
        if left >= right {
            break;
        }
        v.swap(left, right);
    }

    v.swap(left, hi - 1);
    left
}

#[inline]
fn swap_if_greater<T, C>(v: &mut [T], cmp: &C, a: usize, b: usize)
where
    C: RefComparer<T>,
{
    if a != b && cmp.compare(&v[a], &v[b]) == Ordering::Greater {
        v.swap(a, b);
    }
}

// Swap-based insertion sort over the inclusive range [lo, hi]; elements are
// never read out of the slice, so `T: Clone` is not required.
fn insertion_sort<T, C>(v: &mut [T], lo: usize, hi: usize, cmp: &C)
where
    C: RefComparer<T>,
{
    for i in lo + 1..=hi {
        let mut j = i;
        while j > lo && cmp.compare(&v[j], &v[j - 1]) == Ordering::Less {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}

// Heapsort over the inclusive range [lo, hi]: build a max-heap by sifting
// down from n/2 to 1, then repeatedly move the max to the back and re-sift.
fn heap_sort<T, C>(v: &mut [T], lo: usize, hi: usize, cmp: &C)
where
    C: RefComparer<T>,
{
    let n = hi - lo + 1;
    for i in (1..=n / 2).rev() {
        down_heap(v, i, n, lo, cmp);
    }
    for i in (2..=n).rev() {
        v.swap(lo, lo + i - 1);
        down_heap(v, 1, i - 1, lo, cmp);
    }
}

// Sift down the 1-based heap node `i` within a heap of `n` elements rooted
// at `lo`. For node k the children are 2k and 2k + 1.
fn down_heap<T, C>(v: &mut [T], mut i: usize, n: usize, lo: usize, cmp: &C)
where
    C: RefComparer<T>,
{
    while 2 * i <= n {
        let mut child = 2 * i;
        if child < n && cmp.compare(&v[lo + child - 1], &v[lo + child]) == Ordering::Less {
            child += 1;
        }
        if cmp.compare(&v[lo + i - 1], &v[lo + child - 1]) != Ordering::Less {
            break;
        }
        v.swap(lo + i - 1, lo + child - 1);
        i = child;
    }
}

/// Binary search `v` (sorted ascending per `cmp`) for `target`.
///
/// Returns `Ok(i)` with `cmp.compare(&v[i], target) == Equal` if a match
/// exists (with duplicates, any matching index). Otherwise returns
/// `Err(i)` where `i` is the insertion point that keeps `v` sorted.
///
/// The sortedness precondition is the caller's responsibility; on an
/// unsorted slice the result is unspecified.
pub fn binary_search<T, C>(v: &[T], target: &T, cmp: &C) -> Result<usize, usize>
where
    C: RefComparer<T>,
{
    let mut lo = 0;
    let mut hi = v.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match cmp.compare(&v[mid], target) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => return Ok(mid),
        }
    }
    Err(lo)
}
