//! By-reference comparer capability: ordering, equality and hashing with
//! operands taken by shared reference, so comparing large values never
//! copies them.

use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};

use crate::error::ListError;

/// User-substitutable ordering, equality and hashing over `T`, with all
/// operands passed by reference.
///
/// Implementations must keep the three views of `T` consistent:
/// `eq(a, b)` exactly when `compare(a, b) == Ordering::Equal`, and equal
/// values must hash equal (the converse need not hold). The sort and search
/// engines trust this; violating it makes their results meaningless but is
/// never detected at runtime.
///
/// The two flags describe construction requirements rather than per-call
/// state. `is_valid` reports whether this instance carries the configuration
/// it needs; `works_when_default` is a declared guarantee, independent of
/// `is_valid`, that a default-constructed instance behaves correctly.
/// Container operations refuse a comparer for which both are false (see
/// [`ListError::BadComparer`]).
pub trait RefComparer<T> {
    /// True if this instance was constructed with the configuration it
    /// requires, rather than left default.
    fn is_valid(&self) -> bool {
        true
    }

    /// True if a default-constructed instance of this comparer behaves
    /// correctly.
    fn works_when_default(&self) -> bool {
        true
    }

    /// Total order over `T`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Equality consistent with [`compare`](RefComparer::compare).
    fn eq(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// Hash consistent with [`eq`](RefComparer::eq). Not used by sort or
    /// search; part of the capability so hash-based lookups can share one
    /// comparer.
    fn hash_one(&self, x: &T) -> u64;
}

/// Check that `cmp` may be used: explicitly configured, or declared safe in
/// its default-constructed state.
#[inline]
pub(crate) fn ensure_usable<T, C>(cmp: &C) -> Result<(), ListError>
where
    C: RefComparer<T>,
{
    if cmp.is_valid() || cmp.works_when_default() {
        Ok(())
    } else {
        Err(ListError::bad_comparer::<C, T>())
    }
}

/// Comparer backed by `T`'s own `Ord` and `Hash` implementations.
///
/// Stateless, so the default-constructed instance is fully usable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct OrdComparer;

impl<T> RefComparer<T> for OrdComparer
where
    T: Ord + Hash,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn eq(&self, a: &T, b: &T) -> bool {
        a == b
    }

    fn hash_one(&self, x: &T) -> u64 {
        let mut h = DefaultHasher::new();
        x.hash(&mut h);
        h.finish()
    }
}

/// Comparer assembled from function pointers.
///
/// The `Default` value carries no functions: `is_valid` is false,
/// `works_when_default` is false, and any container operation handed such an
/// instance fails with [`ListError::BadComparer`] before touching element
/// storage. Construct through [`new`](FnComparer::new) or
/// [`with_equals`](FnComparer::with_equals) to get a valid instance.
///
/// # Panics
///
/// `compare`, `eq` and `hash_one` panic if called on an instance whose
/// functions were never set. The container and view APIs check `is_valid`
/// first and never reach this; direct callers should do the same.
pub struct FnComparer<T> {
    compare: Option<fn(&T, &T) -> Ordering>,
    equals: Option<fn(&T, &T) -> bool>,
    hash: Option<fn(&T) -> u64>,
}

impl<T> FnComparer<T> {
    /// Comparer from an ordering function and a hash function; equality is
    /// derived from the ordering.
    pub fn new(compare: fn(&T, &T) -> Ordering, hash: fn(&T) -> u64) -> Self {
        FnComparer {
            compare: Some(compare),
            equals: None,
            hash: Some(hash),
        }
    }

    /// Comparer with a distinct equality function. The caller is responsible
    /// for keeping it consistent with `compare`.
    pub fn with_equals(
        compare: fn(&T, &T) -> Ordering,
        equals: fn(&T, &T) -> bool,
        hash: fn(&T) -> u64,
    ) -> Self {
        FnComparer {
            compare: Some(compare),
            equals: Some(equals),
            hash: Some(hash),
        }
    }
}

impl<T> RefComparer<T> for FnComparer<T> {
    fn is_valid(&self) -> bool {
        self.compare.is_some() && self.hash.is_some()
    }

    fn works_when_default(&self) -> bool {
        false
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        match self.compare {
            Some(f) => f(a, b),
            None => panic!("FnComparer::compare called on an unconfigured comparer"),
        }
    }

    fn eq(&self, a: &T, b: &T) -> bool {
        match (self.equals, self.compare) {
            (Some(f), _) => f(a, b),
            (None, Some(f)) => f(a, b) == Ordering::Equal,
            (None, None) => panic!("FnComparer::eq called on an unconfigured comparer"),
        }
    }

    fn hash_one(&self, x: &T) -> u64 {
        match self.hash {
            Some(f) => f(x),
            None => panic!("FnComparer::hash_one called on an unconfigured comparer"),
        }
    }
}

// Manual impls: the function pointers are Copy and Debug for any `T`, so no
// `T: Copy`/`T: Debug` bound belongs on the comparer.
impl<T> Copy for FnComparer<T> {}

impl<T> Clone for FnComparer<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Default for FnComparer<T> {
    fn default() -> Self {
        FnComparer {
            compare: None,
            equals: None,
            hash: None,
        }
    }
}

impl<T> Debug for FnComparer<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FnComparer")
            .field("compare", &self.compare.is_some())
            .field("equals", &self.equals.is_some())
            .field("hash", &self.hash.is_some())
            .finish()
    }
}
