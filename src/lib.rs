//! Growable arrays with by-reference element access, sorted and searched
//! through a by-reference comparer abstraction, built for element types
//! large enough that copying them around is the dominant cost.
//!
//! # Basic Parts
//!
//! - [`RefComparer`] is the capability a caller supplies to substitute
//!   custom ordering, equality and hashing; every operand is passed by
//!   reference, so no comparison ever copies an element. [`OrdComparer`]
//!   adapts a type's own `Ord`/`Hash`; [`FnComparer`] assembles a comparer
//!   from function pointers and models the "must be explicitly constructed"
//!   case via its validity flags.
//!
//! - [`algorithms`] holds the engine: an introspective sort (quicksort with
//!   median-of-three pivoting, insertion sort for small partitions, heapsort
//!   when the recursion depth budget runs out) and a binary search, both
//!   working in place on a slice through a comparer.
//!
//! - [`RefList`] is the dynamic array: `List`-like mutation and query
//!   surface, reference-returning indexer, doubling capacity growth, and
//!   sort/search entry points that validate the comparer before delegating
//!   to the engine.
//!
//! - [`RefListView`] is a zero-copy read-only window over a list; the
//!   borrow it holds makes "view outlives mutation" a compile error rather
//!   than a documented hazard.
//!
//! Everything is single-threaded: no internal locking, with `Send`/`Sync`
//! following the element type. Precondition violations surface immediately
//! as [`ListError`] values at the call site.
//!
//! # Example
//!
//! ```rust
//! use reflist::{OrdComparer, RefList};
//!
//! let mut list: RefList<i32> = vec![5, 3, 8, 1, 9, 2].into();
//!
//! let cmp = OrdComparer;
//! list.sort_by_comparer(&cmp).unwrap();
//! assert_eq!(list.as_slice(), &[1, 2, 3, 5, 8, 9]);
//!
//! assert_eq!(list.binary_search_by_comparer(&8, &cmp).unwrap(), Ok(4));
//! // 4 is absent; Err carries the insertion point that keeps order
//! assert_eq!(list.binary_search_by_comparer(&4, &cmp).unwrap(), Err(3));
//!
//! // references alias storage; the borrow checker scopes them
//! let first = &list[0];
//! assert_eq!(*first, 1);
//! ```

#![doc(html_root_url = "https://docs.rs/reflist/0.1/")]

pub mod algorithms;
mod comparer;
mod error;
mod list;
mod view;

pub use crate::comparer::{FnComparer, OrdComparer, RefComparer};
pub use crate::error::ListError;
pub use crate::list::RefList;
pub use crate::view::RefListView;

pub mod prelude {
    pub use crate::comparer::{FnComparer, OrdComparer, RefComparer};
    pub use crate::error::ListError;
    pub use crate::list::RefList;
    pub use crate::view::RefListView;
}
