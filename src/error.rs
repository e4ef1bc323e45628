use std::any::type_name;
use std::error::Error;
use std::fmt;

/// Error produced when a list or view operation is given arguments that
/// violate its preconditions, or when a sequence query has no answer.
///
/// Every variant is raised synchronously at the call site; nothing is
/// retried or swallowed internally.
#[derive(Copy, Debug, PartialEq, Eq)]
pub enum ListError {
    /// An index argument does not address a live element.
    OutOfBounds { index: usize, len: usize },
    /// A `(start, count)` sub-range does not fit within the live elements.
    BadRange { start: usize, count: usize, len: usize },
    /// The capacity setter was asked to shrink below the current length.
    CapacityTooSmall { requested: usize, count: usize },
    /// A comparer was used that is neither explicitly configured
    /// (`is_valid`) nor safe to use default-constructed
    /// (`works_when_default`). Carries the comparer and element type names.
    BadComparer {
        comparer: &'static str,
        element: &'static str,
    },
    /// `first`/`last`/`single` found no matching element.
    Empty { operation: &'static str },
    /// `single` found more than one matching element.
    Ambiguous { operation: &'static str },
}

impl Clone for ListError {
    fn clone(&self) -> Self {
        *self
    }
}

impl ListError {
    #[inline]
    pub(crate) fn bad_comparer<C, T>() -> ListError {
        ListError::BadComparer {
            comparer: type_name::<C>(),
            element: type_name::<T>(),
        }
    }
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ListError::OutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for length {}", index, len)
            }
            ListError::BadRange { start, count, len } => write!(
                f,
                "range start {} with count {} does not fit in length {}",
                start, count, len
            ),
            ListError::CapacityTooSmall { requested, count } => write!(
                f,
                "capacity {} is smaller than the current count {}",
                requested, count
            ),
            ListError::BadComparer { comparer, element } => write!(
                f,
                "comparer `{}` over `{}` is not configured and is not usable when default-constructed",
                comparer, element
            ),
            ListError::Empty { operation } => {
                write!(f, "`{}` on a sequence with no matching element", operation)
            }
            ListError::Ambiguous { operation } => {
                write!(f, "`{}` on a sequence with more than one match", operation)
            }
        }
    }
}

impl Error for ListError {}
