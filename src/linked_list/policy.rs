//! The value policies a [`List`](super::list::List) can be built with.

use super::{error::ConstructError, traits::ValuePolicy};

/// Stores values by bitwise duplication and never runs a destructor.
///
/// Only types without ownership semantics qualify, which is what `Copy`
/// guarantees.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawCopy;

impl<T: Copy> ValuePolicy<T> for RawCopy {
    const RUNS_DROP: bool = false;

    #[inline]
    fn construct(source: &T) -> Result<T, ConstructError> {
        Ok(*source)
    }
}

/// Default-constructs the node value, then copy-assigns the caller's value
/// into it. The destructor runs when the node is discarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyConstruct;

impl<T: Default + Clone> ValuePolicy<T> for CopyConstruct {
    const RUNS_DROP: bool = true;

    #[inline]
    fn construct(source: &T) -> Result<T, ConstructError> {
        let mut value = T::default();
        value.clone_from(source);
        Ok(value)
    }
}
