//! A doubly linked list whose node storage comes from a pluggable allocator.
//!
//! See [`linked_list`] for the list engine, the allocator strategies and the
//! value policies.
#![no_std]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod linked_list;

pub use linked_list::{
    alloc::{FixedPool, HeapAllocator, SharedPool},
    cursor::{Cursor, CursorMut},
    error::{ConstructError, InsertError, SpliceError},
    list::{ClonedList, List},
    policy::{CopyConstruct, RawCopy},
    traits::{NodeAllocator, ValuePolicy},
};
