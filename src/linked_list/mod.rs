//! A doubly linked list with pluggable node storage.
//!
//! The list keeps its nodes on a circular ring of links anchored by a
//! sentinel ([`ring::Ring`]). Every node is created through a
//! [`NodeAllocator`](traits::NodeAllocator) and its value is built by a
//! [`ValuePolicy`](traits::ValuePolicy), both chosen as type parameters:
//!
//! - [`alloc::HeapAllocator`]: the global allocator.
//! - [`alloc::FixedPool`] / [`alloc::SharedPool`]: a fixed block of node slots
//!   that never allocates after construction, for realtime contexts.
//! - [`policy::RawCopy`]: bitwise copies of `Copy` values, no destructor.
//! - [`policy::CopyConstruct`]: default-construct then copy-assign, destructor
//!   runs on removal.
//!
//! # Examples
//!
//! ```
//! use mola_rtlist::{FixedPool, List, RawCopy};
//!
//! let mut list: List<u32, FixedPool<u32>, RawCopy> =
//!     List::with_allocator(FixedPool::with_capacity(16));
//! let mut other: List<u32, FixedPool<u32>, RawCopy> =
//!     List::with_allocator(FixedPool::with_capacity(16));
//!
//! list.append(&1).unwrap();
//! list.append(&2).unwrap();
//! other.append(&3).unwrap();
//!
//! // Each owned pool can only release its own nodes.
//! assert!(list.splice_append(&mut other).is_err());
//!
//! let mut cursor = list.begin_mut();
//! cursor.append_at(&9).unwrap();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 9, 2]);
//!
//! list.clear();
//! other.clear();
//! ```
//!
//! # Ownership
//!
//! A list owns its nodes exclusively. Splicing moves every node to another
//! list and leaves the source empty; nodes are never shared between lists.
//! A list must be emptied before it is dropped.
//!
//! Lists are not synchronized. Wrap one in a lock to share it between threads.

pub mod alloc;
pub mod cursor;
pub mod error;
pub mod iter;
pub mod list;
pub mod node;
pub mod policy;
pub mod ring;
pub mod traits;

#[cfg(test)]
mod tests;

/// Whether the current thread is unwinding. The leak checks in `Drop` stay
/// quiet then, a second panic would abort. Without `std` this is never known.
#[inline]
pub(crate) fn unwinding() -> bool {
    #[cfg(any(test, feature = "std"))]
    {
        std::thread::panicking()
    }
    #[cfg(not(any(test, feature = "std")))]
    {
        false
    }
}
