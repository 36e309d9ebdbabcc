use core::ptr::NonNull;

use super::{error::ConstructError, node::Node};

/// A source of raw node storage.
///
/// A list drives its allocator for every node it creates or destroys, so an
/// implementation decides where nodes live: the general heap, a fixed block
/// pool, an arena.
///
/// # Safety
///
/// Implementors must uphold:
///
/// - [`allocate`](NodeAllocator::allocate) returns storage that is valid for
///   reads and writes of one `Node<T>`, properly aligned, not overlapping any
///   other live allocation, and stable until it is deallocated.
/// - Neither method blocks on the OS or panics; exhaustion is reported as
///   `None`.
/// - [`shares_storage`](NodeAllocator::shares_storage) only returns `true`
///   when either allocator may release nodes allocated by the other.
pub unsafe trait NodeAllocator<T> {
    /// Acquire uninitialized storage for one node.
    ///
    /// # Returns
    /// The storage, or `None` when the source is exhausted
    fn allocate(&mut self) -> Option<NonNull<Node<T>>>;

    /// Release storage previously returned by [`allocate`](NodeAllocator::allocate).
    ///
    /// The node's value has already been moved out or dropped.
    ///
    /// # Safety
    ///
    /// `node` must come from `allocate` on this allocator, or on one for which
    /// `shares_storage` is `true`, and must not be released twice.
    unsafe fn deallocate(&mut self, node: NonNull<Node<T>>);

    /// Check if nodes may be handed between the two allocators.
    fn shares_storage(&self, other: &Self) -> bool;
}

/// How a list builds and tears down the values it stores.
pub trait ValuePolicy<T> {
    /// Whether the value's destructor runs when the list discards a node.
    const RUNS_DROP: bool;

    /// Build the value stored in a new node from the caller's value.
    ///
    /// # Arguments
    /// * `source` - The caller's value
    ///
    /// # Returns
    /// The value for the node, or why it could not be built
    fn construct(source: &T) -> Result<T, ConstructError>;
}
