use alloc::alloc::{Layout, alloc, dealloc};
use core::ptr::NonNull;

use crate::linked_list::{node::Node, traits::NodeAllocator};

/// Allocates every node from the global allocator.
///
/// Any two heap allocators can release each other's nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapAllocator;

unsafe impl<T> NodeAllocator<T> for HeapAllocator {
    #[inline]
    fn allocate(&mut self) -> Option<NonNull<Node<T>>> {
        // `Node` always embeds a link, so the layout is never zero-sized.
        let layout = Layout::new::<Node<T>>();
        NonNull::new(unsafe { alloc(layout) }.cast())
    }

    #[inline]
    unsafe fn deallocate(&mut self, node: NonNull<Node<T>>) {
        unsafe { dealloc(node.as_ptr().cast(), Layout::new::<Node<T>>()) }
    }

    #[inline]
    fn shares_storage(&self, _other: &Self) -> bool {
        true
    }
}
