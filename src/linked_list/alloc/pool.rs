use alloc::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use alloc::sync::Arc;
use core::mem::size_of;
use core::ptr::NonNull;

use crossbeam_utils::CachePadded;
use spin::Mutex;

use crate::linked_list::{node::Node, traits::NodeAllocator, unwinding};

/// A fixed-capacity pool of node slots.
///
/// All slots live in one allocation made up front. Free slots are chained
/// through their own link field, so allocate and deallocate are O(1), never
/// touch the global allocator and never block, which makes the pool usable
/// from realtime contexts.
///
/// # Memory Layout
///
/// ```text
/// +----------+----------+-----+--------------+
/// |  Node 0  |  Node 1  | ... |  Node N - 1  |
/// +----------+----------+-----+--------------+
/// ```
///
/// # Example
///
/// ```
/// use mola_rtlist::{FixedPool, List};
///
/// let mut list: List<u32, FixedPool<u32>> = List::with_allocator(FixedPool::with_capacity(2));
/// assert!(list.append(&1).is_ok());
/// assert!(list.append(&2).is_ok());
/// assert!(list.append(&3).is_err());
/// list.clear();
/// ```
pub struct FixedPool<T> {
    slots: NonNull<Node<T>>,
    capacity: usize,
    free: Option<NonNull<Node<T>>>,
    available: usize,
    layout: Layout,
}

impl<T> FixedPool<T> {
    /// Creates a pool with exactly `capacity` node slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 or the block size overflows `isize`.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        let layout = match Layout::array::<Node<T>>(capacity) {
            Ok(layout) => layout,
            Err(_) => panic!("pool of {capacity} nodes overflows the address space"),
        };

        let ptr = unsafe { alloc(layout) };
        let Some(slots) = NonNull::new(ptr.cast::<Node<T>>()) else {
            handle_alloc_error(layout);
        };

        // Chain every slot into the free list, lowest address first.
        for i in 0..capacity {
            unsafe {
                let next = if i + 1 < capacity {
                    Some(slots.add(i + 1).cast())
                } else {
                    None
                };
                Node::write_link(slots.add(i), next);
            }
        }

        Self {
            slots,
            capacity,
            free: Some(slots),
            available: capacity,
            layout,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of free slots.
    #[inline]
    pub fn available(&self) -> usize {
        self.available
    }

    /// Number of slots currently handed out.
    #[inline]
    pub fn in_use(&self) -> usize {
        self.capacity - self.available
    }

    /// Returns whether `node` points at one of this pool's slots.
    pub fn owns(&self, node: NonNull<Node<T>>) -> bool {
        let base = self.slots.as_ptr() as usize;
        let addr = node.as_ptr() as usize;
        let size = size_of::<Node<T>>();

        addr >= base && addr < base + self.capacity * size && (addr - base) % size == 0
    }
}

unsafe impl<T> NodeAllocator<T> for FixedPool<T> {
    #[inline]
    fn allocate(&mut self) -> Option<NonNull<Node<T>>> {
        let slot = self.free?;
        self.free = unsafe { Node::read_next(slot) }.map(NonNull::cast);
        self.available -= 1;
        Some(slot)
    }

    unsafe fn deallocate(&mut self, node: NonNull<Node<T>>) {
        if !self.owns(node) || self.available == self.capacity {
            tracing::warn!(
                addr = ?node.as_ptr(),
                capacity = self.capacity,
                available = self.available,
                "rejecting deallocation of a node this pool did not hand out"
            );
            debug_assert!(false, "node released to a pool that does not own it");
            return;
        }

        unsafe { Node::write_link(node, self.free.map(NonNull::cast)) };
        self.free = Some(node);
        self.available += 1;
    }

    /// An owned pool belongs to exactly one list, so no other allocator may
    /// release its nodes.
    #[inline]
    fn shares_storage(&self, other: &Self) -> bool {
        core::ptr::eq(self, other)
    }
}

impl<T> Drop for FixedPool<T> {
    fn drop(&mut self) {
        let in_use = self.in_use();
        if in_use != 0 {
            tracing::warn!(in_use, "pool dropped while nodes are still handed out");
        }
        unsafe { dealloc(self.slots.as_ptr().cast(), self.layout) };
        debug_assert!(
            in_use == 0 || unwinding(),
            "pool dropped with {in_use} nodes outstanding"
        );
    }
}

impl<T> core::fmt::Debug for FixedPool<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FixedPool")
            .field("capacity", &self.capacity)
            .field("available", &self.available)
            .finish()
    }
}

unsafe impl<T: Send> Send for FixedPool<T> {}

/// A [`FixedPool`] shared between several lists.
///
/// `&SharedPool<T>` and `Arc<SharedPool<T>>` are allocators. Lists that draw
/// from the same shared pool can splice into each other.
///
/// # Example
///
/// ```
/// use mola_rtlist::{List, RawCopy, SharedPool};
///
/// let pool = SharedPool::<u32>::with_capacity(8);
/// let mut a: List<u32, &SharedPool<u32>, RawCopy> = List::with_allocator(&pool);
/// let mut b: List<u32, &SharedPool<u32>, RawCopy> = List::with_allocator(&pool);
///
/// a.append(&1).unwrap();
/// b.append(&2).unwrap();
/// a.splice_append(&mut b).unwrap();
///
/// assert_eq!(pool.in_use(), 2);
/// assert_eq!(b.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
/// b.clear();
/// ```
pub struct SharedPool<T> {
    inner: CachePadded<Mutex<FixedPool<T>>>,
}

impl<T> SharedPool<T> {
    /// Creates a shared pool with exactly `capacity` node slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0 or the block size overflows `isize`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: CachePadded::new(Mutex::new(FixedPool::with_capacity(capacity))),
        }
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn available(&self) -> usize {
        self.inner.lock().available()
    }

    pub fn in_use(&self) -> usize {
        self.inner.lock().in_use()
    }
}

impl<T> core::fmt::Debug for SharedPool<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("SharedPool").field(&*self.inner.lock()).finish()
    }
}

unsafe impl<T> NodeAllocator<T> for &SharedPool<T> {
    #[inline]
    fn allocate(&mut self) -> Option<NonNull<Node<T>>> {
        self.inner.lock().allocate()
    }

    #[inline]
    unsafe fn deallocate(&mut self, node: NonNull<Node<T>>) {
        unsafe { self.inner.lock().deallocate(node) }
    }

    #[inline]
    fn shares_storage(&self, other: &Self) -> bool {
        core::ptr::eq(*self, *other)
    }
}

unsafe impl<T> NodeAllocator<T> for Arc<SharedPool<T>> {
    #[inline]
    fn allocate(&mut self) -> Option<NonNull<Node<T>>> {
        self.inner.lock().allocate()
    }

    #[inline]
    unsafe fn deallocate(&mut self, node: NonNull<Node<T>>) {
        unsafe { self.inner.lock().deallocate(node) }
    }

    #[inline]
    fn shares_storage(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}
