use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use super::{
    unwinding,
    alloc::HeapAllocator,
    cursor::{Cursor, CursorMut},
    error::{InsertError, SpliceError},
    iter::{IntoIter, Iter, IterMut},
    node::Node,
    policy::{CopyConstruct, RawCopy},
    ring::{End, Link, Ring},
    traits::{NodeAllocator, ValuePolicy},
};

/// A list that copy-constructs its values and drops them on removal.
pub type ClonedList<T, A = HeapAllocator> = List<T, A, CopyConstruct>;

/// A doubly linked list whose nodes come from the allocator `A` and whose
/// values are built according to the policy `P`.
///
/// The list is not `Clone`: copying the links without the values would leave
/// two lists owning the same nodes. It must be emptied before it is dropped;
/// dropping a non-empty list is treated as a bug.
///
/// # Example
///
/// ```
/// use mola_rtlist::List;
///
/// let mut list = List::<u32>::new();
/// list.append(&2).unwrap();
/// list.append(&3).unwrap();
/// list.insert(&1).unwrap();
///
/// assert_eq!(list.count(), 3);
/// assert_eq!(list.get_at(1), Some(&2));
/// assert_eq!(list.pop_first(), Some(1));
///
/// list.clear();
/// assert!(list.is_empty());
/// ```
pub struct List<T, A = HeapAllocator, P = RawCopy>
where
    A: NodeAllocator<T>,
    P: ValuePolicy<T>,
{
    ring: Ring,
    count: usize,
    alloc: A,
    _marker: PhantomData<(T, P)>,
}

impl<T, A, P> List<T, A, P>
where
    A: NodeAllocator<T> + Default,
    P: ValuePolicy<T>,
{
    /// Creates an empty list with a default-constructed allocator.
    pub fn new() -> Self {
        Self::with_allocator(A::default())
    }
}

impl<T, A, P> Default for List<T, A, P>
where
    A: NodeAllocator<T> + Default,
    P: ValuePolicy<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, A, P> List<T, A, P>
where
    A: NodeAllocator<T>,
    P: ValuePolicy<T>,
{
    /// Creates an empty list drawing its nodes from `alloc`.
    pub const fn with_allocator(alloc: A) -> Self {
        Self {
            ring: Ring::new(),
            count: 0,
            alloc,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Adds a copy of `value` at the tail.
    pub fn append(&mut self, value: &T) -> Result<(), InsertError> {
        self.add_before(value, None).map(drop)
    }

    /// Adds a copy of `value` at the head.
    pub fn insert(&mut self, value: &T) -> Result<(), InsertError> {
        self.add_after(value, None).map(drop)
    }

    pub fn first(&self) -> Option<&T> {
        self.ring.first().map(|link| unsafe { Node::value(link) })
    }

    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.ring.first().map(|link| unsafe { Node::value_mut(link) })
    }

    pub fn last(&self) -> Option<&T> {
        self.ring.last().map(|link| unsafe { Node::value(link) })
    }

    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.ring.last().map(|link| unsafe { Node::value_mut(link) })
    }

    /// Removes the head and returns its value.
    pub fn pop_first(&mut self) -> Option<T> {
        let link = self.ring.first()?;
        Some(unsafe { self.unlink(link) })
    }

    /// Removes the tail and returns its value.
    pub fn pop_last(&mut self) -> Option<T> {
        let link = self.ring.last()?;
        Some(unsafe { self.unlink(link) })
    }

    /// Returns the value at `index`, scanning from the nearer end.
    pub fn get_at(&self, index: usize) -> Option<&T> {
        self.link_at(index).map(|link| unsafe { Node::value(link) })
    }

    pub fn get_at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.link_at(index).map(|link| unsafe { Node::value_mut(link) })
    }

    /// Removes the node at `index` and returns its value.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let Some(link) = self.link_at(index) else {
            tracing::debug!(index, count = self.count, "remove_at index out of range");
            return None;
        };
        Some(unsafe { self.unlink(link) })
    }

    /// Removes the first node whose value equals `value`.
    ///
    /// # Returns
    /// Whether a node was removed
    pub fn remove_one(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut cursor = self.begin_mut();
        while cursor.valid() {
            if cursor.value() == Some(value) {
                cursor.discard_current();
                return true;
            }
            cursor.next();
        }
        false
    }

    /// Removes every node whose value equals `value`, keeping the order of
    /// the rest.
    ///
    /// # Returns
    /// The number of nodes removed
    pub fn remove_all(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        let before = self.count;
        self.retain(|v| v != value);
        before - self.count
    }

    /// Keeps only the values for which `keep` returns `true`.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.begin_mut();
        while let Some(value) = cursor.value() {
            if !keep(value) {
                cursor.discard_current();
            }
            cursor.next();
        }
    }

    /// Destroys every node and releases its storage.
    pub fn clear(&mut self) {
        while let Some(value) = self.pop_first() {
            Self::dispose(value);
        }
        self.ring.init();
    }

    /// Moves every node of this list to the tail of `other`.
    ///
    /// This list is empty afterwards. Fails without moving anything if the
    /// two allocators cannot release each other's nodes.
    pub fn splice_append(&mut self, other: &mut Self) -> Result<(), SpliceError> {
        self.splice_into(other, End::Tail)
    }

    /// Moves every node of this list to the head of `other`.
    pub fn splice_insert(&mut self, other: &mut Self) -> Result<(), SpliceError> {
        self.splice_into(other, End::Head)
    }

    fn splice_into(&mut self, other: &mut Self, end: End) -> Result<(), SpliceError> {
        if !self.alloc.shares_storage(&other.alloc) {
            tracing::warn!(count = self.count, "refusing to splice between unrelated allocators");
            return Err(SpliceError::IncompatibleAllocator);
        }

        self.ring.splice_into(&mut other.ring, end);
        other.count += self.count;
        self.count = 0;
        Ok(())
    }

    /// Returns a read-only cursor on the first node.
    pub fn begin(&self) -> Cursor<'_, T, A, P> {
        Cursor::new(self)
    }

    /// Returns a cursor on the first node that can edit the list while
    /// walking it.
    pub fn begin_mut(&mut self) -> CursorMut<'_, T, A, P> {
        CursorMut::new(self)
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.ring.first(), self.ring.last(), self.count)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.ring.first(), self.ring.last(), self.count)
    }

    #[inline]
    pub(crate) fn ring(&self) -> &Ring {
        &self.ring
    }

    /// Allocates and links a node holding a copy of `value` right after `at`.
    pub(crate) fn add_after(
        &mut self,
        value: &T,
        at: Option<NonNull<Link>>,
    ) -> Result<NonNull<Link>, InsertError> {
        let link = self.create_node(value)?;
        unsafe { self.ring.insert_after(link, at) };
        self.count += 1;
        Ok(link)
    }

    /// Allocates and links a node holding a copy of `value` right before `at`.
    pub(crate) fn add_before(
        &mut self,
        value: &T,
        at: Option<NonNull<Link>>,
    ) -> Result<NonNull<Link>, InsertError> {
        let link = self.create_node(value)?;
        unsafe { self.ring.insert_before(link, at) };
        self.count += 1;
        Ok(link)
    }

    /// Builds the value before taking a slot, so a policy that fails or
    /// unwinds never holds storage.
    fn create_node(&mut self, value: &T) -> Result<NonNull<Link>, InsertError> {
        let value = P::construct(value).map_err(|err| {
            tracing::trace!(%err, "node value construction failed");
            InsertError
        })?;

        let Some(slot) = self.alloc.allocate() else {
            tracing::trace!(count = self.count, "node allocation failed");
            Self::dispose(value);
            return Err(InsertError);
        };
        Ok(unsafe { Node::init(slot, value) })
    }

    /// Unlinks the node behind `link`, releases its storage and returns the
    /// value it held.
    ///
    /// # Safety
    ///
    /// `link` must be a node of this list.
    pub(crate) unsafe fn unlink(&mut self, link: NonNull<Link>) -> T {
        unsafe {
            self.ring.remove(link);
            self.count -= 1;

            let node = Node::from_link(link);
            let value = Node::take(node);
            self.alloc.deallocate(node);
            value
        }
    }

    /// Ends the life of a value taken out of a discarded node.
    #[inline]
    pub(crate) fn dispose(value: T) {
        if P::RUNS_DROP {
            drop(value);
        } else {
            mem::forget(value);
        }
    }

    fn link_at(&self, index: usize) -> Option<NonNull<Link>> {
        if index >= self.count {
            return None;
        }

        unsafe {
            if index <= self.count / 2 {
                let mut link = self.ring.first();
                for _ in 0..index {
                    link = self.ring.next_of(link);
                }
                link
            } else {
                let mut link = self.ring.last();
                for _ in index + 1..self.count {
                    link = self.ring.prev_of(link);
                }
                link
            }
        }
    }
}

/// Dropping a list that still holds nodes is an invariant violation: it
/// panics in debug builds. The nodes are released first, so the allocator
/// never loses storage.
impl<T, A, P> Drop for List<T, A, P>
where
    A: NodeAllocator<T>,
    P: ValuePolicy<T>,
{
    fn drop(&mut self) {
        let leaked = self.count;
        if leaked != 0 {
            tracing::warn!(count = leaked, "list dropped while non-empty, releasing nodes");
            self.clear();
        }
        debug_assert!(
            leaked == 0 || unwinding(),
            "list dropped with {leaked} nodes still linked"
        );
    }
}

impl<T, A, P> fmt::Debug for List<T, A, P>
where
    T: fmt::Debug,
    A: NodeAllocator<T>,
    P: ValuePolicy<T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, A, P> IntoIterator for &'a List<T, A, P>
where
    A: NodeAllocator<T>,
    P: ValuePolicy<T>,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A, P> IntoIterator for &'a mut List<T, A, P>
where
    A: NodeAllocator<T>,
    P: ValuePolicy<T>,
{
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, A, P> IntoIterator for List<T, A, P>
where
    A: NodeAllocator<T>,
    P: ValuePolicy<T>,
{
    type Item = T;
    type IntoIter = IntoIter<T, A, P>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

unsafe impl<T: Send, A: NodeAllocator<T> + Send, P: ValuePolicy<T>> Send for List<T, A, P> {}
unsafe impl<T: Sync, A: NodeAllocator<T> + Sync, P: ValuePolicy<T>> Sync for List<T, A, P> {}
