//! Cursors over a [`List`].
//!
//! A cursor holds the node it is on and the successor of that node, captured
//! when the cursor arrived there. [`next`](CursorMut::next) moves to the
//! captured successor, which is why [`CursorMut::remove_current`] can drop
//! the node under the cursor in the middle of a walk without losing its place.
//!
//! ```
//! use mola_rtlist::List;
//!
//! let mut list = List::<u32>::new();
//! for v in 1..=5 {
//!     list.append(&v).unwrap();
//! }
//!
//! let mut cursor = list.begin_mut();
//! while let Some(&v) = cursor.value() {
//!     if v % 2 == 0 {
//!         cursor.remove_current();
//!     }
//!     cursor.next();
//! }
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
//! list.clear();
//! ```

use core::ptr::NonNull;

use super::{
    error::InsertError,
    list::List,
    node::Node,
    ring::Link,
    traits::{NodeAllocator, ValuePolicy},
};

/// A read-only cursor. `None` as the current link is the sentinel.
pub struct Cursor<'a, T, A, P>
where
    A: NodeAllocator<T>,
    P: ValuePolicy<T>,
{
    list: &'a List<T, A, P>,
    current: Option<NonNull<Link>>,
    next: Option<NonNull<Link>>,
}

impl<'a, T, A, P> Cursor<'a, T, A, P>
where
    A: NodeAllocator<T>,
    P: ValuePolicy<T>,
{
    pub(crate) fn new(list: &'a List<T, A, P>) -> Self {
        let current = list.ring().first();
        let next = match current {
            Some(link) => unsafe { link.as_ref().next() },
            None => None,
        };
        Self {
            list,
            current,
            next,
        }
    }

    /// Whether the cursor is on a node rather than the sentinel.
    #[inline]
    pub fn valid(&self) -> bool {
        self.current.is_some()
    }

    /// Moves to the successor captured on arrival. Stays on the sentinel once
    /// it got there.
    pub fn next(&mut self) {
        self.current = self.next;
        self.next = match self.current {
            Some(link) => unsafe { link.as_ref().next() },
            None => None,
        };
    }

    pub fn value(&self) -> Option<&'a T> {
        self.current.map(|link| unsafe { Node::value(link) })
    }

    pub fn list(&self) -> &'a List<T, A, P> {
        self.list
    }
}

/// A cursor that can edit the list it walks.
///
/// It borrows the list mutably, so no node can disappear behind its back.
pub struct CursorMut<'a, T, A, P>
where
    A: NodeAllocator<T>,
    P: ValuePolicy<T>,
{
    list: &'a mut List<T, A, P>,
    current: Option<NonNull<Link>>,
    next: Option<NonNull<Link>>,
}

impl<'a, T, A, P> CursorMut<'a, T, A, P>
where
    A: NodeAllocator<T>,
    P: ValuePolicy<T>,
{
    pub(crate) fn new(list: &'a mut List<T, A, P>) -> Self {
        let current = list.ring().first();
        let next = match current {
            Some(link) => unsafe { link.as_ref().next() },
            None => None,
        };
        Self {
            list,
            current,
            next,
        }
    }

    #[inline]
    pub fn valid(&self) -> bool {
        self.current.is_some()
    }

    /// Moves to the successor captured on arrival.
    pub fn next(&mut self) {
        self.current = self.next;
        self.next = match self.current {
            Some(link) => unsafe { link.as_ref().next() },
            None => None,
        };
    }

    pub fn value(&self) -> Option<&T> {
        self.current.map(|link| unsafe { Node::value(link) })
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        self.current.map(|link| unsafe { Node::value_mut(link) })
    }

    /// Replaces the current value with a copy of `value` built by the list's
    /// policy. The old value is discarded the same way a removed node's is.
    ///
    /// Fails if the cursor is on the sentinel or the copy could not be built;
    /// the current value is untouched then.
    pub fn set_value(&mut self, value: &T) -> Result<(), InsertError> {
        let Some(link) = self.current else {
            return Err(InsertError);
        };
        let value = P::construct(value).map_err(|err| {
            tracing::trace!(%err, "cursor value construction failed");
            InsertError
        })?;
        let old = core::mem::replace(unsafe { Node::value_mut(link) }, value);
        List::<T, A, P>::dispose(old);
        Ok(())
    }

    /// Unlinks the current node and returns its value.
    ///
    /// The cursor is left on the sentinel until [`next`](Self::next) moves it
    /// to the successor captured before the removal.
    pub fn remove_current(&mut self) -> Option<T> {
        let link = self.current.take()?;
        Some(unsafe { self.list.unlink(link) })
    }

    /// Unlinks the current node and discards its value according to the
    /// list's policy.
    pub fn discard_current(&mut self) -> bool {
        match self.remove_current() {
            Some(value) => {
                List::<T, A, P>::dispose(value);
                true
            }
            None => false,
        }
    }

    /// Adds a copy of `value` right after the current node.
    ///
    /// On the sentinel this is the head. The new node is not visited by this
    /// cursor.
    pub fn append_at(&mut self, value: &T) -> Result<(), InsertError> {
        self.list.add_after(value, self.current).map(drop)
    }

    /// Adds a copy of `value` right before the current node.
    ///
    /// On the sentinel this is the tail.
    pub fn insert_at(&mut self, value: &T) -> Result<(), InsertError> {
        self.list.add_before(value, self.current).map(drop)
    }

    /// Adds a copy of `value` at the tail of the list, wherever the cursor is.
    ///
    /// If the cursor is on the last node the new node is not visited, its
    /// successor was captured before.
    pub fn append(&mut self, value: &T) -> Result<(), InsertError> {
        self.list.append(value)
    }

    /// Adds a copy of `value` at the head of the list, wherever the cursor is.
    pub fn insert(&mut self, value: &T) -> Result<(), InsertError> {
        self.list.insert(value)
    }

    pub fn list(&self) -> &List<T, A, P> {
        self.list
    }
}
