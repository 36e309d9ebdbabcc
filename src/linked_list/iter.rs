use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::{
    list::List,
    node::Node,
    ring::Link,
    traits::{NodeAllocator, ValuePolicy},
};

/// An iterator over shared references to the values of a list.
pub struct Iter<'a, T> {
    head: Option<NonNull<Link>>,
    tail: Option<NonNull<Link>>,
    len: usize,
    _marker: PhantomData<&'a T>,
}

impl<T> Iter<'_, T> {
    pub(crate) fn new(head: Option<NonNull<Link>>, tail: Option<NonNull<Link>>, len: usize) -> Self {
        Self {
            head,
            tail,
            len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.head.map(|link| unsafe {
            self.len -= 1;
            self.head = link.as_ref().next();
            Node::value(link)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.tail.map(|link| unsafe {
            self.len -= 1;
            self.tail = link.as_ref().prev();
            Node::value(link)
        })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self::new(self.head, self.tail, self.len)
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

/// An iterator over mutable references to the values of a list.
pub struct IterMut<'a, T> {
    head: Option<NonNull<Link>>,
    tail: Option<NonNull<Link>>,
    len: usize,
    _marker: PhantomData<&'a mut T>,
}

impl<T> IterMut<'_, T> {
    pub(crate) fn new(head: Option<NonNull<Link>>, tail: Option<NonNull<Link>>, len: usize) -> Self {
        Self {
            head,
            tail,
            len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.head.map(|link| unsafe {
            self.len -= 1;
            self.head = link.as_ref().next();
            Node::value_mut(link)
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }
        self.tail.map(|link| unsafe {
            self.len -= 1;
            self.tail = link.as_ref().prev();
            Node::value_mut(link)
        })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}

/// A draining iterator that takes the values out of a list by value.
///
/// Values not yet yielded are discarded by the list's policy when the
/// iterator is dropped.
pub struct IntoIter<T, A, P>
where
    A: NodeAllocator<T>,
    P: ValuePolicy<T>,
{
    list: List<T, A, P>,
}

impl<T, A, P> IntoIter<T, A, P>
where
    A: NodeAllocator<T>,
    P: ValuePolicy<T>,
{
    pub(crate) fn new(list: List<T, A, P>) -> Self {
        Self { list }
    }
}

impl<T, A, P> Iterator for IntoIter<T, A, P>
where
    A: NodeAllocator<T>,
    P: ValuePolicy<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.count(), Some(self.list.count()))
    }
}

impl<T, A, P> DoubleEndedIterator for IntoIter<T, A, P>
where
    A: NodeAllocator<T>,
    P: ValuePolicy<T>,
{
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_last()
    }
}

impl<T, A, P> ExactSizeIterator for IntoIter<T, A, P>
where
    A: NodeAllocator<T>,
    P: ValuePolicy<T>,
{
}

impl<T, A, P> Drop for IntoIter<T, A, P>
where
    A: NodeAllocator<T>,
    P: ValuePolicy<T>,
{
    fn drop(&mut self) {
        self.list.clear();
    }
}
