use core::mem::MaybeUninit;
use core::ptr::{self, NonNull};

use super::ring::Link;

/// The unit of storage handed out by a [`NodeAllocator`](super::traits::NodeAllocator).
///
/// The link comes first so a `NonNull<Link>` taken from a ring can be cast
/// back to the node that embeds it.
#[repr(C)]
pub struct Node<T> {
    pub(crate) link: Link,
    value: MaybeUninit<T>,
}

impl<T> Node<T> {
    /// Writes a fresh, unlinked node holding `value` into `slot`.
    ///
    /// # Safety
    ///
    /// `slot` must be valid for writes of one `Node<T>`.
    #[inline]
    pub(crate) unsafe fn init(slot: NonNull<Self>, value: T) -> NonNull<Link> {
        unsafe {
            slot.as_ptr().write(Self {
                link: Link::new(),
                value: MaybeUninit::new(value),
            });
        }
        slot.cast()
    }

    #[inline]
    pub(crate) fn from_link(link: NonNull<Link>) -> NonNull<Self> {
        link.cast()
    }

    /// # Safety
    ///
    /// `link` must belong to an initialized node that outlives `'a`.
    #[inline]
    pub(crate) unsafe fn value<'a>(link: NonNull<Link>) -> &'a T {
        unsafe { (*Self::from_link(link).as_ptr()).value.assume_init_ref() }
    }

    /// # Safety
    ///
    /// `link` must belong to an initialized node that outlives `'a` and is
    /// not otherwise borrowed.
    #[inline]
    pub(crate) unsafe fn value_mut<'a>(link: NonNull<Link>) -> &'a mut T {
        unsafe { (*Self::from_link(link).as_ptr()).value.assume_init_mut() }
    }

    /// Moves the value out, leaving the node storage uninitialized.
    ///
    /// # Safety
    ///
    /// The node must be initialized and must not be read again.
    #[inline]
    pub(crate) unsafe fn take(node: NonNull<Self>) -> T {
        unsafe { ptr::addr_of!((*node.as_ptr()).value).read().assume_init() }
    }

    /// Writes only the link of an uninitialized slot.
    ///
    /// # Safety
    ///
    /// `slot` must be valid for writes of one `Node<T>`.
    #[inline]
    pub(crate) unsafe fn write_link(slot: NonNull<Self>, next: Option<NonNull<Link>>) {
        unsafe {
            let mut link = Link::new();
            link.set_next(next);
            ptr::addr_of_mut!((*slot.as_ptr()).link).write(link);
        }
    }

    /// Reads the link of a slot whose link was written by [`Node::write_link`].
    ///
    /// # Safety
    ///
    /// The slot's link must be initialized.
    #[inline]
    pub(crate) unsafe fn read_next(slot: NonNull<Self>) -> Option<NonNull<Link>> {
        unsafe { (*ptr::addr_of!((*slot.as_ptr()).link)).next() }
    }
}
