use core::ptr::NonNull;

/// A link embedded at the start of every node.
///
/// A `None` neighbor stands for the sentinel of the [`Ring`] the link belongs
/// to, so "after the last node" and "before the first node" are the same place.
#[derive(Debug, Default)]
pub struct Link {
    next: Option<NonNull<Link>>,
    prev: Option<NonNull<Link>>,
}

impl Link {
    /// Creates an unlinked link.
    pub const fn new() -> Self {
        Self {
            next: None,
            prev: None,
        }
    }

    #[inline]
    pub fn next(&self) -> Option<NonNull<Link>> {
        self.next
    }

    #[inline]
    pub fn prev(&self) -> Option<NonNull<Link>> {
        self.prev
    }

    #[inline]
    pub(crate) fn set_next(&mut self, next: Option<NonNull<Link>>) {
        self.next = next;
    }
}

/// Which end of a ring a splice lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    Head,
    Tail,
}

/// The sentinel of a circular doubly linked ring of [`Link`]s.
///
/// The ring only relinks nodes, it never allocates, frees or looks at the
/// values stored next to the links.
///
/// # Safety
///
/// Every link passed to an `unsafe` method must stay valid and must not move
/// until it is removed from the ring again. A link must not be in two rings.
#[derive(Debug, Default)]
pub struct Ring {
    head: Option<NonNull<Link>>,
    tail: Option<NonNull<Link>>,
}

impl Ring {
    /// Creates an empty ring.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
        }
    }

    /// Resets the ring to empty without touching the links it held.
    #[inline]
    pub fn init(&mut self) {
        self.head = None;
        self.tail = None;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    #[inline]
    pub fn first(&self) -> Option<NonNull<Link>> {
        self.head
    }

    #[inline]
    pub fn last(&self) -> Option<NonNull<Link>> {
        self.tail
    }

    /// Returns the successor of `at`, where `None` is the sentinel.
    ///
    /// The successor of the sentinel is the first link.
    ///
    /// # Safety
    ///
    /// `at` must be the sentinel or a link of this ring.
    #[inline]
    pub unsafe fn next_of(&self, at: Option<NonNull<Link>>) -> Option<NonNull<Link>> {
        match at {
            Some(link) => unsafe { link.as_ref().next },
            None => self.head,
        }
    }

    /// Returns the predecessor of `at`, where `None` is the sentinel.
    ///
    /// # Safety
    ///
    /// `at` must be the sentinel or a link of this ring.
    #[inline]
    pub unsafe fn prev_of(&self, at: Option<NonNull<Link>>) -> Option<NonNull<Link>> {
        match at {
            Some(link) => unsafe { link.as_ref().prev },
            None => self.tail,
        }
    }

    /// Links `node` right after `at`. After the sentinel is the head.
    ///
    /// # Safety
    ///
    /// `node` must be unlinked, `at` must be the sentinel or a link of this ring.
    pub unsafe fn insert_after(&mut self, node: NonNull<Link>, at: Option<NonNull<Link>>) {
        unsafe {
            let next = self.next_of(at);
            self.link_between(node, at, next);
        }
    }

    /// Links `node` right before `at`. Before the sentinel is the tail.
    ///
    /// # Safety
    ///
    /// `node` must be unlinked, `at` must be the sentinel or a link of this ring.
    pub unsafe fn insert_before(&mut self, node: NonNull<Link>, at: Option<NonNull<Link>>) {
        unsafe {
            let prev = self.prev_of(at);
            self.link_between(node, prev, at);
        }
    }

    unsafe fn link_between(
        &mut self,
        mut node: NonNull<Link>,
        prev: Option<NonNull<Link>>,
        next: Option<NonNull<Link>>,
    ) {
        unsafe {
            let link = node.as_mut();
            link.prev = prev;
            link.next = next;

            match prev {
                Some(mut prev) => prev.as_mut().next = Some(node),
                None => self.head = Some(node),
            }
            match next {
                Some(mut next) => next.as_mut().prev = Some(node),
                None => self.tail = Some(node),
            }
        }
    }

    /// Unlinks `node`. Its own neighbor fields are left stale.
    ///
    /// # Safety
    ///
    /// `node` must be a link of this ring.
    pub unsafe fn remove(&mut self, node: NonNull<Link>) {
        unsafe {
            let link = node.as_ref();
            let (prev, next) = (link.prev, link.next);

            match prev {
                Some(mut prev) => prev.as_mut().next = next,
                None => self.head = next,
            }
            match next {
                Some(mut next) => next.as_mut().prev = prev,
                None => self.tail = prev,
            }
        }
    }

    /// Moves every link of this ring to the given end of `dest` and leaves
    /// this ring empty.
    pub fn splice_into(&mut self, dest: &mut Ring, end: End) {
        unsafe { self.splice_into_shared(dest, end) };
        self.init();
    }

    /// Links the whole sequence of this ring into `dest` but leaves this ring
    /// pointing at it as well.
    ///
    /// # Safety
    ///
    /// Afterwards both rings reach the same links. The caller must make sure
    /// only one of them is used to unlink or free them again, and must not
    /// relink either ring until the other one has been reset with [`Ring::init`].
    pub unsafe fn splice_into_shared(&self, dest: &mut Ring, end: End) {
        let (Some(mut first), Some(mut last)) = (self.head, self.tail) else {
            return;
        };

        unsafe {
            match end {
                End::Head => {
                    last.as_mut().next = dest.head;
                    match dest.head {
                        Some(mut head) => head.as_mut().prev = Some(last),
                        None => dest.tail = Some(last),
                    }
                    first.as_mut().prev = None;
                    dest.head = Some(first);
                }
                End::Tail => {
                    first.as_mut().prev = dest.tail;
                    match dest.tail {
                        Some(mut tail) => tail.as_mut().next = Some(first),
                        None => dest.head = Some(first),
                    }
                    last.as_mut().next = None;
                    dest.tail = Some(last);
                }
            }
        }
    }
}
