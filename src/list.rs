use alloc::boxed::Box;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr::{self, NonNull};

/// A node in the recency list.
///
/// Holds one resident page and the links to its neighbours. Nodes are only
/// ever created and freed by [`RecencyList`].
pub struct Node<T> {
    /// The page held by this node. Sigil nodes leave this uninitialized.
    val: mem::MaybeUninit<T>,
    /// Neighbour on the more-recently-used side.
    prev: *mut Node<T>,
    /// Neighbour on the less-recently-used side.
    next: *mut Node<T>,
}

impl<T> Node<T> {
    fn new(val: T) -> Self {
        Node {
            val: mem::MaybeUninit::new(val),
            prev: ptr::null_mut(),
            next: ptr::null_mut(),
        }
    }

    fn new_sigil() -> Self {
        Node {
            val: mem::MaybeUninit::uninit(),
            prev: ptr::null_mut(),
            next: ptr::null_mut(),
        }
    }

    /// Returns the page stored in this node.
    ///
    /// # Safety
    ///
    /// Must not be called on a sigil node.
    pub unsafe fn value(&self) -> &T {
        // SAFETY: caller guarantees this is a non-sigil node, whose value is
        // always initialized by `Node::new`.
        unsafe { self.val.assume_init_ref() }
    }

    /// Moves the page out of this node, consuming it.
    ///
    /// # Safety
    ///
    /// Must not be called on a sigil node.
    unsafe fn into_value(self: Box<Self>) -> T {
        // SAFETY: caller guarantees this is a non-sigil node.
        unsafe { self.val.assume_init_read() }
    }
}

/// Doubly linked list ordering resident pages by recency.
///
/// The front (just after the head sigil) is the most recently used page and
/// the back (just before the tail sigil) is the least recently used one.
/// Promotion and eviction are both O(1) given a node pointer.
///
/// The list hands out raw node pointers from [`RecencyList::push_front`].
/// A pointer stays valid until the node is removed with
/// [`RecencyList::pop_back`], the list is cleared, or the list is dropped.
pub struct RecencyList<T> {
    len: usize,
    head: *mut Node<T>,
    tail: *mut Node<T>,
}

impl<T> RecencyList<T> {
    /// Creates an empty list with its two sigil nodes linked together.
    pub fn new() -> Self {
        let head = Box::into_raw(Box::new(Node::new_sigil()));
        let tail = Box::into_raw(Box::new(Node::new_sigil()));

        // SAFETY: head and tail were just allocated and are valid.
        unsafe {
            (*head).next = tail;
            (*tail).prev = head;
        }

        RecencyList { len: 0, head, tail }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a page at the most-recently-used end and returns its node.
    pub fn push_front(&mut self, v: T) -> *mut Node<T> {
        let node = NonNull::from(Box::leak(Box::new(Node::new(v)))).as_ptr();
        // SAFETY: node is freshly allocated and not linked into any list.
        unsafe { self.attach_front(node) };
        self.len += 1;
        node
    }

    /// Unlinks and returns the least recently used page.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is non-empty, so tail.prev is a real node owned by
        // this list and allocated through `Box` in `push_front`.
        unsafe {
            let last = (*self.tail).prev;
            self.detach(last);
            self.len -= 1;
            Some(Box::from_raw(last).into_value())
        }
    }

    /// Promotes `node` to the most-recently-used end.
    ///
    /// # Safety
    ///
    /// `node` must have been returned by `push_front` on this list and not
    /// yet removed.
    pub unsafe fn move_to_front(&mut self, node: *mut Node<T>) {
        // SAFETY: caller guarantees node is linked into this list.
        unsafe {
            if (*self.head).next == node {
                return;
            }
            self.detach(node);
            self.attach_front(node);
        }
    }

    /// Iterates from the least recently used page to the most recently used.
    pub fn iter_lru(&self) -> IterLru<'_, T> {
        IterLru {
            // SAFETY: tail is valid for the lifetime of the list.
            cursor: unsafe { (*self.tail).prev },
            head: self.head,
            remaining: self.len,
            _marker: PhantomData,
        }
    }

    /// Removes every page, keeping the sigils.
    pub fn clear(&mut self) {
        while self.pop_back().is_some() {}
    }

    unsafe fn detach(&mut self, node: *mut Node<T>) {
        // SAFETY: caller guarantees node is linked, so both neighbours exist.
        unsafe {
            (*(*node).prev).next = (*node).next;
            (*(*node).next).prev = (*node).prev;
        }
    }

    unsafe fn attach_front(&mut self, node: *mut Node<T>) {
        // SAFETY: head is valid; caller guarantees node is not linked.
        unsafe {
            (*node).next = (*self.head).next;
            (*node).prev = self.head;
            (*self.head).next = node;
            (*(*node).next).prev = node;
        }
    }
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RecencyList<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: the sigils were allocated in `new` and are freed only here.
        unsafe {
            drop(Box::from_raw(self.head));
            drop(Box::from_raw(self.tail));
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RecencyList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter_lru()).finish()
    }
}

/// Iterator returned by [`RecencyList::iter_lru`].
pub struct IterLru<'a, T> {
    cursor: *mut Node<T>,
    head: *mut Node<T>,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<'a, T> Iterator for IterLru<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.cursor == self.head {
            return None;
        }
        // SAFETY: cursor walks real nodes between the sigils; the borrow on
        // the list prevents mutation while this iterator is alive.
        unsafe {
            let node = &*self.cursor;
            self.cursor = node.prev;
            self.remaining -= 1;
            Some(node.value())
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterLru<'_, T> {}

impl<T> fmt::Debug for IterLru<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterLru")
            .field("remaining", &self.remaining)
            .finish()
    }
}
