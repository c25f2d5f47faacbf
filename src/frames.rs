//! Linear-scan LRU frame table.
//!
//! The resident pages live in a `VecDeque` ordered from least recently used
//! (front) to most recently used (back). Lookup and promotion scan the deque,
//! so each reference costs O(C). For the small capacities typical of paging
//! exercises this beats any hashed structure and needs nothing beyond `Eq`
//! on the page type.

use crate::table::{Access, PageTable};
use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;

/// A capacity-bounded LRU frame table backed by a linear scan.
///
/// # Examples
///
/// ```
/// use pagefault::{Access, LinearFrames, PageTable};
///
/// let mut frames = LinearFrames::new(2);
/// assert_eq!(frames.access(1), Access::Fault { evicted: None });
/// assert_eq!(frames.access(2), Access::Fault { evicted: None });
/// assert_eq!(frames.access(1), Access::Hit);
///
/// // 2 is now least recently used and makes room for 3.
/// assert_eq!(frames.access(3), Access::Fault { evicted: Some(2) });
/// assert_eq!(frames.resident(), vec![1, 3]);
/// ```
#[derive(Clone)]
pub struct LinearFrames<P> {
    capacity: usize,
    frames: VecDeque<P>,
}

impl<P> LinearFrames<P> {
    /// Creates an empty table holding at most `capacity` pages.
    ///
    /// A capacity of zero is accepted: the table stays empty and every
    /// access faults. Storage grows with the resident set, so `capacity` is
    /// only a bound and may be as large as `usize::MAX`.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            frames: VecDeque::new(),
        }
    }

    /// Resident pages from least to most recently used, without copying.
    pub fn iter(&self) -> impl Iterator<Item = &P> + '_ {
        self.frames.iter()
    }
}

impl<P: Eq> LinearFrames<P> {
    fn position(&self, page: &P) -> Option<usize> {
        self.frames.iter().position(|resident| resident == page)
    }
}

impl<P: Eq + Clone> PageTable<P> for LinearFrames<P> {
    fn access(&mut self, page: P) -> Access<P> {
        if let Some(idx) = self.position(&page) {
            if let Some(resident) = self.frames.remove(idx) {
                self.frames.push_back(resident);
            }
            return Access::Hit;
        }

        if self.capacity == 0 {
            return Access::Fault { evicted: None };
        }

        let evicted = if self.frames.len() >= self.capacity {
            self.frames.pop_front()
        } else {
            None
        };
        self.frames.push_back(page);
        Access::Fault { evicted }
    }

    fn contains(&self, page: &P) -> bool {
        self.position(page).is_some()
    }

    #[inline]
    fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn resident(&self) -> Vec<P> {
        self.frames.iter().cloned().collect()
    }

    fn clear(&mut self) {
        self.frames.clear();
    }
}

impl<P: fmt::Debug> fmt::Debug for LinearFrames<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinearFrames")
            .field("capacity", &self.capacity)
            .field("frames", &self.frames)
            .finish()
    }
}
