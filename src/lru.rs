//! Hashed LRU Frame Table
//!
//! This module provides an LRU frame table with O(1) lookup, promotion and
//! eviction, for reference strings replayed against large capacities where
//! the linear scan of [`LinearFrames`](crate::LinearFrames) becomes the
//! bottleneck.
//!
//! # Algorithm
//!
//! Resident pages are kept in a doubly linked [`RecencyList`] with the most
//! recently used page at the front. A hash map from page to list node gives
//! constant-time membership tests, and a hit relinks the node to the front
//! without any scan. On a fault with a full table the node at the back of
//! the list is unlinked and its page removed from the map.
//!
//! The fault sequence is identical to the linear table for every reference
//! string; only the cost per reference differs.
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**: O(1) expected per reference
//! - **Space Complexity**: O(C), roughly one map slot and one list node per
//!   resident page
//!
//! # Thread Safety
//!
//! The table is not thread-safe. A simulation owns its table exclusively.

use crate::list::{Node, RecencyList};
use crate::table::{Access, PageTable};
use alloc::vec::Vec;
use core::fmt;
use core::hash::{BuildHasher, Hash};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// An LRU frame table with O(1) operations.
///
/// # Safety
///
/// `map` stores raw pointers into `list`. A pointer is valid as long as:
/// - it was returned by the list's `push_front`
/// - its node has not been popped from the list
/// - the table has not been cleared or dropped
///
/// Every pop from the list removes the matching map entry first, which keeps
/// those conditions true for every pointer reachable from `map`.
///
/// # Examples
///
/// ```
/// use pagefault::{Access, HashedFrames, PageTable};
///
/// let mut frames = HashedFrames::new(2);
/// frames.access("apple");
/// frames.access("banana");
/// assert_eq!(frames.access("apple"), Access::Hit);
/// assert_eq!(frames.access("cherry"), Access::Fault { evicted: Some("banana") });
/// assert_eq!(frames.resident(), vec!["apple", "cherry"]);
/// ```
pub struct HashedFrames<P, S = DefaultHashBuilder> {
    capacity: usize,
    list: RecencyList<P>,
    map: HashMap<P, *mut Node<P>, S>,
}

// SAFETY: the table owns every node its raw pointers refer to.
unsafe impl<P: Send, S: Send> Send for HashedFrames<P, S> {}

// SAFETY: all mutation goes through &mut self.
unsafe impl<P: Sync, S: Sync> Sync for HashedFrames<P, S> {}

impl<P: Hash + Eq> HashedFrames<P> {
    /// Creates an empty table holding at most `capacity` pages.
    ///
    /// A capacity of zero is accepted: the table stays empty and every
    /// access faults.
    pub fn new(capacity: usize) -> HashedFrames<P, DefaultHashBuilder> {
        HashedFrames::with_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<P: Hash + Eq, S: BuildHasher> HashedFrames<P, S> {
    /// Creates an empty table using `hash_builder` for the page index.
    pub fn with_hasher(capacity: usize, hash_builder: S) -> Self {
        HashedFrames {
            capacity,
            list: RecencyList::new(),
            map: HashMap::with_hasher(hash_builder),
        }
    }

    /// Resident pages from least to most recently used, without copying.
    pub fn iter(&self) -> impl Iterator<Item = &P> + '_ {
        self.list.iter_lru()
    }

    fn evict_lru(&mut self) -> Option<P> {
        let victim = self.list.pop_back()?;
        self.map.remove(&victim);
        Some(victim)
    }
}

impl<P: Hash + Eq + Clone, S: BuildHasher> PageTable<P> for HashedFrames<P, S> {
    fn access(&mut self, page: P) -> Access<P> {
        if let Some(&node) = self.map.get(&page) {
            // SAFETY: node comes from our map, so it is linked into `list`.
            unsafe { self.list.move_to_front(node) };
            return Access::Hit;
        }

        if self.capacity == 0 {
            return Access::Fault { evicted: None };
        }

        let evicted = if self.map.len() >= self.capacity {
            self.evict_lru()
        } else {
            None
        };

        let node = self.list.push_front(page.clone());
        self.map.insert(page, node);
        Access::Fault { evicted }
    }

    #[inline]
    fn contains(&self, page: &P) -> bool {
        self.map.contains_key(page)
    }

    #[inline]
    fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn resident(&self) -> Vec<P> {
        self.list.iter_lru().cloned().collect()
    }

    fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
    }
}

impl<P: fmt::Debug, S> fmt::Debug for HashedFrames<P, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedFrames")
            .field("capacity", &self.capacity)
            .field("frames", &self.list)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;

    #[test]
    fn test_hashed_fault_then_hit() {
        let mut frames = HashedFrames::new(2);
        assert_eq!(frames.access("apple"), Access::Fault { evicted: None });
        assert_eq!(frames.access("banana"), Access::Fault { evicted: None });
        assert_eq!(frames.access("apple"), Access::Hit);
        assert_eq!(frames.access("banana"), Access::Hit);
        assert_eq!(frames.len(), 2);
    }

    #[test]
    fn test_hashed_evicts_least_recent() {
        let mut frames = HashedFrames::new(2);
        frames.access("apple");
        frames.access("banana");
        frames.access("apple");
        assert_eq!(
            frames.access("cherry"),
            Access::Fault {
                evicted: Some("banana")
            }
        );
        assert!(!frames.contains(&"banana"));
        assert!(frames.contains(&"apple"));
        assert!(frames.contains(&"cherry"));
        assert_eq!(frames.resident(), vec!["apple", "cherry"]);
    }

    #[test]
    fn test_hashed_capacity_is_respected() {
        let mut frames = HashedFrames::new(3);
        for page in 0..100u32 {
            frames.access(page);
            assert!(frames.len() <= 3);
        }
        assert_eq!(frames.resident(), vec![97, 98, 99]);
    }

    #[test]
    fn test_hashed_zero_capacity() {
        let mut frames = HashedFrames::new(0);
        assert_eq!(frames.access(1), Access::Fault { evicted: None });
        assert_eq!(frames.access(1), Access::Fault { evicted: None });
        assert!(frames.is_empty());
        assert!(frames.resident().is_empty());
    }

    #[test]
    fn test_hashed_string_pages() {
        let mut frames = HashedFrames::new(1);
        let a = String::from("a");
        let b = String::from("b");
        frames.access(a.clone());
        assert_eq!(frames.access(a.clone()), Access::Hit);
        assert_eq!(
            frames.access(b.clone()),
            Access::Fault {
                evicted: Some(a.clone())
            }
        );
        assert_eq!(frames.resident(), vec![b]);
    }

    #[test]
    fn test_hashed_clear_and_reuse() {
        let mut frames = HashedFrames::new(2);
        frames.access(1);
        frames.access(2);
        frames.clear();
        assert!(frames.is_empty());
        assert_eq!(frames.access(1), Access::Fault { evicted: None });
        assert_eq!(frames.access(3), Access::Fault { evicted: None });
        assert_eq!(frames.access(4), Access::Fault { evicted: Some(1) });
    }

    #[test]
    fn test_hashed_custom_hasher() {
        let mut frames: HashedFrames<u8, DefaultHashBuilder> =
            HashedFrames::with_hasher(2, DefaultHashBuilder::default());
        frames.access(1);
        frames.access(2);
        frames.access(1);
        assert_eq!(frames.access(3), Access::Fault { evicted: Some(2) });
    }
}
