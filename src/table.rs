//! The frame-table seam shared by every LRU backend.
//!
//! A frame table holds at most `capacity` distinct pages ordered by recency.
//! Each reference either hits (the page is promoted to most recently used)
//! or faults (the page is inserted at the most-recently-used end, evicting
//! the least recently used page first when the table is full).

use alloc::vec::Vec;

/// Outcome of presenting a single page reference to a frame table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access<P> {
    /// The page was resident and has been promoted to most recently used.
    Hit,
    /// The page was not resident.
    ///
    /// `evicted` carries the least-recently-used page that was dropped to
    /// make room, if the table was full.
    Fault {
        /// Page evicted to make room for the faulting page.
        evicted: Option<P>,
    },
}

impl<P> Access<P> {
    /// True if the page was already resident.
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Access::Hit)
    }

    /// True if the page had to be brought in.
    #[inline]
    pub fn is_fault(&self) -> bool {
        !self.is_hit()
    }

    /// The page evicted by this access, if any.
    #[inline]
    pub fn evicted(&self) -> Option<&P> {
        match self {
            Access::Fault { evicted } => evicted.as_ref(),
            Access::Hit => None,
        }
    }
}

/// A bounded, recency-ordered set of resident pages under LRU replacement.
///
/// Implementations must keep `len() <= capacity()` and must never hold the
/// same page twice. With a capacity of zero every access faults and nothing
/// is retained.
pub trait PageTable<P> {
    /// Presents one reference and applies the LRU update for it.
    fn access(&mut self, page: P) -> Access<P>;

    /// Returns true if `page` is resident. Does not touch recency.
    fn contains(&self, page: &P) -> bool;

    /// Number of resident pages.
    fn len(&self) -> usize;

    /// Returns true if no page is resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of resident pages.
    fn capacity(&self) -> usize;

    /// Resident pages ordered from least to most recently used.
    fn resident(&self) -> Vec<P>;

    /// Drops every resident page.
    fn clear(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_accessors() {
        let hit: Access<u32> = Access::Hit;
        assert!(hit.is_hit());
        assert!(!hit.is_fault());
        assert_eq!(hit.evicted(), None);

        let cold: Access<u32> = Access::Fault { evicted: None };
        assert!(cold.is_fault());
        assert_eq!(cold.evicted(), None);

        let replaced = Access::Fault { evicted: Some(7u32) };
        assert!(replaced.is_fault());
        assert_eq!(replaced.evicted(), Some(&7));
    }
}
