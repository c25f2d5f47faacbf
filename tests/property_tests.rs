//! Property and differential tests.
//!
//! Random reference strings over a small page alphabet (so reuse is common)
//! are replayed through both frame tables and through the `lru` crate, which
//! serves as an independent LRU oracle.

use std::collections::HashSet;
use std::num::NonZeroUsize;

use pagefault::config::{Backend, SimulatorConfig};
use pagefault::{count_faults, count_faults_hashed, simulate, Access, HashedFrames, PageTable};
use proptest::prelude::*;

fn reference_strings() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..12, 0..200)
}

fn distinct(refs: &[u8]) -> usize {
    refs.iter().collect::<HashSet<_>>().len()
}

/// Replays `refs` through `lru::LruCache`, returning the fault count.
fn oracle_faults(refs: &[u8], capacity: NonZeroUsize) -> usize {
    let mut cache = lru::LruCache::new(capacity);
    let mut faults = 0;
    for &page in refs {
        if cache.get(&page).is_none() {
            faults += 1;
            cache.put(page, ());
        }
    }
    faults
}

proptest! {
    #[test]
    fn backends_agree(refs in reference_strings(), capacity in 0usize..16) {
        prop_assert_eq!(count_faults(&refs, capacity), count_faults_hashed(&refs, capacity));
    }

    #[test]
    fn matches_lru_crate(refs in reference_strings(), capacity in 1usize..16) {
        let capacity_nz = NonZeroUsize::new(capacity).unwrap();
        prop_assert_eq!(count_faults(&refs, capacity), oracle_faults(&refs, capacity_nz));
    }

    #[test]
    fn evictions_match_lru_crate(refs in reference_strings(), capacity in 1usize..8) {
        let mut oracle = lru::LruCache::new(NonZeroUsize::new(capacity).unwrap());
        let mut frames = HashedFrames::new(capacity);
        for &page in &refs {
            let expected = if oracle.get(&page).is_some() {
                Access::Hit
            } else {
                Access::Fault { evicted: oracle.push(page, ()).map(|(k, _)| k) }
            };
            prop_assert_eq!(frames.access(page), expected);
        }
    }

    #[test]
    fn faults_bounded_by_distinct_and_length(refs in reference_strings(), capacity in 1usize..16) {
        let faults = count_faults(&refs, capacity);
        prop_assert!(faults <= refs.len());
        prop_assert!(faults >= distinct(&refs));
        if !refs.is_empty() {
            prop_assert!(faults >= 1);
        }
    }

    #[test]
    fn enough_frames_means_only_cold_faults(refs in reference_strings(), extra in 0usize..4) {
        let capacity = distinct(&refs).max(1) + extra;
        prop_assert_eq!(count_faults(&refs, capacity), distinct(&refs));
    }

    #[test]
    fn zero_capacity_faults_everything(refs in reference_strings()) {
        prop_assert_eq!(count_faults(&refs, 0), refs.len());
        prop_assert_eq!(count_faults_hashed(&refs, 0), refs.len());
    }

    #[test]
    fn consecutive_repeats_fault_once(refs in reference_strings(), capacity in 1usize..8, run in 1usize..6) {
        let stretched: Vec<u8> = refs.iter().flat_map(|&p| std::iter::repeat(p).take(run)).collect();
        prop_assert_eq!(count_faults(&stretched, capacity), count_faults(&refs, capacity));
    }

    #[test]
    fn more_frames_never_fault_more(refs in reference_strings(), capacity in 0usize..15) {
        // LRU is a stack algorithm: no Belady anomaly.
        prop_assert!(count_faults(&refs, capacity + 1) <= count_faults(&refs, capacity));
    }

    #[test]
    fn trace_snapshots_hold_invariants(refs in reference_strings(), capacity in 0usize..8) {
        for backend in Backend::all() {
            let config = SimulatorConfig { capacity, backend, record_trace: true };
            let report = simulate(&refs, &config);
            prop_assert_eq!(report.trace.len(), refs.len());
            for step in &report.trace {
                prop_assert!(step.resident.len() <= capacity);
                let unique: HashSet<_> = step.resident.iter().collect();
                prop_assert_eq!(unique.len(), step.resident.len());
                if capacity > 0 {
                    prop_assert_eq!(step.resident.last(), Some(&step.page));
                }
            }
        }
    }

    #[test]
    fn simulation_is_repeatable(refs in reference_strings(), capacity in 0usize..8) {
        let config = SimulatorConfig::new(capacity);
        prop_assert_eq!(simulate(&refs, &config), simulate(&refs, &config));
    }
}
