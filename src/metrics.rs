//! Fault Metrics
//!
//! Counters collected while replaying a reference string, reported through
//! a BTreeMap so that metric keys always come out in the same order. Stable
//! ordering keeps CSV exports and test expectations reproducible across runs.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use crate::table::Access;

/// Counters for one simulation run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FaultMetrics {
    /// Total references presented to the frame table
    pub references: u64,

    /// References found resident
    pub hits: u64,

    /// References not found resident
    pub faults: u64,

    /// Faults that had to drop a resident page first
    pub evictions: u64,
}

impl FaultMetrics {
    /// All counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one access outcome into the counters.
    pub fn record<P>(&mut self, access: &Access<P>) {
        self.references += 1;
        match access {
            Access::Hit => self.hits += 1,
            Access::Fault { evicted } => {
                self.faults += 1;
                if evicted.is_some() {
                    self.evictions += 1;
                }
            }
        }
    }

    /// Fraction of references that hit, between 0.0 and 1.0.
    ///
    /// Returns 0.0 before any reference has been recorded.
    pub fn hit_rate(&self) -> f64 {
        self.ratio(self.hits)
    }

    /// Fraction of references that faulted, between 0.0 and 1.0.
    pub fn fault_rate(&self) -> f64 {
        self.ratio(self.faults)
    }

    /// Evictions per reference.
    pub fn eviction_rate(&self) -> f64 {
        self.ratio(self.evictions)
    }

    fn ratio(&self, count: u64) -> f64 {
        if self.references > 0 {
            count as f64 / self.references as f64
        } else {
            0.0
        }
    }

    /// Convert the counters and derived rates to a BTreeMap for reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("faults".to_string(), self.faults as f64);
        metrics.insert("hits".to_string(), self.hits as f64);
        metrics.insert("references".to_string(), self.references as f64);

        // Rates (0.0 to 1.0)
        metrics.insert("eviction_rate".to_string(), self.eviction_rate());
        metrics.insert("fault_rate".to_string(), self.fault_rate());
        metrics.insert("hit_rate".to_string(), self.hit_rate());

        metrics
    }
}

/// Uniform metrics reporting for anything that replays references.
pub trait SimulationMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Replacement policy name, e.g. "LRU".
    fn algorithm_name(&self) -> &'static str;
}

impl SimulationMetrics for FaultMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_metrics() {
        let metrics = FaultMetrics::new();
        assert_eq!(metrics.hit_rate(), 0.0);
        assert_eq!(metrics.fault_rate(), 0.0);
        let map = metrics.metrics();
        assert_eq!(map.get("references"), Some(&0.0));
        assert_eq!(map.get("faults"), Some(&0.0));
    }

    #[test]
    fn test_record_counts_each_outcome() {
        let mut metrics = FaultMetrics::new();
        metrics.record(&Access::<u32>::Fault { evicted: None });
        metrics.record(&Access::<u32>::Hit);
        metrics.record(&Access::Fault { evicted: Some(3u32) });
        metrics.record(&Access::<u32>::Hit);

        assert_eq!(metrics.references, 4);
        assert_eq!(metrics.hits, 2);
        assert_eq!(metrics.faults, 2);
        assert_eq!(metrics.evictions, 1);
        assert_eq!(metrics.hit_rate(), 0.5);
        assert_eq!(metrics.eviction_rate(), 0.25);
    }

    #[test]
    fn test_metrics_keys_are_sorted() {
        let metrics = FaultMetrics::new();
        let keys: alloc::vec::Vec<_> = metrics.metrics().into_keys().collect();
        assert_eq!(
            keys,
            [
                "eviction_rate",
                "evictions",
                "fault_rate",
                "faults",
                "hit_rate",
                "hits",
                "references"
            ]
        );
        assert_eq!(metrics.algorithm_name(), "LRU");
    }
}
