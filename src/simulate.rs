//! Replaying reference strings against a frame table.
//!
//! [`count_faults`] is the plain fold: one pass over the references, one
//! counter. [`Simulator`] does the same fold while keeping [`FaultMetrics`]
//! and, on request, a per-step [`Step`] trace of the frame table.

use crate::config::{Backend, SimulatorConfig};
use crate::frames::LinearFrames;
use crate::lru::HashedFrames;
use crate::metrics::FaultMetrics;
use crate::table::{Access, PageTable};
use alloc::vec::Vec;
use core::hash::Hash;
use core::marker::PhantomData;
use tracing::{debug, trace};

/// Counts the page faults LRU replacement incurs on `references` with
/// `capacity` frames.
///
/// Uses the linear-scan table, O(N·C). A capacity of zero makes every
/// reference fault.
///
/// # Examples
///
/// ```
/// let refs = [6, 5, 20, 15, 18, 16, 3, 5, 13, 20, 5, 14];
/// assert_eq!(pagefault::count_faults(&refs, 5), 11);
/// assert_eq!(pagefault::count_faults(&[1, 1, 1, 1], 1), 1);
/// ```
pub fn count_faults<P: Eq + Clone>(references: &[P], capacity: usize) -> usize {
    let mut frames = LinearFrames::new(capacity);
    references
        .iter()
        .filter(|&page| frames.access(page.clone()).is_fault())
        .count()
}

/// Same result as [`count_faults`], using the O(1) hashed table.
pub fn count_faults_hashed<P: Hash + Eq + Clone>(references: &[P], capacity: usize) -> usize {
    let mut frames = HashedFrames::new(capacity);
    references
        .iter()
        .filter(|&page| frames.access(page.clone()).is_fault())
        .count()
}

/// Runs `references` under `config` and returns the full report.
///
/// # Examples
///
/// ```
/// use pagefault::config::{Backend, SimulatorConfig};
///
/// let config = SimulatorConfig {
///     capacity: 2,
///     backend: Backend::Hashed,
///     record_trace: true,
/// };
/// let report = pagefault::simulate(&[1, 2, 1, 3], &config);
/// assert_eq!(report.faults(), 3);
/// assert_eq!(report.trace[3].resident, vec![1, 3]);
/// ```
pub fn simulate<P: Hash + Eq + Clone>(
    references: &[P],
    config: &SimulatorConfig,
) -> SimulationReport<P> {
    debug!(
        capacity = config.capacity,
        backend = config.backend.as_str(),
        references = references.len(),
        "starting simulation"
    );
    let refs = references.iter().cloned();
    match config.backend {
        Backend::Linear => {
            Simulator::with_config(LinearFrames::new(config.capacity), config).run(refs)
        }
        Backend::Hashed => {
            Simulator::with_config(HashedFrames::new(config.capacity), config).run(refs)
        }
    }
}

/// One processed reference and the state it left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<P> {
    /// Zero-based position in the reference string
    pub index: usize,
    /// The referenced page
    pub page: P,
    /// Whether it hit or faulted, and what it evicted
    pub access: Access<P>,
    /// Frame contents after this step, least recently used first
    pub resident: Vec<P>,
}

/// Outcome of a completed simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport<P> {
    /// Frame count the run used
    pub capacity: usize,
    /// Collected counters
    pub metrics: FaultMetrics,
    /// Frame contents at the end of the run, least recently used first
    pub resident: Vec<P>,
    /// Per-step trace; empty unless tracing was enabled
    pub trace: Vec<Step<P>>,
}

impl<P> SimulationReport<P> {
    /// Number of references that faulted.
    #[inline]
    pub fn faults(&self) -> u64 {
        self.metrics.faults
    }

    /// Number of references that hit.
    #[inline]
    pub fn hits(&self) -> u64 {
        self.metrics.hits
    }

    /// Number of faults that evicted a resident page.
    #[inline]
    pub fn evictions(&self) -> u64 {
        self.metrics.evictions
    }

    /// Number of references processed.
    #[inline]
    pub fn references(&self) -> u64 {
        self.metrics.references
    }
}

/// Drives a frame table one reference at a time.
///
/// The simulator owns its table for the duration of a run; nothing else can
/// observe or mutate the frames until [`Simulator::finish`] hands back the
/// report.
///
/// # Examples
///
/// ```
/// use pagefault::{Access, LinearFrames, Simulator};
///
/// let mut sim = Simulator::new(LinearFrames::new(1));
/// assert!(sim.step(7).is_fault());
/// assert_eq!(sim.step(7), Access::Hit);
/// assert_eq!(sim.finish().faults(), 1);
/// ```
#[derive(Debug)]
pub struct Simulator<P, T> {
    table: T,
    metrics: FaultMetrics,
    trace: Option<Vec<Step<P>>>,
    next_index: usize,
    _page: PhantomData<P>,
}

impl<P: Clone, T: PageTable<P>> Simulator<P, T> {
    /// Wraps `table` without recording a trace.
    pub fn new(table: T) -> Self {
        Self {
            table,
            metrics: FaultMetrics::new(),
            trace: None,
            next_index: 0,
            _page: PhantomData,
        }
    }

    /// Wraps `table` and records a [`Step`] for every reference.
    pub fn with_trace(table: T) -> Self {
        Self {
            trace: Some(Vec::new()),
            ..Self::new(table)
        }
    }

    fn with_config(table: T, config: &SimulatorConfig) -> Self {
        if config.record_trace {
            Self::with_trace(table)
        } else {
            Self::new(table)
        }
    }

    /// Presents one reference to the table.
    pub fn step(&mut self, page: P) -> Access<P> {
        let index = self.next_index;
        self.next_index += 1;
        let access = match self.trace.as_mut() {
            Some(trace) => {
                let access = self.table.access(page.clone());
                trace.push(Step {
                    index,
                    page,
                    access: access.clone(),
                    resident: self.table.resident(),
                });
                access
            }
            None => self.table.access(page),
        };
        self.metrics.record(&access);
        trace!(
            index,
            fault = access.is_fault(),
            evicted = access.evicted().is_some(),
            resident = self.table.len(),
            "reference processed"
        );
        access
    }

    /// Processes every reference and returns the report.
    pub fn run<I: IntoIterator<Item = P>>(mut self, references: I) -> SimulationReport<P> {
        for page in references {
            self.step(page);
        }
        self.finish()
    }

    /// Counters collected so far.
    #[inline]
    pub fn metrics(&self) -> &FaultMetrics {
        &self.metrics
    }

    /// The frame table in its current state.
    #[inline]
    pub fn table(&self) -> &T {
        &self.table
    }

    /// Ends the run, releasing the table.
    pub fn finish(self) -> SimulationReport<P> {
        debug!(
            references = self.metrics.references,
            faults = self.metrics.faults,
            hits = self.metrics.hits,
            evictions = self.metrics.evictions,
            "simulation finished"
        );
        SimulationReport {
            capacity: self.table.capacity(),
            metrics: self.metrics,
            resident: self.table.resident(),
            trace: self.trace.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    const DEMO: [i64; 12] = [6, 5, 20, 15, 18, 16, 3, 5, 13, 20, 5, 14];

    #[test]
    fn test_count_faults_demo_string() {
        assert_eq!(count_faults(&DEMO, 5), 11);
        assert_eq!(count_faults_hashed(&DEMO, 5), 11);
        // One more frame keeps 5 resident across its first reuse.
        assert_eq!(count_faults(&DEMO, 6), 10);
    }

    #[test]
    fn test_count_faults_small_scenarios() {
        assert_eq!(count_faults(&[1, 1, 1, 1], 1), 1);
        assert_eq!(count_faults(&[1, 2, 3, 4], 2), 4);
        assert_eq!(count_faults::<u8>(&[], 3), 0);
    }

    #[test]
    fn test_count_faults_zero_capacity() {
        assert_eq!(count_faults(&[1, 1, 2, 2], 0), 4);
        assert_eq!(count_faults_hashed(&[1, 1, 2, 2], 0), 4);
    }

    #[test]
    fn test_count_faults_is_repeatable() {
        let first = count_faults(&DEMO, 3);
        let second = count_faults(&DEMO, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_simulate_report_counters() {
        let report = simulate(&DEMO, &SimulatorConfig::new(5));
        assert_eq!(report.capacity, 5);
        assert_eq!(report.references(), 12);
        assert_eq!(report.faults(), 11);
        assert_eq!(report.hits(), 1);
        assert_eq!(report.evictions(), 6);
        assert_eq!(report.resident, vec![3, 13, 20, 5, 14]);
        assert!(report.trace.is_empty());
    }

    #[test]
    fn test_simulate_trace_snapshots() {
        let config = SimulatorConfig {
            capacity: 2,
            backend: Backend::Linear,
            record_trace: true,
        };
        let report = simulate(&[1, 2, 1, 3, 2], &config);
        assert_eq!(report.trace.len(), 5);

        let snapshots: Vec<Vec<i32>> = report.trace.iter().map(|s| s.resident.clone()).collect();
        assert_eq!(
            snapshots,
            vec![vec![1], vec![1, 2], vec![2, 1], vec![1, 3], vec![3, 2]]
        );
        assert_eq!(report.trace[2].access, Access::Hit);
        assert_eq!(report.trace[3].access, Access::Fault { evicted: Some(2) });
        assert_eq!(report.trace[4].access, Access::Fault { evicted: Some(1) });
        assert_eq!(report.trace[4].index, 4);
        assert_eq!(report.trace[4].page, 2);
    }

    #[test]
    fn test_simulate_backends_agree() {
        for backend in Backend::all() {
            let config = SimulatorConfig {
                capacity: 3,
                backend,
                record_trace: true,
            };
            let report = simulate(&DEMO, &config);
            assert_eq!(report.faults() as usize, count_faults(&DEMO, 3), "{backend}");
        }
    }

    #[test]
    fn test_simulator_step_by_step() {
        let mut sim = Simulator::new(HashedFrames::new(2));
        assert!(sim.step('a').is_fault());
        assert!(sim.step('b').is_fault());
        assert_eq!(sim.step('a'), Access::Hit);
        assert_eq!(sim.step('c'), Access::Fault { evicted: Some('b') });
        assert_eq!(sim.metrics().faults, 3);
        assert_eq!(sim.table().resident(), vec!['a', 'c']);
    }

    #[test]
    fn test_step_indices_count_from_zero() {
        let mut sim = Simulator::with_trace(LinearFrames::new(1));
        for page in [3, 3, 4] {
            sim.step(page);
        }
        let report = sim.finish();
        let indices: Vec<usize> = report.trace.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(report.references(), 3);
    }
}
