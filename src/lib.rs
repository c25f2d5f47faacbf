//! Page-fault counting under LRU replacement.
//!
//! Replays a reference string of page accesses against a bounded frame table
//! and counts the references that miss. The frame table evicts the least
//! recently used page whenever a faulting page needs a frame and none is free.
//!
//! ```rust
//! let refs = [1, 2, 3, 1, 4, 2];
//! // 1 2 3 fault cold, 1 hits, 4 evicts 2, 2 evicts 3
//! assert_eq!(pagefault::count_faults(&refs, 3), 5);
//! ```
//!
//! ## Frame Tables
//!
//! | Table | Lookup | Promote | Evict | Page bound |
//! |-------|--------|---------|-------|------------|
//! | [`LinearFrames`] | O(C) | O(C) | O(1) | `Eq + Clone` |
//! | [`HashedFrames`] | O(1) | O(1) | O(1) | `Hash + Eq + Clone` |
//!
//! Both implement [`PageTable`] and produce the same fault sequence for every
//! reference string. The linear table is the default: at the capacities
//! paging exercises use, a scan over a handful of frames is cheaper than
//! hashing.
//!
//! ## Traced Runs
//!
//! ```rust
//! use pagefault::config::{Backend, SimulatorConfig};
//!
//! let config = SimulatorConfig {
//!     capacity: 2,
//!     backend: Backend::Linear,
//!     record_trace: true,
//! };
//! let report = pagefault::simulate(&[7, 8, 7, 9], &config);
//! assert_eq!(report.faults(), 3);
//! assert_eq!(report.hits(), 1);
//!
//! for step in &report.trace {
//!     // frames after each reference, least recently used first
//!     let _ = (&step.page, &step.access, &step.resident);
//! }
//! assert_eq!(report.trace[3].resident, vec![7, 9]);
//! ```
//!
//! ## Capacity Zero
//!
//! A table with no frames is valid. Every reference faults and nothing is
//! ever resident, so no evictions are recorded either.
//!
//! ## Modules
//!
//! - [`table`]: The [`PageTable`] trait and [`Access`] outcome
//! - [`frames`]: Linear-scan frame table
//! - [`lru`]: Hashed O(1) frame table
//! - [`simulate`](mod@simulate): Fault counting and traced simulation
//! - [`config`]: Simulation configuration
//! - [`metrics`]: Fault counters and rate reporting

#![no_std]

extern crate alloc;

#[cfg(not(feature = "hashbrown"))]
extern crate std;

/// Frame-table trait and access outcome.
pub mod table;

/// Doubly linked recency list backing the hashed table.
///
/// **Note**: This module is internal infrastructure. It exposes raw node
/// pointers whose validity the owning table maintains.
pub(crate) mod list;

/// Linear-scan LRU frame table.
pub mod frames;

/// Hashed LRU frame table with O(1) operations.
pub mod lru;

/// Simulation configuration.
pub mod config;

/// Fault counters and reporting.
pub mod metrics;

/// Reference-string replay.
pub mod simulate;

pub use config::{Backend, SimulatorConfig};
pub use frames::LinearFrames;
pub use lru::HashedFrames;
pub use metrics::{FaultMetrics, SimulationMetrics};
pub use simulate::{count_faults, count_faults_hashed, simulate, SimulationReport, Simulator, Step};
pub use table::{Access, PageTable};
