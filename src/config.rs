//! Simulation Configuration
//!
//! Configuration structs have public fields for simple instantiation; a
//! constructor is provided for the common case.
//!
//! # Examples
//!
//! ```
//! use pagefault::config::{Backend, SimulatorConfig};
//!
//! // Linear scan, fault counts only
//! let config = SimulatorConfig::new(5);
//! assert_eq!(config.backend, Backend::Linear);
//!
//! // Hashed table with a per-step trace
//! let config = SimulatorConfig {
//!     capacity: 4096,
//!     backend: Backend::Hashed,
//!     record_trace: true,
//! };
//! ```

use core::fmt;
use core::str::FromStr;

/// Frame-table implementation used for a run.
///
/// Both backends apply the same LRU replacement and produce identical fault
/// sequences. They differ only in cost per reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Backend {
    /// [`LinearFrames`](crate::LinearFrames): O(C) scan per reference
    #[default]
    Linear,
    /// [`HashedFrames`](crate::HashedFrames): O(1) per reference
    Hashed,
}

impl Backend {
    /// Lowercase name, as accepted by `FromStr`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Linear => "linear",
            Backend::Hashed => "hashed",
        }
    }

    /// Get all available backends
    pub fn all() -> [Backend; 2] {
        [Backend::Linear, Backend::Hashed]
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown backend name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBackend;

impl fmt::Display for UnknownBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown backend, expected `linear` or `hashed`")
    }
}

impl FromStr for Backend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let is = |name: &str| s.eq_ignore_ascii_case(name);
        if is("linear") || is("scan") {
            Ok(Backend::Linear)
        } else if is("hashed") || is("hash") {
            Ok(Backend::Hashed)
        } else {
            Err(UnknownBackend)
        }
    }
}

/// Configuration for a simulation run.
///
/// # Fields
///
/// - `capacity`: Number of page frames. Zero is valid and disables caching:
///   every reference faults.
/// - `backend`: Frame-table implementation.
/// - `record_trace`: Keep a per-step snapshot of the frame table in the
///   report. Costs O(C) memory per reference.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Maximum number of resident pages.
    pub capacity: usize,
    /// Frame-table implementation.
    pub backend: Backend,
    /// Record a per-step trace.
    pub record_trace: bool,
}

impl SimulatorConfig {
    /// Linear backend without a trace.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            backend: Backend::Linear,
            record_trace: false,
        }
    }
}

impl fmt::Debug for SimulatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulatorConfig")
            .field("capacity", &self.capacity)
            .field("backend", &self.backend)
            .field("record_trace", &self.record_trace)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new_defaults() {
        let config = SimulatorConfig::new(8);
        assert_eq!(config.capacity, 8);
        assert_eq!(config.backend, Backend::Linear);
        assert!(!config.record_trace);
    }

    #[test]
    fn test_backend_parse() {
        assert_eq!("linear".parse(), Ok(Backend::Linear));
        assert_eq!(" Hashed ".parse(), Ok(Backend::Hashed));
        assert_eq!("hash".parse(), Ok(Backend::Hashed));
        assert_eq!("fifo".parse::<Backend>(), Err(UnknownBackend));
    }

    #[test]
    fn test_backend_names_round_trip() {
        for backend in Backend::all() {
            assert_eq!(backend.as_str().parse(), Ok(backend));
        }
    }
}
