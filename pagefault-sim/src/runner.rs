//! Simulation runner
//!
//! Resolves the reference string, replays it through the chosen frame table
//! and times the replay. Input I/O is excluded from the measured duration.

use std::time::Instant;

use pagefault::{simulate, SimulatorConfig};
use tracing::{debug, info};

use crate::error::Result;
use crate::input::{parse_references, read_references};
use crate::models::{ReferenceSource, RunConfig, RunResult};

/// Materialise the pages named by `source`
pub fn load_references(source: &ReferenceSource) -> Result<Vec<i64>> {
    match source {
        ReferenceSource::Inline(text) => parse_references(text),
        ReferenceSource::File(path) => read_references(path),
        ReferenceSource::Pages(pages) => Ok(pages.clone()),
    }
}

/// Runs the simulation described by `config`
pub struct SimulationRunner {
    config: RunConfig,
}

impl SimulationRunner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn run(&self) -> Result<RunResult> {
        let references = load_references(&self.config.source)?;
        debug!(references = references.len(), "loaded reference string");

        let sim_config = SimulatorConfig {
            capacity: self.config.capacity,
            backend: self.config.backend,
            record_trace: self.config.needs_trace(),
        };

        let start = Instant::now();
        let report = simulate(&references, &sim_config);
        let duration = start.elapsed();

        info!(
            capacity = report.capacity,
            backend = self.config.backend.as_str(),
            faults = report.faults(),
            hits = report.hits(),
            elapsed_us = duration.as_micros() as u64,
            "simulation finished"
        );

        Ok(RunResult {
            references,
            capacity: report.capacity,
            backend: self.config.backend,
            metrics: report.metrics,
            resident: report.resident,
            trace: report.trace,
            duration,
        })
    }
}
