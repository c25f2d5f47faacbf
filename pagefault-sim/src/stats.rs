use std::path::Path;

use pagefault::SimulationMetrics;
use tracing::info;

use crate::error::Result;
use crate::input::format_references;
use crate::models::{format_frames, CsvStepRow, RunResult};

/// Reporting for a finished run
pub struct RunStats<'a> {
    result: &'a RunResult,
}

impl<'a> RunStats<'a> {
    pub fn new(result: &'a RunResult) -> Self {
        Self { result }
    }

    /// Print the run summary; the fault count is on its own line
    pub fn print_summary(&self) {
        let r = self.result;
        let m = &r.metrics;

        println!("\nPage Fault Simulation Summary");
        println!("=============================");
        println!("Algorithm:  {} ({})", m.algorithm_name(), r.backend);
        println!("References: {}", format_references(&r.references));
        println!("Frames:     {}", r.capacity);
        println!(
            "Hits:       {} ({:.2}%)",
            m.hits,
            m.hit_rate() * 100.0
        );
        println!("Evictions:  {}", m.evictions);
        println!("Resident:   [{}]", format_frames(&r.resident));
        println!("Elapsed:    {:.3} ms", r.duration.as_secs_f64() * 1000.0);
        println!("Page faults: {}", m.faults);
    }

    /// Print the per-step frame table
    pub fn print_trace(&self) {
        println!("\n{:>5} {:>8} {:>6} {:>8}  Frames", "Step", "Page", "Result", "Evicted");
        println!("{}", "-".repeat(48));
        for step in &self.result.trace {
            let row = CsvStepRow::from(step);
            let evicted = row
                .evicted
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string());
            println!(
                "{:>5} {:>8} {:>6} {:>8}  [{}]",
                row.step, row.page, row.result, evicted, row.frames
            );
        }
    }

    /// Export the per-step frame table to CSV
    pub fn export_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for step in &self.result.trace {
            writer.serialize(CsvStepRow::from(step))?;
        }
        writer.flush().map_err(|e| crate::error::InputError::io(path, e))?;
        info!(path = %path.display(), rows = self.result.trace.len(), "exported trace");
        Ok(())
    }
}
