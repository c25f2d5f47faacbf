// Data models for page-fault simulation runs

use pagefault::{Access, Backend, FaultMetrics, Step};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Reference string used when no subcommand is given
pub const DEMO_REFERENCES: [i64; 12] = [6, 5, 20, 15, 18, 16, 3, 5, 13, 20, 5, 14];

/// Frame count used when no subcommand is given
pub const DEMO_CAPACITY: usize = 5;

/// Where the reference string comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceSource {
    /// Pages given directly, e.g. `--refs 1,2,3`
    Inline(String),
    /// Pages read from a file
    File(PathBuf),
    /// Pages already in memory
    Pages(Vec<i64>),
}

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: ReferenceSource,
    /// Number of page frames
    pub capacity: usize,
    /// Frame table implementation
    pub backend: Backend,
    /// Print the per-step frame table
    pub show_trace: bool,
    /// Export the per-step frame table to CSV
    pub output_csv: Option<PathBuf>,
}

impl RunConfig {
    /// The demonstration run: fixed references, five frames
    pub fn demo() -> Self {
        Self {
            source: ReferenceSource::Pages(DEMO_REFERENCES.to_vec()),
            capacity: DEMO_CAPACITY,
            backend: Backend::default(),
            show_trace: false,
            output_csv: None,
        }
    }

    /// Whether the run needs per-step snapshots
    pub fn needs_trace(&self) -> bool {
        self.show_trace || self.output_csv.is_some()
    }
}

/// Results of a simulation run
#[derive(Debug)]
pub struct RunResult {
    pub references: Vec<i64>,
    pub capacity: usize,
    pub backend: Backend,
    pub metrics: FaultMetrics,
    /// Frame contents at the end, least recently used first
    pub resident: Vec<i64>,
    /// Empty unless the run recorded a trace
    pub trace: Vec<Step<i64>>,
    pub duration: Duration,
}

impl RunResult {
    pub fn faults(&self) -> u64 {
        self.metrics.faults
    }
}

/// One CSV row of an exported trace
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CsvStepRow {
    /// One-based step number
    pub step: usize,
    pub page: i64,
    /// `hit` or `fault`
    pub result: &'static str,
    /// Evicted page, blank when nothing was evicted
    pub evicted: Option<i64>,
    /// Frame contents after the step, space separated
    pub frames: String,
}

impl From<&Step<i64>> for CsvStepRow {
    fn from(step: &Step<i64>) -> Self {
        let (result, evicted) = match step.access {
            Access::Hit => ("hit", None),
            Access::Fault { evicted } => ("fault", evicted),
        };
        Self {
            step: step.index + 1,
            page: step.page,
            result,
            evicted,
            frames: format_frames(&step.resident),
        }
    }
}

/// Space-separated frame contents
pub fn format_frames(frames: &[i64]) -> String {
    frames
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_row_from_fault_step() {
        let step = Step {
            index: 5,
            page: 16,
            access: Access::Fault { evicted: Some(6) },
            resident: vec![5, 20, 15, 18, 16],
        };
        let row = CsvStepRow::from(&step);
        assert_eq!(row.step, 6);
        assert_eq!(row.result, "fault");
        assert_eq!(row.evicted, Some(6));
        assert_eq!(row.frames, "5 20 15 18 16");
    }

    #[test]
    fn test_csv_row_from_hit_step() {
        let step = Step {
            index: 0,
            page: 1,
            access: Access::Hit,
            resident: vec![1],
        };
        let row = CsvStepRow::from(&step);
        assert_eq!(row.result, "hit");
        assert_eq!(row.evicted, None);
    }

    #[test]
    fn test_demo_config() {
        let config = RunConfig::demo();
        assert_eq!(config.capacity, 5);
        assert!(!config.needs_trace());
        assert_eq!(
            config.source,
            ReferenceSource::Pages(DEMO_REFERENCES.to_vec())
        );
    }
}
