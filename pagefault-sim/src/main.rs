use clap::{Parser, Subcommand};
use pagefault::Backend;
use std::path::PathBuf;

use pagefault_sim::error::InputError;
use pagefault_sim::generator::{ReferenceConfig, ReferenceGenerator};
use pagefault_sim::logging;
use pagefault_sim::models::{ReferenceSource, RunConfig};
use pagefault_sim::runner::SimulationRunner;
use pagefault_sim::stats::RunStats;

/// LRU page-fault simulator CLI
///
/// Without a subcommand, replays the built-in demonstration reference string
/// with five frames and prints the fault count.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Subcommands for the CLI
#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a reference string and report page faults
    Simulate {
        /// Pages separated by commas or spaces, e.g. "7,0,1,2,0,3"
        #[arg(short, long, value_name = "PAGES", conflicts_with = "input")]
        refs: Option<String>,

        /// File holding the reference string
        #[arg(short, long, value_name = "PATH")]
        input: Option<PathBuf>,

        /// Number of page frames
        #[arg(short, long, default_value = "3")]
        capacity: usize,

        /// Frame table implementation (linear, hashed)
        #[arg(short, long, default_value = "linear", value_parser = parse_backend)]
        backend: Backend,

        /// Print the frame table after every reference
        #[arg(long)]
        trace: bool,

        /// Export the per-step frame table to a CSV file
        #[arg(long, value_name = "PATH")]
        output_csv: Option<PathBuf>,
    },

    /// Generate a random reference string
    Generate {
        /// Number of references
        #[arg(short, long, default_value = "20")]
        length: usize,

        /// Smallest page number (inclusive)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        min: i64,

        /// Largest page number (inclusive)
        #[arg(long, default_value = "9", allow_negative_numbers = true)]
        max: i64,

        /// Seed for a reproducible string
        #[arg(short, long)]
        seed: Option<u64>,

        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("warn");

    let args = Args::parse();

    match args.command {
        None => {
            println!("{}", demo_faults()?);
            Ok(())
        }

        Some(Commands::Simulate {
            refs,
            input,
            capacity,
            backend,
            trace,
            output_csv,
        }) => {
            let config = RunConfig {
                source: reference_source(refs, input)?,
                capacity,
                backend,
                show_trace: trace,
                output_csv,
            };
            run_simulator(config)
        }

        Some(Commands::Generate {
            length,
            min,
            max,
            seed,
            output,
        }) => {
            let config = ReferenceConfig {
                length,
                min_page: min,
                max_page: max,
                seed,
                output,
            };
            ReferenceGenerator::new(config)?.write()?;
            Ok(())
        }
    }
}

/// Fault count of the built-in demonstration run
fn demo_faults() -> Result<u64, InputError> {
    Ok(SimulationRunner::new(RunConfig::demo()).run()?.faults())
}

fn reference_source(
    refs: Option<String>,
    input: Option<PathBuf>,
) -> Result<ReferenceSource, InputError> {
    match (refs, input) {
        (Some(text), _) => Ok(ReferenceSource::Inline(text)),
        (None, Some(path)) => Ok(ReferenceSource::File(path)),
        (None, None) => Err(InputError::MissingReferences),
    }
}

fn parse_backend(name: &str) -> Result<Backend, String> {
    name.parse().map_err(|e: pagefault::config::UnknownBackend| e.to_string())
}

fn run_simulator(config: RunConfig) -> Result<(), Box<dyn std::error::Error>> {
    let output_csv = config.output_csv.clone();
    let show_trace = config.show_trace;

    let result = SimulationRunner::new(config).run()?;
    let stats = RunStats::new(&result);

    if show_trace {
        stats.print_trace();
    }
    stats.print_summary();

    if let Some(path) = output_csv {
        stats.export_csv(&path)?;
        println!("\nTrace exported to {}", path.display());
    }

    Ok(())
}
