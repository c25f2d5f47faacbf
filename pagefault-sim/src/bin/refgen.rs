use clap::Parser;
use pagefault_sim::generator::{ReferenceConfig, ReferenceGenerator};
use pagefault_sim::logging;
use std::path::PathBuf;

/// Random reference-string generator for page-fault simulations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
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

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("info");

    let args = Args::parse();

    let config = ReferenceConfig {
        length: args.length,
        min_page: args.min,
        max_page: args.max,
        seed: args.seed,
        output: args.output,
    };

    ReferenceGenerator::new(config)?.write()?;

    Ok(())
}
