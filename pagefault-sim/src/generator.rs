use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::error::{InputError, Result};
use crate::input::format_references;

/// Parameters for a random reference string
#[derive(Debug, Clone)]
pub struct ReferenceConfig {
    /// Number of references to produce
    pub length: usize,
    /// Smallest page number (inclusive)
    pub min_page: i64,
    /// Largest page number (inclusive)
    pub max_page: i64,
    /// Seed for a reproducible string; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Write the string here instead of stdout
    pub output: Option<PathBuf>,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            length: 20,
            min_page: 0,
            max_page: 9,
            seed: None,
            output: None,
        }
    }
}

/// Generator for random reference strings
pub struct ReferenceGenerator {
    config: ReferenceConfig,
}

impl ReferenceGenerator {
    /// Create a new generator, rejecting an inverted page range
    pub fn new(config: ReferenceConfig) -> Result<Self> {
        if config.min_page > config.max_page {
            return Err(InputError::InvalidRange {
                min: config.min_page,
                max: config.max_page,
            });
        }
        Ok(Self { config })
    }

    /// Draw the reference string
    pub fn generate(&self) -> Vec<i64> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let range = self.config.min_page..=self.config.max_page;
        (0..self.config.length)
            .map(|_| rng.gen_range(range.clone()))
            .collect()
    }

    /// Draw the reference string and write it to the configured sink
    pub fn write(&self) -> Result<Vec<i64>> {
        let pages = self.generate();
        let line = format_references(&pages);

        match &self.config.output {
            Some(path) => {
                let file = File::create(path).map_err(|e| InputError::io(path, e))?;
                let mut writer = BufWriter::new(file);
                writeln!(writer, "{line}").map_err(|e| InputError::io(path, e))?;
                writer.flush().map_err(|e| InputError::io(path, e))?;
                info!(path = %path.display(), length = pages.len(), "wrote reference string");
            }
            None => println!("{line}"),
        }
        Ok(pages)
    }
}
