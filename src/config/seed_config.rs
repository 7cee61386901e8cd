use crate::domain::ports::SeedConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_RECORD_COUNT: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "seed")]
#[command(about = "Generate a CSV file of synthetic account records")]
pub struct SeedConfig {
    // 保留原始字串：非數字的 size 要退回預設值而不是報錯
    #[arg(long, help = "Number of records to generate (default 10)")]
    pub size: Option<String>,

    #[arg(long, default_value = ".", help = "Directory the CSV is written into")]
    pub output_path: String,

    #[arg(long, help = "Seed the generator for reproducible output")]
    pub seed: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl SeedConfig {
    /// Missing or non-numeric `--size` falls back to the default count.
    pub fn record_count(&self) -> usize {
        match &self.size {
            Some(raw) => match raw.parse::<usize>() {
                Ok(count) => count,
                Err(_) => {
                    tracing::warn!(
                        "Non-numeric --size value '{}', using default of {}",
                        raw,
                        DEFAULT_RECORD_COUNT
                    );
                    DEFAULT_RECORD_COUNT
                }
            },
            None => DEFAULT_RECORD_COUNT,
        }
    }
}

impl SeedConfigProvider for SeedConfig {
    fn record_count(&self) -> usize {
        self.record_count()
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for SeedConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}
