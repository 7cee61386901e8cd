pub mod cli;
pub mod seed_config;

use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_non_empty_string, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "csv-kit")]
#[command(about = "Convert a CSV file into JSON records")]
pub struct ConvertConfig {
    #[arg(long, help = "Path to the CSV file to convert")]
    pub input: String,

    #[arg(long, help = "Write the JSON here instead of printing it")]
    pub output: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for ConvertConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("input", &self.input)?;
        validate_file_extension("input", &self.input, &["csv"])?;
        if let Some(output) = &self.output {
            validate_non_empty_string("output", output)?;
        }
        Ok(())
    }
}
