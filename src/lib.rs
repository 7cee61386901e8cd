pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::faker::FakeValueSource;
pub use config::{cli::LocalStorage, seed_config::SeedConfig, ConvertConfig};
pub use core::collision::resolve_unique_path;
pub use core::content::build_file_content;
pub use core::processor::FileProcessor;
pub use core::seeder::SeedPipeline;
pub use domain::model::{FileContent, Record, RecordSet};
pub use utils::error::{CsvKitError, Result};
