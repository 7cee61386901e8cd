use crate::core::collision::resolve_unique_path;
use crate::core::content::{build_file_content, DEFAULT_DELIMITER};
use crate::core::{Record, Result, SeedConfigProvider, ValueSource};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const SEED_FILE_NAME: &str = "Account_Data.csv";

pub const ACCOUNT_HEADERS: [&str; 5] = [
    "accountName",
    "accountNumber",
    "amount",
    "firstName",
    "email",
];

/// Generates N synthetic account records and writes them as delimited text
/// to a path that never overwrites an existing file. Everything here is
/// synchronous: one existence walk, one write.
pub struct SeedPipeline<C: SeedConfigProvider, V: ValueSource> {
    config: C,
    source: V,
}

impl<C: SeedConfigProvider, V: ValueSource> SeedPipeline<C, V> {
    pub fn new(config: C, source: V) -> Self {
        Self { config, source }
    }

    pub fn run(&mut self) -> Result<PathBuf> {
        let count = self.config.record_count();
        tracing::info!("Generating {} records", count);

        let records: Vec<Record> = (0..count).map(|_| self.create_record()).collect();

        let headers: Vec<String> = ACCOUNT_HEADERS.iter().map(|h| h.to_string()).collect();
        let content = build_file_content(&headers, &records, DEFAULT_DELIMITER)?;

        let output_dir = Path::new(self.config.output_path());
        fs::create_dir_all(output_dir)?;

        let candidate = output_dir.join(SEED_FILE_NAME);
        let target = resolve_unique_path(&candidate, |path| path.exists())?;

        tracing::debug!("Writing {} rows to {}", count, target.display());
        fs::write(&target, content.render())?;

        Ok(target)
    }

    fn create_record(&mut self) -> Record {
        let account_name = self.source.account_name();
        let account_number = self.source.account_number();
        let amount = self.source.amount();
        let first_name = self.source.first_name();
        let email = self.source.email(&first_name);

        let mut data = HashMap::new();
        data.insert("accountName".to_string(), account_name);
        data.insert("accountNumber".to_string(), account_number);
        data.insert("amount".to_string(), amount);
        data.insert("firstName".to_string(), first_name);
        data.insert("email".to_string(), email);
        Record { data }
    }
}
