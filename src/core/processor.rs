use crate::core::{Record, RecordSet, Result};
use std::collections::HashMap;

/// Reads raw CSV bytes and converts them into a record set keyed by the
/// header row.
#[derive(Debug, Clone, Default)]
pub struct FileProcessor;

impl FileProcessor {
    pub fn new() -> Self {
        Self
    }

    /// One entry per data row, keyed by header names. Empty input (or a
    /// header with no data rows) yields an empty set; malformed rows fail
    /// with the underlying parse error.
    pub async fn process(&self, raw: &[u8]) -> Result<RecordSet> {
        let mut reader = csv::ReaderBuilder::new().from_reader(raw);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        // 累加器每次呼叫都重新配置，不跨呼叫共用
        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let mut data = HashMap::new();
            for (header, value) in headers.iter().zip(row.iter()) {
                data.insert(header.clone(), value.to_string());
            }
            records.push(Record { data });
        }

        tracing::debug!("Parsed {} records from {} bytes", records.len(), raw.len());

        Ok(RecordSet { headers, records })
    }
}
