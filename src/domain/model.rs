use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: HashMap<String, String>,
}

impl Record {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.data.get(field).map(String::as_str)
    }
}

/// Ordered collection of records from one source. Field order lives in
/// `headers`; the per-record maps are looked up in that order when the
/// set is serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSet {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl RecordSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Header line plus data rows, kept separate until the single write.
/// `header` carries its trailing newline; `data` has no trailing newline
/// after the last row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    pub header: String,
    pub data: String,
}

impl FileContent {
    pub fn render(&self) -> String {
        format!("{}{}", self.header, self.data)
    }
}
