use crate::core::{FileContent, Record, Result};

pub const DEFAULT_DELIMITER: &str = ",";

/// Builds delimited file content from records. Values are extracted in
/// header order (missing field -> empty string) and JSON-string-encoded so
/// the delimiter, quotes and newlines can never appear unescaped inside a
/// field. No trailing newline after the last data row.
pub fn build_file_content(
    headers: &[String],
    records: &[Record],
    delimiter: &str,
) -> Result<FileContent> {
    let header = format!("{}\n", headers.join(delimiter));

    let mut rows = Vec::with_capacity(records.len());
    for record in records {
        let mut fields = Vec::with_capacity(headers.len());
        for header in headers {
            let value = record.get(header).unwrap_or("");
            fields.push(serde_json::to_string(value)?);
        }
        rows.push(fields.join(delimiter));
    }

    Ok(FileContent {
        header,
        data: rows.join("\n"),
    })
}
