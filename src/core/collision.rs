use crate::core::Result;
use crate::utils::error::CsvKitError;
use std::path::{Path, PathBuf};

/// Upper bound on rename attempts; a directory that keeps reporting every
/// candidate as existing would otherwise loop forever.
pub const MAX_RENAME_ATTEMPTS: usize = 10_000;

/// Mutates `candidate` until it names a non-existing file: a trailing run
/// of decimal digits in the stem is incremented, otherwise `1` is appended
/// before the extension. The existence check is injected so callers decide
/// what "exists" means (`Path::exists` in production).
///
/// `data.csv` -> `data1.csv` -> `data2.csv`; `data9.csv` -> `data10.csv`.
/// Candidates without an extension are rejected regardless of existence.
pub fn resolve_unique_path<F>(candidate: &Path, exists: F) -> Result<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    let extension = candidate
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| CsvKitError::MissingExtensionError {
            path: candidate.display().to_string(),
        })?
        .to_string();

    let mut current = candidate.to_path_buf();
    for _ in 0..MAX_RENAME_ATTEMPTS {
        if !exists(&current) {
            return Ok(current);
        }

        let stem = current
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        let next_stem = increment_stem(stem);
        current = current.with_file_name(format!("{}.{}", next_stem, extension));
    }

    Err(CsvKitError::RenameAttemptsExhaustedError {
        path: candidate.display().to_string(),
        attempts: MAX_RENAME_ATTEMPTS,
    })
}

fn increment_stem(stem: &str) -> String {
    // trailing digits are ASCII, so the byte count is also the char count
    let trailing = stem.bytes().rev().take_while(u8::is_ascii_digit).count();
    let (prefix, digits) = stem.split_at(stem.len() - trailing);

    if digits.is_empty() {
        format!("{}1", prefix)
    } else {
        // 位數太長 parse 不動就直接再補一個 1
        match digits.parse::<u64>() {
            Ok(counter) => format!("{}{}", prefix, counter + 1),
            Err(_) => format!("{}1", stem),
        }
    }
}
