use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Structural problems with an uploaded metric file.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("expected a top-level JSON array of records")]
    NotAnArray,
    #[error("record {index} is not a JSON object")]
    RecordNotObject { index: usize },
    #[error("unsupported file extension: .{0} (expected .json)")]
    UnsupportedExtension(String),
}

/// One raw record: arbitrary key → value mapping.
pub type RawRecord = Map<String, JsonValue>;

// ---------------------------------------------------------------------------
// UploadedFile – a parsed but not yet normalized metric file
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    /// File name as shown to the user (no directory part).
    pub name: String,
    pub records: Vec<RawRecord>,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, records: Vec<RawRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a metric file from disk.
///
/// Expected schema (records-oriented):
///
/// ```json
/// [
///   { "EHI_before": 0.41, "EHI_after": 0.77, "EF1_before": 0.5, ... },
///   ...
/// ]
/// ```
pub fn load_file(path: &Path) -> Result<UploadedFile> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "json" {
        return Err(DataError::UnsupportedExtension(ext).into());
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let records = parse_records(&text).with_context(|| format!("parsing {name}"))?;

    log::info!("Loaded {} records from {name}", records.len());
    Ok(UploadedFile::new(name, records))
}

/// Build an upload from in-memory contents (drag-and-drop without a path).
pub fn load_bytes(name: &str, bytes: &[u8]) -> Result<UploadedFile> {
    let text = std::str::from_utf8(bytes).with_context(|| format!("{name} is not UTF-8"))?;
    let records = parse_records(text).with_context(|| format!("parsing {name}"))?;
    Ok(UploadedFile::new(name, records))
}

/// Load a whole batch.  The first failure aborts the batch.
pub fn load_batch(paths: &[impl AsRef<Path>]) -> Result<Vec<UploadedFile>> {
    paths.iter().map(|p| load_file(p.as_ref())).collect()
}

/// Parse a JSON array of flat objects.
pub fn parse_records(text: &str) -> Result<Vec<RawRecord>> {
    let root: JsonValue = serde_json::from_str(text).context("invalid JSON")?;
    let JsonValue::Array(items) = root else {
        return Err(DataError::NotAnArray.into());
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            JsonValue::Object(obj) => Ok(obj),
            _ => Err(anyhow::Error::from(DataError::RecordNotObject { index })),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_array_of_objects() {
        let records = parse_records(r#"[{"EHI_before": 0.2}, {"note": "x"}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["EHI_before"], serde_json::json!(0.2));
    }

    #[test]
    fn rejects_non_array_root() {
        let err = parse_records(r#"{"EHI_before": 0.2}"#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::NotAnArray)
        ));
    }

    #[test]
    fn rejects_non_object_record() {
        let err = parse_records(r#"[{}, 3]"#).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::RecordNotObject { index: 1 })
        ));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_records("[{").is_err());
    }

    #[test]
    fn load_file_keeps_bare_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Mistral_7B_output.json");
        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, r#"[{{"EHI_before": 0.1, "EHI_after": 0.9}}]"#).unwrap();

        let file = load_file(&path).unwrap();
        assert_eq!(file.name, "Mistral_7B_output.json");
        assert_eq!(file.records.len(), 1);
    }

    #[test]
    fn load_file_rejects_other_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("metrics.csv");
        std::fs::write(&path, "EHI_before\n0.1\n").unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DataError>(),
            Some(DataError::UnsupportedExtension(ext)) if ext == "csv"
        ));
    }

    #[test]
    fn batch_fails_on_first_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("flan_t5.json");
        let bad = dir.path().join("distil.json");
        std::fs::write(&good, "[]").unwrap();
        std::fs::write(&bad, "not json").unwrap();

        assert!(load_batch(&[good.clone()]).is_ok());
        assert!(load_batch(&[good, bad]).is_err());
    }
}
