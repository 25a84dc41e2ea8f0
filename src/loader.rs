//! JSON loader for grade records.

use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::LoadError;
use crate::record::{RawGradeRecord, RawSection};

/// Reads and decodes the grade record at `path`.
///
/// # Errors
///
/// [`LoadError::Read`] if the file is missing or unreadable,
/// [`LoadError::Parse`] if its content is not a grade record.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_record(path: &Path) -> Result<RawGradeRecord, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(bytes = content.len(), "Grades file read");

    parse_record(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Decodes a grade record from in-memory JSON.
///
/// The top level must be an object. Each section is classified before its
/// fields are decoded, so an array or an empty value in place of a section
/// reaches the validator instead of failing here.
pub fn parse_record(content: &str) -> Result<RawGradeRecord, serde_json::Error> {
    let mut root: Map<String, Value> = serde_json::from_str(content)?;
    Ok(RawGradeRecord {
        assignments: RawSection::decode(root.remove("assignments"))?,
        exam: RawSection::decode(root.remove("exam"))?,
        course: RawSection::decode(root.remove("course"))?,
    })
}
