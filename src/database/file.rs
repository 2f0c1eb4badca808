//! Vocabulary file reading and writing.
//!
//! The file is a pretty-printed UTF-8 JSON object mapping each word to its record.
//! Writes go to a temporary file in the same directory which then replaces the
//! target, so a crash mid-write leaves the previous file intact.

use crate::error::{Error, Result};
use crate::models::{StoredWord, WordEntry};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads a vocabulary file as stored, legacy values included.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn read_vocabulary_file(path: &Path) -> Result<Option<BTreeMap<String, StoredWord>>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let words = serde_json::from_str(&contents).map_err(|source| Error::CorruptVocabulary {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(words))
}

/// Atomically replaces `path` with the given records.
pub fn write_vocabulary_file(words: &BTreeMap<String, WordEntry>, path: &Path) -> Result<()> {
    let parent_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        serde_json::to_writer_pretty(&mut writer, words)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    temp_file.as_file().sync_all()?;

    temp_file.persist(path)?;
    Ok(())
}
