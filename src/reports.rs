//! Flat-file store for generated summary reports.
//!
//! Append-only: reports are written once, keyed by their generation timestamp,
//! and never updated or deleted. Two saves within the same second collide on
//! the filename and the later write wins.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{MedimateError, Result};

pub const REPORT_PREFIX: &str = "summary_";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

pub struct ReportStore {
    dir: PathBuf,
}

impl ReportStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Write a report, returning the generated filename.
    pub fn save(&self, body: &str) -> Result<String> {
        fs::create_dir_all(&self.dir)?;

        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let filename = format!("{}{}.txt", REPORT_PREFIX, timestamp);
        let content = format!("Report generated: {}\n\n{}", timestamp, body);
        fs::write(self.dir.join(&filename), content)?;

        Ok(filename)
    }

    /// All report filenames, newest first.
    ///
    /// Reverse-lexicographic order is newest-first because filenames embed a
    /// zero-padded timestamp. A store that has never saved lists as empty.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => return Err(e.into()),
        };

        let mut files: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();

        files.sort_by(|a, b| b.cmp(a));
        Ok(files)
    }

    /// Report content as UTF-8 text.
    pub fn read(&self, filename: &str) -> Result<String> {
        let path = self.checked_path(filename)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(MedimateError::NotFound(filename.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Raw report bytes, for direct download.
    pub fn read_bytes(&self, filename: &str) -> Result<Vec<u8>> {
        let path = self.checked_path(filename)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(MedimateError::NotFound(filename.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Validate a client-supplied filename before it touches the filesystem.
    ///
    /// Only a single normal path component is accepted; separators, `..`, and
    /// absolute paths are rejected outright.
    fn checked_path(&self, filename: &str) -> Result<PathBuf> {
        let candidate = Path::new(filename);
        let mut components = candidate.components();
        let valid = !filename.is_empty()
            && !filename.contains(['/', '\\'])
            && matches!(components.next(), Some(Component::Normal(_)))
            && components.next().is_none();

        if !valid {
            return Err(MedimateError::ClientInput(format!(
                "invalid report name: {}",
                filename
            )));
        }

        Ok(self.dir.join(filename))
    }
}
