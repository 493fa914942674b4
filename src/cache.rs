//! Local durable cache
//!
//! A single JSON snapshot of the expense list. It is read once at startup to
//! show something before the store answers, and rewritten whenever the list
//! changes.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::configuration::Settings;
use crate::error::AppError as Error;
use crate::model::Expense;

pub trait LocalCache {
    /// The last stored snapshot, or `None` if nothing has been stored yet
    ///
    /// # Errors
    /// Will return an error if the snapshot exists but can't be read.
    fn load(&self) -> Result<Option<Vec<Expense>>, Error>;

    /// Replace the snapshot with `expenses`
    ///
    /// # Errors
    /// Will return an error if the snapshot can't be written.
    fn store(&self, expenses: &[Expense]) -> Result<(), Error>;
}

/// Snapshot kept in a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    path: PathBuf,
}

impl JsonFileCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn new_from_config(config: &Settings) -> Self {
        Self::new(&config.cache.path)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LocalCache for JsonFileCache {
    fn load(&self) -> Result<Option<Vec<Expense>>, Error> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_reader(BufReader::new(file))
            .map(Some)
            .map_err(|e| {
                Error::CacheError(format!("Failed to parse {}: {}", self.path.display(), e))
            })
    }

    // Written to a sibling temp file, then renamed over the snapshot
    fn store(&self, expenses: &[Expense]) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.path.with_extension("json.tmp");
        let mut writer = BufWriter::new(File::create(&temp_path)?);
        serde_json::to_writer(&mut writer, expenses)
            .map_err(|e| Error::CacheError(format!("Failed to serialise expenses: {e}")))?;
        writer.flush()?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            Error::from(e)
        })
    }
}

// -- Tests ----------------------------------------------------------------------------
