//! Append-only CSV persistence for daily log entries.
//!
//! The log table lives at `~/.config/ironmind[-dev]/daily_logs.csv`
//! unless overridden via `log.path` in the configuration. Every append
//! opens the file in append mode and writes exactly one encoded row, so
//! existing rows are never rewritten or reordered.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Result, StorageError};
use crate::model::{Entry, GymFields, LogRecord, ProductivityFields, CSV_HEADER};

/// Returns `~/.config/ironmind[-dev]/` based on IRONMIND_ENV.
///
/// Set IRONMIND_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("IRONMIND_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("ironmind-dev")
    } else {
        base_dir.join("ironmind")
    };

    fs::create_dir_all(&dir).map_err(|source| StorageError::OpenFailed {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// Durable append-only store of daily [`Entry`] rows.
pub struct LogStore {
    path: PathBuf,
}

impl LogStore {
    /// Store backed by the given CSV path. No I/O happens until
    /// [`LogStore::initialize`] or a read/write operation.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the configured location: `log.path` if set, otherwise
    /// `daily_logs.csv` under the data directory.
    pub fn open_default() -> Result<Self> {
        let config = Config::load_or_default();
        let path = match config.log.path {
            Some(path) => path,
            None => data_dir()?.join("daily_logs.csv"),
        };
        Ok(Self::open(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the table with its header and zero rows if it does not
    /// exist. Idempotent: calling this on an existing table leaves it
    /// byte-identical.
    pub fn initialize(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| StorageError::OpenFailed {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        let mut header = String::from(CSV_HEADER);
        header.push('\n');
        fs::write(&self.path, header).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Stamp the two field groups with today's date and append the
    /// resulting entry. Returns the stored entry.
    pub fn add_entry(&self, gym: GymFields, productivity: ProductivityFields) -> Result<Entry> {
        let entry = Entry::new(chrono::Local::now().date_naive(), gym, productivity);
        self.append_entry(&entry)?;
        Ok(entry)
    }

    /// Append one entry with a caller-supplied date (backfill). The
    /// table grows by exactly one row; nothing else is touched.
    pub fn append_entry(&self, entry: &Entry) -> Result<()> {
        self.initialize()?;
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|source| StorageError::OpenFailed {
                path: self.path.clone(),
                source,
            })?;
        let mut row = entry.encode_row();
        row.push('\n');
        file.write_all(row.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| StorageError::WriteFailed {
                path: self.path.clone(),
                source,
            })?;
        Ok(())
    }

    /// All records in insertion order.
    pub fn load_all(&self) -> Result<Vec<LogRecord>> {
        let content = self.read_table()?;
        let mut records = Vec::new();
        for (idx, line) in content.lines().enumerate() {
            if idx == 0 {
                if !line.starts_with("date,") {
                    return Err(StorageError::ParseFailed {
                        path: self.path.clone(),
                        line: 1,
                        message: "missing header row".to_string(),
                    }
                    .into());
                }
                continue;
            }
            if line.trim().is_empty() {
                continue;
            }
            let record =
                LogRecord::decode_row(line).map_err(|message| StorageError::ParseFailed {
                    path: self.path.clone(),
                    line: idx + 1,
                    message,
                })?;
            records.push(record);
        }
        Ok(records)
    }

    /// The last `last_n` records in insertion order, read-only.
    pub fn view_logs(&self, last_n: usize) -> Result<Vec<LogRecord>> {
        let mut records = self.load_all()?;
        let skip = records.len().saturating_sub(last_n);
        Ok(records.split_off(skip))
    }

    /// Number of data rows, without decoding them.
    pub fn len(&self) -> Result<usize> {
        let content = self.read_table()?;
        Ok(content
            .lines()
            .skip(1)
            .filter(|line| !line.trim().is_empty())
            .count())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    fn read_table(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|source| {
            StorageError::OpenFailed {
                path: self.path.clone(),
                source,
            }
            .into()
        })
    }
}
