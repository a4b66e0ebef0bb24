//! Append-only conversion history
//!
//! One JSON object per line. Writing is best-effort: callers log a failure
//! and keep the conversion result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};
use unitconv_core::codes;
use unitconv_units::Conversion;

/// One recorded conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub seq: u64,
    pub timestamp: DateTime<Utc>,
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub result: f64,
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("cannot write history file {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot read history file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot encode history entry: {0}")]
    Encode(#[from] serde_json::Error),
}

impl HistoryError {
    pub fn code(&self) -> &'static str {
        match self {
            HistoryError::Read { .. } => codes::HISTORY_READ_FAILURE,
            HistoryError::Write { .. } | HistoryError::Encode(_) => codes::HISTORY_WRITE_FAILURE,
        }
    }
}

/// History file at a fixed path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryLog {
    path: PathBuf,
}

impl HistoryLog {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Append a conversion, continuing the sequence of earlier runs.
    /// An unreadable log restarts the sequence rather than blocking the append.
    pub fn record(&self, from: &str, to: &str, conversion: &Conversion<'_>) -> Result<HistoryEntry, HistoryError> {
        let seq = match self.entries() {
            Ok(entries) => entries.last().map_or(1, |e| e.seq + 1),
            Err(e) => {
                warn!(code = e.code(), error = %e, "history not readable, restarting sequence");
                1
            }
        };
        let entry = HistoryEntry {
            seq,
            timestamp: Utc::now(),
            amount: conversion.amount,
            from: from.to_string(),
            to: to.to_string(),
            result: conversion.value,
        };

        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        let write_err = |source| HistoryError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        file.write_all(line.as_bytes()).map_err(write_err)?;

        debug!(seq, path = %self.path.display(), "history entry appended");
        Ok(entry)
    }

    /// All readable entries, oldest first. A missing file is an empty history.
    pub fn entries(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(HistoryError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let mut entries = Vec::new();
        for (idx, raw) in bytes.split(|&b| b == b'\n').enumerate() {
            if raw.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            match serde_json::from_slice::<HistoryEntry>(raw) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!(line = idx + 1, error = %e, "skipping unreadable history entry"),
            }
        }
        Ok(entries)
    }
}
