//! Lookup History
//!
//! Most recent lookups, one entry per address, oldest first. Recording an
//! address again moves it to the newest position.

use std::collections::VecDeque;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_HISTORY_SIZE;
use crate::threat::ThreatRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupHistory {
    entries: VecDeque<ThreatRecord>,
    #[serde(skip, default = "default_capacity")]
    capacity: usize,
}

fn default_capacity() -> usize {
    MAX_HISTORY_SIZE
}

impl LookupHistory {
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a record, replacing any older entry for the same address
    pub fn record(&mut self, entry: ThreatRecord) {
        self.entries
            .retain(|existing| existing.ip_address != entry.ip_address);
        self.entries.push_back(entry);

        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Up to `limit` entries, newest first
    pub fn recent(&self, limit: usize) -> Vec<ThreatRecord> {
        self.entries.iter().rev().take(limit).cloned().collect()
    }

    /// All entries, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &ThreatRecord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    // ========================================================================
    // PERSISTENCE (best effort)
    // ========================================================================

    /// Load a saved history. A missing file yields an empty history.
    ///
    /// Entries are replayed through `record`, so a hand-edited or older file
    /// is re-deduplicated and trimmed to capacity.
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => return Err(e),
        };

        let saved: LookupHistory = serde_json::from_str(&content)?;

        let mut history = Self::new();
        for entry in saved.entries {
            history.record(entry);
        }
        Ok(history)
    }

    /// Write the history as JSON, replacing the file atomically
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;

        let tmp = path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)
    }
}

impl Default for LookupHistory {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
