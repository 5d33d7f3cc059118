//! Capacity-bounded scan history.
//!
//! In memory the log is always most-recent-first. Storage may hold either
//! order; [`HistoryLog::from_stored`] normalizes before anything is trimmed so
//! the bound keeps the newest entries.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::result::{ClassificationResult, Confidence, Label};
use crate::ids::ScanId;

pub const DEFAULT_HISTORY_CAPACITY: usize = 10;
pub const HISTORY_SCHEMA_VERSION: u32 = 1;

/// One past scan outcome.
///
/// 一条历史扫描记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub scan_id: ScanId,
    pub label: Label,
    pub confidence: Confidence,
    pub timestamp: String,
    #[serde(default)]
    pub denomination: Option<String>,
    #[serde(default)]
    pub server_filename: Option<String>,
}

impl HistoryEntry {
    pub fn from_result(scan_id: ScanId, result: &ClassificationResult) -> Self {
        Self {
            scan_id,
            label: result.label,
            confidence: result.confidence,
            timestamp: result.timestamp.clone(),
            denomination: result.denomination.clone(),
            server_filename: Some(result.server_filename.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

/// Persisted shape of the history log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredHistory {
    #[serde(default = "history_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub order: StorageOrder,
    #[serde(default)]
    pub entries: Vec<HistoryEntry>,
}

impl Default for StoredHistory {
    fn default() -> Self {
        Self {
            schema_version: HISTORY_SCHEMA_VERSION,
            order: StorageOrder::NewestFirst,
            entries: Vec::new(),
        }
    }
}

fn history_schema_version() -> u32 {
    HISTORY_SCHEMA_VERSION
}

/// Totals shown above the history list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySummary {
    pub total: usize,
    pub real: usize,
    pub fake: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryLog {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl HistoryLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Rebuild a log from storage, normalizing to most-recent-first and then
    /// applying the bound.
    pub fn from_stored(stored: StoredHistory, capacity: usize) -> Self {
        let mut entries: VecDeque<HistoryEntry> = stored.entries.into();
        if stored.order == StorageOrder::OldestFirst {
            entries.make_contiguous().reverse();
        }
        entries.truncate(capacity);
        Self { entries, capacity }
    }

    /// Insert as newest, then trim the oldest past capacity.
    ///
    /// Returns the evicted entries, oldest last.
    pub fn append(&mut self, entry: HistoryEntry) -> Vec<HistoryEntry> {
        self.entries.push_front(entry);
        let mut evicted = Vec::new();
        while self.entries.len() > self.capacity {
            if let Some(oldest) = self.entries.pop_back() {
                evicted.push(oldest);
            }
        }
        evicted
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Most recent first.
    pub fn list(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn summary(&self) -> HistorySummary {
        let real = self.entries.iter().filter(|e| e.label == Label::Real).count();
        HistorySummary {
            total: self.entries.len(),
            real,
            fake: self.entries.len() - real,
        }
    }

    pub fn to_stored(&self) -> StoredHistory {
        StoredHistory {
            schema_version: HISTORY_SCHEMA_VERSION,
            order: StorageOrder::NewestFirst,
            entries: self.list(),
        }
    }
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
