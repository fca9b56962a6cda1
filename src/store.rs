// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use uuid::Uuid;

use crate::models::{HistoryEntry, NewEntry};
use crate::storage::KeyValueStore;

/// Fixed key the history list is persisted under.
pub const HISTORY_KEY: &str = "History";

/// Owns the ordered history list (newest first) and keeps it synchronized
/// with the backing store after every mutation. All writes go through
/// `&mut self` against the current entry vector, so a mutation can never be
/// computed from a stale snapshot of the list.
pub struct HistoryStore<S: KeyValueStore> {
    storage: S,
    entries: Vec<HistoryEntry>,
}

impl<S: KeyValueStore> HistoryStore<S> {
    /// Load the persisted list. An absent key or a payload that fails to
    /// parse both open as the empty list; only storage errors propagate.
    pub fn open(storage: S) -> Result<Self> {
        let entries = match storage.get(HISTORY_KEY)? {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            None => Vec::new(),
        };
        Ok(Self { storage, entries })
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Replace the entire list. Contents are taken as-is; no validation.
    pub fn set_all(&mut self, entries: Vec<HistoryEntry>) -> Result<()> {
        self.entries = entries;
        self.persist()
    }

    /// Record a new entry stamped with today's date.
    pub fn add(&mut self, new: NewEntry) -> Result<HistoryEntry> {
        self.add_on(new, Local::now().date_naive())
    }

    /// Record a new entry stamped with an explicit date. The entry gets a
    /// fresh unique id and is prepended, becoming the most recent element.
    pub fn add_on(&mut self, new: NewEntry, date: NaiveDate) -> Result<HistoryEntry> {
        let entry = HistoryEntry {
            id: Uuid::new_v4().to_string(),
            label: new.label,
            amount: new.amount,
            r#type: new.r#type,
            date_created: date.format("%d/%m/%Y").to_string(),
            category: new.category,
        };
        self.entries.insert(0, entry.clone());
        self.persist()?;
        Ok(entry)
    }

    /// Remove the entry whose id matches exactly. An unknown id leaves the
    /// list unchanged; either way the result is persisted.
    pub fn remove(&mut self, id: &str) -> Result<()> {
        self.entries.retain(|e| e.id != id);
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let raw = serde_json::to_string(&self.entries)?;
        self.storage.set(HISTORY_KEY, &raw)
    }
}
