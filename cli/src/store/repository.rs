//! # Generic Record Repository
//!
//! File: cli/src/store/repository.rs
//!
//! ## Overview
//!
//! `RecordStore<R>` persists one record type to one CSV table. Every
//! operation loads the whole table; writes mutate the loaded rows and rewrite
//! the file in full. There is no index and no incremental update.
//!
//! Per-type details (file name, header order, how an input becomes a record)
//! live in the `Record` implementation, so the four record types share this
//! code.
//!
//! ## Concurrency
//!
//! The HTTP server runs handlers on several threads. Each `RecordStore` holds
//! a mutex across every load and load-mutate-rewrite cycle, which keeps at
//! most one writer per table inside the process. Nothing coordinates separate
//! processes that point at the same data directory.
//!
use crate::common::fs::table;
use crate::core::error::{LeadboxError, Result};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

/// Describes how a record type is stored.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Caller-supplied fields for a new record.
    type Input;

    /// Table file name inside the data directory.
    const FILE_NAME: &'static str;

    /// Column names in serialization order; written as the first row.
    const HEADERS: &'static [&'static str];

    fn id(&self) -> u64;

    /// Builds a new record from its assigned id, creation time and input,
    /// filling optional fields with their absent value.
    fn build(id: u64, created_at: DateTime<Utc>, input: Self::Input) -> Self;
}

/// Full-table CSV storage for one record type.
#[derive(Debug)]
pub struct RecordStore<R: Record> {
    path: PathBuf,
    lock: Mutex<()>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> RecordStore<R> {
    /// Creates a store for `R` inside `data_dir`. Nothing is touched on disk
    /// until the first write.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(R::FILE_NAME),
            lock: Mutex::new(()),
            _record: PhantomData,
        }
    }

    /// Appends a new record stamped with the current time.
    pub fn create(&self, input: R::Input) -> Result<R> {
        self.create_at(input, Utc::now())
    }

    /// Appends a new record stamped with `now`. The id is one more than the
    /// largest id in the table, or 1 for an empty table.
    pub fn create_at(&self, input: R::Input, now: DateTime<Utc>) -> Result<R> {
        let _guard = self.guard();
        let mut records = self.load();
        let record = R::build(next_id(&records), now, input);
        records.push(record.clone());
        self.persist(&records)?;
        info!("Created record #{} in {}", record.id(), self.path.display());
        Ok(record)
    }

    /// All records in file order.
    pub fn list(&self) -> Vec<R> {
        let _guard = self.guard();
        self.load()
    }

    /// First record (in file order) matching `predicate`.
    pub fn find_first(&self, predicate: impl Fn(&R) -> bool) -> Option<R> {
        self.list().into_iter().find(|record| predicate(record))
    }

    pub fn find_by_id(&self, id: u64) -> Option<R> {
        self.find_first(|record| record.id() == id)
    }

    /// Every record matching `predicate`, in file order.
    pub fn filter(&self, predicate: impl Fn(&R) -> bool) -> Vec<R> {
        self.list().into_iter().filter(|record| predicate(record)).collect()
    }

    /// Applies `mutate` to the record with `id` and rewrites the table.
    ///
    /// Returns `Ok(None)` without touching the file when no record has `id`.
    pub fn update(&self, id: u64, mutate: impl FnOnce(&mut R)) -> Result<Option<R>> {
        let _guard = self.guard();
        let mut records = self.load();
        let Some(record) = records.iter_mut().find(|record| record.id() == id) else {
            debug!("No record #{} in {}; nothing updated.", id, self.path.display());
            return Ok(None);
        };
        mutate(record);
        let updated = record.clone();
        self.persist(&records)?;
        info!("Updated record #{} in {}", id, self.path.display());
        Ok(Some(updated))
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // The guarded data is `()`, so a poisoned lock carries no broken state.
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn load(&self) -> Vec<R> {
        table::read_table(&self.path)
    }

    fn persist(&self, records: &[R]) -> Result<()> {
        let write_failed = |source: Box<dyn std::error::Error + Send + Sync>| {
            anyhow::Error::new(LeadboxError::StorageWrite {
                path: self.path.display().to_string(),
                source,
            })
        };
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| write_failed(Box::new(e)))?;
        }
        table::write_table(&self.path, R::HEADERS, records).map_err(|e| write_failed(Box::new(e)))
    }
}

fn next_id<R: Record>(records: &[R]) -> u64 {
    records
        .iter()
        .map(R::id)
        .max()
        .map_or(1, |max_id| max_id + 1)
}
