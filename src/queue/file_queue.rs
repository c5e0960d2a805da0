//! FIFO queue backed by a JSON db file rewritten on every mutation

use super::error::QueueError;
use super::item::Item;
use super::storage::QueueStorage;
use super::Queue;
use serde_json::Value;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

/// Queue whose items live in memory and in the db file.
///
/// Every `add`/`pop` holds the lock across the in-memory change and the file
/// rewrite. A failed rewrite undoes the in-memory change before the guard is
/// dropped, so memory and file never disagree once the call returns.
#[derive(Debug)]
pub struct FileQueue {
    items: Mutex<VecDeque<Item>>,
    storage: QueueStorage,
}

impl FileQueue {
    /// Open the queue stored at `path`, creating an empty db file if missing
    pub fn open(path: impl AsRef<Path>) -> Result<Self, QueueError> {
        let mut storage = QueueStorage::new(path.as_ref());
        let items = storage.load_or_create()?;

        Ok(Self {
            items: Mutex::new(items),
            storage,
        })
    }

    /// Append `value` to the tail and persist the queue
    pub fn add(&self, value: Value) -> Result<(), QueueError> {
        let mut items = self.lock();
        items.push_back(Item::new(value));

        if let Err(e) = self.storage.save(&items) {
            items.pop_back();
            warn!("Add rolled back: {}", e);
            return Err(e);
        }

        debug!("Added item, queue size: {}", items.len());
        Ok(())
    }

    /// Remove the head item and persist the queue.
    ///
    /// Returns `Ok(None)` when the queue is empty.
    pub fn pop(&self) -> Result<Option<Value>, QueueError> {
        let mut items = self.lock();
        let Some(item) = items.pop_front() else {
            return Ok(None);
        };

        if let Err(e) = self.storage.save(&items) {
            items.push_front(item);
            warn!("Pop rolled back: {}", e);
            return Err(e);
        }

        debug!("Popped item, queue size: {}", items.len());
        Ok(Some(item.value))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn db_path(&self) -> &Path {
        self.storage.file_path()
    }

    // Mutations roll back before the guard drops, so a poisoned lock still
    // guards a consistent queue.
    fn lock(&self) -> MutexGuard<'_, VecDeque<Item>> {
        self.items.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Queue for FileQueue {
    fn add(&self, value: Value) -> Result<(), QueueError> {
        FileQueue::add(self, value)
    }

    fn pop(&self) -> Result<Option<Value>, QueueError> {
        FileQueue::pop(self)
    }
}
