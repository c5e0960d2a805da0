//! Durable FIFO queue engine
//!
//! This module provides:
//! - An ordered in-memory queue of JSON payloads
//! - Whole-file JSON persistence on every mutation
//! - A single lock serialising every `add`/`pop`

pub mod error;
pub mod file_queue;
pub mod item;
pub mod storage;

pub use error::QueueError;
pub use file_queue::FileQueue;
pub use item::Item;
pub use storage::QueueStorage;

use serde_json::Value;
use std::sync::Arc;

/// Operations the HTTP layer needs from a queue
pub trait Queue: Send + Sync {
    /// Append a payload to the tail
    fn add(&self, value: Value) -> Result<(), QueueError>;
    /// Remove and return the head payload, `None` when empty
    fn pop(&self) -> Result<Option<Value>, QueueError>;
}

/// Shared queue instance
pub type SharedQueue = Arc<dyn Queue>;

/// Open a file-backed queue ready to be shared between request handlers
pub fn open_shared(path: impl AsRef<std::path::Path>) -> Result<SharedQueue, QueueError> {
    Ok(Arc::new(FileQueue::open(path)?))
}
