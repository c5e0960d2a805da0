//! simple-queue: a durable FIFO message queue served over HTTP.
//!
//! The queue engine lives in [`queue`]; [`web_server`] exposes it over HTTP and
//! [`config`] holds the settings the binary starts with.

pub mod config;
pub mod queue;
pub mod web_server;

pub use queue::{FileQueue, Queue, QueueError, SharedQueue};
pub use web_server::WebServer;
