use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
    #[error("error parsing db file: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("error serializing queue items: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl QueueError {
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
