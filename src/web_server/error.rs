use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tokio::task::JoinError;

use crate::queue::QueueError;

/// Error returned by the queue route handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("error reading the request body: {0}")]
    BodyRead(#[from] BytesRejection),
    #[error("error parsing the request body to JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("error adding the message to the queue: {0}")]
    Add(#[source] QueueError),
    #[error("error popping the message from the queue: {0}")]
    Pop(#[source] QueueError),
    #[error("queue task failed: {0}")]
    Task(#[from] JoinError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BodyRead(rejection) => rejection.status(),
            ApiError::InvalidJson(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Add(_) | ApiError::Pop(_) | ApiError::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("❌ {}", self);
        } else {
            tracing::debug!("Rejected request: {}", self);
        }

        (status, self.to_string()).into_response()
    }
}
