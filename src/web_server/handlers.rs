use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;
use tokio::task;
use tracing::{debug, info};

use super::error::ApiError;
use crate::queue::SharedQueue;

/// `POST /add`: enqueue the request body, which may be any JSON value
pub async fn add_message(
    State(queue): State<SharedQueue>,
    body: Result<Bytes, BytesRejection>,
) -> Result<StatusCode, ApiError> {
    let body = body?;
    info!("📨 Body request: {}", String::from_utf8_lossy(&body));

    let value: Value = serde_json::from_slice(&body)?;

    // The queue blocks on its lock and the db file write
    task::spawn_blocking(move || queue.add(value))
        .await?
        .map_err(ApiError::Add)?;

    Ok(StatusCode::OK)
}

/// `GET /pop`: dequeue the oldest value, or 204 when the queue is empty
pub async fn pop_message(State(queue): State<SharedQueue>) -> Result<Response, ApiError> {
    let popped = task::spawn_blocking(move || queue.pop())
        .await?
        .map_err(ApiError::Pop)?;

    match popped {
        Some(value) => Ok(Json(value).into_response()),
        None => {
            debug!("Pop on empty queue");
            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}
