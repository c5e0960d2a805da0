use std::future::Future;
use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tracing::info;

use super::handlers::{add_message, pop_message};
use crate::queue::SharedQueue;

#[derive(Clone)]
pub struct WebServer {
    pub port: u16,
    pub host: String,
    pub queue: SharedQueue,
}

impl WebServer {
    pub fn new(port: u16, host: String, queue: SharedQueue) -> Self {
        Self { port, host, queue }
    }

    /// Serve the queue until `shutdown` resolves
    pub async fn start<F>(&self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.create_app();
        let addr = self.socket_addr()?;

        info!(
            "🌐 Starting web server on http://{}:{}",
            self.host, self.port
        );

        let listener = TcpListener::bind(addr).await?;
        println!("✅ Web server successfully bound to {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Web server on {} stopped", addr);
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        // Convert localhost to 127.0.0.1 for proper parsing
        let host = if self.host == "localhost" {
            "127.0.0.1"
        } else {
            &self.host
        };
        Ok(format!("{}:{}", host, self.port).parse()?)
    }

    pub fn create_app(&self) -> Router {
        Router::new()
            .route("/add", post(add_message))
            .route("/pop", get(pop_message))
            .with_state(self.queue.clone())
            .layer(ServiceBuilder::new().layer(CorsLayer::permissive()))
    }
}
