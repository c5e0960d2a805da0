mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use simple_queue::queue::open_shared;
use simple_queue::WebServer;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments first to get debug flag
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = cli.resolve_config()?;

    // Without a usable queue there is nothing to serve
    let db_path = &config.queue.db_path;
    let queue = open_shared(db_path)
        .with_context(|| format!("Failed to open queue db file: {}", db_path.display()))?;
    info!("Queue loaded from: {}", db_path.display());

    println!("📬 simple-queue started");
    println!("📂 Db file: {}", db_path.display());
    println!(
        "🌐 Listening on http://{}:{} (POST /add, GET /pop)",
        config.server.host, config.server.port
    );
    println!("🛑 Press Ctrl+C to stop");

    let server = WebServer::new(config.server.port, config.server.host.clone(), queue);
    server.start(shutdown_signal()).await?;

    println!("🧹 Shut down");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => println!("\n🛑 Received Ctrl+C, shutting down..."),
        Err(e) => {
            error!("Failed to listen for ctrl_c: {}", e);
            // Keep serving; the process can still be killed
            std::future::pending::<()>().await
        }
    }
}
