use anyhow::Result;
use clap::Parser;
use simple_queue::config::Config;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config YAML file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON file the queue is persisted to
    #[arg(long, env = "QUEUE_DB_PATH")]
    pub db_path: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, env = "QUEUE_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "QUEUE_PORT")]
    pub port: Option<u16>,

    /// Enable debug logging for internal details
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Build the effective configuration: flags and environment win over the
    /// YAML file, which wins over defaults
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(db_path) = &self.db_path {
            config.queue.db_path = db_path.clone();
        }
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        Ok(config)
    }
}
