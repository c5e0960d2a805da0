use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct QueueConfig {
    /// JSON file holding the queue contents
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from("db.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_queue_config() {
        assert_eq!(QueueConfig::default().db_path, PathBuf::from("db.json"));
    }

    #[test]
    fn test_queue_config_deserialization() {
        let config: QueueConfig = serde_yaml::from_str("db_path: /var/lib/queue/db.json").unwrap();
        assert_eq!(config.db_path, PathBuf::from("/var/lib/queue/db.json"));
    }
}
