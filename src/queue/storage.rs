//! Queue persistence to a single JSON file

use super::error::QueueError;
use super::item::Item;
use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Reads and rewrites the db file holding the whole queue
#[derive(Debug)]
pub struct QueueStorage {
    file_path: PathBuf,
    /// Where writes land: `file_path` with symlinks followed once loaded
    target_path: PathBuf,
    tmp_path: PathBuf,
}

impl QueueStorage {
    /// Create a new storage handler
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        let file_path = file_path.into();
        let tmp_path = tmp_path_for(&file_path);

        Self {
            target_path: file_path.clone(),
            file_path,
            tmp_path,
        }
    }

    /// Load the persisted items, creating an empty db file if there is none.
    ///
    /// An empty file holds no items; anything else must be a JSON array of
    /// items in FIFO order. Afterwards saves go to the file the path resolves
    /// to, so a symlinked db path keeps pointing at its target.
    pub fn load_or_create(&mut self) -> Result<VecDeque<Item>, QueueError> {
        let contents = match fs::read(&self.file_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.create_empty()?;
                self.resolve_target()?;
                return Ok(VecDeque::new());
            }
            Err(e) => return Err(QueueError::io("error reading db file", e)),
        };
        self.resolve_target()?;

        if contents.iter().all(u8::is_ascii_whitespace) {
            debug!("Db file is empty: {}", self.file_path.display());
            return Ok(VecDeque::new());
        }

        let items: VecDeque<Item> =
            serde_json::from_slice(&contents).map_err(QueueError::Parse)?;
        info!(
            "Loaded {} items from: {}",
            items.len(),
            self.file_path.display()
        );

        Ok(items)
    }

    /// Replace the db file contents with `items`.
    ///
    /// The array is written to a sibling temp file and renamed over the db
    /// file, so the path never holds a partial array.
    pub fn save(&self, items: &VecDeque<Item>) -> Result<(), QueueError> {
        let json = serde_json::to_vec(items).map_err(QueueError::Serialization)?;

        if let Err(e) = self.write_tmp(&json) {
            let _ = fs::remove_file(&self.tmp_path);
            return Err(QueueError::io("error writing db file", e));
        }

        fs::rename(&self.tmp_path, &self.target_path).map_err(|e| {
            let _ = fs::remove_file(&self.tmp_path);
            QueueError::io("error replacing db file", e)
        })?;

        // The new contents are already in place; failing here would leave
        // memory behind the file, so only report it.
        if let Err(e) = self.sync_parent_dir() {
            warn!(
                "Failed to sync db directory for {}: {}",
                self.target_path.display(),
                e
            );
        }

        debug!(
            "Saved {} items to: {}",
            items.len(),
            self.file_path.display()
        );
        Ok(())
    }

    /// Get the storage file path
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    fn create_empty(&self) -> Result<(), QueueError> {
        if let Some(parent) = self.file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| QueueError::io("error creating db directory", e))?;
            }
        }

        File::create(&self.file_path).map_err(|e| QueueError::io("error creating db file", e))?;
        info!(
            "Db file not found, created an empty one: {}",
            self.file_path.display()
        );
        Ok(())
    }

    fn resolve_target(&mut self) -> Result<(), QueueError> {
        let target = fs::canonicalize(&self.file_path)
            .map_err(|e| QueueError::io("error resolving db file", e))?;
        if target != self.file_path {
            debug!(
                "Db file {} resolves to {}",
                self.file_path.display(),
                target.display()
            );
        }

        self.tmp_path = tmp_path_for(&target);
        self.target_path = target;
        Ok(())
    }

    fn write_tmp(&self, json: &[u8]) -> std::io::Result<()> {
        let mut file = File::create(&self.tmp_path)?;
        file.write_all(json)?;
        // Keep the db file's mode across the rename
        if let Ok(metadata) = fs::metadata(&self.target_path) {
            file.set_permissions(metadata.permissions())?;
        }
        file.sync_all()
    }

    #[cfg(unix)]
    fn sync_parent_dir(&self) -> std::io::Result<()> {
        match self.target_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => File::open(parent)?.sync_all(),
            _ => File::open(".")?.sync_all(),
        }
    }

    #[cfg(not(unix))]
    fn sync_parent_dir(&self) -> std::io::Result<()> {
        Ok(())
    }
}

fn tmp_path_for(path: &Path) -> PathBuf {
    match path.file_name() {
        Some(name) => {
            let mut tmp_name = name.to_os_string();
            tmp_name.push(".tmp");
            path.with_file_name(tmp_name)
        }
        None => path.with_extension("tmp"),
    }
}
