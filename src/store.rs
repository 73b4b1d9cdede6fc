//! Keyed load/save for drafts.
//!
//! `load` never fails: a missing or unreadable value yields the caller's
//! default. Values are always written whole.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{BillError, Result};

pub const BILL_KEY: &str = "billData";
pub const TEMPLATE_KEY: &str = "selectedTemplate";

pub trait Store {
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T;

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()>;
}

/// One pretty-printed JSON file per key.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(data_root: &Path) -> Self {
        FileStore {
            dir: data_root.join("drafts"),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Store for FileStore {
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let path = self.path_for(key);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(key, path = %path.display(), "no saved value, using default");
                return default;
            }
            Err(e) => {
                tracing::warn!(key, path = %path.display(), error = %e, "unreadable saved value, using default");
                return default;
            }
        };

        match serde_json::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, path = %path.display(), error = %e, "corrupt saved value, using default");
                default
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| BillError::io(&self.dir, e))?;
        let path = self.path_for(key);
        let json = serde_json::to_string_pretty(value)?;
        fs::write(&path, json).map_err(|e| BillError::io(&path, e))?;
        tracing::debug!(key, path = %path.display(), "saved");
        Ok(())
    }
}

/// In-process store; nothing survives the value.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, serde_json::Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.values
            .borrow()
            .get(key)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
            .unwrap_or(default)
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        self.values.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}
