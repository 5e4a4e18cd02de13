// src/store/storage.rs - persistent key-value backends
use super::StorageError;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use toml_edit::{value, Document, Item, Table};

/// Synchronous key-value store that outlives the process (or tab).
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local storage. Counts writes so callers can assert on them.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// Storage that always fails, as when the user disabled it.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableStorage;

impl Storage for UnavailableStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("storage is disabled".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("storage is disabled".into()))
    }
}

/// Values kept as string entries of one table in a TOML file.
///
/// Writes go through `toml_edit`, so comments and unrelated tables in the
/// file are preserved. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
    table: String,
}

impl FileStorage {
    pub const DEFAULT_TABLE: &'static str = "preferences";

    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_table(path, Self::DEFAULT_TABLE)
    }

    pub fn with_table<P: AsRef<Path>>(path: P, table: &str) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            table: table.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Document, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(StorageError::Io(e)),
        };

        content
            .parse::<Document>()
            .map_err(|e| StorageError::Corrupt(format!("{}: {}", self.path.display(), e)))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let doc = self.read_document()?;
        Ok(doc
            .get(&self.table)
            .and_then(|table| table.get(key))
            .and_then(|item| item.as_str())
            .map(str::to_owned))
    }

    fn set(&self, key: &str, val: &str) -> Result<(), StorageError> {
        let mut doc = self.read_document()?;
        let table = doc
            .entry(&self.table)
            .or_insert(Item::Table(Table::new()))
            .as_table_like_mut()
            .ok_or_else(|| {
                StorageError::Corrupt(format!(
                    "{}: '{}' is not a table",
                    self.path.display(),
                    self.table
                ))
            })?;
        table.insert(key, value(val));

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, doc.to_string())?;

        log::debug!("Stored {}.{} in {}", self.table, key, self.path.display());
        Ok(())
    }
}
