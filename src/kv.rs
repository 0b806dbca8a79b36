// Key-value persistence backends

use crate::record::Record;
use eyre::{Context, Result, eyre};
use fs2::FileExt;
use rusqlite::{Connection, OptionalExtension};
use std::collections::{HashMap, HashSet};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const CURRENT_VERSION: u32 = 1;

/// String-keyed persistent store holding whole serialized values
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for Box<K> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// Validate a key; keys double as file names in [`FileKv`]
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(eyre!("Key cannot be empty"));
    }
    if key.len() > 64 {
        return Err(eyre!("Key too long: {} (max 64 chars)", key));
    }
    if !key.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
        return Err(eyre!("Invalid key: {} (must be alphanumeric with _/-)", key));
    }
    Ok(())
}

// ============================================================================
// Collection helpers
// ============================================================================

/// Load every record of type `T` from its collection entry
///
/// Fails open: an absent entry, a read error or an entry that is not a JSON
/// array all yield an empty collection. Array elements that do not parse as
/// `T` are skipped, as are records with an id already seen (the first
/// occurrence wins).
pub fn load_collection<T, K>(kv: &K) -> Vec<T>
where
    T: Record,
    K: KeyValueStore + ?Sized,
{
    let key = T::collection_name();

    let raw = match kv.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "No persisted entry, starting empty");
            return Vec::new();
        }
        Err(e) => {
            warn!(key, error = ?e, "Failed to read persisted entry, starting empty");
            return Vec::new();
        }
    };

    let values: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
        Ok(values) => values,
        Err(e) => {
            warn!(key, error = ?e, "Failed to parse persisted entry, starting empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let total = values.len();
    let records: Vec<T> = values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value::<T>(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(key, index, error = ?e, "Failed to parse record, skipping");
                None
            }
        })
        .filter(|record| {
            let fresh = seen.insert(record.id().to_string());
            if !fresh {
                warn!(key, id = record.id(), "Dropping record with duplicate id");
            }
            fresh
        })
        .collect();

    info!(key, count = records.len(), dropped = total - records.len(), "Loaded records");
    records
}

/// Serialize every record of type `T` and overwrite its collection entry
pub fn save_collection<T, K>(kv: &mut K, records: &[T]) -> Result<()>
where
    T: Record,
    K: KeyValueStore + ?Sized,
{
    let key = T::collection_name();
    let json = serde_json::to_string(records).context("Failed to serialize records")?;
    kv.set(key, &json)
        .with_context(|| format!("Failed to persist collection {}", key))?;
    debug!(key, count = records.len(), bytes = json.len(), "Persisted records");
    Ok(())
}

// ============================================================================
// File backend
// ============================================================================

/// Directory of `<key>.json` files
pub struct FileKv {
    base_path: PathBuf,
}

impl FileKv {
    /// Open or create a file store rooted at `path`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let base_path = path.as_ref().to_path_buf();
        fs::create_dir_all(&base_path).context("Failed to create store directory")?;

        let store = Self { base_path };
        store.write_version()?;
        Ok(store)
    }

    /// Get the base path of this store
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }

    fn write_version(&self) -> Result<()> {
        let version_path = self.base_path.join(".version");
        if !version_path.exists() {
            fs::write(version_path, CURRENT_VERSION.to_string())?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;

        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;

        // Serialize writers across processes; released when `lock` is dropped
        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.base_path.join(".lock"))
            .context("Failed to open lock file")?;
        lock.lock_exclusive().context("Failed to acquire file lock")?;

        let tmp_path = self.base_path.join(format!(".{}.json.tmp", key));
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&tmp_path)
            .context("Failed to open temporary file for writing")?;
        let written = file
            .write_all(value.as_bytes())
            .context("Failed to write temporary file")
            .and_then(|_| file.sync_all().context("Failed to sync temporary file"));
        drop(file);

        let result =
            written.and_then(|_| fs::rename(&tmp_path, self.entry_path(key)).context("Failed to replace entry file"));
        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result
    }
}

// ============================================================================
// SQLite backend
// ============================================================================

/// Single-table SQLite key-value store
pub struct SqliteKv {
    db: Connection,
}

impl SqliteKv {
    /// Open or create a database file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Failed to create store directory")?;
        }

        let db = Connection::open(path).context("Failed to open SQLite database")?;
        let store = Self { db };
        store.create_schema()?;
        Ok(store)
    }

    /// Open a database that lives only as long as this value
    pub fn open_in_memory() -> Result<Self> {
        let db = Connection::open_in_memory().context("Failed to open in-memory SQLite database")?;
        let store = Self { db };
        store.create_schema()?;
        Ok(store)
    }

    fn create_schema(&self) -> Result<()> {
        debug!("Creating database schema");

        self.db.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )?;

        Ok(())
    }
}

impl KeyValueStore for SqliteKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;

        let value = self
            .db
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;

        self.db.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            rusqlite::params![key, value, crate::now_ms()],
        )?;
        Ok(())
    }
}

// ============================================================================
// In-memory backend
// ============================================================================

/// Non-durable store, for tests and throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryKv {
    entries: HashMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
