use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::StoreError;

/// String-keyed storage port the progression layer persists through.
pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore(HashMap<String, String>);

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A JSON object of string values on disk. Read once on open, rewritten in
/// full on every `set`.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = load_values(&path);
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn load_values(path: &Path) -> BTreeMap<String, String> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            warn!("no progress read from {}: {err}", path.display());
            return BTreeMap::new();
        }
    };
    match serde_json::from_str(&text) {
        Ok(values) => values,
        Err(err) => {
            warn!("ignoring corrupt progress file {}: {err}", path.display());
            BTreeMap::new()
        }
    }
}

impl KvStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        let data = serde_json::to_vec_pretty(&self.values)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::ops::Deref;

    use super::*;

    /// A path under the temp dir, removed again on drop.
    struct Scratch(PathBuf);

    impl Scratch {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("grid_chase_store_{}", std::process::id()));
            fs::create_dir_all(&dir).unwrap();
            let path = dir.join(name);
            let _ = fs::remove_file(&path);
            Scratch(path)
        }
    }

    impl Deref for Scratch {
        type Target = Path;

        fn deref(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
            if let Some(dir) = self.0.parent() {
                // only succeeds once the last test in the dir is done
                let _ = fs::remove_dir(dir);
            }
        }
    }

    #[test]
    fn memory_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("points"), None);
        store.set("points", "12").unwrap();
        assert_eq!(store.get("points").as_deref(), Some("12"));
    }

    #[test]
    fn file_store_writes_through() {
        let path = Scratch::new("write_through.json");
        let mut store = JsonFileStore::open(&*path);
        store.set("points", "7").unwrap();
        store.set("equipped_cosmetic", "crown").unwrap();

        let reopened = JsonFileStore::open(&*path);
        assert_eq!(reopened.get("points").as_deref(), Some("7"));
        assert_eq!(reopened.get("equipped_cosmetic").as_deref(), Some("crown"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let path = Scratch::new("corrupt.json");
        fs::write(&*path, "{ not json").unwrap();
        let mut store = JsonFileStore::open(&*path);
        assert_eq!(store.get("points"), None);
        store.set("points", "1").unwrap();
        assert_eq!(JsonFileStore::open(&*path).get("points").as_deref(), Some("1"));
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let path = Scratch::new("missing.json");
        let store = JsonFileStore::open(&*path);
        assert_eq!(store.get("owned_cosmetics"), None);
    }
}
