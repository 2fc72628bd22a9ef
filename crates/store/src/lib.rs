//! High-score persistence backends.
//!
//! [`FileStore`] keeps a small JSON object on disk, keyed by
//! [`HIGH_SCORE_KEY`], and merges on write so unrelated keys survive.
//! [`MemoryStore`] backs tests and benchmarks.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use tui_snake_engine::HighScoreStore;
use tui_snake_types::HIGH_SCORE_KEY;

/// JSON-file backed store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the user's home directory, or next to the binary when no
    /// home is set.
    pub fn at_default_location() -> Self {
        let base = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(".tui-snake").join("scores.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, u32>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", self.path.display()))
            }
        };
        serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing {}", self.path.display()))
    }
}

impl HighScoreStore for FileStore {
    /// A missing file reads as zero; a corrupt one is an error, which the
    /// driver downgrades to zero on its side.
    fn load(&mut self) -> Result<u32> {
        let entries = self.read_entries()?;
        Ok(entries.get(HIGH_SCORE_KEY).copied().unwrap_or(0))
    }

    fn save(&mut self, score: u32) -> Result<()> {
        // Merge instead of overwrite; a corrupt file is replaced wholesale.
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(HIGH_SCORE_KEY.to_string(), score);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let body = serde_json::to_vec_pretty(&entries)?;
        fs::write(&self.path, body)
            .with_context(|| format!("writing {}", self.path.display()))
    }
}

/// In-memory store for tests and benchmarks.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    value: u32,
}

impl MemoryStore {
    pub fn new(value: u32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> Result<u32> {
        Ok(self.value)
    }

    fn save(&mut self, score: u32) -> Result<()> {
        self.value = score;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tui-snake-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn missing_file_loads_as_zero() {
        let mut store = FileStore::new(scratch_path("missing"));
        let _ = fs::remove_file(store.path());
        assert_eq!(store.load().unwrap(), 0);
    }

    #[test]
    fn save_then_load_roundtrips() {
        let path = scratch_path("roundtrip");
        let mut store = FileStore::new(&path);
        store.save(17).unwrap();
        assert_eq!(store.load().unwrap(), 17);
        store.save(23).unwrap();
        assert_eq!(store.load().unwrap(), 23);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn save_preserves_unrelated_keys() {
        let path = scratch_path("merge");
        fs::write(&path, r#"{"other_game": 9}"#).unwrap();

        let mut store = FileStore::new(&path);
        store.save(5).unwrap();

        let entries: BTreeMap<String, u32> =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(entries.get("other_game"), Some(&9));
        assert_eq!(entries.get(HIGH_SCORE_KEY), Some(&5));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn corrupt_file_is_a_load_error() {
        let path = scratch_path("corrupt");
        fs::write(&path, "not json").unwrap();

        let mut store = FileStore::new(&path);
        assert!(store.load().is_err());
        // Saving replaces the corrupt file.
        store.save(3).unwrap();
        assert_eq!(store.load().unwrap(), 3);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn memory_store_roundtrips() {
        let mut store = MemoryStore::new(4);
        assert_eq!(store.load().unwrap(), 4);
        store.save(11).unwrap();
        assert_eq!(store.load().unwrap(), 11);
        assert_eq!(store.value(), 11);
    }
}
