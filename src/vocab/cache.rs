use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;

use crate::vocab::item::{Coordinate, Dataset};

/// Best-effort on-disk copy of fetched word lists, one JSON file per
/// `week{w}day{d}` key.
pub struct DiskCache {
    base_dir: PathBuf,
}

impl DiskCache {
    pub fn new() -> Option<Self> {
        let base = dirs::cache_dir()?.join("kotoba");
        Self::with_base_dir(base).ok()
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir
            .join(format!("{}.json", Self::sanitize_key(key)))
    }

    pub fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    pub fn put(&self, key: &str, content: &str) -> Result<()> {
        let path = self.path_for(key);
        let tmp_path = path.with_extension("tmp");

        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    pub fn store_dataset(&self, coord: Coordinate, items: &Dataset) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.put(&coord.cache_key(), &json)
    }

    pub fn load_dataset(&self, coord: Coordinate) -> Option<Dataset> {
        let content = self.get(&coord.cache_key())?;
        serde_json::from_str(&content).ok()
    }

    fn sanitize_key(key: &str) -> String {
        key.chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }
}
