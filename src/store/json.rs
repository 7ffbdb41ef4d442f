use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::SightingRecord;

/// Persisted sighting collection: one JSON file, rewritten in full on every
/// successful save, kept sorted by date descending.
pub struct SightingStore {
    path: PathBuf,
}

impl SightingStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Load the persisted records. A missing file is the valid empty state,
    /// not an error.
    pub fn load(&self) -> Result<Vec<SightingRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Sort by date descending and rewrite the whole file. The data goes to
    /// a sibling temp file first and is renamed into place, so a failed
    /// write never leaves a half-applied store.
    pub fn save(&self, records: &mut Vec<SightingRecord>) -> Result<()> {
        records.sort_by(|a, b| b.date.cmp(&a.date));

        let json = serde_json::to_string_pretty(records)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Links of every stored record. The duplicate check consults this set
    /// before any resolver work happens.
    pub fn link_index(records: &[SightingRecord]) -> HashSet<String> {
        records.iter().map(|r| r.link.clone()).collect()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
