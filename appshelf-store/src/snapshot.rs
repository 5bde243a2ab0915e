//! JSON snapshot persistence.
//!
//! A snapshot holds every record plus the store settings:
//!
//! ```json
//! {
//!   "language": "english",
//!   "last_completion_update": 1700000000,
//!   "records": [ { "id": 10, "name": "Foo", "type": "Game", ... } ]
//! }
//! ```
//!
//! Records are written in ascending id order so snapshots diff cleanly.

use std::collections::HashSet;
use std::fs;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use appshelf_core::{StoreLanguage, TitleRecord};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::store::{StoreSettings, TitleStore};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    #[serde(default)]
    language: StoreLanguage,
    #[serde(default)]
    last_completion_update: i64,
    records: Vec<TitleRecord>,
}

impl Snapshot {
    /// Structural checks serde cannot express.
    fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::with_capacity(self.records.len());
        for record in &self.records {
            if record.id == 0 {
                return Err("record with id 0".to_string());
            }
            if !seen.insert(record.id) {
                return Err(format!("duplicate record id {}", record.id));
            }
        }
        Ok(())
    }
}

impl TitleStore {
    /// Merge the snapshot at `path` into this store.
    ///
    /// A missing file is not an error: nothing is loaded and 0 is returned.
    /// A snapshot that does not parse or validate is rejected as a whole and
    /// the store is left unchanged. Returns the number of records read.
    pub fn load(&self, path: &Path) -> Result<usize, StoreError> {
        if !path.exists() {
            log::warn!("Store: no snapshot at {}, starting empty", path.display());
            return Ok(0);
        }
        let file = fs::File::open(path)?;
        self.load_snapshot(BufReader::new(file), &path.display().to_string())
    }

    /// Merge a snapshot read from `reader` into this store.
    pub fn load_from(&self, reader: impl Read) -> Result<usize, StoreError> {
        self.load_snapshot(reader, "<reader>")
    }

    /// Load from the bound default path. Without one, nothing is loaded.
    pub fn load_default(&self) -> Result<usize, StoreError> {
        match self.default_path.clone() {
            Some(path) => self.load(&path),
            None => Ok(0),
        }
    }

    /// Write the whole store to `path`, replacing it atomically.
    /// Returns the number of records written.
    pub fn save(&self, path: &Path) -> Result<usize, StoreError> {
        let _guard = self.structure.lock();
        self.save_locked(path)
    }

    /// Write the whole store as a snapshot to `writer`.
    pub fn save_to(&self, writer: impl Write) -> Result<usize, StoreError> {
        let _guard = self.structure.lock();
        self.write_snapshot(writer)
    }

    /// Save to the bound default path.
    pub fn save_default(&self) -> Result<usize, StoreError> {
        let path = self.default_path.clone().ok_or(StoreError::NoDefaultPath)?;
        self.save(&path)
    }

    fn load_snapshot(&self, reader: impl Read, origin: &str) -> Result<usize, StoreError> {
        let started = Instant::now();
        log::info!("Store: loading snapshot from {origin}");

        let snapshot: Snapshot =
            serde_json::from_reader(reader).map_err(|e| StoreError::corrupt(origin, e.to_string()))?;
        snapshot
            .validate()
            .map_err(|reason| StoreError::corrupt(origin, reason))?;

        let _guard = self.structure.lock();
        let count = snapshot.records.len();
        for record in snapshot.records {
            self.add(record);
        }
        *self.settings.write() = StoreSettings {
            language: snapshot.language,
            last_completion_update: snapshot.last_completion_update,
        };

        log::info!(
            "Store: loaded {count} records from {origin} in {}ms",
            started.elapsed().as_millis()
        );
        Ok(count)
    }

    /// Save without taking the structural lock; the caller holds it.
    pub(crate) fn save_locked(&self, path: &Path) -> Result<usize, StoreError> {
        let started = Instant::now();
        log::info!("Store: saving snapshot to {}", path.display());

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = tmp_path(path);
        let count = {
            let mut writer = BufWriter::new(fs::File::create(&tmp)?);
            let count = self.write_snapshot(&mut writer)?;
            writer.flush()?;
            count
        };
        fs::rename(&tmp, path)?;

        log::info!(
            "Store: saved {count} records to {} in {}ms",
            path.display(),
            started.elapsed().as_millis()
        );
        Ok(count)
    }

    fn write_snapshot(&self, writer: impl Write) -> Result<usize, StoreError> {
        let settings = *self.settings.read();
        let mut records: Vec<TitleRecord> = self.records.iter().map(|r| r.value().clone()).collect();
        records.sort_unstable_by_key(|r| r.id);

        let snapshot = Snapshot {
            language: settings.language,
            last_completion_update: settings.last_completion_update,
            records,
        };
        serde_json::to_writer_pretty(writer, &snapshot)?;
        Ok(snapshot.records.len())
    }
}

/// `database.json` -> `database.json.tmp`, next to the target.
fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
#[path = "tests/snapshot_tests.rs"]
mod tests;
