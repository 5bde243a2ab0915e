//! Entry points through which ingestion sources feed the store.

use std::path::Path;

use appshelf_core::{AppType, TitleRecord, hours_from_seconds};
use appshelf_vdf::{CacheScan, scan_file, scan_records};
use dashmap::mapref::entry::Entry;

use crate::error::StoreError;
use crate::store::TitleStore;

/// Outcome of one local-cache pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheIngestReport {
    /// Records added or merged.
    pub touched: usize,
    /// Cache sections that could not be decoded.
    pub skipped: usize,
}

/// One `(id, name)` pair from the public title list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicListEntry {
    pub id: u32,
    pub name: String,
}

/// A duration estimate in seconds, possibly imputed by the source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompletionEstimate {
    pub seconds: u64,
    pub imputed: bool,
}

impl CompletionEstimate {
    /// Whole hours, or 0 when the estimate is imputed and imputed values
    /// are not wanted.
    fn hours(self, include_imputed: bool) -> u32 {
        if self.imputed && !include_imputed {
            0
        } else {
            hours_from_seconds(self.seconds)
        }
    }
}

/// One row of the completion-time feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRow {
    pub id: u32,
    pub name: String,
    pub main: CompletionEstimate,
    pub extras: CompletionEstimate,
    pub completionist: CompletionEstimate,
}

impl TitleStore {
    /// Merge every title found in the local cache file at `path`.
    ///
    /// A missing file is reported as [`StoreError::SourceUnavailable`] and
    /// leaves the store untouched. Returns the number of records touched.
    pub fn ingest_from_local_cache(&self, path: &Path) -> Result<usize, StoreError> {
        if !path.is_file() {
            log::warn!("Cache: no cache file at {}", path.display());
            return Err(StoreError::source_unavailable(format!(
                "cache file not found: {}",
                path.display()
            )));
        }
        let scan = scan_file(path)?;
        let report = self.apply_cache_scan(scan, chrono::Utc::now().timestamp());
        log::info!(
            "Cache: updated {} records from {} ({} unreadable sections skipped)",
            report.touched,
            path.display(),
            report.skipped
        );
        Ok(report.touched)
    }

    /// Merge every title found in an in-memory cache image, stamping each
    /// touched record with `timestamp`.
    pub fn ingest_cache_bytes(&self, data: &[u8], timestamp: i64) -> CacheIngestReport {
        self.apply_cache_scan(scan_records(data), timestamp)
    }

    fn apply_cache_scan(&self, scan: CacheScan, timestamp: i64) -> CacheIngestReport {
        let mut report = CacheIngestReport {
            skipped: scan.skipped,
            ..Default::default()
        };
        for mut record in scan.records {
            if record.id == 0 {
                continue;
            }
            record.last_cache_update = timestamp;
            self.add(record);
            report.touched += 1;
        }
        report
    }

    /// Reconcile names against the public title list.
    ///
    /// Known titles whose stored name already matches are skipped. Known
    /// titles with a different name get the new name and their type reset to
    /// `Unknown`, since a rename often means a recategorization. Unknown ids
    /// become new minimal records. Returns the number of records created.
    pub fn reconcile_public_list(&self, entries: &[PublicListEntry]) -> usize {
        let mut added = 0usize;
        let mut updated = 0usize;
        for entry in entries {
            if entry.id == 0 {
                continue;
            }
            match self.records.entry(entry.id) {
                Entry::Occupied(mut existing) => {
                    let record = existing.get_mut();
                    let unchanged = record
                        .name
                        .as_deref()
                        .is_some_and(|name| !name.trim().is_empty() && name == entry.name);
                    if unchanged {
                        continue;
                    }
                    record.name = Some(entry.name.clone());
                    record.app_type = AppType::Unknown;
                    updated += 1;
                }
                Entry::Vacant(slot) => {
                    slot.insert(TitleRecord::new(entry.id).with_name(entry.name.clone()));
                    added += 1;
                }
            }
        }
        log::info!("Store: public list reconciled, added {added} and updated {updated} titles");
        added
    }

    /// Set completion-time estimates on the titles the store already knows.
    ///
    /// Imputed estimates become 0 unless `include_imputed`. Rows for unknown
    /// ids are ignored. Returns the number of records updated.
    pub fn apply_completion_times(&self, rows: &[CompletionRow], include_imputed: bool) -> usize {
        let mut updated = 0usize;
        for row in rows {
            let Some(mut record) = self.records.get_mut(&row.id) else {
                continue;
            };
            let times = &mut record.completion_times;
            times.main = row.main.hours(include_imputed);
            times.extras = row.extras.hours(include_imputed);
            times.completionist = row.completionist.hours(include_imputed);
            updated += 1;
        }
        self.settings.write().last_completion_update = chrono::Utc::now().timestamp();
        log::info!("Store: applied completion times to {updated} titles");
        updated
    }
}

#[cfg(test)]
#[path = "tests/ingest_tests.rs"]
mod tests;
