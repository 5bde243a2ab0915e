use std::path::{Path, PathBuf};

use appshelf_core::{AppType, StoreLanguage, TitleRecord};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use parking_lot::{Mutex, RwLock};

/// Process-wide settings persisted alongside the records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct StoreSettings {
    pub(crate) language: StoreLanguage,
    pub(crate) last_completion_update: i64,
}

/// Concurrent keyed collection of title records.
///
/// Per-id adds go through the map's entry API, so concurrent ingestion
/// never loses an update. Whole-store operations (snapshot load/save,
/// language change, reset) additionally serialize on a structural lock.
/// Guards on the map are never held across a lookup of another id.
#[derive(Debug, Default)]
pub struct TitleStore {
    pub(crate) records: DashMap<u32, TitleRecord>,
    pub(crate) settings: RwLock<StoreSettings>,
    pub(crate) structure: Mutex<()>,
    pub(crate) default_path: Option<PathBuf>,
}

impl TitleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store bound to a snapshot path, used by [`save_default`]
    /// and by [`change_language`].
    ///
    /// [`save_default`]: TitleStore::save_default
    /// [`change_language`]: TitleStore::change_language
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            default_path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn default_path(&self) -> Option<&Path> {
        self.default_path.as_deref()
    }

    // ── Records ─────────────────────────────────────────────────────────

    /// Insert `record`, or merge it into the record already stored under its
    /// id. Records with id 0 are ignored. Returns `true` when a new record
    /// was created.
    pub fn add(&self, record: TitleRecord) -> bool {
        if record.id == 0 {
            return false;
        }
        match self.records.entry(record.id) {
            Entry::Occupied(mut existing) => {
                existing.get_mut().merge_in(&record);
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    pub fn get(&self, id: u32) -> Option<TitleRecord> {
        self.records.get(&id).map(|r| r.clone())
    }

    pub fn contains(&self, id: u32) -> bool {
        self.records.contains_key(&id)
    }

    pub fn remove(&self, id: u32) -> Option<TitleRecord> {
        self.records.remove(&id).map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All ids, ascending.
    pub fn ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.records.iter().map(|r| *r.key()).collect();
        ids.sort_unstable();
        ids
    }

    /// Drop every record. Settings are kept.
    pub fn clear(&self) {
        let _guard = self.structure.lock();
        self.records.clear();
    }

    /// Drop every record and return settings to their defaults.
    pub fn reset(&self) {
        let _guard = self.structure.lock();
        self.records.clear();
        *self.settings.write() = StoreSettings::default();
        log::info!("Store: reset");
    }

    // ── Simple per-title queries ────────────────────────────────────────

    /// Stored name, or an empty string when the title or its name is unknown.
    pub fn name(&self, id: u32) -> String {
        self.records
            .get(&id)
            .and_then(|r| r.name.clone())
            .unwrap_or_default()
    }

    /// Release year, or 0 when unknown.
    pub fn release_year(&self, id: u32) -> i32 {
        self.records.get(&id).map_or(0, |r| r.release_year())
    }

    pub fn is_type(&self, id: u32, app_type: AppType) -> bool {
        self.records.get(&id).is_some_and(|r| r.app_type == app_type)
    }

    /// Whether the title belongs in a game list: a known Application, Game
    /// or Mod. Unknown ids are not listed.
    pub fn include_in_game_list(&self, id: u32) -> bool {
        self.records
            .get(&id)
            .is_some_and(|r| r.app_type.is_listable())
    }

    // ── Settings ────────────────────────────────────────────────────────

    pub fn language(&self) -> StoreLanguage {
        self.settings.read().language
    }

    pub fn language_code(&self) -> &'static str {
        self.language().code()
    }

    /// Unix seconds of the last completion-time import, 0 if never.
    pub fn last_completion_update(&self) -> i64 {
        self.settings.read().last_completion_update
    }

    /// Switch the store language.
    ///
    /// Every locale-dependent field of every record is cleared and marked
    /// stale, then the store is saved to its default path if it has one.
    /// Returns `false` without touching anything when the language is
    /// unchanged. Takes time proportional to the store size.
    pub fn change_language(&self, language: StoreLanguage) -> Result<bool, crate::StoreError> {
        let _guard = self.structure.lock();
        if !self.switch_language_locked(language) {
            return Ok(false);
        }
        if let Some(path) = &self.default_path {
            self.save_locked(path)?;
        }
        Ok(true)
    }

    /// Like [`change_language`](TitleStore::change_language) but never
    /// saves. Returns whether the language changed.
    pub fn switch_language(&self, language: StoreLanguage) -> bool {
        let _guard = self.structure.lock();
        self.switch_language_locked(language)
    }

    fn switch_language_locked(&self, language: StoreLanguage) -> bool {
        let previous = self.settings.read().language;
        if previous == language {
            return false;
        }

        let mut cleared = 0usize;
        for mut record in self.records.iter_mut() {
            if record.id > 0 {
                record.clear_localized();
                cleared += 1;
            }
        }
        self.settings.write().language = language;
        log::info!(
            "Store: language changed from {previous} to {language}, cleared localized data on {cleared} records"
        );
        true
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
