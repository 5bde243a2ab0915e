//! The canonical per-title record and its merge rules.

use serde::{Deserialize, Serialize};

use crate::app_type::AppType;
use crate::names::NameSet;
use crate::platforms::Platforms;

// ── Grouped attributes ──────────────────────────────────────────────────────

/// Languages a title supports, split by kind of support.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageSupport {
    pub full_audio: NameSet,
    pub interface: NameSet,
    pub subtitles: NameSet,
}

impl LanguageSupport {
    pub fn is_empty(&self) -> bool {
        self.full_audio.is_empty() && self.interface.is_empty() && self.subtitles.is_empty()
    }

    pub fn union_with(&mut self, other: &LanguageSupport) {
        self.full_audio.union_with(&other.full_audio);
        self.interface.union_with(&other.interface);
        self.subtitles.union_with(&other.subtitles);
    }
}

/// VR hardware a title supports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VrSupport {
    pub headsets: NameSet,
    pub input: NameSet,
    pub play_area: NameSet,
}

impl VrSupport {
    pub fn is_empty(&self) -> bool {
        self.headsets.is_empty() && self.input.is_empty() && self.play_area.is_empty()
    }

    pub fn union_with(&mut self, other: &VrSupport) {
        self.headsets.union_with(&other.headsets);
        self.input.union_with(&other.input);
        self.play_area.union_with(&other.play_area);
    }
}

/// Completion-time estimates in whole hours. Zero means unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionTimes {
    pub main: u32,
    pub extras: u32,
    pub completionist: u32,
}

impl CompletionTimes {
    pub fn is_empty(&self) -> bool {
        self.main == 0 && self.extras == 0 && self.completionist == 0
    }

    fn merge_in(&mut self, other: &CompletionTimes) {
        if other.main > 0 {
            self.main = other.main;
        }
        if other.extras > 0 {
            self.extras = other.extras;
        }
        if other.completionist > 0 {
            self.completionist = other.completionist;
        }
    }
}

/// Convert a duration in seconds to whole hours, rounding up.
pub fn hours_from_seconds(seconds: u64) -> u32 {
    u32::try_from(seconds.div_ceil(3600)).unwrap_or(u32::MAX)
}

// ── Attribute selector ──────────────────────────────────────────────────────

/// Selects one set-valued attribute of a [`TitleRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Genres,
    Tags,
    Flags,
    Developers,
    Publishers,
    FullAudio,
    Interface,
    Subtitles,
    VrHeadsets,
    VrInput,
    VrPlayArea,
}

impl Attribute {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Genres => "genres",
            Self::Tags => "tags",
            Self::Flags => "flags",
            Self::Developers => "developers",
            Self::Publishers => "publishers",
            Self::FullAudio => "full audio",
            Self::Interface => "interface",
            Self::Subtitles => "subtitles",
            Self::VrHeadsets => "vr headsets",
            Self::VrInput => "vr input",
            Self::VrPlayArea => "vr play area",
        }
    }
}

// ── TitleRecord ─────────────────────────────────────────────────────────────

/// Everything known about one title.
///
/// A record produced by an ingestion source is usually partial: fields it
/// knows nothing about stay at their defaults, and [`TitleRecord::merge_in`]
/// treats defaults as "no information".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleRecord {
    pub id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub app_type: AppType,
    /// `None` means unknown, which reads as every platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Platforms>,
    /// 0 means no parent.
    pub parent_id: u32,
    #[serde(skip_serializing_if = "NameSet::is_empty")]
    pub genres: NameSet,
    #[serde(skip_serializing_if = "NameSet::is_empty")]
    pub tags: NameSet,
    #[serde(skip_serializing_if = "NameSet::is_empty")]
    pub flags: NameSet,
    #[serde(skip_serializing_if = "NameSet::is_empty")]
    pub developers: NameSet,
    #[serde(skip_serializing_if = "NameSet::is_empty")]
    pub publishers: NameSet,
    #[serde(skip_serializing_if = "LanguageSupport::is_empty")]
    pub language_support: LanguageSupport,
    #[serde(skip_serializing_if = "VrSupport::is_empty")]
    pub vr_support: VrSupport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "CompletionTimes::is_empty")]
    pub completion_times: CompletionTimes,
    /// Unix seconds of the last local-cache ingestion that touched this record.
    pub last_cache_update: i64,
    /// Unix seconds of the last store scrape. 1 marks data as stale.
    pub last_store_scrape: i64,
}

impl TitleRecord {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_type(mut self, app_type: AppType) -> Self {
        self.app_type = app_type;
        self
    }

    pub fn with_parent(mut self, parent_id: u32) -> Self {
        self.parent_id = parent_id;
        self
    }

    pub fn with_platforms(mut self, platforms: Platforms) -> Self {
        self.platforms = Some(platforms);
        self
    }

    /// Platforms the title runs on; unknown reads as all of them.
    pub fn platforms(&self) -> Platforms {
        self.platforms.unwrap_or(Platforms::ALL)
    }

    pub fn attribute(&self, attribute: Attribute) -> &NameSet {
        match attribute {
            Attribute::Genres => &self.genres,
            Attribute::Tags => &self.tags,
            Attribute::Flags => &self.flags,
            Attribute::Developers => &self.developers,
            Attribute::Publishers => &self.publishers,
            Attribute::FullAudio => &self.language_support.full_audio,
            Attribute::Interface => &self.language_support.interface,
            Attribute::Subtitles => &self.language_support.subtitles,
            Attribute::VrHeadsets => &self.vr_support.headsets,
            Attribute::VrInput => &self.vr_support.input,
            Attribute::VrPlayArea => &self.vr_support.play_area,
        }
    }

    /// Fold another record for the same title into this one.
    ///
    /// Scalars are overwritten only by values that carry information (a
    /// non-empty name, a type other than `Unknown`, a parent id above 0).
    /// Sets are unioned and freshness timestamps take the maximum. Platforms
    /// are replaced only when ours are unknown or empty, or when the incoming
    /// record is at least as fresh from the store and names a platform.
    pub fn merge_in(&mut self, other: &TitleRecord) {
        if let Some(name) = other.name.as_deref().filter(|n| !n.trim().is_empty()) {
            self.name = Some(name.to_string());
        }
        if other.app_type != AppType::Unknown {
            self.app_type = other.app_type;
        }
        if let Some(incoming) = other.platforms {
            let ours_unknown = self.platforms.is_none_or(Platforms::is_empty);
            let fresh_enough = other.last_store_scrape >= self.last_store_scrape;
            if ours_unknown || (!incoming.is_empty() && fresh_enough) {
                self.platforms = Some(incoming);
            }
        }
        if other.parent_id > 0 {
            self.parent_id = other.parent_id;
        }

        self.genres.union_with(&other.genres);
        self.tags.union_with(&other.tags);
        self.flags.union_with(&other.flags);
        self.developers.union_with(&other.developers);
        self.publishers.union_with(&other.publishers);
        self.language_support.union_with(&other.language_support);
        self.vr_support.union_with(&other.vr_support);

        if let Some(date) = other.release_date.as_deref().filter(|d| !d.trim().is_empty()) {
            self.release_date = Some(date.to_string());
        }
        self.completion_times.merge_in(&other.completion_times);

        self.last_cache_update = self.last_cache_update.max(other.last_cache_update);
        self.last_store_scrape = self.last_store_scrape.max(other.last_store_scrape);
    }

    /// Drop every locale-dependent field and mark the store data as stale.
    pub fn clear_localized(&mut self) {
        self.tags.clear();
        self.flags.clear();
        self.genres.clear();
        self.release_date = None;
        self.vr_support = VrSupport::default();
        self.language_support = LanguageSupport::default();
        self.last_store_scrape = 1;
    }

    /// Year of the release date, or 0 when it has none.
    ///
    /// Takes the first run of exactly four digits, which covers `2019-05-03`,
    /// `3 May, 2019` and `May 3, 2019` alike.
    pub fn release_year(&self) -> i32 {
        let Some(date) = self.release_date.as_deref() else {
            return 0;
        };
        date.split(|c: char| !c.is_ascii_digit())
            .find(|run| run.len() == 4)
            .and_then(|run| run.parse().ok())
            .unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
