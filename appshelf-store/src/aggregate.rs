//! Store-wide unions and filtered aggregates.

use std::collections::HashMap;

use appshelf_core::{Attribute, LanguageSupport, NameSet, VrSupport};

use crate::store::TitleStore;

// ── Filter ──────────────────────────────────────────────────────────────────

/// The subset of titles an aggregate runs over, typically one user's game
/// list. Each member carries a hidden flag; hidden members are skipped.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    titles: HashMap<u32, bool>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: u32, hidden: bool) {
        self.titles.insert(id, hidden);
    }

    /// Whether `id` is a visible member.
    pub fn admits(&self, id: u32) -> bool {
        self.titles.get(&id) == Some(&false)
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

/// Every id visible.
impl FromIterator<u32> for FilterSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            titles: iter.into_iter().map(|id| (id, false)).collect(),
        }
    }
}

fn admitted(filter: Option<&FilterSet>, id: u32) -> bool {
    filter.is_none_or(|f| f.admits(id))
}

// ── Tag scoring ─────────────────────────────────────────────────────────────

/// Ordering of [`TitleStore::aggregate_tag_score`] results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagSort {
    /// Highest score first, ties by name.
    #[default]
    Score,
    Name,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagScoreOptions {
    /// Weight of each title's first tag. The last counted tag weighs 1.0.
    pub weight_factor: f32,
    pub min_score: f32,
    /// Tags counted per title, in stored order. 0 counts all of them.
    pub tags_per_game: usize,
    /// Drop tags that are also genres anywhere in the store.
    pub exclude_genres: bool,
    pub sort: TagSort,
}

impl Default for TagScoreOptions {
    fn default() -> Self {
        Self {
            weight_factor: 1.0,
            min_score: 0.0,
            tags_per_game: 0,
            exclude_genres: false,
            sort: TagSort::Score,
        }
    }
}

/// Per-position weights for a title with `count` counted tags.
///
/// Linear from `weight_factor` for the first tag down to 1.0 for the last.
/// A single tag gets `weight_factor`; a factor of 1 or less weighs every tag 1.0.
pub fn tag_weights(count: usize, weight_factor: f32) -> Vec<f32> {
    (0..count)
        .map(|i| {
            if weight_factor <= 1.0 {
                1.0
            } else if count == 1 {
                weight_factor
            } else {
                let inter = i as f32 / (count - 1) as f32;
                (1.0 - inter) * weight_factor + inter
            }
        })
        .collect()
}

// ── Aggregates ──────────────────────────────────────────────────────────────

impl TitleStore {
    /// Case-insensitive union of one attribute over every record, sorted.
    pub fn union_across_all(&self, attribute: Attribute) -> NameSet {
        let mut all = NameSet::new();
        for record in self.records.iter() {
            all.union_with(record.attribute(attribute));
        }
        all.sorted()
    }

    pub fn all_genres(&self) -> NameSet {
        self.union_across_all(Attribute::Genres)
    }

    pub fn all_flags(&self) -> NameSet {
        self.union_across_all(Attribute::Flags)
    }

    pub fn all_tags(&self) -> NameSet {
        self.union_across_all(Attribute::Tags)
    }

    pub fn all_developers(&self) -> NameSet {
        self.union_across_all(Attribute::Developers)
    }

    pub fn all_publishers(&self) -> NameSet {
        self.union_across_all(Attribute::Publishers)
    }

    pub fn all_languages(&self) -> LanguageSupport {
        LanguageSupport {
            full_audio: self.union_across_all(Attribute::FullAudio),
            interface: self.union_across_all(Attribute::Interface),
            subtitles: self.union_across_all(Attribute::Subtitles),
        }
    }

    pub fn all_vr_support(&self) -> VrSupport {
        VrSupport {
            headsets: self.union_across_all(Attribute::VrHeadsets),
            input: self.union_across_all(Attribute::VrInput),
            play_area: self.union_across_all(Attribute::VrPlayArea),
        }
    }

    /// Number of admitted titles naming each value of `attribute`, keeping
    /// only values counted at least `min_count` times. Unsorted.
    pub fn aggregate_count(
        &self,
        attribute: Attribute,
        filter: Option<&FilterSet>,
        min_count: u32,
    ) -> HashMap<String, u32> {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for record in self.records.iter() {
            if !admitted(filter, record.id) {
                continue;
            }
            for name in record.attribute(attribute) {
                *counts.entry(name.clone()).or_default() += 1;
            }
        }
        counts.retain(|_, count| *count >= min_count);
        counts
    }

    /// Weighted tag frequencies over the admitted titles.
    ///
    /// Each title contributes its first `tags_per_game` tags weighted by
    /// [`tag_weights`]. Scores below `min_score` are dropped.
    pub fn aggregate_tag_score(
        &self,
        filter: Option<&FilterSet>,
        options: &TagScoreOptions,
    ) -> Vec<(String, f32)> {
        // Computed before iterating so no map guard is held across it.
        let genres = options.exclude_genres.then(|| self.all_genres());

        let mut scores: HashMap<String, f32> = HashMap::new();
        for record in self.records.iter() {
            if !admitted(filter, record.id) {
                continue;
            }
            let count = match options.tags_per_game {
                0 => record.tags.len(),
                limit => limit.min(record.tags.len()),
            };
            let weights = tag_weights(count, options.weight_factor);
            for (tag, weight) in record.tags.iter().zip(weights) {
                *scores.entry(tag.clone()).or_default() += weight;
            }
        }

        let mut result: Vec<(String, f32)> = scores
            .into_iter()
            .filter(|(tag, _)| genres.as_ref().is_none_or(|g| !g.contains(tag)))
            .filter(|(_, score)| *score >= options.min_score)
            .collect();
        match options.sort {
            TagSort::Score => result.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))),
            TagSort::Name => result.sort_by(|a, b| a.0.cmp(&b.0)),
        }
        result
    }
}

#[cfg(test)]
#[path = "tests/aggregate_tests.rs"]
mod tests;
