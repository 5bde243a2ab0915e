//! Attribute lookups that fall back through the parent chain.
//!
//! A DLC with no genres of its own reports its base game's genres. The
//! walk is iterative and bounded by `max_depth` parent hops, so a cycle in
//! `parent_id` ends the lookup instead of looping.

use appshelf_core::{Attribute, NameSet, TitleRecord};

use crate::store::TitleStore;

/// Parent hops followed when the caller has no preference.
pub const DEFAULT_FALLBACK_DEPTH: u32 = 3;

/// What one step of a parent walk found.
struct Step<T> {
    found: Option<T>,
    parent_id: u32,
}

impl TitleStore {
    /// Walk from `id` towards the root, returning the first value `probe`
    /// yields. Visits at most `max_depth + 1` records. Each probe runs under
    /// a short-lived guard that is dropped before the next id is read.
    fn walk_parents<T>(
        &self,
        id: u32,
        max_depth: u32,
        mut probe: impl FnMut(&TitleRecord) -> Option<T>,
    ) -> Option<T> {
        let mut current = id;
        for _ in 0..=max_depth {
            let step = self.records.get(&current).map(|record| Step {
                found: probe(record.value()),
                parent_id: record.parent_id,
            })?;
            if step.found.is_some() {
                return step.found;
            }
            if step.parent_id == 0 {
                return None;
            }
            current = step.parent_id;
        }
        None
    }

    /// The attribute for `id`, falling back to its ancestors while empty.
    /// Empty when nothing in the chain has it.
    pub fn resolve_attribute(&self, id: u32, attribute: Attribute, max_depth: u32) -> NameSet {
        self.walk_parents(id, max_depth, |record| {
            let values = record.attribute(attribute);
            (!values.is_empty()).then(|| values.clone())
        })
        .unwrap_or_default()
    }

    /// Genres for `id` with parent fallback.
    ///
    /// With `tag_fallback`, a record without genres first offers those of its
    /// tags that are genres somewhere in the store, before moving on to its
    /// parent.
    pub fn resolve_genres(&self, id: u32, max_depth: u32, tag_fallback: bool) -> NameSet {
        let mut vocabulary: Option<NameSet> = None;
        let mut current = id;
        for _ in 0..=max_depth {
            let Some((genres, tags, parent_id)) = self.records.get(&current).map(|r| {
                let tags = (tag_fallback && r.genres.is_empty()).then(|| r.tags.clone());
                (r.genres.clone(), tags, r.parent_id)
            }) else {
                break;
            };
            if !genres.is_empty() {
                return genres;
            }
            if let Some(tags) = tags.filter(|t| !t.is_empty()) {
                let known = vocabulary.get_or_insert_with(|| self.all_genres());
                let from_tags: NameSet = tags.iter().filter(|t| known.contains(t)).cloned().collect();
                if !from_tags.is_empty() {
                    return from_tags;
                }
            }
            if parent_id == 0 {
                break;
            }
            current = parent_id;
        }
        NameSet::new()
    }

    /// Whether `id` names any VR headset, input or play area, directly or
    /// through its ancestors.
    pub fn supports_vr(&self, id: u32, max_depth: u32) -> bool {
        self.walk_parents(id, max_depth, |record| {
            (!record.vr_support.is_empty()).then_some(())
        })
        .is_some()
    }
}

#[cfg(test)]
#[path = "tests/lookup_tests.rs"]
mod tests;
