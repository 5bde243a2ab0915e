use serde::{Deserialize, Serialize};

/// A set of names that are unique ignoring case.
///
/// Names keep their first-inserted spelling and their insertion order. Order
/// matters to callers that weight entries by position (tag scoring), so this
/// is a `Vec` rather than a hash set. Sets are small (tens of entries), which
/// keeps the linear membership check cheap.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct NameSet {
    items: Vec<String>,
}

impl NameSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, name: &str) -> bool {
        let folded = name.to_lowercase();
        self.items.iter().any(|s| s.to_lowercase() == folded)
    }

    /// Insert a name unless an equal one (ignoring case) is present.
    ///
    /// Blank names are ignored. Returns `true` if the set changed.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if name.trim().is_empty() || self.contains(&name) {
            return false;
        }
        self.items.push(name);
        true
    }

    /// Add every name from `other` that is not already present.
    pub fn union_with(&mut self, other: &NameSet) {
        for name in &other.items {
            self.insert(name.clone());
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Copy of the set ordered case-insensitively, for display and vocabularies.
    pub fn sorted(&self) -> NameSet {
        let mut items = self.items.clone();
        items.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then(a.cmp(b)));
        NameSet { items }
    }
}

impl From<Vec<String>> for NameSet {
    fn from(items: Vec<String>) -> Self {
        items.into_iter().collect()
    }
}

impl From<NameSet> for Vec<String> {
    fn from(set: NameSet) -> Self {
        set.items
    }
}

impl<S: Into<String>> FromIterator<S> for NameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = NameSet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

impl<'a> IntoIterator for &'a NameSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for NameSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
