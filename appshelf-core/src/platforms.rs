use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Error returned when a platform name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform: {0}")]
pub struct PlatformParseError(pub String);

/// Bit-set of operating systems a title runs on.
///
/// Serialized as a list of lowercase names (`["windows", "linux"]`) so
/// snapshots stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<String>", try_from = "Vec<String>")]
pub struct Platforms(u8);

const NAMED: [(Platforms, &str); 3] = [
    (Platforms::WINDOWS, "windows"),
    (Platforms::MAC, "mac"),
    (Platforms::LINUX, "linux"),
];

impl Platforms {
    pub const NONE: Self = Self(0);
    pub const WINDOWS: Self = Self(1);
    pub const MAC: Self = Self(1 << 1);
    pub const LINUX: Self = Self(1 << 2);
    pub const ALL: Self = Self(0b111);

    pub fn bits(self) -> u8 {
        self.0
    }

    /// Build from raw bits, dropping any bit outside [`Platforms::ALL`].
    pub fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    pub fn contains(self, other: Platforms) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, other: Platforms) {
        self.0 |= other.0;
    }

    /// Parse an OS list such as `"windows,macos,linux"`.
    ///
    /// Matching is a case-insensitive substring search, so separators and
    /// order do not matter.
    pub fn from_os_list(list: &str) -> Self {
        let lower = list.to_lowercase();
        let mut platforms = Self::NONE;
        for (platform, name) in NAMED {
            if lower.contains(name) {
                platforms.insert(platform);
            }
        }
        platforms
    }

    /// Lowercase names of the platforms in this set.
    pub fn names(self) -> Vec<&'static str> {
        NAMED
            .iter()
            .filter(|(platform, _)| self.contains(*platform))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl BitOr for Platforms {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Platforms {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for Platforms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        write!(f, "{}", self.names().join(", "))
    }
}

impl From<Platforms> for Vec<String> {
    fn from(platforms: Platforms) -> Self {
        platforms.names().into_iter().map(String::from).collect()
    }
}

impl TryFrom<Vec<String>> for Platforms {
    type Error = PlatformParseError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        let mut platforms = Platforms::NONE;
        for name in names {
            let lower = name.to_lowercase();
            match NAMED.iter().find(|(_, n)| *n == lower) {
                Some((platform, _)) => platforms.insert(*platform),
                None => return Err(PlatformParseError(name)),
            }
        }
        Ok(platforms)
    }
}
