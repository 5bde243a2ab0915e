use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a type string names no known [`AppType`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown app type: {0}")]
pub struct AppTypeParseError(pub String);

/// Category of a title. A closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AppType {
    Application,
    Demo,
    #[serde(alias = "DLC")]
    Dlc,
    Game,
    Media,
    Tool,
    Other,
    #[default]
    Unknown,
    Mod,
}

/// All variants in declaration order.
const ALL_APP_TYPES: &[AppType] = &[
    AppType::Application,
    AppType::Demo,
    AppType::Dlc,
    AppType::Game,
    AppType::Media,
    AppType::Tool,
    AppType::Other,
    AppType::Unknown,
    AppType::Mod,
];

impl AppType {
    pub fn all() -> &'static [AppType] {
        ALL_APP_TYPES
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Application => "Application",
            Self::Demo => "Demo",
            Self::Dlc => "DLC",
            Self::Game => "Game",
            Self::Media => "Media",
            Self::Tool => "Tool",
            Self::Other => "Other",
            Self::Unknown => "Unknown",
            Self::Mod => "Mod",
        }
    }

    /// Map a raw type string from a data source onto the enumeration.
    ///
    /// Absent or blank maps to `Unknown`; any other string that names no
    /// variant maps to `Other`.
    pub fn from_type_string(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::Unknown,
            Some(s) => s.parse().unwrap_or(Self::Other),
        }
    }

    /// Types that count as a playable entry in a game list.
    pub fn is_listable(&self) -> bool {
        matches!(self, Self::Application | Self::Game | Self::Mod)
    }
}

impl FromStr for AppType {
    type Err = AppTypeParseError;

    /// Case-insensitive match against the variant names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_APP_TYPES
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppTypeParseError(s.to_string()))
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
