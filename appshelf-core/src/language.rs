use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a language name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown store language: {0}")]
pub struct LanguageParseError(pub String);

/// Locale that scraped store text (tags, genres, flags, dates) is valid for.
///
/// Serialized with the store's own language identifiers (`"english"`,
/// `"schinese"`, `"koreana"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreLanguage {
    Arabic,
    Bulgarian,
    #[serde(rename = "schinese")]
    SimplifiedChinese,
    #[serde(rename = "tchinese")]
    TraditionalChinese,
    Czech,
    Danish,
    Dutch,
    #[default]
    English,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Italian,
    Japanese,
    #[serde(rename = "koreana")]
    Korean,
    Norwegian,
    Polish,
    Portuguese,
    #[serde(rename = "brazilian")]
    BrazilianPortuguese,
    Romanian,
    Russian,
    Spanish,
    #[serde(rename = "latam")]
    LatamSpanish,
    Swedish,
    Thai,
    Turkish,
    Ukrainian,
    Vietnamese,
}

const ALL_LANGUAGES: &[StoreLanguage] = &[
    StoreLanguage::Arabic,
    StoreLanguage::Bulgarian,
    StoreLanguage::SimplifiedChinese,
    StoreLanguage::TraditionalChinese,
    StoreLanguage::Czech,
    StoreLanguage::Danish,
    StoreLanguage::Dutch,
    StoreLanguage::English,
    StoreLanguage::Finnish,
    StoreLanguage::French,
    StoreLanguage::German,
    StoreLanguage::Greek,
    StoreLanguage::Hungarian,
    StoreLanguage::Italian,
    StoreLanguage::Japanese,
    StoreLanguage::Korean,
    StoreLanguage::Norwegian,
    StoreLanguage::Polish,
    StoreLanguage::Portuguese,
    StoreLanguage::BrazilianPortuguese,
    StoreLanguage::Romanian,
    StoreLanguage::Russian,
    StoreLanguage::Spanish,
    StoreLanguage::LatamSpanish,
    StoreLanguage::Swedish,
    StoreLanguage::Thai,
    StoreLanguage::Turkish,
    StoreLanguage::Ukrainian,
    StoreLanguage::Vietnamese,
];

impl StoreLanguage {
    pub fn all() -> &'static [StoreLanguage] {
        ALL_LANGUAGES
    }

    /// Store API identifier, also used in snapshots.
    pub fn api_name(&self) -> &'static str {
        match self {
            Self::Arabic => "arabic",
            Self::Bulgarian => "bulgarian",
            Self::SimplifiedChinese => "schinese",
            Self::TraditionalChinese => "tchinese",
            Self::Czech => "czech",
            Self::Danish => "danish",
            Self::Dutch => "dutch",
            Self::English => "english",
            Self::Finnish => "finnish",
            Self::French => "french",
            Self::German => "german",
            Self::Greek => "greek",
            Self::Hungarian => "hungarian",
            Self::Italian => "italian",
            Self::Japanese => "japanese",
            Self::Korean => "koreana",
            Self::Norwegian => "norwegian",
            Self::Polish => "polish",
            Self::Portuguese => "portuguese",
            Self::BrazilianPortuguese => "brazilian",
            Self::Romanian => "romanian",
            Self::Russian => "russian",
            Self::Spanish => "spanish",
            Self::LatamSpanish => "latam",
            Self::Swedish => "swedish",
            Self::Thai => "thai",
            Self::Turkish => "turkish",
            Self::Ukrainian => "ukrainian",
            Self::Vietnamese => "vietnamese",
        }
    }

    /// ISO-style language code (`"en"`, `"pt-BR"`, `"zh-Hans"`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::Bulgarian => "bg",
            Self::SimplifiedChinese => "zh-Hans",
            Self::TraditionalChinese => "zh-Hant",
            Self::Czech => "cs",
            Self::Danish => "da",
            Self::Dutch => "nl",
            Self::English => "en",
            Self::Finnish => "fi",
            Self::French => "fr",
            Self::German => "de",
            Self::Greek => "el",
            Self::Hungarian => "hu",
            Self::Italian => "it",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::Norwegian => "no",
            Self::Polish => "pl",
            Self::Portuguese => "pt",
            Self::BrazilianPortuguese => "pt-BR",
            Self::Romanian => "ro",
            Self::Russian => "ru",
            Self::Spanish => "es",
            Self::LatamSpanish => "es-419",
            Self::Swedish => "sv",
            Self::Thai => "th",
            Self::Turkish => "tr",
            Self::Ukrainian => "uk",
            Self::Vietnamese => "vi",
        }
    }
}

impl FromStr for StoreLanguage {
    type Err = LanguageParseError;

    /// Accepts the API identifier or the language code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ALL_LANGUAGES
            .iter()
            .copied()
            .find(|l| l.api_name().eq_ignore_ascii_case(s) || l.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| LanguageParseError(s.to_string()))
    }
}

impl fmt::Display for StoreLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}
