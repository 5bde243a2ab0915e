//! Title data model shared by every appshelf crate.
//!
//! Defines the canonical per-title record, its closed enumerations, and the
//! merge rules applied whenever two partial records for the same id meet.
//! Nothing here knows about storage or ingestion sources.

pub mod app_type;
pub mod language;
pub mod names;
pub mod platforms;
pub mod record;

pub use app_type::{AppType, AppTypeParseError};
pub use language::{LanguageParseError, StoreLanguage};
pub use names::NameSet;
pub use platforms::{PlatformParseError, Platforms};
pub use record::{
    Attribute, CompletionTimes, LanguageSupport, TitleRecord, VrSupport, hours_from_seconds,
};
