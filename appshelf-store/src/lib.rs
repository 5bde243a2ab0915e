//! The title database.
//!
//! [`TitleStore`] owns one merged [`TitleRecord`](appshelf_core::TitleRecord)
//! per title id. Ingestion sources hand it partial records, queries read
//! resolved attributes and aggregates, and the whole store round-trips
//! through a JSON snapshot.

pub mod aggregate;
pub mod error;
pub mod ingest;
pub mod lookup;
pub mod snapshot;
pub mod store;

pub use aggregate::{FilterSet, TagScoreOptions, TagSort, tag_weights};
pub use error::StoreError;
pub use ingest::{CacheIngestReport, CompletionEstimate, CompletionRow, PublicListEntry};
pub use lookup::DEFAULT_FALLBACK_DEPTH;
pub use store::TitleStore;
