//! Remote ingestion adapters.
//!
//! Two feeds supplement the local cache: the public list of every title id
//! and name, and a table of completion-time estimates. Each adapter fetches
//! its payload with a bounded timeout, parses it into the store's partial
//! record types and hands those to the [`TitleStore`](appshelf_store::TitleStore).
//! Parsing is separate from fetching so it can be tested offline.

pub mod app_list;
pub mod client;
pub mod completion;
pub mod error;
pub mod refresh;

pub use app_list::parse_app_list;
pub use client::{DEFAULT_APP_LIST_URL, DEFAULT_TIMEOUT, FeedClient, FeedConfig};
pub use completion::parse_completion_csv;
pub use error::ImportError;
pub use refresh::{RefreshReport, refresh_all, refresh_completion_times, refresh_public_list};
