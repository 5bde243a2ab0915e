//! Fetch-parse-apply pipelines for the remote feeds.
//!
//! A failed fetch or parse aborts only its own feed; the store keeps its
//! prior state for that source.

use appshelf_store::TitleStore;

use crate::app_list::parse_app_list;
use crate::client::FeedClient;
use crate::completion::parse_completion_csv;
use crate::error::ImportError;

/// Per-feed outcome of [`refresh_all`].
#[derive(Debug)]
pub struct RefreshReport {
    /// Titles created from the public list.
    pub public_list: Result<usize, ImportError>,
    /// Titles given completion times.
    pub completion_times: Result<usize, ImportError>,
}

/// Fetch the public list and reconcile names. Returns titles created.
pub async fn refresh_public_list(client: &FeedClient, store: &TitleStore) -> Result<usize, ImportError> {
    let payload = client.fetch_app_list().await?;
    let entries = parse_app_list(&payload)?;
    log::info!("Parsed {} public list entries", entries.len());
    Ok(store.reconcile_public_list(&entries))
}

/// Fetch completion times and apply them. Returns titles updated.
pub async fn refresh_completion_times(
    client: &FeedClient,
    store: &TitleStore,
    include_imputed: bool,
) -> Result<usize, ImportError> {
    let payload = client.fetch_completion_times().await?;
    let rows = parse_completion_csv(&payload)?;
    log::info!("Parsed {} completion time rows", rows.len());
    Ok(store.apply_completion_times(&rows, include_imputed))
}

/// Run both refreshes concurrently. Neither outcome affects the other.
pub async fn refresh_all(client: &FeedClient, store: &TitleStore, include_imputed: bool) -> RefreshReport {
    let (public_list, completion_times) = tokio::join!(
        refresh_public_list(client, store),
        refresh_completion_times(client, store, include_imputed),
    );
    if let Err(e) = &public_list {
        log::warn!("Public list refresh failed: {e}");
    }
    if let Err(e) = &completion_times {
        log::warn!("Completion time refresh failed: {e}");
    }
    RefreshReport {
        public_list,
        completion_times,
    }
}
