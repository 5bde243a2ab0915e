use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::commands::{open_store, save_store};
use crate::error::CliError;
use crate::settings::Settings;

/// Merge the local app-info cache into the store and save it.
pub(crate) fn run_import_cache(settings: &Settings, path: Option<PathBuf>) -> Result<(), CliError> {
    let path = path.or_else(|| settings.appinfo_cache.clone()).ok_or_else(|| {
        CliError::config("no cache file given; pass a path or set appinfo_cache in settings.toml")
    })?;

    let store = open_store(settings)?;
    let before = store.len();
    let touched = store.ingest_from_local_cache(&path)?;
    save_store(&store)?;

    log::info!(
        "{} Imported {} titles from {} ({} new, {} total)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        touched,
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        store.len().saturating_sub(before),
        store.len(),
    );
    Ok(())
}
