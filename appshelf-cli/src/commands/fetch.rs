use appshelf_import::{FeedClient, refresh_all, refresh_completion_times, refresh_public_list};
use appshelf_store::TitleStore;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::commands::{open_store, save_store};
use crate::error::CliError;
use crate::settings::Settings;
use crate::spinner::fetch_spinner;

fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to create async runtime: {e}")))
}

fn prepare(settings: &Settings) -> Result<(FeedClient, TitleStore), CliError> {
    let client = FeedClient::new(settings.feed_config())?;
    let store = open_store(settings)?;
    Ok((client, store))
}

/// Reconcile names against the public title list.
pub(crate) fn run_fetch_list(settings: &Settings, quiet: bool) -> Result<(), CliError> {
    let (client, store) = prepare(settings)?;
    let rt = runtime()?;

    let pb = fetch_spinner("Fetching public title list...", quiet);
    let result = rt.block_on(refresh_public_list(&client, &store));
    pb.finish_and_clear();

    let added = result?;
    save_store(&store)?;
    log::info!(
        "{} Public list reconciled: {} new titles ({} total)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        added,
        store.len(),
    );
    Ok(())
}

/// Apply completion-time estimates to known titles.
pub(crate) fn run_fetch_times(settings: &Settings, include_imputed: bool, quiet: bool) -> Result<(), CliError> {
    let (client, store) = prepare(settings)?;
    let rt = runtime()?;

    let pb = fetch_spinner("Fetching completion times...", quiet);
    let result = rt.block_on(refresh_completion_times(&client, &store, include_imputed));
    pb.finish_and_clear();

    let updated = result?;
    save_store(&store)?;
    log::info!(
        "{} Completion times applied to {} titles",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        updated,
    );
    Ok(())
}

/// Run both feeds concurrently. The store is saved if either succeeded.
pub(crate) fn run_refresh(settings: &Settings, include_imputed: bool, quiet: bool) -> Result<(), CliError> {
    let (client, store) = prepare(settings)?;
    let rt = runtime()?;

    let pb = fetch_spinner("Refreshing remote feeds...", quiet);
    let report = rt.block_on(refresh_all(&client, &store, include_imputed));
    pb.finish_and_clear();

    let mut succeeded = 0;
    match &report.public_list {
        Ok(added) => {
            succeeded += 1;
            log::info!(
                "  {} Public list: {} new titles",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                added,
            );
        }
        Err(e) => log::info!(
            "  {} Public list: {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        ),
    }
    match &report.completion_times {
        Ok(updated) => {
            succeeded += 1;
            log::info!(
                "  {} Completion times: {} titles updated",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                updated,
            );
        }
        Err(e) => log::info!(
            "  {} Completion times: {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        ),
    }

    if succeeded == 0 {
        return Err(CliError::import("every remote feed failed"));
    }
    save_store(&store)
}
