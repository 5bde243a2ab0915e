pub(crate) mod cache;
pub(crate) mod config;
pub(crate) mod fetch;
pub(crate) mod language;
pub(crate) mod query;

use appshelf_store::TitleStore;

use crate::error::CliError;
use crate::settings::Settings;

/// Open the configured snapshot. A missing file gives an empty store bound
/// to that path.
pub(crate) fn open_store(settings: &Settings) -> Result<TitleStore, CliError> {
    let store = TitleStore::at(&settings.database);
    store.load_default()?;
    if store.is_empty() {
        // Nothing localized to clear yet, so adopt the configured language
        // without writing a snapshot.
        store.switch_language(settings.language);
    } else if store.language() != settings.language {
        log::warn!(
            "Database language is {} but settings ask for {}; run 'appshelf language {}' to switch",
            store.language(),
            settings.language,
            settings.language,
        );
    }
    Ok(store)
}

/// Persist the store to the path it was opened from.
pub(crate) fn save_store(store: &TitleStore) -> Result<(), CliError> {
    store.save_default()?;
    Ok(())
}
