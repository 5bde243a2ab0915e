use std::path::Path;

use appshelf_core::StoreLanguage;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::commands::open_store;
use crate::error::CliError;
use crate::settings::Settings;

/// Switch the store language and remember it in the settings file.
///
/// The store saves itself as part of the switch, so no explicit save
/// follows here.
pub(crate) fn run_language(settings: &mut Settings, settings_file: &Path, name: &str) -> Result<(), CliError> {
    let language: StoreLanguage = name.parse().map_err(|e| {
        let known: Vec<&str> = StoreLanguage::all().iter().map(|l| l.api_name()).collect();
        CliError::config(format!("{e} (known: {})", known.join(", ")))
    })?;

    let store = open_store(settings)?;
    let previous = store.language();
    let changed = store.change_language(language)?;

    if settings.language != language {
        settings.language = language;
        settings.save_to(settings_file)?;
    }

    if changed {
        log::info!(
            "{} Language changed from {} to {}; localized data cleared on {} titles",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
            previous,
            language.if_supports_color(Stdout, |t| t.bold()),
            store.len(),
        );
    } else {
        log::info!("Language is already {language}");
    }
    Ok(())
}
