use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;
use crate::settings::Settings;

/// Show the effective settings and where they come from.
pub(crate) fn run_config_show(settings: &Settings, settings_file: &Path) -> Result<(), CliError> {
    log::info!(
        "{}",
        "appshelf Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if settings_file.exists() {
        log::info!(
            "  Settings file: {} {}",
            settings_file.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            settings_file.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("");

    for line in settings.to_toml()?.lines() {
        log::info!("  {line}");
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path(settings_file: &Path) {
    log::info!("{}", settings_file.display());
}
