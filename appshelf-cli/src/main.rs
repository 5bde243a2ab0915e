//! appshelf CLI
//!
//! Command-line interface for building and querying a local title database.

mod cli_types;
mod commands;
mod error;
mod settings;
mod spinner;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{Cli, Commands, ConfigAction};
use commands::cache::run_import_cache;
use commands::config::{run_config_path, run_config_show};
use commands::fetch::{run_fetch_list, run_fetch_times, run_refresh};
use commands::language::run_language;
use commands::query::{run_developers, run_publishers, run_show, run_stats, run_tags};
use error::CliError;
use settings::{Settings, settings_path};

fn main() {
    let cli = Cli::parse();
    init_logger(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let path = settings_path();
    let mut settings = Settings::load_from(&path)?;
    if let Some(database) = cli.database {
        settings.database = database;
    }

    match cli.command {
        Commands::ImportCache { path } => run_import_cache(&settings, path),
        Commands::FetchList => run_fetch_list(&settings, cli.quiet),
        Commands::FetchTimes { include_imputed } => {
            run_fetch_times(&settings, include_imputed || settings.include_imputed_times, cli.quiet)
        }
        Commands::Refresh { include_imputed } => {
            run_refresh(&settings, include_imputed || settings.include_imputed_times, cli.quiet)
        }
        Commands::Show { id, depth } => run_show(&settings, id, depth),
        Commands::Tags { args } => run_tags(&settings, &args),
        Commands::Developers { min } => run_developers(&settings, min),
        Commands::Publishers { min } => run_publishers(&settings, min),
        Commands::Language { name } => run_language(&mut settings, &path, &name),
        Commands::Stats => run_stats(&settings),
        Commands::Config { action } => match action {
            ConfigAction::Show => run_config_show(&settings, &path),
            ConfigAction::Path => {
                run_config_path(&path);
                Ok(())
            }
        },
    }
}

/// Plain messages at info, a colored level prefix for everything else.
/// `RUST_LOG` overrides the level chosen by the flags.
fn init_logger(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            log::Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            log::Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            _ => writeln!(
                buf,
                "{}",
                record.args().if_supports_color(Stdout, |t| t.dimmed())
            ),
        })
        .init();
}
