//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "appshelf")]
#[command(about = "Maintain a local database of store titles and their metadata", long_about = None)]
pub(crate) struct Cli {
    /// Snapshot file to use instead of the configured database
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Tag scoring knobs for the `tags` command.
#[derive(Args, Clone)]
pub(crate) struct TagArgs {
    /// Weight of each title's first tag (the last counted tag weighs 1)
    #[arg(short, long, default_value_t = 1.0)]
    pub weight: f32,

    /// Hide tags scoring below this
    #[arg(long, default_value_t = 0.0)]
    pub min_score: f32,

    /// Tags counted per title (0 counts all)
    #[arg(long, default_value_t = 0)]
    pub per_game: usize,

    /// Drop tags that are also genres
    #[arg(long)]
    pub exclude_genres: bool,

    /// Sort alphabetically instead of by score
    #[arg(long)]
    pub sort_by_name: bool,

    /// Maximum number of rows to print
    #[arg(short, long)]
    pub limit: Option<usize>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Merge titles from the local binary app-info cache
    ImportCache {
        /// Cache file (defaults to the configured appinfo_cache)
        path: Option<PathBuf>,
    },

    /// Reconcile names against the public title list
    FetchList,

    /// Fetch completion-time estimates for known titles
    FetchTimes {
        /// Keep estimates the source marks as imputed
        #[arg(long)]
        include_imputed: bool,
    },

    /// Fetch the public list and completion times concurrently
    Refresh {
        /// Keep estimates the source marks as imputed
        #[arg(long)]
        include_imputed: bool,
    },

    /// Show everything known about one title
    Show {
        /// Title id
        id: u32,

        /// Parent hops followed for inherited attributes
        #[arg(long, default_value_t = appshelf_store::DEFAULT_FALLBACK_DEPTH)]
        depth: u32,
    },

    /// Weighted tag frequencies across the store
    Tags {
        #[command(flatten)]
        args: TagArgs,
    },

    /// Developer counts across the store
    Developers {
        /// Hide developers credited on fewer titles
        #[arg(long, default_value_t = 1)]
        min: u32,
    },

    /// Publisher counts across the store
    Publishers {
        /// Hide publishers credited on fewer titles
        #[arg(long, default_value_t = 1)]
        min: u32,
    },

    /// Switch the store language (clears localized data)
    Language {
        /// Language name or code (e.g., german, de, schinese)
        name: String,
    },

    /// Summarize the store contents
    Stats,

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,
}
