use std::collections::HashMap;

use appshelf_core::{AppType, Attribute, NameSet, TitleRecord};
use appshelf_store::{TagScoreOptions, TagSort, TitleStore};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::cli_types::TagArgs;
use crate::commands::open_store;
use crate::error::CliError;
use crate::settings::Settings;

/// Print one title, with inherited attributes resolved through its parents.
pub(crate) fn run_show(settings: &Settings, id: u32, depth: u32) -> Result<(), CliError> {
    let store = open_store(settings)?;
    let record = store
        .get(id)
        .ok_or_else(|| CliError::other(format!("No title with id {id}")))?;

    let name = record.name.as_deref().unwrap_or("(unnamed)");
    log::info!(
        "{} {}",
        name.if_supports_color(Stdout, |t| t.bold()),
        format!("[{id}]").if_supports_color(Stdout, |t| t.dimmed()),
    );
    for (label, value) in describe(&store, &record, depth) {
        log::info!("  {:<14} {}", format!("{label}:"), value);
    }
    Ok(())
}

/// Label/value lines for `show`. Empty attributes are left out.
fn describe(store: &TitleStore, record: &TitleRecord, depth: u32) -> Vec<(&'static str, String)> {
    let mut lines = vec![("Type", record.app_type.to_string())];
    lines.push(("Platforms", record.platforms().to_string()));
    if record.parent_id > 0 {
        let parent = store.name(record.parent_id);
        lines.push(("Parent", format!("{} [{}]", parent, record.parent_id)));
    }
    if let Some(date) = &record.release_date {
        lines.push(("Released", date.clone()));
    }

    let genres = store.resolve_genres(record.id, depth, true);
    let attributes = [
        ("Genres", genres),
        ("Tags", record.tags.clone()),
        ("Flags", store.resolve_attribute(record.id, Attribute::Flags, depth)),
        ("Developers", store.resolve_attribute(record.id, Attribute::Developers, depth)),
        ("Publishers", store.resolve_attribute(record.id, Attribute::Publishers, depth)),
        ("Audio", record.language_support.full_audio.clone()),
        ("Interface", record.language_support.interface.clone()),
        ("Subtitles", record.language_support.subtitles.clone()),
        ("VR headsets", record.vr_support.headsets.clone()),
    ];
    for (label, values) in attributes {
        if !values.is_empty() {
            lines.push((label, join_names(&values)));
        }
    }
    if store.supports_vr(record.id, depth) && record.vr_support.is_empty() {
        lines.push(("VR", "inherited from parent".to_string()));
    }

    let times = &record.completion_times;
    if !times.is_empty() {
        lines.push((
            "Completion",
            format!(
                "main {}, extras {}, completionist {}",
                format_hours(times.main),
                format_hours(times.extras),
                format_hours(times.completionist)
            ),
        ));
    }
    lines.push(("Cache update", format_timestamp(record.last_cache_update)));
    lines
}

/// Weighted tag table.
pub(crate) fn run_tags(settings: &Settings, args: &TagArgs) -> Result<(), CliError> {
    let store = open_store(settings)?;
    let options = TagScoreOptions {
        weight_factor: args.weight,
        min_score: args.min_score,
        tags_per_game: args.per_game,
        exclude_genres: args.exclude_genres,
        sort: if args.sort_by_name {
            TagSort::Name
        } else {
            TagSort::Score
        },
    };
    let scores = store.aggregate_tag_score(None, &options);
    if scores.is_empty() {
        log::info!("{}", "No tags found.".if_supports_color(Stdout, |t| t.dimmed()));
        return Ok(());
    }

    let limit = args.limit.unwrap_or(usize::MAX);
    let width = scores.iter().take(limit).map(|(tag, _)| tag.len()).max().unwrap_or(0);
    for (tag, score) in scores.iter().take(limit) {
        log::info!(
            "  {:<width$}  {}",
            tag,
            format!("{score:.1}").if_supports_color(Stdout, |t| t.cyan()),
        );
    }
    if scores.len() > limit {
        log::info!("  ... and {} more", scores.len() - limit);
    }
    Ok(())
}

pub(crate) fn run_developers(settings: &Settings, min: u32) -> Result<(), CliError> {
    print_counts(settings, Attribute::Developers, min)
}

pub(crate) fn run_publishers(settings: &Settings, min: u32) -> Result<(), CliError> {
    print_counts(settings, Attribute::Publishers, min)
}

fn print_counts(settings: &Settings, attribute: Attribute, min: u32) -> Result<(), CliError> {
    let store = open_store(settings)?;
    let counts = sorted_counts(store.aggregate_count(attribute, None, min));
    if counts.is_empty() {
        log::info!(
            "{}",
            format!("No {} found.", attribute.name()).if_supports_color(Stdout, |t| t.dimmed())
        );
        return Ok(());
    }
    for (name, count) in &counts {
        log::info!(
            "  {:>5}  {}",
            count.if_supports_color(Stdout, |t| t.cyan()),
            name
        );
    }
    log::info!("");
    log::info!("Total: {} {}", counts.len(), attribute.name());
    Ok(())
}

/// Highest count first, ties by name.
fn sorted_counts(counts: HashMap<String, u32>) -> Vec<(String, u32)> {
    let mut counts: Vec<(String, u32)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Record counts per type, language and freshness.
pub(crate) fn run_stats(settings: &Settings) -> Result<(), CliError> {
    let store = open_store(settings)?;

    log::info!(
        "{}",
        "Title database".if_supports_color(Stdout, |t| t.bold())
    );
    log::info!("  Path:      {}", settings.database.display());
    log::info!("  Titles:    {}", store.len());
    log::info!(
        "  Language:  {} ({})",
        store.language(),
        store.language_code()
    );
    log::info!(
        "  Completion times updated: {}",
        format_timestamp(store.last_completion_update())
    );
    log::info!("");

    for (app_type, count) in type_counts(&store) {
        log::info!("  {:<12} {}", app_type.to_string(), count);
    }
    log::info!("");
    log::info!(
        "  {} genres, {} tags, {} developers, {} publishers",
        store.all_genres().len(),
        store.all_tags().len(),
        store.all_developers().len(),
        store.all_publishers().len(),
    );
    Ok(())
}

/// Non-zero per-type counts in declaration order.
fn type_counts(store: &TitleStore) -> Vec<(AppType, usize)> {
    let mut counts: HashMap<AppType, usize> = HashMap::new();
    for id in store.ids() {
        if let Some(record) = store.get(id) {
            *counts.entry(record.app_type).or_default() += 1;
        }
    }
    AppType::all()
        .iter()
        .filter_map(|t| counts.get(t).map(|&n| (*t, n)))
        .collect()
}

fn join_names(names: &NameSet) -> String {
    names.as_slice().join(", ")
}

fn format_hours(hours: u32) -> String {
    if hours == 0 { "-".to_string() } else { format!("{hours}h") }
}

fn format_timestamp(secs: i64) -> String {
    if secs <= 0 {
        return "never".to_string();
    }
    chrono::DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| "never".to_string())
}
