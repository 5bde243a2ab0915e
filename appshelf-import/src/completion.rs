//! Completion-time feed.
//!
//! A CSV table with a header row. Durations are in seconds; each duration
//! column may have a companion `*_imputed` flag column.
//!
//! ```text
//! steam_id,game_name,comp_main,comp_plus,comp_100,comp_main_imputed,...
//! 220,Half-Life 2,46800,64800,90000,0,0,1
//! ```

use appshelf_store::{CompletionEstimate, CompletionRow};

use crate::error::ImportError;

/// Text the feed serves in place of data when it fails.
pub const ERROR_MARKER: &str = "An error has occurred.";

/// Column positions resolved from the header row.
struct Columns {
    id: usize,
    name: Option<usize>,
    main: Option<usize>,
    extras: Option<usize>,
    completionist: Option<usize>,
    main_imputed: Option<usize>,
    extras_imputed: Option<usize>,
    completionist_imputed: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, ImportError> {
        let find = |name: &str| headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name));
        Ok(Self {
            id: find("steam_id")
                .ok_or_else(|| ImportError::source_unavailable("completion feed has no steam_id column"))?,
            name: find("game_name"),
            main: find("comp_main"),
            extras: find("comp_plus"),
            completionist: find("comp_100"),
            main_imputed: find("comp_main_imputed"),
            extras_imputed: find("comp_plus_imputed"),
            completionist_imputed: find("comp_100_imputed"),
        })
    }
}

fn field(record: &csv::StringRecord, column: Option<usize>) -> &str {
    column.and_then(|i| record.get(i)).unwrap_or("").trim()
}

fn is_flag_set(value: &str) -> bool {
    ["1", "true", "yes"].iter().any(|t| value.eq_ignore_ascii_case(t))
}

fn estimate(record: &csv::StringRecord, seconds: Option<usize>, imputed: Option<usize>) -> CompletionEstimate {
    CompletionEstimate {
        seconds: field(record, seconds).parse().unwrap_or(0),
        imputed: is_flag_set(field(record, imputed)),
    }
}

/// Parse the completion-time table.
///
/// Rows with an empty or non-numeric `steam_id` are skipped. Missing or
/// unparseable durations count as 0.
pub fn parse_completion_csv(content: &str) -> Result<Vec<CompletionRow>, ImportError> {
    if content.contains(ERROR_MARKER) {
        return Err(ImportError::source_unavailable(
            "completion feed reported an error instead of data",
        ));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());
    let columns = Columns::from_headers(reader.headers()?)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed completion CSV row: {e}");
                continue;
            }
        };

        let Ok(id) = field(&record, Some(columns.id)).parse::<u32>() else {
            continue;
        };
        if id == 0 {
            continue;
        }

        rows.push(CompletionRow {
            id,
            name: field(&record, columns.name).to_string(),
            main: estimate(&record, columns.main, columns.main_imputed),
            extras: estimate(&record, columns.extras, columns.extras_imputed),
            completionist: estimate(&record, columns.completionist, columns.completionist_imputed),
        });
    }

    Ok(rows)
}

#[cfg(test)]
#[path = "tests/completion_tests.rs"]
mod tests;
