//! Public title list feed.
//!
//! Payload shape: `{"applist":{"apps":[{"appid":10,"name":"Counter-Strike"}]}}`.

use appshelf_store::PublicListEntry;
use serde::Deserialize;

use crate::error::ImportError;

#[derive(Debug, Deserialize)]
struct AppListResponse {
    applist: AppList,
}

#[derive(Debug, Deserialize)]
struct AppList {
    #[serde(default)]
    apps: Vec<RawApp>,
}

#[derive(Debug, Deserialize)]
struct RawApp {
    #[serde(default)]
    appid: i64,
    #[serde(default)]
    name: String,
}

/// Parse the public list payload. Entries without a positive id that fits
/// a title id are dropped.
pub fn parse_app_list(json: &str) -> Result<Vec<PublicListEntry>, ImportError> {
    let response: AppListResponse = serde_json::from_str(json)?;
    let total = response.applist.apps.len();
    let entries: Vec<PublicListEntry> = response
        .applist
        .apps
        .into_iter()
        .filter_map(|app| {
            let id = u32::try_from(app.appid).ok().filter(|id| *id > 0)?;
            Some(PublicListEntry { id, name: app.name })
        })
        .collect();
    if entries.len() < total {
        log::debug!("Dropped {} public list entries without a valid id", total - entries.len());
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_app_list() {
        let json = r#"{"applist":{"apps":[
            {"appid":10,"name":"Counter-Strike"},
            {"appid":20,"name":"Team Fortress Classic"},
            {"appid":0,"name":"Zero"},
            {"appid":-5,"name":"Negative"},
            {"appid":99999999999,"name":"Too big"},
            {"name":"No id"},
            {"appid":30}
        ]}}"#;
        let entries = parse_app_list(json).unwrap();
        assert_eq!(
            entries,
            [
                PublicListEntry { id: 10, name: "Counter-Strike".into() },
                PublicListEntry { id: 20, name: "Team Fortress Classic".into() },
                PublicListEntry { id: 30, name: String::new() },
            ]
        );
    }

    #[test]
    fn test_empty_and_invalid_payloads() {
        assert!(parse_app_list(r#"{"applist":{}}"#).unwrap().is_empty());
        assert!(matches!(parse_app_list("<html>"), Err(ImportError::Json(_))));
        assert!(matches!(parse_app_list(r#"{"apps":[]}"#), Err(ImportError::Json(_))));
    }
}
