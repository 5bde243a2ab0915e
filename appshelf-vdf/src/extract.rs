//! Pulls one fixed-shape title record out of a decoded `common` section.

use appshelf_core::{AppType, Platforms, TitleRecord};

use crate::node::Node;

/// Extract the title fields from a decoded `common` array.
///
/// Returns `None` when `node` is not an array or carries no usable
/// `gameid`. That is the normal outcome for sections that describe
/// something other than a title. A present `oslist` yields explicit
/// platforms; a missing one yields [`Platforms::NONE`].
pub fn extract_record(node: &Node) -> Option<TitleRecord> {
    if !node.is_array() {
        return None;
    }

    let id = match node.get("gameid")? {
        Node::Int32(v) => u32::try_from(*v).ok()?,
        Node::String(s) | Node::WideString(s) => s.trim().parse::<u32>().ok()?,
        _ => return None,
    };

    let mut record = TitleRecord::new(id);
    record.name = node
        .get("name")
        .and_then(Node::to_text)
        .filter(|name| !name.is_empty());
    record.app_type = AppType::from_type_string(node.get("type").and_then(Node::to_text).as_deref());
    record.platforms = Some(
        node.get("oslist")
            .and_then(Node::to_text)
            .map(|list| Platforms::from_os_list(&list))
            .unwrap_or(Platforms::NONE),
    );
    record.parent_id = node
        .get("parent")
        .and_then(Node::as_int)
        .and_then(|p| u32::try_from(p).ok())
        .unwrap_or(0);

    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Entry;

    fn common(entries: Vec<(&str, Node)>) -> Node {
        Node::Array(entries.into_iter().map(|(n, v)| Entry::new(n, v)).collect())
    }

    #[test]
    fn test_full_record() {
        let node = common(vec![
            ("name", Node::String("Half-Life".into())),
            ("type", Node::String("game".into())),
            ("gameid", Node::Int32(70)),
            ("oslist", Node::String("windows,linux".into())),
            ("parent", Node::Int32(0)),
        ]);
        let record = extract_record(&node).unwrap();
        assert_eq!(record.id, 70);
        assert_eq!(record.name.as_deref(), Some("Half-Life"));
        assert_eq!(record.app_type, AppType::Game);
        assert_eq!(record.platforms, Some(Platforms::WINDOWS | Platforms::LINUX));
        assert_eq!(record.parent_id, 0);
    }

    #[test]
    fn test_string_id_and_parent() {
        let node = common(vec![
            ("gameid", Node::String(" 1250 ".into())),
            ("type", Node::String("DLC".into())),
            ("parent", Node::String("1200".into())),
        ]);
        let record = extract_record(&node).unwrap();
        assert_eq!(record.id, 1250);
        assert_eq!(record.app_type, AppType::Dlc);
        assert_eq!(record.parent_id, 1200);
        assert_eq!(record.name, None);
    }

    #[test]
    fn test_missing_fields_default() {
        let record = extract_record(&common(vec![("gameid", Node::Int32(5))])).unwrap();
        assert_eq!(record.app_type, AppType::Unknown);
        assert_eq!(record.platforms, Some(Platforms::NONE));
        assert_eq!(record.parent_id, 0);
    }

    #[test]
    fn test_unmatched_type_is_other() {
        let node = common(vec![
            ("gameid", Node::Int32(5)),
            ("type", Node::String("Video".into())),
        ]);
        assert_eq!(extract_record(&node).unwrap().app_type, AppType::Other);
    }

    #[test]
    fn test_no_record_without_usable_id() {
        assert!(extract_record(&common(vec![("name", Node::String("x".into()))])).is_none());
        assert!(extract_record(&common(vec![("gameid", Node::Int32(-1))])).is_none());
        assert!(extract_record(&common(vec![("gameid", Node::String("abc".into()))])).is_none());
        assert!(extract_record(&common(vec![("gameid", Node::Float32(1.0))])).is_none());
        assert!(extract_record(&Node::Int32(5)).is_none());
    }

    #[test]
    fn test_bad_parent_is_zero() {
        let node = common(vec![
            ("gameid", Node::Int32(5)),
            ("parent", Node::String("none".into())),
        ]);
        assert_eq!(extract_record(&node).unwrap().parent_id, 0);
    }
}
