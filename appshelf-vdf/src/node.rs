//! Decoded node tree and path lookup.

use std::fmt;

/// A named child of an array node.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: String,
    pub node: Node,
}

impl Entry {
    pub fn new(name: impl Into<String>, node: Node) -> Self {
        Self {
            name: name.into(),
            node,
        }
    }
}

/// One decoded value. Arrays own their children in read order; child names
/// need not be unique.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    String(String),
    Int32(i32),
    Float32(f32),
    Pointer(u32),
    WideString(String),
    Color(i32),
    /// Unsigned on the wire.
    Int64(u64),
    Array(Vec<Entry>),
}

impl Node {
    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    pub fn children(&self) -> &[Entry] {
        match self {
            Node::Array(children) => children,
            _ => &[],
        }
    }

    /// Find the first node whose full path of names matches `path`.
    ///
    /// The search backtracks: if the first child named `a` has no `b`
    /// beneath it, later children named `a` are tried. An empty path matches
    /// this node. A missing segment yields `None`.
    pub fn lookup(&self, path: &[&str], case_sensitive: bool) -> Option<&Node> {
        let Some((first, rest)) = path.split_first() else {
            return Some(self);
        };
        self.children()
            .iter()
            .filter(|entry| names_match(&entry.name, first, case_sensitive))
            .find_map(|entry| entry.node.lookup(rest, case_sensitive))
    }

    /// Case-insensitive lookup of a direct child.
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.lookup(&[name], false)
    }

    /// Integer value of this node. Numeric strings are parsed.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Node::Int32(v) | Node::Color(v) => Some(i64::from(*v)),
            Node::Pointer(v) => Some(i64::from(*v)),
            Node::Int64(v) => i64::try_from(*v).ok(),
            Node::String(s) | Node::WideString(s) => s.trim().parse().ok(),
            Node::Float32(_) | Node::Array(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) | Node::WideString(s) => Some(s),
            _ => None,
        }
    }

    /// Text form of a scalar node. Arrays have none.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Node::Array(_) => None,
            Node::String(s) | Node::WideString(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::String(s) | Node::WideString(s) => write!(f, "{s}"),
            Node::Int32(v) | Node::Color(v) => write!(f, "{v}"),
            Node::Float32(v) => write!(f, "{v}"),
            Node::Pointer(v) => write!(f, "{v}"),
            Node::Int64(v) => write!(f, "{v}"),
            Node::Array(children) => write!(f, "[{} entries]", children.len()),
        }
    }
}

fn names_match(name: &str, wanted: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        name == wanted
    } else {
        name.eq_ignore_ascii_case(wanted)
    }
}

#[cfg(test)]
#[path = "tests/node_tests.rs"]
mod tests;
