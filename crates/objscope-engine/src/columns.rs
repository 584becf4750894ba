//! Attribute columns: per-node display fields.
//!
//! Columns are configuration, not per-node state. Computation is pure:
//! the same node and column always produce the same string, and in the
//! default mode it never fails.

use serde::Serialize;

use objscope_types::Error;

use crate::tree::{NodeId, NodeValue, ObjectTree};

/// Recognized column derivations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Name,
    Path,
    Summary,
    Type,
    Id,
    IsAttribute,
    IsCallable,
    Size,
}

/// A named, independently toggleable display slot with a preferred
/// width.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub visible: bool,
    pub width: u16,
}

pub const SMALL_COL_WIDTH: u16 = 8;
pub const MEDIUM_COL_WIDTH: u16 = 20;
pub const LARGE_COL_WIDTH: u16 = 40;

/// Default column set and visibility.
pub fn default_columns() -> Vec<Column> {
    vec![
        Column {
            name: "name",
            kind: ColumnKind::Name,
            visible: true,
            width: MEDIUM_COL_WIDTH,
        },
        Column {
            name: "path",
            kind: ColumnKind::Path,
            visible: true,
            width: LARGE_COL_WIDTH,
        },
        Column {
            name: "summary",
            kind: ColumnKind::Summary,
            visible: true,
            width: LARGE_COL_WIDTH,
        },
        Column {
            name: "type",
            kind: ColumnKind::Type,
            visible: true,
            width: MEDIUM_COL_WIDTH,
        },
        Column {
            name: "id",
            kind: ColumnKind::Id,
            visible: false,
            width: MEDIUM_COL_WIDTH,
        },
        Column {
            name: "attribute",
            kind: ColumnKind::IsAttribute,
            visible: false,
            width: SMALL_COL_WIDTH,
        },
        Column {
            name: "callable",
            kind: ColumnKind::IsCallable,
            visible: false,
            width: SMALL_COL_WIDTH,
        },
        Column {
            name: "size",
            kind: ColumnKind::Size,
            visible: true,
            width: SMALL_COL_WIDTH,
        },
    ]
}

/// Computes the display string for one column of one node.
///
/// Never fails: a captured access failure renders as a short
/// diagnostic carrying the original error text.
pub fn compute(tree: &ObjectTree, id: NodeId, kind: ColumnKind) -> String {
    let node = tree.node(id);
    if let NodeValue::Error(error) = &node.value {
        return match kind {
            ColumnKind::Name => node.name.clone(),
            ColumnKind::Path => node.path.clone(),
            ColumnKind::Summary => format!("<{}>", error),
            ColumnKind::Type => "AccessError".to_string(),
            ColumnKind::Id | ColumnKind::Size => String::new(),
            ColumnKind::IsAttribute => node.is_attribute.to_string(),
            ColumnKind::IsCallable => "false".to_string(),
        };
    }
    match try_compute(tree, id, kind) {
        Ok(text) => text,
        Err(error) => format!("<{}>", error),
    }
}

/// Fail-fast variant of [`compute`]: value-derived columns of an
/// error-carrying node return the captured error instead of a
/// diagnostic string.
pub fn try_compute(tree: &ObjectTree, id: NodeId, kind: ColumnKind) -> Result<String, Error> {
    let node = tree.node(id);
    let value = match &node.value {
        NodeValue::Obj(value) => value,
        NodeValue::Error(error) => match kind {
            ColumnKind::Name => return Ok(node.name.clone()),
            ColumnKind::Path => return Ok(node.path.clone()),
            ColumnKind::IsAttribute => return Ok(node.is_attribute.to_string()),
            _ => return Err(Error::Access(error.clone())),
        },
    };

    Ok(match kind {
        ColumnKind::Name => node.name.clone(),
        ColumnKind::Path => node.path.clone(),
        ColumnKind::Summary => truncate(&value.repr(), tree.config().max_summary_len),
        ColumnKind::Type => value.type_name().to_string(),
        ColumnKind::Id => value.identity().to_string(),
        ColumnKind::IsAttribute => node.is_attribute.to_string(),
        ColumnKind::IsCallable => value.is_callable().to_string(),
        ColumnKind::Size => match value.size() {
            Some(size) => size.to_string(),
            None => String::new(),
        },
    })
}

/// Truncates to at most `max_len` characters, ellipsis included, on a
/// char boundary.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let prefix: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_is_exact_with_ellipsis() {
        let long = "x".repeat(500);
        let short = truncate(&long, 80);
        assert_eq!(short.chars().count(), 80);
        assert!(short.ends_with("..."));
    }

    #[test]
    fn test_truncate_multibyte_safe() {
        let text = "é".repeat(40);
        let short = truncate(&text, 10);
        assert_eq!(short.chars().count(), 10);
        assert!(short.ends_with("..."));
    }
}
