//! Member enumeration and classification.

use serde::Serialize;

use objscope_types::{AccessError, EnumerationError, MemberKey, ObjRef};

use crate::filters::Filters;

/// Classification of a tree entry, fixed at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Plain data member
    Normal,
    /// Value that supports invocation
    Callable,
    /// Member following the reserved `__name__` convention
    Special,
    /// Member whose access raised; the captured error stands in for
    /// the value
    Error,
    /// Terminal marker for a value already on the ancestor chain
    Cycle,
}

/// True for names that both start and end with the reserved
/// double-underscore convention.
pub fn is_special_name(name: &str) -> bool {
    name.starts_with("__") && name.ends_with("__")
}

/// One enumerated child, ready to become a tree node.
pub struct ChildEntry {
    pub key: MemberKey,
    pub value: Result<ObjRef, AccessError>,
    pub kind: NodeKind,
}

/// Lists the children of a value with filters applied.
///
/// Filtering happens here, not at display time, so hidden members
/// never become tree nodes and wide objects stay cheap to browse.
/// Per-member access failures are captured inside the returned
/// entries; only a total enumeration failure is returned as `Err`.
pub fn list_children(
    value: &ObjRef,
    filters: &Filters,
) -> Result<Vec<ChildEntry>, EnumerationError> {
    let members = value.members()?;
    let mut entries = Vec::with_capacity(members.len());

    for member in members {
        let special = match &member.key {
            MemberKey::Attr(name) => is_special_name(name),
            _ => false,
        };
        if special && !filters.show_special {
            continue;
        }

        match member.value {
            Ok(child) => {
                let callable = child.is_callable();
                if callable && !filters.show_callables {
                    continue;
                }
                let kind = if special {
                    NodeKind::Special
                } else if callable {
                    NodeKind::Callable
                } else {
                    NodeKind::Normal
                };
                entries.push(ChildEntry {
                    key: member.key,
                    value: Ok(child),
                    kind,
                });
            }
            Err(error) => {
                entries.push(ChildEntry {
                    key: member.key,
                    value: Err(error),
                    kind: NodeKind::Error,
                });
            }
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use objscope_types::{Callable, Object, Scalar};

    fn labels(entries: &[ChildEntry]) -> Vec<String> {
        entries.iter().map(|entry| entry.key.label()).collect()
    }

    #[test]
    fn test_special_name_convention() {
        assert!(is_special_name("__repr__"));
        assert!(is_special_name("__class__"));
        assert!(!is_special_name("__private"));
        assert!(!is_special_name("public__"));
        assert!(!is_special_name("plain"));
    }

    #[test]
    fn test_classification() {
        let object = Object::new("Thing");
        object.set_attr("data", Scalar::int(1));
        object.set_attr("run", Callable::new("run", "()"));
        object.set_attr("__repr__", Callable::new("__repr__", "()"));
        let value: ObjRef = object;

        let entries = list_children(&value, &Filters::default()).unwrap();
        let kinds: Vec<NodeKind> = entries.iter().map(|entry| entry.kind).collect();
        assert_eq!(
            kinds,
            vec![NodeKind::Normal, NodeKind::Callable, NodeKind::Special]
        );
    }

    #[test]
    fn test_filters_drop_members_at_extraction() {
        let object = Object::new("Thing");
        object.set_attr("data", Scalar::int(1));
        object.set_attr("run", Callable::new("run", "()"));
        object.set_attr("__repr__", Callable::new("__repr__", "()"));
        let value: ObjRef = object;

        let no_callables = Filters {
            show_callables: false,
            show_special: true,
        };
        let entries = list_children(&value, &no_callables).unwrap();
        assert_eq!(labels(&entries), vec!["data"]);

        let no_special = Filters {
            show_callables: true,
            show_special: false,
        };
        let entries = list_children(&value, &no_special).unwrap();
        assert_eq!(labels(&entries), vec!["data", "run"]);
    }

    #[test]
    fn test_failed_member_is_still_listed() {
        let object = Object::new("Thing");
        object.set_attr("ok", Scalar::int(1));
        object.set_computed("bad", || Err(AccessError::new("nope")));
        let value: ObjRef = object;

        let entries = list_children(&value, &Filters::default()).unwrap();
        assert_eq!(labels(&entries), vec!["ok", "bad"]);
        assert_eq!(entries[1].kind, NodeKind::Error);
    }
}
