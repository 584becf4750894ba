//! The capability interface the engine browses through.
//!
//! Any in-process representation that can name its children can be
//! browsed by implementing [`Reflect`]; the tree engine depends on
//! nothing else. The built-in model in [`crate::value`] is one
//! implementation, the JSON adapter in [`crate::json`] produces
//! another.

use std::fmt;
use std::rc::Rc;

use crate::error::{AccessError, EnumerationError};

/// Shared handle to a browsable value.
///
/// The tree never copies or takes ownership of the underlying object;
/// it holds reference-counted handles into a graph built elsewhere.
pub type ObjRef = Rc<dyn Reflect>;

/// Nesting bound for [`Reflect::repr`]. Containers render a `...`
/// placeholder below the bound, which also keeps representations of
/// cyclic graphs finite.
pub const DEFAULT_REPR_DEPTH: usize = 6;

/// Allocation identity of a value.
///
/// Identity is the address of the shared allocation, never content
/// equality: two equal scalars in different slots are distinct, while
/// the same allocation reached along two paths is one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjId(usize);

impl ObjId {
    /// Identity of a concrete value behind a shared handle.
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Self(value as *const T as *const () as usize)
    }
}

impl fmt::Display for ObjId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

/// How a member was reached from its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberKey {
    /// Named attribute access (`parent.name`)
    Attr(String),
    /// Sequence element (`parent[3]`)
    Index(usize),
    /// Mapping entry (`parent["key"]`)
    Key(String),
}

impl MemberKey {
    /// Local display name of the member.
    pub fn label(&self) -> String {
        match self {
            MemberKey::Attr(name) => name.clone(),
            MemberKey::Index(index) => index.to_string(),
            MemberKey::Key(key) => key.clone(),
        }
    }

    /// Extends an access path with this member.
    pub fn extend_path(&self, base: &str) -> String {
        match self {
            MemberKey::Attr(name) if base.is_empty() => name.clone(),
            MemberKey::Attr(name) => format!("{}.{}", base, name),
            MemberKey::Index(index) => format!("{}[{}]", base, index),
            MemberKey::Key(key) => format!("{}[{:?}]", base, key),
        }
    }

    /// True when the member is a named attribute rather than an
    /// indexed element.
    pub fn is_attribute(&self) -> bool {
        matches!(self, MemberKey::Attr(_))
    }
}

/// One enumerated member of a value.
///
/// Access is resolved while enumerating; a member whose accessor fails
/// is still listed, with the failure captured in place of the value.
pub struct Member {
    pub key: MemberKey,
    pub value: Result<ObjRef, AccessError>,
}

impl Member {
    pub fn new(key: MemberKey, value: ObjRef) -> Self {
        Self {
            key,
            value: Ok(value),
        }
    }

    pub fn failed(key: MemberKey, error: AccessError) -> Self {
        Self {
            key,
            value: Err(error),
        }
    }
}

/// Capability interface over a browsable runtime value.
pub trait Reflect {
    /// Dynamic type name of the value.
    fn type_name(&self) -> &str;

    /// Formatted representation bounded to `depth` levels of nesting.
    fn repr_bounded(&self, depth: usize) -> String;

    /// Full formatted representation.
    fn repr(&self) -> String {
        self.repr_bounded(DEFAULT_REPR_DEPTH)
    }

    /// Allocation identity used for cycle detection.
    fn identity(&self) -> ObjId {
        ObjId::of(self)
    }

    /// Whether invoking the value is supported.
    fn is_callable(&self) -> bool {
        false
    }

    /// Element or member count, where the value defines one.
    fn size(&self) -> Option<usize> {
        None
    }

    /// Best-effort hint that expanding the value may yield children.
    fn expandable(&self) -> bool;

    /// Enumerates the value's members in a stable order.
    ///
    /// Individual member failures are reported inside the returned
    /// entries; `Err` means the value cannot be enumerated at all.
    fn members(&self) -> Result<Vec<Member>, EnumerationError>;

    /// Documentation carried by the value, if any.
    fn doc(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_path_forms() {
        assert_eq!(MemberKey::Attr("x".into()).extend_path("root"), "root.x");
        assert_eq!(MemberKey::Attr("x".into()).extend_path(""), "x");
        assert_eq!(MemberKey::Index(3).extend_path("root.xs"), "root.xs[3]");
        assert_eq!(MemberKey::Key("k".into()).extend_path("root"), "root[\"k\"]");
    }

    #[test]
    fn test_is_attribute() {
        assert!(MemberKey::Attr("x".into()).is_attribute());
        assert!(!MemberKey::Index(0).is_attribute());
        assert!(!MemberKey::Key("k".into()).is_attribute());
    }

    #[test]
    fn test_obj_id_display_is_hex() {
        let value = 7_i64;
        let id = ObjId::of(&value);
        assert!(id.to_string().starts_with("0x"));
    }
}
