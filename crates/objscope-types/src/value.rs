//! Built-in dynamic value model.
//!
//! Graphs are built incrementally and may be cyclic, so containers keep
//! their contents behind `RefCell` and values are shared through `Rc`.
//! The browser only observes these graphs; it never owns them, and a
//! deliberately cyclic graph lives until the process exits.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::{AccessError, EnumerationError};
use crate::reflect::{Member, MemberKey, ObjRef, Reflect};

/// Leaf value with no children.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    pub fn null() -> ObjRef {
        Rc::new(Scalar::Null)
    }

    pub fn bool(value: bool) -> ObjRef {
        Rc::new(Scalar::Bool(value))
    }

    pub fn int(value: i64) -> ObjRef {
        Rc::new(Scalar::Int(value))
    }

    pub fn float(value: f64) -> ObjRef {
        Rc::new(Scalar::Float(value))
    }

    pub fn str(value: impl Into<String>) -> ObjRef {
        Rc::new(Scalar::Str(value.into()))
    }
}

impl Reflect for Scalar {
    fn type_name(&self) -> &str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::Str(_) => "str",
        }
    }

    fn repr_bounded(&self, _depth: usize) -> String {
        match self {
            Scalar::Null => "null".to_string(),
            Scalar::Bool(value) => value.to_string(),
            Scalar::Int(value) => value.to_string(),
            Scalar::Float(value) => format_float(*value),
            Scalar::Str(value) => format!("{:?}", value),
        }
    }

    fn size(&self) -> Option<usize> {
        match self {
            Scalar::Str(value) => Some(value.chars().count()),
            _ => None,
        }
    }

    fn expandable(&self) -> bool {
        false
    }

    fn members(&self) -> Result<Vec<Member>, EnumerationError> {
        Ok(Vec::new())
    }
}

/// Renders floats so that integral values keep a trailing `.0`.
fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Ordered sequence of shared values.
pub struct List {
    items: RefCell<Vec<ObjRef>>,
}

impl List {
    pub fn new(items: Vec<ObjRef>) -> Rc<Self> {
        Rc::new(Self {
            items: RefCell::new(items),
        })
    }

    pub fn empty() -> Rc<Self> {
        Self::new(Vec::new())
    }

    pub fn push(&self, item: ObjRef) {
        self.items.borrow_mut().push(item);
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl Reflect for List {
    fn type_name(&self) -> &str {
        "list"
    }

    fn repr_bounded(&self, depth: usize) -> String {
        if depth == 0 {
            return "[...]".to_string();
        }
        let items = self.items.borrow();
        let parts: Vec<String> = items
            .iter()
            .map(|item| item.repr_bounded(depth - 1))
            .collect();
        format!("[{}]", parts.join(", "))
    }

    fn size(&self) -> Option<usize> {
        Some(self.len())
    }

    fn expandable(&self) -> bool {
        !self.is_empty()
    }

    fn members(&self) -> Result<Vec<Member>, EnumerationError> {
        let items = self.items.borrow();
        Ok(items
            .iter()
            .enumerate()
            .map(|(index, item)| Member::new(MemberKey::Index(index), item.clone()))
            .collect())
    }
}

/// Insertion-ordered mapping with string keys.
pub struct Dict {
    entries: RefCell<Vec<(String, ObjRef)>>,
}

impl Dict {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            entries: RefCell::new(Vec::new()),
        })
    }

    pub fn from_pairs(pairs: Vec<(String, ObjRef)>) -> Rc<Self> {
        let dict = Self::new();
        for (key, value) in pairs {
            dict.insert(key, value);
        }
        dict
    }

    /// Inserts an entry, replacing an existing one with the same key so
    /// sibling names stay unique.
    pub fn insert(&self, key: impl Into<String>, value: ObjRef) {
        let key = key.into();
        let mut entries = self.entries.borrow_mut();
        if let Some(slot) = entries.iter_mut().find(|(name, _)| *name == key) {
            slot.1 = value;
        } else {
            entries.push((key, value));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl Reflect for Dict {
    fn type_name(&self) -> &str {
        "dict"
    }

    fn repr_bounded(&self, depth: usize) -> String {
        if depth == 0 {
            return "{...}".to_string();
        }
        let entries = self.entries.borrow();
        let parts: Vec<String> = entries
            .iter()
            .map(|(key, value)| format!("{:?}: {}", key, value.repr_bounded(depth - 1)))
            .collect();
        format!("{{{}}}", parts.join(", "))
    }

    fn size(&self) -> Option<usize> {
        Some(self.len())
    }

    fn expandable(&self) -> bool {
        !self.is_empty()
    }

    fn members(&self) -> Result<Vec<Member>, EnumerationError> {
        let entries = self.entries.borrow();
        Ok(entries
            .iter()
            .map(|(key, value)| Member::new(MemberKey::Key(key.clone()), value.clone()))
            .collect())
    }
}

/// Slot holding an object attribute: either a stored value or a
/// computed accessor that runs on every read and may fail.
#[derive(Clone)]
pub enum AttrSlot {
    Stored(ObjRef),
    Computed(Rc<dyn Fn() -> Result<ObjRef, AccessError>>),
}

/// Named object with ordered attributes.
pub struct Object {
    type_name: String,
    doc: Option<String>,
    attrs: RefCell<Vec<(String, AttrSlot)>>,
}

impl Object {
    pub fn new(type_name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            type_name: type_name.into(),
            doc: None,
            attrs: RefCell::new(Vec::new()),
        })
    }

    pub fn with_doc(type_name: impl Into<String>, doc: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            type_name: type_name.into(),
            doc: Some(doc.into()),
            attrs: RefCell::new(Vec::new()),
        })
    }

    /// Sets a stored attribute, replacing an existing slot of the same
    /// name.
    pub fn set_attr(&self, name: impl Into<String>, value: ObjRef) {
        self.put(name.into(), AttrSlot::Stored(value));
    }

    /// Sets a computed attribute whose accessor runs on every read.
    pub fn set_computed<F>(&self, name: impl Into<String>, accessor: F)
    where
        F: Fn() -> Result<ObjRef, AccessError> + 'static,
    {
        self.put(name.into(), AttrSlot::Computed(Rc::new(accessor)));
    }

    fn put(&self, name: String, slot: AttrSlot) {
        let mut attrs = self.attrs.borrow_mut();
        if let Some(existing) = attrs.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = slot;
        } else {
            attrs.push((name, slot));
        }
    }

    pub fn attr_count(&self) -> usize {
        self.attrs.borrow().len()
    }
}

impl Reflect for Object {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn repr_bounded(&self, _depth: usize) -> String {
        format!("<{} at {}>", self.type_name, self.identity())
    }

    fn expandable(&self) -> bool {
        !self.attrs.borrow().is_empty()
    }

    fn members(&self) -> Result<Vec<Member>, EnumerationError> {
        let attrs = self.attrs.borrow();
        let mut members = Vec::with_capacity(attrs.len());
        for (name, slot) in attrs.iter() {
            let key = MemberKey::Attr(name.clone());
            let member = match slot {
                AttrSlot::Stored(value) => Member::new(key, value.clone()),
                AttrSlot::Computed(accessor) => match accessor() {
                    Ok(value) => Member::new(key, value),
                    Err(error) => Member::failed(key, error),
                },
            };
            members.push(member);
        }
        Ok(members)
    }

    fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

/// Function-like value. Browsable but never invoked by the engine.
pub struct Callable {
    name: String,
    signature: String,
    doc: Option<String>,
}

impl Callable {
    pub fn new(name: impl Into<String>, signature: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            signature: signature.into(),
            doc: None,
        })
    }

    pub fn with_doc(
        name: impl Into<String>,
        signature: impl Into<String>,
        doc: impl Into<String>,
    ) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            signature: signature.into(),
            doc: Some(doc.into()),
        })
    }
}

impl Reflect for Callable {
    fn type_name(&self) -> &str {
        "function"
    }

    fn repr_bounded(&self, _depth: usize) -> String {
        format!("<function {}{}>", self.name, self.signature)
    }

    fn is_callable(&self) -> bool {
        true
    }

    fn expandable(&self) -> bool {
        true
    }

    fn members(&self) -> Result<Vec<Member>, EnumerationError> {
        let doc = match &self.doc {
            Some(text) => Scalar::str(text.clone()),
            None => Scalar::null(),
        };
        Ok(vec![
            Member::new(
                MemberKey::Attr("__name__".to_string()),
                Scalar::str(self.name.clone()),
            ),
            Member::new(MemberKey::Attr("__doc__".to_string()), doc),
        ])
    }

    fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_reprs() {
        assert_eq!(Scalar::null().repr(), "null");
        assert_eq!(Scalar::bool(true).repr(), "true");
        assert_eq!(Scalar::int(-3).repr(), "-3");
        assert_eq!(Scalar::float(2.0).repr(), "2.0");
        assert_eq!(Scalar::float(2.5).repr(), "2.5");
        assert_eq!(Scalar::str("a\nb").repr(), "\"a\\nb\"");
    }

    #[test]
    fn test_string_size_counts_chars() {
        let value = Scalar::str("déjà");
        assert_eq!(value.size(), Some(4));
    }

    #[test]
    fn test_identity_is_allocation_not_content() {
        let first = Scalar::int(1);
        let second = Scalar::int(1);
        assert_ne!(first.identity(), second.identity());

        let shared = Scalar::int(1);
        let list = List::new(vec![shared.clone(), shared.clone()]);
        let members = list.members().unwrap();
        let left = members[0].value.as_ref().unwrap().identity();
        let right = members[1].value.as_ref().unwrap().identity();
        assert_eq!(left, right);
    }

    #[test]
    fn test_dict_insert_replaces_existing_key() {
        let dict = Dict::new();
        dict.insert("k", Scalar::int(1));
        dict.insert("k", Scalar::int(2));
        assert_eq!(dict.len(), 1);
        let members = dict.members().unwrap();
        assert_eq!(members[0].value.as_ref().unwrap().repr(), "2");
    }

    #[test]
    fn test_computed_attribute_failure_is_captured() {
        let object = Object::new("Broken");
        object.set_computed("boom", || Err(AccessError::new("no luck")));
        let members = object.members().unwrap();
        assert_eq!(members.len(), 1);
        match &members[0].value {
            Err(error) => assert_eq!(error.message(), "no luck"),
            Ok(_) => panic!("expected access failure"),
        }
    }

    #[test]
    fn test_cyclic_list_repr_is_finite() {
        let list = List::empty();
        let inner: Rc<List> = list.clone();
        list.push(inner);
        let text = list.repr_bounded(3);
        assert_eq!(text, "[[[[...]]]]");
    }

    #[test]
    fn test_callable_members_are_special() {
        let func = Callable::with_doc("greet", "(name)", "Greets someone.");
        let members = func.members().unwrap();
        let names: Vec<String> = members.iter().map(|m| m.key.label()).collect();
        assert_eq!(names, vec!["__name__", "__doc__"]);
        assert!(func.is_callable());
    }
}
