//! Sample value graphs.
//!
//! The shapes mirror what a real host process throws at the browser:
//! scalars, nested containers, objects with documented and computed
//! attributes, callables, special members, and a self-reference.

use std::fs;
use std::path::Path;
use std::rc::Rc;

use anyhow::Result;

use objscope_types::{
    AccessError, Callable, Dict, EnumerationError, List, Member, ObjRef, Object, Reflect, Scalar,
};

/// `{"a": 1, "b": [1, 2, 3]}` - the minimal browsing scenario.
pub fn small_graph() -> ObjRef {
    let dict = Dict::new();
    dict.insert("a", Scalar::int(1));
    dict.insert(
        "b",
        List::new(vec![Scalar::int(1), Scalar::int(2), Scalar::int(3)]),
    );
    dict
}

/// A menagerie of value shapes for browsing by hand and in tests.
pub fn sample_graph() -> ObjRef {
    let root = Object::with_doc("Sample", "Top-level sample object.");

    root.set_attr("answer", Scalar::int(42));
    root.set_attr("pi", Scalar::float(3.141592653589793));
    root.set_attr("flag", Scalar::bool(true));
    root.set_attr("nothing", Scalar::null());
    root.set_attr("greeting", Scalar::str("hello\r\nworld\nthe\rend."));
    root.set_attr("unicode", Scalar::str("déjà vu ünïcode"));

    root.set_attr(
        "numbers",
        List::new(vec![Scalar::int(1), Scalar::int(2), Scalar::int(3)]),
    );

    let mixed = List::new(vec![Scalar::int(5), Scalar::str("a")]);
    mixed.push(List::new(vec![
        Scalar::str("r"),
        Scalar::int(2),
        List::empty(),
    ]));
    root.set_attr("mixed", mixed);

    let lookup = Dict::new();
    lookup.insert("4", Scalar::int(44));
    lookup.insert("s", Scalar::int(11));
    root.set_attr("lookup", lookup);

    let point = Object::with_doc("Point", "A point in the plane.");
    point.set_attr("x", Scalar::int(3));
    point.set_attr("y", Scalar::int(-7));
    point.set_attr("__class__", Scalar::str("Point"));
    point.set_computed("norm", || {
        Err(AccessError::new("norm is unavailable for this point"))
    });
    root.set_attr("point", point);

    root.set_attr(
        "greet",
        Callable::with_doc("greet", "(name)", "Greets someone."),
    );
    root.set_attr("__repr__", Callable::new("__repr__", "()"));

    root.set_attr("recursive", self_referential());

    root
}

/// An object whose attribute `hidden` always fails to read.
pub fn raising_property() -> ObjRef {
    let object = Object::new("Secretive");
    object.set_attr("visible", Scalar::int(1));
    object.set_computed("hidden", || Err(AccessError::new("access denied")));
    object
}

/// A direct self-reference: `node.itself` is `node`.
pub fn self_referential() -> ObjRef {
    let node = Object::new("Recursive");
    node.set_attr("label", Scalar::str("it's turtles all the way down"));
    node.set_attr("itself", node.clone());
    node
}

/// A value that refuses member enumeration entirely.
pub struct Opaque {
    reason: String,
}

impl Reflect for Opaque {
    fn type_name(&self) -> &str {
        "opaque"
    }

    fn repr_bounded(&self, _depth: usize) -> String {
        "<opaque>".to_string()
    }

    fn expandable(&self) -> bool {
        true
    }

    fn members(&self) -> Result<Vec<Member>, EnumerationError> {
        Err(EnumerationError::new(self.reason.clone()))
    }
}

pub fn opaque() -> ObjRef {
    Rc::new(Opaque {
        reason: "introspection disabled for this value".to_string(),
    })
}

/// JSON document matching [`small_graph`], for CLI tests.
pub const SAMPLE_JSON: &str = r#"{"a": 1, "b": [1, 2, 3]}"#;

/// Writes the sample JSON document to `dest`.
pub fn write_sample(dest: &Path) -> Result<()> {
    fs::write(dest, SAMPLE_JSON)?;
    Ok(())
}
