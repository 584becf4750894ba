//! Detail views: large free-form renderings of a single node.
//!
//! Shares the no-throw contract of column computation but may return
//! arbitrarily long text. A front end shows exactly one detail kind at
//! a time.

use serde::Serialize;

use objscope_types::ObjRef;

use crate::guard::{GuardScope, IdentityGuard};
use crate::tree::{NodeId, NodeValue, ObjectTree};

const PRETTY_MAX_DEPTH: usize = 8;
const INDENT: &str = "    ";

/// Recognized detail derivations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailKind {
    /// Full representation, unbounded
    Repr,
    /// Multi-line indented rendering of the subtree
    Pretty,
    /// Documentation carried by the value
    Doc,
    /// Type, identity, and size summary
    TypeInfo,
}

/// A named detail extractor offered to front ends.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub name: &'static str,
    pub kind: DetailKind,
}

/// Default detail set, in display order.
pub fn default_details() -> Vec<DetailView> {
    vec![
        DetailView {
            name: "representation",
            kind: DetailKind::Repr,
        },
        DetailView {
            name: "pretty",
            kind: DetailKind::Pretty,
        },
        DetailView {
            name: "documentation",
            kind: DetailKind::Doc,
        },
        DetailView {
            name: "type info",
            kind: DetailKind::TypeInfo,
        },
    ]
}

/// Computes the detail text for one node.
pub fn compute_detail(tree: &ObjectTree, id: NodeId, kind: DetailKind) -> String {
    let node = tree.node(id);
    let value = match &node.value {
        NodeValue::Obj(value) => value,
        NodeValue::Error(error) => return format!("{}", error),
    };

    match kind {
        DetailKind::Repr => value.repr(),
        DetailKind::Pretty => pretty(value),
        DetailKind::Doc => match value.doc() {
            Some(text) => text.to_string(),
            None => "<no documentation>".to_string(),
        },
        DetailKind::TypeInfo => {
            let mut out = format!(
                "type: {}\nid: {}\ncallable: {}",
                value.type_name(),
                value.identity(),
                value.is_callable()
            );
            if let Some(size) = value.size() {
                out.push_str(&format!("\nsize: {}", size));
            }
            if let Some(note) = &node.note {
                out.push_str(&format!("\nnote: {}", note));
            }
            out
        }
    }
}

/// Multi-line indented rendering of a value graph, bounded by depth
/// and by the same ancestor-identity rule as tree expansion so cyclic
/// graphs render finitely.
fn pretty(value: &ObjRef) -> String {
    let mut out = String::new();
    let mut guard = IdentityGuard::new();
    pretty_into(value, 0, &mut guard, &mut out);
    out
}

fn pretty_into(value: &ObjRef, level: usize, guard: &mut IdentityGuard, out: &mut String) {
    let Some(mut scope) = GuardScope::enter(guard, value.identity()) else {
        out.push_str("<cycle>");
        return;
    };

    let members = match value.members() {
        Ok(members) => members,
        Err(error) => {
            out.push_str(&format!("<{}>", error));
            return;
        }
    };

    if members.is_empty() || level >= PRETTY_MAX_DEPTH {
        out.push_str(&value.repr());
        return;
    }

    out.push_str(&value.repr_bounded(1));
    out.push(':');
    for member in members {
        out.push('\n');
        out.push_str(&INDENT.repeat(level + 1));
        out.push_str(&member.key.label());
        out.push_str(" = ");
        match &member.value {
            Ok(child) => pretty_into(child, level + 1, scope.inner(), out),
            Err(error) => out.push_str(&format!("<{}>", error)),
        }
    }
}
