// Engine module - lazy object-tree introspection
// Sits between the value capability layer (objscope-types) and any
// displaying front end. Builds a tree over an arbitrary value graph,
// materializing a subtree only when a caller expands it, so huge or
// cyclic graphs stay browsable.

pub mod columns;
pub mod detail;
pub mod extract;
pub mod filters;
pub mod guard;
pub mod tree;
pub mod view;

pub use columns::{Column, ColumnKind, compute, default_columns, truncate, try_compute};
pub use detail::{DetailKind, DetailView, compute_detail, default_details};
pub use extract::{ChildEntry, NodeKind, is_special_name, list_children};
pub use filters::Filters;
pub use guard::{GuardScope, IdentityGuard};
pub use tree::{DEFAULT_SUMMARY_LEN, NodeId, NodeValue, ObjectTree, TreeConfig, TreeNode};
pub use view::BrowserModel;

use objscope_types::ObjRef;

// Façade API - stable entry points for front ends

/// Builds a browser model over `root` with default filters, columns,
/// and detail views.
pub fn browse(root: ObjRef, name: &str) -> BrowserModel {
    BrowserModel::new(root, name, Filters::default(), TreeConfig::default())
}
