//! The lazy object tree.
//!
//! Nodes live in an arena and reference each other by index, so parent
//! links are never ownership edges and the structure is always a tree
//! even when the underlying value graph is cyclic: a revisited
//! ancestor becomes a cycle-marker leaf instead of a back edge.

use serde::{Deserialize, Serialize};

use objscope_types::{AccessError, Error, ObjId, ObjRef};

use crate::extract::{NodeKind, list_children};
use crate::filters::Filters;
use crate::guard::{GuardScope, IdentityGuard};

/// Default maximum character length of the bounded summary column,
/// ellipsis included.
pub const DEFAULT_SUMMARY_LEN: usize = 80;

/// Engine construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Propagate captured access errors out of expansion and column
    /// computation instead of absorbing them into diagnostics.
    pub fail_fast_on_access_error: bool,
    /// Maximum character length of the summary column, ellipsis
    /// included.
    pub max_summary_len: usize,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            fail_fast_on_access_error: false,
            max_summary_len: DEFAULT_SUMMARY_LEN,
        }
    }
}

/// Index of a node within its tree's arena.
///
/// Ids are only meaningful for the tree that produced them and are
/// invalidated by a rebuild; using a stale id is a caller bug and
/// fails fast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    fn index(self) -> usize {
        self.0
    }
}

/// Payload of a tree node: the browsed value, or the captured failure
/// that stands in for it.
pub enum NodeValue {
    Obj(ObjRef),
    Error(AccessError),
}

/// One entry in the tree, wrapping one value reachable from the root.
pub struct TreeNode {
    /// Local display name: attribute name, index, or the root name.
    pub name: String,
    /// Fully-qualified access path from the root, e.g. `root.xs[3]`.
    pub path: String,
    /// Reached via attribute access rather than indexing.
    pub is_attribute: bool,
    pub kind: NodeKind,
    pub value: NodeValue,
    pub parent: Option<NodeId>,
    /// Populated at most once; empty until the node is expanded.
    pub children: Vec<NodeId>,
    /// Best-effort hint that expansion may yield children.
    pub expandable: bool,
    /// Children have been fetched.
    pub expanded: bool,
    /// Captured note when the value refused enumeration entirely.
    pub note: Option<String>,
}

/// Lazy tree over a value graph.
///
/// Only the root exists after construction; a subtree materializes
/// when a caller expands it. Expansion is synchronous and runs to
/// completion, which assumes member access is fast relative to
/// interactive use; a member accessor that blocks will block the
/// session.
pub struct ObjectTree {
    nodes: Vec<TreeNode>,
    root_value: ObjRef,
    root_name: String,
    filters: Filters,
    config: TreeConfig,
}

impl ObjectTree {
    pub fn new(
        root_value: ObjRef,
        root_name: impl Into<String>,
        filters: Filters,
        config: TreeConfig,
    ) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            root_value,
            root_name: root_name.into(),
            filters,
            config,
        };
        tree.init_root();
        tree
    }

    fn init_root(&mut self) {
        self.nodes.push(TreeNode {
            name: self.root_name.clone(),
            path: self.root_name.clone(),
            is_attribute: false,
            kind: NodeKind::Normal,
            value: NodeValue::Obj(self.root_value.clone()),
            parent: None,
            children: Vec::new(),
            expandable: self.root_value.expandable(),
            expanded: false,
            note: None,
        });
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.index()]
    }

    /// Number of materialized nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn filters(&self) -> Filters {
        self.filters
    }

    pub fn config(&self) -> TreeConfig {
        self.config
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    /// Position of `id` among its parent's children; 0 for the root.
    pub fn row_in_parent(&self, id: NodeId) -> usize {
        match self.nodes[id.index()].parent {
            Some(parent) => self.nodes[parent.index()]
                .children
                .iter()
                .position(|child| *child == id)
                .unwrap_or(0),
            None => 0,
        }
    }

    /// Replaces the filters and rebuilds the tree from the root,
    /// discarding every previously fetched node. Outstanding `NodeId`s
    /// are invalidated.
    pub fn set_filters(&mut self, filters: Filters) {
        self.filters = filters;
        self.nodes.clear();
        self.init_root();
    }

    /// Populates `children` for one level. Idempotent: once fetched,
    /// later calls return the cached children without re-enumerating.
    pub fn expand(&mut self, id: NodeId) -> Result<(), Error> {
        let mut guard = IdentityGuard::with_chain(self.ancestor_chain(id));
        self.expand_with_guard(id, &mut guard)
    }

    /// Expands `id` and, recursively, children down to `depth` further
    /// levels. Depth 0 expands only the node itself.
    pub fn expand_to_depth(&mut self, id: NodeId, depth: usize) -> Result<(), Error> {
        let mut guard = IdentityGuard::with_chain(self.ancestor_chain(id));
        self.expand_deep(id, depth, &mut guard)
    }

    fn expand_deep(
        &mut self,
        id: NodeId,
        depth: usize,
        guard: &mut IdentityGuard,
    ) -> Result<(), Error> {
        self.expand_with_guard(id, guard)?;
        if depth == 0 {
            return Ok(());
        }

        let node = &self.nodes[id.index()];
        if node.kind == NodeKind::Cycle || node.children.is_empty() {
            return Ok(());
        }
        let NodeValue::Obj(value) = &node.value else {
            return Ok(());
        };
        let identity = value.identity();
        let children = node.children.clone();

        let Some(mut scope) = GuardScope::enter(guard, identity) else {
            return Ok(());
        };
        for child in children {
            self.expand_deep(child, depth - 1, scope.inner())?;
        }
        Ok(())
    }

    fn expand_with_guard(
        &mut self,
        id: NodeId,
        guard: &mut IdentityGuard,
    ) -> Result<(), Error> {
        if self.nodes[id.index()].expanded {
            return Ok(());
        }

        let value = match &self.nodes[id.index()].value {
            NodeValue::Obj(value) => value.clone(),
            NodeValue::Error(_) => {
                self.nodes[id.index()].expanded = true;
                return Ok(());
            }
        };

        let Some(_scope) = GuardScope::enter(guard, value.identity()) else {
            // The value is already on the path from the root: terminate
            // here with a marker instead of recursing forever.
            let node = &mut self.nodes[id.index()];
            node.kind = NodeKind::Cycle;
            node.expandable = false;
            node.expanded = true;
            return Ok(());
        };

        let entries = match list_children(&value, &self.filters) {
            Ok(entries) => entries,
            Err(error) => {
                let node = &mut self.nodes[id.index()];
                node.note = Some(error.to_string());
                node.expandable = false;
                node.expanded = true;
                return Ok(());
            }
        };

        if self.config.fail_fast_on_access_error {
            if let Some(error) = entries.iter().find_map(|entry| entry.value.as_ref().err()) {
                return Err(Error::Access(error.clone()));
            }
        }

        let parent_path = self.nodes[id.index()].path.clone();
        let mut child_ids = Vec::with_capacity(entries.len());
        for entry in entries {
            let name = entry.key.label();
            let path = entry.key.extend_path(&parent_path);
            let is_attribute = entry.key.is_attribute();
            let child = match entry.value {
                Ok(child_value) => TreeNode {
                    name,
                    path,
                    is_attribute,
                    kind: entry.kind,
                    expandable: child_value.expandable(),
                    value: NodeValue::Obj(child_value),
                    parent: Some(id),
                    children: Vec::new(),
                    expanded: false,
                    note: None,
                },
                Err(error) => TreeNode {
                    name,
                    path,
                    is_attribute,
                    kind: NodeKind::Error,
                    expandable: false,
                    value: NodeValue::Error(error),
                    parent: Some(id),
                    children: Vec::new(),
                    expanded: false,
                    note: None,
                },
            };
            let child_id = NodeId(self.nodes.len());
            self.nodes.push(child);
            child_ids.push(child_id);
        }

        let node = &mut self.nodes[id.index()];
        node.children = child_ids;
        node.expanded = true;
        Ok(())
    }

    /// Identities of the proper ancestors of `id`, root first.
    fn ancestor_chain(&self, id: NodeId) -> Vec<ObjId> {
        let mut chain = Vec::new();
        let mut current = self.nodes[id.index()].parent;
        while let Some(parent) = current {
            if let NodeValue::Obj(value) = &self.nodes[parent.index()].value {
                chain.push(value.identity());
            }
            current = self.nodes[parent.index()].parent;
        }
        chain.reverse();
        chain
    }
}
