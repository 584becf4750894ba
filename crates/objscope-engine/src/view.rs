//! View adapter consumed by front ends.
//!
//! Any front end (terminal, GUI, test harness) addresses the tree
//! through this layer: rows and columns in, display strings out. It
//! owns the tree plus the column, detail, and filter configuration.

use objscope_types::{Error, ObjRef};

use crate::columns::{Column, ColumnKind, compute, default_columns};
use crate::detail::{DetailKind, DetailView, compute_detail, default_details};
use crate::filters::Filters;
use crate::tree::{NodeId, ObjectTree, TreeConfig, TreeNode};

/// Model backing a tree display.
pub struct BrowserModel {
    tree: ObjectTree,
    columns: Vec<Column>,
    details: Vec<DetailView>,
    show_root_node: bool,
}

impl BrowserModel {
    pub fn new(
        root: ObjRef,
        name: impl Into<String>,
        filters: Filters,
        config: TreeConfig,
    ) -> Self {
        Self {
            tree: ObjectTree::new(root, name, filters, config),
            columns: default_columns(),
            details: default_details(),
            show_root_node: true,
        }
    }

    /// Hides or shows the root row; with a hidden root the top-level
    /// rows are the root's children.
    pub fn with_show_root(mut self, show_root_node: bool) -> Self {
        self.show_root_node = show_root_node;
        self
    }

    pub fn tree(&self) -> &ObjectTree {
        &self.tree
    }

    pub fn root(&self) -> NodeId {
        self.tree.root()
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        self.tree.node(id)
    }

    pub fn show_root_node(&self) -> bool {
        self.show_root_node
    }

    pub fn expand(&mut self, id: NodeId) -> Result<(), Error> {
        self.tree.expand(id)
    }

    pub fn expand_to_depth(&mut self, id: NodeId, depth: usize) -> Result<(), Error> {
        self.tree.expand_to_depth(id, depth)
    }

    /// Number of children of `id`, fetching one level on demand.
    ///
    /// Only a shallow fetch: asking whether a node has children never
    /// materializes grandchildren.
    pub fn row_count(&mut self, id: NodeId) -> Result<usize, Error> {
        self.tree.expand(id)?;
        Ok(self.tree.children(id).len())
    }

    /// Child at `row`, fetching one level on demand.
    pub fn child(&mut self, id: NodeId, row: usize) -> Result<Option<NodeId>, Error> {
        self.tree.expand(id)?;
        Ok(self.tree.children(id).get(row).copied())
    }

    /// Resolves a row-index path from the root, e.g. `[1, 0]` for the
    /// first child of the root's second child.
    pub fn node_at(&mut self, rows: &[usize]) -> Result<Option<NodeId>, Error> {
        let mut current = self.tree.root();
        for &row in rows {
            match self.child(current, row)? {
                Some(next) => current = next,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }

    pub fn row_in_parent(&self, id: NodeId) -> usize {
        self.tree.row_in_parent(id)
    }

    /// First row a front end should select: the root when shown,
    /// otherwise the first top-level child.
    pub fn first_visible_node(&mut self) -> Result<Option<NodeId>, Error> {
        if self.show_root_node {
            Ok(Some(self.tree.root()))
        } else {
            let root = self.tree.root();
            self.child(root, 0)
        }
    }

    /// Applies new filters. The tree is rebuilt from the root, all
    /// fetched nodes are discarded, and previously returned `NodeId`s
    /// become invalid.
    pub fn set_filters(&mut self, filters: Filters) {
        self.tree.set_filters(filters);
    }

    pub fn filters(&self) -> Filters {
        self.tree.filters()
    }

    pub fn toggle_callables(&mut self) {
        let mut filters = self.filters();
        filters.show_callables = !filters.show_callables;
        self.set_filters(filters);
    }

    pub fn toggle_special(&mut self) {
        let mut filters = self.filters();
        filters.show_special = !filters.show_special;
        self.set_filters(filters);
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn visible_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|column| column.visible)
    }

    /// Shows or hides a column by position in the configured order.
    pub fn toggle_column(&mut self, index: usize) {
        if let Some(column) = self.columns.get_mut(index) {
            column.visible = !column.visible;
        }
    }

    pub fn details(&self) -> &[DetailView] {
        &self.details
    }

    /// Display string for one cell.
    pub fn cell(&self, id: NodeId, kind: ColumnKind) -> String {
        compute(&self.tree, id, kind)
    }

    /// Detail pane text for one node.
    pub fn detail(&self, id: NodeId, kind: DetailKind) -> String {
        compute_detail(&self.tree, id, kind)
    }
}
