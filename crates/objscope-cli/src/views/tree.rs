//! Console rendering of an expanded tree.

use std::fmt;

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use objscope_engine::{BrowserModel, Column, ColumnKind, NodeId, NodeKind, truncate};

/// True when stdout is a terminal that should receive colors.
pub fn color_enabled() -> bool {
    std::io::stdout().is_terminal()
}

/// Table view over the already-expanded portion of a model.
///
/// Rendering never triggers expansion; the handler decides how deep
/// the tree goes before printing.
pub struct TreeTableView<'a> {
    model: &'a BrowserModel,
    enable_color: bool,
    summary_width: u16,
}

impl<'a> TreeTableView<'a> {
    pub fn new(model: &'a BrowserModel, enable_color: bool) -> Self {
        let fixed: u16 = model
            .visible_columns()
            .filter(|column| column.kind != ColumnKind::Summary)
            .map(|column| column.width + 2)
            .sum();
        Self {
            model,
            enable_color,
            summary_width: summary_width(fixed),
        }
    }

    fn column_width(&self, column: &Column) -> usize {
        if column.kind == ColumnKind::Summary {
            self.summary_width as usize
        } else {
            column.width as usize
        }
    }

    fn visible_roots(&self) -> Vec<NodeId> {
        if self.model.show_root_node() {
            vec![self.model.root()]
        } else {
            self.model.node(self.model.root()).children.clone()
        }
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        let mut line = String::new();
        for column in self.model.visible_columns() {
            let text = self.model.cell(id, column.kind);
            let text = if column.kind == ColumnKind::Name {
                format!("{}{}", "  ".repeat(depth), text)
            } else {
                text
            };
            let width = self.column_width(column);
            line.push_str(&format!(
                "{:<width$}  ",
                truncate(&text, width),
                width = width
            ));
        }
        let line = line.trim_end();

        if self.enable_color {
            match self.model.node(id).kind {
                NodeKind::Callable => writeln!(f, "{}", line.yellow()),
                NodeKind::Special => writeln!(f, "{}", line.bright_black()),
                NodeKind::Error => writeln!(f, "{}", line.red()),
                NodeKind::Cycle => writeln!(f, "{}", line.magenta()),
                NodeKind::Normal => writeln!(f, "{}", line),
            }
        } else {
            writeln!(f, "{}", line)
        }
    }

    fn write_subtree(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        self.write_row(f, id, depth)?;
        for child in self.model.node(id).children.clone() {
            self.write_subtree(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for TreeTableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header = String::new();
        for column in self.model.visible_columns() {
            let width = self.column_width(column);
            header.push_str(&format!("{:<width$}  ", column.name, width = width));
        }
        let header = header.trim_end();
        if self.enable_color {
            writeln!(f, "{}", header.bold())?;
        } else {
            writeln!(f, "{}", header)?;
        }

        for root in self.visible_roots() {
            self.write_subtree(f, root, 0)?;
        }
        Ok(())
    }
}

/// Fits the summary column into the current terminal width.
fn summary_width(fixed: u16) -> u16 {
    match terminal_size::terminal_size() {
        Some((terminal_size::Width(total), _)) => total.saturating_sub(fixed).clamp(16, 80),
        None => 40,
    }
}

/// Serializable dump of the expanded tree for `--format json`.
#[derive(Serialize)]
pub struct TreeDump {
    pub root: NodeDump,
}

#[derive(Serialize)]
pub struct NodeDump {
    pub name: String,
    pub path: String,
    pub kind: NodeKind,
    #[serde(rename = "type")]
    pub type_name: String,
    pub summary: String,
    pub is_attribute: bool,
    pub expanded: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeDump>,
}

impl TreeDump {
    pub fn from_model(model: &BrowserModel) -> Self {
        Self {
            root: NodeDump::build(model, model.root()),
        }
    }
}

impl NodeDump {
    fn build(model: &BrowserModel, id: NodeId) -> Self {
        let node = model.node(id);
        Self {
            name: node.name.clone(),
            path: node.path.clone(),
            kind: node.kind,
            type_name: model.cell(id, ColumnKind::Type),
            summary: model.cell(id, ColumnKind::Summary),
            is_attribute: node.is_attribute,
            expanded: node.expanded,
            children: node
                .children
                .iter()
                .map(|child| NodeDump::build(model, *child))
                .collect(),
        }
    }
}
