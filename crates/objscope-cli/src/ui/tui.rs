//! Interactive tree browser.
//!
//! The app owns UI state only (open rows, selection, active detail);
//! tree data, filtering, and column semantics stay in the engine's
//! model. Terminal lifecycle follows the usual shape: raw mode and
//! alternate screen on entry, restored before returning.

use std::collections::HashSet;
use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

use objscope_engine::{BrowserModel, ColumnKind, NodeId, NodeKind};

pub struct BrowserApp {
    model: BrowserModel,
    /// Rows whose children are currently displayed. UI state, distinct
    /// from the engine's fetched-flag: a fetched node may be closed.
    open: HashSet<NodeId>,
    /// Flattened visible rows as (node, indent depth).
    rows: Vec<(NodeId, usize)>,
    table_state: TableState,
    detail_index: usize,
    status: Option<String>,
    should_quit: bool,
}

impl BrowserApp {
    pub fn new(model: BrowserModel) -> Self {
        let mut app = Self {
            model,
            open: HashSet::new(),
            rows: Vec::new(),
            table_state: TableState::default(),
            detail_index: 0,
            status: None,
            should_quit: false,
        };
        app.reset_view();
        app
    }

    /// Main event loop: set up the terminal, draw and react until quit,
    /// restore the terminal on the way out.
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key_event(key);
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Rebuilds all UI state from a fresh (or rebuilt) tree.
    fn reset_view(&mut self) {
        self.open.clear();
        self.status = None;

        let root = self.model.root();
        if let Err(error) = self.model.expand(root) {
            self.status = Some(error.to_string());
        }
        if self.model.show_root_node() {
            self.open.insert(root);
        }
        self.rebuild_rows();
        self.table_state
            .select(if self.rows.is_empty() { None } else { Some(0) });
    }

    fn rebuild_rows(&mut self) {
        self.rows.clear();
        let root = self.model.root();
        if self.model.show_root_node() {
            self.push_row(root, 0);
        } else {
            for child in self.model.node(root).children.clone() {
                self.push_row(child, 0);
            }
        }
    }

    fn push_row(&mut self, id: NodeId, depth: usize) {
        self.rows.push((id, depth));
        if self.open.contains(&id) {
            for child in self.model.node(id).children.clone() {
                self.push_row(child, depth + 1);
            }
        }
    }

    fn selected_node(&self) -> Option<NodeId> {
        self.table_state
            .selected()
            .and_then(|index| self.rows.get(index))
            .map(|(id, _)| *id)
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Down | KeyCode::Char('j') => self.select_forward(1),
            KeyCode::Up | KeyCode::Char('k') => self.select_backward(1),
            KeyCode::PageDown => self.select_forward(10),
            KeyCode::PageUp => self.select_backward(10),
            KeyCode::Home => {
                if !self.rows.is_empty() {
                    self.table_state.select(Some(0));
                }
            }
            KeyCode::End => {
                if !self.rows.is_empty() {
                    self.table_state.select(Some(self.rows.len() - 1));
                }
            }
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => self.open_selected(),
            KeyCode::Left | KeyCode::Char('h') => self.close_selected(),
            // Filter toggles rebuild the tree from the root; all rows
            // and the selection are reset.
            KeyCode::Char('c') => {
                self.model.toggle_callables();
                self.reset_view();
            }
            KeyCode::Char('s') => {
                self.model.toggle_special();
                self.reset_view();
            }
            KeyCode::Char('d') => {
                self.detail_index = (self.detail_index + 1) % self.model.details().len();
            }
            _ => {}
        }
    }

    fn select_forward(&mut self, step: usize) {
        if self.rows.is_empty() {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        self.table_state
            .select(Some((current + step).min(self.rows.len() - 1)));
    }

    fn select_backward(&mut self, step: usize) {
        if self.rows.is_empty() {
            return;
        }
        let current = self.table_state.selected().unwrap_or(0);
        self.table_state.select(Some(current.saturating_sub(step)));
    }

    fn open_selected(&mut self) {
        let Some(id) = self.selected_node() else {
            return;
        };
        if let Err(error) = self.model.expand(id) {
            self.status = Some(error.to_string());
            return;
        }
        if self.model.node(id).children.is_empty() {
            return;
        }
        self.open.insert(id);
        self.rebuild_rows();
    }

    fn close_selected(&mut self) {
        let Some(id) = self.selected_node() else {
            return;
        };
        if self.open.remove(&id) {
            self.rebuild_rows();
            return;
        }
        // Already closed: jump to the parent row instead.
        if let Some(parent) = self.model.node(id).parent {
            if let Some(index) = self.rows.iter().position(|(row_id, _)| *row_id == parent) {
                self.table_state.select(Some(index));
            }
        }
    }

    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(10),
            Constraint::Length(1),
        ])
        .split(f.area());

        self.render_tree(f, chunks[0]);
        self.render_detail(f, chunks[1]);
        self.render_footer(f, chunks[2]);
    }

    fn render_tree(&mut self, f: &mut Frame, area: Rect) {
        let columns: Vec<_> = self.model.visible_columns().collect();

        let header = Row::new(
            columns
                .iter()
                .map(|column| Cell::from(column.name))
                .collect::<Vec<_>>(),
        )
        .style(Style::default().add_modifier(Modifier::BOLD));

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|(id, depth)| {
                let cells: Vec<Cell> = columns
                    .iter()
                    .map(|column| {
                        let text = self.model.cell(*id, column.kind);
                        let text = if column.kind == ColumnKind::Name {
                            format!("{}{}", "  ".repeat(*depth), text)
                        } else {
                            text
                        };
                        Cell::from(text)
                    })
                    .collect();
                Row::new(cells).style(kind_style(self.model.node(*id).kind))
            })
            .collect();

        let widths: Vec<Constraint> = columns
            .iter()
            .map(|column| {
                if column.kind == ColumnKind::Summary {
                    Constraint::Min(16)
                } else {
                    Constraint::Length(column.width)
                }
            })
            .collect();

        let table = Table::new(rows, widths)
            .header(header)
            .block(Block::default().title("objscope").borders(Borders::ALL))
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_detail(&self, f: &mut Frame, area: Rect) {
        let detail = &self.model.details()[self.detail_index];
        let text = match self.selected_node() {
            Some(id) => self.model.detail(id, detail.kind),
            None => String::new(),
        };
        let title = format!("details: {}", detail.name);
        let paragraph =
            Paragraph::new(text).block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let key_style = Style::default().fg(Color::Yellow);
        let mut spans = vec![
            Span::styled("[q]", key_style),
            Span::raw("uit "),
            Span::styled("[j/k]", key_style),
            Span::raw("move "),
            Span::styled("[l]", key_style),
            Span::raw("expand "),
            Span::styled("[h]", key_style),
            Span::raw("collapse "),
            Span::styled("[c]", key_style),
            Span::raw("allables "),
            Span::styled("[s]", key_style),
            Span::raw("pecial "),
            Span::styled("[d]", key_style),
            Span::raw("etail"),
        ];
        if let Some(status) = &self.status {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                status.clone(),
                Style::default().fg(Color::Red),
            ));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn kind_style(kind: NodeKind) -> Style {
    match kind {
        NodeKind::Normal => Style::default(),
        NodeKind::Callable => Style::default().fg(Color::Yellow),
        NodeKind::Special => Style::default().fg(Color::DarkGray),
        NodeKind::Error => Style::default().fg(Color::Red),
        NodeKind::Cycle => Style::default().fg(Color::Magenta),
    }
}
