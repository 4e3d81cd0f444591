//! Scrollable repository results table.

use crate::theme::Theme;
use crate::types::Repository;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Rect};
use ratatui::widgets::{Block, Borders, Row, Table, TableState};
use ratatui::Frame;

pub const NO_DESCRIPTION: &str = "-no description-";

const COLUMN_WIDTHS: [Constraint; 3] = [
    Constraint::Length(30),
    Constraint::Length(40),
    Constraint::Length(30),
];
const PAGE_JUMP: usize = 10;

/// One display row, prebuilt when a result set arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRow {
    pub name: String,
    pub description: String,
    pub stars: String,
}

impl From<&Repository> for RepoRow {
    fn from(repo: &Repository) -> Self {
        let description = match repo.description.as_deref() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => NO_DESCRIPTION.to_string(),
        };
        RepoRow {
            name: repo.name.clone(),
            description,
            stars: repo.stargazers_count.to_string(),
        }
    }
}

pub struct RepoTable {
    rows: Vec<RepoRow>,
    state: TableState,
}

impl RepoTable {
    pub fn new() -> Self {
        RepoTable {
            rows: Vec::new(),
            state: TableState::default(),
        }
    }

    /// Replace every row with the given result set. Selection resets to the
    /// top, or clears when the set is empty.
    pub fn set_repos(&mut self, repos: &[Repository]) {
        self.rows = repos.iter().map(RepoRow::from).collect();
        let selected = if self.rows.is_empty() { None } else { Some(0) };
        self.state.select(selected);
    }

    pub fn rows(&self) -> &[RepoRow] {
        &self.rows
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::PageUp => self.move_selection(-(PAGE_JUMP as isize)),
            KeyCode::PageDown => self.move_selection(PAGE_JUMP as isize),
            _ => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let current = self.state.selected().unwrap_or(0) as isize;
        let last = self.rows.len() as isize - 1;
        let next = (current + delta).clamp(0, last);
        self.state.select(Some(next as usize));
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let header = Row::new(["Name", "Description", "Stars"]).style(theme.table_header);
        let rows = self.rows.iter().map(|row| {
            Row::new([
                row.name.as_str(),
                row.description.as_str(),
                row.stars.as_str(),
            ])
        });
        let table = Table::new(rows, COLUMN_WIDTHS)
            .header(header)
            .block(Block::default().borders(Borders::ALL).border_style(theme.border))
            .row_highlight_style(theme.table_selected);
        frame.render_stateful_widget(table, area, &mut self.state);
    }
}
