//! View composition: rendering application state to the frame.

use crate::app::{App, Focus};
use crate::theme::Theme;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub const TITLE: &str = "Let's fetch your GitHub repos!";
const LOADING_LABEL: &str = "Fetching repositories...";

pub fn render(frame: &mut Frame, app: &mut App, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1),
            Constraint::Length(1), // username input
            Constraint::Length(1), // status: spinner while loading, error otherwise
            Constraint::Min(3),    // results table
        ])
        .split(frame.area());

    frame.render_widget(Paragraph::new(TITLE), chunks[0]);

    let input_focused = app.focus == Some(Focus::Input);
    app.input.render(frame, chunks[2], input_focused, theme);

    render_status(frame, app, theme, chunks[3]);
    app.table.render(frame, chunks[4], theme);
}

fn render_status(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let line = if app.loading {
        Line::from(Span::styled(
            format!("{} {}", app.spinner.glyph(), LOADING_LABEL),
            theme.spinner,
        ))
    } else if let Some(err) = &app.error {
        Line::from(Span::styled(err.to_string(), theme.error))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line), area);
}
