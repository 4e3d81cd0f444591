//! Single-line username entry backed by tui-textarea.

use crate::theme::Theme;
use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::Frame;
use tui_textarea::{Input, Key, TextArea};

pub const PLACEHOLDER: &str = "Your GitHub username...";

pub struct InputField {
    textarea: TextArea<'static>,
}

impl InputField {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_placeholder_text(PLACEHOLDER);
        textarea.set_cursor_line_style(Style::default());
        InputField { textarea }
    }

    /// Current contents of the buffer. The field is single-line, so joining
    /// is only a guard against pasted newlines.
    pub fn value(&self) -> String {
        self.textarea.lines().join("")
    }

    /// Feed a key into the buffer. Enter is dropped here: the dispatch loop
    /// consumes it as the submit key before routing.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let input = Input::from(key);
        if input.key != Key::Enter {
            self.textarea.input(input);
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        self.textarea.set_placeholder_style(theme.placeholder);
        let cursor = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor);
        frame.render_widget(&self.textarea, area);
    }
}
