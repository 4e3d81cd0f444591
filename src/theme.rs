use ratatui::style::{Color, Modifier, Style};

/// Fixed visual styling, built once at startup and passed by reference into
/// rendering. Nothing mutates a Theme after construction.
#[derive(Debug, Clone)]
pub struct Theme {
    pub border: Style,
    pub placeholder: Style,
    pub spinner: Style,
    pub error: Style,
    pub table_header: Style,
    pub table_selected: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            border: Style::default().fg(Color::Indexed(240)),
            placeholder: Style::default().fg(Color::Indexed(240)),
            spinner: Style::default()
                .fg(Color::Indexed(15))
                .bg(Color::Indexed(57))
                .add_modifier(Modifier::BOLD),
            error: Style::default().fg(Color::Red),
            table_header: Style::default().add_modifier(Modifier::UNDERLINED),
            table_selected: Style::default()
                .fg(Color::Indexed(229))
                .bg(Color::Indexed(57)),
        }
    }
}
