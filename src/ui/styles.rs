use ratatui::style::{Color, Modifier, Style};

/// Phosphor green of the terminal
pub const PHOSPHOR: Color = Color::Rgb(17, 209, 59);

/// Dimmed phosphor for locked or secondary content
pub const PHOSPHOR_DIM: Color = Color::Rgb(8, 96, 27);

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(PHOSPHOR).bg(Color::Black)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(PHOSPHOR)
        .add_modifier(Modifier::BOLD)
}

/// Past and future days: read-only
pub fn locked_style() -> Style {
    Style::default().fg(PHOSPHOR_DIM)
}

/// Today's column
pub fn today_style() -> Style {
    Style::default()
        .fg(PHOSPHOR)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

/// Completed checkbox
pub fn done_style() -> Style {
    Style::default()
        .fg(PHOSPHOR)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(PHOSPHOR)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(PHOSPHOR)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::Black).fg(PHOSPHOR)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(PHOSPHOR)
        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(PHOSPHOR_DIM)
}

/// Level gauge style
pub fn gauge_style() -> Style {
    Style::default().fg(PHOSPHOR).bg(Color::Black)
}

/// Warnings and the reset entry point
pub fn error_style() -> Style {
    Style::default()
        .fg(Color::Red)
        .add_modifier(Modifier::BOLD)
}
