use crate::app::App;
use crate::persistence::holotape_filename;
use crate::ui::styles::{border_style, default_style, locked_style, title_style};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the data management panel
pub fn render_system_pane(f: &mut Frame, app: &App, area: Rect) {
    let export_target = app
        .config
        .export_dir()
        .join(holotape_filename(app.today));

    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled("DATA MANAGEMENT", title_style())),
        Line::raw(""),
        Line::from(Span::styled(
            "ENSURE REGULAR BACKUPS TO PREVENT DATA LOSS DUE TO RADIATION OR RAIDER ATTACKS.",
            locked_style(),
        )),
        Line::raw(""),
        Line::from(Span::styled("[e] ▼ EXPORT HOLOTAPE", title_style())),
        Line::from(Span::styled(
            format!("    -> {}", export_target.display()),
            locked_style(),
        )),
        Line::raw(""),
        Line::from(Span::styled("[i] ▲ LOAD HOLOTAPE", title_style())),
        Line::raw(""),
        Line::from(Span::styled(
            format!("STORAGE SLOT: {}", app.storage.path().display()),
            locked_style(),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(default_style())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" SYSTEM ", title_style())),
        );

    f.render_widget(paragraph, area);
}
