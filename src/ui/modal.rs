use crate::app::App;
use crate::domain::UiMode;
use crate::ui::{
    layout::create_modal_area,
    styles::{error_style, modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn render_box(f: &mut Frame, area: Rect, title: String, lines: Vec<Line>) {
    let modal_area = create_modal_area(area);
    f.render_widget(Clear, modal_area);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

/// Confirmation before wiping all XP and history
pub fn render_reset_modal(f: &mut Frame, app: &App, area: Rect) {
    if app.ui_mode != UiMode::ConfirmReset {
        return;
    }
    let lines = vec![
        Line::raw(""),
        Line::from(Span::styled("  WARNING: WIPE ALL XP AND HISTORY?", error_style())),
        Line::raw(""),
        Line::raw("  Routines are kept. Every completion mark is erased."),
        Line::raw("  This cannot be undone."),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  [y]", modal_title_style()),
            Span::raw(" Wipe  "),
            Span::styled("[n]", modal_title_style()),
            Span::raw(" Cancel"),
        ]),
    ];
    render_box(f, area, " RESET OVERSEER STATUS ".to_string(), lines);
}

/// Path prompt for loading a holotape
pub fn render_import_modal(f: &mut Frame, app: &App, area: Rect) {
    if app.ui_mode != UiMode::ImportPath {
        return;
    }
    let lines = vec![
        Line::raw(""),
        Line::raw("  HOLOTAPE PATH:"),
        Line::from(vec![
            Span::raw("  > "),
            Span::styled(app.import_path.as_str(), modal_title_style()),
            Span::styled("█", modal_title_style()),
        ]),
        Line::raw(""),
        Line::raw("  Loading replaces ALL current data."),
        Line::raw(""),
        Line::raw("  Enter to load  ·  Esc to cancel"),
    ];
    render_box(f, area, " LOAD HOLOTAPE ".to_string(), lines);
}

/// Result notice (export, import, reset)
pub fn render_notice_modal(f: &mut Frame, app: &App, area: Rect) {
    let Some(notice) = &app.notice else {
        return;
    };
    let message = if notice.is_error {
        Line::from(Span::styled(format!("  {}", notice.message), error_style()))
    } else {
        Line::raw(format!("  {}", notice.message))
    };
    let lines = vec![
        Line::raw(""),
        message,
        Line::raw(""),
        Line::raw("  Press any key to continue"),
    ];
    render_box(f, area, format!(" {} ", notice.title), lines);
}
