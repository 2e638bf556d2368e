use crate::app::App;
use crate::domain::Tab;
use crate::ui::styles::{border_style, default_style, selected_style, title_style};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Brand on the left, level on the right
pub fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(12)])
        .split(area);

    let brand = Paragraph::new(vec![
        Line::from(Span::styled("PIP-BOY LIFE", title_style())),
        Line::from(Span::styled(
            "ROBCO INDUSTRIES (TM) TERM-LINK PROTOCOL",
            default_style(),
        )),
    ])
    .style(default_style());
    f.render_widget(brand, chunks[0]);

    let level = Paragraph::new(vec![
        Line::from(Span::styled("LVL", default_style())),
        Line::from(Span::styled(app.state.level().to_string(), title_style())),
    ])
    .alignment(Alignment::Right)
    .style(default_style());
    f.render_widget(level, chunks[1]);
}

/// Tab navigation bar
pub fn render_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(idx, tab)| Line::from(format!("{} {}", idx + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .style(default_style())
        .highlight_style(selected_style())
        .divider(" | ")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style()),
        );

    f.render_widget(tabs, area);
}
