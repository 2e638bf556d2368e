use crate::app::App;
use crate::domain::progress::XP_PER_LEVEL;
use crate::ui::layout::create_status_layout;
use crate::ui::styles::{border_style, default_style, error_style, gauge_style, title_style};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Gauge, Paragraph},
    Frame,
};

fn counter<'a>(label: &'a str, value: String) -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::from(Span::styled(label, default_style())),
        Line::from(""),
        Line::from(Span::styled(value, title_style())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style()),
    )
}

/// Render level, XP, progress to the next level, and XP per category
pub fn render_status_pane(f: &mut Frame, app: &App, area: Rect) {
    let [counters_area, gauge_area, chart_area, reset_area] = create_status_layout(area);

    let counters = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(counters_area);
    f.render_widget(counter("CURRENT LEVEL", app.state.level().to_string()), counters[0]);
    f.render_widget(counter("TOTAL XP", app.state.total_xp().to_string()), counters[1]);

    let (into_level, ratio) = crate::domain::level_progress(app.state.total_xp());
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" NEXT LEVEL ", title_style())),
        )
        .gauge_style(gauge_style())
        .ratio(ratio)
        .label(format!("{} / {} XP", into_level, XP_PER_LEVEL));
    f.render_widget(gauge, gauge_area);

    let breakdown = app.category_breakdown();
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" S.P.E.C.I.A.L. STATUS ", title_style())),
        )
        .data(breakdown.as_slice())
        .bar_width(12)
        .bar_gap(2)
        .bar_style(default_style())
        .value_style(gauge_style().add_modifier(ratatui::style::Modifier::REVERSED))
        .label_style(default_style());
    f.render_widget(chart, chart_area);

    let reset = Paragraph::new(vec![
        Line::from(Span::styled("[R] RESET OVERSEER STATUS", error_style())),
        Line::from(Span::styled(
            "* WARNING: THIS ACTION WILL PERMANENTLY ERASE ALL PROGRESS.",
            error_style(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(reset, reset_area);
}
