use crate::app::App;
use crate::domain::{day_label, week_dates, DayStatus, Quest};
use crate::ui::styles::{
    border_style, default_style, done_style, locked_style, selected_style, title_style,
    today_style,
};
use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

/// Checkbox glyph for one day of one quest
fn checkbox(quest: &Quest, date: NaiveDate) -> &'static str {
    if quest.is_completed(date) {
        "[X]"
    } else {
        "[ ]"
    }
}

/// Only today's column is live; past and future are read-only
fn cell_style(quest: &Quest, date: NaiveDate, today: NaiveDate) -> Style {
    match DayStatus::of(date, today) {
        DayStatus::Today if quest.is_completed(date) => done_style(),
        DayStatus::Today => default_style(),
        DayStatus::Past | DayStatus::Future => locked_style(),
    }
}

/// Render the weekly tracker grid
pub fn render_tracker_pane(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" WEEKLY TRACKER ", title_style()));

    if app.state.quests().is_empty() {
        let empty = Paragraph::new("NO ROUTINES INITIALIZED. CHECK ADMIN CONSOLE.")
            .alignment(Alignment::Center)
            .style(locked_style())
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let week = week_dates(app.today);

    let mut header_cells = vec![Cell::from(Span::styled("ROUTINE", title_style()))];
    header_cells.extend(week.iter().map(|date| {
        let style = if DayStatus::of(*date, app.today) == DayStatus::Today {
            today_style()
        } else {
            title_style()
        };
        Cell::from(Span::styled(day_label(*date), style))
    }));
    let header = Row::new(header_cells).height(1).bottom_margin(1);

    let rows: Vec<Row> = app
        .state
        .quests()
        .iter()
        .map(|quest| {
            let mut cells = vec![Cell::from(format!("{} ({} MINS)", quest.name, quest.duration))];
            cells.extend(week.iter().map(|date| {
                Cell::from(Span::styled(
                    checkbox(quest, *date),
                    cell_style(quest, *date, app.today),
                ))
            }));
            Row::new(cells)
        })
        .collect();

    let mut widths = vec![Constraint::Percentage(30)];
    widths.extend(std::iter::repeat(Constraint::Percentage(10)).take(week.len()));

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .style(default_style())
        .highlight_style(selected_style())
        .highlight_symbol("> ");

    let mut state = TableState::default();
    state.select(Some(app.selected_index));
    f.render_stateful_widget(table, area, &mut state);
}
