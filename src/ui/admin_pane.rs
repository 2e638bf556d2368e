use crate::app::App;
use crate::ui::styles::{border_style, default_style, locked_style, selected_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the list of active protocols
pub fn render_admin_pane(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(
            format!(" ACTIVE PROTOCOLS ({}) ", app.state.quests().len()),
            title_style(),
        ));

    let items: Vec<ListItem> = if app.state.quests().is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "NO DATA FOUND... PRESS [a] TO INITIATE A PROTOCOL",
            locked_style(),
        )))]
    } else {
        app.state
            .quests()
            .iter()
            .map(|quest| {
                ListItem::new(vec![
                    Line::from(Span::styled(quest.name.clone(), title_style())),
                    Line::from(vec![
                        Span::styled(format!("  [{}]", quest.category), default_style()),
                        Span::styled(format!("  TIME: {}m", quest.duration), default_style()),
                    ]),
                ])
            })
            .collect()
    };

    let list = List::new(items)
        .block(block)
        .style(default_style())
        .highlight_style(selected_style())
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !app.state.quests().is_empty() {
        state.select(Some(app.selected_index));
    }
    f.render_stateful_widget(list, area, &mut state);
}
