use crate::domain::Tab;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Hints for the active tab
fn tab_hints(tab: Tab) -> Vec<&'static str> {
    match tab {
        Tab::Tracker => vec!["↑/↓ select   ", "space mark today   "],
        Tab::Admin => vec!["↑/↓ select   ", "a add   ", "x delete   "],
        Tab::Status => vec!["R reset status   "],
        Tab::System => vec!["e export   ", "i import   "],
    }
}

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, tab: Tab, area: Rect) {
    let mut spans = vec![Span::raw(" tab/1-4 switch   ")];
    spans.extend(tab_hints(tab).into_iter().map(Span::raw));
    spans.push(Span::raw("q quit"));

    let paragraph = Paragraph::new(Line::from(spans)).style(hint_style());
    f.render_widget(paragraph, area);
}
