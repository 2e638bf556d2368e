use crate::app::App;
use crate::domain::CategoryChoice;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// One labelled field, with a cursor when focused
fn field_line<'a>(value: &'a str, focused: bool) -> Line<'a> {
    Line::from(vec![
        Span::raw("> "),
        Span::styled(value, modal_title_style()),
        if focused {
            Span::styled("█", modal_title_style())
        } else {
            Span::raw("")
        },
    ])
}

fn label(text: &str, focused: bool) -> Line<'static> {
    if focused {
        Line::raw(format!("{} (editing)", text))
    } else {
        Line::raw(text.to_string())
    }
}

/// Render the new routine protocol form
pub fn render_input_form(f: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.input_form else {
        return;
    };
    let modal_area = create_modal_area(area);
    f.render_widget(Clear, modal_area);

    let draft = &form.draft;
    let mut lines = vec![
        label("ROUTINE NAME:", form.editing_field == 0),
        field_line(&draft.name, form.editing_field == 0),
        label("DURATION (MINS):", form.editing_field == 1),
        field_line(&draft.duration, form.editing_field == 1),
        label("CATEGORY:", form.editing_field == 2),
        Line::from(vec![
            Span::raw("< "),
            Span::styled(draft.category.label(), modal_title_style()),
            Span::raw(" >"),
        ]),
    ];

    if draft.category == CategoryChoice::Other {
        lines.push(label("CUSTOM CATEGORY (blank = MISC):", form.editing_field == 3));
        lines.push(field_line(&draft.custom_category, form.editing_field == 3));
    }

    lines.push(Line::raw(""));
    lines.push(Line::raw(
        "Tab next field  ·  ←/→ category  ·  Enter initiate  ·  Esc cancel",
    ));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" NEW ROUTINE PROTOCOL ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}
