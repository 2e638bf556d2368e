pub mod admin_pane;
pub mod header;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod status_pane;
pub mod styles;
pub mod system_pane;
pub mod tracker_pane;

use crate::app::App;
use crate::domain::{Tab, UiMode};
use admin_pane::render_admin_pane;
use header::{render_header, render_tabs};
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::{render_import_modal, render_notice_modal, render_reset_modal};
use ratatui::{widgets::Block, Frame};
use status_pane::render_status_pane;
use styles::default_style;
use system_pane::render_system_pane;
use tracker_pane::render_tracker_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &App) {
    let size = f.size();
    f.render_widget(Block::default().style(default_style()), size);

    let layout = create_layout(size);

    render_header(f, app, layout.header_area);
    render_tabs(f, app, layout.tabs_area);
    render_keybindings(f, app.tab, layout.keybindings_area);

    match app.tab {
        Tab::Tracker => render_tracker_pane(f, app, layout.content_area),
        Tab::Admin => render_admin_pane(f, app, layout.content_area),
        Tab::Status => render_status_pane(f, app, layout.content_area),
        Tab::System => render_system_pane(f, app, layout.content_area),
    }

    match app.ui_mode {
        UiMode::AddingQuest => render_input_form(f, app, size),
        UiMode::ConfirmReset => render_reset_modal(f, app, size),
        UiMode::ImportPath => render_import_modal(f, app, size),
        UiMode::Notice => render_notice_modal(f, app, size),
        UiMode::Normal => {}
    }
}
