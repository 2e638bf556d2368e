use crate::app::App;
use crate::domain::{Tab, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingQuest => handle_input_form_mode(app, key),
        UiMode::ConfirmReset => handle_reset_mode(app, key),
        UiMode::ImportPath => handle_import_mode(app, key),
        UiMode::Notice => {
            app.dismiss_notice();
            Ok(false)
        }
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),

        // Tab navigation
        KeyCode::Tab | KeyCode::Right => app.next_tab(),
        KeyCode::BackTab | KeyCode::Left => app.prev_tab(),
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            app.select_tab(Tab::all()[idx]);
        }

        // Selection is shared by the tracker and admin lists
        KeyCode::Up | KeyCode::Char('k') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection_down(),

        _ => return handle_tab_key(app, key),
    }
    Ok(false)
}

/// Keys that only mean something on a given tab
fn handle_tab_key(app: &mut App, key: KeyEvent) -> Result<bool> {
    match (app.tab, key.code) {
        (Tab::Tracker, KeyCode::Char(' ')) | (Tab::Tracker, KeyCode::Enter) => {
            app.toggle_selected_today();
        }
        (Tab::Admin, KeyCode::Char('a')) => app.start_add_quest(),
        (Tab::Admin, KeyCode::Char('x')) | (Tab::Admin, KeyCode::Delete) => app.delete_selected(),
        (Tab::Status, KeyCode::Char('R')) => app.request_reset(),
        (Tab::System, KeyCode::Char('e')) => app.export(),
        (Tab::System, KeyCode::Char('i')) => app.start_import(),
        _ => {}
    }
    Ok(false)
}

/// Handle keys while the new routine form is open
fn handle_input_form_mode(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.cancel_input_form(),
        KeyCode::Enter => app.submit_input_form(),
        KeyCode::Tab => app.input_form_toggle_field(),
        KeyCode::Left => app.input_form_cycle_category(false),
        KeyCode::Right => app.input_form_cycle_category(true),
        KeyCode::Backspace => app.input_form_backspace(),
        KeyCode::Char(c) => app.input_form_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Only an explicit 'y' wipes progress
fn handle_reset_mode(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_reset(),
        _ => app.cancel_reset(),
    }
    Ok(false)
}

fn handle_import_mode(app: &mut App, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => app.cancel_import(),
        KeyCode::Enter => app.submit_import(),
        KeyCode::Backspace => app.import_backspace(),
        KeyCode::Char(c) => app.import_add_char(c),
        _ => {}
    }
    Ok(false)
}
