use crate::config::Config;
use crate::domain::{
    category_breakdown, Action, AppState, CategoryChoice, DayStatus, Quest, QuestDraft, Tab, UiMode,
};
use crate::persistence::{export_holotape, read_holotape, Storage};
use anyhow::Result;
use chrono::NaiveDate;

/// Input form state for adding a routine
#[derive(Debug, Clone, Default)]
pub struct QuestForm {
    pub draft: QuestDraft,
    /// 0 = name, 1 = duration, 2 = category, 3 = custom category
    pub editing_field: usize,
}

impl QuestForm {
    /// The custom category field only exists while OTHER is selected
    fn field_count(&self) -> usize {
        if self.draft.category == CategoryChoice::Other {
            4
        } else {
            3
        }
    }
}

/// Message shown over the current tab until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

/// Main application state for the terminal surface
pub struct App {
    pub state: AppState,
    pub storage: Storage,
    pub config: Config,
    pub tab: Tab,
    pub ui_mode: UiMode,
    pub selected_index: usize,
    pub input_form: Option<QuestForm>,
    pub import_path: String,
    pub notice: Option<Notice>,
    pub needs_save: bool,
    /// Date the tracker treats as today
    pub today: NaiveDate,
}

impl App {
    pub fn new(state: AppState, storage: Storage, config: Config, today: NaiveDate) -> Self {
        Self {
            state,
            storage,
            config,
            tab: Tab::Tracker,
            ui_mode: UiMode::Normal,
            selected_index: 0,
            input_form: None,
            import_path: String::new(),
            notice: None,
            needs_save: false,
            today,
        }
    }

    /// Apply a mutation and schedule a save
    pub fn dispatch(&mut self, action: Action) {
        self.state.apply(action);
        self.needs_save = true;
        self.clamp_selection();
    }

    /// Save state to the durable slot
    pub fn save(&mut self) -> Result<()> {
        self.storage.save(&self.state)?;
        self.needs_save = false;
        Ok(())
    }

    /// Re-read the durable slot and start the surface over from it
    pub fn reload(&mut self) -> Result<()> {
        self.state = self.storage.load()?;
        self.needs_save = false;
        self.input_form = None;
        self.import_path.clear();
        self.selected_index = 0;
        self.ui_mode = if self.notice.is_some() {
            UiMode::Notice
        } else {
            UiMode::Normal
        };
        Ok(())
    }

    /// Move "today" forward when the calendar day changes. Returns true if it did.
    pub fn refresh_today(&mut self, now: NaiveDate) -> bool {
        if now != self.today {
            tracing::info!(from = %self.today, to = %now, "day changed");
            self.today = now;
            true
        } else {
            false
        }
    }

    pub fn selected_quest(&self) -> Option<&Quest> {
        self.state.quests().get(self.selected_index)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.state.quests().len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.state.quests().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.tab = self.tab.prev();
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    /// Toggle the selected quest's completion for `date`.
    /// Only today's column is editable; other dates are left alone.
    pub fn toggle_selected(&mut self, date: NaiveDate) -> bool {
        if !DayStatus::of(date, self.today).is_editable() {
            return false;
        }
        let Some(id) = self.selected_quest().map(|q| q.id().to_string()) else {
            return false;
        };
        self.dispatch(Action::ToggleCompletion { id, date });
        true
    }

    pub fn toggle_selected_today(&mut self) -> bool {
        self.toggle_selected(self.today)
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_quest().map(|q| q.id().to_string()) {
            tracing::info!(id = %id, "quest deleted");
            self.dispatch(Action::DeleteQuest(id));
        }
    }

    /// Start adding a new routine (opens input form)
    pub fn start_add_quest(&mut self) {
        self.input_form = Some(QuestForm::default());
        self.ui_mode = UiMode::AddingQuest;
    }

    /// Cycle through the form's fields
    pub fn input_form_toggle_field(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.editing_field = (form.editing_field + 1) % form.field_count();
        }
    }

    /// Add character to the current field
    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => form.draft.name.push(c),
                1 => {
                    if c.is_ascii_digit() {
                        form.draft.duration.push(c);
                    }
                }
                3 => form.draft.custom_category.push(c),
                _ => {}
            }
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            match form.editing_field {
                0 => {
                    form.draft.name.pop();
                }
                1 => {
                    form.draft.duration.pop();
                }
                3 => {
                    form.draft.custom_category.pop();
                }
                _ => {}
            }
        }
    }

    /// Change the category selection while the category field is focused
    pub fn input_form_cycle_category(&mut self, forward: bool) {
        if let Some(form) = &mut self.input_form {
            if form.editing_field == 2 {
                form.draft.category = if forward {
                    form.draft.category.next()
                } else {
                    form.draft.category.prev()
                };
            }
        }
    }

    /// Submit the form. Invalid input leaves the form open and untouched.
    pub fn submit_input_form(&mut self) {
        let Some(form) = &self.input_form else {
            return;
        };
        match form.draft.build() {
            Ok(quest) => {
                tracing::info!(id = %quest.id(), name = %quest.name, "quest added");
                self.dispatch(Action::AddQuest(quest));
                self.selected_index = self.state.quests().len().saturating_sub(1);
                self.input_form = None;
                self.ui_mode = UiMode::Normal;
            }
            Err(e) => {
                tracing::debug!(error = %e, "new routine not added");
            }
        }
    }

    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Ask for confirmation before wiping progress
    pub fn request_reset(&mut self) {
        self.ui_mode = UiMode::ConfirmReset;
    }

    pub fn cancel_reset(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Wipe all history, persist immediately, and restart from the slot
    pub fn confirm_reset(&mut self) {
        let previous = self.state.clone();
        self.dispatch(Action::ResetAll);
        if self.persist_or_restore(previous, "RESET", "ERROR: RESET NOT SAVED. PROGRESS KEPT.") {
            tracing::warn!("all XP and history wiped");
            self.show_notice("RESET", "OVERSEER STATUS RESET. ALL PROGRESS ERASED.", false);
            self.restart();
        }
    }

    /// Save a wholesale change. If the slot cannot be written the previous
    /// state is put back and an error notice is shown. Returns true on success.
    fn persist_or_restore(&mut self, previous: AppState, title: &str, failure: &str) -> bool {
        match self.save() {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "failed to save state");
                self.state = previous;
                self.needs_save = false;
                self.clamp_selection();
                self.import_path.clear();
                self.show_notice(title, failure, true);
                false
            }
        }
    }

    fn show_notice(&mut self, title: &str, message: &str, is_error: bool) {
        self.notice = Some(Notice {
            title: title.to_string(),
            message: message.to_string(),
            is_error,
        });
        self.ui_mode = UiMode::Notice;
    }

    /// Restart from the slot; a failed read keeps the state already in memory
    fn restart(&mut self) {
        if let Err(e) = self.reload() {
            tracing::error!(error = %e, "failed to reload state");
            self.ui_mode = UiMode::Notice;
        }
    }

    /// Write a holotape for today into the configured export directory
    pub fn export(&mut self) {
        let dir = self.config.export_dir();
        self.notice = Some(match export_holotape(&self.state, &dir, self.today) {
            Ok(path) => Notice {
                title: "EXPORT".to_string(),
                message: format!("HOLOTAPE WRITTEN: {}", path.display()),
                is_error: false,
            },
            Err(e) => {
                tracing::error!(error = %e, "export failed");
                Notice {
                    title: "EXPORT".to_string(),
                    message: format!("ERROR: EXPORT FAILED. {}", e),
                    is_error: true,
                }
            }
        });
        self.ui_mode = UiMode::Notice;
    }

    pub fn start_import(&mut self) {
        self.import_path.clear();
        self.ui_mode = UiMode::ImportPath;
    }

    pub fn import_add_char(&mut self, c: char) {
        self.import_path.push(c);
    }

    pub fn import_backspace(&mut self) {
        self.import_path.pop();
    }

    pub fn cancel_import(&mut self) {
        self.import_path.clear();
        self.ui_mode = UiMode::Normal;
    }

    /// Load the holotape at the typed path. On success the slot is replaced
    /// and the surface restarts from it; on failure nothing changes.
    pub fn submit_import(&mut self) {
        let path = std::path::PathBuf::from(self.import_path.trim());
        match read_holotape(&path) {
            Ok(imported) => {
                let previous = self.state.clone();
                self.dispatch(Action::LoadExternal(imported));
                if self.persist_or_restore(
                    previous,
                    "IMPORT",
                    "ERROR: HOLOTAPE NOT SAVED. DATA UNCHANGED.",
                ) {
                    self.show_notice(
                        "IMPORT",
                        "HOLOTAPE LOADED SUCCESSFULLY. SYSTEM RESTARTING...",
                        false,
                    );
                    self.restart();
                }
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "holotape rejected");
                self.import_path.clear();
                self.show_notice("IMPORT", "ERROR: HOLOTAPE CORRUPTED.", true);
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.ui_mode = UiMode::Normal;
    }

    /// XP per category bucket for the status view
    pub fn category_breakdown(&self) -> Vec<(&'static str, u64)> {
        category_breakdown(self.state.quests())
    }
}
