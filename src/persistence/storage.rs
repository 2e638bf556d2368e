use super::files::{atomic_write, backup_file, read_file, storage_file};
use crate::domain::AppState;
use crate::error::StorageError;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// The durable slot holding the whole application state.
///
/// `load` must run before the first `save`, otherwise the transient default
/// state would overwrite what is on disk.
#[derive(Debug)]
pub struct Storage {
    path: PathBuf,
    loaded: bool,
}

impl Storage {
    /// Storage slot inside a data directory
    pub fn open(dir: &Path) -> Self {
        Self::at(storage_file(dir))
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path, loaded: false }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the slot. A missing slot yields the default state; a corrupt one
    /// is logged, backed up, and also yields the default state.
    pub fn load(&mut self) -> Result<AppState> {
        let state = match read_file(&self.path)? {
            None => {
                tracing::info!(path = %self.path.display(), "no stored state, starting fresh");
                AppState::default()
            }
            Some(content) => match serde_json::from_str::<AppState>(&content) {
                Ok(state) => {
                    tracing::info!(
                        quests = state.quests().len(),
                        total_xp = state.total_xp(),
                        level = state.level(),
                        "loaded stored state"
                    );
                    state
                }
                Err(e) => {
                    tracing::error!(error = %e, "data corruption detected, using empty state");
                    match backup_file(&self.path) {
                        Ok(backup) => {
                            tracing::warn!(backup = %backup.display(), "corrupt slot backed up")
                        }
                        Err(e) => tracing::warn!(error = %e, "could not back up corrupt slot"),
                    }
                    AppState::default()
                }
            },
        };

        self.loaded = true;
        Ok(state)
    }

    /// Overwrite the slot with the full state
    pub fn save(&self, state: &AppState) -> Result<()> {
        if !self.loaded {
            return Err(StorageError::SaveBeforeLoad.into());
        }
        let json = serde_json::to_string(state)?;
        atomic_write(&self.path, &json)?;
        tracing::debug!(path = %self.path.display(), "state saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Action, Category, Quest};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn sample_state() -> AppState {
        let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
        AppState::from_quests(vec![
            Quest::new("Pushups".to_string(), 10, Category::Strength)
                .with_history(&[day(1), day(2)]),
            Quest::new("Chess".to_string(), 45, Category::Custom("Games".to_string()))
                .with_history(&[day(3)]),
            Quest::new("Budget".to_string(), 15, Category::Wealth),
        ])
        .unwrap()
    }

    #[test]
    fn test_load_missing_slot_gives_default() {
        let temp_dir = tempdir().unwrap();
        let mut storage = Storage::open(temp_dir.path());
        assert_eq!(storage.load().unwrap(), AppState::default());
    }

    #[test]
    fn test_save_before_load_is_refused() {
        let temp_dir = tempdir().unwrap();
        let storage = Storage::open(temp_dir.path());
        let err = storage.save(&AppState::default()).unwrap_err();
        assert_eq!(
            err.downcast_ref::<StorageError>(),
            Some(&StorageError::SaveBeforeLoad)
        );
        assert!(!storage.path().exists());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let temp_dir = tempdir().unwrap();
        let mut storage = Storage::open(temp_dir.path());
        storage.load().unwrap();

        let state = sample_state();
        storage.save(&state).unwrap();

        let mut reopened = Storage::open(temp_dir.path());
        assert_eq!(reopened.load().unwrap(), state);
    }

    #[test]
    fn test_round_trip_after_mutations() {
        let temp_dir = tempdir().unwrap();
        let mut storage = Storage::open(temp_dir.path());
        let mut state = storage.load().unwrap();

        let quest = Quest::new("Run".to_string(), 150, Category::Health);
        let id = quest.id().to_string();
        state.apply(Action::AddQuest(quest));
        state.apply(Action::ToggleCompletion {
            id,
            date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
        });
        storage.save(&state).unwrap();

        let loaded = Storage::open(temp_dir.path()).load().unwrap();
        assert_eq!(loaded, state);
        assert_eq!(loaded.level(), 2);
    }

    #[test]
    fn test_corrupt_slot_falls_back_and_backs_up() {
        let temp_dir = tempdir().unwrap();
        let mut storage = Storage::open(temp_dir.path());
        atomic_write(storage.path(), "{ not json").unwrap();

        let state = storage.load().unwrap();
        assert_eq!(state, AppState::default());

        let backups = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains("corrupt"))
            .count();
        assert_eq!(backups, 1);
    }

    #[test]
    fn test_wrong_shape_counts_as_corrupt() {
        let temp_dir = tempdir().unwrap();
        let mut storage = Storage::open(temp_dir.path());
        atomic_write(storage.path(), r#"{"quests":"nope","totalXP":0}"#).unwrap();
        assert_eq!(storage.load().unwrap(), AppState::default());
    }
}
