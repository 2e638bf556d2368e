use super::progress::{level_for, total_xp};
use super::quest::Quest;
use crate::error::StateError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::HashSet;

/// The whole persisted state.
///
/// `total_xp` and `level` are cached derivations of the quests' histories.
/// They are private and only written by [`AppState::recompute`], which runs
/// at the end of every mutation and every load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateDocument", into = "StateDocument")]
pub struct AppState {
    quests: Vec<Quest>,
    total_xp: u64,
    level: u64,
}

/// Wire shape of the durable slot and of holotapes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateDocument {
    pub quests: Vec<Quest>,
    #[serde(rename = "totalXP")]
    pub total_xp: Number,
    #[serde(default = "default_level")]
    pub level: Number,
}

fn default_level() -> Number {
    Number::from(1u64)
}

/// A mutation intent dispatched by the interaction surface
#[derive(Debug, Clone)]
pub enum Action {
    AddQuest(Quest),
    DeleteQuest(String),
    ToggleCompletion { id: String, date: NaiveDate },
    /// Clear every history; quests themselves survive
    ResetAll,
    /// Replace the whole state, e.g. from an imported holotape
    LoadExternal(AppState),
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            quests: Vec::new(),
            total_xp: 0,
            level: 1,
        }
    }
}

impl AppState {
    /// Build a state from quests, deriving XP and level
    pub fn from_quests(quests: Vec<Quest>) -> Result<Self, StateError> {
        let mut seen = HashSet::new();
        for quest in &quests {
            if !seen.insert(quest.id()) {
                return Err(StateError::DuplicateId(quest.id().to_string()));
            }
        }

        let mut state = Self {
            quests,
            total_xp: 0,
            level: 1,
        };
        state.recompute();
        Ok(state)
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn total_xp(&self) -> u64 {
        self.total_xp
    }

    pub fn level(&self) -> u64 {
        self.level
    }

    pub fn find(&self, id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id() == id)
    }

    /// Resolve a quest by full id or by a unique id prefix
    pub fn resolve_id(&self, needle: &str) -> Option<&Quest> {
        if let Some(quest) = self.find(needle) {
            return Some(quest);
        }
        if needle.is_empty() {
            return None;
        }
        let mut matches = self.quests.iter().filter(|q| q.id().starts_with(needle));
        match (matches.next(), matches.next()) {
            (Some(quest), None) => Some(quest),
            _ => None,
        }
    }

    /// Apply one mutation, then re-derive XP and level from scratch
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::AddQuest(quest) => {
                // Ids are minted fresh; an imported collision would break lookups
                if self.find(quest.id()).is_some() {
                    tracing::warn!(id = %quest.id(), "ignoring quest with duplicate id");
                } else {
                    self.quests.push(quest);
                }
            }
            Action::DeleteQuest(id) => {
                self.quests.retain(|q| q.id() != id);
            }
            Action::ToggleCompletion { id, date } => {
                if let Some(quest) = self.quests.iter_mut().find(|q| q.id() == id) {
                    let completed = quest.toggle(date);
                    tracing::debug!(id = %id, %date, completed, "toggled completion");
                }
            }
            Action::ResetAll => {
                for quest in &mut self.quests {
                    quest.clear_history();
                }
            }
            Action::LoadExternal(state) => {
                self.quests = state.quests;
            }
        }

        self.recompute();
    }

    /// Full recomputation of the cached aggregates
    fn recompute(&mut self) {
        self.total_xp = total_xp(&self.quests);
        self.level = level_for(self.total_xp);
    }
}

impl TryFrom<StateDocument> for AppState {
    type Error = StateError;

    /// The document's own totalXP and level are not trusted
    fn try_from(doc: StateDocument) -> Result<Self, Self::Error> {
        let state = Self::from_quests(doc.quests)?;
        let stored_matches = doc.total_xp.as_u64() == Some(state.total_xp)
            && doc.level.as_u64() == Some(state.level);
        if !stored_matches {
            tracing::warn!(
                stored_xp = %doc.total_xp,
                stored_level = %doc.level,
                derived_xp = state.total_xp,
                derived_level = state.level,
                "stored aggregates disagree with history, using derived values"
            );
        }
        Ok(state)
    }
}

impl From<AppState> for StateDocument {
    fn from(state: AppState) -> Self {
        Self {
            quests: state.quests,
            total_xp: Number::from(state.total_xp),
            level: Number::from(state.level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::{Category, CategoryChoice};
    use crate::domain::quest::QuestDraft;
    use pretty_assertions::assert_eq;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, n).unwrap()
    }

    fn quest(name: &str, duration: u32, category: Category) -> Quest {
        Quest::new(name.to_string(), duration, category)
    }

    fn assert_invariants(state: &AppState) {
        let expected: u64 = state
            .quests()
            .iter()
            .map(|q| q.completions() * u64::from(q.duration))
            .sum();
        assert_eq!(state.total_xp(), expected);
        assert_eq!(state.level(), expected / 100 + 1);
    }

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert!(state.quests().is_empty());
        assert_eq!(state.total_xp(), 0);
        assert_eq!(state.level(), 1);
    }

    #[test]
    fn test_pushups_scenario() {
        let mut state = AppState::default();
        let pushups = quest("Pushups", 10, Category::Strength);
        let pushups_id = pushups.id().to_string();
        state.apply(Action::AddQuest(pushups));

        state.apply(Action::ToggleCompletion { id: pushups_id.clone(), date: day(1) });
        assert_eq!((state.total_xp(), state.level()), (10, 1));

        state.apply(Action::ToggleCompletion { id: pushups_id, date: day(1) });
        assert_eq!((state.total_xp(), state.level()), (0, 1));

        let long = quest("Long", 150, Category::from_label("OTHER"));
        let long_id = long.id().to_string();
        state.apply(Action::AddQuest(long));
        state.apply(Action::ToggleCompletion { id: long_id, date: day(1) });
        assert_eq!((state.total_xp(), state.level()), (150, 2));
    }

    #[test]
    fn test_invariants_hold_across_toggle_sequence() {
        let mut state = AppState::default();
        let specs = [
            (7, Category::Strength),
            (25, Category::Health),
            (60, Category::Wealth),
        ];
        let ids: Vec<String> = specs
            .into_iter()
            .map(|(duration, category)| {
                let q = quest("q", duration, category);
                let id = q.id().to_string();
                state.apply(Action::AddQuest(q));
                id
            })
            .collect();

        // Deterministic pseudo-random walk over (quest, day) pairs
        let mut seed: u32 = 17;
        for _ in 0..200 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let id = ids[(seed >> 8) as usize % ids.len()].clone();
            let date = day((seed >> 16) % 28 + 1);
            state.apply(Action::ToggleCompletion { id, date });
            assert_invariants(&state);
        }
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let mut state = AppState::default();
        let q = quest("Read", 40, Category::Intelligence).with_history(&[day(2), day(3)]);
        let id = q.id().to_string();
        state.apply(Action::AddQuest(q));
        let before = state.clone();

        state.apply(Action::ToggleCompletion { id: id.clone(), date: day(5) });
        state.apply(Action::ToggleCompletion { id: id.clone(), date: day(5) });
        assert_eq!(state, before);

        state.apply(Action::ToggleCompletion { id: id.clone(), date: day(2) });
        state.apply(Action::ToggleCompletion { id, date: day(2) });
        assert_eq!(state, before);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut state = AppState::default();
        state.apply(Action::AddQuest(quest("A", 10, Category::Strength)));
        let before = state.clone();
        state.apply(Action::ToggleCompletion { id: "missing".to_string(), date: day(1) });
        assert_eq!(state, before);
    }

    #[test]
    fn test_delete_removes_only_its_contribution() {
        let a = quest("A", 30, Category::Strength).with_history(&[day(1), day(2)]);
        let b = quest("B", 45, Category::Health).with_history(&[day(1)]);
        let a_id = a.id().to_string();
        let mut state = AppState::from_quests(vec![a, b]).unwrap();
        assert_eq!(state.total_xp(), 105);

        state.apply(Action::DeleteQuest(a_id));
        assert_eq!(state.total_xp(), 45);
        assert_eq!(state.quests().len(), 1);
        assert_invariants(&state);

        let before = state.clone();
        state.apply(Action::DeleteQuest("absent".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset_keeps_quests_and_clears_history() {
        let a = quest("A", 300, Category::Strength).with_history(&[day(1), day(2)]);
        let b = quest("B", 45, Category::Custom("Chess".to_string())).with_history(&[day(1)]);
        let mut state = AppState::from_quests(vec![a.clone(), b.clone()]).unwrap();
        assert_eq!(state.level(), 7);

        state.apply(Action::ResetAll);
        assert_eq!(state.total_xp(), 0);
        assert_eq!(state.level(), 1);
        assert_invariants(&state);
        for (after, before) in state.quests().iter().zip([a, b]) {
            assert!(after.history().is_empty());
            assert_eq!(after.id(), before.id());
            assert_eq!(after.name, before.name);
            assert_eq!(after.duration, before.duration);
            assert_eq!(after.category, before.category);
        }
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut state = AppState::default();
        for name in ["first", "second", "third"] {
            state.apply(Action::AddQuest(quest(name, 5, Category::Wealth)));
        }
        let names: Vec<&str> = state.quests().iter().map(|q| q.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_load_external_recomputes() {
        let imported = AppState::from_quests(vec![
            quest("A", 250, Category::Health).with_history(&[day(1)]),
            quest("B", 35, Category::Wealth).with_history(&[day(1), day(2)]),
        ])
        .unwrap();
        let mut state = AppState::from_quests(vec![
            quest("Old", 500, Category::Strength).with_history(&[day(3)]),
        ])
        .unwrap();
        state.apply(Action::LoadExternal(imported.clone()));
        assert_eq!(state, imported);
        assert_eq!((state.total_xp(), state.level()), (320, 4));
        assert_invariants(&state);
    }

    #[test]
    fn test_add_quest_with_history_recomputes() {
        let mut state = AppState::default();
        let q = quest("Swim", 80, Category::Health).with_history(&[day(1), day(2)]);
        let id = q.id().to_string();
        state.apply(Action::AddQuest(q));
        assert_eq!((state.total_xp(), state.level()), (160, 2));
        assert_invariants(&state);

        // A second quest carrying the same id is dropped
        let before = state.clone();
        let clash = quest("Clash", 999, Category::Wealth)
            .with_id(&id)
            .with_history(&[day(4)]);
        state.apply(Action::AddQuest(clash));
        assert_eq!(state, before);
        assert_invariants(&state);
    }

    #[test]
    fn test_custom_label_naming_a_standard_category_round_trips() {
        let draft = QuestDraft {
            name: "Deadlift".to_string(),
            duration: "30".to_string(),
            category: CategoryChoice::Other,
            custom_category: "STRENGTH".to_string(),
        };
        let q = draft.build().unwrap().with_history(&[day(1)]);
        let state = AppState::from_quests(vec![q]).unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let back: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
        assert_eq!(back.quests()[0].category.bucket(), "STRENGTH");
    }

    #[test]
    fn test_document_aggregates_are_rederived() {
        let json = r#"{"quests":[{"id":"x","name":"Run","duration":20,"category":"HEALTH",
            "history":{"2024-01-01":true,"2024-01-02":true}}],"totalXP":9999,"level":42}"#;
        let state: AppState = serde_json::from_str(json).unwrap();
        assert_eq!(state.total_xp(), 40);
        assert_eq!(state.level(), 1);
    }

    #[test]
    fn test_document_rejects_duplicate_ids() {
        let json = r#"{"quests":[
            {"id":"x","name":"A","duration":1,"category":"HEALTH","history":{}},
            {"id":"x","name":"B","duration":1,"category":"HEALTH","history":{}}
            ],"totalXP":0,"level":1}"#;
        assert!(serde_json::from_str::<AppState>(json).is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let state = AppState::from_quests(vec![
            quest("A", 10, Category::Strength).with_history(&[day(1)]),
        ])
        .unwrap();
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["totalXP"], serde_json::json!(10));
        assert_eq!(value["level"], serde_json::json!(1));
        assert!(value["quests"].is_array());
    }

    #[test]
    fn test_resolve_id_by_prefix() {
        let a = quest("A", 1, Category::Strength).with_id("abc123");
        let b = quest("B", 1, Category::Strength).with_id("abd456");
        let state = AppState::from_quests(vec![a, b]).unwrap();

        assert_eq!(state.resolve_id("abc").map(|q| q.name.as_str()), Some("A"));
        assert_eq!(state.resolve_id("abd456").map(|q| q.name.as_str()), Some("B"));
        assert!(state.resolve_id("ab").is_none());
        assert!(state.resolve_id("").is_none());
    }
}
