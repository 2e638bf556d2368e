use super::category::{Category, CategoryChoice};
use crate::error::{DraftError, StateError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

/// Date format used for history keys
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A user-defined recurring routine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestDocument", into = "QuestDocument")]
pub struct Quest {
    /// Opaque identifier, minted at creation and never changed
    id: String,
    pub name: String,
    /// Minutes; one completion is worth this much XP
    pub duration: u32,
    pub category: Category,
    /// Dates on which the quest was completed
    history: BTreeSet<NaiveDate>,
}

/// Wire shape of a quest: history is a `{ "YYYY-MM-DD": true }` object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestDocument {
    pub id: String,
    pub name: String,
    pub duration: u32,
    pub category: Category,
    #[serde(default)]
    pub history: BTreeMap<String, bool>,
}

impl Quest {
    pub fn new(name: String, duration: u32, category: Category) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            duration,
            category,
            history: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn history(&self) -> &BTreeSet<NaiveDate> {
        &self.history
    }

    pub fn is_completed(&self, date: NaiveDate) -> bool {
        self.history.contains(&date)
    }

    /// Number of completion marks
    pub fn completions(&self) -> u64 {
        self.history.len() as u64
    }

    /// Flip the completion mark for `date`. Returns true if it is now completed.
    pub(super) fn toggle(&mut self, date: NaiveDate) -> bool {
        if self.history.remove(&date) {
            false
        } else {
            self.history.insert(date);
            true
        }
    }

    pub(super) fn clear_history(&mut self) {
        self.history.clear();
    }

    #[cfg(test)]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    #[cfg(test)]
    pub fn with_history(mut self, dates: &[NaiveDate]) -> Self {
        self.history.extend(dates.iter().copied());
        self
    }
}

impl TryFrom<QuestDocument> for Quest {
    type Error = StateError;

    fn try_from(doc: QuestDocument) -> Result<Self, Self::Error> {
        if doc.id.is_empty() {
            return Err(StateError::EmptyId);
        }
        if doc.duration == 0 {
            return Err(StateError::NonPositiveDuration { id: doc.id });
        }

        let mut history = BTreeSet::new();
        for (key, completed) in doc.history {
            let date = NaiveDate::parse_from_str(&key, DATE_FORMAT).map_err(|_| {
                StateError::InvalidDate {
                    id: doc.id.clone(),
                    date: key.clone(),
                }
            })?;
            // A false marker means "not completed"; never keep it
            if completed {
                history.insert(date);
            }
        }

        Ok(Self {
            id: doc.id,
            name: doc.name,
            duration: doc.duration,
            category: doc.category,
            history,
        })
    }
}

impl From<Quest> for QuestDocument {
    fn from(quest: Quest) -> Self {
        Self {
            id: quest.id,
            name: quest.name,
            duration: quest.duration,
            category: quest.category,
            history: quest
                .history
                .into_iter()
                .map(|date| (date.format(DATE_FORMAT).to_string(), true))
                .collect(),
        }
    }
}

/// Unvalidated input from the new-routine form or the command line
#[derive(Debug, Clone, Default)]
pub struct QuestDraft {
    pub name: String,
    pub duration: String,
    pub category: CategoryChoice,
    pub custom_category: String,
}

impl QuestDraft {
    /// Validate and mint a new quest with a fresh id and empty history
    pub fn build(&self) -> Result<Quest, DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::EmptyName);
        }
        let duration = self
            .duration
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|minutes| *minutes > 0)
            .ok_or(DraftError::InvalidDuration)?;

        let category = self.category.resolve(&self.custom_category);
        Ok(Quest::new(self.name.clone(), duration, category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_new_quest_has_empty_history_and_uuid() {
        let quest = Quest::new("Pushups".to_string(), 10, Category::Strength);
        assert!(quest.history().is_empty());
        assert!(Uuid::parse_str(quest.id()).is_ok());
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut quest = Quest::new("Read".to_string(), 30, Category::Intelligence);
        assert!(quest.toggle(date("2024-01-01")));
        assert!(quest.is_completed(date("2024-01-01")));
        assert!(!quest.toggle(date("2024-01-01")));
        assert_eq!(quest.completions(), 0);
    }

    #[test]
    fn test_history_serializes_as_true_map() {
        let quest = Quest::new("Run".to_string(), 20, Category::Health)
            .with_history(&[date("2024-02-03")]);
        let value = serde_json::to_value(&quest).unwrap();
        assert_eq!(value["history"]["2024-02-03"], serde_json::Value::Bool(true));
        assert_eq!(value["category"], "HEALTH");
    }

    #[test]
    fn test_false_markers_are_dropped() {
        let json = r#"{"id":"a","name":"x","duration":5,"category":"WEALTH",
            "history":{"2024-01-01":true,"2024-01-02":false}}"#;
        let quest: Quest = serde_json::from_str(json).unwrap();
        assert_eq!(quest.completions(), 1);
        assert!(!quest.is_completed(date("2024-01-02")));
    }

    #[test]
    fn test_rejects_zero_duration_and_bad_dates() {
        let zero = r#"{"id":"a","name":"x","duration":0,"category":"WEALTH","history":{}}"#;
        assert!(serde_json::from_str::<Quest>(zero).is_err());

        let bad_date = r#"{"id":"a","name":"x","duration":3,"category":"WEALTH",
            "history":{"yesterday":true}}"#;
        assert!(serde_json::from_str::<Quest>(bad_date).is_err());
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = QuestDraft {
            name: "  ".to_string(),
            duration: "10".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.build().unwrap_err(), DraftError::EmptyName);

        draft.name = "Pushups".to_string();
        for bad in ["", "abc", "0", "-5", "2.5"] {
            draft.duration = bad.to_string();
            assert_eq!(draft.build().unwrap_err(), DraftError::InvalidDuration);
        }

        draft.duration = " 15 ".to_string();
        draft.category = CategoryChoice::Other;
        let quest = draft.build().unwrap();
        assert_eq!(quest.duration, 15);
        assert_eq!(quest.category, Category::Custom("MISC".to_string()));
        assert_eq!(quest.name, "Pushups");
    }
}
