use thiserror::Error;

/// Reasons a state document cannot become an `AppState`
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("quest {id:?} has a non-positive duration")]
    NonPositiveDuration { id: String },
    #[error("quest id {0:?} appears more than once")]
    DuplicateId(String),
    #[error("quest id must not be empty")]
    EmptyId,
    #[error("quest {id:?} has an invalid history date {date:?}")]
    InvalidDate { id: String, date: String },
}

/// Failures while reading or validating a holotape
#[derive(Debug, Error)]
pub enum HolotapeError {
    #[error("failed to read holotape: {0}")]
    Io(#[from] std::io::Error),
    #[error("holotape is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("holotape has no quests collection")]
    MissingQuests,
    #[error("holotape totalXP is missing or not a number")]
    TotalXpNotNumber,
    #[error("holotape contents are invalid: {0}")]
    Invalid(#[from] StateError),
}

/// Durable slot misuse
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("refusing to save before the stored state has been loaded")]
    SaveBeforeLoad,
}

/// Why a new-routine draft was not turned into a quest
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("routine name must not be empty")]
    EmptyName,
    #[error("duration must be a whole number of minutes greater than zero")]
    InvalidDuration,
}
