//! Holotapes: pretty-printed JSON snapshots of the whole state, used for
//! export and import.

use super::files::atomic_write;
use crate::domain::{AppState, StateDocument};
use crate::error::HolotapeError;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// `PIPBOY_DATA_<YYYY-MM-DD>.json`
pub fn holotape_filename(date: NaiveDate) -> String {
    format!("PIPBOY_DATA_{}.json", date.format("%Y-%m-%d"))
}

/// Render the state as a human-readable document
pub fn render_holotape(state: &AppState) -> Result<String> {
    serde_json::to_string_pretty(state).context("Failed to serialize holotape")
}

/// Write a holotape named after `date` into `dir`
pub fn export_holotape(state: &AppState, dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    let path = dir.join(holotape_filename(date));
    export_holotape_to(state, &path)?;
    Ok(path)
}

/// Write a holotape to an explicit path
pub fn export_holotape_to(state: &AppState, path: &Path) -> Result<()> {
    let document = render_holotape(state)?;
    atomic_write(path, &document)?;
    tracing::info!(path = %path.display(), quests = state.quests().len(), "holotape exported");
    Ok(())
}

/// Parse and validate a holotape document.
///
/// The shape check mirrors what a holotape must carry: a `quests` array and a
/// numeric `totalXP`. Aggregates in the document are then re-derived from the
/// histories rather than trusted.
pub fn parse_holotape(document: &str) -> Result<AppState, HolotapeError> {
    let value: Value = serde_json::from_str(document)?;

    match value.get("quests") {
        Some(Value::Array(_)) => {}
        _ => return Err(HolotapeError::MissingQuests),
    }
    if !value.get("totalXP").map_or(false, Value::is_number) {
        return Err(HolotapeError::TotalXpNotNumber);
    }

    let document: StateDocument = serde_json::from_value(value)?;
    Ok(AppState::try_from(document)?)
}

/// Read and validate a holotape file
pub fn read_holotape(path: &Path) -> Result<AppState, HolotapeError> {
    let document = fs::read_to_string(path)?;
    let state = parse_holotape(&document)?;
    tracing::info!(
        path = %path.display(),
        quests = state.quests().len(),
        total_xp = state.total_xp(),
        "holotape validated"
    );
    Ok(state)
}
