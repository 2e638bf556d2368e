//! Non-interactive subcommands. Each one loads the durable slot once, applies
//! at most one mutation through `AppState::apply`, and saves.

use crate::config::Config;
use crate::domain::{
    day_label, quest_xp, week_dates, Action, AppState, CategoryChoice, DayStatus, Quest,
    QuestDraft,
};
use crate::persistence::{export_holotape, export_holotape_to, read_holotape, Storage};
use crate::report::{calculate_summary, generate_report};
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Loaded state plus where it lives
pub struct Session {
    pub dir: PathBuf,
    pub config: Config,
    pub storage: Storage,
    pub state: AppState,
    pub today: NaiveDate,
}

impl Session {
    pub fn open(dir: &Path, config: Config, today: NaiveDate) -> Result<Self> {
        let mut storage = Storage::open(dir);
        let state = storage.load()?;
        Ok(Self {
            dir: dir.to_path_buf(),
            config,
            storage,
            state,
            today,
        })
    }

    fn commit(&mut self, action: Action) -> Result<()> {
        self.state.apply(action);
        self.storage.save(&self.state)
    }

    fn resolve(&self, needle: &str) -> Result<Quest> {
        self.state
            .resolve_id(needle)
            .cloned()
            .ok_or_else(|| anyhow!("No unique quest matches id {:?}", needle))
    }
}

/// Category argument: a standard label, or any other text as a custom category
fn draft_category(category: Option<&str>) -> (CategoryChoice, String) {
    match category {
        None => (CategoryChoice::default(), String::new()),
        Some(label) => match CategoryChoice::from_label(label) {
            Some(choice) => (choice, String::new()),
            None => (CategoryChoice::Other, label.to_string()),
        },
    }
}

pub fn add(
    session: &mut Session,
    name: &str,
    duration: &str,
    category: Option<&str>,
    out: &mut impl Write,
) -> Result<()> {
    let (choice, custom) = draft_category(category);
    let draft = QuestDraft {
        name: name.to_string(),
        duration: duration.to_string(),
        category: choice,
        custom_category: custom,
    };
    let quest = draft.build()?;
    let line = format!(
        "Added {} [{}] {}m  id {}",
        quest.name,
        quest.category,
        quest.duration,
        quest.id()
    );
    session.commit(Action::AddQuest(quest))?;
    writeln!(out, "{}", line)?;
    Ok(())
}

pub fn delete(session: &mut Session, needle: &str, out: &mut impl Write) -> Result<()> {
    let quest = session.resolve(needle)?;
    session.commit(Action::DeleteQuest(quest.id().to_string()))?;
    writeln!(out, "Deleted {} (-{} XP)", quest.name, quest_xp(&quest))?;
    Ok(())
}

/// Toggle today's completion. Other dates are locked.
pub fn done(
    session: &mut Session,
    needle: &str,
    date: Option<NaiveDate>,
    out: &mut impl Write,
) -> Result<()> {
    let date = date.unwrap_or(session.today);
    if !DayStatus::of(date, session.today).is_editable() {
        anyhow::bail!("TEMPORAL LOCK: only today ({}) can be marked", session.today);
    }

    let quest = session.resolve(needle)?;
    session.commit(Action::ToggleCompletion {
        id: quest.id().to_string(),
        date,
    })?;

    let verb = if quest.is_completed(date) { "Unmarked" } else { "Completed" };
    writeln!(
        out,
        "{} {} for {}. TOTAL XP {}  LVL {}",
        verb,
        quest.name,
        date,
        session.state.total_xp(),
        session.state.level()
    )?;
    Ok(())
}

pub fn list(session: &Session, out: &mut impl Write) -> Result<()> {
    if session.state.quests().is_empty() {
        writeln!(out, "NO DATA FOUND...")?;
        return Ok(());
    }
    for quest in session.state.quests() {
        writeln!(
            out,
            "{:.8}  {:<24} [{}] {}m  x{}  {} XP",
            quest.id(),
            quest.name,
            quest.category,
            quest.duration,
            quest.completions(),
            quest_xp(quest)
        )?;
    }
    Ok(())
}

pub fn week(session: &Session, out: &mut impl Write) -> Result<()> {
    let dates = week_dates(session.today);
    write!(out, "{:<24}", "ROUTINE")?;
    for date in &dates {
        let marker = if *date == session.today { "*" } else { " " };
        write!(out, " {:>7}{}", day_label(*date), marker)?;
    }
    writeln!(out)?;

    for quest in session.state.quests() {
        write!(out, "{:<24}", quest.name)?;
        for date in &dates {
            let mark = if quest.is_completed(*date) { "[X]" } else { "[ ]" };
            write!(out, " {:>7} ", mark)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn stats(session: &Session, out: &mut impl Write) -> Result<()> {
    let summary = calculate_summary(&session.state, session.today);
    writeln!(out, "LEVEL     {}", summary.level)?;
    writeln!(out, "TOTAL XP  {} ({}/100 to next level)", summary.total_xp, summary.xp_into_level)?;
    writeln!(out, "TODAY     {} completed", summary.completed_today)?;
    writeln!(out, "WEEK      {} completions", summary.completions_this_week)?;
    writeln!(out)?;
    for (label, xp) in &summary.categories {
        writeln!(out, "{:<13} {}", label, xp)?;
    }
    Ok(())
}

pub fn export(session: &Session, output: Option<PathBuf>, out: &mut impl Write) -> Result<()> {
    let path = match output {
        Some(path) => {
            export_holotape_to(&session.state, &path)?;
            path
        }
        None => export_holotape(&session.state, &session.config.export_dir(), session.today)?,
    };
    writeln!(out, "Holotape written: {}", path.display())?;
    Ok(())
}

/// Replace the whole state with a holotape's contents
pub fn import(session: &mut Session, path: &Path, out: &mut impl Write) -> Result<()> {
    let imported = read_holotape(path).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "holotape rejected");
        anyhow!("ERROR: HOLOTAPE CORRUPTED. ({})", e)
    })?;
    session.commit(Action::LoadExternal(imported))?;

    // Restart from the slot so nothing derived is carried over
    session.state = session.storage.load()?;
    writeln!(
        out,
        "HOLOTAPE LOADED SUCCESSFULLY. {} routines, {} XP, LVL {}",
        session.state.quests().len(),
        session.state.total_xp(),
        session.state.level()
    )?;
    Ok(())
}

/// Wipe all XP and history after an explicit confirmation
pub fn reset(
    session: &mut Session,
    assume_yes: bool,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    if !assume_yes {
        write!(out, "WARNING: WIPE ALL XP AND HISTORY? [y/N] ")?;
        out.flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer).context("Failed to read confirmation")?;
        if !matches!(answer.trim(), "y" | "Y" | "yes" | "YES") {
            writeln!(out, "Reset aborted.")?;
            return Ok(());
        }
    }

    session.commit(Action::ResetAll)?;
    session.state = session.storage.load()?;
    tracing::warn!("all XP and history wiped");
    writeln!(out, "Overseer status reset.")?;
    Ok(())
}

pub fn report(
    session: &Session,
    date: Option<NaiveDate>,
    output: Option<PathBuf>,
    out: &mut impl Write,
) -> Result<()> {
    let date = date.unwrap_or(session.today);
    let path = generate_report(&session.state, date, &session.dir, output)?;
    writeln!(out, "Report generated: {}", path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
    }

    fn session() -> (Session, TempDir) {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config {
            export_dir: Some(temp_dir.path().to_path_buf()),
            ..Config::default()
        };
        (Session::open(temp_dir.path(), config, today()).unwrap(), temp_dir)
    }

    fn reopen(dir: &TempDir) -> Session {
        Session::open(dir.path(), Config::default(), today()).unwrap()
    }

    #[test]
    fn test_add_persists() {
        let (mut s, dir) = session();
        let mut out = Vec::new();
        add(&mut s, "Pushups", "10", Some("STRENGTH"), &mut out).unwrap();
        add(&mut s, "Chess", "30", Some("Games"), &mut out).unwrap();

        let reloaded = reopen(&dir);
        assert_eq!(reloaded.state.quests().len(), 2);
        assert_eq!(reloaded.state.quests()[1].category, Category::Custom("Games".to_string()));
    }

    #[test]
    fn test_add_padded_standard_label() {
        let (mut s, dir) = session();
        let mut out = Vec::new();
        add(&mut s, "Deadlift", "40", Some(" STRENGTH"), &mut out).unwrap();
        assert_eq!(s.state.quests()[0].category, Category::Strength);
        assert_eq!(reopen(&dir).state, s.state);
    }

    #[test]
    fn test_add_rejects_invalid_draft() {
        let (mut s, _dir) = session();
        let mut out = Vec::new();
        assert!(add(&mut s, "", "10", None, &mut out).is_err());
        assert!(add(&mut s, "Run", "0", None, &mut out).is_err());
        assert!(s.state.quests().is_empty());
    }

    #[test]
    fn test_done_toggles_today_and_locks_other_days() {
        let (mut s, dir) = session();
        let mut out = Vec::new();
        add(&mut s, "Study", "150", None, &mut out).unwrap();
        let id = s.state.quests()[0].id().to_string();

        done(&mut s, &id[..6], None, &mut out).unwrap();
        assert_eq!(reopen(&dir).state.level(), 2);

        let yesterday = today().pred_opt().unwrap();
        assert!(done(&mut s, &id, Some(yesterday), &mut out).is_err());

        done(&mut s, &id, None, &mut out).unwrap();
        assert_eq!(reopen(&dir).state.total_xp(), 0);
    }

    #[test]
    fn test_delete_unknown_is_error() {
        let (mut s, _dir) = session();
        let mut out = Vec::new();
        assert!(delete(&mut s, "nope", &mut out).is_err());
    }

    #[test]
    fn test_reset_needs_confirmation() {
        let (mut s, dir) = session();
        let mut out = Vec::new();
        add(&mut s, "Run", "20", None, &mut out).unwrap();
        let id = s.state.quests()[0].id().to_string();
        done(&mut s, &id, None, &mut out).unwrap();

        reset(&mut s, false, &mut "n\n".as_bytes(), &mut out).unwrap();
        assert_eq!(reopen(&dir).state.total_xp(), 20);

        reset(&mut s, false, &mut "y\n".as_bytes(), &mut out).unwrap();
        let reloaded = reopen(&dir);
        assert_eq!(reloaded.state.total_xp(), 0);
        assert_eq!(reloaded.state.quests().len(), 1);
    }

    #[test]
    fn test_export_import_round_trip() {
        let (mut s, dir) = session();
        let mut out = Vec::new();
        add(&mut s, "Run", "20", Some("HEALTH"), &mut out).unwrap();
        let id = s.state.quests()[0].id().to_string();
        done(&mut s, &id, None, &mut out).unwrap();
        export(&s, None, &mut out).unwrap();
        let snapshot = s.state.clone();

        delete(&mut s, &id, &mut out).unwrap();
        assert!(s.state.quests().is_empty());

        let tape = dir.path().join("PIPBOY_DATA_2024-01-03.json");
        import(&mut s, &tape, &mut out).unwrap();
        assert_eq!(s.state, snapshot);
        assert_eq!(reopen(&dir).state, snapshot);
    }

    #[test]
    fn test_import_string_total_xp_keeps_state() {
        let (mut s, dir) = session();
        let mut out = Vec::new();
        add(&mut s, "Run", "20", None, &mut out).unwrap();
        let before = s.state.clone();

        let tape = dir.path().join("bad.json");
        std::fs::write(&tape, r#"{"quests":[],"totalXP":"20","level":1}"#).unwrap();
        assert!(import(&mut s, &tape, &mut out).is_err());
        assert_eq!(s.state, before);
        assert_eq!(reopen(&dir).state, before);
    }

    #[test]
    fn test_week_and_stats_output() {
        let (mut s, _dir) = session();
        let mut out = Vec::new();
        add(&mut s, "Pushups", "10", Some("STRENGTH"), &mut out).unwrap();
        let id = s.state.quests()[0].id().to_string();
        done(&mut s, &id, None, &mut out).unwrap();

        let mut week_out = Vec::new();
        week(&s, &mut week_out).unwrap();
        let text = String::from_utf8(week_out).unwrap();
        assert!(text.contains("WED 3*"));
        assert!(text.contains("[X]"));

        let mut stats_out = Vec::new();
        stats(&s, &mut stats_out).unwrap();
        let text = String::from_utf8(stats_out).unwrap();
        assert!(text.contains("TOTAL XP  10"));
        assert!(text.contains("STRENGTH      10"));
    }
}
