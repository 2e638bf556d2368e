use crate::domain::{day_label, week_dates, AppState};
use crate::persistence::{atomic_write, report_file};
use crate::report::stats::calculate_summary;
use anyhow::Result;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

/// Format minutes as "Xh Ym" or "Xm"
fn format_minutes(total_mins: u64) -> String {
    if total_mins < 60 {
        format!("{}m", total_mins)
    } else {
        let hours = total_mins / 60;
        let mins = total_mins % 60;
        if mins == 0 {
            format!("{}h", hours)
        } else {
            format!("{}h {}m", hours, mins)
        }
    }
}

/// Keep user text from splitting a markdown table cell
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Render the markdown status report for the week containing `date`
pub fn render_report(state: &AppState, date: NaiveDate) -> String {
    let summary = calculate_summary(state, date);
    let week = week_dates(date);
    let mut report = String::new();

    report.push_str(&format!("# Overseer Status Report - {}\n\n", date));

    // Summary Section
    report.push_str("## Summary\n\n");
    report.push_str(&format!("- **Level:** {}\n", summary.level));
    report.push_str(&format!(
        "- **Total XP:** {} ({} into level {})\n",
        summary.total_xp, summary.xp_into_level, summary.level
    ));
    report.push_str(&format!("- **Routines:** {}\n", summary.quests.len()));
    report.push_str(&format!("- **Completed today:** {}\n", summary.completed_today));
    report.push_str(&format!(
        "- **Completions this week:** {}\n\n",
        summary.completions_this_week
    ));

    // Category Section
    report.push_str("## S.P.E.C.I.A.L. Breakdown\n\n");
    report.push_str("| Category | XP |\n|---|---|\n");
    for (label, xp) in &summary.categories {
        report.push_str(&format!("| {} | {} |\n", label, xp));
    }
    report.push('\n');

    // Week Section
    report.push_str("## This Week\n\n");
    if summary.quests.is_empty() {
        report.push_str("_No routines initialized._\n");
        return report;
    }

    report.push_str("| Routine |");
    for day in &week {
        report.push_str(&format!(" {} |", day_label(*day)));
    }
    report.push_str(" XP |\n|---|");
    report.push_str(&"---|".repeat(week.len() + 1));
    report.push('\n');

    for quest in &summary.quests {
        report.push_str(&format!(
            "| {} ({}, {}) |",
            escape_cell(&quest.name),
            escape_cell(&quest.category),
            format_minutes(u64::from(quest.duration))
        ));
        for done in quest.week {
            report.push_str(if done { " X |" } else { "   |" });
        }
        report.push_str(&format!(" {} |\n", quest.xp));
    }

    report
}

/// Write the report to `output`, or to the default report path in `dir`
pub fn generate_report(
    state: &AppState,
    date: NaiveDate,
    dir: &Path,
    output: Option<PathBuf>,
) -> Result<PathBuf> {
    let path = output.unwrap_or_else(|| report_file(dir, date));
    atomic_write(&path, &render_report(state, date))?;
    tracing::info!(path = %path.display(), "report written");
    Ok(path)
}
