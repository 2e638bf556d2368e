use crate::domain::{category_breakdown, level_progress, quest_xp, week_dates, AppState, Quest};
use chrono::NaiveDate;

/// Per-quest line of the status summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestStats {
    pub name: String,
    pub category: String,
    pub duration: u32,
    pub completions: u64,
    pub xp: u64,
    /// Completion marks Monday..Sunday of the current week
    pub week: [bool; 7],
}

/// Everything the status view and report show
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSummary {
    pub level: u64,
    pub total_xp: u64,
    pub xp_into_level: u64,
    pub level_ratio: f64,
    pub completed_today: usize,
    pub completions_this_week: usize,
    pub categories: Vec<(&'static str, u64)>,
    pub quests: Vec<QuestStats>,
}

fn quest_stats(quest: &Quest, week: &[NaiveDate; 7]) -> QuestStats {
    let mut marks = [false; 7];
    for (mark, date) in marks.iter_mut().zip(week.iter()) {
        *mark = quest.is_completed(*date);
    }

    QuestStats {
        name: quest.name.clone(),
        category: quest.category.label().to_string(),
        duration: quest.duration,
        completions: quest.completions(),
        xp: quest_xp(quest),
        week: marks,
    }
}

/// Summarize the state as seen on `today`
pub fn calculate_summary(state: &AppState, today: NaiveDate) -> StatusSummary {
    let week = week_dates(today);
    let quests: Vec<QuestStats> = state.quests().iter().map(|q| quest_stats(q, &week)).collect();

    let completed_today = state.quests().iter().filter(|q| q.is_completed(today)).count();
    let completions_this_week = quests
        .iter()
        .map(|q| q.week.iter().filter(|done| **done).count())
        .sum();

    let (xp_into_level, level_ratio) = level_progress(state.total_xp());

    StatusSummary {
        level: state.level(),
        total_xp: state.total_xp(),
        xp_into_level,
        level_ratio,
        completed_today,
        completions_this_week,
        categories: category_breakdown(state.quests()),
        quests,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_summary_counts_week_and_today() {
        let state = AppState::from_quests(vec![
            // 2023-12-31 is the Sunday before the week of 2024-01-01
            Quest::new("Lift".to_string(), 60, Category::Strength).with_history(&[
                NaiveDate::from_ymd_opt(2023, 12, 31).unwrap(),
                date(1),
                date(3),
            ]),
            Quest::new("Read".to_string(), 25, Category::Custom("Books".to_string()))
                .with_history(&[date(2)]),
        ])
        .unwrap();

        let summary = calculate_summary(&state, date(3));
        assert_eq!(summary.total_xp, 205);
        assert_eq!(summary.level, 3);
        assert_eq!(summary.xp_into_level, 5);
        assert_eq!(summary.completed_today, 1);
        assert_eq!(summary.completions_this_week, 3);
        assert_eq!(summary.quests[0].week, [true, false, true, false, false, false, false]);
        assert_eq!(summary.quests[1].category, "Books");
        assert_eq!(summary.categories[4], ("OTHER", 25));
    }

    #[test]
    fn test_empty_summary() {
        let summary = calculate_summary(&AppState::default(), date(3));
        assert_eq!(summary.level, 1);
        assert_eq!(summary.total_xp, 0);
        assert!(summary.quests.is_empty());
        assert_eq!(summary.categories.len(), 5);
    }
}
