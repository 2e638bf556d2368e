use super::category::OTHER_LABEL;
use super::quest::Quest;

/// XP needed to advance one level
pub const XP_PER_LEVEL: u64 = 100;

/// Bucket order for the category breakdown
pub const CATEGORY_BUCKETS: [&str; 5] =
    ["STRENGTH", "INTELLIGENCE", "WEALTH", "HEALTH", OTHER_LABEL];

/// XP earned by a single quest: one XP per completed minute
pub fn quest_xp(quest: &Quest) -> u64 {
    quest.completions() * u64::from(quest.duration)
}

/// Sum of every quest's XP
pub fn total_xp(quests: &[Quest]) -> u64 {
    quests.iter().map(quest_xp).sum()
}

/// Level for a given XP total: `floor(xp / 100) + 1`
pub fn level_for(total_xp: u64) -> u64 {
    total_xp / XP_PER_LEVEL + 1
}

/// XP earned inside the current level and the ratio towards the next (0.0 to 1.0)
pub fn level_progress(total_xp: u64) -> (u64, f64) {
    let into_level = total_xp % XP_PER_LEVEL;
    (into_level, into_level as f64 / XP_PER_LEVEL as f64)
}

/// XP summed per category bucket, in fixed bucket order.
/// Every bucket is present even when it holds zero XP.
pub fn category_breakdown(quests: &[Quest]) -> Vec<(&'static str, u64)> {
    let mut buckets: Vec<(&'static str, u64)> =
        CATEGORY_BUCKETS.iter().map(|label| (*label, 0)).collect();

    for quest in quests {
        let bucket = quest.category.bucket();
        if let Some(entry) = buckets.iter_mut().find(|(label, _)| *label == bucket) {
            entry.1 += quest_xp(quest);
        }
    }

    buckets
}
