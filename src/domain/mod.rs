pub mod category;
pub mod enums;
pub mod progress;
pub mod quest;
pub mod state;
pub mod week;

pub use category::{Category, CategoryChoice};
pub use enums::{Tab, UiMode};
pub use progress::{category_breakdown, level_progress, quest_xp};
pub use quest::{Quest, QuestDraft, DATE_FORMAT};
pub use state::{Action, AppState, StateDocument};
pub use week::{day_label, week_dates, DayStatus};
