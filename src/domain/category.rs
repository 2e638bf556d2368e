use serde::{Deserialize, Serialize};
use std::fmt;

/// Label used when the catch-all category is chosen without custom text
pub const MISC_LABEL: &str = "MISC";

/// Label of the catch-all category
pub const OTHER_LABEL: &str = "OTHER";

/// Category a quest's XP is reported under
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Strength,
    Intelligence,
    Wealth,
    Health,
    /// Free-form label typed by the user under OTHER
    Custom(String),
}

/// Category choice as offered by the new-routine form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryChoice {
    Strength,
    Intelligence,
    Wealth,
    Health,
    Other,
}

impl Category {
    /// Parse a stored label. Anything that is not a standard label is custom.
    pub fn from_label(label: &str) -> Self {
        match label {
            "STRENGTH" => Self::Strength,
            "INTELLIGENCE" => Self::Intelligence,
            "WEALTH" => Self::Wealth,
            "HEALTH" => Self::Health,
            other => Self::Custom(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Strength => "STRENGTH",
            Self::Intelligence => "INTELLIGENCE",
            Self::Wealth => "WEALTH",
            Self::Health => "HEALTH",
            Self::Custom(label) => label,
        }
    }

    /// Bucket used by the category breakdown; custom labels collapse into OTHER
    pub fn bucket(&self) -> &'static str {
        match self {
            Self::Strength => "STRENGTH",
            Self::Intelligence => "INTELLIGENCE",
            Self::Wealth => "WEALTH",
            Self::Health => "HEALTH",
            Self::Custom(_) => OTHER_LABEL,
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl CategoryChoice {
    pub fn all() -> &'static [CategoryChoice] {
        &[
            CategoryChoice::Strength,
            CategoryChoice::Intelligence,
            CategoryChoice::Wealth,
            CategoryChoice::Health,
            CategoryChoice::Other,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Strength => "STRENGTH",
            Self::Intelligence => "INTELLIGENCE",
            Self::Wealth => "WEALTH",
            Self::Health => "HEALTH",
            Self::Other => OTHER_LABEL,
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|choice| choice.label().eq_ignore_ascii_case(label))
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn prev(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|c| *c == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }

    /// Resolve the final category. OTHER uses the custom text, or MISC when blank.
    /// Custom text spelling a standard label resolves to that category.
    pub fn resolve(self, custom: &str) -> Category {
        match self {
            Self::Strength => Category::Strength,
            Self::Intelligence => Category::Intelligence,
            Self::Wealth => Category::Wealth,
            Self::Health => Category::Health,
            Self::Other => {
                let custom = custom.trim();
                if custom.is_empty() {
                    Category::Custom(MISC_LABEL.to_string())
                } else {
                    Category::from_label(custom)
                }
            }
        }
    }
}

impl Default for CategoryChoice {
    fn default() -> Self {
        Self::Strength
    }
}
