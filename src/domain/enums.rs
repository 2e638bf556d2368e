/// Top-level tabs of the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Tracker,
    Admin,
    Status,
    System,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Tracker, Tab::Admin, Tab::Status, Tab::System]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Tracker => "TRACKER",
            Tab::Admin => "ADMIN",
            Tab::Status => "STATUS",
            Tab::System => "SYSTEM",
        }
    }

    pub fn index(&self) -> usize {
        Self::all().iter().position(|t| t == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        let all = Self::all();
        all[(self.index() + 1) % all.len()]
    }

    pub fn prev(self) -> Self {
        let all = Self::all();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingQuest,
    ConfirmReset,
    ImportPath,
    /// A notice is shown until any key is pressed
    Notice,
}
