/**
 * Shared Types Module
 *
 * View and tab enums for the egui app.
 */

/// Current app view/mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Login screen
    Login,
    /// Signup screen
    Signup,
    /// Expenses dashboard (signed in)
    Dashboard,
}

/// Dashboard section shown on narrow windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    Expenses,
    AddNew,
    Charts,
    Summary,
}

impl DashboardTab {
    pub const ALL: [DashboardTab; 4] = [Self::Expenses, Self::AddNew, Self::Charts, Self::Summary];

    pub fn label(self) -> &'static str {
        match self {
            Self::Expenses => "Expenses",
            Self::AddNew => "Add New",
            Self::Charts => "Charts",
            Self::Summary => "Summary",
        }
    }
}
