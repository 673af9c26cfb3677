// ABOUTME: Centralized constants for the Linear CLI application
// ABOUTME: Contains table widths, placeholder text, and workflow state type names

/// UI and formatting constants
pub mod ui {
    /// Width of the rule under an issue heading
    pub const BORDER_LINE_LENGTH: usize = 60;

    /// Titles longer than this are truncated in issue tables
    pub const MAX_TITLE_WIDTH: usize = 50;

    pub const UNASSIGNED: &str = "Unassigned";
    pub const NO_DESCRIPTION: &str = "(no description)";
}

/// Workflow state categories as reported in a state's `type` field
pub mod state_types {
    pub const TRIAGE: &str = "triage";
    pub const BACKLOG: &str = "backlog";
    pub const UNSTARTED: &str = "unstarted";
    pub const STARTED: &str = "started";
    pub const COMPLETED: &str = "completed";
    pub const CANCELED: &str = "canceled";
}
