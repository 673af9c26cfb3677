// ABOUTME: Presentation-side enums for workflow state categories and priorities
// ABOUTME: Decides which colour a state or priority label is rendered in

use crate::constants::state_types;
use linear_core::IssueState;
use owo_colors::OwoColorize;
use std::fmt;

/// Category of a workflow state, derived from its `type` field.
#[derive(Debug, Clone, PartialEq)]
pub enum StateKind {
    Triage,
    Backlog,
    Unstarted,
    Started,
    Completed,
    Canceled,
    Unknown(String),
}

impl From<&str> for StateKind {
    fn from(s: &str) -> Self {
        match s {
            state_types::TRIAGE => StateKind::Triage,
            state_types::BACKLOG => StateKind::Backlog,
            state_types::UNSTARTED => StateKind::Unstarted,
            state_types::STARTED => StateKind::Started,
            state_types::COMPLETED => StateKind::Completed,
            state_types::CANCELED => StateKind::Canceled,
            other => StateKind::Unknown(other.to_string()),
        }
    }
}

impl From<&IssueState> for StateKind {
    fn from(state: &IssueState) -> Self {
        StateKind::from(state.kind.as_deref().unwrap_or_default())
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateKind::Triage => write!(f, "{}", state_types::TRIAGE),
            StateKind::Backlog => write!(f, "{}", state_types::BACKLOG),
            StateKind::Unstarted => write!(f, "{}", state_types::UNSTARTED),
            StateKind::Started => write!(f, "{}", state_types::STARTED),
            StateKind::Completed => write!(f, "{}", state_types::COMPLETED),
            StateKind::Canceled => write!(f, "{}", state_types::CANCELED),
            StateKind::Unknown(s) => write!(f, "{}", s),
        }
    }
}

/// Render a state name, coloured by its category when `use_color` is set.
pub fn paint_state(state: &IssueState, use_color: bool) -> String {
    if !use_color {
        return state.name.clone();
    }

    match StateKind::from(state) {
        StateKind::Triage | StateKind::Backlog | StateKind::Unstarted => {
            state.name.dimmed().to_string()
        }
        StateKind::Started => state.name.yellow().to_string(),
        StateKind::Completed => state.name.green().to_string(),
        StateKind::Canceled => state.name.red().to_string(),
        StateKind::Unknown(_) => state.name.clone(),
    }
}

/// Render a priority label, highlighting urgent and high priorities.
pub fn paint_priority(priority: Option<f64>, use_color: bool) -> String {
    let label = linear_core::priority_label(priority);
    if !use_color {
        return label.to_string();
    }

    match label {
        "Urgent" => label.red().bold().to_string(),
        "High" => label.yellow().to_string(),
        "None" | "Unknown" => label.dimmed().to_string(),
        _ => label.to_string(),
    }
}
