// ABOUTME: Request, mutation parameter and change summary types for issue updates
// ABOUTME: Only fields the caller asked for ever reach the mutation variables

use serde::Serialize;
use std::fmt;

use crate::graphql::Variables;
use crate::types::IssueRef;

/// A requested change to one issue, addressed by its human id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateRequest {
    pub issue_id: String,
    pub state: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UpdateRequest {
    pub fn new(issue_id: impl Into<String>) -> Self {
        Self {
            issue_id: issue_id.into(),
            ..Default::default()
        }
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn has_changes(&self) -> bool {
        self.state.is_some() || self.title.is_some() || self.description.is_some()
    }
}

/// Variables of the issue update mutation, accumulated field by field.
///
/// A present field is sent even when it is an empty string; an absent one
/// is left out of the variables so the server keeps its current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationParams {
    issue_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    state_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

impl MutationParams {
    pub fn new(internal_issue_id: impl Into<String>) -> Self {
        Self {
            issue_id: internal_issue_id.into(),
            state_id: None,
            title: None,
            description: None,
        }
    }

    pub fn state_id(mut self, state_id: impl Into<String>) -> Self {
        self.state_id = Some(state_id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn to_variables(&self) -> Variables {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => Variables::new(),
        }
    }
}

/// Which fields an update changed, reported in a fixed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeSummary {
    pub issue: IssueRef,
    /// Canonical name of the new state, when the state changed
    pub state: Option<String>,
    pub title: bool,
    pub description: bool,
}

impl ChangeSummary {
    pub fn changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(state) = &self.state {
            changes.push(format!("state to '{state}'"));
        }
        if self.title {
            changes.push("title".to_string());
        }
        if self.description {
            changes.push("description".to_string());
        }
        changes
    }
}

impl fmt::Display for ChangeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.changes().join(", "))
    }
}
