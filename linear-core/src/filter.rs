// ABOUTME: Translates optional list criteria into the nested IssueFilter input
// ABOUTME: Absent criteria are omitted entirely rather than sent as null

use serde::Serialize;
use serde_json::Value;

/// User-supplied criteria for listing issues. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueCriteria {
    /// Free text matched against the title
    pub query: Option<String>,
    /// Team key, matched exactly
    pub team: Option<String>,
    /// Workflow state name, matched case-insensitively
    pub state: Option<String>,
    /// Project internal id
    pub project: Option<String>,
}

/// A comparison object in Linear's filter language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Comparison {
    Contains(String),
    Eq(String),
    EqIgnoreCase(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamFilter {
    pub key: Comparison,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateFilter {
    pub name: Comparison,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectFilter {
    pub id: Comparison,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Comparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<StateFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectFilter>,
}

impl IssueFilter {
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Default::default()))
    }
}

/// Build the list filter for `criteria`.
///
/// State names use `eqIgnoreCase` here, while state resolution for updates
/// compares names itself; the two paths stay separate.
pub fn build_filter(criteria: &IssueCriteria) -> IssueFilter {
    IssueFilter {
        title: criteria.query.clone().map(Comparison::Contains),
        team: criteria.team.clone().map(|key| TeamFilter {
            key: Comparison::Eq(key),
        }),
        state: criteria.state.clone().map(|name| StateFilter {
            name: Comparison::EqIgnoreCase(name),
        }),
        project: criteria.project.clone().map(|id| ProjectFilter {
            id: Comparison::Eq(id),
        }),
    }
}
