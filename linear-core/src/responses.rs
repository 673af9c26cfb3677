// ABOUTME: Wire shapes of the `data` documents returned by each catalog operation
// ABOUTME: Missing connections decode as empty lists, missing success flags as false

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::LinearError;
use crate::types::{Comment, Issue, IssueSummary, Project, Team, WorkflowState};

pub(crate) fn decode<D: DeserializeOwned>(data: Value) -> Result<D, LinearError> {
    Ok(serde_json::from_value(data)?)
}

#[derive(Deserialize)]
pub(crate) struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

#[derive(Deserialize)]
pub(crate) struct IssueData {
    #[serde(default)]
    pub issue: Option<Issue>,
}

#[derive(Deserialize)]
pub(crate) struct IssuesData {
    #[serde(default)]
    pub issues: Option<Connection<IssueSummary>>,
}

#[derive(Deserialize)]
pub(crate) struct ViewerData {
    #[serde(default)]
    pub viewer: Option<Viewer>,
}

#[derive(Deserialize)]
pub(crate) struct Viewer {
    #[serde(rename = "assignedIssues", default)]
    pub assigned_issues: Option<Connection<IssueSummary>>,
}

#[derive(Deserialize)]
pub(crate) struct TeamsData {
    #[serde(default)]
    pub teams: Option<Connection<Team>>,
}

#[derive(Deserialize)]
pub(crate) struct ProjectsData {
    #[serde(default)]
    pub projects: Option<Connection<Project>>,
}

#[derive(Deserialize)]
pub(crate) struct TeamStatesData {
    #[serde(default)]
    pub team: Option<TeamStates>,
}

#[derive(Deserialize)]
pub(crate) struct TeamStates {
    #[serde(default)]
    pub states: Option<Connection<WorkflowState>>,
}

#[derive(Deserialize)]
pub(crate) struct CommentCreateData {
    #[serde(rename = "commentCreate", default)]
    pub comment_create: Option<CommentPayload>,
}

#[derive(Deserialize)]
pub(crate) struct CommentPayload {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub comment: Option<Comment>,
}

#[derive(Deserialize)]
pub(crate) struct IssueUpdateData {
    #[serde(rename = "issueUpdate", default)]
    pub issue_update: Option<IssueUpdatePayload>,
}

#[derive(Deserialize)]
pub(crate) struct IssueUpdatePayload {
    #[serde(default)]
    pub success: bool,
}

pub(crate) fn nodes<T>(connection: Option<Connection<T>>) -> Vec<T> {
    connection.unwrap_or_default().nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_connection_is_empty() {
        let data: IssuesData = decode(json!({})).unwrap();
        assert!(nodes(data.issues).is_empty());

        let data: TeamStatesData = decode(json!({ "team": { "states": null } })).unwrap();
        assert!(nodes(data.team.and_then(|t| t.states)).is_empty());
    }

    #[test]
    fn test_missing_success_flag_is_false() {
        let data: CommentCreateData = decode(json!({ "commentCreate": {} })).unwrap();
        assert!(!data.comment_create.unwrap().success);
    }

    #[test]
    fn test_malformed_document_is_invalid_response() {
        let result: Result<TeamsData, _> = decode(json!({ "teams": { "nodes": [{ "id": 1 }] } }));
        assert!(matches!(result, Err(LinearError::InvalidResponse(_))));
    }
}
