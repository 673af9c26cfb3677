// ABOUTME: Single-call read operations: issue lookup and the list queries
// ABOUTME: The issue lookup doubles as the first step of every mutation path

use serde_json::Value;

use crate::error::OperationError;
use crate::filter::{IssueCriteria, build_filter};
use crate::graphql::{Transport, Variables, variables};
use crate::queries;
use crate::responses::{
    IssueData, IssuesData, ProjectsData, TeamsData, ViewerData, decode, nodes,
};
use crate::types::{Issue, IssueSummary, Project, Team};

/// Look up one issue by its human id (e.g. `FAT-85`).
pub async fn fetch_issue<T>(transport: &T, human_id: &str) -> Result<Issue, OperationError>
where
    T: Transport + ?Sized,
{
    let data = transport
        .execute(&queries::ISSUE, variables([("id", Value::from(human_id))]))
        .await?;
    let data: IssueData = decode(data)?;

    data.issue
        .ok_or_else(|| OperationError::IssueNotFound(human_id.to_string()))
}

pub async fn list_issues<T>(
    transport: &T,
    criteria: &IssueCriteria,
) -> Result<Vec<IssueSummary>, OperationError>
where
    T: Transport + ?Sized,
{
    let filter = build_filter(criteria);
    let data = transport
        .execute(&queries::LIST_ISSUES, variables([("filter", filter.to_value())]))
        .await?;
    let data: IssuesData = decode(data)?;

    Ok(nodes(data.issues))
}

/// Issues assigned to the authenticated user.
pub async fn my_issues<T>(transport: &T) -> Result<Vec<IssueSummary>, OperationError>
where
    T: Transport + ?Sized,
{
    let data = transport
        .execute(&queries::MY_ISSUES, Variables::new())
        .await?;
    let data: ViewerData = decode(data)?;

    Ok(nodes(data.viewer.and_then(|viewer| viewer.assigned_issues)))
}

pub async fn list_teams<T>(transport: &T) -> Result<Vec<Team>, OperationError>
where
    T: Transport + ?Sized,
{
    let data = transport.execute(&queries::TEAMS, Variables::new()).await?;
    let data: TeamsData = decode(data)?;

    Ok(nodes(data.teams))
}

pub async fn list_projects<T>(transport: &T) -> Result<Vec<Project>, OperationError>
where
    T: Transport + ?Sized,
{
    let data = transport
        .execute(&queries::PROJECTS, Variables::new())
        .await?;
    let data: ProjectsData = decode(data)?;

    Ok(nodes(data.projects))
}
