// ABOUTME: Test helper utilities for mocking Linear API responses and transports
// ABOUTME: Provides canned response bodies, a mockito server, and a scripted Transport

use async_trait::async_trait;
use mockito::{Server, ServerGuard};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::LinearError;
use crate::graphql::{GraphQLResponse, Transport, Variables};
use crate::queries::Operation;

pub async fn mock_linear_server() -> ServerGuard {
    Server::new_async().await
}

/// One call observed by [`ScriptedTransport`].
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub operation: &'static str,
    pub variables: Value,
}

/// Transport that replays queued response bodies in order and records every call.
#[derive(Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Value, LinearError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a full response body (`{"data": ...}` or `{"errors": [...]}`).
    pub fn respond(self, body: Value) -> Self {
        self.responses.lock().unwrap().push_back(Ok(body));
        self
    }

    /// Queue a transport-level failure.
    pub fn fail(self, error: LinearError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn operations(&self) -> Vec<&'static str> {
        self.calls().into_iter().map(|call| call.operation).collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn execute(
        &self,
        operation: &Operation,
        variables: Variables,
    ) -> Result<Value, LinearError> {
        operation.check_variables(&variables)?;
        self.calls.lock().unwrap().push(RecordedCall {
            operation: operation.name,
            variables: Value::Object(variables),
        });

        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted response left for {}", operation.name));
        let response: GraphQLResponse = serde_json::from_value(next?)?;
        response.into_data()
    }
}

pub fn mock_issue_response(identifier: &str) -> Value {
    json!({
        "data": {
            "issue": {
                "id": "issue-uuid",
                "identifier": identifier,
                "title": "Test Issue",
                "description": "Test description",
                "state": { "name": "In Progress", "type": "started" },
                "assignee": { "name": "John Doe", "email": "john@example.com" },
                "priority": 2,
                "createdAt": "2024-01-15T10:30:00Z",
                "updatedAt": "2024-01-16T14:45:00Z",
                "url": format!("https://linear.app/issue/{identifier}")
            }
        }
    })
}

pub fn mock_issue_not_found_response() -> Value {
    json!({
        "data": {
            "issue": null
        }
    })
}

pub fn mock_issues_response() -> Value {
    json!({
        "data": {
            "issues": {
                "nodes": [
                    {
                        "id": "issue-1",
                        "identifier": "FAT-456",
                        "title": "Implement new feature",
                        "state": { "name": "Backlog", "type": "backlog" },
                        "assignee": { "name": "Jane Smith" },
                        "priority": 3,
                        "url": "https://linear.app/issue/FAT-456"
                    },
                    {
                        "id": "issue-2",
                        "identifier": "FAT-789",
                        "title": "Fix bug",
                        "state": { "name": "Backlog", "type": "backlog" },
                        "assignee": null,
                        "priority": 1,
                        "url": "https://linear.app/issue/FAT-789"
                    }
                ]
            }
        }
    })
}

pub fn mock_my_issues_response() -> Value {
    json!({
        "data": {
            "viewer": {
                "assignedIssues": {
                    "nodes": [
                        {
                            "id": "issue-123",
                            "identifier": "FAT-123",
                            "title": "My Issue",
                            "state": { "name": "In Progress", "type": "started" },
                            "priority": 2,
                            "url": "https://linear.app/issue/FAT-123"
                        }
                    ]
                }
            }
        }
    })
}

pub fn mock_teams_response() -> Value {
    json!({
        "data": {
            "teams": {
                "nodes": [
                    { "id": "team-bak-uuid", "key": "BAK", "name": "Backend Team" },
                    { "id": "team-uuid", "key": "FAT", "name": "Frontend Team" }
                ]
            }
        }
    })
}

pub fn mock_projects_response() -> Value {
    json!({
        "data": {
            "projects": {
                "nodes": [
                    {
                        "id": "project-1",
                        "name": "Q4 Launch",
                        "description": "Preparing for Q4 product launch",
                        "state": "started",
                        "progress": 0.65,
                        "startDate": "2025-10-01",
                        "targetDate": "2025-12-31",
                        "url": "https://linear.app/project/q4-launch",
                        "lead": { "name": "Jane Smith", "email": "jane@example.com" }
                    },
                    {
                        "id": "project-2",
                        "name": "Platform Refactor",
                        "description": "Technical debt reduction",
                        "state": "planned",
                        "progress": 0.0,
                        "startDate": "2026-01-01",
                        "targetDate": "2026-03-31",
                        "url": "https://linear.app/project/refactor",
                        "lead": null
                    }
                ]
            }
        }
    })
}

/// Workflow states of one team, in server order.
pub fn mock_states_response(states: &[(&str, &str)]) -> Value {
    let nodes: Vec<Value> = states
        .iter()
        .map(|(id, name)| json!({ "id": id, "name": name, "type": "unstarted" }))
        .collect();
    json!({
        "data": {
            "team": {
                "states": { "nodes": nodes }
            }
        }
    })
}

pub fn mock_todo_done_states() -> Value {
    mock_states_response(&[("state-1", "Todo"), ("state-2", "Done")])
}

pub fn mock_comment_response(success: bool) -> Value {
    if success {
        json!({
            "data": {
                "commentCreate": {
                    "success": true,
                    "comment": { "id": "comment-uuid", "body": "This is a test comment" }
                }
            }
        })
    } else {
        json!({ "data": { "commentCreate": { "success": false } } })
    }
}

pub fn mock_update_response(success: bool) -> Value {
    let issue = if success {
        json!({
            "id": "issue-uuid",
            "identifier": "FAT-123",
            "title": "Server title",
            "state": { "name": "Server state" },
            "description": "Server description"
        })
    } else {
        Value::Null
    };

    json!({
        "data": {
            "issueUpdate": {
                "success": success,
                "issue": issue
            }
        }
    })
}

pub fn mock_error_response() -> Value {
    json!({
        "errors": [
            {
                "message": "Authentication required",
                "extensions": {
                    "code": "UNAUTHENTICATED"
                }
            }
        ]
    })
}
