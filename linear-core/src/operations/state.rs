// ABOUTME: Resolves a workflow state name to its id by way of the issue's team
// ABOUTME: Team key comes from the issue id prefix; state names match case-insensitively

use serde_json::Value;

use crate::error::OperationError;
use crate::graphql::{Transport, variables};
use crate::queries;
use crate::responses::{TeamStatesData, decode, nodes};
use crate::types::WorkflowState;

use super::read::list_teams;

/// Team key encoded in a human issue id: everything before the first `-`.
///
/// The whole string is returned when there is no `-`. The key is not
/// validated; an unknown prefix surfaces later as `TeamNotFound`.
pub fn team_key(human_id: &str) -> &str {
    human_id
        .split_once('-')
        .map_or(human_id, |(prefix, _)| prefix)
}

async fn team_states<T>(transport: &T, team_id: &str) -> Result<Vec<WorkflowState>, OperationError>
where
    T: Transport + ?Sized,
{
    let data = transport
        .execute(
            &queries::WORKFLOW_STATES,
            variables([("teamId", Value::from(team_id))]),
        )
        .await?;
    let data: TeamStatesData = decode(data)?;

    Ok(nodes(data.team.and_then(|team| team.states)))
}

/// Find the workflow state named `state_name` in the team owning `human_id`.
///
/// Fetches the team list, then that team's states. The first state whose name
/// matches ignoring case wins. On a miss the error lists every state name of
/// the team in server order.
pub async fn resolve_state<T>(
    transport: &T,
    human_id: &str,
    state_name: &str,
) -> Result<WorkflowState, OperationError>
where
    T: Transport + ?Sized,
{
    let key = team_key(human_id);
    let team = list_teams(transport)
        .await?
        .into_iter()
        .find(|team| team.key == key)
        .ok_or_else(|| OperationError::TeamNotFound {
            issue_id: human_id.to_string(),
        })?;

    let states = team_states(transport, &team.id).await?;
    let wanted = state_name.to_lowercase();

    if let Some(state) = states
        .iter()
        .find(|state| state.name.to_lowercase() == wanted)
    {
        return Ok(state.clone());
    }

    Err(OperationError::StateNotFound {
        state: state_name.to_string(),
        available: states.into_iter().map(|state| state.name).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use serde_json::json;

    #[test]
    fn test_team_key_derivation() {
        assert_eq!(team_key("FAT-85"), "FAT");
        assert_eq!(team_key("ENG-123-extra"), "ENG");
        assert_eq!(team_key("NOHYPHEN"), "NOHYPHEN");
        assert_eq!(team_key("-12"), "");
        assert_eq!(team_key(""), "");
    }

    #[tokio::test]
    async fn test_resolve_state_case_insensitive() {
        let transport = ScriptedTransport::new()
            .respond(mock_teams_response())
            .respond(mock_todo_done_states());

        let state = resolve_state(&transport, "FAT-85", "dOnE").await.unwrap();

        assert_eq!(state.id, "state-2");
        assert_eq!(state.name, "Done");
        let calls = transport.calls();
        assert_eq!(transport.operations(), vec!["Teams", "WorkflowStates"]);
        assert_eq!(calls[1].variables, json!({ "teamId": "team-uuid" }));
    }

    #[tokio::test]
    async fn test_resolve_state_first_match_wins() {
        let transport = ScriptedTransport::new()
            .respond(mock_teams_response())
            .respond(mock_states_response(&[
                ("state-a", "Review"),
                ("state-b", "REVIEW"),
            ]));

        let state = resolve_state(&transport, "FAT-85", "review").await.unwrap();

        assert_eq!(state.id, "state-a");
    }

    #[tokio::test]
    async fn test_resolve_state_lists_available_on_miss() {
        let transport = ScriptedTransport::new()
            .respond(mock_teams_response())
            .respond(mock_todo_done_states());

        match resolve_state(&transport, "FAT-85", "QA").await {
            Err(OperationError::StateNotFound { state, available }) => {
                assert_eq!(state, "QA");
                assert_eq!(available, vec!["Todo", "Done"]);
            }
            other => panic!("Expected StateNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resolve_state_unknown_team() {
        let transport = ScriptedTransport::new().respond(mock_teams_response());

        match resolve_state(&transport, "XYZ-1", "Done").await {
            Err(OperationError::TeamNotFound { issue_id }) => assert_eq!(issue_id, "XYZ-1"),
            other => panic!("Expected TeamNotFound, got {other:?}"),
        }
        assert_eq!(transport.operations(), vec!["Teams"]);
    }

    #[tokio::test]
    async fn test_team_key_match_is_exact() {
        let transport = ScriptedTransport::new().respond(mock_teams_response());

        let err = resolve_state(&transport, "fat-85", "Done").await.unwrap_err();
        assert!(matches!(err, OperationError::TeamNotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_state_refetches_every_call() {
        let transport = ScriptedTransport::new()
            .respond(mock_teams_response())
            .respond(mock_todo_done_states())
            .respond(mock_teams_response())
            .respond(mock_todo_done_states());

        resolve_state(&transport, "FAT-85", "Todo").await.unwrap();
        resolve_state(&transport, "FAT-85", "Done").await.unwrap();

        assert_eq!(transport.calls().len(), 4);
    }
}
