// ABOUTME: Composite issue update: state, title and description in one mutation
// ABOUTME: Every lookup must succeed before the single mutation is sent

use crate::error::{MutationKind, OperationError};
use crate::graphql::Transport;
use crate::queries;
use crate::responses::{IssueUpdateData, decode};
use crate::update::{ChangeSummary, MutationParams, UpdateRequest};

use super::read::fetch_issue;
use super::state::resolve_state;

/// Apply `request` to its issue.
///
/// Fails with `NoChangesSpecified` before any network call when the request
/// names no field. Issue and state resolution failures abort the whole update;
/// nothing is partially applied. The summary reflects what was requested, in
/// the order state, title, description.
pub async fn update_issue<T>(
    transport: &T,
    request: &UpdateRequest,
) -> Result<ChangeSummary, OperationError>
where
    T: Transport + ?Sized,
{
    if !request.has_changes() {
        return Err(OperationError::NoChangesSpecified);
    }

    let issue = fetch_issue(transport, &request.issue_id).await?.issue_ref();

    let state = match &request.state {
        Some(name) => Some(resolve_state(transport, &request.issue_id, name).await?),
        None => None,
    };

    let mut params = MutationParams::new(issue.internal_id.as_str());
    if let Some(state) = &state {
        params = params.state_id(state.id.as_str());
    }
    if let Some(title) = &request.title {
        params = params.title(title.as_str());
    }
    if let Some(description) = &request.description {
        params = params.description(description.as_str());
    }

    let data = transport
        .execute(&queries::UPDATE_ISSUE, params.to_variables())
        .await?;
    let data: IssueUpdateData = decode(data)?;

    if !data.issue_update.is_some_and(|payload| payload.success) {
        return Err(OperationError::MutationRejected(MutationKind::IssueUpdate));
    }

    Ok(ChangeSummary {
        issue,
        state: state.map(|state| state.name),
        title: request.title.is_some(),
        description: request.description.is_some(),
    })
}
