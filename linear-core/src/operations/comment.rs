// ABOUTME: Adds a comment to an issue addressed by its human id
// ABOUTME: Resolves the internal id first, then checks the mutation's success flag

use serde::Serialize;
use serde_json::Value;

use crate::error::{MutationKind, OperationError};
use crate::graphql::{Transport, variables};
use crate::queries;
use crate::responses::{CommentCreateData, decode};
use crate::types::{Comment, IssueRef};

use super::read::fetch_issue;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentAdded {
    pub issue: IssueRef,
    pub comment: Option<Comment>,
}

pub async fn add_comment<T>(
    transport: &T,
    human_id: &str,
    body: &str,
) -> Result<CommentAdded, OperationError>
where
    T: Transport + ?Sized,
{
    let issue = fetch_issue(transport, human_id).await?.issue_ref();

    let data = transport
        .execute(
            &queries::CREATE_COMMENT,
            variables([
                ("issueId", Value::from(issue.internal_id.as_str())),
                ("body", Value::from(body)),
            ]),
        )
        .await?;
    let data: CommentCreateData = decode(data)?;

    match data.comment_create {
        Some(payload) if payload.success => Ok(CommentAdded {
            issue,
            comment: payload.comment,
        }),
        _ => Err(OperationError::MutationRejected(MutationKind::CommentCreate)),
    }
}
