// ABOUTME: Orchestrated operations against the Linear API
// ABOUTME: Each takes its Transport explicitly and awaits every call before the next

//! Every operation returns a discriminated [`OperationError`] instead of
//! printing or logging; presentation belongs to the caller. Calls are strictly
//! sequential and nothing is cached between operations.

mod comment;
mod read;
mod state;
mod update_issue;

pub use comment::{CommentAdded, add_comment};
pub use read::{fetch_issue, list_issues, list_projects, list_teams, my_issues};
pub use state::{resolve_state, team_key};
pub use update_issue::update_issue;

pub use crate::error::OperationError;
