// ABOUTME: Linear core library: GraphQL transport, query catalog and orchestrated operations
// ABOUTME: Resolves human issue ids, workflow states and teams before sending mutations

pub mod builder;
pub mod client;
pub mod constants;
pub mod error;
pub mod filter;
pub mod graphql;
pub mod operations;
pub mod queries;
mod responses;
pub mod types;
pub mod update;

#[cfg(test)]
mod test_helpers;

pub use builder::LinearClientConfig;
pub use client::LinearClient;
pub use error::{LinearError, MutationKind, OperationError};
pub use filter::{IssueCriteria, IssueFilter, build_filter};
pub use graphql::{Transport, Variables};
pub use queries::Operation;
pub use types::{
    Comment, Issue, IssueRef, IssueState, IssueSummary, Project, Team, User, WorkflowState,
    priority_label,
};
pub use update::{ChangeSummary, MutationParams, UpdateRequest};

pub type Result<T, E = LinearError> = std::result::Result<T, E>;
