// ABOUTME: Catalog of the GraphQL operations the client sends to Linear
// ABOUTME: Each entry carries its text plus the variables it requires or accepts

use crate::error::LinearError;
use crate::graphql::Variables;

/// A named GraphQL operation and its variable contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub name: &'static str,
    pub query: &'static str,
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
}

impl Operation {
    pub fn declares(&self, variable: &str) -> bool {
        self.required.contains(&variable) || self.optional.contains(&variable)
    }

    /// Reject variable maps that miss a required variable or carry an undeclared one.
    pub fn check_variables(&self, variables: &Variables) -> Result<(), LinearError> {
        if let Some(missing) = self
            .required
            .iter()
            .find(|name| !variables.contains_key(**name))
        {
            return Err(LinearError::Configuration(format!(
                "{} requires variable ${}",
                self.name, missing
            )));
        }

        if let Some(unknown) = variables.keys().find(|name| !self.declares(name)) {
            return Err(LinearError::Configuration(format!(
                "{} does not declare variable ${}",
                self.name, unknown
            )));
        }

        Ok(())
    }
}

pub const ISSUE: Operation = Operation {
    name: "Issue",
    query: r#"query Issue($id: String!) {
  issue(id: $id) {
    id
    identifier
    title
    description
    state {
      name
      type
    }
    assignee {
      name
      email
    }
    priority
    createdAt
    updatedAt
    url
  }
}"#,
    required: &["id"],
    optional: &[],
};

pub const LIST_ISSUES: Operation = Operation {
    name: "ListIssues",
    query: r#"query ListIssues($filter: IssueFilter!) {
  issues(filter: $filter) {
    nodes {
      id
      identifier
      title
      state {
        name
        type
      }
      assignee {
        name
      }
      priority
      url
    }
  }
}"#,
    required: &["filter"],
    optional: &[],
};

pub const MY_ISSUES: Operation = Operation {
    name: "MyIssues",
    query: r#"query MyIssues {
  viewer {
    assignedIssues {
      nodes {
        id
        identifier
        title
        state {
          name
          type
        }
        priority
        url
      }
    }
  }
}"#,
    required: &[],
    optional: &[],
};

pub const TEAMS: Operation = Operation {
    name: "Teams",
    query: r#"query Teams {
  teams {
    nodes {
      id
      key
      name
    }
  }
}"#,
    required: &[],
    optional: &[],
};

pub const PROJECTS: Operation = Operation {
    name: "Projects",
    query: r#"query Projects {
  projects {
    nodes {
      id
      name
      description
      state
      progress
      startDate
      targetDate
      url
      lead {
        name
        email
      }
    }
  }
}"#,
    required: &[],
    optional: &[],
};

pub const WORKFLOW_STATES: Operation = Operation {
    name: "WorkflowStates",
    query: r#"query WorkflowStates($teamId: String!) {
  team(id: $teamId) {
    states {
      nodes {
        id
        name
        type
      }
    }
  }
}"#,
    required: &["teamId"],
    optional: &[],
};

pub const CREATE_COMMENT: Operation = Operation {
    name: "CreateComment",
    query: r#"mutation CreateComment($issueId: String!, $body: String!) {
  commentCreate(input: { issueId: $issueId, body: $body }) {
    success
    comment {
      id
      body
    }
  }
}"#,
    required: &["issueId", "body"],
    optional: &[],
};

// Omitted optional variables leave the matching input field unset server-side.
pub const UPDATE_ISSUE: Operation = Operation {
    name: "UpdateIssue",
    query: r#"mutation UpdateIssue($issueId: String!, $stateId: String, $title: String, $description: String) {
  issueUpdate(id: $issueId, input: { stateId: $stateId, title: $title, description: $description }) {
    success
    issue {
      id
      identifier
      title
      state {
        name
      }
      description
    }
  }
}"#,
    required: &["issueId"],
    optional: &["stateId", "title", "description"],
};

/// Every operation in the catalog.
pub const ALL: &[Operation] = &[
    ISSUE,
    LIST_ISSUES,
    MY_ISSUES,
    TEAMS,
    PROJECTS,
    WORKFLOW_STATES,
    CREATE_COMMENT,
    UPDATE_ISSUE,
];
