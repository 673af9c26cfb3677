// ABOUTME: Dispatches parsed commands to linear-core operations and renders their results
// ABOUTME: Works against any Transport so the whole command path runs under test servers

use anyhow::Result;
use linear_core::operations::{
    add_comment, fetch_issue, list_issues, list_projects, list_teams, my_issues, update_issue,
};
use linear_core::{IssueCriteria, IssueSummary, Transport, UpdateRequest};

use crate::cli::Commands;
use crate::completions::write_completions;
use crate::output::{
    JsonFormatter, OutputFormat, TableFormatter, comment_added_message, update_message,
};

/// Settings that shape how a command's result is rendered.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub use_color: bool,
    /// `preferred_format = "json"` in the config file
    pub prefer_json: bool,
    pub default_team: Option<String>,
}

impl Settings {
    fn formatter(&self, json_flag: bool) -> Box<dyn OutputFormat> {
        if json_flag || self.prefer_json {
            Box::new(JsonFormatter)
        } else {
            Box::new(TableFormatter::new(self.use_color))
        }
    }

    fn team_or_default(&self, team: Option<String>) -> Option<String> {
        team.or_else(|| self.default_team.clone())
    }
}

/// Tables get `empty_message` in place of an empty list; JSON always renders.
fn render_list<T>(
    settings: &Settings,
    json: bool,
    items: &[T],
    empty_message: String,
    format: impl FnOnce(&dyn OutputFormat, &[T]) -> Result<String>,
) -> Result<String> {
    if items.is_empty() && !(json || settings.prefer_json) {
        return Ok(empty_message);
    }
    format(settings.formatter(json).as_ref(), items)
}

fn render_issue_list(
    settings: &Settings,
    json: bool,
    issues: &[IssueSummary],
    empty_message: String,
) -> Result<String> {
    render_list(settings, json, issues, empty_message, |formatter, issues| {
        formatter.format_issues(issues)
    })
}

/// Run `command` and return the text destined for stdout.
///
/// Operation failures come back as an [`linear_core::OperationError`] inside
/// the `anyhow::Error` so the caller can render them in full.
pub async fn execute<T>(transport: &T, command: Commands, settings: &Settings) -> Result<String>
where
    T: Transport + ?Sized,
{
    match command {
        Commands::Issue { id, json } => {
            let issue = fetch_issue(transport, &id).await?;
            settings.formatter(json).format_issue(&issue)
        }
        Commands::Issues {
            query,
            team,
            state,
            project,
            json,
        } => {
            let criteria = IssueCriteria {
                query,
                team: settings.team_or_default(team),
                state,
                project,
            };
            let issues = list_issues(transport, &criteria).await?;
            render_issue_list(settings, json, &issues, "No issues found.".to_string())
        }
        Commands::Search {
            query,
            team,
            state,
            json,
        } => {
            let empty = format!("No issues found matching: {query}");
            let criteria = IssueCriteria {
                query: Some(query),
                team: settings.team_or_default(team),
                state,
                project: None,
            };
            let issues = list_issues(transport, &criteria).await?;
            render_issue_list(settings, json, &issues, empty)
        }
        Commands::Mine { json } => {
            let issues = my_issues(transport).await?;
            render_issue_list(settings, json, &issues, "No issues assigned to you".to_string())
        }
        Commands::Teams { json } => {
            let teams = list_teams(transport).await?;
            settings.formatter(json).format_teams(&teams)
        }
        Commands::Projects { json } => {
            let projects = list_projects(transport).await?;
            render_list(
                settings,
                json,
                &projects,
                "No projects found.".to_string(),
                |formatter, projects| formatter.format_projects(projects),
            )
        }
        Commands::Comment { id, body } => {
            let added = add_comment(transport, &id, &body).await?;
            Ok(comment_added_message(&added))
        }
        Commands::Update {
            id,
            state,
            title,
            description,
        } => {
            let request = UpdateRequest {
                issue_id: id,
                state,
                title,
                description,
            };
            let summary = update_issue(transport, &request).await?;
            Ok(update_message(&summary))
        }
        Commands::Completions { shell } => {
            let mut script = Vec::new();
            write_completions(shell, &mut script);
            Ok(String::from_utf8_lossy(&script).into_owned())
        }
    }
}
