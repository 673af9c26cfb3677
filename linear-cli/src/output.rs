// ABOUTME: This module handles output formatting for the Linear CLI
// ABOUTME: Table and JSON formatters for issues, teams and projects plus mutation messages

use anyhow::Result;
use linear_core::operations::CommentAdded;
use linear_core::{ChangeSummary, Issue, IssueSummary, Project, Team, priority_label};
use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::constants::ui;
use crate::types::{paint_priority, paint_state};

pub trait OutputFormat {
    fn format_issues(&self, issues: &[IssueSummary]) -> Result<String>;
    fn format_issue(&self, issue: &Issue) -> Result<String>;
    fn format_teams(&self, teams: &[Team]) -> Result<String>;
    fn format_projects(&self, projects: &[Project]) -> Result<String>;
}

pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn truncate_title(title: &str, max_len: usize) -> String {
        if title.chars().count() <= max_len {
            title.to_string()
        } else {
            let kept: String = title.chars().take(max_len - 3).collect();
            format!("{kept}...")
        }
    }

    fn format_assignee(&self, name: Option<&str>) -> String {
        match name {
            Some(name) => name.to_string(),
            None if self.use_color => ui::UNASSIGNED.dimmed().to_string(),
            None => ui::UNASSIGNED.to_string(),
        }
    }

    fn format_progress(progress: Option<f64>) -> String {
        match progress {
            Some(p) => format!("{:.0}%", p * 100.0),
            None => "-".to_string(),
        }
    }
}

#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "Issue")]
    issue: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Assignee")]
    assignee: String,
}

#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Name")]
    name: String,
}

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "Project")]
    name: String,
    #[tabled(rename = "State")]
    state: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Lead")]
    lead: String,
}

impl OutputFormat for TableFormatter {
    fn format_issues(&self, issues: &[IssueSummary]) -> Result<String> {
        let rows: Vec<IssueRow> = issues
            .iter()
            .map(|issue| IssueRow {
                issue: issue.identifier.clone(),
                state: paint_state(&issue.state, self.use_color),
                priority: paint_priority(issue.priority, self.use_color),
                title: Self::truncate_title(&issue.title, ui::MAX_TITLE_WIDTH),
                assignee: self.format_assignee(issue.assignee.as_ref().map(|a| a.name.as_str())),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::psql());
        Ok(table.to_string())
    }

    fn format_issue(&self, issue: &Issue) -> Result<String> {
        let heading = format!("{}: {}", issue.identifier, issue.title);
        let heading = if self.use_color {
            heading.bold().to_string()
        } else {
            heading
        };
        let assignee = self.format_assignee(issue.assignee.as_ref().map(|a| a.name.as_str()));
        let description = issue
            .description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(ui::NO_DESCRIPTION);

        let mut lines = vec![
            heading,
            "=".repeat(ui::BORDER_LINE_LENGTH),
            format!("Status:   {}", paint_state(&issue.state, self.use_color)),
            format!("Assignee: {assignee}"),
            format!("Priority: {}", paint_priority(issue.priority, self.use_color)),
        ];
        if let Some(url) = &issue.url {
            lines.push(format!("URL:      {url}"));
        }
        lines.push(String::new());
        lines.push("Description:".to_string());
        lines.push(description.to_string());

        Ok(lines.join("\n"))
    }

    fn format_teams(&self, teams: &[Team]) -> Result<String> {
        let rows: Vec<TeamRow> = teams
            .iter()
            .map(|team| TeamRow {
                key: if self.use_color {
                    team.key.bold().to_string()
                } else {
                    team.key.clone()
                },
                name: team.name.clone(),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::psql());
        Ok(table.to_string())
    }

    fn format_projects(&self, projects: &[Project]) -> Result<String> {
        let rows: Vec<ProjectRow> = projects
            .iter()
            .map(|project| ProjectRow {
                name: project.name.clone(),
                state: project.state.clone().unwrap_or_else(|| "-".to_string()),
                progress: Self::format_progress(project.progress),
                target: project
                    .target_date
                    .clone()
                    .unwrap_or_else(|| "-".to_string()),
                lead: self.format_assignee(project.lead.as_ref().map(|l| l.name.as_str())),
            })
            .collect();

        let mut table = Table::new(rows);
        table.with(Style::psql());
        Ok(table.to_string())
    }
}

/// Pretty-printed JSON for scripting and `--json`.
pub struct JsonFormatter;

impl JsonFormatter {
    fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

/// Issue record enriched with its priority label for JSON consumers.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IssueJson<'a> {
    #[serde(flatten)]
    issue: &'a Issue,
    priority_label: &'static str,
}

impl OutputFormat for JsonFormatter {
    fn format_issues(&self, issues: &[IssueSummary]) -> Result<String> {
        self.render(issues)
    }

    fn format_issue(&self, issue: &Issue) -> Result<String> {
        self.render(&IssueJson {
            issue,
            priority_label: priority_label(issue.priority),
        })
    }

    fn format_teams(&self, teams: &[Team]) -> Result<String> {
        self.render(teams)
    }

    fn format_projects(&self, projects: &[Project]) -> Result<String> {
        self.render(projects)
    }
}

pub fn comment_added_message(added: &CommentAdded) -> String {
    format!("Comment added to {}", added.issue.human_id)
}

pub fn update_message(summary: &ChangeSummary) -> String {
    format!("Updated {}: {}", summary.issue.human_id, summary)
}
