// ABOUTME: CLI argument definitions for Linear CLI application
// ABOUTME: Defines the command-line interface structure using clap derive macros

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "linear")]
#[command(about = "A CLI for Linear", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Show details for a single issue
    Issue {
        /// Issue identifier (e.g., ENG-123)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List issues matching optional filters
    Issues {
        /// Only issues whose title contains this text
        #[arg(long, short)]
        query: Option<String>,

        /// Filter by team key (defaults to default_team from config)
        #[arg(long, short)]
        team: Option<String>,

        /// Filter by state name (case insensitive)
        #[arg(long, short)]
        state: Option<String>,

        /// Filter by project id
        #[arg(long, short)]
        project: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Search issues by title
    Search {
        /// Text to look for in issue titles
        query: String,

        /// Filter by team key (defaults to default_team from config)
        #[arg(long, short)]
        team: Option<String>,

        /// Filter by state name (case insensitive)
        #[arg(long, short)]
        state: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show issues assigned to you
    Mine {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List teams
    Teams {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List projects
    Projects {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a comment to an issue
    Comment {
        /// Issue identifier (e.g., ENG-123)
        id: String,

        /// Comment text
        body: String,
    },
    /// Update the state, title or description of an issue
    Update {
        /// Issue identifier (e.g., ENG-123)
        id: String,

        /// New workflow state name (case insensitive)
        #[arg(long)]
        state: Option<String>,

        /// New title for the issue
        #[arg(long)]
        title: Option<String>,

        /// New description for the issue
        #[arg(long)]
        description: Option<String>,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: crate::completions::Shell,
    },
}

impl Commands {
    /// Whether `--json` was passed to a command that supports it.
    pub fn wants_json(&self) -> bool {
        match self {
            Commands::Issue { json, .. }
            | Commands::Issues { json, .. }
            | Commands::Search { json, .. }
            | Commands::Mine { json }
            | Commands::Teams { json }
            | Commands::Projects { json } => *json,
            Commands::Comment { .. } | Commands::Update { .. } | Commands::Completions { .. } => {
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "linear");

        for name in [
            "issue",
            "issues",
            "search",
            "mine",
            "teams",
            "projects",
            "comment",
            "update",
            "completions",
        ] {
            assert!(
                cli.find_subcommand(name).is_some(),
                "{name} command should exist"
            );
        }
    }

    #[test]
    fn test_parse_issues_filters() {
        let cli = Cli::try_parse_from([
            "linear", "issues", "--query", "login", "--team", "ENG", "--state", "todo",
            "--project", "project-1",
        ])
        .unwrap();

        assert_eq!(
            cli.command,
            Commands::Issues {
                query: Some("login".to_string()),
                team: Some("ENG".to_string()),
                state: Some("todo".to_string()),
                project: Some("project-1".to_string()),
                json: false,
            }
        );
    }

    #[test]
    fn test_parse_issues_without_filters() {
        let cli = Cli::try_parse_from(["linear", "issues", "--json"]).unwrap();

        match cli.command {
            Commands::Issues {
                query,
                team,
                state,
                project,
                json,
            } => {
                assert!(query.is_none() && team.is_none() && state.is_none() && project.is_none());
                assert!(json);
            }
            other => panic!("Expected issues command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_search_requires_query() {
        assert!(Cli::try_parse_from(["linear", "search"]).is_err());

        let cli = Cli::try_parse_from(["linear", "search", "crash", "-t", "FAT"]).unwrap();
        match cli.command {
            Commands::Search { query, team, .. } => {
                assert_eq!(query, "crash");
                assert_eq!(team, Some("FAT".to_string()));
            }
            other => panic!("Expected search command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_comment_positional_body() {
        let cli = Cli::try_parse_from(["linear", "comment", "FAT-85", "Looks good"]).unwrap();

        assert_eq!(
            cli.command,
            Commands::Comment {
                id: "FAT-85".to_string(),
                body: "Looks good".to_string(),
            }
        );
        assert!(Cli::try_parse_from(["linear", "comment", "FAT-85"]).is_err());
    }

    #[test]
    fn test_parse_update_fields() {
        let cli = Cli::try_parse_from([
            "linear",
            "update",
            "FAT-85",
            "--state",
            "Done",
            "--title",
            "X",
        ])
        .unwrap();

        match cli.command {
            Commands::Update {
                id,
                state,
                title,
                description,
            } => {
                assert_eq!(id, "FAT-85");
                assert_eq!(state, Some("Done".to_string()));
                assert_eq!(title, Some("X".to_string()));
                assert_eq!(description, None);
            }
            other => panic!("Expected update command, got {other:?}"),
        }
    }

    #[test]
    fn test_update_without_fields_still_parses() {
        // The missing-field check belongs to the update operation.
        let cli = Cli::try_parse_from(["linear", "update", "FAT-85"]).unwrap();
        assert!(matches!(cli.command, Commands::Update { .. }));
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from(["linear", "teams", "--no-color", "-v"]).unwrap();
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert!(!cli.command.wants_json());

        let cli = Cli::try_parse_from(["linear", "--verbose", "mine", "--json"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.command.wants_json());
    }
}
