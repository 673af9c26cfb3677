// ABOUTME: Centralized CLI output utilities for consistent user-facing messages
// ABOUTME: Renders errors, hints and operation failures such as unknown workflow states

use linear_core::OperationError;
use owo_colors::OwoColorize;

/// Centralized CLI output utilities for consistent formatting
pub struct CliOutput {
    use_color: bool,
}

impl CliOutput {
    pub fn with_color(use_color: bool) -> Self {
        Self { use_color }
    }

    fn label(&self, text: &str, paint: fn(&str) -> String) -> String {
        if self.use_color {
            paint(text)
        } else {
            text.to_string()
        }
    }

    pub fn render_error(&self, message: &str) -> String {
        let label = self.label("error:", |t| t.red().bold().to_string());
        format!("{label} {message}")
    }

    pub fn render_hint(&self, message: &str) -> String {
        let label = self.label("hint:", |t| t.blue().bold().to_string());
        format!("{label} {message}")
    }

    /// Full stderr text for a failed operation, including the valid state
    /// names when a state lookup missed.
    pub fn render_operation_error(&self, err: &OperationError) -> String {
        let mut lines = Vec::new();

        match err {
            OperationError::StateNotFound { state, available } => {
                lines.push(self.render_error(&format!(
                    "State '{state}' not found. Available states:"
                )));
                lines.extend(available.iter().map(|name| format!("  - {name}")));
            }
            other => lines.push(self.render_error(&other.to_string())),
        }

        if let Some(help) = err.help_text() {
            lines.push(self.render_hint(help));
        }

        lines.join("\n")
    }

    /// Display an error message
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.render_error(message));
    }

    pub fn operation_error(&self, err: &OperationError) {
        eprintln!("{}", self.render_operation_error(err));
    }
}
