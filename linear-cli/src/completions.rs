// ABOUTME: Shell completion generation for the linear binary using clap_complete
// ABOUTME: Scripts are derived from the Cli definition so they track every subcommand

use anyhow::{Result, anyhow};
use clap::{Command, CommandFactory, ValueEnum};
use clap_complete::{generate, shells};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::cli::Cli;

pub const BIN_NAME: &str = "linear";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[allow(clippy::enum_variant_names)]
    PowerShell,
}

impl Shell {
    pub fn all() -> [Shell; 4] {
        [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell]
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
            Shell::PowerShell => "powershell",
        };
        f.write_str(name)
    }
}

impl FromStr for Shell {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            "powershell" | "pwsh" => Ok(Shell::PowerShell),
            _ => Err(anyhow!(
                "Unsupported shell: {s}. Supported shells: bash, zsh, fish, powershell"
            )),
        }
    }
}

/// Write the completion script for `shell` describing `cmd`.
pub fn generate_for<W: Write>(shell: Shell, cmd: &mut Command, writer: &mut W) {
    match shell {
        Shell::Bash => generate(shells::Bash, cmd, BIN_NAME, writer),
        Shell::Zsh => generate(shells::Zsh, cmd, BIN_NAME, writer),
        Shell::Fish => generate(shells::Fish, cmd, BIN_NAME, writer),
        Shell::PowerShell => generate(shells::PowerShell, cmd, BIN_NAME, writer),
    }
}

/// Write the completion script for the `linear` command line itself.
pub fn write_completions<W: Write>(shell: Shell, writer: &mut W) {
    let mut cmd = Cli::command();
    generate_for(shell, &mut cmd, writer);
}
