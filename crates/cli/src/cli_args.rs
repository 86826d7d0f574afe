//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate.

use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for the cmaner CLI tool.
///
/// Without arguments the interactive command menu is shown. A single word
/// that is not an action runs the command with that short call.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use cmaner_cli::cli_args::Args;
///
/// let args = Args::parse_from(["cmaner", "add", "category"]);
/// assert!(args.action.is_some());
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0, disable_help_subcommand = true)] // `help` is one of our actions
pub struct Args {
    /// Path to the categories and commands storage YAML.
    ///
    /// If not provided, defaults to `~/.cmaner/storage.yml`.
    #[arg(long, short = 's', global = true)]
    pub storage_path: Option<String>,

    #[command(subcommand)]
    pub action: Option<Action>,

    /// Short call of the command to run directly.
    #[arg(num_args(1))]
    pub short_call: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Action {
    /// Add a category or a command.
    Add {
        #[arg(value_enum)]
        target: Target,
    },
    /// Remove a category or a command.
    Rm {
        #[arg(value_enum)]
        target: Target,
    },
    /// Show usage.
    Help,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Category,
    Command,
}
