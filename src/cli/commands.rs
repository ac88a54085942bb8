//! Session command parsing
//!
//! Each line typed into the shell is split with shell quoting rules and
//! parsed by clap into a [`SessionCommand`].

use chrono::{Local, NaiveDate};
use clap::{CommandFactory, Parser, Subcommand};

/// A single shell line
#[derive(Parser, Debug)]
#[command(
    name = "session",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Commands available inside a session
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum SessionCommand {
    /// Set the budget ceiling (e.g. "100" or "250.00")
    #[command(alias = "set-budget")]
    Budget {
        /// New budget ceiling
        #[arg(allow_negative_numbers = true)]
        amount: Option<String>,
    },

    /// Record an expense against the remaining budget
    #[command(alias = "expense")]
    Add {
        /// What the money was spent on
        description: Option<String>,
        /// Amount spent (e.g. "12.50")
        #[arg(allow_negative_numbers = true)]
        amount: Option<String>,
        /// Food, Transport, Entertainment, Shopping, Utilities or Other
        category: Option<String>,
        /// Expense date (YYYY-MM-DD or "today")
        #[arg(short, long, default_value = "today", value_parser = parse_date)]
        date: NaiveDate,
    },

    /// Show all recorded expenses
    #[command(alias = "ls")]
    List,

    /// Show budget, spending and remaining balance
    #[command(alias = "status")]
    Remaining,

    /// Show spending by category
    #[command(alias = "report")]
    Summary,

    /// Write the ledger to a CSV, JSON or YAML file
    Export {
        /// Destination file
        path: String,
        /// Output format (defaults to the file extension)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// List the standard categories
    Categories,

    /// Show available commands
    Help,

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

/// Parse a date argument, accepting "today"
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    if s.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}' ({}), expected YYYY-MM-DD", s, e))
}

/// Outcome of parsing one shell line
#[derive(Debug)]
pub enum ParsedLine {
    Empty,
    Command(SessionCommand),
    /// Tokenizer or clap failure, already rendered for display
    Invalid(String),
}

/// Tokenize and parse one line of input
pub fn parse_line(line: &str) -> ParsedLine {
    let tokens = match shell_words::split(line) {
        Ok(tokens) => tokens,
        Err(err) => return ParsedLine::Invalid(format!("Could not parse input: {}", err)),
    };

    if tokens.is_empty() {
        return ParsedLine::Empty;
    }

    match SessionLine::try_parse_from(tokens) {
        Ok(parsed) => ParsedLine::Command(parsed.command),
        Err(err) => ParsedLine::Invalid(err.render().to_string()),
    }
}

/// Help text listing every session command
pub fn session_help() -> String {
    SessionLine::command()
        .override_usage("<COMMAND> [ARGS]")
        .render_help()
        .to_string()
}
