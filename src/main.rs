use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use expense_tracker::cli::Session;
use expense_tracker::config::paths::CONFIG_DIR_ENV;
use expense_tracker::config::{ExpensePaths, Settings};
use expense_tracker::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Record expenses against a budget and watch the remaining balance",
    long_about = "Expense Tracker keeps one budget ceiling and a running list of expenses. \
                  Expenses that would exceed the remaining budget are rejected. \
                  Commands are read from stdin; type 'help' inside the session."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Budget ceiling to start the session with
    #[arg(short, long, allow_negative_numbers = true)]
    budget: Option<String>,

    /// Only accept the six standard categories
    #[arg(long)]
    strict_categories: bool,

    /// Directory holding config.json
    #[arg(long, env = CONFIG_DIR_ENV)]
    config_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the configuration directory and settings
    Config {
        /// Write the current settings to config.json
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = match cli.config_dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;
    debug!(path = %paths.settings_file().display(), ?settings, "settings loaded");

    if cli.strict_categories {
        settings.strict_categories = true;
    }

    match cli.command {
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
            }
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config directory:  {}", paths.base_dir().display());
            println!(
                "Settings file:     {}{}",
                paths.settings_file().display(),
                if paths.is_initialized() { "" } else { " (not created)" }
            );
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Date format:       {}", settings.date_format);
            println!("  Strict categories: {}", settings.strict_categories);
            println!(
                "  Initial budget:    {}",
                settings.initial_budget.as_deref().unwrap_or("(none)")
            );
        }
        None => {
            let initial_budget = cli.budget.or_else(|| settings.initial_budget.clone());
            let mut session = Session::new(settings);

            if let Some(budget) = initial_budget {
                session
                    .apply_budget(&budget)
                    .with_context(|| format!("Invalid starting budget '{}'", budget))?;
            }

            let stdin = io::stdin();
            let interactive = stdin.is_terminal();
            session.run(stdin.lock(), io::stdout().lock(), interactive)?;
        }
    }

    Ok(())
}
