//! Line-oriented expense tracker shell
//!
//! Reads commands from any `BufRead` (a terminal or a piped script), hands
//! the raw field values to the budget controller and prints whatever comes
//! back. Rejected operations are shown as warnings and the session carries
//! on with its state untouched.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use super::commands::{parse_line, session_help, ParsedLine, SessionCommand};
use crate::config::Settings;
use crate::display::{
    format_admission, format_budget_status, format_remaining, format_transaction_register,
    format_warning,
};
use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_ledger, ExportFormat};
use crate::models::{Category, CategoryPolicy, Money};
use crate::reports::SpendingReport;
use crate::services::{BudgetController, ExpenseRequest};

/// Whether the read loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// An interactive session over one budget and one ledger
pub struct Session {
    controller: BudgetController,
    settings: Settings,
}

impl Session {
    /// Start a session with a zero budget and an empty ledger
    pub fn new(settings: Settings) -> Self {
        Self {
            controller: BudgetController::with_policy(settings.category_policy()),
            settings,
        }
    }

    pub fn controller(&self) -> &BudgetController {
        &self.controller
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Set the budget ceiling, logging the outcome
    pub fn apply_budget(&mut self, raw: &str) -> ExpenseResult<Money> {
        let remaining = self.controller.set_budget(raw)?;
        info!(
            ceiling = %self.controller.budget_ceiling(),
            remaining = %remaining,
            "budget set"
        );
        Ok(remaining)
    }

    /// Run the read-eval-print loop until input ends or the user quits
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut out: W,
        interactive: bool,
    ) -> ExpenseResult<()> {
        if interactive {
            writeln!(out, "Expense Tracker. Type 'help' for commands.")?;
            writeln!(
                out,
                "{}",
                format_remaining(self.controller.remaining_budget(), self.symbol())
            )?;
        }

        let mut buf = Vec::new();
        loop {
            if interactive {
                write!(out, "> ")?;
                out.flush()?;
            }

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                if interactive {
                    writeln!(out)?;
                }
                break;
            }

            let Ok(line) = std::str::from_utf8(&buf) else {
                let shown = String::from_utf8_lossy(&buf);
                warn!(line = %shown.trim_end(), "input is not valid UTF-8");
                writeln!(
                    out,
                    "Ignored a line that is not valid UTF-8: {}",
                    shown.trim_end()
                )?;
                continue;
            };
            let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');

            if self.handle_line(line, &mut out)? == LoopControl::Exit {
                break;
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Parse and execute a single line of input
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> ExpenseResult<LoopControl> {
        match parse_line(line) {
            ParsedLine::Empty => Ok(LoopControl::Continue),
            ParsedLine::Invalid(message) => {
                debug!(line, "unparseable input");
                write!(out, "{}", message)?;
                if !message.ends_with('\n') {
                    writeln!(out)?;
                }
                Ok(LoopControl::Continue)
            }
            ParsedLine::Command(command) => self.execute(command, out),
        }
    }

    /// Execute a parsed command, printing its output or a warning
    pub fn execute<W: Write>(
        &mut self,
        command: SessionCommand,
        out: &mut W,
    ) -> ExpenseResult<LoopControl> {
        if command == SessionCommand::Quit {
            return Ok(LoopControl::Exit);
        }

        match self.dispatch(command) {
            Ok(text) => write!(out, "{}", text)?,
            Err(err) => {
                warn!(title = err.title(), error = %err, "operation rejected");
                writeln!(out, "{}", format_warning(&err))?;
            }
        }

        Ok(LoopControl::Continue)
    }

    fn dispatch(&mut self, command: SessionCommand) -> ExpenseResult<String> {
        let symbol = self.settings.currency_symbol.clone();

        match command {
            SessionCommand::Budget { amount } => {
                let remaining = self.apply_budget(amount.as_deref().unwrap_or_default())?;
                Ok(line(format_remaining(remaining, &symbol)))
            }
            SessionCommand::Add {
                description,
                amount,
                category,
                date,
            } => {
                let request = ExpenseRequest {
                    description: description.as_deref().unwrap_or_default(),
                    amount: amount.as_deref().unwrap_or_default(),
                    category: category.as_deref(),
                    date: Some(date),
                };
                let admission = self.controller.add_expense(request)?;
                let txn = &admission.transaction;
                info!(
                    id = %txn.id(),
                    description = txn.description(),
                    amount = txn.amount_text(),
                    category = %txn.category(),
                    remaining = %admission.remaining,
                    "expense admitted"
                );

                let mut output = line(format_admission(&admission, &self.settings.date_format));
                output.push_str(&line(format_remaining(admission.remaining, &symbol)));
                Ok(output)
            }
            SessionCommand::List => Ok(format_transaction_register(
                self.controller.all(),
                &self.settings.date_format,
            )),
            SessionCommand::Remaining => Ok(format_budget_status(&self.controller, &symbol)),
            SessionCommand::Summary => {
                Ok(SpendingReport::generate(self.controller.ledger()).format_text(&symbol))
            }
            SessionCommand::Export { path, format } => self.export(&path, format.as_deref()),
            SessionCommand::Categories => Ok(self.format_categories()),
            SessionCommand::Help => Ok(session_help()),
            SessionCommand::Quit => Ok(String::new()),
        }
    }

    fn export(&self, path: &str, format: Option<&str>) -> ExpenseResult<String> {
        let path = Path::new(path);
        let format = match format {
            Some(name) => name.parse()?,
            None => ExportFormat::from_path(path).ok_or_else(|| {
                ExpenseError::Export(format!(
                    "Cannot tell the format of '{}': use --format csv|json|yaml",
                    path.display()
                ))
            })?,
        };

        let file = File::create(path).map_err(|e| {
            ExpenseError::Export(format!("Failed to create '{}': {}", path.display(), e))
        })?;
        let mut writer = BufWriter::new(file);
        export_ledger(&self.controller, format, &mut writer)?;
        writer
            .flush()
            .map_err(|e| ExpenseError::Export(e.to_string()))?;

        info!(path = %path.display(), %format, "ledger exported");
        Ok(line(format!(
            "Exported {} expenses to {} ({})",
            self.controller.all().len(),
            path.display(),
            format
        )))
    }

    fn format_categories(&self) -> String {
        let mut output = String::from("Categories:\n");
        for category in Category::STANDARD.iter() {
            output.push_str(&format!("  {}\n", category));
        }
        match self.controller.policy() {
            CategoryPolicy::Permissive => output.push_str("Custom categories are also accepted.\n"),
            CategoryPolicy::Strict => output.push_str("Only these categories are accepted.\n"),
        }
        output
    }

    fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }
}

fn line(text: String) -> String {
    text + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run_script(session: &mut Session, script: &str) -> String {
        let mut output = Vec::new();
        session
            .run(script.as_bytes(), &mut output, false)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_scenario() {
        let mut session = Session::new(Settings::default());
        let output = run_script(
            &mut session,
            "budget 100\n\
             add Lunch 12.50 Food\n\
             add Gift 200 Shopping\n\
             add Book 87.50 Other\n",
        );

        assert!(output.contains("Remaining Budget: $100.00"));
        assert!(output.contains("Remaining Budget: $87.50"));
        assert!(output.contains("Warning [Insufficient Budget]"));
        assert!(output.contains("Remaining Budget: $0.00"));
        assert_eq!(session.controller().all().len(), 2);
        assert_eq!(session.controller().remaining_budget(), Money::zero());
    }

    #[test]
    fn test_rejections_continue_the_session() {
        let mut session = Session::new(Settings::default());
        let output = run_script(
            &mut session,
            "budget abc\n\
             budget\n\
             add Lunch 5\n\
             add Lunch abc Food\n\
             budget 20\n\
             list\n",
        );

        assert!(output.contains("Warning [Invalid Budget]"));
        assert!(output.contains("Warning [Incomplete Information]"));
        assert!(output.contains("Warning [Invalid Amount]"));
        assert!(output.contains("No expenses recorded."));
        assert_eq!(
            session.controller().remaining_budget(),
            Money::from_cents(2000)
        );
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut session = Session::new(Settings::default());
        run_script(&mut session, "budget 10\nquit\nbudget 99\n");
        assert_eq!(
            session.controller().budget_ceiling(),
            Money::from_cents(1000)
        );
    }

    #[test]
    fn test_unknown_command_is_reported() {
        let mut session = Session::new(Settings::default());
        let output = run_script(&mut session, "frobnicate\nremaining\n");
        assert!(output.contains("frobnicate"));
        assert!(output.contains("Remaining Budget: $0.00"));
    }

    #[test]
    fn test_currency_symbol_and_strict_categories() {
        let settings = Settings {
            currency_symbol: "€".into(),
            strict_categories: true,
            ..Settings::default()
        };
        let mut session = Session::new(settings);
        let output = run_script(
            &mut session,
            "budget 50\nadd Vet 10 Pets\nadd Bus 2 transport\ncategories\n",
        );

        assert!(output.contains("Remaining Budget: €50.00"));
        assert!(output.contains("Warning [Unknown Category]"));
        assert!(output.contains("Remaining Budget: €48.00"));
        assert!(output.contains("Only these categories are accepted."));
    }

    #[test]
    fn test_summary_and_list() {
        let mut session = Session::new(Settings::default());
        let output = run_script(
            &mut session,
            "budget 100\nadd Lunch 30 Food --date 2025-01-02\nadd Taxi 10 Transport\nlist\nsummary\n",
        );

        assert!(output.contains("2025-01-02"));
        assert!(output.contains("Spending by Category"));
        assert!(output.contains("75.0%"));
    }

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.csv");
        let mut session = Session::new(Settings::default());

        let output = run_script(
            &mut session,
            &format!(
                "budget 100\nadd Lunch 12.50 Food\nexport \"{}\"\n",
                path.display()
            ),
        );

        assert!(output.contains("Exported 1 expenses"));
        let csv = std::fs::read_to_string(&path).unwrap();
        assert!(csv.contains("Lunch,Food,12.50"));
    }

    #[test]
    fn test_export_needs_a_format() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger");
        let mut session = Session::new(Settings::default());

        let output = run_script(&mut session, &format!("export \"{}\"\n", path.display()));
        assert!(output.contains("Warning [Export Failed]"));
        assert!(!path.exists());
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let mut session = Session::new(Settings::default());
        let mut output = Vec::new();
        let script: &[u8] = b"budget 10\nadd Caf\xe9 2 Food\r\nadd Tea 2 Food\r\nremaining\n";
        session.run(script, &mut output, false).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Ignored a line that is not valid UTF-8"));
        assert!(output.contains("Added: Tea 2 (Food,"));
        assert!(output.contains("Remaining Budget: $8.00"));
        assert_eq!(session.controller().all().len(), 1);
    }

    #[test]
    fn test_interactive_prompt() {
        let mut session = Session::new(Settings::default());
        let mut output = Vec::new();
        session.run("help\n".as_bytes(), &mut output, true).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.starts_with("Expense Tracker."));
        assert!(output.contains("> "));
        assert!(output.contains("budget"));
    }
}
