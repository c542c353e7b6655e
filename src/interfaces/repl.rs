//! Line-oriented front end: each input line is one user event.

use super::report::result_rows;
use super::table::{write_empty_state, write_table};
use crate::application::format::format_percentage;
use crate::application::session::{CalculatorSession, EditOutcome};
use crate::config::DisplayConfig;
use crate::domain::frequency::Frequency;
use crate::error::Result;
use std::io::{BufRead, Write};
use tracing::info;

const HELP: &str = "Type an amount to convert it. Commands: :freq <hourly|daily|weekly|biweekly|monthly|yearly>, :clear, :help, :quit";

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Amount(&'a str),
    Frequency(&'a str),
    Clear,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Command<'_> {
    let line = line.trim();
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Amount(line);
    };
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("freq" | "f"), Some(tag)) => Command::Frequency(tag),
        (Some("clear" | "c"), None) => Command::Clear,
        (Some("quit" | "q"), None) => Command::Quit,
        _ => Command::Help,
    }
}

/// Drives a [`CalculatorSession`] from `input`, re-rendering to `output` after
/// every event.
pub struct Repl<'a, R: BufRead, W: Write> {
    input: R,
    output: W,
    config: &'a DisplayConfig,
    session: CalculatorSession,
    initial_amount: Option<String>,
}

impl<'a, R: BufRead, W: Write> Repl<'a, R, W> {
    pub fn new(input: R, output: W, config: &'a DisplayConfig) -> Self {
        Self {
            input,
            output,
            config,
            session: CalculatorSession::new(),
            initial_amount: None,
        }
    }

    /// Preselects the frequency before the first event.
    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.session.select_frequency(frequency);
        self
    }

    /// Treats `text` as the first amount typed, before any input is read.
    pub fn with_amount(mut self, text: impl Into<String>) -> Self {
        self.initial_amount = Some(text.into());
        self
    }

    /// Runs until `:quit` or end of input and hands back the final session.
    pub fn run(mut self) -> Result<CalculatorSession> {
        writeln!(self.output, "Income Calculator")?;
        writeln!(self.output, "{HELP}")?;
        self.render()?;

        if let Some(text) = self.initial_amount.take() {
            self.apply(Command::Amount(text.trim()))?;
        }

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            if !self.apply(parse_command(&line))? {
                break;
            }
        }

        info!(
            amount = self.session.state().input.amount,
            frequency = %self.session.frequency(),
            "session finished"
        );
        self.output.flush()?;
        Ok(self.session)
    }

    /// Applies one event. Returns `false` once the session should end.
    fn apply(&mut self, command: Command<'_>) -> Result<bool> {
        match command {
            Command::Amount(text) => {
                if self.session.edit_amount(text) == EditOutcome::Rejected {
                    writeln!(
                        self.output,
                        "Only digits and a single decimal point are accepted"
                    )?;
                    return Ok(true);
                }
            }
            Command::Frequency(tag) => {
                self.session.select_frequency_tag(tag);
                if self.session.frequency().as_str() == tag {
                    writeln!(
                        self.output,
                        "Payment frequency: {}",
                        self.session.frequency().label()
                    )?;
                }
            }
            Command::Clear => {
                self.session.edit_amount("");
            }
            Command::Help => {
                writeln!(self.output, "{HELP}")?;
                return Ok(true);
            }
            Command::Quit => return Ok(false),
        }
        self.render()?;
        Ok(true)
    }

    fn render(&mut self) -> Result<()> {
        if let Some(message) = self.session.error() {
            writeln!(self.output, "Error: {message}")?;
        }
        match self.session.calculated() {
            Some(result) => {
                let rows = result_rows(result, self.session.frequency(), self.config.tax_rate)?;
                write_table(&mut self.output, &rows, self.config)?;
                if let Some(change) = self.session.yearly_change() {
                    writeln!(
                        self.output,
                        "Yearly change: {}",
                        format_percentage(change, &self.config.percentage_options(true))
                    )?;
                }
            }
            None if self.session.amount_text().is_empty() && self.session.error().is_none() => {
                write_empty_state(&mut self.output)?
            }
            None => {}
        }
        Ok(())
    }
}
