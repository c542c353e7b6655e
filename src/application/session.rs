use crate::domain::frequency::Frequency;
use crate::domain::income::{
    CalculatedIncome, IncomeInput, calculate_all_incomes, calculate_percentage_difference,
};
use crate::domain::validation::{accepts_amount_text, is_blank_amount, validate_amount};
use tracing::debug;

/// The input pair and the result derived from it.
///
/// `calculated` is `None` until a valid amount has been entered, and again
/// whenever the amount is cleared or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalculatorState {
    pub input: IncomeInput,
    pub calculated: Option<CalculatedIncome>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The text became the new content of the amount field.
    Accepted,
    /// The text does not fit the amount grammar; nothing changed.
    Rejected,
}

/// Owns the calculator state and applies user events to it.
///
/// Every event runs to completion and swaps in whole new values, so a reader
/// never sees a half-updated result.
#[derive(Debug, Default)]
pub struct CalculatorSession {
    state: CalculatorState,
    previous: Option<CalculatedIncome>,
    amount_text: String,
    error: Option<String>,
}

impl CalculatorSession {
    /// Starts with an empty amount field and the yearly frequency selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn frequency(&self) -> Frequency {
        self.state.input.frequency
    }

    pub fn calculated(&self) -> Option<&CalculatedIncome> {
        self.state.calculated.as_ref()
    }

    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    /// The message currently shown, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Percentage change of the yearly figure relative to the result this one
    /// replaced.
    pub fn yearly_change(&self) -> Option<f64> {
        let current = self.state.calculated?;
        let previous = self.previous?;
        if current.yearly == previous.yearly {
            return None;
        }
        Some(calculate_percentage_difference(
            current.yearly,
            previous.yearly,
        ))
    }

    /// Applies new content of the amount field.
    pub fn edit_amount(&mut self, text: &str) -> EditOutcome {
        if !accepts_amount_text(text) {
            debug!(text, "amount text rejected at entry");
            return EditOutcome::Rejected;
        }
        self.amount_text = text.to_string();
        self.error = None;

        if is_blank_amount(text) {
            self.set_state(0.0, self.frequency(), None);
            return EditOutcome::Accepted;
        }

        let frequency = self.frequency();
        match validate_amount(text).and_then(|amount| {
            let amount = amount.unwrap_or_default();
            calculate_all_incomes(amount, frequency).map(|result| (amount, result))
        }) {
            Ok((amount, result)) => {
                debug!(amount, %frequency, yearly = result.yearly, "recalculated incomes");
                self.set_state(amount, frequency, Some(result));
            }
            Err(e) => {
                debug!(text, error = %e, "amount not usable");
                self.error = Some(e.to_string());
                self.set_state(0.0, frequency, None);
            }
        }
        EditOutcome::Accepted
    }

    /// Changes the selected frequency and recomputes from the stored amount.
    pub fn select_frequency(&mut self, frequency: Frequency) {
        let amount = self.state.input.amount;
        if amount <= 0.0 {
            self.set_state(amount, frequency, None);
            return;
        }
        match calculate_all_incomes(amount, frequency) {
            Ok(result) => {
                debug!(amount, %frequency, yearly = result.yearly, "recalculated incomes");
                self.set_state(amount, frequency, Some(result));
            }
            Err(e) => {
                self.error = Some(e.to_string());
                self.set_state(amount, frequency, None);
            }
        }
    }

    /// Like [`Self::select_frequency`] for a tag that has not been checked yet.
    /// Clears the shown message first; an unknown tag is reported and the
    /// current selection kept.
    pub fn select_frequency_tag(&mut self, tag: &str) {
        self.error = None;
        match tag.parse() {
            Ok(frequency) => self.select_frequency(frequency),
            Err(e) => {
                debug!(tag, "unknown frequency tag");
                self.error = Some(e.to_string());
            }
        }
    }

    fn set_state(&mut self, amount: f64, frequency: Frequency, calculated: Option<CalculatedIncome>) {
        // Only a result that directly replaces another has something to compare to.
        self.previous = match (self.state.calculated, calculated) {
            (Some(outgoing), Some(_)) => Some(outgoing),
            _ => None,
        };
        self.state = CalculatorState {
            input: IncomeInput { amount, frequency },
            calculated,
        };
    }
}
