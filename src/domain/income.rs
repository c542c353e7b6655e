use super::frequency::Frequency;
use crate::error::{CalcError, Result};
use serde::Serialize;

/// The amount typed by the user together with the cadence it is paid at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncomeInput {
    pub amount: f64,
    pub frequency: Frequency,
}

impl Default for IncomeInput {
    fn default() -> Self {
        Self {
            amount: 0.0,
            frequency: Frequency::Yearly,
        }
    }
}

/// Equivalent income at each of the six cadences.
///
/// Every field is derived from the same yearly base, so the values are always
/// mutually consistent. A new input always produces a whole new value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalculatedIncome {
    pub hourly: f64,
    pub daily: f64,
    pub weekly: f64,
    pub biweekly: f64,
    pub monthly: f64,
    pub yearly: f64,
}

impl CalculatedIncome {
    fn from_yearly(yearly: f64) -> Self {
        Self {
            hourly: yearly / Frequency::Hourly.periods_per_year(),
            daily: yearly / Frequency::Daily.periods_per_year(),
            weekly: yearly / Frequency::Weekly.periods_per_year(),
            biweekly: yearly / Frequency::Biweekly.periods_per_year(),
            monthly: yearly / Frequency::Monthly.periods_per_year(),
            yearly,
        }
    }

    pub fn get(&self, frequency: Frequency) -> f64 {
        match frequency {
            Frequency::Hourly => self.hourly,
            Frequency::Daily => self.daily,
            Frequency::Weekly => self.weekly,
            Frequency::Biweekly => self.biweekly,
            Frequency::Monthly => self.monthly,
            Frequency::Yearly => self.yearly,
        }
    }

    /// Applies `f` to every cadence, e.g. to derive after-tax figures.
    pub fn map<F>(&self, mut f: F) -> Result<Self>
    where
        F: FnMut(f64) -> Result<f64>,
    {
        Ok(Self {
            hourly: f(self.hourly)?,
            daily: f(self.daily)?,
            weekly: f(self.weekly)?,
            biweekly: f(self.biweekly)?,
            monthly: f(self.monthly)?,
            yearly: f(self.yearly)?,
        })
    }
}

/// Normalises `amount` to a yearly figure.
pub fn convert_to_yearly(amount: f64, frequency: Frequency) -> f64 {
    amount * frequency.periods_per_year()
}

/// Converts `amount`, paid at `frequency`, into all six cadences.
///
/// No rounding is applied; display rounding belongs to the formatters.
pub fn calculate_all_incomes(amount: f64, frequency: Frequency) -> Result<CalculatedIncome> {
    if amount < 0.0 {
        return Err(CalcError::NegativeAmountAtEngine);
    }
    let yearly = convert_to_yearly(amount, frequency);
    Ok(CalculatedIncome::from_yearly(yearly))
}

/// Same as [`calculate_all_incomes`] with the cadence given as unchecked text.
pub fn calculate_all_incomes_for_tag(amount: f64, tag: &str) -> Result<CalculatedIncome> {
    calculate_all_incomes(amount, tag.parse()?)
}

/// Percentage change from `previous` to `current`, or 0 when there is no base.
pub fn calculate_percentage_difference(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        return 0.0;
    }
    (current - previous) / previous * 100.0
}

/// Rounds to `decimals` places, halves going toward positive infinity.
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let multiplier = 10f64.powi(decimals as i32);
    let scaled = value * multiplier;
    // f64::round sends -2.5 to -3; halves must go up instead
    let rounded = if scaled.fract() == -0.5 {
        scaled.ceil()
    } else {
        scaled.round()
    };
    rounded / multiplier
}

/// Accepts percentages from 0 to 100 inclusive.
pub fn validate_tax_rate(tax_rate: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&tax_rate) {
        return Err(CalcError::InvalidTaxRate);
    }
    Ok(())
}

pub fn calculate_tax(amount: f64, tax_rate: f64) -> Result<f64> {
    validate_tax_rate(tax_rate)?;
    Ok(amount * (tax_rate / 100.0))
}

pub fn calculate_net_income(gross_income: f64, tax_rate: f64) -> Result<f64> {
    let tax = calculate_tax(gross_income, tax_rate)?;
    Ok(gross_income - tax)
}
