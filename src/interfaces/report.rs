use super::csv::results_writer::ResultsWriter;
use super::json::JsonReport;
use super::table::{write_empty_state, write_table};
use crate::config::DisplayConfig;
use crate::domain::frequency::Frequency;
use crate::domain::income::{CalculatedIncome, calculate_all_incomes, calculate_net_income};
use crate::domain::validation::validate_amount;
use crate::error::Result;
use clap::ValueEnum;
use std::io::Write;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

/// One line of the results grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResultRow {
    pub frequency: Frequency,
    pub amount: f64,
    /// After-tax amount, when a tax rate is configured.
    pub net: Option<f64>,
    /// Whether this is the frequency the amount was entered at.
    pub current: bool,
}

pub fn result_rows(
    result: &CalculatedIncome,
    current: Frequency,
    tax_rate: Option<f64>,
) -> Result<Vec<ResultRow>> {
    Frequency::ALL
        .iter()
        .map(|&frequency| -> Result<ResultRow> {
            let amount = result.get(frequency);
            let net = tax_rate
                .map(|rate| calculate_net_income(amount, rate))
                .transpose()?;
            Ok(ResultRow {
                frequency,
                amount,
                net,
                current: frequency == current,
            })
        })
        .collect()
}

/// Validates `amount_text`, converts it and writes the report in `format`.
///
/// A blank amount produces the empty report; validation and conversion errors
/// are returned untouched.
pub fn write_report<W: Write>(
    mut out: W,
    amount_text: &str,
    frequency_tag: &str,
    config: &DisplayConfig,
    format: OutputFormat,
) -> Result<()> {
    let frequency: Frequency = frequency_tag.parse()?;
    let calculated = match validate_amount(amount_text)? {
        Some(amount) => {
            let result = calculate_all_incomes(amount, frequency)?;
            info!(amount, %frequency, yearly = result.yearly, "converted income");
            Some((amount, result))
        }
        None => None,
    };

    match format {
        OutputFormat::Table => match calculated {
            Some((_, result)) => {
                let rows = result_rows(&result, frequency, config.tax_rate)?;
                write_table(&mut out, &rows, config)?;
            }
            None => write_empty_state(&mut out)?,
        },
        OutputFormat::Csv => {
            let rows = match calculated {
                Some((_, result)) => result_rows(&result, frequency, config.tax_rate)?,
                None => Vec::new(),
            };
            ResultsWriter::new(&mut out, config).write_rows(&rows)?;
        }
        OutputFormat::Json => {
            JsonReport::new(frequency, calculated, config)?.write(&mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}
