use crate::config::DisplayConfig;
use crate::domain::frequency::Frequency;
use crate::domain::income::{CalculatedIncome, calculate_net_income, round_to_decimals};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Machine-readable form of a conversion. Figures are rounded to the
/// configured number of decimals.
#[derive(Debug, Serialize, PartialEq)]
pub struct JsonReport {
    pub frequency: Frequency,
    pub amount: f64,
    pub results: Option<CalculatedIncome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net: Option<CalculatedIncome>,
}

impl JsonReport {
    pub fn new(
        frequency: Frequency,
        calculated: Option<(f64, CalculatedIncome)>,
        config: &DisplayConfig,
    ) -> Result<Self> {
        let decimals = config.decimals;
        let round = |value: f64| -> Result<f64> { Ok(round_to_decimals(value, decimals)) };

        let (amount, results, net) = match calculated {
            Some((amount, result)) => {
                let net = match config.tax_rate {
                    Some(rate) => Some(
                        result
                            .map(|gross| calculate_net_income(gross, rate))?
                            .map(round)?,
                    ),
                    None => None,
                };
                (amount, Some(result.map(round)?), net)
            }
            None => (0.0, None, None),
        };

        Ok(Self {
            frequency,
            amount,
            results,
            tax_rate: config.tax_rate,
            net,
        })
    }

    pub fn write<W: Write>(&self, mut out: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut out, self)?;
        writeln!(out)?;
        Ok(())
    }
}
