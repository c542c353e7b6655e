use super::report::ResultRow;
use crate::application::format::{capitalize, format_percentage, period_phrase};
use crate::config::DisplayConfig;
use crate::domain::frequency::{DAYS_PER_WEEK, HOURS_PER_WEEK, WEEKS_PER_YEAR};
use crate::error::Result;
use std::io::Write;

const CURRENT_BADGE: &str = "Current";

/// Writes the results grid, one line per frequency, the active one badged.
pub fn write_table<W: Write>(out: &mut W, rows: &[ResultRow], config: &DisplayConfig) -> Result<()> {
    let amounts: Vec<String> = rows.iter().map(|row| config.money(row.amount)).collect();
    let nets: Vec<Option<String>> = rows
        .iter()
        .map(|row| row.net.map(|net| config.money(net)))
        .collect();
    let net_header = config.tax_rate.map(|rate| {
        format!(
            "Net ({} tax)",
            format_percentage(rate, &config.percentage_options(false))
        )
    });

    let label_width = rows
        .iter()
        .map(|row| row.frequency.label().len())
        .chain(["Frequency".len()])
        .max()
        .unwrap_or_default();
    let amount_width = column_width(&amounts, "Amount");
    let net_width = net_header.as_ref().map(|header| {
        let values: Vec<String> = nets.iter().flatten().cloned().collect();
        column_width(&values, header)
    });

    writeln!(out, "Your Income Breakdown")?;
    writeln!(
        out,
        "Based on a standard {HOURS_PER_WEEK}-hour work week"
    )?;
    writeln!(out)?;

    write!(out, "{:<label_width$}  {:>amount_width$}", "Frequency", "Amount")?;
    if let (Some(header), Some(width)) = (&net_header, net_width) {
        write!(out, "  {header:>width$}")?;
    }
    writeln!(out, "  Period")?;

    for ((row, amount), net) in rows.iter().zip(&amounts).zip(&nets) {
        write!(
            out,
            "{:<label_width$}  {amount:>amount_width$}",
            row.frequency.label()
        )?;
        if let (Some(net), Some(width)) = (net, net_width) {
            write!(out, "  {net:>width$}")?;
        }
        let period = capitalize(period_phrase(row.frequency));
        if row.current {
            writeln!(out, "  {period:<11}  {CURRENT_BADGE}")?;
        } else {
            writeln!(out, "  {period}")?;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "Calculations assume {HOURS_PER_WEEK} hours/week, {WEEKS_PER_YEAR} weeks/year, and {DAYS_PER_WEEK} days/week"
    )?;
    Ok(())
}

/// Shown before any amount has been entered.
pub fn write_empty_state<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Ready to Calculate")?;
    writeln!(
        out,
        "Enter your income amount and select a payment frequency to see conversions across all time periods"
    )?;
    Ok(())
}

fn column_width(values: &[String], header: &str) -> usize {
    values
        .iter()
        .map(|value| value.chars().count())
        .chain([header.chars().count()])
        .max()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::frequency::Frequency;
    use crate::domain::income::calculate_all_incomes;
    use crate::interfaces::report::result_rows;

    fn render(amount: f64, frequency: Frequency, config: &DisplayConfig) -> String {
        let result = calculate_all_incomes(amount, frequency).unwrap();
        let rows = result_rows(&result, frequency, config.tax_rate).unwrap();
        let mut out = Vec::new();
        write_table(&mut out, &rows, config).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_table_lists_every_frequency_in_order() {
        let text = render(50.0, Frequency::Hourly, &DisplayConfig::default());
        let labels: Vec<&str> = text
            .lines()
            .filter_map(|line| line.split_whitespace().next())
            .filter(|word| Frequency::ALL.iter().any(|f| f.label() == *word))
            .collect();
        assert_eq!(
            labels,
            ["Hourly", "Daily", "Weekly", "Bi-weekly", "Monthly", "Yearly"]
        );
    }

    #[test]
    fn test_table_marks_current_frequency() {
        let text = render(50.0, Frequency::Hourly, &DisplayConfig::default());
        let current: Vec<&str> = text.lines().filter(|l| l.ends_with(CURRENT_BADGE)).collect();
        assert_eq!(current.len(), 1);
        assert!(current[0].starts_with("Hourly"));
        assert!(current[0].contains("$50.00"));
        assert!(text.contains("$104,000.00"));
        assert!(text.contains("$8,666.67"));
    }

    #[test]
    fn test_table_with_tax_column() {
        let config = DisplayConfig {
            tax_rate: Some(25.0),
            ..Default::default()
        };
        let text = render(1000.0, Frequency::Weekly, &config);
        assert!(text.contains("Net (25.0% tax)"));
        assert!(text.contains("$750.00"));
        assert!(text.contains("$52,000.00"));
        assert!(text.contains("$39,000.00"));
    }

    #[test]
    fn test_empty_state() {
        let mut out = Vec::new();
        write_empty_state(&mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("Ready to Calculate"));
    }
}
