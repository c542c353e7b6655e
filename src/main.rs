use clap::Parser;
use incomecalc::config::DisplayConfig;
use incomecalc::domain::frequency::Frequency;
use incomecalc::domain::income::validate_tax_rate;
use incomecalc::interfaces::repl::Repl;
use incomecalc::interfaces::report::{OutputFormat, write_report};
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Convert an income between pay periods", long_about = None)]
struct Cli {
    /// Income amount. Without it an interactive session starts.
    #[arg(allow_negative_numbers = true)]
    amount: Option<String>,

    /// Pay period the amount is given in
    /// (hourly, daily, weekly, biweekly, monthly, yearly)
    #[arg(short, long, default_value = "yearly")]
    frequency: String,

    /// Locale used to format amounts
    #[arg(long, env = "INCOMECALC_LOCALE", default_value = "en-US")]
    locale: String,

    /// ISO 4217 currency code
    #[arg(long, env = "INCOMECALC_CURRENCY", default_value = "USD")]
    currency: String,

    /// Fraction digits shown for amounts (0 to 20)
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(0..=20))]
    decimals: u32,

    /// Abbreviate amounts ($45.5K)
    #[arg(long)]
    compact: bool,

    /// Also show amounts after this tax rate (percent)
    #[arg(long)]
    tax_rate: Option<f64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Read amounts and commands from stdin, one per line. A given amount is
    /// entered first.
    #[arg(short, long)]
    interactive: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("INCOMECALC_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(rate) = cli.tax_rate {
        validate_tax_rate(rate).into_diagnostic()?;
    }
    let config = DisplayConfig {
        locale: cli.locale,
        currency: cli.currency,
        decimals: cli.decimals,
        compact: cli.compact,
        tax_rate: cli.tax_rate,
    };
    config.check_locale();

    match cli.amount {
        Some(amount) if !cli.interactive => {
            let result = match cli.output {
                Some(path) => {
                    let file = File::create(path).into_diagnostic()?;
                    let out = BufWriter::new(file);
                    write_report(out, &amount, &cli.frequency, &config, cli.format)
                }
                None => {
                    let out = io::stdout().lock();
                    write_report(out, &amount, &cli.frequency, &config, cli.format)
                }
            };
            result.into_diagnostic()?;
        }
        amount => {
            let frequency: Frequency = cli.frequency.parse().into_diagnostic()?;
            let stdin = io::stdin();
            let mut repl =
                Repl::new(stdin.lock(), io::stdout().lock(), &config).with_frequency(frequency);
            if let Some(amount) = amount {
                repl = repl.with_amount(amount);
            }
            repl.run().into_diagnostic()?;
        }
    }

    Ok(())
}
