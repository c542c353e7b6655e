use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Please enter a valid number")]
    InvalidNumber,
    #[error("Amount cannot be negative")]
    NegativeAmount,
    #[error("Amount is too large")]
    AmountTooLarge,
    #[error("Unknown frequency: {0}")]
    UnknownFrequency(String),
    /// Raised by the conversion engine itself when validation was bypassed.
    #[error("Amount cannot be negative")]
    NegativeAmountAtEngine,
    #[error("Tax rate must be between 0 and 100")]
    InvalidTaxRate,
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
    #[error("Unsupported currency code: {0}")]
    UnsupportedCurrency(String),
    #[error("Value cannot be formatted: {0}")]
    Unformattable(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalcError>;
