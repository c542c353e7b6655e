use crate::error::Result;

/// Locale-aware number rendering supplied by the host.
///
/// Any method may fail (unknown currency code, unsupported precision,
/// non-finite value); callers are expected to fall back to manual formatting.
pub trait NumberLocale: Send + Sync {
    /// Locale tag this implementation renders for, e.g. `en-US`.
    fn tag(&self) -> &str;

    /// Currency with exactly `decimals` fraction digits.
    fn currency(&self, amount: f64, currency: &str, decimals: u32) -> Result<String>;

    /// Currency in compact notation with at most `max_fraction_digits`.
    fn compact_currency(
        &self,
        amount: f64,
        currency: &str,
        max_fraction_digits: u32,
    ) -> Result<String>;

    /// Plain number with grouping separators and exactly `decimals` digits.
    fn number(&self, value: f64, decimals: u32) -> Result<String>;
}

pub type NumberLocaleBox = Box<dyn NumberLocale>;
