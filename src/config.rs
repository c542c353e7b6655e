use crate::application::format::{
    CompactOptions, CurrencyOptions, PercentageOptions, format_compact_currency, format_currency,
};
use crate::infrastructure::resolve_locale;
use tracing::warn;

/// How amounts are rendered, collected from the command line and environment.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub locale: String,
    pub currency: String,
    pub decimals: u32,
    /// Abbreviated amounts (`$45.5K`) instead of full ones.
    pub compact: bool,
    /// When set, an after-tax figure is shown next to each amount.
    pub tax_rate: Option<f64>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            currency: "USD".to_string(),
            decimals: 2,
            compact: false,
            tax_rate: None,
        }
    }
}

impl DisplayConfig {
    /// Logs once when the configured locale has no implementation; rendering
    /// still works through the manual fallback.
    pub fn check_locale(&self) {
        if let Err(e) = resolve_locale(&self.locale) {
            warn!(locale = %self.locale, error = %e, "falling back to manual number formatting");
        }
    }

    pub fn currency_options(&self) -> CurrencyOptions {
        CurrencyOptions {
            currency: self.currency.clone(),
            locale: self.locale.clone(),
            decimals: self.decimals,
        }
    }

    pub fn compact_options(&self) -> CompactOptions {
        CompactOptions {
            currency: self.currency.clone(),
            locale: self.locale.clone(),
        }
    }

    pub fn percentage_options(&self, show_sign: bool) -> PercentageOptions {
        PercentageOptions {
            show_sign,
            ..Default::default()
        }
    }

    /// Renders an amount according to this configuration.
    pub fn money(&self, amount: f64) -> String {
        if self.compact {
            format_compact_currency(amount, &self.compact_options())
        } else {
            format_currency(amount, &self.currency_options())
        }
    }
}
