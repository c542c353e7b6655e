//! Pure formatting helpers.
//!
//! The locale-aware helpers go through the [`NumberLocale`] resolved from their
//! options. When the locale or the requested rendering is unavailable they
//! degrade to a manual rendering instead of failing, so every function here
//! returns a plain `String`.
//!
//! [`NumberLocale`]: crate::domain::ports::NumberLocale

use crate::domain::frequency::Frequency;
use crate::domain::validation::parse_float_prefix;
use crate::error::Result;
use crate::infrastructure::resolve_locale;
use rust_decimal::prelude::*;
use tracing::debug;

const ABBREVIATION_SUFFIXES: [&str; 5] = ["", "K", "M", "B", "T"];

/// Past this `Decimal` cannot hold the requested scale.
const MAX_DECIMAL_SCALE: u32 = 28;

/// Below this magnitude fixed-point output is produced; above it the plain
/// float rendering is used.
const FIXED_NOTATION_LIMIT: f64 = 1e21;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyOptions {
    pub currency: String,
    pub locale: String,
    pub decimals: u32,
}

impl Default for CurrencyOptions {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            locale: "en-US".to_string(),
            decimals: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompactOptions {
    pub currency: String,
    pub locale: String,
}

impl Default for CompactOptions {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            locale: "en-US".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberOptions {
    pub locale: String,
    pub decimals: u32,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            decimals: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentageOptions {
    pub decimals: u32,
    pub show_sign: bool,
}

impl Default for PercentageOptions {
    fn default() -> Self {
        Self {
            decimals: 1,
            show_sign: false,
        }
    }
}

fn or_fallback(localized: Result<String>, fallback: impl FnOnce() -> String) -> String {
    localized.unwrap_or_else(|e| {
        debug!(error = %e, "locale formatting unavailable, using manual rendering");
        fallback()
    })
}

/// `$1,234.50` style currency.
pub fn format_currency(amount: f64, options: &CurrencyOptions) -> String {
    let localized = resolve_locale(&options.locale)
        .and_then(|locale| locale.currency(amount, &options.currency, options.decimals));
    or_fallback(localized, || {
        format!("${}", to_fixed(amount, options.decimals))
    })
}

/// `$45.5K` style currency with at most one fraction digit.
pub fn format_compact_currency(amount: f64, options: &CompactOptions) -> String {
    let localized = resolve_locale(&options.locale)
        .and_then(|locale| locale.compact_currency(amount, &options.currency, 1));
    or_fallback(localized, || format!("${}", abbreviate_number(amount)))
}

/// Plain number with thousands separators.
pub fn format_number(value: f64, options: &NumberOptions) -> String {
    let localized =
        resolve_locale(&options.locale).and_then(|locale| locale.number(value, options.decimals));
    or_fallback(localized, || to_fixed(value, options.decimals))
}

pub fn format_percentage(value: f64, options: &PercentageOptions) -> String {
    let sign = if options.show_sign && value > 0.0 {
        "+"
    } else {
        ""
    };
    format!("{sign}{}%", to_fixed(value, options.decimals))
}

/// Abbreviates by powers of 1000: `1500` is `1.5K`, `2_000_000` is `2.0M`.
pub fn abbreviate_number(value: f64) -> String {
    if value < 1000.0 || !value.is_finite() {
        return to_fixed(value, 0);
    }
    let tier = (value.abs().log10() / 3.0).floor() as usize;
    if tier == 0 {
        return to_fixed(value, 0);
    }
    let suffix = ABBREVIATION_SUFFIXES.get(tier).copied().unwrap_or("");
    let scale = 10f64.powi((tier * 3) as i32);
    format!("{}{suffix}", to_fixed(value / scale, 1))
}

/// Reads a number out of text such as `"$1,234.50"`. Never fails: anything
/// unreadable is 0.
pub fn parse_currency(text: &str) -> f64 {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
        .collect();
    let parsed = parse_float_prefix(&cleaned);
    if parsed.is_nan() { 0.0 } else { parsed }
}

pub fn period_phrase(frequency: Frequency) -> &'static str {
    match frequency {
        Frequency::Hourly => "per hour",
        Frequency::Daily => "per day",
        Frequency::Weekly => "per week",
        Frequency::Biweekly => "per 2 weeks",
        Frequency::Monthly => "per month",
        Frequency::Yearly => "per year",
    }
}

/// `"hourly"` is `"per hour"`; tags that are not frequencies come back as is.
pub fn format_time_period(tag: &str) -> String {
    match tag.parse::<Frequency>() {
        Ok(frequency) => period_phrase(frequency).to_string(),
        Err(_) => tag.to_string(),
    }
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Fixed-point rendering with `digits` fraction digits. Halves round away from
/// zero, judged on the exact binary value (so `1.005` gives `1.00`).
pub fn to_fixed(value: f64, digits: u32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.abs() >= FIXED_NOTATION_LIMIT || digits > MAX_DECIMAL_SCALE {
        return format!("{:.*}", digits as usize, value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match Decimal::from_f64_retain(value.abs()) {
        Some(exact) => {
            let rounded =
                exact.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
            format!("{sign}{:.*}", digits as usize, rounded)
        }
        None => format!("{:.*}", digits as usize, value),
    }
}
