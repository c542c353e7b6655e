use crate::domain::ports::NumberLocale;
use crate::error::{CalcError, Result};
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;

/// Beyond this the locale refuses, like `Intl.NumberFormat` does.
const MAX_FRACTION_DIGITS: u32 = 20;

const THOUSAND: Decimal = dec!(1000);

const COMPACT_SUFFIXES: [&str; 5] = ["", "K", "M", "B", "T"];

/// English (United States) number rendering: `,` grouping, `.` decimal point,
/// currency symbol before the digits, minus sign before the symbol.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnUsLocale;

impl EnUsLocale {
    pub const TAGS: [&'static str; 2] = ["en-US", "en"];

    pub fn new() -> Self {
        Self
    }

    pub fn supports(tag: &str) -> bool {
        Self::TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

impl NumberLocale for EnUsLocale {
    fn tag(&self) -> &str {
        "en-US"
    }

    fn currency(&self, amount: f64, currency: &str, decimals: u32) -> Result<String> {
        let prefix = currency_prefix(currency)?;
        let value = to_decimal(amount)?;
        let (negative, body) = fixed(value, decimals)?;
        Ok(signed(negative, &prefix, &body))
    }

    fn compact_currency(
        &self,
        amount: f64,
        currency: &str,
        max_fraction_digits: u32,
    ) -> Result<String> {
        let prefix = currency_prefix(currency)?;
        check_fraction_digits(max_fraction_digits)?;
        let value = to_decimal(amount)?;

        let mut scaled = value.abs();
        let mut tier = 0;
        while scaled >= THOUSAND && tier < COMPACT_SUFFIXES.len() - 1 {
            scaled /= THOUSAND;
            tier += 1;
        }
        let mut rounded = round_away(scaled, max_fraction_digits);
        // 999_999 rounds to 1000K, which is shown as 1M
        if rounded >= THOUSAND && tier < COMPACT_SUFFIXES.len() - 1 {
            rounded = round_away(rounded / THOUSAND, max_fraction_digits);
            tier += 1;
        }

        let negative = value.is_sign_negative() && !rounded.is_zero();
        let body = format!(
            "{}{}",
            group_digits(&rounded.normalize().to_string()),
            COMPACT_SUFFIXES[tier]
        );
        Ok(signed(negative, &prefix, &body))
    }

    fn number(&self, value: f64, decimals: u32) -> Result<String> {
        let (negative, body) = fixed(to_decimal(value)?, decimals)?;
        Ok(signed(negative, "", &body))
    }
}

fn to_decimal(value: f64) -> Result<Decimal> {
    Decimal::from_f64(value).ok_or_else(|| CalcError::Unformattable(value.to_string()))
}

fn check_fraction_digits(digits: u32) -> Result<()> {
    if digits > MAX_FRACTION_DIGITS {
        return Err(CalcError::Unformattable(format!(
            "{digits} fraction digits"
        )));
    }
    Ok(())
}

fn round_away(value: Decimal, digits: u32) -> Decimal {
    value.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds and renders `|value|` with exactly `decimals` digits, grouped.
/// Returns whether a minus sign is needed alongside the digits.
fn fixed(value: Decimal, decimals: u32) -> Result<(bool, String)> {
    check_fraction_digits(decimals)?;
    let rounded = round_away(value, decimals);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let digits = format!("{:.*}", decimals as usize, rounded.abs());
    Ok((negative, group_digits(&digits)))
}

/// Inserts `,` every three digits in the integer part of `digits`.
fn group_digits(digits: &str) -> String {
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(digits.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(frac_part) = frac_part {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}

fn signed(negative: bool, prefix: &str, body: &str) -> String {
    if negative {
        format!("-{prefix}{body}")
    } else {
        format!("{prefix}{body}")
    }
}

/// Symbol placed before the digits for an ISO 4217 code.
fn currency_prefix(code: &str) -> Result<String> {
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(CalcError::UnsupportedCurrency(code.to_string()));
    }
    let code = code.to_ascii_uppercase();
    let symbol = match code.as_str() {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CAD" => "CA$",
        "AUD" => "A$",
        "INR" => "₹",
        _ => return Ok(format!("{code}\u{a0}")),
    };
    Ok(symbol.to_string())
}
