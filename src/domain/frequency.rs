use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const HOURS_PER_WEEK: f64 = 40.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const DAYS_PER_WEEK: f64 = 5.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// A pay-period cadence.
///
/// The set is closed. Text coming from outside the program (CLI arguments,
/// interactive commands) goes through [`FromStr`], which is where an
/// unrecognised tag is reported as [`CalcError::UnknownFrequency`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Hourly,
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    #[default]
    Yearly,
}

impl Frequency {
    /// Display order of the results grid.
    pub const ALL: [Frequency; 6] = [
        Frequency::Hourly,
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Biweekly,
        Frequency::Monthly,
        Frequency::Yearly,
    ];

    /// Canonical lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Hourly => "Hourly",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Biweekly => "Bi-weekly",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    /// Number of periods of this cadence in one year.
    pub fn periods_per_year(&self) -> f64 {
        match self {
            Self::Hourly => HOURS_PER_WEEK * WEEKS_PER_YEAR,
            Self::Daily => DAYS_PER_WEEK * WEEKS_PER_YEAR,
            Self::Weekly => WEEKS_PER_YEAR,
            Self::Biweekly => WEEKS_PER_YEAR / 2.0,
            Self::Monthly => MONTHS_PER_YEAR,
            Self::Yearly => 1.0,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hourly" => Ok(Self::Hourly),
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "biweekly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            "yearly" => Ok(Self::Yearly),
            other => Err(CalcError::UnknownFrequency(other.to_string())),
        }
    }
}
