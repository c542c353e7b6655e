mod common;

use common::incomecalc;
use predicates::prelude::*;

#[test]
fn test_negative_amount() {
    incomecalc()
        .arg("-5")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount cannot be negative"));
}

#[test]
fn test_non_numeric_amount() {
    incomecalc()
        .arg("not_a_number")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a valid number"));
}

#[test]
fn test_unknown_frequency() {
    incomecalc()
        .args(["100", "--frequency", "quarterly"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown frequency: quarterly"));
}

#[test]
fn test_tax_rate_out_of_range() {
    incomecalc()
        .args(["100", "--tax-rate", "150"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Tax rate must be between 0 and 100"));
}

#[test]
fn test_invalid_format_is_a_usage_error() {
    incomecalc()
        .args(["100", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));
}
