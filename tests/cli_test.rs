mod common;

use common::incomecalc;
use predicates::prelude::*;

#[test]
fn test_cli_hourly_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = incomecalc();
    cmd.args(["50", "--frequency", "hourly"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Your Income Breakdown"))
        .stdout(predicate::str::contains("$50.00"))
        .stdout(predicate::str::contains("$400.00"))
        .stdout(predicate::str::contains("$2,000.00"))
        .stdout(predicate::str::contains("$4,000.00"))
        .stdout(predicate::str::contains("$8,666.67"))
        .stdout(predicate::str::contains("$104,000.00"));

    Ok(())
}

#[test]
fn test_cli_defaults_to_yearly() {
    incomecalc()
        .arg("1200")
        .assert()
        .success()
        .stdout(predicate::str::contains("$100.00"))
        .stdout(predicate::str::contains("$23.08"))
        .stdout(predicate::str::is_match(r"Yearly\s+\$1,200\.00\s+Per year\s+Current").unwrap());
}

#[test]
fn test_cli_csv_output() {
    incomecalc()
        .args(["50", "-f", "hourly", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("frequency,label,amount,current\n"))
        .stdout(predicate::str::contains("hourly,Hourly,50.00,true"))
        .stdout(predicate::str::contains("biweekly,Bi-weekly,4000.00,false"));
}

#[test]
fn test_cli_json_output() -> Result<(), Box<dyn std::error::Error>> {
    let output = incomecalc()
        .args(["1200", "-f", "monthly", "--format", "json", "--tax-rate", "25"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["frequency"], "monthly");
    assert_eq!(value["results"]["yearly"], 14_400.0);
    assert_eq!(value["net"]["monthly"], 900.0);
    assert_eq!(value["tax_rate"], 25.0);
    Ok(())
}

#[test]
fn test_cli_compact_amounts() {
    incomecalc()
        .args(["45500", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$45.5K"))
        .stdout(predicate::str::contains("$875"));
}

#[test]
fn test_cli_tax_column() {
    incomecalc()
        .args(["1000", "-f", "weekly", "--tax-rate", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Net (20.0% tax)"))
        .stdout(predicate::str::contains("$800.00"));
}

#[test]
fn test_cli_writes_output_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("report.csv");

    incomecalc()
        .args(["52000", "--format", "csv", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&path)?;
    assert!(written.contains("weekly,Weekly,1000.00,false"));
    assert!(written.contains("yearly,Yearly,52000.00,true"));
    Ok(())
}
