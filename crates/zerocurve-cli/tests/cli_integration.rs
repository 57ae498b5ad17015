//! End-to-end tests for the `zerocurve` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn zerocurve() -> Command {
    let mut cmd = Command::cargo_bin("zerocurve").unwrap();
    cmd.env_remove("ZEROCURVE_CONFIG")
        .env_remove("ZEROCURVE_DATA_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn write(dir: &Path, rel: &str, content: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn quotes_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "swaps.csv",
        "tenor,rate\n1,4.00\n2,4.10\n5,4.00\n10,4.25\n",
    );
    write(
        dir.path(),
        "futures.csv",
        "maturity,price\n3M,94.70\n6M,94.85\n2Y,95.00\n",
    );
    write(
        dir.path(),
        "bonds.csv",
        "maturity_years,yield\n1,3.90\n5,4.05\n10,4.30\n30,\n",
    );
    dir
}

// =============================================================================
// bootstrap
// =============================================================================

#[test]
fn test_bootstrap_csv_output() {
    let dir = quotes_dir();

    zerocurve()
        .args(["-f", "csv", "bootstrap", "--currency", "usd", "--swaps"])
        .arg(dir.path().join("swaps.csv"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("tenor,discountFactor,zeroRate\n"))
        .stdout(predicate::str::contains(",4.250000"));
}

#[test]
fn test_bootstrap_minimal_prints_ten_year_zero() {
    let dir = quotes_dir();

    zerocurve()
        .args(["-f", "minimal", "bootstrap", "--currency", "USD", "--swaps"])
        .arg(dir.path().join("swaps.csv"))
        .arg("--futures")
        .arg(dir.path().join("futures.csv"))
        .assert()
        .success()
        .stdout("4.2500\n");
}

#[test]
fn test_bootstrap_json_output() {
    let dir = quotes_dir();

    zerocurve()
        .args(["-f", "json", "bootstrap", "--currency", "AUD", "-m", "bloomberg", "--bonds"])
        .arg(dir.path().join("bonds.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"currency\": \"AUD\""))
        .stdout(predicate::str::contains("\"inputPoints\": 3"))
        .stdout(predicate::str::contains("\"discountFactors\""));
}

#[test]
fn test_bootstrap_table_output() {
    let dir = quotes_dir();

    zerocurve()
        .args(["bootstrap", "--currency", "USD", "-m", "quantlib_log_cubic", "--swaps"])
        .arg(dir.path().join("swaps.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Discount Curve - USD"))
        .stdout(predicate::str::contains("QL Log-Cubic"))
        .stdout(predicate::str::contains("Headline zero"))
        .stdout(predicate::str::contains("% (10Y)"));
}

#[test]
fn test_bootstrap_table_headline_names_fallback_tenor() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "short.csv", "tenor,rate
1,3.00
2,3.20
3,3.40
");

    zerocurve()
        .args(["bootstrap", "--currency", "USD", "--swaps"])
        .arg(dir.path().join("short.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Headline zero"))
        .stdout(predicate::str::contains("3.20% (2Y)"))
        .stdout(predicate::str::contains("10Y zero").not());
}

#[test]
fn test_bootstrap_writes_download_file() {
    let dir = quotes_dir();
    let out = tempfile::tempdir().unwrap();

    zerocurve()
        .args(["-q", "-f", "minimal", "bootstrap", "--currency", "USD", "--swaps"])
        .arg(dir.path().join("swaps.csv"))
        .arg("--output")
        .arg(out.path())
        .assert()
        .success();

    let written = fs::read_to_string(out.path().join("all_curves_USD_linear.csv")).unwrap();
    assert!(written.starts_with("tenor,discountFactor,zeroRate\n"));
    assert_eq!(written.lines().count(), 11);
}

#[test]
fn test_bootstrap_unknown_method() {
    let dir = quotes_dir();

    zerocurve()
        .args(["bootstrap", "--currency", "USD", "-m", "svensson", "--swaps"])
        .arg(dir.path().join("swaps.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown method: svensson"));
}

#[test]
fn test_bootstrap_requires_quotes() {
    zerocurve()
        .args(["bootstrap", "--currency", "USD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No quotes provided"));
}

#[test]
fn test_bootstrap_rejects_mixed_sources() {
    let dir = quotes_dir();

    zerocurve()
        .args(["bootstrap", "--currency", "USD", "--swaps"])
        .arg(dir.path().join("swaps.csv"))
        .arg("--bonds")
        .arg(dir.path().join("bonds.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bonds cannot be combined"));
}

#[test]
fn test_bootstrap_single_quote_is_insufficient() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "one.csv", "tenor,rate\n5,4.00\n");

    zerocurve()
        .args(["bootstrap", "--currency", "USD", "--swaps"])
        .arg(dir.path().join("one.csv"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient data"));
}

#[test]
fn test_bootstrap_missing_file() {
    zerocurve()
        .args(["bootstrap", "--currency", "USD", "--swaps", "/nonexistent/swaps.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

// =============================================================================
// conventions
// =============================================================================

#[test]
fn test_conventions_single_currency() {
    zerocurve()
        .args(["-f", "minimal", "conventions", "--currency", "usd"])
        .assert()
        .success()
        .stdout("USD ACT/360 Semi-Annual\n");
}

#[test]
fn test_conventions_lists_standard_currencies() {
    zerocurve()
        .args(["-f", "csv", "conventions"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EUR,"))
        .stdout(predicate::str::contains("JPY,"))
        .stdout(predicate::str::contains("sofr"));
}

#[test]
fn test_conventions_honour_config_override() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "settings.toml",
        "[conventions.USD]\nday_count = \"Act365Fixed\"\nfrequency = \"Quarterly\"\n",
    );

    zerocurve()
        .arg("--config")
        .arg(dir.path().join("settings.toml"))
        .args(["-f", "minimal", "conventions", "--currency", "USD"])
        .assert()
        .success()
        .stdout("USD ACT/365 Quarterly\n");
}

// =============================================================================
// dashboard
// =============================================================================

#[test]
fn test_dashboard_counts_built_curves() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "swaps/usd.json",
        r#"[{"tenor": 2, "rateValue": 4.10}, {"tenor": 10, "rateValue": 4.25}]"#,
    );
    write(
        dir.path(),
        "bonds/countries.json",
        r#"[{"country": "Norway", "countrySlug": "norway", "currency": "NOK", "rating": "AAA", "yield10Y": 3.9}]"#,
    );
    write(
        dir.path(),
        "bonds/norway.json",
        r#"[{"maturity": "2Y", "maturityYears": 2, "yield": 3.7}, {"maturity": "10Y", "maturityYears": 10, "yield": 3.9}]"#,
    );
    let out = tempfile::tempdir().unwrap();

    zerocurve()
        .args(["-f", "minimal", "dashboard", "--data-dir"])
        .arg(dir.path())
        .arg("--output-dir")
        .arg(out.path())
        .assert()
        .success()
        .stdout("2/6\n");

    assert!(out.path().join("all_curves_USD_linear.csv").exists());
    assert!(out.path().join("all_curves_NOK_linear.csv").exists());
    assert!(!out.path().join("all_curves_EUR_linear.csv").exists());
}

#[test]
fn test_dashboard_table_marks_missing_curves() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "swaps/usd.json",
        r#"[{"tenor": 2, "rateValue": 4.10}, {"tenor": 10, "rateValue": 4.25}]"#,
    );

    zerocurve()
        .args(["dashboard", "-m", "nelson_siegel", "--data-dir"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("All Curves - Nelson-Siegel"))
        .stdout(predicate::str::contains("no curve available"));
}
