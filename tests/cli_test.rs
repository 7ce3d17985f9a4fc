use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_monthly_sales() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("sales-analyzer"));
    cmd.arg("monthly-sales")
        .arg("tests/fixtures/sales.csv")
        .args(["--month", "1", "--year", "2024"]);

    // 10*2 + 4.5*4 + 1*1
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#"{"monthly_sales":39.0}"#));

    Ok(())
}

#[test]
fn test_cli_monthly_sales_other_year() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("sales-analyzer"));
    cmd.arg("monthly-sales")
        .arg("tests/fixtures/sales.csv")
        .args(["--month", "1", "--year", "2023"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#"{"monthly_sales":99.0}"#));

    Ok(())
}

#[test]
fn test_cli_monthly_sales_no_matches() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("sales-analyzer"));
    cmd.arg("monthly-sales")
        .arg("tests/fixtures/sales.csv")
        .args(["--month", "7", "--year", "2024"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#"{"monthly_sales":0.0}"#));

    Ok(())
}

#[test]
fn test_cli_top_products_default() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("sales-analyzer"));
    cmd.arg("top-products").arg("tests/fixtures/sales.csv");

    // Gizmo (199*2), Gadget (9*6), Widget (11*3)
    cmd.assert().success().stdout(predicate::str::contains(
        r#"{"top_products":["Gizmo","Gadget","Widget"]}"#,
    ));

    Ok(())
}

#[test]
fn test_cli_top_products_n() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("sales-analyzer"));
    cmd.arg("top-products")
        .arg("tests/fixtures/sales.csv")
        .args(["-n", "1"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#"{"top_products":["Gizmo"]}"#));

    Ok(())
}

#[test]
fn test_cli_logs_stay_off_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("sales-analyzer"));
    cmd.arg("top-products")
        .arg("tests/fixtures/sales.csv")
        .args(["--log-level", "info"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(r#"{"top_products""#))
        .stderr(predicate::str::contains("dataset loaded"));

    Ok(())
}
