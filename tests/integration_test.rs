use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::{anyhow, Result};
use tempfile::TempDir;

fn stage_requests() -> Result<TempDir> {
    let staging = TempDir::new()?;

    for entry in fs::read_dir(Path::new("samples").join("payments"))? {
        let path = entry?.path();
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| anyhow!("unexpected fixture name"))?;

        fs::copy(&path, staging.path().join(name))?;
    }

    Ok(staging)
}

fn read_response(dir: &TempDir, stem: &str) -> Result<String> {
    Ok(fs::read_to_string(dir.path().join(format!("{stem}_response.xml")))?)
}

#[test]
fn test_cli_writes_a_response_file_for_every_request() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_payment-authorizer");
    let staging = stage_requests()?;

    let output = Command::new(binary_path)
        .arg(Path::new("samples").join("limits.csv"))
        .arg(staging.path())
        .output()?;

    assert!(output.status.success());

    for index in 1..=5 {
        assert!(
            staging.path().join(format!("payment_{index}_response.xml")).exists(),
            "missing response for payment_{index}"
        );
    }

    Ok(())
}

#[test]
fn test_cli_batch_produces_expected_decisions() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_payment-authorizer");
    let staging = stage_requests()?;

    let output = Command::new(binary_path)
        .arg(Path::new("samples").join("limits.csv"))
        .arg(staging.path())
        .output()?;

    assert!(output.status.success());

    // abc123 starts at 200; the first request debits 100.
    assert_eq!(
        read_response(&staging, "payment_1")?,
        "<Body><TransactionResponse><Result>ACCEPTED</Result><Reason>None</Reason></TransactionResponse></Body>"
    );

    // The second request asks for 150 against the remaining 100.
    assert_eq!(
        read_response(&staging, "payment_2")?,
        "<Body><TransactionResponse><Result>DECLINED</Result><Reason>InsufficientFunds</Reason></TransactionResponse></Body>"
    );

    // 151 clears the customer limit of 500 but breaches the flat ceiling.
    assert_eq!(
        read_response(&staging, "payment_3")?,
        "<Body><TransactionResponse><Result>DECLINED</Result><Reason>TransactionAmountOverLimit</Reason></TransactionResponse></Body>"
    );

    assert_eq!(
        read_response(&staging, "payment_4")?,
        "<Body><TransactionResponse><Result>DECLINED</Result><Reason>UnknownCustomer</Reason></TransactionResponse></Body>"
    );

    assert_eq!(
        read_response(&staging, "payment_5")?,
        "<Body><TransactionResponse><Result>DECLINED</Result><Reason>MalformedMessage</Reason></TransactionResponse></Body>"
    );

    Ok(())
}

#[test]
fn test_cli_exits_nonzero_when_roster_is_missing() -> Result<()> {
    let binary_path = env!("CARGO_BIN_EXE_payment-authorizer");
    let staging = TempDir::new()?;

    let output = Command::new(binary_path)
        .arg("missing_roster.csv")
        .arg(staging.path())
        .output()?;

    assert!(!output.status.success());

    Ok(())
}
