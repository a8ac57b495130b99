
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::error;

use crate::ledger::CustomerLedger;
use crate::models::{CustomerRecord, MinorUnits};

/// Loads the initial customer roster from a delimited text file.
///
/// The header row names the columns; `Limit` and `card_token` populate the
/// typed record fields and every other column is carried through as an
/// opaque profile entry. Rows that fail to parse are logged and skipped so
/// one bad entry cannot take down the bootstrap.
pub fn load(path: &Path) -> Result<CustomerLedger> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open roster at {}", path.display()))?;

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = reader
        .headers()
        .context("Roster has no header row")?
        .iter()
        .map(|name| unquote(name).to_string())
        .collect();

    let ledger = CustomerLedger::new();

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(read_error) => {
                error!("Roster row rejected: {read_error}");
                continue;
            }
        };

        match build_record(&headers, &record) {
            Ok(customer) => ledger.insert(customer),
            Err(row_error) => error!("Roster row rejected: {row_error}")
        }
    }

    Ok(ledger)
}

fn build_record(headers: &[String], record: &StringRecord) -> Result<CustomerRecord> {
    let mut limit: Option<MinorUnits> = None;
    let mut token: Option<String> = None;
    let mut profile = HashMap::new();

    for (name, value) in headers.iter().zip(record.iter()) {
        let value = unquote(value);

        match name.as_str() {
            "Limit" => {
                limit = Some(value.parse().with_context(|| format!("Invalid limit [{value}]"))?);
            }
            "card_token" => token = Some(value.to_string()),
            _ => {
                profile.insert(name.clone(), value.to_string());
            }
        }
    }

    let limit = limit.context("Roster row has no Limit column")?;
    let token = token.context("Roster row has no card_token column")?;

    if limit < 0 {
        bail!("Negative limit [{limit}] for token [{token}]");
    }

    Ok(CustomerRecord::new(token, limit, profile))
}

// Legacy rosters wrap every field in single quotes, which the CSV reader
// leaves in place.
fn unquote(value: &str) -> &str {
    value.trim().trim_matches(|quote| quote == '\'' || quote == '"')
}
