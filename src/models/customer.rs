use std::collections::HashMap;

use crate::models::errors::LedgerError;
use crate::models::MinorUnits;

/// Represents the ledger state of a single customer.
///
/// The record owns the remaining spending limit and the timestamp of the
/// most recent accepted transaction. The limit is never negative and only
/// ever decreases; all mutation goes through [`CustomerRecord::debit`],
/// which enforces that.
#[derive(Debug, Clone)]
pub struct CustomerRecord {
    /// The card token uniquely identifying this customer.
    pub token: String,
    /// Remaining spending capacity in minor currency units.
    limit: MinorUnits,
    /// Timestamp of the most recent accepted transaction, verbatim from the request.
    last_transaction_time: Option<String>,
    /// Opaque roster columns (name, contact details) carried through unchanged.
    profile: HashMap<String, String>
}

impl CustomerRecord {
    /// Creates a record from a bootstrapped roster row.
    pub fn new(token: String, limit: MinorUnits, profile: HashMap<String, String>) -> Self {
        Self {
            token,
            limit,
            last_transaction_time: None,
            profile
        }
    }

    pub fn limit(&self) -> MinorUnits {
        self.limit
    }

    pub fn last_transaction_time(&self) -> Option<&str> {
        self.last_transaction_time.as_deref()
    }

    pub fn profile(&self) -> &HashMap<String, String> {
        &self.profile
    }

    /// Subtracts `amount` from the remaining limit and records the
    /// transaction timestamp.
    ///
    /// # Errors
    /// Returns `LedgerError` if the amount is negative or exceeds the
    /// remaining limit; the record is left untouched in both cases.
    pub fn debit(&mut self, amount: MinorUnits, timestamp: Option<String>) -> Result<(), LedgerError> {
        if amount < 0 {
            return Err(LedgerError::NegativeDebit {
                token: self.token.clone(),
                amount
            });
        }

        if amount > self.limit {
            return Err(LedgerError::DebitExceedsLimit {
                token: self.token.clone(),
                amount,
                limit: self.limit
            });
        }

        self.limit -= amount;
        self.last_transaction_time = timestamp;

        Ok(())
    }
}
