use crate::models::MinorUnits;
use thiserror::Error;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum LedgerError {
    #[error("No customer record for token [{token}]")]
    UnknownCustomer {
        token: String
    },
    #[error("Debit amount must not be negative: [{amount}] for token [{token}]")]
    NegativeDebit {
        token: String,
        amount: MinorUnits
    },
    #[error("Debit [{amount}] exceeds remaining limit [{limit}] for token [{token}]")]
    DebitExceedsLimit {
        token: String,
        amount: MinorUnits,
        limit: MinorUnits
    }
}
