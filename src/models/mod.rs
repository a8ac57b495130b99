mod customer;
mod decision;
mod errors;
mod transaction;

pub use customer::CustomerRecord;
pub use decision::DecisionResult;
pub use errors::LedgerError;
pub use transaction::Transaction;

/// Monetary amounts are whole minor currency units; no fractional scale exists on the wire.
pub type MinorUnits = i64;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    Accepted,
    Declined
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DeclineReason {
    NoDecline,
    InsufficientFunds,
    TransactionAmountOverLimit,
    UnknownCustomer,
    MalformedMessage
}
