mod customer_ledger;

use crate::models::{CustomerRecord, LedgerError, MinorUnits};

pub use customer_ledger::CustomerLedger;

/// Storage seam for the shared customer state.
///
/// `with_record` is the atomicity primitive: implementations must hold a
/// per-token exclusive section for the duration of the closure, so that a
/// limit read and the debit that follows it cannot interleave with another
/// request for the same token.
pub trait Ledger: Send + Sync + 'static {
    /// Returns a snapshot of the record for `token`, if one exists.
    fn lookup(&self, token: &str) -> Option<CustomerRecord>;

    /// Runs `apply` with exclusive access to the record for `token`
    /// (or with `None` if the token is unknown) and returns its result.
    fn with_record<T>(&self, token: &str, apply: impl FnOnce(Option<&mut CustomerRecord>) -> T) -> T;

    /// Atomically subtracts `amount` from the remaining limit of `token`
    /// and records the transaction timestamp.
    ///
    /// # Errors
    /// Returns `LedgerError` if the token is unknown or the debit violates
    /// the record's invariants; the ledger is left untouched on error.
    fn apply_debit(&self, token: &str, amount: MinorUnits, timestamp: Option<String>) -> Result<(), LedgerError> {
        self.with_record(token, |record| match record {
            Some(record) => record.debit(amount, timestamp),
            None => Err(LedgerError::UnknownCustomer {
                token: token.to_string()
            })
        })
    }
}
