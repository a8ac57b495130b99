use dashmap::DashMap;

use crate::ledger::Ledger;
use crate::models::CustomerRecord;

/// In-memory store of every customer record, keyed by card token.
///
/// Built once from the roster at startup and mutated in place for the life
/// of the process. Records for distinct tokens can be debited in parallel;
/// the map shards its locks instead of taking one global lock.
pub struct CustomerLedger {
    records: DashMap<String, CustomerRecord>
}

impl CustomerLedger {
    pub fn new() -> Self {
        Self {
            records: DashMap::new()
        }
    }

    /// Adds a bootstrapped record. A second record with the same token
    /// replaces the first.
    pub fn insert(&self, record: CustomerRecord) {
        self.records.insert(record.token.clone(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for CustomerLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger for CustomerLedger {
    fn lookup(&self, token: &str) -> Option<CustomerRecord> {
        self.records.get(token).map(|entry| entry.value().clone())
    }

    fn with_record<T>(&self, token: &str, apply: impl FnOnce(Option<&mut CustomerRecord>) -> T) -> T {
        // The guard from get_mut stays held across the closure, which is what
        // makes read-limit -> decide -> debit atomic per token.
        match self.records.get_mut(token) {
            Some(mut entry) => apply(Some(entry.value_mut())),
            None => apply(None)
        }
    }
}
