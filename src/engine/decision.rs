use crate::models::{CustomerRecord, DecisionResult, DeclineReason, MinorUnits, Transaction};

/// Fixed per-transaction maximum, in the same minor-unit scale as the
/// customer limit. Independent of any individual customer's capacity.
const PER_TRANSACTION_CEILING: MinorUnits = 150;

/// Evaluates the decision rules for one transaction against the customer
/// record resolved for its token.
///
/// Pure function: the caller owns both the lookup that produced `customer`
/// and the debit applied on acceptance, and must hold the record exclusively
/// across all three so the limit read here cannot go stale.
///
/// The limit check runs before the ceiling check: a customer short on funds
/// is told so even when the amount also breaches the ceiling.
pub fn decide(transaction: &Transaction, customer: Option<&CustomerRecord>) -> DecisionResult {
    let Some(customer) = customer else {
        return DecisionResult::declined(DeclineReason::UnknownCustomer);
    };

    let Some(amount) = transaction.amount else {
        return DecisionResult::declined(DeclineReason::MalformedMessage);
    };

    // Equality declines: the limit must be strictly greater than the amount.
    if amount >= customer.limit() {
        return DecisionResult::declined(DeclineReason::InsufficientFunds);
    }

    if amount > PER_TRANSACTION_CEILING {
        return DecisionResult::declined(DeclineReason::TransactionAmountOverLimit);
    }

    DecisionResult::accepted()
}
