use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::codec;
use crate::engine;
use crate::ledger::Ledger;
use crate::models::{DecisionResult, DeclineReason};

// Last-resort response if the serializer itself fails; keeps the contract
// that a caller always receives a well-formed decline.
const FALLBACK_DECLINE: &str =
    "<Body><TransactionResponse><Result>DECLINED</Result><Reason>MalformedMessage</Reason></TransactionResponse></Body>";

/// Single entry point for authorization: decode, resolve the customer,
/// decide, debit on acceptance, encode.
///
/// The only side effect in the pipeline is the ledger debit, and it runs
/// under the same per-token exclusive section as the decision that allowed
/// it.
pub struct AuthorizationService<L: Ledger> {
    ledger: Arc<L>
}

impl<L: Ledger> AuthorizationService<L> {
    pub fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }

    /// Evaluates one raw request message and returns the raw response.
    ///
    /// Never fails: an undecodable request produces a MalformedMessage
    /// decline rather than an error, and business declines are normal
    /// outcomes rather than failures.
    pub fn authorize(&self, raw_request: &str) -> String {
        let transaction = match codec::decode(raw_request) {
            Ok(transaction) => transaction,
            Err(decode_error) => {
                warn!("Rejecting undecodable request: {decode_error}");
                return respond(&DecisionResult::declined(DeclineReason::MalformedMessage));
            }
        };

        let decision = match transaction.token.as_deref() {
            Some(token) => self.ledger.with_record(token, |record| {
                let decision = engine::decide(&transaction, record.as_deref());

                if decision.is_accepted() {
                    if let (Some(record), Some(amount)) = (record, transaction.amount) {
                        // decide ran under this same guard, so the debit precondition holds.
                        if let Err(debit_error) = record.debit(amount, transaction.timestamp.clone()) {
                            error!("Accepted debit failed for token [{token}]: {debit_error}");
                        }
                    }
                }

                decision
            }),
            // A request without a token cannot resolve to any customer.
            None => engine::decide(&transaction, None)
        };

        debug!(
            "Decision [{:?}]:[{:?}] for request token [{:?}]",
            decision.outcome(),
            decision.reason(),
            transaction.token
        );

        respond(&decision)
    }
}

fn respond(decision: &DecisionResult) -> String {
    match codec::encode(decision) {
        Ok(raw_response) => raw_response,
        Err(encode_error) => {
            error!("Response encoding failed: {encode_error}");
            FALLBACK_DECLINE.to_string()
        }
    }
}
