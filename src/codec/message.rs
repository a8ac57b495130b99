use quick_xml::de::from_str;
use quick_xml::se::to_string;
use serde::{Deserialize, Serialize};

use crate::codec::errors::CodecError;
use crate::models::{DecisionResult, DeclineReason, MinorUnits, Outcome, Transaction};

// Wire shape of an inbound request. The root element name is irrelevant;
// only the Transaction container and its leaves are read. Every leaf is
// optional so that absence decodes to None instead of a hard failure.
#[derive(Debug, Deserialize)]
struct RequestEnvelope {
    #[serde(rename = "Transaction")]
    transaction: Option<TransactionElement>
}

#[derive(Debug, Deserialize)]
struct TransactionElement {
    #[serde(rename = "Token")]
    token: Option<String>,
    #[serde(rename = "Amount")]
    amount: Option<String>,
    #[serde(rename = "Currency")]
    currency: Option<String>,
    #[serde(rename = "Transaction_Time")]
    transaction_time: Option<String>,
    #[serde(rename = "Merchant")]
    merchant: Option<MerchantElement>
}

#[derive(Debug, Deserialize)]
struct MerchantElement {
    #[serde(rename = "Merchant_City")]
    merchant_city: Option<String>
}

#[derive(Debug, Serialize)]
#[serde(rename = "Body")]
struct ResponseEnvelope<'a> {
    #[serde(rename = "TransactionResponse")]
    transaction_response: ResponseElement<'a>
}

#[derive(Debug, Serialize)]
struct ResponseElement<'a> {
    #[serde(rename = "Result")]
    result: &'a str,
    #[serde(rename = "Reason")]
    reason: &'a str
}

/// Decodes a raw request message into a [`Transaction`].
///
/// # Errors
/// Returns `CodecError` if the message is not well-formed XML, if the
/// Transaction container is absent, or if the Amount leaf is present but
/// not a non-negative integer. A missing leaf is not an error.
pub fn decode(raw: &str) -> Result<Transaction, CodecError> {
    let envelope: RequestEnvelope = from_str(raw)?;
    let element = envelope.transaction.ok_or(CodecError::MissingTransaction)?;

    let amount = match element.amount {
        Some(text) => {
            let parsed: MinorUnits = text
                .trim()
                .parse()
                .map_err(|_| CodecError::InvalidAmount(text.clone()))?;

            if parsed < 0 {
                return Err(CodecError::InvalidAmount(text));
            }

            Some(parsed)
        }
        None => None
    };

    Ok(Transaction {
        token: element.token,
        amount,
        currency: element.currency,
        timestamp: element.transaction_time,
        merchant_city: element.merchant.and_then(|merchant| merchant.merchant_city)
    })
}

/// Encodes a [`DecisionResult`] into the two-field response message.
///
/// The shape is fixed regardless of outcome:
/// `<Body><TransactionResponse><Result>..</Result><Reason>..</Reason></TransactionResponse></Body>`
pub fn encode(decision: &DecisionResult) -> Result<String, CodecError> {
    let envelope = ResponseEnvelope {
        transaction_response: ResponseElement {
            result: outcome_text(decision.outcome()),
            reason: reason_text(decision.reason())
        }
    };

    Ok(to_string(&envelope)?)
}

fn outcome_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Accepted => "ACCEPTED",
        Outcome::Declined => "DECLINED"
    }
}

fn reason_text(reason: DeclineReason) -> &'static str {
    match reason {
        // The literal "None" is kept for wire compatibility with existing consumers.
        DeclineReason::NoDecline => "None",
        DeclineReason::InsufficientFunds => "InsufficientFunds",
        DeclineReason::TransactionAmountOverLimit => "TransactionAmountOverLimit",
        DeclineReason::UnknownCustomer => "UnknownCustomer",
        DeclineReason::MalformedMessage => "MalformedMessage"
    }
}
