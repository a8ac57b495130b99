use crate::models::MinorUnits;

/// Represents a single decoded authorization request.
///
/// Every field is optional because the wire format allows any leaf to be
/// absent; the decoder records absence instead of failing so that the
/// decision procedure can branch on it explicitly.
#[derive(Debug, Clone, Default)]
pub struct Transaction {
    /// Card token binding the request to a customer record.
    pub token: Option<String>,
    /// The requested amount in minor currency units (if present).
    pub amount: Option<MinorUnits>,
    /// ISO currency code carried on the request.
    pub currency: Option<String>,
    /// Timestamp string supplied by the acquirer, stored verbatim.
    pub timestamp: Option<String>,
    /// City of the merchant, from the optional Merchant container.
    pub merchant_city: Option<String>
}
