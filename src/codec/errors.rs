use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Message is not well-formed XML: {0}")]
    Xml(#[from] quick_xml::DeError),
    #[error("Message has no Transaction container")]
    MissingTransaction,
    #[error("Transaction amount is not a non-negative integer: [{0}]")]
    InvalidAmount(String)
}
