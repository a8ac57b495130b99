mod errors;
mod message;

pub use errors::CodecError;
pub use message::{decode, encode};
