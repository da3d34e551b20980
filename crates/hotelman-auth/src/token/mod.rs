//! Claims payload and the signed bearer-token codec.

pub mod claims;
pub mod codec;

pub use claims::SessionClaims;
pub use codec::{TokenCodec, TokenError};
