//! Bearer token encoding and decoding.

pub mod codec;
pub mod payload;

pub use codec::TokenCodec;
pub use payload::{TokenPayload, TokenType};
