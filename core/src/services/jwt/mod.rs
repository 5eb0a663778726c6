//! JWT signing, decoding and expiry checks

mod service;

pub use service::{expiry_of, parse_expires_in, JwtService, TokenSigner};
