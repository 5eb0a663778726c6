//! Symmetric encryption of token payloads stored at rest

mod service;

pub use service::{Cipher, CryptoService, AES_256_GCM};
