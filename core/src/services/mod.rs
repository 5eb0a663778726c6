//! Business services shared by domain objects and use cases.

pub mod crypto;
pub mod jwt;
pub mod token_codec;
pub mod verification;

// Re-export commonly used types
pub use crypto::{Cipher, CryptoService};
pub use jwt::{JwtService, TokenSigner};
pub use token_codec::TokenCodec;
pub use verification::VerificationMailer;
