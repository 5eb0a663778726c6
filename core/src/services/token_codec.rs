//! Signing and encryption collaborators carried by token value objects

use std::fmt;
use std::sync::Arc;

use ft_shared::config::AuthConfig;

use crate::errors::DomainResult;

use super::crypto::{Cipher, CryptoService};
use super::jwt::{JwtService, TokenSigner};

/// The JWT signer and cipher a [`Token`](crate::domain::value_objects::Token)
/// needs to sign, verify, encrypt and decrypt itself
#[derive(Clone)]
pub struct TokenCodec {
    signer: Arc<dyn TokenSigner>,
    cipher: Arc<dyn Cipher>,
}

impl TokenCodec {
    pub fn new(signer: Arc<dyn TokenSigner>, cipher: Arc<dyn Cipher>) -> Self {
        Self { signer, cipher }
    }

    /// Build the production signer and cipher from configuration
    pub fn from_config(config: &AuthConfig) -> DomainResult<Self> {
        let signer = JwtService::new(&config.jwt)?;
        let cipher = CryptoService::new(&config.crypto)?;
        Ok(Self::new(Arc::new(signer), Arc::new(cipher)))
    }

    pub fn signer(&self) -> &dyn TokenSigner {
        self.signer.as_ref()
    }

    pub fn cipher(&self) -> &dyn Cipher {
        self.cipher.as_ref()
    }
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec").finish_non_exhaustive()
    }
}
