//! Token encryption service using AES-256-GCM

use aes_gcm::{
    aead::{Aead, KeyInit, Payload},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use ft_shared::config::CryptoConfig;
use rand::{rngs::OsRng, RngCore};

use crate::errors::CryptoError;

/// Only cipher accepted in `CryptoConfig::algorithm`
pub const AES_256_GCM: &str = "aes-256-gcm";

const KEY_LENGTH: usize = 32;
const NONCE_LENGTH: usize = 12;

/// Symmetric encryption of opaque string payloads
pub trait Cipher: Send + Sync {
    /// Encrypt a UTF-8 string into a base64 ciphertext
    fn encrypt(&self, plaintext: &str) -> Result<String, CryptoError>;

    /// Decrypt a ciphertext produced by [`Cipher::encrypt`]
    fn decrypt(&self, ciphertext: &str) -> Result<String, CryptoError>;
}

/// AES-256-GCM cipher configured once at startup.
///
/// Ciphertexts are `base64(nonce || ciphertext || tag)`. The configured init
/// vector is authenticated as associated data, so a ciphertext only decrypts
/// under the same key and init vector it was produced with.
pub struct CryptoService {
    cipher: Aes256Gcm,
    associated_data: Vec<u8>,
}

impl CryptoService {
    /// Build the cipher from configuration
    pub fn new(config: &CryptoConfig) -> Result<Self, CryptoError> {
        if !config.algorithm.eq_ignore_ascii_case(AES_256_GCM) {
            return Err(CryptoError::UnsupportedAlgorithm {
                algorithm: config.algorithm.clone(),
            });
        }

        let key = config.security_key.as_bytes();
        if key.len() != KEY_LENGTH {
            return Err(CryptoError::InvalidKeyLength {
                expected: KEY_LENGTH,
                actual: key.len(),
            });
        }

        if config.init_vector.is_empty() {
            return Err(CryptoError::EmptyInitVector);
        }

        let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLength {
            expected: KEY_LENGTH,
            actual: key.len(),
        })?;

        Ok(Self {
            cipher,
            associated_data: config.init_vector.as_bytes().to_vec(),
        })
    }

    fn generate_nonce() -> [u8; NONCE_LENGTH] {
        let mut nonce = [0u8; NONCE_LENGTH];
        OsRng.fill_bytes(&mut nonce);
        nonce
    }
}

impl Cipher for CryptoService {
    fn encrypt(&self, plaintext: &str) -> Result<String, CryptoError> {
        let nonce = Self::generate_nonce();
        let payload = Payload {
            msg: plaintext.as_bytes(),
            aad: &self.associated_data,
        };

        let ciphertext = self
            .cipher
            .encrypt(Nonce::from_slice(&nonce), payload)
            .map_err(|_| CryptoError::EncryptionFailed)?;

        let mut output = Vec::with_capacity(NONCE_LENGTH + ciphertext.len());
        output.extend_from_slice(&nonce);
        output.extend_from_slice(&ciphertext);
        Ok(BASE64.encode(output))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CryptoError> {
        let raw = BASE64
            .decode(ciphertext)
            .map_err(|e| CryptoError::DecryptionFailed {
                message: format!("invalid base64: {}", e),
            })?;

        if raw.len() <= NONCE_LENGTH {
            return Err(CryptoError::DecryptionFailed {
                message: "ciphertext too short".to_string(),
            });
        }

        let (nonce, body) = raw.split_at(NONCE_LENGTH);
        let payload = Payload {
            msg: body,
            aad: &self.associated_data,
        };

        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), payload)
            .map_err(|_| CryptoError::DecryptionFailed {
                message: "authentication failed".to_string(),
            })?;

        String::from_utf8(plaintext).map_err(|e| CryptoError::DecryptionFailed {
            message: format!("invalid utf-8: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    fn config() -> CryptoConfig {
        CryptoConfig::new("0123456789abcdef0123456789abcdef", "test-init-vector")
    }

    #[test]
    fn test_round_trip() {
        let service = CryptoService::new(&config()).unwrap();

        for plaintext in ["a", "valid_token", "eyJhbGciOiJIUzI1NiJ9.e30.sig", "ünïcødé ✓"] {
            let encrypted = service.encrypt(plaintext).unwrap();
            assert_ne!(encrypted, plaintext);
            assert_eq!(service.decrypt(&encrypted).unwrap(), plaintext);
        }
    }

    #[quickcheck]
    fn prop_decrypt_inverts_encrypt(plaintext: String) -> TestResult {
        if plaintext.is_empty() {
            return TestResult::discard();
        }
        let service = CryptoService::new(&config()).unwrap();
        let encrypted = service.encrypt(&plaintext).unwrap();
        TestResult::from_bool(service.decrypt(&encrypted).unwrap() == plaintext)
    }

    #[test]
    fn test_each_encryption_uses_a_fresh_nonce() {
        let service = CryptoService::new(&config()).unwrap();
        let first = service.encrypt("same").unwrap();
        let second = service.encrypt("same").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_rejects_bad_configuration() {
        let mut short_key = config();
        short_key.security_key = "short".to_string();
        assert_eq!(
            CryptoService::new(&short_key).err(),
            Some(CryptoError::InvalidKeyLength { expected: 32, actual: 5 })
        );

        let mut no_iv = config();
        no_iv.init_vector.clear();
        assert_eq!(CryptoService::new(&no_iv).err(), Some(CryptoError::EmptyInitVector));

        let mut cbc = config();
        cbc.algorithm = "aes-256-cbc".to_string();
        assert!(matches!(
            CryptoService::new(&cbc),
            Err(CryptoError::UnsupportedAlgorithm { .. })
        ));
    }

    #[test]
    fn test_decrypt_rejects_foreign_ciphertext() {
        let service = CryptoService::new(&config()).unwrap();
        assert!(service.decrypt("not base64 !!").is_err());
        assert!(service.decrypt(&BASE64.encode([0u8; 8])).is_err());

        let mut other_iv = config();
        other_iv.init_vector = "another-deployment".to_string();
        let other = CryptoService::new(&other_iv).unwrap();
        let encrypted = other.encrypt("secret").unwrap();
        assert!(matches!(
            service.decrypt(&encrypted),
            Err(CryptoError::DecryptionFailed { .. })
        ));
    }
}
