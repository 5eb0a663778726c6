//! Signed bearer token value object.
//!
//! A token is created from either a JSON payload (which is signed into a
//! JWT) or, when restoring from storage, from the ciphertext of a previously
//! encrypted token. Tokens carry the [`TokenCodec`] they were created with so
//! they can verify, encrypt and decrypt themselves later.

use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::{CryptoError, SessionDomainError};
use crate::services::jwt::expiry_of;
use crate::services::TokenCodec;

/// Options controlling how a token is built from its raw value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenOptions {
    /// Relative lifetime such as `"1h"`; `None` produces a token without `exp`
    pub expires_in: Option<String>,

    /// The raw value is ciphertext of an already-signed token
    pub is_encrypted: bool,
}

impl TokenOptions {
    pub fn expires_in(expires_in: impl Into<String>) -> Self {
        Self {
            expires_in: Some(expires_in.into()),
            is_encrypted: false,
        }
    }

    pub fn encrypted() -> Self {
        Self {
            expires_in: None,
            is_encrypted: true,
        }
    }
}

/// Observable state of a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenProps {
    /// Signed token, or its ciphertext when `is_encrypted` is set
    pub value: String,

    /// Authentication state recorded at creation or on the last refresh
    pub is_auth: bool,

    pub is_encrypted: bool,

    /// `exp` claim of the signed token, if any
    pub expiry: Option<DateTime<Utc>>,
}

/// Signed token value object
#[derive(Clone)]
pub struct Token {
    props: TokenProps,
    codec: TokenCodec,
}

impl Token {
    /// Build a token from a raw value.
    ///
    /// # Arguments
    ///
    /// * `value` - a non-empty JSON object or string to sign, or the non-empty
    ///   ciphertext of a signed token when `options.is_encrypted` is set
    /// * `options` - expiry and encryption flags
    /// * `codec` - signer and cipher used now and by later operations
    ///
    /// # Returns
    ///
    /// * `Ok(Token)` - a plaintext token
    /// * `Err(SessionDomainError::InvalidToken)` - the value is empty, of the
    ///   wrong shape, cannot be signed or cannot be decrypted
    pub fn create(
        value: Value,
        options: TokenOptions,
        codec: &TokenCodec,
    ) -> Result<Self, SessionDomainError> {
        if !Self::is_valid(&value) {
            return Err(SessionDomainError::InvalidToken);
        }

        let signed = if options.is_encrypted {
            let Value::String(ciphertext) = &value else {
                return Err(SessionDomainError::InvalidToken);
            };
            codec.cipher().decrypt(ciphertext).map_err(|e| {
                tracing::debug!(error = %e, "Rejected encrypted token");
                SessionDomainError::InvalidToken
            })?
        } else {
            codec
                .signer()
                .sign(&value, options.expires_in.as_deref())
                .map_err(|e| {
                    tracing::debug!(error = %e, "Rejected token payload");
                    SessionDomainError::InvalidToken
                })?
        };

        let signer = codec.signer();
        let is_auth = !signer.is_expired(&signed);
        let expiry = signer.decode(&signed).as_ref().and_then(expiry_of);

        Ok(Self {
            props: TokenProps {
                value: signed,
                is_auth,
                is_encrypted: false,
                expiry,
            },
            codec: codec.clone(),
        })
    }

    fn is_valid(value: &Value) -> bool {
        match value {
            Value::Object(map) => !map.is_empty(),
            Value::String(s) => !s.is_empty(),
            _ => false,
        }
    }

    /// Current stored form: the signed token, or its ciphertext once encrypted
    pub fn value(&self) -> &str {
        &self.props.value
    }

    pub fn is_encrypted(&self) -> bool {
        self.props.is_encrypted
    }

    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        self.props.expiry
    }

    pub fn props(&self) -> &TokenProps {
        &self.props
    }

    /// Signed form regardless of the stored state; `None` if decryption fails
    fn signed_value(&self) -> Option<Cow<'_, str>> {
        if self.props.is_encrypted {
            self.codec
                .cipher()
                .decrypt(&self.props.value)
                .ok()
                .map(Cow::Owned)
        } else {
            Some(Cow::Borrowed(&self.props.value))
        }
    }

    /// Whether the token currently verifies and is unexpired.
    ///
    /// Re-derived on every call; the cached flag is left untouched.
    pub fn is_auth(&self) -> bool {
        self.signed_value()
            .map(|signed| !self.codec.signer().is_expired(&signed))
            .unwrap_or(false)
    }

    /// Re-derive the authentication state and store it
    pub fn refresh_auth(&mut self) -> bool {
        let is_auth = self.is_auth();
        self.props.is_auth = is_auth;
        is_auth
    }

    /// Authentication state as of creation or the last [`Token::refresh_auth`]
    pub fn cached_is_auth(&self) -> bool {
        self.props.is_auth
    }

    /// Decode the signed payload into `T`; `None` when the signature does not
    /// verify or the payload does not fit `T`
    pub fn get_decoded_value<T: DeserializeOwned>(&self) -> Option<T> {
        let signed = self.signed_value()?;
        let claims = self.codec.signer().decode(&signed)?;
        serde_json::from_value(claims).ok()
    }

    /// Switch the token to its encrypted form and return the ciphertext.
    ///
    /// Calling this on an already encrypted token returns the stored
    /// ciphertext unchanged.
    pub fn get_encrypt_value(&mut self) -> Result<String, CryptoError> {
        if !self.props.is_encrypted {
            self.props.value = self.codec.cipher().encrypt(&self.props.value)?;
            self.props.is_encrypted = true;
        }
        Ok(self.props.value.clone())
    }

    /// Return the signed form without changing the stored state
    pub fn get_decrypt_value(&self) -> Result<String, CryptoError> {
        if self.props.is_encrypted {
            self.codec.cipher().decrypt(&self.props.value)
        } else {
            Ok(self.props.value.clone())
        }
    }

    /// Whether `candidate` is this token's signed form
    pub fn matches(&self, candidate: &str) -> bool {
        self.signed_value()
            .map(|signed| signed == candidate)
            .unwrap_or(false)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.props == other.props
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("is_auth", &self.props.is_auth)
            .field("is_encrypted", &self.props.is_encrypted)
            .field("expiry", &self.props.expiry)
            .finish_non_exhaustive()
    }
}
