//! HMAC-signed JWT issuing and inspection

use std::collections::HashSet;
use std::str::FromStr;
use std::time::Duration;

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use chrono::{DateTime, Utc};
use ft_shared::config::JwtConfig;
use jsonwebtoken::{
    crypto, decode, decode_header, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde_json::Value;

use crate::errors::JwtError;

/// Signs payloads into bearer tokens and inspects them again.
///
/// Implementations are pure functions of their input and the process-wide
/// signing secret.
pub trait TokenSigner: Send + Sync {
    /// Sign a payload.
    ///
    /// JSON objects get an `iat` claim and, when `expires_in` is given, an
    /// `exp` claim. A string is signed as the bare token body and cannot
    /// carry an expiry.
    fn sign(&self, payload: &Value, expires_in: Option<&str>) -> Result<String, JwtError>;

    /// Decode a token with a valid signature into its claims object or body
    /// string; `None` when it cannot be decoded. Expiry is not checked here.
    fn decode(&self, token: &str) -> Option<Value>;

    /// `true` when the token's `exp` is not in the future or the token cannot
    /// be decoded. Tokens without `exp` never expire.
    fn is_expired(&self, token: &str) -> bool;
}

/// `jsonwebtoken`-backed signer using a shared HMAC secret
pub struct JwtService {
    algorithm: Algorithm,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    /// Creates a new JWT service from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(JwtService)` - ready to sign and verify
    /// * `Err(JwtError)` - the algorithm is not an HMAC algorithm
    pub fn new(config: &JwtConfig) -> Result<Self, JwtError> {
        let algorithm = Algorithm::from_str(&config.algorithm.to_uppercase()).map_err(|_| {
            JwtError::UnsupportedAlgorithm {
                algorithm: config.algorithm.clone(),
            }
        })?;

        if !matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(JwtError::UnsupportedAlgorithm {
                algorithm: config.algorithm.clone(),
            });
        }

        let mut validation = Validation::new(algorithm);
        validation.required_spec_claims = HashSet::new();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.leeway = 0;

        Ok(Self {
            algorithm,
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
        })
    }

    /// Sign a payload as if it had been issued at `issued_at`
    pub fn sign_issued_at(
        &self,
        payload: &Value,
        expires_in: Option<&str>,
        issued_at: DateTime<Utc>,
    ) -> Result<String, JwtError> {
        let mut claims = match payload {
            Value::Object(map) => map.clone(),
            Value::String(_) if expires_in.is_some() => {
                return Err(JwtError::ExpiryOnStringPayload);
            }
            Value::String(_) => return self.encode_body(payload),
            _ => return Err(JwtError::InvalidPayload),
        };

        let iat = issued_at.timestamp();
        claims.insert("iat".to_string(), Value::from(iat));

        if let Some(expires_in) = expires_in {
            let lifetime = parse_expires_in(expires_in)?;
            let lifetime_secs = i64::try_from(lifetime.as_secs()).map_err(|_| {
                JwtError::InvalidExpiresIn {
                    value: expires_in.to_string(),
                }
            })?;
            claims.insert("exp".to_string(), Value::from(iat.saturating_add(lifetime_secs)));
        }

        self.encode_body(&Value::Object(claims))
    }

    fn encode_body(&self, body: &Value) -> Result<String, JwtError> {
        encode(&Header::new(self.algorithm), body, &self.encoding_key).map_err(|e| {
            JwtError::SigningFailed {
                message: e.to_string(),
            }
        })
    }

    /// Verify a token whose body is a bare string rather than a claims object.
    ///
    /// The body may be a JSON string or raw UTF-8 text.
    fn decode_string_body(&self, token: &str) -> Option<Value> {
        let (message, signature) = token.rsplit_once('.')?;
        let (_, body) = message.split_once('.')?;

        if decode_header(token).ok()?.alg != self.algorithm {
            return None;
        }
        let verified =
            crypto::verify(signature, message.as_bytes(), &self.decoding_key, self.algorithm)
                .ok()?;
        if !verified {
            return None;
        }

        let bytes = URL_SAFE_NO_PAD.decode(body).ok()?;
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::String(text)) => Some(Value::String(text)),
            Ok(_) => None,
            Err(_) => String::from_utf8(bytes).ok().map(Value::String),
        }
    }
}

impl TokenSigner for JwtService {
    fn sign(&self, payload: &Value, expires_in: Option<&str>) -> Result<String, JwtError> {
        self.sign_issued_at(payload, expires_in, Utc::now())
    }

    fn decode(&self, token: &str) -> Option<Value> {
        match decode::<Value>(token, &self.decoding_key, &self.validation) {
            Ok(data) => Some(data.claims),
            Err(_) => self.decode_string_body(token),
        }
    }

    fn is_expired(&self, token: &str) -> bool {
        let Some(claims) = self.decode(token) else {
            return true;
        };

        match claims.get("exp").and_then(Value::as_i64) {
            Some(exp) => Utc::now().timestamp() >= exp,
            None => false,
        }
    }
}

/// Parse a relative lifetime such as `"1h"`, `"15m"`, `"7d"` or a bare
/// number of seconds
pub fn parse_expires_in(value: &str) -> Result<Duration, JwtError> {
    let trimmed = value.trim();
    if let Ok(seconds) = trimmed.parse::<u64>() {
        return Ok(Duration::from_secs(seconds));
    }

    humantime::parse_duration(trimmed).map_err(|_| JwtError::InvalidExpiresIn {
        value: value.to_string(),
    })
}

/// Read the `exp` claim of a decoded payload as a timestamp
pub fn expiry_of(claims: &Value) -> Option<DateTime<Utc>> {
    claims
        .get("exp")
        .and_then(Value::as_i64)
        .and_then(|exp| DateTime::<Utc>::from_timestamp(exp, 0))
}
