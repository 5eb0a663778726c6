//! Shared fixtures for unit tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use ft_shared::config::{AuthConfig, CryptoConfig, JwtConfig};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::JwtError;
use crate::services::{CryptoService, JwtService, TokenCodec, TokenSigner, VerificationMailer};

pub const TEST_SECRET: &str = "unit-test-secret";
pub const TEST_KEY: &str = "0123456789abcdef0123456789abcdef";
pub const TEST_IV: &str = "unit-test-iv";
pub const TEST_HASH_COST: u32 = 4;

pub fn auth_config() -> AuthConfig {
    let mut config = AuthConfig::default();
    config.jwt = JwtConfig::new(TEST_SECRET);
    config.crypto = CryptoConfig::new(TEST_KEY, TEST_IV);
    config.password.hash_cost = TEST_HASH_COST;
    config
}

pub fn jwt_service() -> JwtService {
    JwtService::new(&JwtConfig::new(TEST_SECRET)).unwrap()
}

pub fn codec() -> TokenCodec {
    TokenCodec::from_config(&auth_config()).unwrap()
}

/// A token signed two hours ago that expired one hour ago
pub fn expired_signed_token(payload: Value) -> String {
    jwt_service()
        .sign_issued_at(&payload, Some("1h"), Utc::now() - Duration::hours(2))
        .unwrap()
}

/// Signer that records how often it is asked to sign
pub struct CountingSigner {
    inner: JwtService,
    sign_calls: AtomicUsize,
}

impl CountingSigner {
    pub fn new() -> Self {
        Self {
            inner: jwt_service(),
            sign_calls: AtomicUsize::new(0),
        }
    }

    pub fn sign_calls(&self) -> usize {
        self.sign_calls.load(Ordering::SeqCst)
    }
}

impl TokenSigner for CountingSigner {
    fn sign(&self, payload: &Value, expires_in: Option<&str>) -> Result<String, JwtError> {
        self.sign_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.sign(payload, expires_in)
    }

    fn decode(&self, token: &str) -> Option<Value> {
        self.inner.decode(token)
    }

    fn is_expired(&self, token: &str) -> bool {
        self.inner.is_expired(token)
    }
}

/// Codec whose signer counts `sign` calls
pub fn counting_codec() -> (TokenCodec, Arc<CountingSigner>) {
    let signer = Arc::new(CountingSigner::new());
    let cipher = CryptoService::new(&auth_config().crypto).unwrap();
    let codec = TokenCodec::new(signer.clone(), Arc::new(cipher));
    (codec, signer)
}

/// Mailer that keeps every token it is handed
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<(Uuid, String, String)>>,
    fail: AtomicBool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: AtomicBool::new(true),
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_token(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(_, _, token)| token.clone())
    }

    pub fn last_email(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(_, email, _)| email.clone())
    }
}

#[async_trait]
impl VerificationMailer for RecordingMailer {
    async fn send_verification_email(
        &self,
        user_id: Uuid,
        email: &str,
        token: &str,
    ) -> Result<(), String> {
        if self.fail.load(Ordering::SeqCst) {
            return Err("smtp unavailable".to_string());
        }
        self.sent
            .lock()
            .unwrap()
            .push((user_id, email.to_string(), token.to_string()));
        Ok(())
    }
}
