//! Session entity <-> `sessions` row. Tokens are stored encrypted.

use serde_json::Value;

use crate::domain::entities::{Session, SessionParts};
use crate::domain::value_objects::{Token, TokenOptions, TokenType};
use crate::errors::RepositoryError;
use crate::services::TokenCodec;

use super::{Mapper, SessionRecord};

#[derive(Debug, Clone)]
pub struct SessionMapper {
    codec: TokenCodec,
}

impl SessionMapper {
    pub fn new(codec: TokenCodec) -> Self {
        Self { codec }
    }
}

impl Mapper<Session, SessionRecord> for SessionMapper {
    fn to_domain(&self, raw: SessionRecord) -> Result<Session, RepositoryError> {
        let token = Token::create(Value::String(raw.token), TokenOptions::encrypted(), &self.codec)
            .map_err(RepositoryError::mapping)?;
        let token_type = TokenType::create(&raw.token_type).map_err(RepositoryError::mapping)?;

        Ok(Session::restore(SessionParts {
            id: raw.id,
            user_id: raw.user_id,
            token,
            token_type,
            used_at: raw.used_at,
            created_at: raw.created_at,
        }))
    }

    fn to_persistence(&self, item: &Session) -> Result<SessionRecord, RepositoryError> {
        let mut token = item.token().clone();
        let ciphertext = token.get_encrypt_value().map_err(|e| RepositoryError::Storage {
            message: e.to_string(),
        })?;

        Ok(SessionRecord {
            id: item.id(),
            user_id: item.user_id(),
            token: ciphertext,
            token_type: item.token_type().as_str().to_string(),
            expires_at: token.expiry(),
            used_at: item.used_at(),
            created_at: item.created_at(),
        })
    }
}
