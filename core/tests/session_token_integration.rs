//! Integration tests for sessions and their tokens through the public API

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use serde_json::{json, Value};
    use uuid::Uuid;

    use ft_core::domain::{Session, SessionCreateParams, SessionTokenParams, Token, TokenOptions, TokenType};
    use ft_core::errors::SessionDomainError;
    use ft_core::mappers::{Mapper, SessionMapper};
    use ft_core::services::{JwtService, TokenCodec};
    use ft_shared::config::{AuthConfig, CryptoConfig, JwtConfig};

    fn config() -> AuthConfig {
        let mut config = AuthConfig::default();
        config.jwt = JwtConfig::new("integration-secret");
        config.crypto = CryptoConfig::new("abcdefghijklmnopqrstuvwxyz012345", "integration-iv");
        config
    }

    fn codec() -> TokenCodec {
        TokenCodec::from_config(&config()).unwrap()
    }

    #[test]
    fn test_session_from_payload() {
        let codec = codec();
        let user_id = Uuid::new_v4();

        let session = Session::create(
            SessionCreateParams {
                user_id: user_id.to_string(),
                token: SessionTokenParams {
                    value: json!({ "value": "valid_token" }),
                    options: TokenOptions::default(),
                },
                token_type: "AUTH".to_string(),
            },
            None,
            &codec,
        )
        .unwrap();

        assert_eq!(session.user_id(), user_id);
        assert_eq!(session.token_type(), TokenType::Auth);

        let claims: Value = session.token().get_decoded_value().unwrap();
        assert_eq!(claims["value"], "valid_token");
        assert!(claims["iat"].is_i64());
    }

    #[test]
    fn test_empty_session_params_fail() {
        let result = Session::create(SessionCreateParams::default(), None, &codec());
        assert!(matches!(result, Err(SessionDomainError::InvalidSession { .. })));
    }

    #[test]
    fn test_token_from_encrypted_jwt() {
        let codec = codec();
        let signed = JwtService::new(&config().jwt)
            .unwrap()
            .sign_issued_at(&json!({ "userId": "u1" }), Some("1h"), Utc::now())
            .unwrap();
        let ciphertext = codec.cipher().encrypt(&signed).unwrap();

        let token = Token::create(json!(ciphertext), TokenOptions::encrypted(), &codec).unwrap();

        let claims: Value = token.get_decoded_value().unwrap();
        assert_eq!(claims["userId"], "u1");
        assert!(token.is_auth());
        assert_eq!(token.value(), signed);
    }

    #[test]
    fn test_expired_token_is_not_auth() {
        let codec = codec();
        let signed = JwtService::new(&config().jwt)
            .unwrap()
            .sign_issued_at(&json!({ "userId": "u1" }), Some("15m"), Utc::now() - Duration::hours(1))
            .unwrap();
        let ciphertext = codec.cipher().encrypt(&signed).unwrap();

        let token = Token::create(json!(ciphertext), TokenOptions::encrypted(), &codec).unwrap();
        assert!(!token.is_auth());
        assert!(!token.cached_is_auth());
    }

    #[test]
    fn test_session_survives_storage() {
        let codec = codec();
        let mapper = SessionMapper::new(codec.clone());
        let session = Session::create(
            SessionCreateParams {
                user_id: Uuid::new_v4().to_string(),
                token: SessionTokenParams {
                    value: json!({ "userId": "u1" }),
                    options: TokenOptions::expires_in("7d"),
                },
                token_type: "REFRESH".to_string(),
            },
            None,
            &codec,
        )
        .unwrap();

        let record = mapper.to_persistence(&session).unwrap();
        let other_codec = TokenCodec::from_config(&{
            let mut config = config();
            config.crypto.init_vector = "another-iv".to_string();
            config
        })
        .unwrap();

        assert_eq!(mapper.to_domain(record.clone()).unwrap(), session);
        assert!(SessionMapper::new(other_codec).to_domain(record).is_err());
    }
}
