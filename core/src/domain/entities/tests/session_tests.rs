//! Unit tests for the session entity

use serde_json::{json, Value};
use uuid::Uuid;

use crate::domain::entities::session::{Session, SessionCreateParams, SessionTokenParams};
use crate::domain::value_objects::{TokenOptions, TokenType};
use crate::errors::SessionDomainError;
use crate::test_utils::{codec, counting_codec, expired_signed_token};

fn valid_params(user_id: Uuid) -> SessionCreateParams {
    SessionCreateParams {
        user_id: user_id.to_string(),
        token: SessionTokenParams {
            value: json!({ "value": "valid_token" }),
            options: TokenOptions::default(),
        },
        token_type: "EMAIL_VERIFICATION".to_string(),
    }
}

#[test]
fn test_create_session() {
    let codec = codec();
    let user_id = Uuid::new_v4();
    let session_id = Uuid::new_v4();

    let session = Session::create(valid_params(user_id), Some(session_id), &codec).unwrap();

    assert_eq!(session.id(), session_id);
    assert_eq!(session.user_id(), user_id);
    assert_eq!(session.token_type(), TokenType::EmailVerification);
    assert!(session.used_at().is_none());
    assert!(session.is_token_usable());

    let claims: Value = session.token().get_decoded_value().unwrap();
    assert_eq!(claims["value"], "valid_token");
    assert!(claims.get("iat").is_some());
}

#[test]
fn test_create_generates_id() {
    let codec = codec();
    let first = Session::create(valid_params(Uuid::new_v4()), None, &codec).unwrap();
    let second = Session::create(valid_params(Uuid::new_v4()), None, &codec).unwrap();
    assert_ne!(first.id(), second.id());
}

#[test]
fn test_empty_params_short_circuit_before_signing() {
    let (codec, signer) = counting_codec();

    let result = Session::create(SessionCreateParams::default(), None, &codec);

    assert!(matches!(result, Err(SessionDomainError::InvalidSession { .. })));
    assert_eq!(signer.sign_calls(), 0);
}

#[test]
fn test_missing_parts_are_invalid_session() {
    let (codec, signer) = counting_codec();
    let user_id = Uuid::new_v4();

    let mut no_token = valid_params(user_id);
    no_token.token.value = Value::Null;
    let mut no_type = valid_params(user_id);
    no_type.token_type = String::new();

    for params in [no_token, no_type] {
        assert!(matches!(
            Session::create(params, None, &codec),
            Err(SessionDomainError::InvalidSession { .. })
        ));
    }
    assert_eq!(signer.sign_calls(), 0);
}

#[test]
fn test_invalid_user_id_stops_before_token() {
    let (codec, signer) = counting_codec();
    let mut params = valid_params(Uuid::new_v4());
    params.user_id = "not-a-uuid".to_string();

    assert_eq!(
        Session::create(params, None, &codec),
        Err(SessionDomainError::InvalidUserId)
    );
    assert_eq!(signer.sign_calls(), 0);
}

#[test]
fn test_invalid_token_and_type() {
    let (codec, signer) = counting_codec();

    let mut empty_token = valid_params(Uuid::new_v4());
    empty_token.token.value = json!({});
    assert_eq!(
        Session::create(empty_token, None, &codec),
        Err(SessionDomainError::InvalidToken)
    );

    let mut bad_type = valid_params(Uuid::new_v4());
    bad_type.token_type = "SESSION".to_string();
    assert_eq!(
        Session::create(bad_type, None, &codec),
        Err(SessionDomainError::InvalidTokenType {
            value: "SESSION".to_string()
        })
    );
    assert_eq!(signer.sign_calls(), 1);
}

#[test]
fn test_use_token_once() {
    let codec = codec();
    let mut session = Session::create(valid_params(Uuid::new_v4()), None, &codec).unwrap();

    session.use_token().unwrap();
    assert!(session.is_used());
    assert!(!session.is_token_usable());
    assert_eq!(session.use_token(), Err(SessionDomainError::TokenAlreadyUsed));
}

#[test]
fn test_expired_session_is_not_usable() {
    let codec = codec();
    let ciphertext = codec
        .cipher()
        .encrypt(&expired_signed_token(json!({ "userId": "u1" })))
        .unwrap();

    let mut params = valid_params(Uuid::new_v4());
    params.token = SessionTokenParams {
        value: json!(ciphertext),
        options: TokenOptions::encrypted(),
    };

    let session = Session::create(params, None, &codec).unwrap();
    assert!(!session.is_used());
    assert!(!session.is_token_usable());
}

#[test]
fn test_matches_token() {
    let codec = codec();
    let session = Session::create(valid_params(Uuid::new_v4()), None, &codec).unwrap();
    let presented = session.token().value().to_string();

    assert!(session.matches_token(&presented));
    assert!(!session.matches_token("invalidToken"));
}
