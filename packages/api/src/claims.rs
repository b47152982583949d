//! Versioned identity claims carried in the credential token.
//!
//! The token is a dot-separated string whose middle segment is
//! base64url-encoded (unpadded) JSON. Contract version 1:
//!
//! ```json
//! { "v": 1, "sub": "ana@example.com", "uid": 42, "name": "Ana" }
//! ```
//!
//! Claims are the fallback identity when no cached user record exists. Every
//! decode failure — wrong segment count, bad base64, bad JSON, missing
//! fields, unsupported version — means "unauthenticated", never "unknown".

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Deserialize;

use crate::models::User;

/// The claims contract version this client understands.
pub const CLAIMS_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Claims {
    pub v: u32,
    /// Subject: the account email.
    pub sub: String,
    /// Backend user id.
    pub uid: i64,
    #[serde(default)]
    pub name: Option<String>,
}

impl Claims {
    pub fn to_user(&self) -> User {
        User {
            id: self.uid,
            email: self.sub.clone(),
            name: self
                .name
                .clone()
                .unwrap_or_else(|| self.sub.split('@').next().unwrap_or(&self.sub).to_string()),
            role: None,
        }
    }
}

/// Decode and validate the claims segment of a token.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let payload = match (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return None,
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: Claims = serde_json::from_slice(&bytes).ok()?;
    (claims.v == CLAIMS_VERSION).then_some(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(json: &str) -> String {
        format!("header.{}.signature", URL_SAFE_NO_PAD.encode(json))
    }

    #[test]
    fn test_decode_v1_claims() {
        let token =
            token_with_payload(r#"{"v":1,"sub":"ana@example.com","uid":42,"name":"Ana"}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.uid, 42);

        let user = claims.to_user();
        assert_eq!(user.id, 42);
        assert_eq!(user.name, "Ana");
    }

    #[test]
    fn test_missing_name_falls_back_to_email_local_part() {
        let token = token_with_payload(r#"{"v":1,"sub":"ana@example.com","uid":42}"#);
        assert_eq!(decode_claims(&token).unwrap().to_user().name, "ana");
    }

    #[test]
    fn test_unsupported_version_is_unauthenticated() {
        let token = token_with_payload(r#"{"v":2,"sub":"ana@example.com","uid":42}"#);
        assert!(decode_claims(&token).is_none());
    }

    #[test]
    fn test_malformed_tokens_are_unauthenticated() {
        assert!(decode_claims("opaque-token").is_none());
        assert!(decode_claims("a.b").is_none());
        assert!(decode_claims("a.b.c.d").is_none());
        assert!(decode_claims("a.!!!not-base64!!!.c").is_none());
        let token = format!("a.{}.c", URL_SAFE_NO_PAD.encode("not json"));
        assert!(decode_claims(&token).is_none());
    }
}
