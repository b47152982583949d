use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

/// The uniform response wrapper used by every backend endpoint.
///
/// `success: false` is a domain error regardless of HTTP status. The login
/// endpoint is known to sometimes put the token at the top level instead of
/// inside `data`, hence the extra `token` field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub token: Option<String>,
}

impl Envelope {
    /// Check `success`, with `fallback` as the message when the backend sent
    /// none.
    pub fn require_success(self, fallback: &str) -> Result<Self, ApiError> {
        if self.success {
            Ok(self)
        } else if self.message.is_empty() {
            Err(ApiError::Domain(fallback.to_string()))
        } else {
            Err(ApiError::Domain(self.message))
        }
    }

    /// Check `success` and extract `data`; a successful response without data
    /// violates the contract.
    pub fn require_data(self, fallback: &str) -> Result<Value, ApiError> {
        let env = self.require_success(fallback)?;
        env.data.ok_or_else(|| ApiError::payload("falta el campo data"))
    }

    /// Check `success` and extract `data` as a list; a missing or non-array
    /// `data` is an empty list.
    pub fn list_data(self, fallback: &str) -> Result<Vec<Value>, ApiError> {
        let env = self.require_success(fallback)?;
        Ok(match env.data {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(v: Value) -> Envelope {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn test_success_false_is_domain_error() {
        let env = envelope(json!({"success": false, "message": "sin permiso"}));
        assert_eq!(
            env.require_success("fallback"),
            Err(ApiError::Domain("sin permiso".into()))
        );
    }

    #[test]
    fn test_missing_message_uses_fallback() {
        let env = envelope(json!({"success": false, "message": ""}));
        assert_eq!(
            env.require_data("no se pudo"),
            Err(ApiError::Domain("no se pudo".into()))
        );
    }

    #[test]
    fn test_require_data() {
        let env = envelope(json!({"success": true, "message": "ok", "data": {"id": 1}}));
        assert_eq!(env.require_data("x").unwrap()["id"], 1);

        let env = envelope(json!({"success": true, "message": "ok"}));
        assert!(matches!(env.require_data("x"), Err(ApiError::Payload(_))));
    }

    #[test]
    fn test_list_data_defaults_to_empty() {
        let env = envelope(json!({"success": true, "message": "ok"}));
        assert!(env.list_data("x").unwrap().is_empty());

        let env = envelope(json!({"success": true, "message": "ok", "data": [1, 2]}));
        assert_eq!(env.list_data("x").unwrap().len(), 2);
    }

    #[test]
    fn test_top_level_token_is_captured() {
        let env = envelope(json!({"success": true, "message": "", "token": "t.p.s"}));
        assert_eq!(env.token.as_deref(), Some("t.p.s"));
    }
}
