use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::models::{as_i64, as_text};

/// The authenticated user, as cached by the client.
///
/// Created server-side at signup; the client only ever holds a copy derived
/// from the login response, the cached record in storage, or the credential
/// claims.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Minimal record when the backend returns a token but no user.
    pub fn from_email(email: &str) -> Self {
        Self {
            id: 0,
            email: email.to_string(),
            name: email.split('@').next().unwrap_or(email).to_string(),
            role: None,
        }
    }
}

/// `id` and `email` are required; `name` falls back to the email local part,
/// `role` is optional.
pub fn map_user(value: &Value) -> Result<User, ApiError> {
    let id = as_i64(&value["id"]).ok_or_else(|| ApiError::payload("usuario sin id"))?;
    let email = as_text(&value["email"]).ok_or_else(|| ApiError::payload("usuario sin email"))?;
    let name = as_text(&value["name"])
        .unwrap_or_else(|| email.split('@').next().unwrap_or(&email).to_string());
    Ok(User {
        id,
        email,
        name,
        role: as_text(&value["role"]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_user_full() {
        let user = map_user(&json!({
            "id": 4, "email": "ana@example.com", "name": "Ana", "role": "admin"
        }))
        .unwrap();
        assert_eq!(user.id, 4);
        assert_eq!(user.display_name(), "Ana");
        assert_eq!(user.role.as_deref(), Some("admin"));
    }

    #[test]
    fn test_map_user_name_falls_back_to_email() {
        let user = map_user(&json!({"id": 1, "email": "ana@example.com"})).unwrap();
        assert_eq!(user.name, "ana");
    }

    #[test]
    fn test_map_user_missing_id_fails_loudly() {
        assert!(matches!(
            map_user(&json!({"email": "ana@example.com"})),
            Err(ApiError::Payload(_))
        ));
    }
}
