use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::claims::decode_claims;
use crate::client::Client;
use crate::error::ApiError;
use crate::models::{map_user, User};

/// An authenticated session: the credential token plus the user it belongs
/// to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

impl Client {
    /// `POST /login`.
    ///
    /// The token may arrive in `data.token` or at the envelope's top level.
    /// When the backend omits the user record, the identity is derived from
    /// the token claims, or as a last resort from the email itself.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, ApiError> {
        let envelope = self
            .post_json("/login", &json!({"email": email, "password": password}))
            .await?
            .require_success("Error en el login")?;

        let data = envelope.data.unwrap_or_default();
        let token = data["token"]
            .as_str()
            .map(str::to_string)
            .or(envelope.token)
            .ok_or_else(|| ApiError::payload("token no proporcionado por el servidor"))?;

        let user = match map_user(&data["user"]) {
            Ok(user) => user,
            Err(_) => decode_claims(&token)
                .map(|claims| claims.to_user())
                .unwrap_or_else(|| User::from_email(email)),
        };

        Ok(AuthSession { token, user })
    }

    /// `POST /signup`. Account creation is entirely backend-owned; the user
    /// logs in afterwards.
    pub async fn signup(
        &self,
        name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.post_json(
            "/signup",
            &json!({
                "name": name,
                "last_name": last_name,
                "email": email,
                "password": password,
            }),
        )
        .await?
        .require_success("Error en el registro")?;
        Ok(())
    }
}
