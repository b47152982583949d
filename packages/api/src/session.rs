use store::KeyValueStore;

use crate::auth::AuthSession;
use crate::claims::decode_claims;
use crate::models::User;

/// Storage key for the credential token.
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key for the cached user record (JSON).
pub const USER_KEY: &str = "auth_user";

/// Persisted session state: the credential token plus a cached user record.
///
/// This is the single owner of the two storage keys. `hydrate` is the init
/// path on app load, `persist` runs after login, `clear` is the logout
/// teardown. The vault never talks to the network; the cached user is a
/// possibly-stale copy and the claims fallback is best-effort identity.
pub struct SessionVault<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionVault<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the persisted session, if any.
    ///
    /// Prefers the cached user record; when it is absent or corrupt, derives
    /// an identity from the token claims (and re-caches it). A token whose
    /// claims cannot be decoded and that has no cached record yields `None`:
    /// decode failure is "unauthenticated", not "unknown".
    pub async fn hydrate(&self) -> Option<AuthSession> {
        let token = self.store.get(TOKEN_KEY).await?;

        if let Some(json) = self.store.get(USER_KEY).await {
            if let Ok(user) = serde_json::from_str::<User>(&json) {
                return Some(AuthSession { token, user });
            }
        }

        let user = decode_claims(&token)?.to_user();
        if let Ok(json) = serde_json::to_string(&user) {
            self.store.set(USER_KEY, &json).await;
        }
        Some(AuthSession { token, user })
    }

    pub async fn persist(&self, session: &AuthSession) {
        self.store.set(TOKEN_KEY, &session.token).await;
        if let Ok(json) = serde_json::to_string(&session.user) {
            self.store.set(USER_KEY, &json).await;
        }
    }

    pub async fn clear(&self) {
        self.store.remove(TOKEN_KEY).await;
        self.store.remove(USER_KEY).await;
    }

    pub async fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use store::MemoryStore;

    fn vault() -> SessionVault<MemoryStore> {
        SessionVault::new(MemoryStore::new())
    }

    fn session() -> AuthSession {
        AuthSession {
            token: "h.p.s".into(),
            user: User {
                id: 7,
                email: "ana@example.com".into(),
                name: "Ana".into(),
                role: None,
            },
        }
    }

    #[tokio::test]
    async fn test_persist_then_hydrate() {
        let vault = vault();
        vault.persist(&session()).await;

        let loaded = vault.hydrate().await.unwrap();
        assert_eq!(loaded.token, "h.p.s");
        assert_eq!(loaded.user.name, "Ana");
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let vault = vault();
        vault.persist(&session()).await;
        vault.clear().await;

        assert!(vault.hydrate().await.is_none());
        assert!(vault.token().await.is_none());
    }

    #[tokio::test]
    async fn test_hydrate_falls_back_to_claims() {
        let store = MemoryStore::new();
        let payload = URL_SAFE_NO_PAD.encode(r#"{"v":1,"sub":"luis@example.com","uid":3}"#);
        store.set(TOKEN_KEY, &format!("h.{payload}.s")).await;

        let vault = SessionVault::new(store.clone());
        let loaded = vault.hydrate().await.unwrap();
        assert_eq!(loaded.user.id, 3);
        assert_eq!(loaded.user.name, "luis");

        // Derived identity gets cached for the next load.
        assert!(store.get(USER_KEY).await.is_some());
    }

    #[tokio::test]
    async fn test_undecodable_token_is_unauthenticated() {
        let store = MemoryStore::new();
        store.set(TOKEN_KEY, "opaque").await;

        assert!(SessionVault::new(store).hydrate().await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_cached_user_falls_back() {
        let store = MemoryStore::new();
        let payload = URL_SAFE_NO_PAD.encode(r#"{"v":1,"sub":"luis@example.com","uid":3}"#);
        store.set(TOKEN_KEY, &format!("h.{payload}.s")).await;
        store.set(USER_KEY, "{not json").await;

        let loaded = SessionVault::new(store).hydrate().await.unwrap();
        assert_eq!(loaded.user.email, "luis@example.com");
    }
}
