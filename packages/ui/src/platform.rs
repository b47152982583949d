//! Platform store and client constructors.
//!
//! On the web the credential lives in `localStorage`; everywhere else an
//! in-memory store keeps the same code paths compiling and testable.

use api::{ApiConfig, Client, SessionVault};
use store::KeyValueStore;

pub fn make_store() -> impl KeyValueStore + Clone {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        store::MemoryStore::new()
    }
}

pub fn make_vault() -> SessionVault<impl KeyValueStore + Clone> {
    SessionVault::new(make_store())
}

/// Client carrying the persisted credential, if any.
pub async fn make_client() -> Client {
    let token = make_vault().token().await;
    Client::new(ApiConfig::default(), token)
}
