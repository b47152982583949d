//! Browser-local persistence for the Lunch4Less client.
//!
//! The client keeps exactly two pieces of persisted state: the credential
//! token and a cached copy of the authenticated user. Both are stored through
//! the [`KeyValueStore`] trait so the session layer can be exercised in tests
//! without a browser.

mod kv;
pub use kv::KeyValueStore;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;
