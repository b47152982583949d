/// String key/value persistence.
///
/// Implementations are platform stores (browser `localStorage` on the web,
/// an in-memory map elsewhere). Reads return `None` both for absent keys and
/// for unavailable storage; writes on unavailable storage are dropped.
pub trait KeyValueStore {
    async fn get(&self, key: &str) -> Option<String>;
    async fn set(&self, key: &str, value: &str);
    async fn remove(&self, key: &str);
}
