/// Backend endpoints configuration.
///
/// `base_url` is the REST API root (no trailing slash); `storage_base_url`
/// hosts uploaded files, referenced by relative paths in recipe payloads.
/// Both can be overridden at build time via `LUNCH4LESS_API_URL` and
/// `LUNCH4LESS_STORAGE_URL`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub storage_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("LUNCH4LESS_API_URL")
                .unwrap_or("https://l4l-api.avalai.io/api")
                .to_string(),
            storage_base_url: option_env!("LUNCH4LESS_STORAGE_URL")
                .unwrap_or("https://l4l-api.avalai.io")
                .to_string(),
        }
    }
}

impl ApiConfig {
    /// Turn a storage path from the backend into an absolute URL.
    /// Absolute URLs pass through unchanged.
    pub fn resolve_image_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{}", self.storage_base_url, path)
        } else {
            format!("{}/{}", self.storage_base_url, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_image_url() {
        let config = ApiConfig {
            base_url: "https://api.example/api".into(),
            storage_base_url: "https://api.example".into(),
        };

        assert_eq!(
            config.resolve_image_url("storage/recipes/1.jpg"),
            "https://api.example/storage/recipes/1.jpg"
        );
        assert_eq!(
            config.resolve_image_url("/storage/recipes/1.jpg"),
            "https://api.example/storage/recipes/1.jpg"
        );
        assert_eq!(
            config.resolve_image_url("https://cdn.example/x.jpg"),
            "https://cdn.example/x.jpg"
        );
    }
}
