//! Backend endpoint configuration.
//!
//! The base path is deliberately a plain value rather than a global: the
//! launcher crates provide an [`ApiConfig`] through Dioxus context, and
//! components fall back to [`ApiConfig::default`] when none is supplied.

/// Default keyword-analysis service base path, matching a locally run
/// backend. Trailing slash is required; resource paths are appended to it.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1/keyword/";

/// Where the client sends its requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new<T: Into<String>>(base_url: T) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    /// Default base, overridable on native targets via `KEYSCOPE_API_BASE`.
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(base) = std::env::var("KEYSCOPE_API_BASE") {
                if !base.trim().is_empty() {
                    return Self::new(base);
                }
            }
        }
        Self::default()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_matches_local_backend() {
        assert_eq!(ApiConfig::default().base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn missing_trailing_slash_is_added() {
        let config = ApiConfig::new("https://insights.example.com/api/v1/keyword");
        assert_eq!(
            config.base_url,
            "https://insights.example.com/api/v1/keyword/"
        );
    }
}
