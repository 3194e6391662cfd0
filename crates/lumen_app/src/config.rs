//! Application configuration

use lumen_data::{BASE_URL_ENV, DEFAULT_BASE_URL};

/// Configuration for the portfolio app
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Backend base URL
    pub api_base_url: String,
    /// Initial viewport width in pixels
    pub viewport_width: f32,
    /// Initial viewport height in pixels
    pub viewport_height: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            viewport_width: 1280.0,
            viewport_height: 800.0,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment
    ///
    /// `LUMEN_API_URL` overrides the backend base URL; everything else
    /// keeps its default.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            config.api_base_url = url;
        }
        config
    }

    /// Override the backend base URL
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Override the initial viewport
    pub fn with_viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
        assert_eq!(config.viewport_width, 1280.0);
        assert_eq!(config.viewport_height, 800.0);
    }

    #[test]
    fn test_builder_overrides() {
        let config = AppConfig::default()
            .with_api_base_url("http://10.0.0.2:9000/api")
            .with_viewport(1920.0, 1080.0);
        assert_eq!(config.api_base_url, "http://10.0.0.2:9000/api");
        assert_eq!(config.viewport_width, 1920.0);
    }
}
