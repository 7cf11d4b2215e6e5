use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Client configuration: where the expense API lives.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Default for Config {
    fn default() -> Self {
        let server_url =
            std::env::var("CLIENT_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        let app = match AppConfig::builder().server_url(server_url).build() {
            Ok(app) => app,
            Err(e) => {
                tracing::warn!("Ignoring CLIENT_API_URL ({}), using {}", e, DEFAULT_SERVER_URL);
                AppConfig::default()
            }
        };
        Self { app }
    }
}

impl Config {
    /// Create a new configuration from the environment
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Configuration pointing at a specific server
    pub fn for_server(url: impl Into<String>) -> Result<Self, ConfigError> {
        Self::with_builder(AppConfig::builder().server_url(url))
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}
