//! Application configuration. Backend endpoint, paths, rendering.

use crate::domain::RenderMode;
use serde::Deserialize;

/// Default recommendation endpoint (local backend).
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000/api/recommend";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Recommendation endpoint. Read from ADVISOR_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Whole-request timeout in seconds (default 15). Read from ADVISOR_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Directory for the exported transcript view. Read from ADVISOR_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// "structured" (default) or "compat". Read from ADVISOR_RENDER_MODE.
    #[serde(default)]
    pub render_mode: Option<String>,

    /// Skip the backend entirely and answer with the mock advisor. Read from ADVISOR_USE_MOCK.
    #[serde(default)]
    pub use_mock: Option<bool>,

    /// Simulated latency of the mock advisor in ms (default 400). Read from ADVISOR_MOCK_DELAY_MS.
    #[serde(default)]
    pub mock_delay_ms: Option<u64>,

    /// Set to false to stop writing transcript.html. Read from ADVISOR_EXPORT_TRANSCRIPT.
    #[serde(default)]
    pub export_transcript: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("ADVISOR").try_parsing(true));
        if let Ok(path) = std::env::var("ADVISOR_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the recommendation endpoint. Defaults to DEFAULT_API_URL.
    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Returns request timeout in seconds. Defaults to 15 if unset.
    pub fn request_timeout_secs_or_default(&self) -> u64 {
        self.request_timeout_secs.unwrap_or(15)
    }

    /// Returns the data directory. Defaults to "./data".
    pub fn data_dir_or_default(&self) -> String {
        self.data_dir.clone().unwrap_or_else(|| "./data".to_string())
    }

    /// Parsed render mode. `Err` names the unrecognised value.
    pub fn render_mode(&self) -> Result<RenderMode, String> {
        match &self.render_mode {
            Some(raw) => raw.parse(),
            None => Ok(RenderMode::default()),
        }
    }

    pub fn use_mock(&self) -> bool {
        self.use_mock.unwrap_or(false)
    }

    /// Returns mock delay in milliseconds. Defaults to 400.
    pub fn mock_delay_ms_or_default(&self) -> u64 {
        self.mock_delay_ms.unwrap_or(400)
    }

    pub fn export_transcript(&self) -> bool {
        self.export_transcript.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api_url_or_default(), DEFAULT_API_URL);
        assert_eq!(cfg.request_timeout_secs_or_default(), 15);
        assert_eq!(cfg.data_dir_or_default(), "./data");
        assert_eq!(cfg.render_mode(), Ok(RenderMode::Structured));
        assert!(!cfg.use_mock());
        assert_eq!(cfg.mock_delay_ms_or_default(), 400);
        assert!(cfg.export_transcript());
    }

    #[test]
    fn test_render_mode_parsing() {
        let cfg = AppConfig {
            render_mode: Some("compat".into()),
            ..Default::default()
        };
        assert_eq!(cfg.render_mode(), Ok(RenderMode::Compat));

        let bad = AppConfig {
            render_mode: Some("ast".into()),
            ..Default::default()
        };
        assert!(bad.render_mode().is_err());
    }

    #[test]
    fn test_blank_api_url_uses_default() {
        let cfg = AppConfig {
            api_url: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(cfg.api_url_or_default(), DEFAULT_API_URL);
    }

    #[test]
    fn test_deserialize_from_config_source() {
        let cfg: AppConfig = config::Config::builder()
            .set_override("api_url", "http://advisor.local/api/recommend")
            .unwrap()
            .set_override("use_mock", true)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.api_url_or_default(), "http://advisor.local/api/recommend");
        assert!(cfg.use_mock());
    }
}
