use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default OpenAI-compatible API base.
pub const DEFAULT_ENDPOINT: &str = "https://twapi.openai-hk.com/v1";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Largest temperature accepted by OpenAI-compatible providers.
pub const MAX_TEMPERATURE: f32 = 2.0;

/// Everything the completion client needs besides the transcript and key.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelConfig {
    /// Model identifier sent with every request.
    pub model: String,

    /// API base, e.g. `https://api.openai.com/v1`.  Requests go to
    /// `{endpoint}/chat/completions`.
    pub endpoint: String,

    /// Sampling temperature in `0.0..=2.0`.
    pub temperature: f32,

    /// Upper bound on a single completion call.
    pub timeout: Duration,
}

impl ModelConfig {
    /// Creates a config with the default model, endpoint, temperature and
    /// timeout.
    pub fn new() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the API base.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolves the chat-completions URL below the configured endpoint.
    pub fn completions_url(&self) -> Result<Url> {
        let mut base = self.endpoint.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base)?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::url(
                format!("unsupported endpoint scheme: {}", base.scheme()),
                None,
            ));
        }
        Ok(base.join("chat/completions")?)
    }

    /// Checks the values a provider would reject before any request is made.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(Error::validation(
                "model must not be empty",
                Some("model".to_string()),
            ));
        }
        if !temperature_in_range(self.temperature) {
            return Err(Error::validation(
                format!("temperature must be between 0 and {MAX_TEMPERATURE}"),
                Some("temperature".to_string()),
            ));
        }
        if self.timeout.is_zero() {
            return Err(Error::validation(
                "timeout must be greater than zero",
                Some("timeout".to_string()),
            ));
        }
        self.completions_url().map(|_| ())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns true if `temperature` is finite and within `0.0..=2.0`.
pub fn temperature_in_range(temperature: f32) -> bool {
    temperature.is_finite() && (0.0..=MAX_TEMPERATURE).contains(&temperature)
}
