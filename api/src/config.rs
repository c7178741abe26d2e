//! Build-time configuration of the widget.

/// The public GitHub emoji endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/emojis";

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WidgetConfig {
    /// URL answering a GET with a JSON object of emoji name to image URL.
    endpoint: String,
}

impl WidgetConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Creates a WidgetConfig from build-time environment variables.
    ///
    /// The browser has no process environment, so values are captured when
    /// the wasm binary is compiled.
    ///
    /// # Environment Variables:
    /// - `EMOJI_CATALOG_URL`: overrides [`DEFAULT_ENDPOINT`]. Ignored when
    ///   blank.
    pub fn from_env() -> Self {
        Self::from_endpoint_override(option_env!("EMOJI_CATALOG_URL"))
    }

    fn from_endpoint_override(value: Option<&str>) -> Self {
        let endpoint = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_ENDPOINT);
        Self::new(endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
