use crate::api::ApiRequest;

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Build-time setting that overrides [DEFAULT_API_URL], read when the
/// front-end is compiled (the browser has no process environment).
pub const API_URL_ENV: &str = "CLICK_TRACKER_API_URL";

/// Where the backend lives. The base URL is kept as configured, for display;
/// trailing slashes are dropped only when endpoint URLs are built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig::from_build_env(None)
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        ApiConfig {
            base_url: base_url.to_owned(),
        }
    }

    /// Pick the base URL: an explicit override wins, then the build-time
    /// environment value, then [DEFAULT_API_URL]. Empty values count as unset.
    pub fn resolve(explicit: Option<&str>, from_env: Option<&str>) -> Self {
        let base = [explicit, from_env]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL);

        ApiConfig::new(base)
    }

    /// [ApiConfig::resolve] against the value of [API_URL_ENV] captured when
    /// this crate was compiled.
    pub fn from_build_env(explicit: Option<&str>) -> Self {
        ApiConfig::resolve(explicit, option_env!("CLICK_TRACKER_API_URL"))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), request.path())
    }
}
