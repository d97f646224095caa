use std::marker::PhantomData;

use crate::{ClickTrackerComponent, ClickTrackerProps, TrackerView};
use click_tracker::{ApiConfig, TrackerError, API_URL_ENV};
use yew::Callback;

pub struct ClientBuilder<V: TrackerView> {
    api_url: Option<String>,
    onerror: Callback<TrackerError>,
    _ph: PhantomData<V>,
}

impl<V: TrackerView> Default for ClientBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: TrackerView> ClientBuilder<V> {
    pub fn new() -> ClientBuilder<V> {
        console_error_panic_hook::set_once();

        ClientBuilder {
            api_url: None,
            onerror: Callback::noop(),
            _ph: PhantomData,
        }
    }

    /// Use `api_url` instead of the build-time `CLICK_TRACKER_API_URL` or the
    /// default.
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = Some(api_url.to_owned());
        self
    }

    /// Called with every error the tracker records.
    pub fn with_onerror<F>(mut self, onerror: F) -> Self
    where
        F: Fn(TrackerError) + 'static,
    {
        self.onerror = Callback::from(onerror);
        self
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig::from_build_env(self.api_url.as_deref())
    }

    pub fn mount_to_body(self) {
        let config = self.config();
        tracing::info!(
            api = config.base_url(),
            env = API_URL_ENV,
            explicit = self.api_url.is_some(),
            "Resolved API base URL."
        );

        let props = ClickTrackerProps {
            config,
            onerror: self.onerror,
        };

        yew::Renderer::<ClickTrackerComponent<V>>::with_props(props).render();
    }
}
