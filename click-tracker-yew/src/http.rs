use click_tracker::{ApiConfig, ApiRequest, ClickApi, HttpResponse, Method, TransportError};
use gloo_net::http::Request;

/// [ClickApi] over the browser's `fetch`.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchClickApi {
    config: ApiConfig,
}

impl FetchClickApi {
    pub fn new(config: ApiConfig) -> Self {
        FetchClickApi { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }
}

/// A rejected `fetch` surfaces as a JS exception; only its `message` is shown,
/// not the `TypeError: ` prefix its `Display` adds.
fn transport(err: gloo_net::Error) -> TransportError {
    match err {
        gloo_net::Error::JsError(err) => TransportError::new(err.message),
        other => TransportError::new(other.to_string()),
    }
}

impl ClickApi for FetchClickApi {
    async fn execute(&self, request: &ApiRequest) -> Result<HttpResponse, TransportError> {
        let url = self.config.url_for(request);
        let builder = match request.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        };

        let response = match request.body() {
            // `json` also sets `Content-Type: application/json`.
            Some(body) => builder.json(&body).map_err(transport)?.send().await,
            None => builder.send().await,
        }
        .map_err(transport)?;

        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        tracing::debug!(%request, status, "Request settled.");

        Ok(HttpResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gloo_errors_keep_their_text() {
        let err = transport(gloo_net::Error::GlooError("body already used".to_owned()));
        assert_eq!("body already used", err.message());
    }

    #[cfg(target_arch = "wasm32")]
    mod browser {
        use super::*;
        use gloo_utils::errors::JsError;
        use wasm_bindgen::JsValue;
        use wasm_bindgen_test::wasm_bindgen_test;

        wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

        #[wasm_bindgen_test]
        fn test_rejected_fetch_shows_bare_message() {
            let value: JsValue = js_sys::TypeError::new("Failed to fetch").into();
            let js_error = JsError::try_from(value).unwrap();

            let err = transport(gloo_net::Error::JsError(js_error));
            assert_eq!("Failed to fetch", err.message());
        }
    }
}
