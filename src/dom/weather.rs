//! Weather widget: `gloo-net` client and container rendering.

use web_sys::Document;

use crate::config::WeatherConfig;
use crate::weather::{HttpClient, HttpResponse, WeatherError, display_html, fetch_reading};

/// Browser [`HttpClient`] backed by `fetch` through `gloo-net`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for GlooClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, WeatherError> {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| WeatherError::Request(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| WeatherError::Request(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

/// Fetch once and render into the container; no-op if the container is absent.
pub fn bind(document: &Document, config: &WeatherConfig) {
    let Some(container) = document.get_element_by_id(&config.container_id) else {
        return;
    };
    let url = config.url();
    wasm_bindgen_futures::spawn_local(async move {
        let result = fetch_reading(&GlooClient, &url).await;
        container.set_inner_html(&display_html(&result));
    });
}
