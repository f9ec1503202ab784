use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use serde_json::Value;
use yansi::Paint;

use crate::config;
use crate::error::CatalogError;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// SoftLayer REST client.
/// Handles basic auth, query assembly, and error responses.
pub struct SlClient {
    client: reqwest::Client,
    base_url: String,
    username: String,
    api_key: String,
}

impl SlClient {
    pub fn new(base_url: String, username: String, api_key: String) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(format!("slcat/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config::sanitize_base_url(&base_url),
            username,
            api_key,
        }
    }

    /// Build a client from `SL_*` environment variables.
    pub fn from_env() -> Self {
        Self::new(
            config::get_api_base_url(),
            config::get_username(),
            config::get_api_key(),
        )
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Perform a GET and return the raw status plus body, without treating
    /// non-success statuses as errors. The OS-description retry loop needs
    /// to see the status itself.
    pub async fn get_raw(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<(u16, String), CatalogError> {
        let url = format!("{}/{}", self.base_url, endpoint);

        // --- Curl Logging ---
        let mut url_for_log = url.clone();
        if !params.is_empty() {
            let query_string = params
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect::<Vec<String>>()
                .join("&");
            url_for_log = format!("{}?{}", url_for_log, query_string);
        }

        let mut parts = Vec::new();
        parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
        parts.push(format!("-X {}", Paint::new("GET").fg(yansi::Color::Yellow).bold()));
        parts.push(format!(
            "-u {}",
            Paint::new(format!("'{}:****'", self.username)).fg(yansi::Color::Magenta)
        ));
        parts.push(format!("'{}'", Paint::new(&url_for_log).fg(yansi::Color::Cyan)));
        log_output(format!("Request:\n{}", parts.join(" ")));
        // --------------------

        let mut req = self
            .client
            .get(&url)
            .basic_auth(&self.username, Some(&self.api_key));
        if !params.is_empty() {
            req = req.query(params);
        }

        let response = req
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        // Grayed out color (dimmed/dark gray)
        let response_str = Paint::new(&text).rgb(100, 100, 100).to_string();
        log_output(format!("Response:\n{}", response_str));

        Ok((status, text))
    }

    /// GET an endpoint and decode the JSON payload, treating any
    /// non-success status as terminal.
    pub async fn get(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<Value, CatalogError> {
        let (status, body) = self.get_raw(endpoint, params).await?;
        if !(200..300).contains(&status) {
            return Err(CatalogError::Api { status, body });
        }
        serde_json::from_str(&body).map_err(|e| CatalogError::Decode {
            what: "API response",
            source: e,
        })
    }
}
