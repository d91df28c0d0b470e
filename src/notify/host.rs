//! HTTP host client
//!
//! Talks to the plugin host's local HTTP endpoint. Each capability is one
//! POST; failures surface as [`NotifyError::Host`] and callers decide how
//! to report them. No retries here.

use std::path::Path;

use crate::notify::error::{NotifyError, NotifyResult};
use crate::notify::toast::Toast;
use crate::notify::traits::Host;

/// Default local host endpoint
pub const DEFAULT_HOST_ENDPOINT: &str = "http://127.0.0.1:7777";

pub struct HttpHost {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpHost {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, capability: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), capability)
    }
}

#[async_trait::async_trait]
impl Host for HttpHost {
    async fn show_toast(&self, toast: &Toast) -> NotifyResult<()> {
        self.client
            .post(self.url("toast"))
            .json(toast)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| NotifyError::Host {
                cause: e.to_string(),
            })?;

        log::debug!("Toast \"{}\" delivered to host", toast.title);
        Ok(())
    }

    async fn play_sound(&self, path: &Path) -> NotifyResult<()> {
        self.client
            .post(self.url("play"))
            .json(&serde_json::json!({ "path": path }))
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| NotifyError::Host {
                cause: e.to_string(),
            })?;

        log::debug!("Play request for {} delivered to host", path.display());
        Ok(())
    }
}
