//! REST calls against the room backend.
//!
//! Errors are returned to the caller untouched by retries or logging.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::{validate_request_timeout, Config};
use crate::error::{BridgeError, Result};
use crate::models::{AccountInfo, CreateRoomRequest, DomainId, RoomDescriptor};

#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &Config) -> Result<Self> {
        let timeout = validate_request_timeout(config.request_timeout_secs)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()
            .map_err(|e| BridgeError::HttpClient(e.to_string()))?;

        Ok(Self::with_client(client, &config.api_base_url))
    }

    /// Use a caller-built `reqwest::Client` (timeouts, proxies, ...)
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST /rooms/
    pub async fn create_room(
        &self,
        api_key: &str,
        force_topology_switch: bool,
    ) -> Result<RoomDescriptor> {
        let request = CreateRoomRequest::new(force_topology_switch);

        let res = self
            .client
            .post(format!("{}/rooms/", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| BridgeError::RoomCreation(e.to_string()))?;

        read_json(res).await.map_err(BridgeError::RoomCreation)
    }

    /// GET on the API root, which describes the account
    pub async fn get_domain_id(&self, api_key: &str) -> Result<DomainId> {
        let res = self
            .client
            .get(&self.base_url)
            .bearer_auth(api_key)
            .send()
            .await
            .map_err(|e| BridgeError::DomainResolution(e.to_string()))?;

        let info: AccountInfo = read_json(res)
            .await
            .map_err(BridgeError::DomainResolution)?;

        info.domain_id
            .map(DomainId::new)
            .ok_or_else(|| BridgeError::DomainResolution("response has no domain_id".to_string()))
    }
}

/// Only a 200 with a non-empty JSON body counts as success
async fn read_json<T: DeserializeOwned>(res: Response) -> std::result::Result<T, String> {
    let status = res.status();
    let body = res.text().await.map_err(|e| e.to_string())?;

    if status != StatusCode::OK {
        return Err(format!("unexpected status {}: {}", status, body));
    }
    if body.trim().is_empty() {
        return Err("empty response body".to_string());
    }

    serde_json::from_str(&body).map_err(|e| format!("invalid response body: {}", e))
}
