//! Device registry client over the native HTTP stack

use std::sync::Arc;

use async_trait::async_trait;
use hub_console_app::api::{device_url, devices_url};
use hub_console_app::{ApiError, Device, DeviceApi};
use serde::de::DeserializeOwned;

use crate::io::{HttpClient, HttpResponse};

/// [`DeviceApi`] implementation for native callers
#[derive(Clone)]
pub struct HubApiClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for HubApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl HubApiClient {
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into();
        tracing::debug!("Created HubApiClient for {}", base_url);
        Self { base_url, http }
    }
}

fn transport(err: crate::ConsoleError) -> ApiError {
    match err {
        crate::ConsoleError::Http(msg) => ApiError::Transport(msg),
        other => ApiError::Transport(other.to_string()),
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl DeviceApi for HubApiClient {
    async fn list_devices(&self) -> Result<Vec<Device>, ApiError> {
        let response = self
            .http
            .get(&devices_url(&self.base_url))
            .await
            .map_err(transport)?;

        if !response.is_success() {
            tracing::warn!("Listing devices returned status {}", response.status);
            return Err(ApiError::Status {
                status: response.status,
                message: response.reason,
            });
        }

        let devices: Vec<Device> = decode(&response)?;
        tracing::debug!("Fetched {} devices", devices.len());
        Ok(devices)
    }

    async fn create_device(&self, device_id: &str) -> Result<Device, ApiError> {
        let response = self
            .http
            .post(&device_url(&self.base_url, device_id))
            .await
            .map_err(transport)?;

        if !response.is_success() {
            tracing::warn!(
                "Creating device '{}' returned status {}",
                device_id,
                response.status
            );
            return Err(ApiError::Status {
                status: response.status,
                message: response.body,
            });
        }

        let device: Device = decode(&response)?;
        tracing::info!("Created device '{}'", device.device_id);
        Ok(device)
    }
}
