//! Device registry API types and client contract
//!
//! These types mirror the JSON records served by the hub's web API and are
//! shared between the browser frontend and the native host.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

/// Characters left as-is by `encodeURIComponent`
const PATH_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Name of the meta tag the host uses to inject the API base URL
pub const BASE_URL_META: &str = "hub-api-base-url";

/// Whether the device identity is enabled on the hub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DeviceStatus {
    Enabled,
    Disabled,
    /// Any other value the hub reports, kept verbatim
    Other(String),
}

impl From<String> for DeviceStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Enabled" => DeviceStatus::Enabled,
            "Disabled" => DeviceStatus::Disabled,
            _ => DeviceStatus::Other(value),
        }
    }
}

impl From<DeviceStatus> for String {
    fn from(status: DeviceStatus) -> Self {
        status.to_string()
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceStatus::Enabled => write!(f, "Enabled"),
            DeviceStatus::Disabled => write!(f, "Disabled"),
            DeviceStatus::Other(value) => write!(f, "{}", value),
        }
    }
}

/// Whether the device client is currently connected to the hub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConnectionState {
    Connected,
    Disconnected,
    /// Any other value the hub reports, kept verbatim
    Other(String),
}

impl From<String> for ConnectionState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Connected" => ConnectionState::Connected,
            "Disconnected" => ConnectionState::Disconnected,
            _ => ConnectionState::Other(value),
        }
    }
}

impl From<ConnectionState> for String {
    fn from(state: ConnectionState) -> Self {
        state.to_string()
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionState::Connected => write!(f, "Connected"),
            ConnectionState::Disconnected => write!(f, "Disconnected"),
            ConnectionState::Other(value) => write!(f, "{}", value),
        }
    }
}

/// Device record as returned by /api/devices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_id: String,
    pub status: DeviceStatus,
    pub connection_state: ConnectionState,
    #[serde(default)]
    pub authentication_type: String,
    #[serde(default, deserialize_with = "deserialize_activity_time")]
    pub last_activity_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub cloud_to_device_message_count: u32,
}

/// Accepts RFC 3339 timestamps and offset-less ones read as UTC; anything
/// unparseable becomes `None` instead of failing the whole record.
fn deserialize_activity_time<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let raw = raw.trim();

    if let Ok(time) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(time.with_timezone(&Utc)));
    }
    Ok(raw
        .parse::<NaiveDateTime>()
        .ok()
        .map(|naive| naive.and_utc()))
}

/// Failure talking to the device registry API
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(String),

    /// Non-2xx response; `message` is the status text for reads and the
    /// response body for writes
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(String),
}

/// Client for the device registry API
#[async_trait(?Send)]
#[cfg_attr(test, mockall::automock)]
pub trait DeviceApi {
    /// Fetch the full device collection
    async fn list_devices(&self) -> Result<Vec<Device>, ApiError>;

    /// Register a new device identity
    async fn create_device(&self, device_id: &str) -> Result<Device, ApiError>;
}

/// URL of the device collection
pub fn devices_url(base_url: &str) -> String {
    format!("{}/api/devices", base_url.trim_end_matches('/'))
}

/// URL of a single device, with the id escaped as one path segment
pub fn device_url(base_url: &str, device_id: &str) -> String {
    format!(
        "{}/{}",
        devices_url(base_url),
        utf8_percent_encode(device_id, PATH_COMPONENT)
    )
}

/// Browser implementation backed by the Fetch API
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub mod browser {
    use super::*;

    #[derive(Debug, Clone)]
    pub struct GlooDeviceApi {
        base_url: String,
    }

    impl GlooDeviceApi {
        pub fn new(base_url: impl Into<String>) -> Self {
            Self {
                base_url: base_url.into(),
            }
        }

        /// Base URL from the injected meta tag, falling back to the page origin
        pub fn from_document() -> Result<Self, ApiError> {
            let window = web_sys::window().ok_or(ApiError::Transport("no window".into()))?;
            let configured = window
                .document()
                .and_then(|doc| {
                    doc.query_selector(&format!("meta[name=\"{}\"]", BASE_URL_META))
                        .ok()
                        .flatten()
                })
                .and_then(|meta| meta.get_attribute("content"))
                .filter(|url| !url.trim().is_empty());

            let base_url = match configured {
                Some(url) => url,
                None => window
                    .location()
                    .origin()
                    .map_err(|e| ApiError::Transport(format!("{:?}", e)))?,
            };
            leptos::logging::log!("Using device API at {}", base_url);
            Ok(Self::new(base_url))
        }
    }

    #[async_trait(?Send)]
    impl DeviceApi for GlooDeviceApi {
        async fn list_devices(&self) -> Result<Vec<Device>, ApiError> {
            let resp = gloo_net::http::Request::get(&devices_url(&self.base_url))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;

            if !resp.ok() {
                return Err(ApiError::Status {
                    status: resp.status(),
                    message: resp.status_text(),
                });
            }

            resp.json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }

        async fn create_device(&self, device_id: &str) -> Result<Device, ApiError> {
            let resp = gloo_net::http::Request::post(&device_url(&self.base_url, device_id))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;

            if !resp.ok() {
                let status = resp.status();
                let message = resp
                    .text()
                    .await
                    .map_err(|e| ApiError::Transport(e.to_string()))?;
                return Err(ApiError::Status { status, message });
            }

            resp.json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
    }
}
