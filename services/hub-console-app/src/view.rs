//! Presentation model derived from the console state

use chrono::{DateTime, Utc};

use crate::api::{ConnectionState, Device, DeviceStatus};
use crate::console::ConsoleState;

/// What fills the page below the banners
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Loading,
    Empty,
    Grid(Vec<DeviceCardView>),
    /// Nothing to show, e.g. the first fetch failed
    Blank,
}

/// Display strings for one device card
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceCardView {
    pub device_id: String,
    pub status: String,
    pub status_class: &'static str,
    pub connection: String,
    pub connection_class: &'static str,
    pub authentication_type: String,
    pub last_activity: String,
    pub pending_messages: u32,
}

impl From<&Device> for DeviceCardView {
    fn from(device: &Device) -> Self {
        Self {
            device_id: device.device_id.clone(),
            status: device.status.to_string(),
            status_class: status_class(&device.status),
            connection: device.connection_state.to_string(),
            connection_class: connection_class(&device.connection_state),
            authentication_type: device.authentication_type.clone(),
            last_activity: format_last_activity(device.last_activity_time),
            pending_messages: device.cloud_to_device_message_count,
        }
    }
}

pub fn body(state: &ConsoleState) -> Body {
    if !state.devices.is_empty() {
        Body::Grid(state.devices.iter().map(DeviceCardView::from).collect())
    } else if state.loading {
        Body::Loading
    } else if state.error.is_none() {
        Body::Empty
    } else {
        Body::Blank
    }
}

pub fn status_class(status: &DeviceStatus) -> &'static str {
    match status {
        DeviceStatus::Enabled => "badge-success",
        _ => "badge-danger",
    }
}

pub fn connection_class(state: &ConnectionState) -> &'static str {
    match state {
        ConnectionState::Connected => "badge-success",
        _ => "badge-secondary",
    }
}

pub fn format_last_activity(time: Option<DateTime<Utc>>) -> String {
    match time {
        Some(time) => time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => "N/A".to_string(),
    }
}

pub fn refresh_label(loading: bool) -> &'static str {
    if loading {
        "Loading..."
    } else {
        "🔄 Refresh"
    }
}

pub fn submit_label(creating: bool) -> &'static str {
    if creating {
        "Creating..."
    } else {
        "Create"
    }
}
