//! UI components for the device console

pub mod create_modal;
pub mod device_grid;
pub mod header;
pub mod messages;
pub mod placeholders;
pub mod status_badge;
