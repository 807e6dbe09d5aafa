//! Hub Console - Leptos frontend
//!
//! Browser UI for listing and registering devices in an IoT hub registry.

pub mod api;
pub mod app;
pub mod components;
pub mod console;
pub mod view;

pub use api::{ApiError, ConnectionState, Device, DeviceApi, DeviceStatus};
pub use app::App;
pub use console::{ConsoleState, DeviceConsole, SuccessTicket};

/// Entry point for the WASM client
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();

    match api::browser::GlooDeviceApi::from_document() {
        Ok(api) => leptos::mount::mount_to_body(move || view! { <App api=api.clone() /> }),
        Err(e) => leptos::logging::error!("Cannot start device console: {}", e),
    }
}
