//! Command-line front end driving the device console

use hub_console_app::console::{ConsoleState, DeviceConsole};
use hub_console_app::view::{self, Body};
use hub_console_app::DeviceApi;

/// Render the console state as plain text, one line per device card
pub fn render(state: &ConsoleState) -> String {
    let mut out = String::new();

    if let Some(error) = &state.error {
        out.push_str(&format!("Error: {}\n", error));
    }
    if let Some(success) = state.success_text() {
        out.push_str(&format!("Success: {}\n", success));
    }

    match view::body(state) {
        Body::Loading => out.push_str("Loading devices...\n"),
        Body::Empty => out.push_str("No devices found. Create your first device!\n"),
        Body::Grid(cards) => {
            for card in cards {
                out.push_str(&format!(
                    "{}  [{}] [{}]  auth={}  last activity={}  pending={}\n",
                    card.device_id,
                    card.status,
                    card.connection,
                    card.authentication_type,
                    card.last_activity,
                    card.pending_messages
                ));
            }
        }
        Body::Blank => {}
    }

    out
}

fn banner_error(state: &ConsoleState) -> crate::ConsoleError {
    crate::ConsoleError::Console(
        state
            .error
            .clone()
            .unwrap_or_else(|| "Device request failed".to_string()),
    )
}

/// Fetch the device collection and render it
pub async fn list<A: DeviceApi>(console: &mut DeviceConsole<A>) -> crate::Result<String> {
    console.refresh().await;
    if console.state().error.is_some() {
        return Err(banner_error(console.state()));
    }
    Ok(render(console.state()))
}

/// Register a device through the create form flow and render the refreshed list
pub async fn create<A: DeviceApi>(
    console: &mut DeviceConsole<A>,
    device_id: &str,
) -> crate::Result<String> {
    console.open_modal();
    console.set_new_device_id(device_id);

    match console.submit().await {
        Some(_) => Ok(render(console.state())),
        None => Err(banner_error(console.state())),
    }
}
