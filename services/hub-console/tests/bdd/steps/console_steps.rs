//! BDD step definitions for the device list and create features

use chrono::TimeZone;
use cucumber::{given, then, when};
use hub_console::hub_client::HubApiClient;
use hub_console::{build_console, Config};
use hub_console_app::view::{self, Body, DeviceCardView};
use hub_console_app::{ConnectionState, DeviceConsole, DeviceStatus};

use crate::fake_hub::{new_device, FakeHub};
use crate::world::ConsoleWorld;

fn hub(world: &ConsoleWorld) -> &FakeHub {
    world.hub.as_ref().expect("device hub not started")
}

fn console(world: &mut ConsoleWorld) -> &mut DeviceConsole<HubApiClient> {
    if world.console.is_none() {
        let base_url = world
            .api_base_url
            .clone()
            .or_else(|| world.hub.as_ref().map(|h| h.base_url.clone()))
            .expect("no device API configured");
        let mut config = Config::default();
        config.api.base_url = base_url;
        world.console = Some(build_console(&config).expect("console should build"));
    }
    world.console.as_mut().unwrap()
}

fn cards(world: &ConsoleWorld) -> Vec<DeviceCardView> {
    let state = world.console.as_ref().expect("console not loaded").state();
    match view::body(state) {
        Body::Grid(cards) => cards,
        other => panic!("Expected a device grid, got {:?}", other),
    }
}

// --- Given steps ---

#[given("a device hub with no devices")]
async fn hub_with_no_devices(world: &mut ConsoleWorld) {
    world.hub = Some(FakeHub::start().await);
}

#[given(expr = "a device hub with {int} devices")]
async fn hub_with_devices(world: &mut ConsoleWorld, count: usize) {
    let hub = FakeHub::start().await;
    hub.lock().devices = (1..=count)
        .map(|i| new_device(&format!("device-{:03}", i)))
        .collect();
    world.hub = Some(hub);
}

#[given(expr = "the hub has device {string} that is {word} and {word}")]
fn hub_has_device(world: &mut ConsoleWorld, device_id: String, status: String, connection: String) {
    let mut device = new_device(&device_id);
    device.status = DeviceStatus::from(status);
    device.connection_state = ConnectionState::from(connection);
    device.authentication_type = "SelfSigned".to_string();
    device.last_activity_time = Some(chrono::Utc.with_ymd_and_hms(2024, 3, 1, 8, 15, 0).unwrap());
    device.cloud_to_device_message_count = 5;
    hub(world).lock().devices.push(device);
}

#[given(expr = "the device hub fails listing with status {int}")]
fn hub_fails_listing(world: &mut ConsoleWorld, status: u16) {
    hub(world).lock().list_failure = Some(status);
}

#[given(expr = "the device hub rejects creation with status {int} and body {string}")]
fn hub_rejects_creation(world: &mut ConsoleWorld, status: u16, body: String) {
    hub(world).lock().create_failure = Some((status, body));
}

#[given("an unreachable device hub")]
fn unreachable_hub(world: &mut ConsoleWorld) {
    // port 1 is reserved and unbound
    world.api_base_url = Some("http://127.0.0.1:1".to_string());
}

#[given("the console has loaded")]
async fn console_has_loaded(world: &mut ConsoleWorld) {
    console(world).refresh().await;
}

// --- When steps ---

#[when("the console loads")]
async fn console_loads(world: &mut ConsoleWorld) {
    console(world).refresh().await;
}

#[when("the console refreshes")]
async fn console_refreshes(world: &mut ConsoleWorld) {
    console(world).refresh().await;
}

#[when(expr = "I submit a new device {string}")]
async fn submit_new_device(world: &mut ConsoleWorld, device_id: String) {
    world.list_calls_before_submit = world.hub.as_ref().map_or(0, |h| h.lock().list_calls);
    let console = console(world);
    console.open_modal();
    console.set_new_device_id(device_id);
    let ticket = console.submit().await;
    world.ticket = ticket;
}

#[when("the success banner expires")]
fn success_banner_expires(world: &mut ConsoleWorld) {
    let ticket = world.ticket.expect("no success ticket issued");
    console(world).expire_success(ticket);
}

// --- Then steps ---

#[then(expr = "the console shows {int} device cards")]
fn console_shows_cards(world: &mut ConsoleWorld, count: usize) {
    assert_eq!(cards(world).len(), count);
}

#[then("the console shows the empty-state notice")]
fn console_shows_empty_notice(world: &mut ConsoleWorld) {
    let state = world.console.as_ref().expect("console not loaded").state();
    assert_eq!(view::body(state), Body::Empty);
}

#[then(expr = "card {string} shows {string} and {string}")]
fn card_shows_badges(world: &mut ConsoleWorld, device_id: String, status: String, connection: String) {
    let card = cards(world)
        .into_iter()
        .find(|c| c.device_id == device_id)
        .unwrap_or_else(|| panic!("no card for '{}'", device_id));
    assert_eq!(card.status, status);
    assert_eq!(card.connection, connection);
}

#[then(expr = "card {string} shows last activity {string} and {int} pending messages")]
fn card_shows_details(world: &mut ConsoleWorld, device_id: String, last_activity: String, pending: u32) {
    let card = cards(world)
        .into_iter()
        .find(|c| c.device_id == device_id)
        .unwrap_or_else(|| panic!("no card for '{}'", device_id));
    assert_eq!(card.authentication_type, "SelfSigned");
    assert_eq!(card.last_activity, last_activity);
    assert_eq!(card.pending_messages, pending);
}

#[then(expr = "the error banner reads {string}")]
fn error_banner_reads(world: &mut ConsoleWorld, expected: String) {
    let state = world.console.as_ref().expect("console not loaded").state();
    assert_eq!(state.error.as_deref(), Some(expected.as_str()));
}

#[then(expr = "the error banner contains {string}")]
fn error_banner_contains(world: &mut ConsoleWorld, expected: String) {
    let state = world.console.as_ref().expect("console not loaded").state();
    let error = state.error.as_deref().expect("no error banner");
    assert!(
        error.contains(&expected),
        "Expected error banner to contain '{}', got '{}'",
        expected,
        error
    );
}

#[then("no error banner is shown")]
fn no_error_banner(world: &mut ConsoleWorld) {
    let state = world.console.as_ref().expect("console not loaded").state();
    assert_eq!(state.error, None);
}

#[then(expr = "the success banner reads {string}")]
fn success_banner_reads(world: &mut ConsoleWorld, expected: String) {
    let state = world.console.as_ref().expect("console not loaded").state();
    assert_eq!(state.success_text(), Some(expected.as_str()));
}

#[then("no success banner is shown")]
fn no_success_banner(world: &mut ConsoleWorld) {
    let state = world.console.as_ref().expect("console not loaded").state();
    assert_eq!(state.success_text(), None);
}

#[then("the create modal is closed with an empty input")]
fn modal_closed(world: &mut ConsoleWorld) {
    let state = world.console.as_ref().expect("console not loaded").state();
    assert!(!state.show_modal);
    assert!(state.new_device_id.is_empty());
    assert!(!state.creating);
}

#[then(expr = "the create modal is still open with {string}")]
fn modal_still_open(world: &mut ConsoleWorld, input: String) {
    let state = world.console.as_ref().expect("console not loaded").state();
    assert!(state.show_modal);
    assert_eq!(state.new_device_id, input);
}

#[then("the hub received no create request")]
fn no_create_request(world: &mut ConsoleWorld) {
    assert!(hub(world).lock().create_requests.is_empty());
}

#[then(expr = "the hub received a create request for {string}")]
fn create_request_for(world: &mut ConsoleWorld, device_id: String) {
    assert_eq!(hub(world).lock().create_requests, vec![device_id]);
}

#[then(expr = "the hub received {int} list request(s) after the submit")]
fn list_requests_after_submit(world: &mut ConsoleWorld, count: usize) {
    let calls = hub(world).lock().list_calls;
    assert_eq!(calls - world.list_calls_before_submit, count);
}
