//! Console UI state and the request/response flow around it
//!
//! `ConsoleState` holds everything the page renders. Its transitions are
//! synchronous so the reactive frontend can apply them around its own
//! awaits; `DeviceConsole` drives the same transitions against any
//! [`DeviceApi`] for native callers and tests.

use std::time::Duration;

use crate::api::{ApiError, Device, DeviceApi};

/// How long a success banner stays visible
pub const SUCCESS_BANNER_TTL: Duration = Duration::from_secs(5);

/// Error shown when the create form is submitted blank
pub const EMPTY_DEVICE_ID_ERROR: &str = "Device ID cannot be empty";

/// Transient success message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessBanner {
    pub text: String,
    generation: u64,
}

/// Handle for expiring one specific success banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessTicket(u64);

/// Result of completing a create request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Device created; the collection must be re-fetched and the banner
    /// expired after [`SUCCESS_BANNER_TTL`]
    Created(SuccessTicket),
    Failed,
}

/// Everything the page renders
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleState {
    pub devices: Vec<Device>,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<SuccessBanner>,
    pub show_modal: bool,
    pub new_device_id: String,
    pub creating: bool,
    generation: u64,
}

impl Default for ConsoleState {
    fn default() -> Self {
        Self {
            devices: Vec::new(),
            loading: true,
            error: None,
            success: None,
            show_modal: false,
            new_device_id: String::new(),
            creating: false,
            generation: 0,
        }
    }
}

impl ConsoleState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a list response; a failure keeps the previous collection
    pub fn finish_fetch(&mut self, result: Result<Vec<Device>, ApiError>) {
        self.loading = false;
        match result {
            Ok(devices) => self.devices = devices,
            Err(err) => self.error = Some(fetch_error_message(&err)),
        }
    }

    pub fn open_modal(&mut self) {
        self.show_modal = true;
    }

    /// Close the modal and drop the typed id, unless a create is in flight
    pub fn cancel_modal(&mut self) {
        if self.creating {
            return;
        }
        self.show_modal = false;
        self.new_device_id.clear();
    }

    pub fn set_new_device_id(&mut self, text: impl Into<String>) {
        self.new_device_id = text.into();
    }

    /// Validate the typed id and mark a create as in flight.
    ///
    /// Returns the trimmed id to send, or `None` when the input is blank or
    /// a create is already in flight, in which case no request must be issued.
    pub fn begin_create(&mut self) -> Option<String> {
        if self.creating {
            return None;
        }

        let device_id = self.new_device_id.trim();
        if device_id.is_empty() {
            self.error = Some(EMPTY_DEVICE_ID_ERROR.to_string());
            return None;
        }

        let device_id = device_id.to_string();
        self.creating = true;
        self.error = None;
        self.success = None;
        Some(device_id)
    }

    pub fn finish_create(
        &mut self,
        device_id: &str,
        result: Result<Device, ApiError>,
    ) -> CreateOutcome {
        self.creating = false;
        match result {
            Ok(_) => {
                self.generation += 1;
                self.success = Some(SuccessBanner {
                    text: format!("Device \"{}\" created successfully!", device_id),
                    generation: self.generation,
                });
                self.new_device_id.clear();
                self.show_modal = false;
                CreateOutcome::Created(SuccessTicket(self.generation))
            }
            Err(err) => {
                self.error = Some(create_error_message(&err));
                CreateOutcome::Failed
            }
        }
    }

    /// Clear the success banner if it is still the one `ticket` was issued for
    pub fn expire_success(&mut self, ticket: SuccessTicket) {
        if self
            .success
            .as_ref()
            .is_some_and(|banner| banner.generation == ticket.0)
        {
            self.success = None;
        }
    }

    pub fn success_text(&self) -> Option<&str> {
        self.success.as_ref().map(|banner| banner.text.as_str())
    }
}

/// Hand the expiry of `ticket`'s banner to `timer`, due after
/// [`SUCCESS_BANNER_TTL`]
pub fn schedule_success_expiry<T, E>(ticket: SuccessTicket, timer: T, expire: E)
where
    T: FnOnce(Box<dyn FnOnce() + Send>, Duration),
    E: FnOnce(SuccessTicket) + Send + 'static,
{
    timer(Box::new(move || expire(ticket)), SUCCESS_BANNER_TTL);
}

fn fetch_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { .. } => format!("Failed to fetch devices: {}", err),
        _ => err.to_string(),
    }
}

fn create_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { .. } => format!("Failed to create device: {}", err),
        _ => err.to_string(),
    }
}

/// Drives [`ConsoleState`] against a device API
#[derive(Debug)]
pub struct DeviceConsole<A> {
    api: A,
    state: ConsoleState,
}

impl<A: DeviceApi> DeviceConsole<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: ConsoleState::default(),
        }
    }

    pub fn state(&self) -> &ConsoleState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch the device collection
    pub async fn refresh(&mut self) {
        self.state.begin_fetch();
        let result = self.api.list_devices().await;
        self.state.finish_fetch(result);
    }

    pub fn open_modal(&mut self) {
        self.state.open_modal();
    }

    pub fn cancel_modal(&mut self) {
        self.state.cancel_modal();
    }

    pub fn set_new_device_id(&mut self, text: impl Into<String>) {
        self.state.set_new_device_id(text);
    }

    /// Submit the create form; on success re-fetches the collection once and
    /// returns the ticket for expiring the success banner
    pub async fn submit(&mut self) -> Option<SuccessTicket> {
        let device_id = self.state.begin_create()?;
        let result = self.api.create_device(&device_id).await;
        match self.state.finish_create(&device_id, result) {
            CreateOutcome::Created(ticket) => {
                self.refresh().await;
                Some(ticket)
            }
            CreateOutcome::Failed => None,
        }
    }

    pub fn expire_success(&mut self, ticket: SuccessTicket) {
        self.state.expire_success(ticket);
    }
}
