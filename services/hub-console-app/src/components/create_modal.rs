//! Modal form for registering a new device

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::view::submit_label;

/// Text field plus cancel/submit; both buttons are disabled while a create
/// request is in flight
#[component]
pub fn CreateDeviceModal(
    #[prop(into)] device_id: Signal<String>,
    #[prop(into)] creating: Signal<bool>,
    on_input: Callback<String>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h2>"Create New Device"</h2>
                <form on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }>
                    <div class="form-group">
                        <label for="deviceId">"Device ID:"</label>
                        <input
                            type="text"
                            id="deviceId"
                            placeholder="Enter device ID (e.g., device-001)"
                            autofocus=true
                            required=true
                            prop:value=move || device_id.get()
                            on:input=move |ev| on_input.run(event_target_value(&ev))
                        />
                    </div>
                    <div class="modal-buttons">
                        <button
                            type="button"
                            class="cancel-btn"
                            on:click=move |_| on_cancel.run(())
                            disabled=move || creating.get()
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="create-btn" disabled=move || creating.get()>
                            {move || submit_label(creating.get())}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
