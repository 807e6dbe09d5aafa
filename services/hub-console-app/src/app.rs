//! Main App component

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{provide_meta_context, Title};

use crate::api::DeviceApi;
use crate::components::create_modal::CreateDeviceModal;
use crate::components::device_grid::DeviceGrid;
use crate::components::header::Header;
use crate::components::messages::Messages;
use crate::components::placeholders::{LoadingSpinner, NoDevices};
use crate::console::{schedule_success_expiry, ConsoleState, CreateOutcome};
use crate::view::{self, Body};

/// Root application component
#[component]
pub fn App<A>(api: A) -> impl IntoView
where
    A: DeviceApi + Clone + Send + Sync + 'static,
{
    provide_meta_context();

    let state = RwSignal::new(ConsoleState::default());

    let refresh = {
        let api = api.clone();
        Callback::new(move |()| {
            let api = api.clone();
            spawn_local(async move { fetch_devices(state, &api).await });
        })
    };

    let submit = Callback::new(move |()| {
        let mut device_id = None;
        state.update(|s| device_id = s.begin_create());
        let Some(device_id) = device_id else {
            return;
        };

        let api = api.clone();
        spawn_local(async move {
            let result = api.create_device(&device_id).await;
            let mut outcome = CreateOutcome::Failed;
            state.update(|s| outcome = s.finish_create(&device_id, result));

            if let CreateOutcome::Created(ticket) = outcome {
                fetch_devices(state, &api).await;
                schedule_success_expiry(
                    ticket,
                    |callback, delay| set_timeout(callback, delay),
                    move |ticket| state.update(|s| s.expire_success(ticket)),
                );
            }
        });
    });

    Effect::new(move |_| refresh.run(()));

    view! {
        <Title text="IoT Hub Devices" />
        <div class="container">
            <Header
                loading=Signal::derive(move || state.with(|s| s.loading))
                on_refresh=refresh
                on_create=Callback::new(move |()| state.update(ConsoleState::open_modal))
            />

            <Messages
                error=Signal::derive(move || state.with(|s| s.error.clone()))
                success=Signal::derive(move || {
                    state.with(|s| s.success_text().map(str::to_string))
                })
            />

            {move || match state.with(view::body) {
                Body::Loading => view! { <LoadingSpinner /> }.into_any(),
                Body::Empty => view! { <NoDevices /> }.into_any(),
                Body::Grid(cards) => view! { <DeviceGrid cards=cards /> }.into_any(),
                Body::Blank => ().into_any(),
            }}

            <Show when=move || state.with(|s| s.show_modal)>
                <CreateDeviceModal
                    device_id=Signal::derive(move || state.with(|s| s.new_device_id.clone()))
                    creating=Signal::derive(move || state.with(|s| s.creating))
                    on_input=Callback::new(move |text: String| {
                        state.update(|s| s.set_new_device_id(text))
                    })
                    on_submit=submit
                    on_cancel=Callback::new(move |()| state.update(ConsoleState::cancel_modal))
                />
            </Show>
        </div>
    }
}

async fn fetch_devices<A: DeviceApi>(state: RwSignal<ConsoleState>, api: &A) {
    state.update(ConsoleState::begin_fetch);
    let result = api.list_devices().await;
    state.update(|s| s.finish_fetch(result));
}
