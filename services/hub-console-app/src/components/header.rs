//! Page header with refresh and create actions

use leptos::prelude::*;

use crate::view::refresh_label;

#[component]
pub fn Header(
    #[prop(into)] loading: Signal<bool>,
    on_refresh: Callback<()>,
    on_create: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="header">
            <h1>"IoT Hub Devices"</h1>
            <div class="button-group">
                <button on:click=move |_| on_refresh.run(()) disabled=move || loading.get()>
                    {move || refresh_label(loading.get())}
                </button>
                <button class="create-btn" on:click=move |_| on_create.run(())>
                    "➕ Create Device"
                </button>
            </div>
        </div>
    }
}
