//! Loading and empty-state notices

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            <p>"Loading devices..."</p>
        </div>
    }
}

#[component]
pub fn NoDevices() -> impl IntoView {
    view! {
        <div class="no-devices">
            <p>"No devices found. Create your first device!"</p>
        </div>
    }
}
