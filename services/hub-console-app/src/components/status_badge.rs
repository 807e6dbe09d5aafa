//! Status badge component

use leptos::prelude::*;

/// A colored badge: green for `badge-success`, red for `badge-danger`,
/// gray for anything else
#[component]
pub fn StatusBadge(label: String, kind: &'static str) -> impl IntoView {
    view! {
        <span class=format!("badge {}", kind)>{label}</span>
    }
}
