//! Error and success banners

use leptos::prelude::*;

#[component]
pub fn Messages(
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] success: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        {move || {
            error
                .get()
                .map(|text| {
                    view! {
                        <div class="error-message">
                            <strong>"Error:"</strong>
                            " "
                            {text}
                        </div>
                    }
                })
        }}
        {move || {
            success
                .get()
                .map(|text| {
                    view! {
                        <div class="success-message">
                            <strong>"Success:"</strong>
                            " "
                            {text}
                        </div>
                    }
                })
        }}
    }
}
