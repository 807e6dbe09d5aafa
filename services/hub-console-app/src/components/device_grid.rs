//! Device card grid

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::view::DeviceCardView;

/// Displays one card per device, in API order
#[component]
pub fn DeviceGrid(cards: Vec<DeviceCardView>) -> impl IntoView {
    view! {
        <div class="devices-grid">
            {cards
                .into_iter()
                .map(|card| view! { <DeviceCard card=card /> })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn DeviceCard(card: DeviceCardView) -> impl IntoView {
    view! {
        <div class="device-card">
            <div class="device-header">
                <h3>{card.device_id}</h3>
                <div class="status-badges">
                    <StatusBadge label=card.status kind=card.status_class />
                    <StatusBadge label=card.connection kind=card.connection_class />
                </div>
            </div>
            <div class="device-details">
                <div class="detail-row">
                    <span class="label">"Authentication:"</span>
                    <span class="value">{card.authentication_type}</span>
                </div>
                <div class="detail-row">
                    <span class="label">"Last Activity:"</span>
                    <span class="value">{card.last_activity}</span>
                </div>
                <div class="detail-row">
                    <span class="label">"Pending Messages:"</span>
                    <span class="value">{card.pending_messages}</span>
                </div>
            </div>
        </div>
    }
}
