//! Button that shows the store-closure suggestions.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shown only once alerts have been fetched.
#[component]
pub fn AlertsButton() -> Element {
    let state = use_context::<AppState>();
    if !state.dashboard.read().has_alerts() {
        return rsx! {};
    }

    rsx! {
        button {
            style: "background: #06B6D4; color: white; border: none; padding: 8px; cursor: pointer;",
            onclick: move |_| state.show_alerts(),
            "Get alerts"
        }
    }
}
