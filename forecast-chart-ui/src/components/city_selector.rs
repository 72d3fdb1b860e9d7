//! Dropdown selector for choosing a city.

use crate::state::AppState;
use dioxus::prelude::*;
use forecast_api::dashboard::{CitySelection, NO_CITY_VALUE};

/// City dropdown selector.
/// Lists the cities of the sales forecast; the first option clears the charts.
#[component]
pub fn CitySelector() -> Element {
    let state = use_context::<AppState>();
    let dashboard = state.dashboard.read();
    let cities = dashboard.cities().to_vec();
    let selected = dashboard.selection().value().to_string();
    drop(dashboard);

    if cities.is_empty() {
        return rsx! {};
    }

    let on_change = move |evt: Event<FormData>| {
        state.select_city(CitySelection::from_value(&evt.value()));
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 18px;",
                "Choose a city"
            }
            select {
                id: "city-select",
                style: "border: 1px solid #999; padding: 4px;",
                onchange: on_change,
                option {
                    value: NO_CITY_VALUE,
                    selected: selected == NO_CITY_VALUE,
                    "Choose a city"
                }
                for city in cities.iter() {
                    option {
                        value: "{city}",
                        selected: *city == selected,
                        "{city}"
                    }
                }
            }
        }
    }
}
