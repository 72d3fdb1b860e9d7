//! Sales and Weather Forecast Dashboard
//!
//! Shows the forecasted sales quantity and the forecasted temperature for a
//! city over the next two weeks.
//!
//! Data flow:
//! 1. On mount, the sales forecast and the store-closure alerts for the
//!    forecast window are fetched from the forecast API.
//! 2. The sales forecast's cities populate the dropdown. If it cannot be
//!    fetched, a notification says so and the dropdown stays hidden.
//! 3. Selecting a city shapes the cached sales data into a chart and fetches
//!    the city's weather forecast once; later selections reuse the cache.
//!
//! The API base address is taken from `FORECAST_API_URL` at build time.

use dioxus::prelude::*;
use forecast_api::config::{ApiConfig, DEFAULT_BASE_URL};
use forecast_api::series::ChartSeries;
use forecast_api::window::ForecastWindow;
use forecast_chart_ui::components::{
    AlertsButton, ChartContainer, ChartHeader, CitySelector, LoadingSpinner,
};
use forecast_chart_ui::js_bridge::{self, ChartConfig};
use forecast_chart_ui::state::AppState;

/// D3.js, loaded before the chart script is evaluated.
const D3_SRC: &str = "https://cdn.jsdelivr.net/npm/d3@7";

/// Chart container DOM element IDs used by D3.js to render into.
const SALES_CHART_ID: &str = "sales-forecast-chart";
const WEATHER_CHART_ID: &str = "weather-forecast-chart";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

/// Base address baked in at build time from `FORECAST_API_URL`.
fn api_config() -> ApiConfig {
    match ApiConfig::from_value(option_env!("FORECAST_API_URL")) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}; using {}", e, DEFAULT_BASE_URL);
            ApiConfig::default()
        }
    }
}

/// Render or clear one chart so it tracks `series`.
fn sync_chart(container_id: &str, series: Option<ChartSeries>, config: ChartConfig) {
    match series {
        Some(series) if !series.is_empty() => {
            js_bridge::init_charts();
            js_bridge::render_line_chart(container_id, &series, &config);
        }
        _ => js_bridge::destroy_chart(container_id),
    }
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| AppState::new(api_config(), ForecastWindow::from_today()));

    // Initial fetch on mount
    use_hook(move || state.load());

    use_effect(move || {
        let series = state.dashboard.read().sales_chart().cloned();
        sync_chart(
            SALES_CHART_ID,
            series,
            ChartConfig::new("#2196F3").with_value_label("units"),
        );
    });

    use_effect(move || {
        let series = state.dashboard.read().weather_chart().cloned();
        sync_chart(
            WEATHER_CHART_ID,
            series,
            ChartConfig::new("#FF9800").with_value_label("°C"),
        );
    });

    let dashboard = state.dashboard.read();
    let show_sales = dashboard.sales_chart().is_some_and(|s| !s.is_empty());
    let show_weather = dashboard.weather_chart().is_some_and(|s| !s.is_empty());
    drop(dashboard);

    rsx! {
        document::Script { src: D3_SRC }
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            AlertsButton {}

            if (state.loading)() {
                LoadingSpinner {}
            } else {
                CitySelector {}
            }

            if show_sales {
                ChartHeader {
                    title: "Forecasted sale quantity".to_string(),
                    unit_description: "units sold per day".to_string(),
                }
                ChartContainer { id: SALES_CHART_ID.to_string() }
            }

            if show_weather {
                ChartHeader {
                    title: "Forecasted weather (temperature in degrees Celsius)".to_string(),
                }
                ChartContainer { id: WEATHER_CHART_ID.to_string() }
            }
        }
    }
}
