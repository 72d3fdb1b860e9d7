//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The fetch actions live here too, so components only translate events.

use crate::js_bridge;
use dioxus::prelude::*;
use forecast_api::client::ForecastClient;
use forecast_api::config::ApiConfig;
use forecast_api::dashboard::{CitySelection, Dashboard};
use forecast_api::window::ForecastWindow;

/// Shared application state for the forecast dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// API client
    pub client: Signal<ForecastClient>,
    /// Fetched data, weather cache and the selected city's chart series
    pub dashboard: Signal<Dashboard>,
    /// Whether the initial sales forecast is still loading
    pub loading: Signal<bool>,
}

impl AppState {
    pub fn new(config: ApiConfig, window: ForecastWindow) -> Self {
        Self {
            client: Signal::new(ForecastClient::new(config)),
            dashboard: Signal::new(Dashboard::new(window)),
            loading: Signal::new(true),
        }
    }

    /// Fetch the sales forecast and the alerts. The two requests run
    /// independently and update disjoint parts of the dashboard.
    pub fn load(self) {
        let client = self.client.peek().clone();
        let window = *self.dashboard.peek().window();
        let mut dashboard = self.dashboard;
        let mut loading = self.loading;

        let sales_client = client.clone();
        spawn(async move {
            log::info!("Fetching sales forecast for {}", window);
            match sales_client.sales_forecast(&window).await {
                Ok(forecast) => {
                    if let Err(e) = dashboard.write().load_sales_forecast(forecast) {
                        log::warn!("{}", e);
                        js_bridge::notify(&e.to_string());
                    }
                }
                Err(e) => log::error!("{}", e),
            }
            loading.set(false);
        });

        spawn(async move {
            match client.alerts(&window).await {
                Ok(alerts) => dashboard.write().load_alerts(alerts),
                Err(e) => log::error!("{}", e),
            }
        });
    }

    /// Apply a city selection, fetching the city's weather if it is not cached.
    pub fn select_city(self, selection: CitySelection) {
        let mut dashboard = self.dashboard;
        let Some(request) = dashboard.write().select_city(selection) else {
            return;
        };
        let client = self.client.peek().clone();
        spawn(async move {
            log::info!("Fetching weather forecast for {}", request.city);
            match client.weather_forecast(&request.window, &request.city).await {
                Ok(samples) => dashboard.write().receive_weather(&request.city, samples),
                Err(e) => {
                    log::error!("{}", e);
                    dashboard.write().weather_failed(&request.city);
                }
            }
        });
    }

    /// Show the alert summary as a browser notification.
    pub fn show_alerts(self) {
        if let Some(summary) = self.dashboard.peek().alert_summary() {
            js_bridge::notify(&summary);
        }
    }
}
