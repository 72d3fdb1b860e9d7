//! Dashboard view state, independent of any UI toolkit.
//!
//! `Dashboard` holds what the view renders: the known cities, the fetched
//! sales forecast and alerts, a per-city weather cache and the chart series
//! for the selected city. It does no I/O itself. `select_city` returns a
//! `WeatherRequest` when the caller needs to fetch weather, and the result is
//! handed back through `receive_weather`.

use crate::model::{alert_summary, Alerts, SalesForecast, WeatherSample};
use crate::series::{sales_series, weather_series, ChartSeries};
use crate::window::ForecastWindow;
use log::{debug, info};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Option value of the city dropdown that means "no city".
pub const NO_CITY_VALUE: &str = "none";

/// Payload of the city dropdown's change event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CitySelection {
    #[default]
    None,
    City(String),
}

impl CitySelection {
    pub fn from_value(value: &str) -> Self {
        if value == NO_CITY_VALUE || value.is_empty() {
            CitySelection::None
        } else {
            CitySelection::City(value.to_string())
        }
    }

    /// The dropdown option value for this selection.
    pub fn value(&self) -> &str {
        match self {
            CitySelection::None => NO_CITY_VALUE,
            CitySelection::City(city) => city,
        }
    }

    pub fn city(&self) -> Option<&str> {
        match self {
            CitySelection::None => None,
            CitySelection::City(city) => Some(city),
        }
    }
}

/// A weather fetch the caller must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRequest {
    pub city: String,
    pub window: ForecastWindow,
}

pub const NO_SALES_FORECAST_MESSAGE: &str = "No sales forecast available";

/// The initial sales forecast fetch came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesForecastUnavailable;

impl fmt::Display for SalesForecastUnavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(NO_SALES_FORECAST_MESSAGE)
    }
}

impl std::error::Error for SalesForecastUnavailable {}

#[derive(Debug, Clone)]
pub struct Dashboard {
    window: ForecastWindow,
    sales_forecast: Option<SalesForecast>,
    cities: Vec<String>,
    alerts: Option<Alerts>,
    weather: HashMap<String, Vec<WeatherSample>>,
    pending_weather: HashSet<String>,
    selection: CitySelection,
    sales_chart: Option<ChartSeries>,
    weather_chart: Option<ChartSeries>,
}

impl Dashboard {
    pub fn new(window: ForecastWindow) -> Self {
        Self {
            window,
            sales_forecast: None,
            cities: Vec::new(),
            alerts: None,
            weather: HashMap::new(),
            pending_weather: HashSet::new(),
            selection: CitySelection::None,
            sales_chart: None,
            weather_chart: None,
        }
    }

    pub fn window(&self) -> &ForecastWindow {
        &self.window
    }

    /// Store the result of the initial sales forecast fetch.
    ///
    /// The city list is taken from the forecast's keys.
    pub fn load_sales_forecast(
        &mut self,
        forecast: Option<SalesForecast>,
    ) -> Result<(), SalesForecastUnavailable> {
        let forecast = forecast.ok_or(SalesForecastUnavailable)?;
        self.cities = forecast.keys().cloned().collect();
        info!("Sales forecast loaded for {} cities", self.cities.len());
        self.sales_forecast = Some(forecast);
        Ok(())
    }

    /// Store the result of the initial alerts fetch. `None` leaves the
    /// dashboard without alerts.
    pub fn load_alerts(&mut self, alerts: Option<Alerts>) {
        if let Some(alerts) = alerts {
            self.alerts = Some(alerts);
        }
    }

    /// Apply a city selection.
    ///
    /// Rebuilds the sales chart from the cached forecast and the weather chart
    /// from the weather cache. Returns a request when weather for the city is
    /// neither cached nor already being fetched.
    pub fn select_city(&mut self, selection: CitySelection) -> Option<WeatherRequest> {
        self.selection = selection;
        let city = match &self.selection {
            CitySelection::None => {
                self.sales_chart = None;
                self.weather_chart = None;
                return None;
            }
            CitySelection::City(city) => city.clone(),
        };

        self.sales_chart = self
            .sales_forecast
            .as_mut()
            .and_then(|forecast| sales_series(forecast, &city));

        if let Some(samples) = self.weather.get_mut(&city) {
            self.weather_chart = Some(weather_series(samples));
            return None;
        }

        self.weather_chart = None;
        if !self.pending_weather.insert(city.clone()) {
            debug!("Weather for {} already requested", city);
            return None;
        }
        Some(WeatherRequest {
            city,
            window: self.window,
        })
    }

    /// Cache fetched weather for `city` and chart it if the city is still selected.
    pub fn receive_weather(&mut self, city: &str, samples: Vec<WeatherSample>) {
        self.pending_weather.remove(city);
        let cached = self.weather.entry(city.to_string()).or_insert(samples);
        if self.selection.city() == Some(city) {
            self.weather_chart = Some(weather_series(cached));
        }
    }

    /// Forget an in-flight weather request that failed, so the next selection retries it.
    pub fn weather_failed(&mut self, city: &str) {
        self.pending_weather.remove(city);
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn selection(&self) -> &CitySelection {
        &self.selection
    }

    pub fn sales_chart(&self) -> Option<&ChartSeries> {
        self.sales_chart.as_ref()
    }

    pub fn weather_chart(&self) -> Option<&ChartSeries> {
        self.weather_chart.as_ref()
    }

    pub fn cached_weather(&self, city: &str) -> Option<&[WeatherSample]> {
        self.weather.get(city).map(Vec::as_slice)
    }

    pub fn has_alerts(&self) -> bool {
        self.alerts.is_some()
    }

    /// Message listing every city's closure suggestions.
    pub fn alert_summary(&self) -> Option<String> {
        self.alerts.as_ref().map(alert_summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::WEATHER_Y_AXIS_LABEL;
    use chrono::NaiveDate;

    fn window() -> ForecastWindow {
        ForecastWindow::starting(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    fn loaded() -> Dashboard {
        let forecast: SalesForecast = serde_json::from_str(
            r#"{
                "CityA": [
                    {"date": "2024-01-02", "forecastedSalesQty": 5},
                    {"date": "2024-01-01", "forecastedSalesQty": 3}
                ],
                "CityB": [{"date": "2024-01-01", "forecastedSalesQty": 8}]
            }"#,
        )
        .unwrap();
        let mut dashboard = Dashboard::new(window());
        dashboard.load_sales_forecast(Some(forecast)).unwrap();
        dashboard
    }

    fn weather(date: &str, temperature: f64) -> WeatherSample {
        WeatherSample {
            date: date.to_string(),
            temperature,
        }
    }

    #[test]
    fn test_selection_from_value() {
        assert_eq!(CitySelection::from_value("none"), CitySelection::None);
        assert_eq!(CitySelection::from_value(""), CitySelection::None);
        let city = CitySelection::from_value("CityA");
        assert_eq!(city, CitySelection::City("CityA".to_string()));
        assert_eq!(city.value(), "CityA");
        assert_eq!(CitySelection::None.value(), NO_CITY_VALUE);
    }

    #[test]
    fn test_cities_come_from_sales_forecast() {
        assert_eq!(loaded().cities(), &["CityA", "CityB"]);
    }

    #[test]
    fn test_cities_and_alerts_keep_server_order() {
        let forecast: SalesForecast = serde_json::from_str(
            r#"{
                "Zurich": [{"date": "2024-01-01", "forecastedSalesQty": 4}],
                "Berlin": [{"date": "2024-01-01", "forecastedSalesQty": 7}]
            }"#,
        )
        .unwrap();
        let alerts: Alerts =
            serde_json::from_str(r#"{"Zurich": ["storm"], "Berlin": ["holiday"]}"#).unwrap();

        let mut dashboard = Dashboard::new(window());
        dashboard.load_sales_forecast(Some(forecast)).unwrap();
        dashboard.load_alerts(Some(alerts));

        assert_eq!(dashboard.cities(), &["Zurich", "Berlin"]);
        assert_eq!(
            dashboard.alert_summary().unwrap(),
            "Suggest to close store\n\nZurich: storm\n\nBerlin: holiday\n\n"
        );
    }

    #[test]
    fn test_missing_sales_forecast() {
        let mut dashboard = Dashboard::new(window());
        let err = dashboard.load_sales_forecast(None).unwrap_err();
        assert_eq!(err.to_string(), "No sales forecast available");
        assert!(dashboard.cities().is_empty());
    }

    #[test]
    fn test_select_city_shapes_sales() {
        let mut dashboard = loaded();
        dashboard.select_city(CitySelection::from_value("CityA"));
        let sales = dashboard.sales_chart().unwrap();
        assert_eq!(sales.labels, vec!["2024-01-01", "2024-01-02"]);
        assert_eq!(sales.values, vec![3.0, 5.0]);
    }

    #[test]
    fn test_first_selection_requests_weather_once() {
        let mut dashboard = loaded();
        let request = dashboard.select_city(CitySelection::from_value("CityA"));
        assert_eq!(
            request,
            Some(WeatherRequest {
                city: "CityA".to_string(),
                window: window(),
            })
        );
        assert!(dashboard.weather_chart().is_none());

        // Still in flight
        assert_eq!(dashboard.select_city(CitySelection::from_value("CityA")), None);

        dashboard.receive_weather(
            "CityA",
            vec![weather("2024-01-02", 1.0), weather("2024-01-01", 2.0)],
        );
        let chart = dashboard.weather_chart().unwrap();
        assert_eq!(chart.values, vec![2.0, 1.0]);
        assert_eq!(chart.y_axis_label.as_deref(), Some(WEATHER_Y_AXIS_LABEL));

        // Cached
        dashboard.select_city(CitySelection::None);
        assert_eq!(dashboard.select_city(CitySelection::from_value("CityA")), None);
        assert_eq!(dashboard.weather_chart().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_weather_is_cached() {
        let mut dashboard = loaded();
        assert!(dashboard
            .select_city(CitySelection::from_value("CityB"))
            .is_some());
        dashboard.receive_weather("CityB", Vec::new());
        assert_eq!(dashboard.cached_weather("CityB"), Some(&[][..]));
        assert!(dashboard
            .select_city(CitySelection::from_value("CityB"))
            .is_none());
        assert!(dashboard.weather_chart().unwrap().is_empty());
    }

    #[test]
    fn test_late_weather_does_not_replace_current_chart() {
        let mut dashboard = loaded();
        dashboard.select_city(CitySelection::from_value("CityA"));
        dashboard.select_city(CitySelection::from_value("CityB"));
        dashboard.receive_weather("CityB", vec![weather("2024-01-01", 9.0)]);
        dashboard.receive_weather("CityA", vec![weather("2024-01-01", 1.0)]);

        assert_eq!(dashboard.weather_chart().unwrap().values, vec![9.0]);
        assert_eq!(dashboard.cached_weather("CityA").unwrap().len(), 1);
    }

    #[test]
    fn test_failed_weather_is_requested_again() {
        let mut dashboard = loaded();
        assert!(dashboard
            .select_city(CitySelection::from_value("CityA"))
            .is_some());
        dashboard.weather_failed("CityA");
        assert!(dashboard
            .select_city(CitySelection::from_value("CityA"))
            .is_some());
    }

    #[test]
    fn test_select_none_clears_charts() {
        let mut dashboard = loaded();
        dashboard.select_city(CitySelection::from_value("CityA"));
        dashboard.receive_weather("CityA", vec![weather("2024-01-01", 1.0)]);
        assert!(dashboard.sales_chart().is_some());
        assert!(dashboard.weather_chart().is_some());

        assert_eq!(dashboard.select_city(CitySelection::from_value("none")), None);
        assert!(dashboard.sales_chart().is_none());
        assert!(dashboard.weather_chart().is_none());
        assert_eq!(dashboard.selection(), &CitySelection::None);
    }

    #[test]
    fn test_unknown_city_has_no_sales_chart() {
        let mut dashboard = loaded();
        let request = dashboard.select_city(CitySelection::from_value("CityZ"));
        assert!(dashboard.sales_chart().is_none());
        assert!(request.is_some());
    }

    #[test]
    fn test_selection_before_sales_forecast_loads() {
        let mut dashboard = Dashboard::new(window());
        assert!(dashboard
            .select_city(CitySelection::from_value("CityA"))
            .is_some());
        assert!(dashboard.sales_chart().is_none());
    }

    #[test]
    fn test_alert_summary() {
        let mut dashboard = loaded();
        assert!(!dashboard.has_alerts());
        assert_eq!(dashboard.alert_summary(), None);

        dashboard.load_alerts(None);
        assert!(!dashboard.has_alerts());

        let mut alerts = Alerts::new();
        alerts.insert("CityA".to_string(), vec!["storm".to_string()]);
        dashboard.load_alerts(Some(alerts));
        assert_eq!(
            dashboard.alert_summary().unwrap(),
            "Suggest to close store\n\nCityA: storm\n\n"
        );
    }
}
