use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One day of forecasted sales for a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesSample {
    #[serde(rename = "forecastedSalesQty")]
    pub forecasted_sales_qty: f64,
    /// Calendar day, "YYYY-MM-DD"
    pub date: String,
}

/// Sales forecast per city, as returned by `/salesforecast`.
/// Cities keep the order the server sent; samples arrive in no particular order.
pub type SalesForecast = IndexMap<String, Vec<SalesSample>>;

/// One day of forecasted temperature for a single city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    pub date: String,
    /// Degrees Celsius
    pub temperature: f64,
}

/// Store-closure suggestions per city, as returned by `/alerts`, in server order.
pub type Alerts = IndexMap<String, Vec<String>>;

pub const ALERT_SUMMARY_HEADING: &str = "Suggest to close store";

/// Joins every city's alert reasons into one message for display.
pub fn alert_summary(alerts: &Alerts) -> String {
    let mut summary = format!("{ALERT_SUMMARY_HEADING}\n\n");
    for (city, reasons) in alerts {
        summary.push_str(&format!("{}: {}\n\n", city, reasons.join(",")));
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALES_JSON: &str = r#"{
        "Berlin": [
            {"forecastedSalesQty": 120, "date": "2024-01-02"},
            {"forecastedSalesQty": 98.5, "date": "2024-01-01"}
        ],
        "Hamburg": []
    }"#;

    #[test]
    fn test_sales_forecast_from_json() {
        let forecast: SalesForecast = serde_json::from_str(SALES_JSON).unwrap();
        assert_eq!(forecast.len(), 2);
        assert_eq!(
            forecast["Berlin"][1],
            SalesSample {
                forecasted_sales_qty: 98.5,
                date: "2024-01-01".to_string(),
            }
        );
        assert!(forecast["Hamburg"].is_empty());
    }

    #[test]
    fn test_sales_sample_keeps_wire_name() {
        let sample = SalesSample {
            forecasted_sales_qty: 3.0,
            date: "2024-01-01".to_string(),
        };
        let json = serde_json::to_value(&sample).unwrap();
        assert_eq!(json["forecastedSalesQty"], 3.0);
    }

    #[test]
    fn test_weather_forecast_from_json() {
        let json = r#"[{"date": "2024-01-01", "temperature": -2.5}]"#;
        let weather: Vec<WeatherSample> = serde_json::from_str(json).unwrap();
        assert_eq!(weather[0].temperature, -2.5);
    }

    #[test]
    fn test_alert_summary() {
        let alerts: Alerts = serde_json::from_str(
            r#"{"Munich": ["2024-01-03 storm"], "Berlin": ["2024-01-01 holiday", "2024-01-02 snow"]}"#,
        )
        .unwrap();
        assert_eq!(
            alert_summary(&alerts),
            "Suggest to close store\n\n\
             Munich: 2024-01-03 storm\n\n\
             Berlin: 2024-01-01 holiday,2024-01-02 snow\n\n"
        );
    }

    #[test]
    fn test_cities_keep_server_order() {
        let forecast: SalesForecast = serde_json::from_str(
            r#"{"Zurich": [], "Berlin": [], "Amsterdam": []}"#,
        )
        .unwrap();
        let cities: Vec<&str> = forecast.keys().map(String::as_str).collect();
        assert_eq!(cities, vec!["Zurich", "Berlin", "Amsterdam"]);
    }

    #[test]
    fn test_alert_summary_without_alerts() {
        assert_eq!(alert_summary(&Alerts::new()), "Suggest to close store\n\n");
    }
}
