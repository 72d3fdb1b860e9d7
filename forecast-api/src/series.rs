//! Shaping dated samples into chart input.
//!
//! A `ChartSeries` holds two parallel vectors: date labels and values, both
//! ordered by date ascending. Dates are "YYYY-MM-DD" strings, so plain string
//! comparison orders them chronologically.

use crate::model::{SalesForecast, SalesSample, WeatherSample};
use serde::Serialize;

/// Y-axis title for the weather chart.
///
/// This does not match the weather chart heading, which reports degrees
/// Celsius. Left as is until the intended unit is confirmed.
pub const WEATHER_Y_AXIS_LABEL: &str = "seconds";

/// A sample with a calendar-day date and a numeric value.
pub trait DatedSample {
    fn date(&self) -> &str;
    fn value(&self) -> f64;
}

impl DatedSample for SalesSample {
    fn date(&self) -> &str {
        &self.date
    }

    fn value(&self) -> f64 {
        self.forecasted_sales_qty
    }
}

impl DatedSample for WeatherSample {
    fn date(&self) -> &str {
        &self.date
    }

    fn value(&self) -> f64 {
        self.temperature
    }
}

/// Chart-ready labels and values, index-aligned.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_label: Option<String>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn with_y_axis_label(mut self, label: &str) -> Self {
        self.y_axis_label = Some(label.to_string());
        self
    }

    /// `(label, value)` pairs in chart order.
    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

/// Sorts `samples` in place by date and projects them into a series.
///
/// The sort is stable: samples sharing a date keep their relative order.
pub fn shape<S: DatedSample>(samples: &mut [S]) -> ChartSeries {
    samples.sort_by(|a, b| a.date().cmp(b.date()));
    let (labels, values): (Vec<String>, Vec<f64>) = samples
        .iter()
        .map(|s| (s.date().to_string(), s.value()))
        .unzip();
    ChartSeries {
        labels,
        values,
        y_axis_label: None,
    }
}

/// Sales series for `city`, or `None` when the forecast has no entry for it.
pub fn sales_series(forecast: &mut SalesForecast, city: &str) -> Option<ChartSeries> {
    forecast.get_mut(city).map(|samples| shape(samples))
}

pub fn weather_series(samples: &mut [WeatherSample]) -> ChartSeries {
    shape(samples).with_y_axis_label(WEATHER_Y_AXIS_LABEL)
}
