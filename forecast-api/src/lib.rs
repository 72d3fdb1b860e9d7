//! Core types and HTTP client for the sales forecast dashboard.
//!
//! - `model`: wire types for sales forecasts, weather forecasts and alerts
//! - `window`: the 14-day forecast window and date helpers
//! - `config`: API base address configuration
//! - `client`: `ForecastClient`, the three read-only API calls
//! - `series`: shaping dated samples into `ChartSeries`
//! - `dashboard`: UI-independent controller state for the dashboard view

pub mod client;
pub mod config;
pub mod dashboard;
pub mod model;
pub mod series;
pub mod window;
