//! Reusable Dioxus RSX components for the forecast dashboard.

mod alerts_button;
mod chart_container;
mod chart_header;
mod city_selector;
mod loading_spinner;

pub use alerts_button::AlertsButton;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use city_selector::CitySelector;
pub use loading_spinner::LoadingSpinner;
