use crate::output::{write_series, OutputFormat};
use anyhow::{bail, Context};
use forecast_api::client::ForecastClient;
use forecast_api::dashboard::{Dashboard, SalesForecastUnavailable};
use forecast_api::model::SalesForecast;
use forecast_api::series::{sales_series, weather_series};
use forecast_api::window::ForecastWindow;
use log::info;
use std::io::Write;

const SALES_HEADER: &str = "forecasted_sales_qty";
const WEATHER_HEADER: &str = "temperature";

/// Fetch the sales forecast, failing when there is none.
async fn load_sales_forecast(
    client: &ForecastClient,
    window: &ForecastWindow,
) -> anyhow::Result<SalesForecast> {
    info!("Fetching sales forecast for {}", window);
    let forecast = client
        .sales_forecast(window)
        .await
        .context("Failed to fetch sales forecast")?;
    Ok(forecast.ok_or(SalesForecastUnavailable)?)
}

/// Print the sales series for `city`, or for every city in forecast order.
pub async fn run_sales(
    client: &ForecastClient,
    window: &ForecastWindow,
    city: Option<&str>,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let mut forecast = load_sales_forecast(client, window).await?;
    let cities: Vec<String> = match city {
        Some(city) => vec![city.to_string()],
        None => forecast.keys().cloned().collect(),
    };

    for city in cities {
        let Some(series) = sales_series(&mut forecast, &city) else {
            bail!("No sales forecast for {}", city);
        };
        if format == OutputFormat::Table {
            writeln!(out, "== {}", city)?;
        }
        write_series(&mut *out, &series, SALES_HEADER, format)?;
    }
    Ok(())
}

pub async fn run_weather(
    client: &ForecastClient,
    window: &ForecastWindow,
    city: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    info!("Fetching weather forecast for {}", city);
    let mut samples = client
        .weather_forecast(window, city)
        .await
        .with_context(|| format!("Failed to fetch weather forecast for {}", city))?;
    if samples.is_empty() {
        log::warn!("No weather forecast for {}", city);
    }
    write_series(out, &weather_series(&mut samples), WEATHER_HEADER, format)
}

pub async fn run_alerts(
    client: &ForecastClient,
    window: &ForecastWindow,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    info!("Fetching alerts for {}", window);
    let alerts = client
        .alerts(window)
        .await
        .context("Failed to fetch alerts")?;
    let mut dashboard = Dashboard::new(*window);
    dashboard.load_alerts(alerts);
    match dashboard.alert_summary() {
        Some(summary) => write!(out, "{}", summary)?,
        None => writeln!(out, "No alerts available")?,
    }
    Ok(())
}

pub async fn run_cities(
    client: &ForecastClient,
    window: &ForecastWindow,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let forecast = load_sales_forecast(client, window).await?;
    for city in forecast.keys() {
        writeln!(out, "{}", city)?;
    }
    Ok(())
}
