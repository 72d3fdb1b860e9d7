//! Forecast CLI - Command line tool for querying the sales and weather forecast API.

use anyhow::Context;
use clap::Parser;
use forecast_api::client::ForecastClient;
use forecast_api::config::{ApiConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
use forecast_api::window::{parse_date, ForecastWindow};

#[derive(Parser)]
#[command(
    name = "forecast-cli",
    version,
    about = "Sales and weather forecast toolkit"
)]
struct Cli {
    /// Base address of the forecast API
    #[arg(long, global = true, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// First day of the 14-day forecast window (YYYY-MM-DD); defaults to today
    #[arg(long, global = true)]
    from: Option<String>,

    #[command(subcommand)]
    command: forecast_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = ApiConfig::new(&cli.base_url)?;
    let window = match cli.from.as_deref() {
        Some(from) => ForecastWindow::starting(parse_date(from).context("Invalid --from date")?),
        None => ForecastWindow::from_today(),
    };
    let client = ForecastClient::new(config);
    log::info!("Using {} for {}", client.config().base_url(), window);

    forecast_cmd::run(cli.command, &client, &window).await
}
