//! Command implementations for the forecast CLI.
//!
//! Provides subcommands for printing the shaped sales and weather series,
//! the store-closure alerts and the list of known cities.

use clap::Subcommand;
use forecast_api::client::ForecastClient;
use forecast_api::window::ForecastWindow;

pub mod output;
pub mod query;

use output::OutputFormat;

#[derive(Subcommand)]
pub enum Command {
    /// Print the sales forecast series for one city, or for every city
    Sales {
        /// City to print; all cities when omitted
        #[arg(short, long)]
        city: Option<String>,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Print the weather forecast series for a city
    Weather {
        #[arg(short, long)]
        city: String,

        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Print the store-closure suggestions for every city
    Alerts,

    /// List the cities covered by the sales forecast
    Cities,
}

pub async fn run(
    command: Command,
    client: &ForecastClient,
    window: &ForecastWindow,
) -> anyhow::Result<()> {
    let mut out = std::io::stdout();
    match command {
        Command::Sales { city, format } => {
            query::run_sales(client, window, city.as_deref(), format, &mut out).await
        }
        Command::Weather { city, format } => {
            query::run_weather(client, window, &city, format, &mut out).await
        }
        Command::Alerts => query::run_alerts(client, window, &mut out).await,
        Command::Cities => query::run_cities(client, window, &mut out).await,
    }
}
