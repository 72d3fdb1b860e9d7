//! Read-only client for the forecast API.
//!
//! Every call either returns parsed data or a "no data" sentinel. Transport
//! failures and non-success statuses both become the sentinel; only a body
//! that does not parse is reported as an error.

use crate::config::ApiConfig;
use crate::model::{Alerts, SalesForecast, WeatherSample};
use crate::window::ForecastWindow;
use log::{debug, warn};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::fmt;

/// The three API resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    SalesForecast,
    WeatherForecast,
    Alerts,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::SalesForecast => "salesforecast",
            // Spelling matches the deployed backend
            Endpoint::WeatherForecast => "wheatherforecast",
            Endpoint::Alerts => "alerts",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}

#[derive(Debug)]
pub enum FetchError {
    /// A successful response whose body is not the expected JSON.
    Decode {
        endpoint: Endpoint,
        source: serde_json::Error,
    },
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Decode { endpoint, source } => {
                write!(f, "Failed to parse {endpoint} response: {source}")
            }
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Decode { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: Client,
    config: ApiConfig,
}

impl ForecastClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(http: Client, config: ApiConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Full request URL including the `fromDate`/`toDate`/`city` query.
    pub fn request_url(
        &self,
        endpoint: Endpoint,
        window: &ForecastWindow,
        city: Option<&str>,
    ) -> Url {
        let mut url = self.config.endpoint(endpoint.path());
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("fromDate", &window.from_date());
            query.append_pair("toDate", &window.to_date());
            if let Some(city) = city {
                query.append_pair("city", city);
            }
        }
        url
    }

    /// Sales forecast for every city, or `None` when the API has none.
    pub async fn sales_forecast(
        &self,
        window: &ForecastWindow,
    ) -> Result<Option<SalesForecast>, FetchError> {
        let url = self.request_url(Endpoint::SalesForecast, window, None);
        match self.get_body(Endpoint::SalesForecast, url).await {
            Some(body) => decode(Endpoint::SalesForecast, &body).map(Some),
            None => Ok(None),
        }
    }

    /// Weather forecast for one city; empty when the API has none.
    pub async fn weather_forecast(
        &self,
        window: &ForecastWindow,
        city: &str,
    ) -> Result<Vec<WeatherSample>, FetchError> {
        let url = self.request_url(Endpoint::WeatherForecast, window, Some(city));
        match self.get_body(Endpoint::WeatherForecast, url).await {
            Some(body) => decode(Endpoint::WeatherForecast, &body),
            None => Ok(Vec::new()),
        }
    }

    /// Store-closure alerts for every city, or `None` when the API has none.
    pub async fn alerts(&self, window: &ForecastWindow) -> Result<Option<Alerts>, FetchError> {
        let url = self.request_url(Endpoint::Alerts, window, None);
        match self.get_body(Endpoint::Alerts, url).await {
            Some(body) => decode(Endpoint::Alerts, &body).map(Some),
            None => Ok(None),
        }
    }

    /// GET `url` and return the body of a successful response.
    async fn get_body(&self, endpoint: Endpoint, url: Url) -> Option<String> {
        debug!("GET {}", url);
        let response = match self.http.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Request to {} failed: {}", endpoint, e);
                return None;
            }
        };
        if !response.status().is_success() {
            warn!("Bad response status for {}: {}", endpoint, response.status());
            return None;
        }
        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                warn!("Failed to read response body for {}: {}", endpoint, e);
                None
            }
        }
    }
}

fn decode<T: DeserializeOwned>(endpoint: Endpoint, body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|source| FetchError::Decode { endpoint, source })
}
