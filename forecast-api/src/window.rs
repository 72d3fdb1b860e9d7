use chrono::{Days, NaiveDate, Utc};
use std::fmt;

/// Date format used for API query parameters and chart labels: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the forecast window in days.
pub const FORECAST_DAYS: u64 = 14;

/// The date range every forecast request is made for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ForecastWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ForecastWindow {
    /// Window of `FORECAST_DAYS` starting at `from`.
    pub fn starting(from: NaiveDate) -> Self {
        let to = from
            .checked_add_days(Days::new(FORECAST_DAYS))
            .unwrap_or(NaiveDate::MAX);
        Self { from, to }
    }

    /// Window starting today (UTC calendar day).
    pub fn from_today() -> Self {
        Self::starting(Utc::now().date_naive())
    }

    /// The `fromDate` query value.
    pub fn from_date(&self) -> String {
        format_date(&self.from)
    }

    /// The `toDate` query value.
    pub fn to_date(&self) -> String {
        format_date(&self.to)
    }
}

impl fmt::Display for ForecastWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from_date(), self.to_date())
    }
}

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|e| DateError(format!("{s:?}: {e}")))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateError(pub String);

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Date error: {}", self.0)
    }
}

impl std::error::Error for DateError {}
