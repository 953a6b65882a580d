// Core structs: Route, PriceQuery, AnalysisResult and the error taxonomy
use chrono::{Local, NaiveDate};
use std::fmt;
use thiserror::Error;

/// Observed prices for one route on one departure date.
pub type PriceSeries = Vec<f64>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub origin: String,
    pub destination: String,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.origin, self.destination)
    }
}

#[derive(Debug, Clone)]
pub struct PriceQuery {
    pub route: Route,
    pub departure_date: NaiveDate,
}

impl PriceQuery {
    pub fn new(route: Route, departure_date: NaiveDate) -> Self {
        Self { route, departure_date }
    }

    pub fn today(route: Route) -> Self {
        Self::new(route, Local::now().date_naive())
    }
}

/// Summary statistics and Z-score outliers for a price series.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Sample standard deviation (n - 1). Zero when `degenerate` is set.
    pub std_dev: f64,
    /// Outliers in input order.
    pub anomalies: Vec<f64>,
    /// Zero variance input: all prices identical or a single price.
    pub degenerate: bool,
}

impl AnalysisResult {
    pub fn note(&self) -> Option<&'static str> {
        self.degenerate
            .then_some("Standard deviation is zero (all prices are the same).")
    }

    pub fn anomalies_descending(&self) -> Vec<f64> {
        let mut sorted = self.anomalies.clone();
        sorted.sort_by(|a, b| b.total_cmp(a));
        sorted
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("route '{0}' must look like ORIGIN-DESTINATION, e.g. KBP-WAW")]
    RouteFormat(String),
    #[error("'{0}' is not a 3-letter IATA code")]
    InvalidCode(String),
    #[error("invalid departure date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
    #[error("no API key configured, set RAPIDAPI_KEY or api_key in the config file")]
    MissingApiKey,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("request timed out after {0}s")]
    Timeout(u64),
    #[error("API responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("malformed API response: {0}")]
    InvalidResponse(String),
    #[error("API returned no usable price data points")]
    NoPriceData,
}

#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("no price data available for analysis")]
    EmptyInput,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not retrieve price data for {route}: {source}")]
    Fetch { route: Route, source: FetchError },
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}
