use crate::config::AppConfig;
use crate::fetcher::PriceFetcher;
use crate::model::{FetchError, PriceQuery, PriceSeries};
use crate::parser::parse_price_graph;

use reqwest::Client;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, warn};

const MAX_ERROR_BODY: usize = 200;

/// Fetches one-way price-graph data points over HTTP.
pub struct PriceGraphFetcher {
    client: Client,
    endpoint: String,
    api_key: String,
    api_host: String,
    timeout: Duration,
}

impl PriceGraphFetcher {
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("flight-sniper/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
            timeout: config.timeout(),
        })
    }

    fn query_params(req: &PriceQuery) -> [(&'static str, String); 3] {
        [
            ("departureId", req.route.origin.clone()),
            ("arrivalId", req.route.destination.clone()),
            ("departureDate", req.departure_date.format("%Y-%m-%d").to_string()),
        ]
    }

    async fn fetch_body(&self, req: &PriceQuery) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&Self::query_params(req))
            .header("x-rapidapi-key", &self.api_key)
            .header("x-rapidapi-host", &self.api_host)
            .send()
            .await
            .map_err(|e| FetchError::HttpError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "unknown".into());
            warn!("❌ Price graph API responded [{}]", status);
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::HttpError(e.to_string()))
    }
}

#[async_trait::async_trait]
impl PriceFetcher for PriceGraphFetcher {
    async fn fetch(&self, req: &PriceQuery) -> Result<PriceSeries, FetchError> {
        info!(
            "✈️ Fetching prices for {} starting {}...",
            req.route, req.departure_date
        );

        let body = match timeout(self.timeout, self.fetch_body(req)).await {
            Ok(result) => result?,
            Err(_) => {
                warn!("⏳ Price graph request timed out");
                return Err(FetchError::Timeout(self.timeout.as_secs()));
            }
        };

        let prices = parse_price_graph(&body)?;
        info!("✅ Received {} price points", prices.len());
        Ok(prices)
    }
}
