use crate::model::{FetchError, PriceQuery, PriceSeries};

#[async_trait::async_trait]
pub trait PriceFetcher: Send + Sync {
    async fn fetch(&self, req: &PriceQuery) -> Result<PriceSeries, FetchError>;
}
