pub mod price_graph;
pub mod traits;

pub use price_graph::PriceGraphFetcher;
pub use traits::PriceFetcher;
