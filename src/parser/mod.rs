// Input parsing: the --route argument and the price-graph API body.

pub mod price_graph;
pub mod route;

pub use price_graph::parse_price_graph;
pub use route::parse_route;
