// Price-graph API response decoding
use crate::model::{FetchError, PriceSeries};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct PriceGraphResponse {
    #[serde(default)]
    data: Option<Vec<PricePoint>>,
}

#[derive(Debug, Deserialize)]
struct PricePoint {
    #[serde(default)]
    price: Option<Value>,
}

/// Extracts the prices from a price-graph body, skipping points without one.
pub fn parse_price_graph(body: &str) -> Result<PriceSeries, FetchError> {
    let response: PriceGraphResponse =
        serde_json::from_str(body).map_err(|e| FetchError::InvalidResponse(e.to_string()))?;

    let prices = response
        .data
        .unwrap_or_default()
        .iter()
        .filter_map(|point| point.price.as_ref())
        .map(price_value)
        .collect::<Result<PriceSeries, _>>()?;

    if prices.is_empty() {
        return Err(FetchError::NoPriceData);
    }
    Ok(prices)
}

fn price_value(value: &Value) -> Result<f64, FetchError> {
    let price = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    price
        .filter(|p| p.is_finite())
        .ok_or_else(|| FetchError::InvalidResponse(format!("non-numeric price: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_prices_in_order() {
        let body = r#"{"data":[
            {"departure":"2025-01-01","price":120},
            {"departure":"2025-01-02","price":99.5},
            {"departure":"2025-01-03","price":"140.25"}
        ]}"#;
        assert_eq!(parse_price_graph(body).unwrap(), vec![120.0, 99.5, 140.25]);
    }

    #[test]
    fn skips_points_without_price() {
        let body = r#"{"data":[{"price":80},{"departure":"x"},{"price":null},{"price":95}]}"#;
        assert_eq!(parse_price_graph(body).unwrap(), vec![80.0, 95.0]);
    }

    #[test]
    fn no_usable_points_is_no_data() {
        for body in [
            r#"{"data":[]}"#,
            r#"{"status":true}"#,
            r#"{"data":null}"#,
            r#"{"data":[{"departure":"x"},{"price":null}]}"#,
        ] {
            assert!(
                matches!(parse_price_graph(body), Err(FetchError::NoPriceData)),
                "body {body}"
            );
        }
    }

    #[test]
    fn non_numeric_price_is_malformed() {
        let body = r#"{"data":[{"price":100},{"price":"cheap"}]}"#;
        assert!(matches!(
            parse_price_graph(body),
            Err(FetchError::InvalidResponse(_))
        ));
    }

    #[test]
    fn unparsable_body_is_malformed() {
        for body in ["<html>rate limited</html>", "[1,2,3]", r#"{"data":"nope"}"#] {
            assert!(
                matches!(parse_price_graph(body), Err(FetchError::InvalidResponse(_))),
                "body {body}"
            );
        }
    }
}
