use crate::model::{AnalysisError, AnalysisResult};
use tracing::debug;

/// Prices further than this many standard deviations from the mean are anomalies.
pub const Z_SCORE_THRESHOLD: f64 = 2.0;

/// Computes min, max, mean and sample standard deviation, then flags every
/// price whose Z-score exceeds [`Z_SCORE_THRESHOLD`].
///
/// Anomalies are returned in input order; sorting is left to the caller.
/// Zero variance input (identical prices, or a single price) yields a
/// degenerate result with `std_dev == 0.0` and no anomalies.
pub fn analyze(prices: &[f64]) -> Result<AnalysisResult, AnalysisError> {
    if prices.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let count = prices.len();
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    // Moments are taken on prices divided by the largest magnitude so that
    // sums stay finite for prices near f64::MAX.
    let scale = min.abs().max(max.abs());
    let scaled: Vec<f64> = if scale > 0.0 {
        prices.iter().map(|p| p / scale).collect()
    } else {
        prices.to_vec()
    };
    let scaled_mean = mean(&scaled);
    let scaled_std_dev = sample_std_dev(&scaled);

    if count < 2 || min == max || scaled_std_dev == 0.0 {
        debug!("Zero variance across {} prices, skipping Z-score check", count);
        return Ok(AnalysisResult {
            count,
            min,
            max,
            mean: if min == max { min } else { (scaled_mean * scale).clamp(min, max) },
            std_dev: 0.0,
            anomalies: Vec::new(),
            degenerate: true,
        });
    }

    let anomalies: Vec<f64> = prices
        .iter()
        .zip(&scaled)
        .filter(|&(_, &s)| z_score(s, scaled_mean, scaled_std_dev) > Z_SCORE_THRESHOLD)
        .map(|(&p, _)| p)
        .collect();

    let mean = (scaled_mean * scale).clamp(min, max);
    let std_dev = scaled_std_dev * scale;

    debug!(
        "Analyzed {} prices: mean = {:.2}, std_dev = {:.2}, {} anomalies",
        count,
        mean,
        std_dev,
        anomalies.len()
    );

    Ok(AnalysisResult {
        count,
        min,
        max,
        mean,
        std_dev,
        anomalies,
        degenerate: false,
    })
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation with the n - 1 denominator; zero below two values.
fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values
        .iter()
        .map(|v| (v - avg).powi(2))
        .sum::<f64>()
        / (values.len() as f64 - 1.0);
    variance.sqrt()
}

fn z_score(value: f64, mean: f64, std_dev: f64) -> f64 {
    ((value - mean) / std_dev).abs()
}
