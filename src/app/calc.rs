use crate::error::AnalysisError;
use crate::models::{ConfidenceLevel, PriceTable, ReturnTable, RiskMetrics};

/// Period-over-period fractional returns for every ticker column.
/// A single price row cannot produce a return, so fewer than 2 aligned
/// rows is an error.
pub fn build_return_table(prices: &PriceTable) -> Result<ReturnTable, AnalysisError> {
    if prices.row_count() < 2 {
        return Err(AnalysisError::InsufficientHistory {
            rows: prices.row_count(),
        });
    }

    let dates = prices.dates()[1..].to_vec();
    let rows = prices
        .rows()
        .windows(2)
        .map(|pair| {
            pair[0]
                .iter()
                .zip(pair[1].iter())
                .map(|(prev, curr)| (curr - prev) / prev)
                .collect()
        })
        .collect();

    Ok(ReturnTable::new(prices.tickers().clone(), dates, rows))
}

/// Dot product of each date row with the weight vector. Every weighted
/// ticker must have a column in the return table; columns without a weight
/// are ignored.
pub fn weighted_returns(
    returns: &ReturnTable,
    weights: &[(String, f64)],
) -> Result<Vec<f64>, AnalysisError> {
    let mut columns = Vec::with_capacity(weights.len());
    for (ticker, weight) in weights {
        let index = returns
            .column_index(ticker)
            .ok_or_else(|| AnalysisError::MissingTicker(ticker.clone()))?;
        columns.push((index, *weight));
    }

    Ok(returns
        .rows()
        .iter()
        .map(|row| columns.iter().map(|(i, w)| row[*i] * w).sum())
        .collect())
}

pub fn mean(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    series.iter().sum::<f64>() / series.len() as f64
}

/// Sample standard deviation (n - 1 denominator). Undefined below 2
/// observations.
pub fn sample_std(series: &[f64]) -> Option<f64> {
    if series.len() < 2 {
        return None;
    }
    let m = mean(series);
    let variance =
        series.iter().map(|x| (x - m).powi(2)).sum::<f64>() / (series.len() as f64 - 1.0);
    Some(variance.sqrt())
}

/// Running product of (1 + r), starting from a base of 1.0.
pub fn cumulative_returns(series: &[f64]) -> Vec<f64> {
    let mut growth = 1.0;
    series
        .iter()
        .map(|r| {
            growth *= 1.0 + r;
            growth
        })
        .collect()
}

/// All metrics for one return series. `exposure` is the currency amount the
/// Value at Risk applies to. Zero or undefined denominators surface as
/// `None`, never as NaN or infinity.
pub fn risk_metrics(
    series: &[f64],
    risk_free_period: f64,
    confidence: ConfidenceLevel,
    exposure: f64,
) -> RiskMetrics {
    let mean_return = mean(series);
    let std_dev = sample_std(series);
    let excess = mean_return - risk_free_period;

    let sharpe = std_dev.filter(|s| *s > 0.0).map(|s| excess / s);

    let downside: Vec<f64> = series.iter().copied().filter(|r| *r < 0.0).collect();
    let sortino = sample_std(&downside).filter(|s| *s > 0.0).map(|s| excess / s);

    let value_at_risk = std_dev.map(|s| confidence.z_score() * s * exposure);

    RiskMetrics::new(mean_return, std_dev, sharpe, sortino, value_at_risk)
}
