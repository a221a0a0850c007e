use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

use super::{BenchmarkIndex, ConfidenceLevel};

/// Scalar risk/return metrics for one return series. Degenerate values
/// (zero or undefined denominators) are carried as `None`, never NaN.
#[derive(Clone, Copy, Debug, Getters, new)]
pub struct RiskMetrics {
    mean: f64,
    std_dev: Option<f64>,
    sharpe: Option<f64>,
    sortino: Option<f64>,
    value_at_risk: Option<f64>,
}

/// Result of one analysis run, recomputed from scratch every time.
#[derive(Clone, Debug, Getters, new)]
pub struct RiskReport {
    benchmark_index: BenchmarkIndex,
    confidence: ConfidenceLevel,
    total_value: Decimal,
    portfolio: RiskMetrics,
    benchmark: RiskMetrics,
    dates: Vec<NaiveDate>,
    portfolio_cumulative: Vec<f64>,
    benchmark_cumulative: Vec<f64>,
}
