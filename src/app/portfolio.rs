use anyhow::{Context, Error, Result};
use chrono::Local;
use csv::Reader;
use reqwest::Client;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use tracing::{info, warn};

use crate::{
    app::{calc, utils},
    error::AnalysisError,
    models::{
        ApiProvider, BenchmarkIndex, ConfidenceLevel, Holding, Lookback, PriceTable, RiskReport,
    },
};

const TRADING_PERIODS_PER_YEAR: f64 = 252.0;

/// Session state: the holdings list plus the run parameters. Owned by the
/// caller, only ever appended to, read once per run.
#[derive(Clone, Debug)]
pub struct Portfolio {
    holdings: Vec<Holding>,
    benchmark: BenchmarkIndex,
    lookback: Lookback,
    confidence: ConfidenceLevel,
    default_api: ApiProvider,
    risk_free_rate: f64,
    client: Client,
}

impl Portfolio {
    pub fn new(risk_free_rate: f64) -> Self {
        Self {
            holdings: Vec::new(),
            benchmark: BenchmarkIndex::Sp500,
            lookback: Lookback::ThreeMonths,
            confidence: ConfidenceLevel::NinetyFive,
            default_api: ApiProvider::Fmp,
            risk_free_rate,
            client: Client::new(),
        }
    }

    pub fn holdings(&self) -> &Vec<Holding> {
        &self.holdings
    }

    pub fn benchmark(&self) -> &BenchmarkIndex {
        &self.benchmark
    }

    pub fn lookback(&self) -> &Lookback {
        &self.lookback
    }

    pub fn confidence(&self) -> &ConfidenceLevel {
        &self.confidence
    }

    pub fn default_api(&self) -> &ApiProvider {
        &self.default_api
    }

    pub fn set_benchmark(&mut self, benchmark: BenchmarkIndex) {
        self.benchmark = benchmark;
    }

    pub fn set_lookback(&mut self, lookback: Lookback) {
        self.lookback = lookback;
    }

    pub fn set_confidence(&mut self, confidence: ConfidenceLevel) {
        self.confidence = confidence;
    }

    pub fn set_default_api(&mut self, api: ApiProvider) {
        self.default_api = api;
    }

    pub fn add_holding(&mut self, ticker: &str, avg_price: Decimal, quantity: Decimal) -> Result<()> {
        let symbol = ticker.trim().to_uppercase();
        if symbol.is_empty() {
            return Err(Error::msg("Ticker must not be empty"));
        }
        if avg_price <= Decimal::ZERO {
            return Err(Error::msg(format!(
                "Average price for {} must be positive",
                symbol
            )));
        }
        if quantity <= Decimal::ZERO || !quantity.is_integer() {
            return Err(Error::msg(format!(
                "Quantity for {} must be a positive whole number",
                symbol
            )));
        }

        self.holdings.push(Holding::new(symbol, avg_price, quantity));
        Ok(())
    }

    /// Loads holdings from a CSV file with a `ticker,avg_price,quantity`
    /// header row. Rows that fail validation are skipped with a warning.
    pub fn import_holdings(&mut self, path: &str) -> Result<usize> {
        let mut reader = Reader::from_path(path)
            .with_context(|| format!("Failed to open CSV file at path: {}", path))?;

        let mut imported = 0;
        for (row_idx, record) in reader.records().enumerate() {
            let rec = record
                .with_context(|| format!("Failed to read CSV record at row {}", row_idx + 1))?;

            if rec.len() < 3 {
                return Err(Error::msg(format!(
                    "Invalid CSV format at row {}: expected 3 columns, found {}",
                    row_idx + 1,
                    rec.len()
                )));
            }

            let avg_price = utils::parse_decimal(&rec[1], "average price")
                .with_context(|| format!("Row {}", row_idx + 1))?;
            let quantity = utils::parse_decimal(&rec[2], "quantity")
                .with_context(|| format!("Row {}", row_idx + 1))?;

            match self.add_holding(&rec[0], avg_price, quantity) {
                Ok(()) => imported += 1,
                Err(err) => {
                    warn!("Skipping row {}: {}", row_idx + 1, err);
                    continue;
                }
            }
        }

        info!("Imported {} holding(s) from {}", imported, path);
        Ok(imported)
    }

    pub fn total_value(&self) -> Decimal {
        self.holdings.iter().map(Holding::investment).sum()
    }

    /// Weight per ticker as a fraction of total value. Duplicate tickers are
    /// merged so the result can feed the aggregator directly; insertion
    /// order is preserved. Weights sum to 1 for any non-empty portfolio.
    pub fn weights(&self) -> Result<Vec<(String, Decimal)>, AnalysisError> {
        if self.holdings.is_empty() {
            return Err(AnalysisError::EmptyPortfolio);
        }

        let total = self.total_value();
        let mut weights: Vec<(String, Decimal)> = Vec::new();
        for holding in &self.holdings {
            let weight = holding.investment() / total;
            match weights.iter_mut().find(|(t, _)| t == holding.ticker()) {
                Some((_, merged)) => *merged += weight,
                None => weights.push((holding.ticker().clone(), weight)),
            }
        }

        Ok(weights)
    }

    /// One full analysis run: fetch histories, align, build returns,
    /// aggregate, fetch the benchmark, compute both metric sets. The
    /// portfolio itself is untouched by failures.
    pub async fn run_analysis(&self) -> Result<RiskReport, AnalysisError> {
        let weights = self.weights()?;

        let today = Local::now().date_naive();
        let from = self.lookback.start_date(today);

        info!(
            benchmark = %self.benchmark,
            lookback = %self.lookback,
            tickers = weights.len(),
            "starting analysis run"
        );

        let mut series = Vec::with_capacity(weights.len());
        for (ticker, _) in &weights {
            let fetched =
                utils::fetch_price_series(ticker, from, today, &self.client, &self.default_api)
                    .await
                    .map_err(|err| AnalysisError::DataRetrieval {
                        symbol: ticker.clone(),
                        reason: format!("{:#}", err),
                    })?;
            series.push(fetched);
        }

        let prices = PriceTable::align(&series);
        let returns = calc::build_return_table(&prices)?;

        let weight_vector: Vec<(String, f64)> = weights
            .iter()
            .map(|(ticker, weight)| (ticker.clone(), weight.to_f64().unwrap_or_default()))
            .collect();
        let portfolio_returns = calc::weighted_returns(&returns, &weight_vector)?;

        let bench_symbol = self.benchmark.symbol();
        let bench_fetched =
            utils::fetch_price_series(bench_symbol, from, today, &self.client, &self.default_api)
                .await
                .map_err(|err| AnalysisError::DataRetrieval {
                    symbol: bench_symbol.to_string(),
                    reason: format!("{:#}", err),
                })?;
        let bench_prices = PriceTable::align(std::slice::from_ref(&bench_fetched));
        let benchmark_returns = calc::build_return_table(&bench_prices)?.column(0);

        let exposure = self.total_value().to_f64().unwrap_or_default();
        let risk_free_period = self.risk_free_rate / TRADING_PERIODS_PER_YEAR;

        let portfolio_metrics =
            calc::risk_metrics(&portfolio_returns, risk_free_period, self.confidence, exposure);
        let benchmark_metrics =
            calc::risk_metrics(&benchmark_returns, risk_free_period, self.confidence, exposure);

        info!("analysis run finished");

        Ok(RiskReport::new(
            self.benchmark,
            self.confidence,
            self.total_value(),
            portfolio_metrics,
            benchmark_metrics,
            returns.dates().clone(),
            calc::cumulative_returns(&portfolio_returns),
            calc::cumulative_returns(&benchmark_returns),
        ))
    }
}
