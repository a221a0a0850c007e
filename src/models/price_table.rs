use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;

#[derive(Clone, Debug, Getters, new)]
pub struct PriceSeries {
    ticker: String,
    points: Vec<(NaiveDate, f64)>,
}

/// Adjusted closes for a set of tickers on a shared date index.
/// `rows[i][j]` is the close of `tickers[j]` on `dates[i]`.
#[derive(Clone, Debug, Getters, new)]
pub struct PriceTable {
    tickers: Vec<String>,
    dates: Vec<NaiveDate>,
    rows: Vec<Vec<f64>>,
}

impl PriceTable {
    /// Strict alignment: a date missing for any ticker is dropped for all
    /// tickers. Aligning an already-aligned table changes nothing.
    pub fn align(series: &[PriceSeries]) -> Self {
        if series.is_empty() {
            return Self::new(Vec::new(), Vec::new(), Vec::new());
        }

        let maps: Vec<BTreeMap<NaiveDate, f64>> = series
            .iter()
            .map(|s| s.points().iter().copied().collect())
            .collect();

        let mut common: BTreeSet<NaiveDate> = maps[0].keys().copied().collect();
        for map in &maps[1..] {
            common.retain(|date| map.contains_key(date));
        }

        let dates: Vec<NaiveDate> = common.into_iter().collect();
        let rows = dates
            .iter()
            .map(|date| maps.iter().map(|map| map[date]).collect())
            .collect();
        let tickers = series.iter().map(|s| s.ticker().clone()).collect();

        Self::new(tickers, dates, rows)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Period-over-period fractional returns, one row per date after the first.
#[derive(Clone, Debug, Getters, new)]
pub struct ReturnTable {
    tickers: Vec<String>,
    dates: Vec<NaiveDate>,
    rows: Vec<Vec<f64>>,
}

impl ReturnTable {
    pub fn column_index(&self, ticker: &str) -> Option<usize> {
        self.tickers.iter().position(|t| t == ticker)
    }

    /// Single column as a flat series (used for the benchmark).
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row[index]).collect()
    }
}
