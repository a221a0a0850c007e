use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::Client;
use rust_decimal::{Decimal, prelude::ToPrimitive};

use crate::{
    api::{av, fmp},
    models::{ApiProvider, PriceSeries},
};

pub fn parse_decimal(field: &str, field_name: &str) -> Result<Decimal> {
    field
        .trim()
        .parse::<Decimal>()
        .with_context(|| format!("Failed to parse {} '{}'", field_name, field))
}

/// Adjusted-close history for one symbol over [from, to], sorted ascending.
pub async fn fetch_price_series(
    symbol: &str,
    from: NaiveDate,
    to: NaiveDate,
    client: &Client,
    api: &ApiProvider,
) -> Result<PriceSeries> {
    match api {
        ApiProvider::Fmp => {
            let api_key = std::env::var("FMP_API_KEY")?;
            let bars = fmp::get_price_history(symbol, from, to, client, &api_key)
                .await
                .with_context(|| format!("FMP ({})", symbol))?;

            let mut points = Vec::with_capacity(bars.len());
            for bar in &bars {
                let close = bar.adj_close().to_f64().with_context(|| {
                    format!("FMP ({}): failed to convert close on {}", symbol, bar.date())
                })?;
                points.push((*bar.date(), close));
            }
            points.sort_by_key(|(date, _)| *date);

            Ok(PriceSeries::new(symbol.to_string(), points))
        }
        ApiProvider::AlphaVantage => {
            let api_key = std::env::var("ALPHA_VANTAGE_API_KEY")?;
            let bars = av::get_daily_adjusted(symbol, client, &api_key)
                .await
                .with_context(|| format!("Alpha Vantage ({})", symbol))?;

            let mut points = Vec::new();
            for (date_str, bar) in &bars {
                let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").with_context(|| {
                    format!("Alpha Vantage ({}): invalid date '{}'", symbol, date_str)
                })?;
                if date < from || date > to {
                    continue;
                }
                let close = bar.adjusted_close().parse::<f64>().with_context(|| {
                    format!(
                        "Alpha Vantage ({}): invalid close '{}' on {}",
                        symbol,
                        bar.adjusted_close(),
                        date_str
                    )
                })?;
                points.push((date, close));
            }

            Ok(PriceSeries::new(symbol.to_string(), points))
        }
    }
}
