use std::collections::BTreeMap;

use anyhow::Result;
use reqwest::Client;

use super::{
    av_dto::AvDailyBarDto,
    utils::{make_request, parse_response_object},
};

const BASE_URL: &str = "https://www.alphavantage.co";

/// Daily adjusted series, keyed by date string ascending.
pub async fn get_daily_adjusted(
    symbol: &str,
    client: &Client,
    api_key: &str,
) -> Result<BTreeMap<String, AvDailyBarDto>> {
    let params = format!(
        "function=TIME_SERIES_DAILY_ADJUSTED&symbol={}&outputsize=full&apikey={}",
        symbol, api_key
    );
    let res = make_request(client, BASE_URL, "query", &params).await?;

    let series = res
        .get("Time Series (Daily)")
        .ok_or_else(|| anyhow::anyhow!("Failed to find 'Time Series (Daily)' in the response"))?;

    parse_response_object::<BTreeMap<String, AvDailyBarDto>>(
        series.clone(),
        &format!("No daily series for symbol {}", symbol),
    )
}
