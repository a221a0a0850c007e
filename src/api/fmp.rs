use anyhow::Result;
use chrono::NaiveDate;
use reqwest::Client;

use super::{
    fmp_dto::FmpEodBarDto,
    utils::{make_request, parse_response_array},
};

const BASE_URL: &str = "https://financialmodelingprep.com/stable";

pub async fn get_price_history(
    symbol: &str,
    from: NaiveDate,
    to: NaiveDate,
    client: &Client,
    api_key: &str,
) -> Result<Vec<FmpEodBarDto>> {
    let params = format!(
        "symbol={}&from={}&to={}&apikey={}",
        symbol,
        from.format("%Y-%m-%d"),
        to.format("%Y-%m-%d"),
        api_key
    );
    let res = make_request(client, BASE_URL, "historical-price-eod/dividend-adjusted", &params)
        .await?;

    parse_response_array::<FmpEodBarDto>(
        res,
        &format!("No price history for symbol {}", symbol),
    )
}
