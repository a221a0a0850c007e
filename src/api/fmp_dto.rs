use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct FmpEodBarDto {
    symbol: String,
    date: NaiveDate,
    adj_open: Decimal,
    adj_high: Decimal,
    adj_low: Decimal,
    adj_close: Decimal,
    volume: i64,
}
