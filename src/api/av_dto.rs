use derive_getters::Getters;
use derive_new::new;
use serde::Deserialize;

#[derive(Debug, Deserialize, Getters, new)]
pub struct AvDailyBarDto {
    #[serde(rename = "1. open")]
    open: String,
    #[serde(rename = "2. high")]
    high: String,
    #[serde(rename = "3. low")]
    low: String,
    #[serde(rename = "4. close")]
    close: String,
    #[serde(rename = "5. adjusted close")]
    adjusted_close: String,
    #[serde(rename = "6. volume")]
    volume: String,
    #[serde(rename = "7. dividend amount")]
    dividend_amount: String,
    #[serde(rename = "8. split coefficient")]
    split_coefficient: String,
}
