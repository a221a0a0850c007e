use strum_macros::{Display, EnumIter};

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
pub enum ApiProvider {
    #[strum(serialize = "Financial Modeling Prep")]
    Fmp,
    #[strum(serialize = "Alpha Vantage")]
    AlphaVantage,
}
