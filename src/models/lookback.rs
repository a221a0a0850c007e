use chrono::{Months, NaiveDate};
use strum_macros::{Display, EnumIter};

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
pub enum Lookback {
    #[strum(serialize = "1mo")]
    OneMonth,
    #[strum(serialize = "3mo")]
    ThreeMonths,
    #[strum(serialize = "6mo")]
    SixMonths,
    #[strum(serialize = "1y")]
    OneYear,
    #[strum(serialize = "2y")]
    TwoYears,
    #[strum(serialize = "5y")]
    FiveYears,
}

impl Lookback {
    fn months(&self) -> u32 {
        match self {
            Lookback::OneMonth => 1,
            Lookback::ThreeMonths => 3,
            Lookback::SixMonths => 6,
            Lookback::OneYear => 12,
            Lookback::TwoYears => 24,
            Lookback::FiveYears => 60,
        }
    }

    pub fn start_date(&self, today: NaiveDate) -> NaiveDate {
        today.checked_sub_months(Months::new(self.months()))
            .unwrap_or(NaiveDate::MIN)
    }
}
