use strum_macros::{Display, EnumIter};

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, PartialEq)]
pub enum BenchmarkIndex {
    #[strum(serialize = "S&P 500")]
    Sp500,
    #[strum(serialize = "Dow Jones")]
    DowJones,
    #[strum(serialize = "FTSE 100")]
    Ftse100,
    #[strum(serialize = "Nikkei 225")]
    Nikkei225,
    #[strum(serialize = "Euro Stoxx 50")]
    EuroStoxx50,
    #[strum(serialize = "Nifty 50")]
    Nifty50,
}

impl BenchmarkIndex {
    pub fn symbol(&self) -> &'static str {
        match self {
            BenchmarkIndex::Sp500 => "^GSPC",
            BenchmarkIndex::DowJones => "^DJI",
            BenchmarkIndex::Ftse100 => "^FTSE",
            BenchmarkIndex::Nikkei225 => "^N225",
            BenchmarkIndex::EuroStoxx50 => "^STOXX50E",
            BenchmarkIndex::Nifty50 => "^NSEI",
        }
    }
}
