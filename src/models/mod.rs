pub mod benchmark;
pub mod confidence;
pub mod holding;
pub mod lookback;
pub mod price_table;
pub mod provider;
pub mod report;

pub use benchmark::BenchmarkIndex;
pub use confidence::ConfidenceLevel;
pub use holding::Holding;
pub use lookback::Lookback;
pub use price_table::{PriceSeries, PriceTable, ReturnTable};
pub use provider::ApiProvider;
pub use report::{RiskMetrics, RiskReport};
